//! # daydusk-domain
//!
//! Pure domain model for the daydusk schedule compiler.
//!
//! ## Responsibilities
//! - Value validators: bounded ranges, power state, device references,
//!   days of week, task selection, theme colours
//! - The **Schedule** model and its derived views (effective days, colour
//!   payload, extra payload)
//! - The **Schedule Collection** (non-empty, order-preserving)
//! - **Job Descriptors**, the compiled form handed to a scheduler
//! - Error types with stable categories
//!
//! ## Dependency rule
//! This crate has **no internal dependencies** and performs no IO.
//! Locating executables and writing files are ports in the `app` crate.

pub mod error;
pub mod range;

pub mod collection;
pub mod color;
pub mod day;
pub mod job;
pub mod payload;
pub mod power;
pub mod reference;
pub mod schedule;
pub mod task;
