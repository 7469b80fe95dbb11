//! # daydusk-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `ExecutableLocator` — find the external command run by every job
//!   - `JobWriter` — persist compiled jobs in a scheduler's format
//! - Compile validated schedules into job descriptors (`compiler`), including
//!   shell-safe command lines (`shell`)
//! - Orchestrate validate → locate → compile → write (`services`)
//!
//! ## Dependency rule
//! Depends on `daydusk-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod compiler;
pub mod ports;
pub mod services;
pub mod shell;
