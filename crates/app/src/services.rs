//! Application services (use-cases).

pub mod crontab_service;
