//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside
//! world: the filesystem lookup of the external command and the scheduler
//! file the compiled jobs end up in.

pub mod executable;
pub mod job_writer;

pub use executable::ExecutableLocator;
pub use job_writer::JobWriter;
