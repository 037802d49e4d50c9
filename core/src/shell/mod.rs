//! Contract for running external processes.
//!
//! The concrete process-spawning executor lives in the plugins crate; this module
//! only describes what gets run and how failures are reported.

#[cfg(test)]
pub(crate) mod testing;
mod traits;
mod types;

pub use traits::{exit_status, ShellExecutor};
pub use types::ShellCommand;
