//! sssd-test-suite CLI: actors, the command registry and dispatch.

pub mod actor;
pub mod app;
pub mod commands;
pub mod logging;
pub mod registry;
