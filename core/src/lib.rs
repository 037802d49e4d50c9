//! Core of the SSSD test suite harness.
//!
//! The harness drives a fleet of virtual guests through an external hypervisor
//! tool and a configuration-management tool. This crate holds everything that
//! has actual control flow in it:
//!
//! ```text
//! Actor (cli crate)
//!   ↓ builds
//! TaskList { Task, Task, ... }      executor/
//!   ↓ each handler calls
//! GuestTargeting / AnsibleBackend   guest/, backend/
//!   ↓
//! ShellExecutor::run(ShellCommand)  shell/
//! ```

pub mod api;
pub mod backend;
pub mod config;
pub mod context;
pub mod error;
pub mod executor;
pub mod guest;
pub mod shell;
pub mod suite;
