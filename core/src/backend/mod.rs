//! Command builders for the external tools the harness drives.
//!
//! Both backends only decide argv and environment; running goes through the
//! [`crate::shell::ShellExecutor`] they were built with.

mod ansible;
mod vagrant;

pub use ansible::{AnsibleBackend, PlaybookRun, ANSIBLE_SSH_ARGS};
pub use vagrant::{VagrantBackend, VagrantInvocation};
