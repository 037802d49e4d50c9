pub mod shell;

pub use shell::{DryRunShell, ProcessShell};
