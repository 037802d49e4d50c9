mod dry_run;
mod process;

pub use dry_run::DryRunShell;
pub use process::ProcessShell;
