use std::path::Path;

use sssd_suite_core::api::{AppContext, SuiteError};

mod boxes;
mod provision;
mod vagrant;

pub use boxes::PruneBoxActor;
pub use provision::{ProvisionActor, ProvisionArgs, ProvisionStage};
pub use run_tests::{RunTestsActor, RunTestsArgs};
pub use vagrant::{GuestArgs, GuestClass, VagrantCommandActor, VagrantExternalCommandActor};

/// `mkdir -p` on the host, or only a `[dry-run]` line when nothing may change.
pub(crate) async fn create_dir_all(ctx: &AppContext, path: &Path) -> Result<(), SuiteError> {
    if ctx.dry_run() {
        ctx.console()
            .message(&format!("[dry-run] mkdir -p {}", path.display()));
        return Ok(());
    }
    tokio::fs::create_dir_all(path).await?;
    Ok(())
}
