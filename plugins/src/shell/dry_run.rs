use std::sync::Arc;

use async_trait::async_trait;
use sssd_suite_core::api::{Console, ShellCommand, ShellError, ShellExecutor};

/// Prints what would be run and reports success without running anything.
pub struct DryRunShell {
    console: Arc<dyn Console>,
}

impl DryRunShell {
    pub fn new(console: Arc<dyn Console>) -> Self {
        Self { console }
    }
}

#[async_trait]
impl ShellExecutor for DryRunShell {
    fn name(&self) -> &str {
        "dry-run"
    }

    async fn run(&self, cmd: &ShellCommand) -> Result<i32, ShellError> {
        let env = cmd
            .env
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(" ");
        let prefix = if cmd.clear_env { "env -i " } else { "" };
        let line = if env.is_empty() {
            format!("[dry-run] {}", cmd.display())
        } else {
            format!("[dry-run] {prefix}{env} {}", cmd.display())
        };
        self.console.message(&line);
        Ok(0)
    }
}
