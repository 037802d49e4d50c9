use async_trait::async_trait;

use crate::error::ShellError;

use super::{ShellCommand, ShellExecutor};

/// Accepts every command without running it.
pub(crate) struct NoopShell;

#[async_trait]
impl ShellExecutor for NoopShell {
    fn name(&self) -> &str {
        "noop"
    }

    async fn run(&self, _cmd: &ShellCommand) -> Result<i32, ShellError> {
        Ok(0)
    }
}
