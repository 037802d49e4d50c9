use async_trait::async_trait;

use crate::error::ShellError;

use super::types::ShellCommand;

/// Runs external processes and waits for them to finish.
///
/// Implementations must block the caller until the process exits; the harness
/// never has two processes in flight.
#[async_trait]
pub trait ShellExecutor: Send + Sync {
    fn name(&self) -> &str;

    /// Returns `Ok(0)` on success and [`ShellError::Exit`] for any nonzero status.
    async fn run(&self, cmd: &ShellCommand) -> Result<i32, ShellError>;
}

/// Converts a raw exit status into the executor result.
/// `None` stands for termination by signal.
pub fn exit_status(cmd: &ShellCommand, code: Option<i32>) -> Result<i32, ShellError> {
    match code {
        Some(0) => Ok(0),
        Some(code) => Err(ShellError::Exit {
            code,
            command: cmd.display(),
        }),
        None => Err(ShellError::Exit {
            code: -1,
            command: cmd.display(),
        }),
    }
}
