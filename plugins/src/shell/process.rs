use std::process::Stdio;

use async_trait::async_trait;
use sssd_suite_core::api::{exit_status, ShellCommand, ShellError, ShellExecutor};
use tokio::process::Command;

/// Spawns the command as a child process with inherited stdio and waits for it.
///
/// Stdio is inherited so interactive sessions (`ssh`, `rdp`, become password
/// prompts) reach the user's terminal.
pub struct ProcessShell {}

impl ProcessShell {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for ProcessShell {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ShellExecutor for ProcessShell {
    fn name(&self) -> &str {
        "process"
    }

    async fn run(&self, cmd: &ShellCommand) -> Result<i32, ShellError> {
        let Some(program) = cmd.program() else {
            return Err(ShellError::Spawn {
                command: String::new(),
                message: "empty command".to_string(),
            });
        };

        let mut child = Command::new(program);
        child.args(cmd.args());
        if cmd.clear_env {
            child.env_clear();
        }
        child.envs(&cmd.env);
        if let Some(dir) = &cmd.cwd {
            child.current_dir(dir);
        }

        let status = child
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| ShellError::Spawn {
                command: cmd.display(),
                message: e.to_string(),
            })?;

        tracing::debug!(command = %cmd.display(), code = ?status.code(), "process exited");
        exit_status(cmd, status.code())
    }
}
