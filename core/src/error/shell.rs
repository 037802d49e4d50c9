use thiserror::Error;

/// Failure of an external process started through a [`crate::shell::ShellExecutor`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// The process ran and terminated with a nonzero status.
    /// `code` is `-1` when the process was killed by a signal.
    #[error("command `{command}` exited with code {code}")]
    Exit { code: i32, command: String },

    #[error("failed to start `{command}`: {message}")]
    Spawn { command: String, message: String },
}

impl ShellError {
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Exit { code, .. } => Some(*code),
            Self::Spawn { .. } => None,
        }
    }

    pub fn command(&self) -> &str {
        match self {
            Self::Exit { command, .. } | Self::Spawn { command, .. } => command,
        }
    }
}
