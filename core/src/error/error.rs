use thiserror::Error;

use super::shell::ShellError;

#[derive(Error, Debug)]
pub enum SuiteError {
    #[error(transparent)]
    Shell(#[from] ShellError),
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Configuration(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// An error that unwound through one or more task lists.
    ///
    /// Displays as the original error; `list` is the outermost list seen so far
    /// and `path` the failing task names from there inwards.
    #[error("{source}")]
    Step {
        list: Option<String>,
        path: String,
        #[source]
        source: Box<SuiteError>,
    },
}

impl SuiteError {
    /// Stable name of the error kind, printed next to the message in task reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Shell(_) => "ShellError",
            Self::Usage(_) => "UsageError",
            Self::Configuration(_) => "ConfigurationError",
            Self::Io(_) => "IoError",
            Self::Step { source, .. } => source.kind(),
        }
    }

    /// Process exit code for this error.
    ///
    /// Shell failures propagate the external tool's own code so callers of the
    /// harness see what vagrant or ansible returned.
    pub fn exit_code(&self) -> i32 {
        // 2: usage error
        // 11: configuration error
        // 20: spawn / IO error
        match self {
            Self::Shell(ShellError::Exit { code, .. }) if *code > 0 && *code < 256 => *code,
            Self::Shell(ShellError::Exit { .. }) => 1,
            Self::Shell(ShellError::Spawn { .. }) => 20,
            Self::Usage(_) => 2,
            Self::Configuration(_) => 11,
            Self::Io(_) => 20,
            Self::Step { source, .. } => source.exit_code(),
        }
    }

    /// The error as it was first raised, below any task list context.
    pub fn root(&self) -> &SuiteError {
        match self {
            Self::Step { source, .. } => source.root(),
            other => other,
        }
    }

    /// Qualified name of the failing step, e.g. `Test Case / ldap / Run`.
    pub fn step(&self) -> Option<String> {
        match self {
            Self::Step {
                list: Some(list),
                path,
                ..
            } => Some(format!("{list} / {path}")),
            Self::Step { list: None, path, .. } => Some(path.clone()),
            _ => None,
        }
    }

    /// Records that this error escaped task `task` of list `list`.
    pub fn in_step(self, list: Option<&str>, task: &str) -> Self {
        let list = list.map(str::to_string);
        match self {
            Self::Step { path, source, .. } => Self::Step {
                list,
                path: format!("{task} / {path}"),
                source,
            },
            other => Self::Step {
                list,
                path: task.to_string(),
                source: Box::new(other),
            },
        }
    }

    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_exit_code_is_propagated() {
        let err = SuiteError::from(ShellError::Exit {
            code: 3,
            command: "vagrant up".into(),
        });
        assert_eq!(err.kind(), "ShellError");
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn signal_termination_maps_to_generic_failure() {
        let err = SuiteError::from(ShellError::Exit {
            code: -1,
            command: "vagrant ssh client".into(),
        });
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn usage_and_configuration_codes() {
        assert_eq!(SuiteError::usage("bad guest").exit_code(), 2);
        assert_eq!(SuiteError::usage("bad guest").kind(), "UsageError");
        assert_eq!(SuiteError::configuration("no suite").exit_code(), 11);
        assert_eq!(
            SuiteError::configuration("no suite").to_string(),
            "no suite"
        );
    }

    #[test]
    fn step_context_keeps_kind_code_and_message() {
        let err = SuiteError::from(ShellError::Exit {
            code: 3,
            command: "vagrant ssh client".into(),
        })
        .in_step(Some("Test Case: ldap"), "Run")
        .in_step(Some("Test Case"), "ldap");

        assert_eq!(err.step().as_deref(), Some("Test Case / ldap / Run"));
        assert_eq!(err.kind(), "ShellError");
        assert_eq!(err.exit_code(), 3);
        assert_eq!(
            err.to_string(),
            "command `vagrant ssh client` exited with code 3"
        );
        assert!(matches!(
            err.root(),
            SuiteError::Shell(ShellError::Exit { code: 3, .. })
        ));
    }

    #[test]
    fn unnamed_list_contributes_only_the_task() {
        let err = SuiteError::usage("x").in_step(None, "B");
        assert_eq!(err.step().as_deref(), Some("B"));
        assert!(SuiteError::usage("x").step().is_none());
    }
}
