#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use sssd_suite_cli::app::{dispatch, parse, Parsed, PROGRAM};
use sssd_suite_cli::registry::default_commands;
use sssd_suite_core::api::{
    exit_status, AppConfig, AppContext, MemoryConsole, ShellCommand, ShellError, ShellExecutor,
    SuiteError, SuitePaths,
};

type Rule = Box<dyn Fn(&ShellCommand) -> i32 + Send + Sync>;

/// Records every command and answers with the exit code chosen by `rule`.
pub struct RecordingShell {
    calls: Mutex<Vec<ShellCommand>>,
    rule: Rule,
}

impl RecordingShell {
    pub fn new() -> Self {
        Self::with_rule(|_| 0)
    }

    pub fn with_rule(rule: impl Fn(&ShellCommand) -> i32 + Send + Sync + 'static) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            rule: Box::new(rule),
        }
    }

    pub fn calls(&self) -> Vec<ShellCommand> {
        self.calls.lock().unwrap().clone()
    }

    /// argv of every call, program name dropped.
    pub fn args(&self) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .map(|c| c.argv.into_iter().skip(1).collect())
            .collect()
    }
}

#[async_trait]
impl ShellExecutor for RecordingShell {
    fn name(&self) -> &str {
        "recording"
    }

    async fn run(&self, cmd: &ShellCommand) -> Result<i32, ShellError> {
        self.calls.lock().unwrap().push(cmd.clone());
        exit_status(cmd, Some((self.rule)(cmd)))
    }
}

pub fn context(shell: Arc<RecordingShell>, console: Arc<MemoryConsole>) -> AppContext {
    let paths = SuitePaths {
        root_dir: "/srv/suite".into(),
        pool_dir: "/srv/suite/pool".into(),
        default_guest_config: "/srv/suite/config.json".into(),
    };
    AppContext::with_paths(AppConfig::default(), paths, shell, console).unwrap()
}

/// Parses `argv` (without the program name) and dispatches it like `main` does.
pub async fn invoke(ctx: &AppContext, argv: &[&str]) -> Result<(), SuiteError> {
    let commands = default_commands();
    let full = std::iter::once(PROGRAM).chain(argv.iter().copied());
    match parse(&commands, full)? {
        Parsed::Run(inv) => dispatch(&commands, ctx, &inv).await,
        Parsed::Help(_) => Ok(()),
    }
}
