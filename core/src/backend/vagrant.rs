use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::GUEST_CONFIG_ENV;
use crate::error::ShellError;
use crate::shell::{ShellCommand, ShellExecutor};

/// One `vagrant` call: command words, flags, guests, passthrough tokens and extra env.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VagrantInvocation {
    command: Vec<String>,
    flags: Vec<String>,
    guests: Vec<String>,
    passthrough: Vec<String>,
    env: BTreeMap<String, String>,
    clear_env: bool,
}

impl VagrantInvocation {
    /// `command` may hold several words, e.g. `box update`.
    pub fn new(command: &str) -> Self {
        Self {
            command: command.split_whitespace().map(str::to_string).collect(),
            ..Self::default()
        }
    }

    /// Options placed right after the command words.
    pub fn flag(mut self, flag: impl Into<String>) -> Self {
        self.flags.push(flag.into());
        self
    }

    pub fn guests<I, S>(mut self, guests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.guests = guests.into_iter().map(Into::into).collect();
        self
    }

    /// Tokens forwarded verbatim after `--`.
    pub fn passthrough<I, S>(mut self, argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.passthrough = argv.into_iter().map(Into::into).collect();
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    pub fn clear_env(mut self, clear: bool) -> Self {
        self.clear_env = clear;
        self
    }

    pub fn command_words(&self) -> String {
        self.command.join(" ")
    }

    pub fn guest_names(&self) -> &[String] {
        &self.guests
    }
}

/// Builds and runs `vagrant` invocations rooted at the suite directory.
#[derive(Clone)]
pub struct VagrantBackend {
    program: String,
    root_dir: PathBuf,
    guest_config: PathBuf,
    shell: Arc<dyn ShellExecutor>,
}

impl VagrantBackend {
    pub fn new(
        program: impl Into<String>,
        root_dir: impl Into<PathBuf>,
        guest_config: impl Into<PathBuf>,
        shell: Arc<dyn ShellExecutor>,
    ) -> Self {
        Self {
            program: program.into(),
            root_dir: root_dir.into(),
            guest_config: guest_config.into(),
            shell,
        }
    }

    pub fn guest_config(&self) -> &Path {
        &self.guest_config
    }

    /// `<vagrant> <words…> [flags…] [guests…] [-- passthrough…]`
    ///
    /// `VAGRANT_CWD` and the guest config variable always win over extra env.
    pub fn command(&self, invocation: &VagrantInvocation) -> ShellCommand {
        let mut argv = Vec::with_capacity(
            2 + invocation.command.len()
                + invocation.flags.len()
                + invocation.guests.len()
                + invocation.passthrough.len(),
        );
        argv.push(self.program.clone());
        argv.extend(invocation.command.iter().cloned());
        argv.extend(invocation.flags.iter().cloned());
        argv.extend(invocation.guests.iter().cloned());
        if !invocation.passthrough.is_empty() {
            argv.push("--".to_string());
            argv.extend(invocation.passthrough.iter().cloned());
        }

        ShellCommand::new(argv)
            .envs(invocation.env.clone())
            .env("VAGRANT_CWD", self.root_dir.to_string_lossy())
            .env(GUEST_CONFIG_ENV, self.guest_config.to_string_lossy())
            .clear_env(invocation.clear_env)
    }

    pub async fn run(&self, invocation: &VagrantInvocation) -> Result<i32, ShellError> {
        let cmd = self.command(invocation);
        tracing::info!(shell = self.shell.name(), command = %cmd.display(), "running vagrant");
        self.shell.run(&cmd).await
    }
}
