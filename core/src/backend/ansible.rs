use std::path::PathBuf;
use std::sync::Arc;

use crate::error::ShellError;
use crate::shell::{ShellCommand, ShellExecutor};

pub const ANSIBLE_SSH_ARGS: &str = "-o UserKnownHostsFile=/dev/null \
-o IdentitiesOnly=yes \
-o ControlMaster=auto \
-o ControlPersist=60s \
-o ServerAliveInterval=15";

/// One `ansible-playbook` run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybookRun {
    pub playbook: String,
    /// Hosts for `--limit`; empty means `all`.
    pub limit: Vec<String>,
    /// Without it ansible asks for the become password.
    pub unattended: bool,
    pub extra_args: Vec<String>,
}

impl PlaybookRun {
    pub fn new(playbook: impl Into<String>) -> Self {
        Self {
            playbook: playbook.into(),
            ..Self::default()
        }
    }

    pub fn limit<I, S>(mut self, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.limit = hosts.into_iter().map(Into::into).collect();
        self
    }

    pub fn unattended(mut self, unattended: bool) -> Self {
        self.unattended = unattended;
        self
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.extra_args.push(arg.into());
        self
    }
}

#[derive(Clone)]
pub struct AnsibleBackend {
    program: String,
    root_dir: PathBuf,
    shell: Arc<dyn ShellExecutor>,
}

impl AnsibleBackend {
    pub fn new(
        program: impl Into<String>,
        root_dir: impl Into<PathBuf>,
        shell: Arc<dyn ShellExecutor>,
    ) -> Self {
        Self {
            program: program.into(),
            root_dir: root_dir.into(),
            shell,
        }
    }

    pub fn provision_dir(&self) -> PathBuf {
        self.root_dir.join("provision")
    }

    pub fn inventory_path(&self) -> PathBuf {
        self.provision_dir().join("inventory.yml")
    }

    pub fn command(&self, run: &PlaybookRun) -> ShellCommand {
        let limit = if run.limit.is_empty() {
            "all".to_string()
        } else {
            run.limit.join(",")
        };

        let mut argv = vec![
            self.program.clone(),
            "--limit".to_string(),
            limit,
            "--inventory-file".to_string(),
            self.inventory_path().to_string_lossy().into_owned(),
        ];
        argv.extend(run.extra_args.iter().cloned());
        if !run.unattended {
            argv.push("--ask-become-pass".to_string());
        }
        argv.push(
            self.provision_dir()
                .join(&run.playbook)
                .to_string_lossy()
                .into_owned(),
        );

        ShellCommand::new(argv)
            .env("ANSIBLE_SSH_ARGS", ANSIBLE_SSH_ARGS)
            .env("ANSIBLE_HOST_KEY_CHECKING", "false")
    }

    pub async fn run(&self, run: &PlaybookRun) -> Result<i32, ShellError> {
        let cmd = self.command(run);
        tracing::info!(shell = self.shell.name(), command = %cmd.display(), "running ansible-playbook");
        self.shell.run(&cmd).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::testing::NoopShell;
    use pretty_assertions::assert_eq;

    #[test]
    fn interactive_run_asks_for_become_pass() {
        let ansible = AnsibleBackend::new("ansible-playbook", "/srv/suite", Arc::new(NoopShell));
        let cmd = ansible.command(
            &PlaybookRun::new("prepare-guests.yml")
                .limit(["client", "ipa"])
                .arg("--verbose"),
        );

        assert_eq!(
            cmd.argv,
            vec![
                "ansible-playbook",
                "--limit",
                "client,ipa",
                "--inventory-file",
                "/srv/suite/provision/inventory.yml",
                "--verbose",
                "--ask-become-pass",
                "/srv/suite/provision/prepare-guests.yml",
            ]
        );
        assert_eq!(
            cmd.env.get("ANSIBLE_HOST_KEY_CHECKING").map(String::as_str),
            Some("false")
        );
        assert!(cmd.env["ANSIBLE_SSH_ARGS"].contains("ControlMaster=auto"));
    }

    #[test]
    fn unattended_run_without_limit_targets_all() {
        let ansible = AnsibleBackend::new("ansible-playbook", "/srv/suite", Arc::new(NoopShell));
        let cmd = ansible.command(&PlaybookRun::new("enroll.yml").unattended(true));
        assert_eq!(cmd.argv[2], "all");
        assert!(!cmd.argv.iter().any(|a| a == "--ask-become-pass"));
    }
}
