use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::backend::{AnsibleBackend, VagrantBackend};
use crate::config::{expand_path, AppConfig, PathsConfig};
use crate::error::SuiteError;
use crate::executor::{Console, TaskList};
use crate::guest::{ExitCodePolicy, GuestCatalog, GuestTargeting};
use crate::shell::ShellExecutor;

/// Resolved filesystem locations of the suite checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuitePaths {
    pub root_dir: PathBuf,
    pub pool_dir: PathBuf,
    pub default_guest_config: PathBuf,
}

impl SuitePaths {
    pub fn from_config(paths: &PathsConfig) -> Result<Self, SuiteError> {
        let root_dir = match paths.root_dir.as_deref().filter(|s| !s.trim().is_empty()) {
            Some(dir) => expand_path(dir),
            None => std::env::current_dir()?,
        };
        Ok(Self::with_root(root_dir, paths))
    }

    fn with_root(root_dir: PathBuf, paths: &PathsConfig) -> Self {
        let pool_dir = paths
            .pool_dir
            .as_deref()
            .map(expand_path)
            .unwrap_or_else(|| root_dir.join("pool"));
        let default_guest_config = paths
            .guest_config
            .as_deref()
            .map(expand_path)
            .unwrap_or_else(|| root_dir.join("config.json"));

        Self {
            root_dir,
            pool_dir,
            default_guest_config,
        }
    }
}

/// Everything an actor needs for one CLI invocation.
#[derive(Clone)]
pub struct AppContext {
    cfg: AppConfig,
    paths: SuitePaths,
    guest_config: PathBuf,
    catalog: GuestCatalog,
    policy: ExitCodePolicy,
    shell: Arc<dyn ShellExecutor>,
    console: Arc<dyn Console>,
    dry_run: bool,
}

impl AppContext {
    pub fn new(
        cfg: AppConfig,
        shell: Arc<dyn ShellExecutor>,
        console: Arc<dyn Console>,
    ) -> Result<Self, SuiteError> {
        let paths = SuitePaths::from_config(&cfg.paths)?;
        Self::with_paths(cfg, paths, shell, console)
    }

    pub fn with_paths(
        cfg: AppConfig,
        paths: SuitePaths,
        shell: Arc<dyn ShellExecutor>,
        console: Arc<dyn Console>,
    ) -> Result<Self, SuiteError> {
        let catalog = cfg.guests.catalog()?;
        let policy = cfg.exit_code_policy();
        Ok(Self {
            guest_config: paths.default_guest_config.clone(),
            cfg,
            paths,
            catalog,
            policy,
            shell,
            console,
            dry_run: false,
        })
    }

    /// Replaces the guest configuration for this invocation (`--config`).
    pub fn with_guest_config(mut self, guest_config: Option<&Path>) -> Self {
        if let Some(path) = guest_config {
            self.guest_config = path.to_path_buf();
        }
        self
    }

    /// Marks the invocation as `--dry-run`: nothing on the host may change.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn cfg(&self) -> &AppConfig {
        &self.cfg
    }

    pub fn paths(&self) -> &SuitePaths {
        &self.paths
    }

    pub fn guest_config(&self) -> &Path {
        &self.guest_config
    }

    pub fn catalog(&self) -> &GuestCatalog {
        &self.catalog
    }

    pub fn policy(&self) -> &ExitCodePolicy {
        &self.policy
    }

    pub fn shell(&self) -> Arc<dyn ShellExecutor> {
        self.shell.clone()
    }

    pub fn console(&self) -> Arc<dyn Console> {
        self.console.clone()
    }

    pub fn vagrant(&self) -> VagrantBackend {
        VagrantBackend::new(
            self.cfg.tools.vagrant.clone(),
            self.paths.root_dir.clone(),
            self.guest_config.clone(),
            self.shell.clone(),
        )
    }

    pub fn ansible(&self) -> AnsibleBackend {
        AnsibleBackend::new(
            self.cfg.tools.ansible_playbook.clone(),
            self.paths.root_dir.clone(),
            self.shell.clone(),
        )
    }

    pub fn targeting(&self) -> GuestTargeting {
        GuestTargeting::new(self.vagrant(), self.policy.clone())
    }

    pub fn tasklist<'a>(&self, name: impl Into<String>) -> TaskList<'a> {
        TaskList::named(self.console.clone(), name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_paths_follow_root() {
        let paths = SuitePaths::with_root(PathBuf::from("/srv/suite"), &PathsConfig::default());
        assert_eq!(paths.pool_dir, PathBuf::from("/srv/suite/pool"));
        assert_eq!(
            paths.default_guest_config,
            PathBuf::from("/srv/suite/config.json")
        );
    }

    #[test]
    fn explicit_paths_win() {
        let cfg = PathsConfig {
            root_dir: Some("/srv/suite".into()),
            pool_dir: Some("/var/lib/pool".into()),
            guest_config: Some("/etc/suite.json".into()),
        };
        let paths = SuitePaths::from_config(&cfg).unwrap();
        assert_eq!(paths.root_dir, PathBuf::from("/srv/suite"));
        assert_eq!(paths.pool_dir, PathBuf::from("/var/lib/pool"));
        assert_eq!(paths.default_guest_config, PathBuf::from("/etc/suite.json"));
    }
}
