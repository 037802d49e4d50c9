use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::guest::{ExitCodePolicy, GuestCatalog, LINUX_GUESTS, WINDOWS_GUESTS};

/// Harness settings, read from `settings.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub guests: GuestsConfig,

    #[serde(default)]
    pub tools: ToolsConfig,

    /// Extra tolerated exit codes per operation, merged into the built-in table.
    #[serde(default)]
    pub tolerated_exit_codes: BTreeMap<String, Vec<i32>>,
}

impl AppConfig {
    pub fn exit_code_policy(&self) -> ExitCodePolicy {
        let mut policy = ExitCodePolicy::default();
        for (operation, codes) in &self.tolerated_exit_codes {
            policy.extend(operation, codes.iter().copied());
        }
        policy
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,

    /// If true, log to stderr.
    #[serde(default = "default_logging_console")]
    pub console: bool,

    /// If true, log to a file under `directory` (or the data dir if unset).
    #[serde(default)]
    pub file: bool,

    /// EnvFilter string, e.g. "warn" or "sssd_suite_core=debug".
    #[serde(default = "default_logging_level")]
    pub level: String,

    #[serde(default)]
    pub directory: Option<String>,
}

fn default_logging_enabled() -> bool {
    true
}

fn default_logging_console() -> bool {
    true
}

fn default_logging_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            console: default_logging_console(),
            file: false,
            level: default_logging_level(),
            directory: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory holding the Vagrantfile, `provision/` and `config.json`.
    /// Defaults to the current directory.
    #[serde(default)]
    pub root_dir: Option<String>,

    /// Storage pool for guest images. Defaults to `<root_dir>/pool`.
    #[serde(default)]
    pub pool_dir: Option<String>,

    /// Guest configuration handed to vagrant. Defaults to `<root_dir>/config.json`.
    #[serde(default)]
    pub guest_config: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestsConfig {
    #[serde(default = "default_linux_guests")]
    pub linux: Vec<String>,

    #[serde(default = "default_windows_guests")]
    pub windows: Vec<String>,
}

fn default_linux_guests() -> Vec<String> {
    LINUX_GUESTS.iter().map(|s| s.to_string()).collect()
}

fn default_windows_guests() -> Vec<String> {
    WINDOWS_GUESTS.iter().map(|s| s.to_string()).collect()
}

impl Default for GuestsConfig {
    fn default() -> Self {
        Self {
            linux: default_linux_guests(),
            windows: default_windows_guests(),
        }
    }
}

impl GuestsConfig {
    pub fn catalog(&self) -> Result<GuestCatalog, crate::error::SuiteError> {
        GuestCatalog::new(self.linux.clone(), self.windows.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsConfig {
    #[serde(default = "default_vagrant")]
    pub vagrant: String,

    #[serde(default = "default_ansible_playbook")]
    pub ansible_playbook: String,
}

fn default_vagrant() -> String {
    "vagrant".to_string()
}

fn default_ansible_playbook() -> String {
    "ansible-playbook".to_string()
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            vagrant: default_vagrant(),
            ansible_playbook: default_ansible_playbook(),
        }
    }
}
