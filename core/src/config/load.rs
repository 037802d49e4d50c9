use std::path::{Path, PathBuf};

use super::types::AppConfig;

/// Path of an alternative settings file.
pub const SETTINGS_ENV: &str = "SSSD_TEST_SUITE_SETTINGS";
/// Overrides `paths.root_dir`.
pub const ROOT_ENV: &str = "SSSD_TEST_SUITE_ROOT";
/// Overrides the guest configuration path. Also the variable vagrant reads it from.
pub const GUEST_CONFIG_ENV: &str = "SSSD_TEST_SUITE_CONFIG";

/// Get the harness data directory: ~/.sssd-test-suite
pub fn get_data_dir() -> anyhow::Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(home.join(".sssd-test-suite"))
}

/// Expands `~` and environment variables in a user supplied path.
pub fn expand_path(path: &str) -> PathBuf {
    match shellexpand::full(path) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => PathBuf::from(shellexpand::tilde(path).as_ref()),
    }
}

pub fn load_from_path(path: &Path) -> anyhow::Result<AppConfig> {
    let s = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    let cfg = toml::from_str::<AppConfig>(&s)
        .map_err(|e| anyhow::anyhow!("failed to parse {}: {e}", path.display()))?;
    Ok(cfg)
}

pub fn load_default() -> anyhow::Result<AppConfig> {
    let mut cfg = match std::env::var(SETTINGS_ENV) {
        // Priority 1: explicit settings file
        Ok(p) if !p.trim().is_empty() => load_from_path(&expand_path(&p))?,
        _ => {
            // Priority 2: ~/.sssd-test-suite/settings.toml
            let user_config = get_data_dir().ok().map(|d| d.join("settings.toml"));
            // Priority 3: ./sssd-test-suite.toml
            let local_config = Path::new("sssd-test-suite.toml");

            match user_config {
                Some(p) if p.exists() => load_from_path(&p)?,
                _ if local_config.exists() => load_from_path(local_config)?,
                _ => AppConfig::default(),
            }
        }
    };

    apply_env_overrides(&mut cfg, |key| std::env::var(key).ok());

    if cfg.logging.file
        && cfg
            .logging
            .directory
            .as_deref()
            .map(|s| s.trim().is_empty())
            .unwrap_or(true)
    {
        let logs_dir = get_data_dir()?.join("logs");
        cfg.logging.directory = Some(logs_dir.to_string_lossy().to_string());
    }

    Ok(cfg)
}

/// Environment variable overrides (highest priority).
pub(crate) fn apply_env_overrides<F>(cfg: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = lookup(ROOT_ENV).filter(|v| !v.trim().is_empty()) {
        cfg.paths.root_dir = Some(v);
    }
    if let Some(v) = lookup(GUEST_CONFIG_ENV).filter(|v| !v.trim().is_empty()) {
        cfg.paths.guest_config = Some(v);
    }
}
