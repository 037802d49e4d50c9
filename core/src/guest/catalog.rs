use crate::error::SuiteError;

/// Sentinel accepted wherever guest names are, meaning every known guest.
pub const ALL_GUESTS: &str = "all";

pub const LINUX_GUESTS: &[&str] = &["ipa", "ldap", "client"];
pub const WINDOWS_GUESTS: &[&str] = &["ad", "ad-child"];

/// The fixed set of guests a run knows about.
///
/// The Linux and Windows groups never overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestCatalog {
    linux: Vec<String>,
    windows: Vec<String>,
}

impl Default for GuestCatalog {
    fn default() -> Self {
        Self {
            linux: LINUX_GUESTS.iter().map(|s| s.to_string()).collect(),
            windows: WINDOWS_GUESTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl GuestCatalog {
    pub fn new(linux: Vec<String>, windows: Vec<String>) -> Result<Self, SuiteError> {
        for name in linux.iter().chain(windows.iter()) {
            if name.trim().is_empty() || name == ALL_GUESTS {
                return Err(SuiteError::configuration(format!(
                    "invalid guest name '{name}'"
                )));
            }
        }
        if let Some(dup) = linux.iter().find(|l| windows.contains(l)) {
            return Err(SuiteError::configuration(format!(
                "guest '{dup}' is listed as both a Linux and a Windows guest"
            )));
        }
        Ok(Self { linux, windows })
    }

    pub fn linux(&self) -> &[String] {
        &self.linux
    }

    pub fn windows(&self) -> &[String] {
        &self.windows
    }

    /// Every known guest, Windows guests first, in declaration order.
    pub fn all(&self) -> Vec<String> {
        self.windows.iter().chain(self.linux.iter()).cloned().collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.is_linux(name) || self.is_windows(name)
    }

    pub fn is_linux(&self, name: &str) -> bool {
        self.linux.iter().any(|g| g == name)
    }

    pub fn is_windows(&self, name: &str) -> bool {
        self.windows.iter().any(|g| g == name)
    }
}
