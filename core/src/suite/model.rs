use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Where the SSSD source tree is synced to inside a guest.
pub const GUEST_SOURCE_DIR: &str = "/shared/sssd";
/// Where collected artifacts are copied inside a guest; mounted from the host.
pub const GUEST_ARTIFACTS_DIR: &str = "/shared/artifacts";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub name: String,

    /// Guests destroyed, started and halted around this case.
    #[serde(default)]
    pub machines: Vec<String>,

    #[serde(default)]
    pub tasks: Vec<SubTest>,
}

/// A script run on one guest, plus the files to collect afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubTest {
    #[serde(default)]
    pub name: String,

    pub machine: String,

    pub script: String,

    #[serde(default)]
    pub directory: Option<String>,

    #[serde(default)]
    pub artifacts: Vec<String>,
}

impl SubTest {
    /// Shell command run on the guest.
    pub fn command(&self) -> String {
        match self.directory.as_deref().filter(|d| !d.trim().is_empty()) {
            Some(dir) => format!("cd {} && {}", dir, self.script),
            None => self.script.clone(),
        }
    }

    /// Shell command copying every artifact into [`GUEST_ARTIFACTS_DIR`],
    /// or `None` when there is nothing to collect.
    pub fn artifacts_command(&self) -> Option<String> {
        if self.artifacts.is_empty() {
            return None;
        }

        Some(
            self.artifacts
                .iter()
                .map(|a| format!("cp {a} {GUEST_ARTIFACTS_DIR} ; "))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TestSuite {
    pub cases: Vec<TestCase>,
}

impl TestSuite {
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TestCase> {
        self.cases.iter()
    }

    /// Union of every case's guests.
    pub fn machines(&self) -> BTreeSet<String> {
        self.cases
            .iter()
            .flat_map(|c| c.machines.iter().cloned())
            .collect()
    }
}
