use std::path::Path;

use crate::error::SuiteError;
use crate::guest::GuestCatalog;

use super::model::{TestCase, TestSuite};

impl TestSuite {
    pub fn load(path: &Path) -> Result<Self, SuiteError> {
        let s = std::fs::read_to_string(path).map_err(|e| {
            SuiteError::configuration(format!(
                "cannot read test suite {}: {e}",
                path.display()
            ))
        })?;
        Self::from_yaml_str(&s).map_err(|e| match e {
            SuiteError::Configuration(msg) => {
                SuiteError::configuration(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }

    /// An empty document is an empty suite.
    pub fn from_yaml_str(s: &str) -> Result<Self, SuiteError> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }

        let cases: Option<Vec<TestCase>> = serde_yaml::from_str(s)
            .map_err(|e| SuiteError::configuration(format!("invalid test suite: {e}")))?;
        Ok(Self {
            cases: cases.unwrap_or_default(),
        })
    }

    /// Every guest a case or sub-test names must exist in the catalog.
    pub fn validate(&self, catalog: &GuestCatalog) -> Result<(), SuiteError> {
        for case in &self.cases {
            let unknown = case
                .machines
                .iter()
                .chain(case.tasks.iter().map(|t| &t.machine))
                .find(|m| !catalog.contains(m));
            if let Some(machine) = unknown {
                return Err(SuiteError::configuration(format!(
                    "test case '{}' refers to unknown guest '{}'",
                    case.name, machine
                )));
            }
        }
        Ok(())
    }
}
