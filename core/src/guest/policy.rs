use std::collections::{BTreeMap, BTreeSet};

use crate::error::ShellError;

/// Nonzero exit codes that an operation reports on success.
///
/// `vagrant destroy` exits with 2 when there was nothing to destroy, so the
/// default table tolerates exactly that. Operations are keyed by their full
/// command words (`destroy`, `box update`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitCodePolicy {
    tolerated: BTreeMap<String, BTreeSet<i32>>,
}

impl Default for ExitCodePolicy {
    fn default() -> Self {
        Self::empty().with("destroy", [2])
    }
}

impl ExitCodePolicy {
    pub fn empty() -> Self {
        Self {
            tolerated: BTreeMap::new(),
        }
    }

    pub fn with(mut self, operation: &str, codes: impl IntoIterator<Item = i32>) -> Self {
        self.extend(operation, codes);
        self
    }

    pub fn extend(&mut self, operation: &str, codes: impl IntoIterator<Item = i32>) {
        self.tolerated
            .entry(operation.to_string())
            .or_default()
            .extend(codes.into_iter().filter(|c| *c != 0));
    }

    /// Exit code 0 is always success.
    pub fn is_success(&self, operation: &str, code: i32) -> bool {
        code == 0
            || self
                .tolerated
                .get(operation)
                .is_some_and(|codes| codes.contains(&code))
    }

    /// Converts a tolerated failure of `operation` into success.
    pub fn apply(
        &self,
        operation: &str,
        result: Result<i32, ShellError>,
    ) -> Result<i32, ShellError> {
        match result {
            Err(ShellError::Exit { code, command }) if self.is_success(operation, code) => {
                tracing::warn!(
                    operation,
                    code,
                    command = %command,
                    "tolerating nonzero exit code"
                );
                Ok(code)
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exit(code: i32) -> Result<i32, ShellError> {
        Err(ShellError::Exit {
            code,
            command: "vagrant".into(),
        })
    }

    #[test]
    fn destroy_tolerates_two_only() {
        let policy = ExitCodePolicy::default();
        assert!(policy.is_success("destroy", 2));
        assert!(!policy.is_success("destroy", 1));
        assert!(policy.apply("destroy", exit(2)).is_ok());
        assert!(policy.apply("destroy", exit(3)).is_err());
    }

    #[test]
    fn other_operations_fail_on_two() {
        let policy = ExitCodePolicy::default();
        for op in ["status", "up", "halt", "reload", "resume", "suspend", "box update"] {
            assert!(!policy.is_success(op, 2), "{op} must not tolerate 2");
            assert!(policy.is_success(op, 0), "{op} must accept 0");
            assert!(policy.apply(op, exit(2)).is_err());
        }
    }

    #[test]
    fn table_can_be_extended() {
        let mut policy = ExitCodePolicy::default();
        policy.extend("halt", [1, 0]);
        assert!(policy.is_success("halt", 1));
        assert!(policy.is_success("destroy", 2));
    }

    #[test]
    fn spawn_errors_are_never_tolerated() {
        let policy = ExitCodePolicy::default();
        let res = policy.apply(
            "destroy",
            Err(ShellError::Spawn {
                command: "vagrant destroy".into(),
                message: "not found".into(),
            }),
        );
        assert!(res.is_err());
    }
}
