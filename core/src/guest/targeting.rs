use crate::backend::{VagrantBackend, VagrantInvocation};
use crate::error::SuiteError;

use super::policy::ExitCodePolicy;
use super::selection::GuestSet;

/// How an operation fans out over several guests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchMode {
    /// One tool invocation per guest, one after another.
    Sequential,
    /// One tool invocation carrying every guest name.
    #[default]
    Batched,
}

impl DispatchMode {
    pub fn from_sequence_flag(sequence: bool) -> Self {
        if sequence {
            Self::Sequential
        } else {
            Self::Batched
        }
    }
}

/// Applies hypervisor operations to guest sets.
#[derive(Clone)]
pub struct GuestTargeting {
    backend: VagrantBackend,
    policy: ExitCodePolicy,
}

impl GuestTargeting {
    pub fn new(backend: VagrantBackend, policy: ExitCodePolicy) -> Self {
        Self { backend, policy }
    }

    pub fn policy(&self) -> &ExitCodePolicy {
        &self.policy
    }

    /// Runs `template` against `guests`.
    ///
    /// The operation name used for exit code tolerance is the template's command
    /// words. Any guest names already in the template are replaced.
    pub async fn apply(
        &self,
        guests: &GuestSet,
        mode: DispatchMode,
        template: &VagrantInvocation,
    ) -> Result<(), SuiteError> {
        let operation = template.command_words();
        tracing::info!(operation = %operation, guests = %guests, ?mode, "dispatching to guests");

        match mode {
            DispatchMode::Sequential => {
                for guest in guests.iter() {
                    let invocation = template.clone().guests([guest]);
                    self.policy
                        .apply(&operation, self.backend.run(&invocation).await)?;
                }
            }
            DispatchMode::Batched => {
                let invocation = template.clone().guests(guests.iter());
                self.policy
                    .apply(&operation, self.backend.run(&invocation).await)?;
            }
        }

        Ok(())
    }
}
