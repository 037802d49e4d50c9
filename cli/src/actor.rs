//! The capability every subcommand implements, and the closed set of them.
use async_trait::async_trait;
use clap::ArgMatches;
use sssd_suite_core::api::{AppContext, SuiteError};

use crate::commands::{
    PruneBoxActor, ProvisionActor, RunTestsActor, VagrantCommandActor,
    VagrantExternalCommandActor,
};

#[async_trait]
pub trait Actor: Send + Sync {
    /// Declares accepted arguments on the subcommand. Must not have side effects.
    fn setup_parser(&self, cmd: clap::Command) -> clap::Command;

    /// Whether tokens after `--` are forwarded to the external tool.
    fn accepts_passthrough(&self) -> bool {
        false
    }

    async fn run(
        &self,
        ctx: &AppContext,
        matches: &ArgMatches,
        passthrough: &[String],
    ) -> Result<(), SuiteError>;
}

pub enum ActorKind {
    Vagrant(VagrantCommandActor),
    External(VagrantExternalCommandActor),
    PruneBoxes(PruneBoxActor),
    Provision(ProvisionActor),
    RunTests(RunTestsActor),
}

impl ActorKind {
    fn as_actor(&self) -> &dyn Actor {
        match self {
            Self::Vagrant(a) => a,
            Self::External(a) => a,
            Self::PruneBoxes(a) => a,
            Self::Provision(a) => a,
            Self::RunTests(a) => a,
        }
    }
}

#[async_trait]
impl Actor for ActorKind {
    fn setup_parser(&self, cmd: clap::Command) -> clap::Command {
        self.as_actor().setup_parser(cmd)
    }

    fn accepts_passthrough(&self) -> bool {
        self.as_actor().accepts_passthrough()
    }

    async fn run(
        &self,
        ctx: &AppContext,
        matches: &ArgMatches,
        passthrough: &[String],
    ) -> Result<(), SuiteError> {
        self.as_actor().run(ctx, matches, passthrough).await
    }
}
