use async_trait::async_trait;
use clap::ArgMatches;
use sssd_suite_core::api::{AppContext, SuiteError, VagrantInvocation};

use crate::actor::Actor;

/// Removes boxes that no guest uses anymore.
pub struct PruneBoxActor {}

impl PruneBoxActor {
    pub fn new() -> Self {
        Self {}
    }

    pub async fn execute(&self, ctx: &AppContext) -> Result<(), SuiteError> {
        let invocation = VagrantInvocation::new("box prune")
            .flag("--force")
            .flag("--keep-active-boxes");
        ctx.vagrant().run(&invocation).await?;
        Ok(())
    }
}

impl Default for PruneBoxActor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Actor for PruneBoxActor {
    fn setup_parser(&self, cmd: clap::Command) -> clap::Command {
        cmd
    }

    async fn run(
        &self,
        ctx: &AppContext,
        _matches: &ArgMatches,
        _passthrough: &[String],
    ) -> Result<(), SuiteError> {
        self.execute(ctx).await
    }
}
