use std::path::PathBuf;

use async_trait::async_trait;
use clap::{value_parser, Arg, ArgAction, ArgMatches, ValueEnum};
use sssd_suite_core::api::{
    expand_path, AppContext, GuestSet, PlaybookRun, SuiteError, ALL_GUESTS,
};

use super::create_dir_all;
use super::vagrant::{guests_arg, guests_from};
use crate::actor::Actor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProvisionStage {
    /// Prepare the host: libvirt, NFS and the image storage pool
    Host,
    /// Install and configure guest machines
    Guest,
    /// Join client guests to their domains
    Enroll,
}

impl ProvisionStage {
    pub fn playbook(&self) -> &'static str {
        match self {
            Self::Host => "prepare-host.yml",
            Self::Guest => "prepare-guests.yml",
            Self::Enroll => "enroll.yml",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionArgs {
    pub stage: ProvisionStage,
    pub guests: Vec<String>,
    pub unattended: bool,
    pub pool: Option<PathBuf>,
}

/// Runs the ansible playbooks that prepare the host and the guests.
pub struct ProvisionActor {}

impl ProvisionActor {
    pub fn new() -> Self {
        Self {}
    }

    pub async fn execute(&self, ctx: &AppContext, args: &ProvisionArgs) -> Result<(), SuiteError> {
        let playbook = PlaybookRun::new(args.stage.playbook()).unattended(args.unattended);

        match args.stage {
            ProvisionStage::Host => {
                if !args.guests.is_empty() {
                    return Err(SuiteError::usage(format!(
                        "provision host does not take guests (got: {})",
                        args.guests.join(", ")
                    )));
                }
                let pool = args
                    .pool
                    .clone()
                    .unwrap_or_else(|| ctx.paths().pool_dir.clone());
                let ansible = ctx.ansible();
                let run = playbook
                    .limit(["localhost"])
                    .arg("--extra-vars")
                    .arg(format!("LIBVIRT_STORAGE={}", pool.display()));

                let mut tasks = ctx.tasklist("Provision host");
                let label = format!("Creating storage pool {}", pool.display());
                tasks.add(label, move |_| async move { create_dir_all(ctx, &pool).await });
                tasks.add("Running prepare-host.yml", |_| async move {
                    ansible.run(&run).await.map(|_| ()).map_err(SuiteError::from)
                });
                tasks.run().await
            }
            ProvisionStage::Guest | ProvisionStage::Enroll => {
                let guests = GuestSet::resolve(&args.guests, ctx.catalog())?;
                let limit = if args.guests.is_empty() || args.guests.iter().any(|g| g == ALL_GUESTS)
                {
                    Vec::new()
                } else {
                    guests.names().to_vec()
                };
                ctx.ansible().run(&playbook.limit(limit)).await?;
                Ok(())
            }
        }
    }
}

impl Default for ProvisionActor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Actor for ProvisionActor {
    fn setup_parser(&self, cmd: clap::Command) -> clap::Command {
        cmd.arg(
            Arg::new("stage")
                .required(true)
                .value_parser(value_parser!(ProvisionStage))
                .help("What to provision"),
        )
        .arg(guests_arg())
        .arg(
            Arg::new("unattended")
                .short('u')
                .long("unattended")
                .action(ArgAction::SetTrue)
                .help("Do not ask for the sudo password"),
        )
        .arg(
            Arg::new("pool")
                .long("pool")
                .value_name("DIR")
                .help("Storage pool for guest images (host only, defaults to <root>/pool)"),
        )
    }

    async fn run(
        &self,
        ctx: &AppContext,
        matches: &ArgMatches,
        _passthrough: &[String],
    ) -> Result<(), SuiteError> {
        let stage = matches
            .get_one::<ProvisionStage>("stage")
            .copied()
            .ok_or_else(|| SuiteError::usage("provision requires a stage"))?;
        let args = ProvisionArgs {
            stage,
            guests: guests_from(matches),
            unattended: matches.get_flag("unattended"),
            pool: matches.get_one::<String>("pool").map(|p| expand_path(p)),
        };
        self.execute(ctx, &args).await
    }
}
