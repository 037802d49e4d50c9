use async_trait::async_trait;
use clap::{Arg, ArgAction, ArgMatches};
use sssd_suite_core::api::{
    AppContext, DispatchMode, GuestCatalog, GuestSet, SuiteError, VagrantInvocation,
};

use crate::actor::Actor;

/// Positional guest names, `all` by default.
pub(crate) fn guests_arg() -> Arg {
    Arg::new("guests")
        .value_name("GUEST")
        .num_args(0..)
        .action(ArgAction::Append)
        .help("Guest to run the command with. Multiple guests can be set. (Default \"all\")")
}

pub(crate) fn guests_from(matches: &ArgMatches) -> Vec<String> {
    matches
        .get_many::<String>("guests")
        .map(|v| v.cloned().collect())
        .unwrap_or_default()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuestArgs {
    pub guests: Vec<String>,
    pub sequence: bool,
}

impl GuestArgs {
    pub fn new<I, S>(guests: I, sequence: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            guests: guests.into_iter().map(Into::into).collect(),
            sequence,
        }
    }

    fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            guests: guests_from(matches),
            sequence: matches.get_flag("sequence"),
        }
    }
}

/// Runs one vagrant command over a guest selection.
pub struct VagrantCommandActor {
    command: String,
}

impl VagrantCommandActor {
    pub fn new(command: &str) -> Self {
        Self {
            command: command.to_string(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub async fn execute(&self, ctx: &AppContext, args: &GuestArgs) -> Result<(), SuiteError> {
        let guests = GuestSet::resolve(&args.guests, ctx.catalog())?;
        ctx.targeting()
            .apply(
                &guests,
                DispatchMode::from_sequence_flag(args.sequence),
                &VagrantInvocation::new(&self.command),
            )
            .await
    }
}

#[async_trait]
impl Actor for VagrantCommandActor {
    fn setup_parser(&self, cmd: clap::Command) -> clap::Command {
        cmd.arg(guests_arg()).arg(
            Arg::new("sequence")
                .short('s')
                .long("sequence")
                .action(ArgAction::SetTrue)
                .help("Run operation on guests in sequence (one by one)"),
        )
    }

    async fn run(
        &self,
        ctx: &AppContext,
        matches: &ArgMatches,
        _passthrough: &[String],
    ) -> Result<(), SuiteError> {
        self.execute(ctx, &GuestArgs::from_matches(matches)).await
    }
}

/// Which catalog group a passthrough command accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestClass {
    Linux,
    Windows,
}

impl GuestClass {
    pub fn allowed<'a>(&self, catalog: &'a GuestCatalog) -> &'a [String] {
        match self {
            Self::Linux => catalog.linux(),
            Self::Windows => catalog.windows(),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Linux => "Linux",
            Self::Windows => "Windows",
        }
    }
}

/// Opens an interactive session on one guest, forwarding everything after `--`.
pub struct VagrantExternalCommandActor {
    command: String,
    class: GuestClass,
    example: String,
}

impl VagrantExternalCommandActor {
    pub fn new(command: &str, class: GuestClass, example: &str) -> Self {
        Self {
            command: command.to_string(),
            class,
            example: example.to_string(),
        }
    }

    pub async fn execute(
        &self,
        ctx: &AppContext,
        guest: &str,
        passthrough: &[String],
    ) -> Result<(), SuiteError> {
        let allowed = self.class.allowed(ctx.catalog());
        if !allowed.iter().any(|g| g == guest) {
            return Err(SuiteError::usage(format!(
                "'{}' cannot be used with {}; choose a {} guest: {}",
                guest,
                self.command,
                self.class.label(),
                allowed.join(", ")
            )));
        }

        let invocation = VagrantInvocation::new(&self.command)
            .guests([guest])
            .passthrough(passthrough.iter().cloned());
        ctx.vagrant().run(&invocation).await?;
        Ok(())
    }
}

#[async_trait]
impl Actor for VagrantExternalCommandActor {
    fn setup_parser(&self, cmd: clap::Command) -> clap::Command {
        cmd.arg(
            Arg::new("guest")
                .value_name("GUEST")
                .required(true)
                .help(format!("{} guest machine", self.class.label())),
        )
        .after_help(format!(
            "All parameters placed after -- will be passed to {cmd} command.\n\
             For example:\n    sssd-test-suite {cmd} {example}",
            cmd = self.command,
            example = self.example
        ))
    }

    fn accepts_passthrough(&self) -> bool {
        true
    }

    async fn run(
        &self,
        ctx: &AppContext,
        matches: &ArgMatches,
        passthrough: &[String],
    ) -> Result<(), SuiteError> {
        let guest = matches
            .get_one::<String>("guest")
            .ok_or_else(|| SuiteError::usage(format!("{} requires a guest", self.command)))?;
        self.execute(ctx, guest, passthrough).await
    }
}
