//! Argument parsing and dispatch to the registered actors.
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{value_parser, Arg, ArgAction, ArgMatches};
use sssd_suite_core::api::{AppContext, SuiteError};

use crate::actor::Actor;
use crate::registry::CommandList;

pub const PROGRAM: &str = "sssd-test-suite";

pub fn root_command(commands: &CommandList) -> clap::Command {
    let root = clap::Command::new(PROGRAM)
        .about("Create and provision SSSD test machines and run tests in them")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .global(true)
                .help("Path to the guest machines configuration file"),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Print commands instead of running them"),
        );
    commands.augment(root)
}

/// Splits `argv` at the first `--`. Everything after it is forwarded untouched.
pub fn split_passthrough<I, S>(argv: I) -> (Vec<String>, Vec<String>)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args: Vec<String> = argv.into_iter().map(Into::into).collect();
    match args.iter().position(|a| a == "--") {
        Some(idx) => {
            let passthrough = args.split_off(idx + 1);
            args.pop();
            (args, passthrough)
        }
        None => (args, Vec::new()),
    }
}

pub struct Invocation {
    pub command: String,
    pub matches: ArgMatches,
    pub passthrough: Vec<String>,
    pub guest_config: Option<PathBuf>,
    pub dry_run: bool,
}

pub enum Parsed {
    /// `--help` or `--version` was requested; the rendered text.
    Help(String),
    Run(Invocation),
}

pub fn parse<I, S>(commands: &CommandList, argv: I) -> Result<Parsed, SuiteError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let (args, passthrough) = split_passthrough(argv);
    let matches = match root_command(commands).try_get_matches_from(args) {
        Ok(m) => m,
        Err(e) => {
            let text = e.render().to_string();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Ok(Parsed::Help(text)),
                _ => Err(SuiteError::usage(text.trim_end())),
            };
        }
    };

    let (command, sub) = matches
        .subcommand()
        .ok_or_else(|| SuiteError::usage("no command given"))?;
    let guest_config = match sub.get_one::<PathBuf>("config") {
        Some(p) if p.is_relative() => Some(std::env::current_dir()?.join(p)),
        Some(p) => Some(p.clone()),
        None => None,
    };

    Ok(Parsed::Run(Invocation {
        command: command.to_string(),
        dry_run: sub.get_flag("dry-run"),
        guest_config,
        matches: sub.clone(),
        passthrough,
    }))
}

pub async fn dispatch(
    commands: &CommandList,
    ctx: &AppContext,
    inv: &Invocation,
) -> Result<(), SuiteError> {
    let command = commands
        .get(&inv.command)
        .ok_or_else(|| SuiteError::usage(format!("unknown command '{}'", inv.command)))?;
    let actor = command.actor();
    if !inv.passthrough.is_empty() && !actor.accepts_passthrough() {
        return Err(SuiteError::usage(format!(
            "'{}' does not accept arguments after --",
            inv.command
        )));
    }

    tracing::debug!(
        command = %inv.command,
        passthrough = inv.passthrough.len(),
        dry_run = inv.dry_run,
        "dispatching command"
    );
    actor.run(ctx, &inv.matches, &inv.passthrough).await
}

/// Last line printed for a failed invocation.
///
/// Errors that escaped a task list name the failing step. Plain usage errors
/// already read like clap output and are printed as they are.
pub fn error_line(err: &SuiteError) -> String {
    match (err.step(), err) {
        (Some(step), _) => format!("{PROGRAM}: {} in '{step}': {err}", err.kind()),
        (None, SuiteError::Usage(msg)) => msg.clone(),
        (None, _) => format!("{PROGRAM}: {}: {err}", err.kind()),
    }
}
