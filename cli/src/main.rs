use std::sync::Arc;

use sssd_suite_cli::app::{self, Parsed};
use sssd_suite_cli::logging::init_tracing;
use sssd_suite_cli::registry::default_commands;
use sssd_suite_core::api::{
    load_default, AppContext, Console, ShellExecutor, StdConsole, SuiteError,
};
use sssd_suite_plugins::{DryRunShell, ProcessShell};

#[tokio::main]
async fn main() {
    let exit = match real_main().await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{}", app::error_line(&e));
            e.exit_code()
        }
    };

    std::process::exit(exit);
}

async fn real_main() -> Result<(), SuiteError> {
    let commands = default_commands();
    let inv = match app::parse(&commands, std::env::args())? {
        Parsed::Help(text) => {
            print!("{text}");
            return Ok(());
        }
        Parsed::Run(inv) => inv,
    };

    let cfg = load_default().map_err(|e| SuiteError::configuration(format!("{e:#}")))?;
    init_tracing(&cfg.logging).map_err(SuiteError::configuration)?;

    let console: Arc<dyn Console> = Arc::new(StdConsole::new(atty::is(atty::Stream::Stderr)));
    let shell: Arc<dyn ShellExecutor> = if inv.dry_run {
        Arc::new(DryRunShell::new(console.clone()))
    } else {
        Arc::new(ProcessShell::new())
    };

    let ctx = AppContext::new(cfg, shell, console)?
        .with_guest_config(inv.guest_config.as_deref())
        .with_dry_run(inv.dry_run);
    app::dispatch(&commands, &ctx, &inv).await
}
