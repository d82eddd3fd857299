//! `archgen-impl`: generate implementation stubs, a factory and a Wire
//! provider set for the Go module in the current directory.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{debug, info};

use archgen_cli::{
    cli::ImplCli,
    commands,
    config::AppConfig,
    error::CliError,
    logging::init_impl_logging,
    output::OutputManager,
};

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = match ImplCli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 2 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    if let Err(e) = init_impl_logging(cli.verbose, cli.no_color) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }
    debug!(?cli, "CLI started");

    let config = match AppConfig::load(cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => return ExitCode::from(e.report(cli.verbose)),
    };
    let output = Arc::new(OutputManager::for_impl(cli.no_color, &config));

    let root = match std::env::current_dir() {
        Ok(root) => root,
        Err(e) => return ExitCode::from(CliError::from(e).report(cli.verbose)),
    };

    match commands::implement::execute(&cli, &root, &config, output) {
        Ok(()) => {
            info!("archgen-impl completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => ExitCode::from(e.report(cli.verbose)),
    }
}
