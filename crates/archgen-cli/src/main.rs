//! `archgen`: generate a Go clean-architecture project from a description.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (file + env + defaults).
//! 4. Build the [`OutputManager`].
//! 5. Dispatch to the appropriate command handler.
//! 6. Translate any `CliError` into a user-facing message and exit code.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{debug, info, instrument};

use archgen_cli::{
    cli::{Cli, Commands},
    commands,
    config::AppConfig,
    error::CliResult,
    logging::init_logging,
    output::OutputManager,
};

fn main() -> ExitCode {
    // Load .env before anything else, including tracing init.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 2 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );
    let verbose = cli.global.verbose > 0;

    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => return ExitCode::from(e.report(verbose)),
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = Arc::new(OutputManager::new(&cli.global, &config));

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    match run(cli.command, &config, output) {
        Ok(()) => {
            info!("archgen completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => ExitCode::from(e.report(verbose)),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(command: Commands, config: &AppConfig, output: Arc<OutputManager>) -> CliResult<()> {
    match command {
        Commands::Init(args) => commands::init::execute(args, output),
        Commands::Generate(args) => commands::generate::execute(args, config, output),
        Commands::Templates(args) => commands::templates::execute(args, output),
        Commands::Config(cmd) => commands::config::execute(cmd, config, &output),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn cli_has_author() {
        let cmd = Cli::command();
        assert!(cmd.get_author().is_some());
    }
}
