//! Command handlers. Each translates parsed arguments into service calls and
//! prints the outcome; no generation logic lives here.

use std::sync::Arc;

use archgen_adapters::{HandlebarsRenderer, LocalFilesystem};
use archgen_core::application::{ScaffoldService, WriteSummary};

use crate::{
    error::{CliError, CliResult},
    output::OutputManager,
    reporter::ConsoleReporter,
};

pub mod completions;
pub mod config;
pub mod generate;
pub mod implement;
pub mod init;
pub mod templates;

/// Scaffold service wired to the local filesystem and the console.
pub(crate) fn scaffold_service(output: &Arc<OutputManager>) -> CliResult<ScaffoldService> {
    Ok(ScaffoldService::new(
        Box::new(HandlebarsRenderer::new()?),
        Box::new(LocalFilesystem::new()),
        Box::new(ConsoleReporter::new(Arc::clone(output), true)),
    ))
}

/// Print the counts line and turn failed writes into an error.
pub(crate) fn finish(summary: WriteSummary, output: &OutputManager) -> CliResult<()> {
    output.print(&format!("Summary: {summary}"))?;
    if summary.has_failures() {
        return Err(CliError::WritesFailed {
            failed: summary.failed,
        });
    }
    Ok(())
}
