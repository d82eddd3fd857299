//! `archgen generate`: render a project from its description.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, instrument};

use archgen_core::domain::{ProjectStructure, WritePolicy};

use crate::{
    cli::GenerateArgs,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

use super::{finish, scaffold_service};

/// Flags merged over configuration defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub config_file: PathBuf,
    pub output_dir: PathBuf,
    pub policy: WritePolicy,
    pub dry_run: bool,
}

impl GenerateRequest {
    pub fn resolve(args: &GenerateArgs, config: &AppConfig) -> Self {
        let defaults = &config.generate;
        Self {
            config_file: args
                .config_file
                .clone()
                .unwrap_or_else(|| defaults.config_file.clone()),
            output_dir: args
                .output_dir
                .clone()
                .unwrap_or_else(|| defaults.output_dir.clone()),
            policy: WritePolicy {
                skip_existing: args.skip_existing().unwrap_or(defaults.skip_existing),
                backup: args.backup || defaults.backup,
                force: args.force || defaults.force,
            },
            dry_run: args.dry_run,
        }
    }
}

#[instrument(skip_all)]
pub fn execute(args: GenerateArgs, config: &AppConfig, output: Arc<OutputManager>) -> CliResult<()> {
    let request = GenerateRequest::resolve(&args, config);
    debug!(?request, "generate request resolved");

    let service = scaffold_service(&output)?;
    let desc = service.load_description(&request.config_file)?;

    if request.dry_run {
        let structure = service.plan(&desc)?;
        show_plan(&structure, &request, &output)?;
        return Ok(());
    }

    output.header(&format!(
        "Generating {} into {}",
        desc.project.name,
        request.output_dir.display()
    ))?;
    let summary = service.generate(&desc, &request.output_dir, request.policy)?;
    finish(summary, &output)?;
    output.success("Clean architecture boilerplate generated successfully!")?;
    Ok(())
}

fn show_plan(
    structure: &ProjectStructure,
    request: &GenerateRequest,
    output: &OutputManager,
) -> CliResult<()> {
    output.header(&format!(
        "Dry run: nothing will be written under {}",
        request.output_dir.display()
    ))?;
    for dir in structure.directories() {
        output.print(&format!("  {}/", dir.path))?;
    }
    for file in structure.files() {
        output.print(&format!("  {}  ({})", file.path, file.template))?;
    }
    output.info(&format!(
        "{} files planned",
        structure.files().count()
    ))?;
    Ok(())
}
