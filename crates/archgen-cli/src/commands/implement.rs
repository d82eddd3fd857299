//! `archgen-impl`: analyze the Go module in the working directory and emit
//! stubs, the factory and the wire provider set.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, instrument};

use archgen_adapters::{GoSourceParser, LocalFilesystem};
use archgen_core::application::{AnalysisService, ImplementationService};
use archgen_core::domain::GeneratorOptions;

use crate::{
    cli::ImplCli,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    reporter::ConsoleReporter,
};

use super::finish;

/// Tags and output directory after merging flags over configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ImplRequest {
    pub tags: Vec<String>,
    pub output_dir: PathBuf,
    pub dry_run: bool,
    pub force: bool,
}

impl ImplRequest {
    pub fn resolve(cli: &ImplCli, config: &AppConfig) -> Self {
        let tags = if cli.tags.is_empty() {
            config.analyze.tags.clone()
        } else {
            cli.tags.clone()
        };
        Self {
            tags: tags
                .into_iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
            output_dir: cli
                .output
                .clone()
                .unwrap_or_else(|| config.analyze.output_dir.clone()),
            dry_run: cli.dry_run,
            force: cli.force,
        }
    }
}

#[instrument(skip_all, fields(root = %root.display()))]
pub fn execute(
    cli: &ImplCli,
    root: &Path,
    config: &AppConfig,
    output: Arc<OutputManager>,
) -> CliResult<()> {
    let request = ImplRequest::resolve(cli, config);
    let show_info = cli.verbose || request.dry_run;
    let reporter = || Box::new(ConsoleReporter::new(Arc::clone(&output), show_info));

    output.header("Analyzing Go module for clean architecture interfaces")?;
    let spinner = output.spinner("Analyzing source files...");
    let analysis = AnalysisService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(GoSourceParser::new()),
        reporter(),
    );
    let model = analysis.analyze(root, &request.tags);
    spinner.finish_and_clear();
    let model = model?;
    info!(
        interfaces = model.interfaces.len(),
        structs = model.structs.len(),
        "model built"
    );
    output.info(&format!(
        "Found {} interfaces and {} structs",
        model.interfaces.len(),
        model.structs.len()
    ))?;

    let service = ImplementationService::new(Box::new(LocalFilesystem::new()), reporter());
    let files = service.generate(&model, &GeneratorOptions::now());
    if files.is_empty() {
        return Ok(());
    }

    if request.dry_run {
        output.header("Dry run: files that would be generated")?;
        service.preview(&files);
        return Ok(());
    }

    let summary = service.write(&files, &request.output_dir, request.force);
    finish(summary, &output)?;
    output.success("Implementation generation completed")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn flag_tags_replace_configured_tags() {
        let mut config = AppConfig::default();
        config.analyze.tags = vec!["integration".into()];

        let cli = ImplCli::parse_from(["archgen-impl"]);
        assert_eq!(ImplRequest::resolve(&cli, &config).tags, ["integration"]);

        let cli = ImplCli::parse_from(["archgen-impl", "--tags", "linux, debug"]);
        assert_eq!(ImplRequest::resolve(&cli, &config).tags, ["linux", "debug"]);
    }

    #[test]
    fn output_defaults_to_config() {
        let cli = ImplCli::parse_from(["archgen-impl", "--dry-run"]);
        let request = ImplRequest::resolve(&cli, &AppConfig::default());
        assert_eq!(request.output_dir, PathBuf::from("."));
        assert!(request.dry_run);

        let cli = ImplCli::parse_from(["archgen-impl", "-o", "gen", "--force"]);
        let request = ImplRequest::resolve(&cli, &AppConfig::default());
        assert_eq!(request.output_dir, PathBuf::from("gen"));
        assert!(request.force);
    }
}
