//! `archgen init`: write a project description with default domains.

use std::path::Path;
use std::sync::Arc;

use tracing::{info, instrument};

use archgen_core::domain::{DatabaseKind, InitOptions, ProjectDescription, ServerKind};

use crate::{
    cli::InitArgs,
    error::{CliError, CliResult},
    output::OutputManager,
};

use super::scaffold_service;

const DEFAULT_NAME: &str = "my-app";
const DEFAULT_DOMAIN_COUNT: u8 = 2;

#[instrument(skip_all, fields(output = %args.output.display(), yes = args.yes))]
pub fn execute(args: InitArgs, output: Arc<OutputManager>) -> CliResult<()> {
    if args.output.exists() && !args.force {
        return Err(CliError::DescriptionExists { path: args.output });
    }

    let options = if args.yes {
        options_from_flags(&args)
    } else {
        prompt(&args, &output)?
    };

    let desc = ProjectDescription::from_init(&options);
    let service = scaffold_service(&output)?;
    service.save_description(&desc, &args.output)?;
    info!(project = %desc.project.name, domains = desc.domains.len(), "description written");

    show_domains(&desc, &output)?;
    output.success(&format!("Configuration saved to {}", args.output.display()))?;
    output.info(&format!(
        "Run '{}' to generate your project",
        generate_hint(&args.output)
    ))?;
    output.info(&format!(
        "Edit {} to customize the domains before generating",
        args.output.display()
    ))?;
    Ok(())
}

/// Answers from flags alone, with defaults for anything not given.
pub fn options_from_flags(args: &InitArgs) -> InitOptions {
    let name = args.name.clone().unwrap_or_else(|| DEFAULT_NAME.to_string());
    let module = args
        .module
        .clone()
        .unwrap_or_else(|| default_module(&name));
    InitOptions {
        module,
        server: args.framework.map(ServerKind::from).unwrap_or_default(),
        database: args
            .database
            .map(DatabaseKind::from)
            .unwrap_or(DatabaseKind::Postgres),
        events: args.events,
        domain_count: usize::from(args.domains.unwrap_or(DEFAULT_DOMAIN_COUNT)),
        name,
    }
}

fn default_module(name: &str) -> String {
    format!("github.com/user/{name}")
}

fn generate_hint(description: &Path) -> String {
    if description == Path::new("cta.json") {
        "archgen generate".into()
    } else {
        format!("archgen generate {}", description.display())
    }
}

fn show_domains(desc: &ProjectDescription, output: &OutputManager) -> CliResult<()> {
    output.header(&format!(
        "Generated {} default domains with example entities and CRUD operations:",
        desc.domains.len()
    ))?;
    for (i, domain) in desc.domains.iter().enumerate() {
        output.print(&format!(
            "  {}. {} Domain - Entities: {}",
            i + 1,
            domain.name,
            domain.entities.join(", ")
        ))?;
    }
    Ok(())
}

#[cfg(feature = "interactive")]
fn prompt(args: &InitArgs, output: &OutputManager) -> CliResult<InitOptions> {
    use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};

    if !console::user_attended() {
        return Err(CliError::InvalidInput {
            message: "cannot prompt without a terminal; pass --yes to use flags and defaults"
                .into(),
            source: None,
        });
    }

    output.header("Clean Architecture Generator - Project Initialization")?;
    let theme = ColorfulTheme::default();
    let defaults = options_from_flags(args);

    let name: String = Input::with_theme(&theme)
        .with_prompt("Project name")
        .default(defaults.name.clone())
        .interact_text()
        .map_err(prompt_failed)?;

    let module: String = Input::with_theme(&theme)
        .with_prompt("Go module (e.g., github.com/user/project)")
        .default(args.module.clone().unwrap_or_else(|| default_module(&name)))
        .interact_text()
        .map_err(prompt_failed)?;

    const SERVERS: [ServerKind; 2] = [ServerKind::Gin, ServerKind::Fiber];
    let server = Select::with_theme(&theme)
        .with_prompt("Server framework")
        .items(&["Gin", "Fiber"])
        .default(SERVERS.iter().position(|s| *s == defaults.server).unwrap_or(0))
        .interact()
        .map_err(prompt_failed)?;

    const DATABASES: [DatabaseKind; 3] =
        [DatabaseKind::Postgres, DatabaseKind::MongoDb, DatabaseKind::Both];
    let database = Select::with_theme(&theme)
        .with_prompt("Database")
        .items(&["PostgreSQL", "MongoDB", "Both PostgreSQL and MongoDB"])
        .default(DATABASES.iter().position(|d| *d == defaults.database).unwrap_or(0))
        .interact()
        .map_err(prompt_failed)?;

    let events = Confirm::with_theme(&theme)
        .with_prompt("Enable event system (RabbitMQ)?")
        .default(defaults.events)
        .interact()
        .map_err(prompt_failed)?;

    let domain_count: usize = Input::with_theme(&theme)
        .with_prompt("How many domains do you want to create? (1-5)")
        .default(defaults.domain_count)
        .validate_with(|n: &usize| {
            if (1..=5).contains(n) {
                Ok(())
            } else {
                Err("enter a number from 1 to 5")
            }
        })
        .interact_text()
        .map_err(prompt_failed)?;

    Ok(InitOptions {
        name,
        module,
        server: SERVERS[server],
        database: DATABASES[database],
        events,
        domain_count,
    })
}

#[cfg(feature = "interactive")]
fn prompt_failed(err: dialoguer::Error) -> CliError {
    match err {
        dialoguer::Error::IO(e) if e.kind() == std::io::ErrorKind::Interrupted => {
            CliError::Cancelled
        }
        other => CliError::InvalidInput {
            message: format!("prompt failed: {other}"),
            source: Some(Box::new(other)),
        },
    }
}

#[cfg(not(feature = "interactive"))]
fn prompt(_args: &InitArgs, _output: &OutputManager) -> CliResult<InitOptions> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}
