//! `archgen templates`: list the built-in templates.

use std::sync::Arc;

use serde_json::json;

use archgen_core::application::TemplateInfo;

use crate::{
    cli::{OutputFormat, TemplatesArgs},
    error::CliResult,
    output::OutputManager,
};

use super::scaffold_service;

pub fn execute(args: TemplatesArgs, output: Arc<OutputManager>) -> CliResult<()> {
    let templates = scaffold_service(&output)?.list_templates();

    if output.format() == OutputFormat::Json {
        let entries: Vec<_> = templates
            .iter()
            .map(|t| json!({ "name": t.name, "output": t.output, "description": t.description }))
            .collect();
        output.json(&json!(entries))?;
        return Ok(());
    }

    if args.names {
        for template in &templates {
            output.print(&template.name)?;
        }
        return Ok(());
    }

    output.header("Built-in templates:")?;
    for line in table(&templates) {
        output.print(&line)?;
    }
    Ok(())
}

fn table(templates: &[TemplateInfo]) -> Vec<String> {
    let name_width = templates.iter().map(|t| t.name.len()).max().unwrap_or(0);
    let output_width = templates.iter().map(|t| t.output.len()).max().unwrap_or(0);
    templates
        .iter()
        .map(|t| {
            format!(
                "  {:name_width$}  {:output_width$}  {}",
                t.name, t.output, t.description
            )
        })
        .collect()
}
