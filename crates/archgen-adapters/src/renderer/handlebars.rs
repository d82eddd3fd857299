//! Handlebars-backed [`TemplateRenderer`].

use handlebars::{Handlebars, handlebars_helper, no_escape};
use serde_json::Value;
use tracing::{debug, instrument};

use archgen_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::{TemplateName, naming},
    error::ArchgenResult,
};

use crate::templates::BUILTIN_TEMPLATES;

handlebars_helper!(lower: |s: str| naming::lower_first(s));
handlebars_helper!(upper: |s: str| s.to_uppercase());
handlebars_helper!(snake_case: |s: str| naming::to_snake_case(s));
handlebars_helper!(contains: |s: str, needle: str| s.contains(needle));
handlebars_helper!(uses_postgres: |db: str| matches!(db, "postgres" | "both"));
handlebars_helper!(uses_mongo: |db: str| matches!(db, "mongodb" | "both"));

/// Renders the built-in Go templates.
///
/// Output is never HTML-escaped: templates emit Go source, YAML and SQL.
pub struct HandlebarsRenderer {
    registry: Handlebars<'static>,
}

impl HandlebarsRenderer {
    /// Registry with every built-in template and helper.
    pub fn new() -> ArchgenResult<Self> {
        Self::with_templates(BUILTIN_TEMPLATES.iter().copied())
    }

    /// Registry over an explicit `(key, source)` set.
    pub fn with_templates<'a>(
        templates: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> ArchgenResult<Self> {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(no_escape);

        registry.register_helper("lower", Box::new(lower));
        registry.register_helper("lowerFirstChar", Box::new(lower));
        registry.register_helper("upper", Box::new(upper));
        registry.register_helper("snakeCase", Box::new(snake_case));
        registry.register_helper("contains", Box::new(contains));
        registry.register_helper("usesPostgres", Box::new(uses_postgres));
        registry.register_helper("usesMongo", Box::new(uses_mongo));

        for (key, source) in templates {
            registry
                .register_template_string(key, source)
                .map_err(|e| ApplicationError::RenderingFailed {
                    template: key.to_string(),
                    reason: e.to_string(),
                })?;
        }
        debug!(count = registry.get_templates().len(), "templates registered");

        Ok(Self { registry })
    }

    pub fn has_template(&self, name: TemplateName) -> bool {
        self.registry.has_template(name.key())
    }
}

impl TemplateRenderer for HandlebarsRenderer {
    #[instrument(skip_all, fields(template = %name))]
    fn render(&self, name: TemplateName, data: &Value) -> ArchgenResult<String> {
        self.registry.render(name.key(), data).map_err(|e| {
            ApplicationError::RenderingFailed {
                template: name.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}
