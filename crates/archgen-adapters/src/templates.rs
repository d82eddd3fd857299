//! Go project templates compiled into the binary.
//!
//! Each entry is keyed by [`TemplateName::key`] so the renderer can register
//! them under the same names the planner uses.
//!
//! [`TemplateName::key`]: archgen_core::domain::TemplateName::key

macro_rules! builtin {
    ($($key:literal),* $(,)?) => {
        &[$(($key, include_str!(concat!("../templates/", $key, ".hbs")))),*]
    };
}

/// `(key, handlebars source)` for every template in the catalog.
pub const BUILTIN_TEMPLATES: &[(&str, &str)] = builtin![
    "go_mod",
    "main",
    "readme",
    "makefile",
    "entity_postgres",
    "entity_mongodb",
    "sqlc_config",
    "sqlc_query",
    "repository",
    "repository_postgres",
    "repository_mongodb",
    "usecase",
    "handler",
    "connection_postgres",
    "with_schema",
    "connection_mongodb",
    "eventbus",
    "config",
    "logger",
];

/// Source for `key`, if it ships with the binary.
pub fn source(key: &str) -> Option<&'static str> {
    BUILTIN_TEMPLATES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, src)| *src)
}

#[cfg(test)]
mod tests {
    use archgen_core::domain::TemplateName;

    use super::*;

    #[test]
    fn every_catalog_entry_has_a_source() {
        for name in TemplateName::all() {
            assert!(source(name.key()).is_some(), "no template for {name}");
        }
        assert_eq!(BUILTIN_TEMPLATES.len(), TemplateName::all().count());
    }

    #[test]
    fn makefile_recipes_use_tabs() {
        let makefile = source("makefile").unwrap();
        assert!(makefile.contains("build:\n\tgo build"));
    }
}
