//! Template catalog for the config-driven pipeline.
//!
//! Each built-in template is described once in [`TEMPLATE_CATALOG`]: its
//! stable key (used by renderers to register the template body), the output
//! path pattern it produces and a one-line description for `archgen templates`.
//! The template bodies themselves live with the renderer adapter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Name of a built-in template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TemplateName {
    GoMod,
    Main,
    Readme,
    Makefile,
    PostgresEntity,
    MongoEntity,
    SqlcConfig,
    SqlcQuery,
    RepositoryInterface,
    PostgresRepository,
    MongoRepository,
    UseCase,
    Handler,
    PostgresConnection,
    PostgresSchema,
    MongoConnection,
    EventBus,
    Config,
    Logger,
}

/// Static description of one template.
#[derive(Debug, Clone, Copy)]
pub struct TemplateDef {
    pub name: TemplateName,
    pub key: &'static str,
    pub output: &'static str,
    pub description: &'static str,
}

/// Every built-in template, in generation order.
pub static TEMPLATE_CATALOG: &[TemplateDef] = &[
    TemplateDef {
        name: TemplateName::GoMod,
        key: "go_mod",
        output: "go.mod",
        description: "Module file with framework, driver and broker requirements",
    },
    TemplateDef {
        name: TemplateName::Main,
        key: "main",
        output: "cmd/server/main.go",
        description: "Server entry point wiring repositories, use cases and handlers",
    },
    TemplateDef {
        name: TemplateName::Readme,
        key: "readme",
        output: "README.md",
        description: "Project overview and layout",
    },
    TemplateDef {
        name: TemplateName::Makefile,
        key: "makefile",
        output: "Makefile",
        description: "Build, run, test and code generation targets",
    },
    TemplateDef {
        name: TemplateName::PostgresEntity,
        key: "entity_postgres",
        output: "internal/domain/entity/<entity>.go",
        description: "Entity struct with db tags",
    },
    TemplateDef {
        name: TemplateName::MongoEntity,
        key: "entity_mongodb",
        output: "internal/domain/entity/<entity>.go",
        description: "Entity struct with bson tags",
    },
    TemplateDef {
        name: TemplateName::SqlcConfig,
        key: "sqlc_config",
        output: "sqlc.yaml",
        description: "sqlc code generation settings",
    },
    TemplateDef {
        name: TemplateName::SqlcQuery,
        key: "sqlc_query",
        output: "db/queries/<entity>.sql",
        description: "CRUD queries for a postgres entity",
    },
    TemplateDef {
        name: TemplateName::RepositoryInterface,
        key: "repository",
        output: "internal/domain/repository/<repository>.go",
        description: "Repository interface",
    },
    TemplateDef {
        name: TemplateName::PostgresRepository,
        key: "repository_postgres",
        output: "internal/infrastructure/database/postgres/<repository>_impl.go",
        description: "Repository implementation on pgx",
    },
    TemplateDef {
        name: TemplateName::MongoRepository,
        key: "repository_mongodb",
        output: "internal/infrastructure/database/mongodb/<repository>_impl.go",
        description: "Repository implementation on the mongo driver",
    },
    TemplateDef {
        name: TemplateName::UseCase,
        key: "usecase",
        output: "internal/usecase/<usecase>.go",
        description: "Use case with request and response types",
    },
    TemplateDef {
        name: TemplateName::Handler,
        key: "handler",
        output: "internal/handler/http/<handler>.go",
        description: "HTTP handler with routes for gin or fiber",
    },
    TemplateDef {
        name: TemplateName::PostgresConnection,
        key: "connection_postgres",
        output: "internal/infrastructure/database/postgres/connection.go",
        description: "Postgres connection pool",
    },
    TemplateDef {
        name: TemplateName::PostgresSchema,
        key: "with_schema",
        output: "internal/infrastructure/database/postgres/with_schema.go",
        description: "Schema-scoped connection helper",
    },
    TemplateDef {
        name: TemplateName::MongoConnection,
        key: "connection_mongodb",
        output: "internal/infrastructure/database/mongodb/connection.go",
        description: "MongoDB client setup",
    },
    TemplateDef {
        name: TemplateName::EventBus,
        key: "eventbus",
        output: "internal/infrastructure/events/eventbus.go",
        description: "RabbitMQ publisher and subscriber",
    },
    TemplateDef {
        name: TemplateName::Config,
        key: "config",
        output: "internal/infrastructure/config/config.go",
        description: "Environment-driven application config",
    },
    TemplateDef {
        name: TemplateName::Logger,
        key: "logger",
        output: "pkg/logger/logger.go",
        description: "Logger interface over logrus",
    },
];

impl TemplateName {
    pub fn def(&self) -> &'static TemplateDef {
        // The catalog lists every variant, so the fallback is unreachable.
        TEMPLATE_CATALOG
            .iter()
            .find(|def| def.name == *self)
            .unwrap_or(&TEMPLATE_CATALOG[0])
    }

    pub fn key(&self) -> &'static str {
        self.def().key
    }

    pub fn output_pattern(&self) -> &'static str {
        self.def().output
    }

    pub fn all() -> impl Iterator<Item = TemplateName> {
        TEMPLATE_CATALOG.iter().map(|def| def.name)
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TemplateName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TEMPLATE_CATALOG
            .iter()
            .find(|def| def.key == s)
            .map(|def| def.name)
            .ok_or_else(|| DomainError::InvalidDescription(format!("unknown template '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn catalog_covers_every_variant_once() {
        let names: HashSet<_> = TemplateName::all().collect();
        assert_eq!(names.len(), TEMPLATE_CATALOG.len());
        assert_eq!(TEMPLATE_CATALOG.len(), 19);
    }

    #[test]
    fn keys_are_unique_and_parse_back() {
        let keys: HashSet<_> = TEMPLATE_CATALOG.iter().map(|d| d.key).collect();
        assert_eq!(keys.len(), TEMPLATE_CATALOG.len());
        for name in TemplateName::all() {
            assert_eq!(name.key().parse::<TemplateName>().unwrap(), name);
        }
    }

    #[test]
    fn def_lookup_matches_variant() {
        assert_eq!(TemplateName::Logger.output_pattern(), "pkg/logger/logger.go");
        assert_eq!(TemplateName::PostgresSchema.key(), "with_schema");
    }
}
