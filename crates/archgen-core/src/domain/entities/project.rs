//! Project description: the declarative input of the config-driven pipeline.
//!
//! Field names follow the on-disk JSON format (`cta.json`), so a file written
//! by `archgen init` deserializes back into the same value.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::value_objects::{DatabaseKind, ServerKind, StoreKind};

/// Complete description of the application to scaffold.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDescription {
    pub project: ProjectInfo,
    #[serde(default)]
    pub domains: Vec<DomainSpec>,
    #[serde(default)]
    pub database: DatabaseSettings,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub events: EventSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub module: String,
    #[serde(default)]
    pub description: String,
}

/// One business domain and the artifacts it owns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainSpec {
    pub name: String,
    #[serde(default)]
    pub entities: Vec<String>,
    #[serde(default)]
    pub repositories: Vec<RepositorySpec>,
    #[serde(default, rename = "usecases")]
    pub use_cases: Vec<String>,
    #[serde(default)]
    pub handlers: Vec<HandlerSpec>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositorySpec {
    pub name: String,
    /// Entity persisted by this repository. Not checked against `entities`.
    #[serde(default)]
    pub entity: String,
    #[serde(default)]
    pub database: StoreKind,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HandlerSpec {
    pub name: String,
    /// Use cases injected into the handler, in constructor order.
    #[serde(default, rename = "usecases")]
    pub use_cases: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatabaseSettings {
    #[serde(default, rename = "type")]
    pub kind: DatabaseKind,
    #[serde(default)]
    pub migrations: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default, rename = "type")]
    pub kind: ServerKind,
    #[serde(default = "default_server_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            kind: ServerKind::default(),
            port: default_server_port(),
        }
    }
}

fn default_server_port() -> u16 {
    8080
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventSettings {
    #[serde(default)]
    pub enabled: bool,
    /// Broker kind, e.g. `rabbitmq`.
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

impl ProjectDescription {
    /// Check the fields every generated file depends on.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.project.name.trim().is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "project.name",
            });
        }
        if self.project.module.trim().is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "project.module",
            });
        }
        if let Some(domain) = self.domains.iter().find(|d| d.name.trim().is_empty()) {
            return Err(DomainError::InvalidDescription(format!(
                "a domain with entities {:?} has no name",
                domain.entities
            )));
        }
        Ok(())
    }

    /// Every use case declared by any domain.
    pub fn all_use_cases(&self) -> impl Iterator<Item = &str> {
        self.domains
            .iter()
            .flat_map(|d| d.use_cases.iter().map(String::as_str))
    }

    /// Build a description from the answers collected by `init`.
    pub fn from_init(options: &InitOptions) -> Self {
        let domains = default_domains(options.domain_count, options.database);
        Self {
            project: ProjectInfo {
                name: options.name.clone(),
                module: options.module.clone(),
                description: format!(
                    "Clean architecture application with {} domains",
                    domains.len()
                ),
            },
            server: ServerSettings {
                kind: options.server,
                port: default_server_port(),
            },
            database: DatabaseSettings {
                kind: options.database,
                migrations: false,
                host: Some("localhost".into()),
                port: Some(5432),
                name: Some(format!("{}_db", options.name)),
            },
            events: EventSettings {
                enabled: options.events,
                kind: "rabbitmq".into(),
                host: Some("localhost".into()),
                port: Some(5672),
            },
            domains,
        }
    }
}

impl DomainSpec {
    /// Entity → backing store, taken from the domain's repositories.
    ///
    /// When two repositories name the same entity, the later one wins.
    pub fn entity_stores(&self) -> BTreeMap<&str, StoreKind> {
        self.repositories
            .iter()
            .filter(|r| !r.entity.is_empty())
            .map(|r| (r.entity.as_str(), r.database))
            .collect()
    }

    /// Store an entity is generated for, defaulting to postgres.
    pub fn store_for(&self, entity: &str) -> StoreKind {
        self.entity_stores()
            .get(entity)
            .copied()
            .unwrap_or_default()
            .effective()
    }

    /// Whether any repository explicitly maps an entity to postgres.
    pub fn has_postgres_entities(&self) -> bool {
        self.entity_stores()
            .values()
            .any(|store| *store == StoreKind::Postgres)
    }
}

// ── init defaults ────────────────────────────────────────────────────────────

/// Answers gathered by `archgen init`, interactively or from flags.
#[derive(Debug, Clone, PartialEq)]
pub struct InitOptions {
    pub name: String,
    pub module: String,
    pub server: ServerKind,
    pub database: DatabaseKind,
    pub events: bool,
    pub domain_count: usize,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            name: String::new(),
            module: String::new(),
            server: ServerKind::Gin,
            database: DatabaseKind::Postgres,
            events: false,
            domain_count: DEFAULT_DOMAIN_COUNT,
        }
    }
}

pub const DEFAULT_DOMAIN_COUNT: usize = 2;
pub const MAX_DOMAIN_COUNT: usize = DOMAIN_CATALOG.len();

struct DomainTemplate {
    name: &'static str,
    entities: &'static [&'static str],
    use_cases: &'static [&'static str],
}

static DOMAIN_CATALOG: &[DomainTemplate] = &[
    DomainTemplate {
        name: "User",
        entities: &["User", "Profile"],
        use_cases: &[
            "CreateUser",
            "GetUser",
            "UpdateUser",
            "DeleteUser",
            "GetUserProfile",
            "UpdateProfile",
        ],
    },
    DomainTemplate {
        name: "Product",
        entities: &["Product", "Category"],
        use_cases: &[
            "CreateProduct",
            "GetProduct",
            "UpdateProduct",
            "DeleteProduct",
            "ListProducts",
            "GetProductsByCategory",
        ],
    },
    DomainTemplate {
        name: "Order",
        entities: &["Order", "OrderItem"],
        use_cases: &[
            "CreateOrder",
            "GetOrder",
            "UpdateOrder",
            "CancelOrder",
            "ListOrders",
            "GetOrderHistory",
        ],
    },
    DomainTemplate {
        name: "Auth",
        entities: &["Session", "Token"],
        use_cases: &[
            "Login",
            "Logout",
            "RefreshToken",
            "ValidateToken",
            "ResetPassword",
        ],
    },
    DomainTemplate {
        name: "Notification",
        entities: &["Notification", "Template"],
        use_cases: &[
            "SendNotification",
            "GetNotifications",
            "MarkAsRead",
            "CreateTemplate",
            "UpdateTemplate",
        ],
    },
];

/// Example domains for a fresh project.
///
/// With `DatabaseKind::Both`, even-indexed domains persist to postgres and
/// odd-indexed ones to mongodb. `count` is clamped to the catalog size.
pub fn default_domains(count: usize, database: DatabaseKind) -> Vec<DomainSpec> {
    DOMAIN_CATALOG
        .iter()
        .take(count)
        .enumerate()
        .map(|(i, template)| {
            let store = match database {
                DatabaseKind::Postgres => StoreKind::Postgres,
                DatabaseKind::MongoDb => StoreKind::MongoDb,
                DatabaseKind::Both if i % 2 == 0 => StoreKind::Postgres,
                DatabaseKind::Both => StoreKind::MongoDb,
                DatabaseKind::Unspecified => StoreKind::Unspecified,
            };
            let to_owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

            DomainSpec {
                name: template.name.into(),
                entities: to_owned(template.entities),
                repositories: template
                    .entities
                    .iter()
                    .map(|entity| RepositorySpec {
                        name: format!("{entity}Repository"),
                        entity: entity.to_string(),
                        database: store,
                    })
                    .collect(),
                use_cases: to_owned(template.use_cases),
                handlers: vec![HandlerSpec {
                    name: format!("{}Handler", template.name),
                    use_cases: to_owned(template.use_cases),
                }],
            }
        })
        .collect()
}
