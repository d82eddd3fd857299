//! Domain value objects: Layer, DatabaseKind, StoreKind, ServerKind.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! They hold NO classification logic. Name heuristics live in
//! `classification.rs`. This file's only job is to define the types, their
//! string representations, and their `FromStr` parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Layer ────────────────────────────────────────────────────────────────────

/// Architectural layer of an interface, inferred from its name.
///
/// The string forms double as the suffix of generated file names
/// (`user_repository.gen.go`), so they must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    /// Persistence layer (`...Repo`, `...Repository`).
    Repository,
    /// Use-case layer (`...UseCase`).
    UseCase,
    /// Delivery layer (`...Handler`, `...Controller`).
    Handler,
    /// Generic service layer; also the fallback.
    Service,
}

impl Layer {
    pub const ALL: [Layer; 4] = [Self::Repository, Self::UseCase, Self::Handler, Self::Service];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Repository => "repository",
            Self::UseCase => "usecase",
            Self::Handler => "handler",
            Self::Service => "service",
        }
    }

    /// The layer a constructor of this layer depends on, if any.
    ///
    /// Repositories depend on the database handle rather than on a layer,
    /// so they return `None` like services.
    pub const fn dependency(&self) -> Option<Layer> {
        match self {
            Self::UseCase => Some(Self::Repository),
            Self::Handler => Some(Self::UseCase),
            Self::Repository | Self::Service => None,
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── DatabaseKind ─────────────────────────────────────────────────────────────

/// Project-wide database selection from the description's `database.type`.
///
/// An empty string selects [`DatabaseKind::Unspecified`], which keeps the
/// legacy single-connection layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatabaseKind {
    #[serde(rename = "postgres")]
    Postgres,
    #[serde(rename = "mongodb")]
    MongoDb,
    #[serde(rename = "both")]
    Both,
    #[default]
    #[serde(rename = "")]
    Unspecified,
}

impl DatabaseKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::MongoDb => "mongodb",
            Self::Both => "both",
            Self::Unspecified => "",
        }
    }

    pub const fn uses_postgres(&self) -> bool {
        matches!(self, Self::Postgres | Self::Both)
    }

    pub const fn uses_mongodb(&self) -> bool {
        matches!(self, Self::MongoDb | Self::Both)
    }

    pub const fn is_specified(&self) -> bool {
        !matches!(self, Self::Unspecified)
    }
}

impl fmt::Display for DatabaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatabaseKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
            "mongodb" | "mongo" => Ok(Self::MongoDb),
            "both" => Ok(Self::Both),
            "" => Ok(Self::Unspecified),
            other => Err(DomainError::UnknownDatabaseKind(other.to_string())),
        }
    }
}

// ── StoreKind ────────────────────────────────────────────────────────────────

/// Backing store of a single repository.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoreKind {
    #[serde(rename = "postgres")]
    Postgres,
    #[serde(rename = "mongodb")]
    MongoDb,
    #[default]
    #[serde(rename = "")]
    Unspecified,
}

impl StoreKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::MongoDb => "mongodb",
            Self::Unspecified => "",
        }
    }

    /// The store actually generated for; unspecified falls back to postgres.
    pub const fn effective(&self) -> StoreKind {
        match self {
            Self::MongoDb => Self::MongoDb,
            Self::Postgres | Self::Unspecified => Self::Postgres,
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ServerKind ───────────────────────────────────────────────────────────────

/// Web framework for generated HTTP handlers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerKind {
    #[default]
    Gin,
    Fiber,
}

impl ServerKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Gin => "gin",
            Self::Fiber => "fiber",
        }
    }
}

impl fmt::Display for ServerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServerKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gin" => Ok(Self::Gin),
            "fiber" => Ok(Self::Fiber),
            other => Err(DomainError::UnknownServerKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_strings_are_file_suffixes() {
        let names: Vec<_> = Layer::ALL.iter().map(Layer::as_str).collect();
        assert_eq!(names, ["repository", "usecase", "handler", "service"]);
    }

    #[test]
    fn layer_dependencies_chain_downwards() {
        assert_eq!(Layer::Handler.dependency(), Some(Layer::UseCase));
        assert_eq!(Layer::UseCase.dependency(), Some(Layer::Repository));
        assert_eq!(Layer::Repository.dependency(), None);
        assert_eq!(Layer::Service.dependency(), None);
    }

    #[test]
    fn database_kind_parses_aliases() {
        assert_eq!("Postgres".parse::<DatabaseKind>().unwrap(), DatabaseKind::Postgres);
        assert_eq!("mongo".parse::<DatabaseKind>().unwrap(), DatabaseKind::MongoDb);
        assert_eq!("".parse::<DatabaseKind>().unwrap(), DatabaseKind::Unspecified);
        assert!("oracle".parse::<DatabaseKind>().is_err());
    }

    #[test]
    fn both_uses_every_store() {
        assert!(DatabaseKind::Both.uses_postgres());
        assert!(DatabaseKind::Both.uses_mongodb());
        assert!(!DatabaseKind::Unspecified.uses_postgres());
        assert!(!DatabaseKind::Unspecified.is_specified());
    }

    #[test]
    fn database_kind_deserializes_empty_string() {
        let kind: DatabaseKind = serde_json::from_str("\"\"").unwrap();
        assert_eq!(kind, DatabaseKind::Unspecified);
        let kind: DatabaseKind = serde_json::from_str("\"both\"").unwrap();
        assert_eq!(kind, DatabaseKind::Both);
    }

    #[test]
    fn unspecified_store_falls_back_to_postgres() {
        assert_eq!(StoreKind::Unspecified.effective(), StoreKind::Postgres);
        assert_eq!(StoreKind::MongoDb.effective(), StoreKind::MongoDb);
    }

    #[test]
    fn server_kind_rejects_unknown() {
        assert_eq!("FIBER".parse::<ServerKind>().unwrap(), ServerKind::Fiber);
        assert!(matches!(
            "echo".parse::<ServerKind>(),
            Err(DomainError::UnknownServerKind(_))
        ));
    }
}
