//! Core domain layer for archgen.
//!
//! Pure logic only: the project description and its output plan, the
//! analyzed source model, layer classification, naming rules and the Go
//! emitters. All I/O, templating and parsing happen behind ports defined in
//! the application layer.
//!
//! - **No I/O**: no filesystem, network or process calls
//! - **Deterministic**: timestamps and ordering are inputs, never ambient
//! - **Value types**: every entity is `Clone + PartialEq`

pub mod blueprint;
pub mod build_constraints;
pub mod classification;
pub mod codegen;
pub mod entities;
pub mod error;
pub mod naming;
pub mod relationships;
pub mod value_objects;
pub mod write_policy;

mod validation;

pub use entities::{
    DomainSpec, ExtractedInterface, ExtractedMethod, ExtractedStruct, GeneratedFile, HandlerSpec,
    InitOptions, ParsedFile, ProjectDescription, ProjectStructure, RelativePath, RepositorySpec,
    SourceModel, TemplateName, TypeExpr,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{DatabaseKind, Layer, ServerKind, StoreKind};

pub use codegen::GeneratorOptions;
pub use validation::DomainValidator;
pub use write_policy::{WriteAction, WritePolicy};
