//! Application layer for archgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, AnalysisService,
//!   ImplementationService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    AnalysisService, FileWriter, ImplementationService, ScaffoldService, TemplateInfo,
    WriteSummary,
};

pub use ports::{Filesystem, Reporter, Severity, SourceParser, TemplateRenderer};

pub use error::ApplicationError;
