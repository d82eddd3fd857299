//! Application layer errors.
//!
//! These errors represent failures in orchestration, not domain rules.
//! Domain errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The project description file does not exist.
    #[error("Project description not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// The project description could not be read or deserialized.
    #[error("Failed to parse project description {path}: {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    /// The analysis root has no `go.mod`.
    #[error("Module file not found at {path}")]
    ModuleFileMissing { path: PathBuf },

    /// The analysis root holds no eligible source files.
    #[error("No Go source files found under {root}")]
    NoSourceFiles { root: PathBuf },

    /// The analysis root could not be traversed.
    #[error("Failed to walk {root}: {reason}")]
    WalkFailed { root: PathBuf, reason: String },

    /// Template rendering failed.
    #[error("Rendering template '{template}' failed: {reason}")]
    RenderingFailed { template: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A single source file failed to parse. Reported, never fatal.
    #[error("Failed to parse {path}: {reason}")]
    ParseFailed { path: PathBuf, reason: String },

    /// Code generation could not produce output.
    #[error("Generation failed: {reason}")]
    GenerationFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigNotFound { path } => vec![
                format!("No file at: {}", path.display()),
                "Run 'archgen init' to create cta.json".into(),
                "Or pass the description path: archgen generate <config>".into(),
            ],
            Self::ConfigParse { reason, .. } => vec![
                format!("JSON error: {}", reason),
                "Validate the file with a JSON linter".into(),
            ],
            Self::ModuleFileMissing { path } => vec![
                format!("Expected a go.mod at {}", path.display()),
                "Run archgen-impl from the module root".into(),
                "Or create one with: go mod init <module>".into(),
            ],
            Self::NoSourceFiles { root } => vec![
                format!("No eligible .go files under {}", root.display()),
                "Test files, *.gen.go, vendor/ and testdata/ are ignored".into(),
                "Check --tags if your files carry build constraints".into(),
            ],
            Self::WalkFailed { root, .. } => vec![
                format!("Could not read directory tree at {}", root.display()),
                "Check that you have read permissions".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigNotFound { .. } => ErrorCategory::NotFound,
            Self::ConfigParse { .. } => ErrorCategory::Configuration,
            Self::ModuleFileMissing { .. }
            | Self::NoSourceFiles { .. }
            | Self::WalkFailed { .. } => ErrorCategory::Environment,
            Self::ParseFailed { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. }
            | Self::RenderingFailed { .. }
            | Self::GenerationFailed { .. } => ErrorCategory::Internal,
        }
    }
}
