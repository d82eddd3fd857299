// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (collected into reports)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Project description errors
    // ========================================================================
    #[error("Invalid project description: {0}")]
    InvalidDescription(String),

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("Unknown database type '{0}' (expected postgres, mongodb or both)")]
    UnknownDatabaseKind(String),

    #[error("Unknown server type '{0}' (expected gin or fiber)")]
    UnknownServerKind(String),

    // ========================================================================
    // Source model errors
    // ========================================================================
    #[error("No module declaration found in {path}")]
    MissingModuleDeclaration { path: String },

    #[error("Cannot read type expression '{text}': {reason}")]
    InvalidTypeExpression { text: String, reason: String },

    // ========================================================================
    // Output plan errors
    // ========================================================================
    #[error("Output plan is empty")]
    EmptyOutputPlan,

    #[error("Duplicate output path: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidDescription(msg) => vec![
                "Check your project description file".into(),
                format!("Details: {}", msg),
            ],
            Self::MissingRequiredField { field } => vec![
                format!("Add the '{}' field to your project description", field),
                "Run 'archgen init' to produce a complete example".into(),
            ],
            Self::UnknownDatabaseKind(kind) => vec![
                format!("'{}' is not a supported database type", kind),
                "Supported types:".into(),
                "  • postgres - relational storage (sqlc + pgx)".into(),
                "  • mongodb  - document storage".into(),
                "  • both     - postgres and mongodb side by side".into(),
            ],
            Self::UnknownServerKind(kind) => vec![
                format!("'{}' is not a supported server framework", kind),
                "Supported frameworks: gin, fiber".into(),
            ],
            Self::MissingModuleDeclaration { path } => vec![
                format!("Add a 'module <path>' line to {}", path),
                "Or run 'go mod init <module>' in the project root".into(),
            ],
            Self::DuplicatePath { path } => vec![
                format!("Two outputs resolve to '{}'", path),
                "Rename one of the conflicting declarations".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidDescription(_)
            | Self::MissingRequiredField { .. }
            | Self::UnknownDatabaseKind(_)
            | Self::UnknownServerKind(_)
            | Self::InvalidTypeExpression { .. } => ErrorCategory::Validation,
            Self::MissingModuleDeclaration { .. } => ErrorCategory::Environment,
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Environment,
    Internal,
}
