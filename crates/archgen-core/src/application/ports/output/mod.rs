//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `archgen-adapters` crate provides implementations.

use std::fmt;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::domain::{ParsedFile, TemplateName};
use crate::error::ArchgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `archgen_adapters::filesystem::LocalFilesystem` (production)
/// - `archgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Paths are passed through as given; services join them onto the output
/// or analysis root before calling in.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ArchgenResult<()>;

    /// Write content to a file, creating missing parent directories.
    fn write_file(&self, path: &Path, content: &str) -> ArchgenResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> ArchgenResult<String>;

    /// Copy `from` over `to`.
    fn copy_file(&self, from: &Path, to: &Path) -> ArchgenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Every regular file below `root`, recursively, in sorted order.
    ///
    /// Returned paths include `root` as their prefix.
    fn list_files(&self, root: &Path) -> ArchgenResult<Vec<PathBuf>>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `archgen_adapters::renderer::HandlebarsRenderer` (built-in catalog)
pub trait TemplateRenderer: Send + Sync {
    /// Render the named catalog template against `data`.
    fn render(&self, template: TemplateName, data: &Value) -> ArchgenResult<String>;
}

/// Port for turning one source file into raw declarations.
///
/// Implemented by:
/// - `archgen_adapters::parser::GoSourceParser` (tree-sitter)
pub trait SourceParser: Send + Sync {
    /// Parse `source`, read from `path`.
    ///
    /// A syntax error anywhere in the file fails the whole file with
    /// `ApplicationError::ParseFailed`.
    fn parse(&self, path: &Path, source: &str) -> ArchgenResult<ParsedFile>;
}

/// Severity of a user-facing progress event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
    Fatal,
}

impl Severity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Fatal => "fatal",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Port for progress reporting.
///
/// Services receive a reporter at construction and never print directly.
///
/// Implemented by:
/// - `archgen_adapters::reporter::TracingReporter`
/// - `archgen_adapters::reporter::MemoryReporter` (testing)
/// - the CLI's console reporter
pub trait Reporter: Send + Sync {
    fn report(&self, severity: Severity, message: &str);

    fn info(&self, message: &str) {
        self.report(Severity::Info, message);
    }

    fn success(&self, message: &str) {
        self.report(Severity::Success, message);
    }

    fn warning(&self, message: &str) {
        self.report(Severity::Warning, message);
    }

    fn error(&self, message: &str) {
        self.report(Severity::Error, message);
    }
}
