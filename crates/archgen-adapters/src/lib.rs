//! Infrastructure adapters for archgen.
//!
//! This crate implements the ports defined in `archgen-core::application::ports`:
//! filesystem access, Go source parsing, template rendering and reporting.
//! All I/O and third-party engines live here.

pub mod filesystem;
pub mod parser;
pub mod renderer;
pub mod reporter;
pub mod templates;

pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use parser::GoSourceParser;
pub use renderer::HandlebarsRenderer;
pub use reporter::{MemoryReporter, TracingReporter};
