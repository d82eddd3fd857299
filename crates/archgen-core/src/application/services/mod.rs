//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a project" or "analyze a module".

pub mod analysis_service;
pub mod file_writer;
pub mod implementation_service;
pub mod scaffold_service;

pub use analysis_service::{AnalysisService, MODULE_FILE};
pub use file_writer::{FileWriter, WriteSummary};
pub use implementation_service::ImplementationService;
pub use scaffold_service::{ScaffoldService, TemplateInfo};
