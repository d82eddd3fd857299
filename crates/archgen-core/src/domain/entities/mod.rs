pub mod common;
pub mod project;
pub mod project_structure;
pub mod source_model;
pub mod template;
pub mod type_expr;

pub use crate::domain::DomainError;
pub use common::RelativePath;
pub use project::{
    DatabaseSettings, DomainSpec, EventSettings, HandlerSpec, InitOptions, ProjectDescription,
    ProjectInfo, RepositorySpec, ServerSettings, default_domains,
};
pub use project_structure::{DirectoryToCreate, FileToRender, FsEntry, ProjectStructure};
pub use source_model::{
    ExtractedInterface, ExtractedMethod, ExtractedStruct, Field, GeneratedFile, Import,
    InterfaceDecl, MethodDecl, Param, ParsedFile, SourceModel, StructDecl,
};
pub use template::{TEMPLATE_CATALOG, TemplateDef, TemplateName};
pub use type_expr::TypeExpr;
