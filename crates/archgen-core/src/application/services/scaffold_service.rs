//! Scaffold Service - config-driven pipeline orchestrator.
//!
//! This service coordinates the whole config-driven workflow:
//! 1. Load and validate the project description
//! 2. Plan directories and (template, data) pairs
//! 3. Render each template
//! 4. Write to the filesystem under the write policy

use std::path::Path;
use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, Reporter, TemplateRenderer},
        services::file_writer::{FileWriter, WriteSummary},
    },
    domain::{
        DomainValidator as validator, ProjectDescription, ProjectStructure, WritePolicy,
        blueprint,
        entities::TEMPLATE_CATALOG,
    },
    error::{ArchgenError, ArchgenResult},
};

/// Information about a template for display purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateInfo {
    pub name: String,
    pub output: String,
    pub description: String,
}

/// Main config-driven generation service.
pub struct ScaffoldService {
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    reporter: Box<dyn Reporter>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
        reporter: Box<dyn Reporter>,
    ) -> Self {
        Self {
            renderer,
            filesystem,
            reporter,
        }
    }

    /// Read and validate a project description file.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load_description(&self, path: impl AsRef<Path>) -> ArchgenResult<ProjectDescription> {
        let path = path.as_ref();
        if !self.filesystem.exists(path) {
            return Err(ApplicationError::ConfigNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        let raw = self.filesystem.read_to_string(path)?;
        let desc: ProjectDescription =
            serde_json::from_str(&raw).map_err(|e| ApplicationError::ConfigParse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        validator::validate_description(&desc).map_err(ArchgenError::Domain)?;
        info!(project = %desc.project.name, domains = desc.domains.len(), "description loaded");
        Ok(desc)
    }

    /// Persist `desc` as pretty JSON, as `archgen init` does.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn save_description(
        &self,
        desc: &ProjectDescription,
        path: impl AsRef<Path>,
    ) -> ArchgenResult<()> {
        let json = serde_json::to_string_pretty(desc).map_err(|e| ArchgenError::Internal {
            message: format!("serialising project description: {e}"),
        })?;
        self.filesystem.write_file(path.as_ref(), &json)
    }

    /// Plan the output without touching the filesystem.
    pub fn plan(&self, desc: &ProjectDescription) -> ArchgenResult<ProjectStructure> {
        validator::validate_description(desc)?;
        let structure = blueprint::plan(desc)?;
        validator::validate_project_structure(&structure)?;
        Ok(structure)
    }

    /// Generate the project described by `desc` under `output_root`.
    ///
    /// Rendering failures abort the run; individual write failures are
    /// counted in the returned summary.
    #[instrument(
        skip_all,
        fields(
            project = %desc.project.name,
            output_path = %output_root.as_ref().display()
        )
    )]
    pub fn generate(
        &self,
        desc: &ProjectDescription,
        output_root: impl AsRef<Path>,
        policy: WritePolicy,
    ) -> ArchgenResult<WriteSummary> {
        let root = output_root.as_ref();

        for warning in validator::description_warnings(desc) {
            self.reporter.warning(&warning);
        }

        let structure = self.plan(desc)?;
        info!(entries = structure.entry_count(), "output planned");

        for dir in structure.directories() {
            self.filesystem.create_dir_all(&root.join(&dir.path))?;
        }

        let mut writer = FileWriter::new(self.filesystem.as_ref(), self.reporter.as_ref(), policy);
        for file in structure.files() {
            let content = self.renderer.render(file.template, &file.data)?;
            writer.write(root, file.path.as_path(), &content);
        }

        let summary = writer.finish();
        info!(%summary, "generation finished");
        Ok(summary)
    }

    /// Every built-in template with the output it produces.
    pub fn list_templates(&self) -> Vec<TemplateInfo> {
        TEMPLATE_CATALOG
            .iter()
            .map(|def| TemplateInfo {
                name: def.key.to_string(),
                output: def.output.to_string(),
                description: def.description.to_string(),
            })
            .collect()
    }
}
