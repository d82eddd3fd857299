//! Implementation Service - emits stubs, factory and wiring for a model.

use std::path::Path;

use tracing::{info, instrument};

use crate::{
    application::{
        ports::{Filesystem, Reporter},
        services::file_writer::{FileWriter, WriteSummary},
    },
    domain::{GeneratorOptions, SourceModel, WritePolicy, codegen, entities::GeneratedFile},
};

pub struct ImplementationService {
    filesystem: Box<dyn Filesystem>,
    reporter: Box<dyn Reporter>,
}

impl ImplementationService {
    pub fn new(filesystem: Box<dyn Filesystem>, reporter: Box<dyn Reporter>) -> Self {
        Self {
            filesystem,
            reporter,
        }
    }

    /// Render every output file for `model` in memory.
    ///
    /// An empty model yields no files and a warning.
    #[instrument(skip_all, fields(interfaces = model.interfaces.len()))]
    pub fn generate(&self, model: &SourceModel, options: &GeneratorOptions) -> Vec<GeneratedFile> {
        if model.interfaces.is_empty() {
            self.reporter.warning("No interfaces found");
            return Vec::new();
        }
        let files = codegen::generate_all(model, options);
        info!(files = files.len(), "implementation files rendered");
        files
    }

    /// Report what a write would produce without touching the filesystem.
    pub fn preview(&self, files: &[GeneratedFile]) {
        for file in files {
            self.reporter.info(&format!(
                "Would generate: {} ({} bytes, {} lines)",
                file.path.display(),
                file.size(),
                file.line_count
            ));
        }
    }

    /// Write `files` under `output_dir`, skipping existing ones unless forced.
    #[instrument(skip_all, fields(output = %output_dir.display(), force = force))]
    pub fn write(&self, files: &[GeneratedFile], output_dir: &Path, force: bool) -> WriteSummary {
        let mut writer = FileWriter::new(
            self.filesystem.as_ref(),
            self.reporter.as_ref(),
            WritePolicy::skip_unless_forced(force),
        );
        for file in files {
            writer.write(output_dir, &file.path, &file.content);
        }
        let summary = writer.finish();
        info!(%summary, "implementation files written");
        summary
    }
}
