//! Analysis Service - walks a Go module and builds the [`SourceModel`].

use std::path::{Component, Path};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, Reporter, SourceParser},
    },
    domain::{
        DomainError, SourceModel, build_constraints, classification::classify_layer,
        codegen::GENERATED_SUFFIX, relationships,
    },
    error::ArchgenResult,
};

/// Module-identity file expected at the analysis root.
pub const MODULE_FILE: &str = "go.mod";

const SKIPPED_DIRECTORIES: [&str; 3] = ["vendor", ".git", "testdata"];

/// Extracts interfaces and structs from every eligible source file.
pub struct AnalysisService {
    filesystem: Box<dyn Filesystem>,
    parser: Box<dyn SourceParser>,
    reporter: Box<dyn Reporter>,
}

impl AnalysisService {
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        parser: Box<dyn SourceParser>,
        reporter: Box<dyn Reporter>,
    ) -> Self {
        Self {
            filesystem,
            parser,
            reporter,
        }
    }

    /// Analyze the module rooted at `root`.
    ///
    /// Files that cannot be read or parsed are reported and skipped. The run
    /// fails only when the module file is missing or has no `module` line,
    /// the tree cannot be walked, or no source file is found at all.
    #[instrument(skip_all, fields(root = %root.display(), tags = tags.len()))]
    pub fn analyze(&self, root: &Path, tags: &[String]) -> ArchgenResult<SourceModel> {
        let module = self.read_module(root)?;
        info!(%module, "module identified");

        let files = self
            .filesystem
            .list_files(root)
            .map_err(|e| ApplicationError::WalkFailed {
                root: root.to_path_buf(),
                reason: e.to_string(),
            })?;

        let sources: Vec<_> = files
            .into_iter()
            .filter(|path| is_candidate(path.strip_prefix(root).unwrap_or(path)))
            .collect();
        if sources.is_empty() {
            return Err(ApplicationError::NoSourceFiles {
                root: root.to_path_buf(),
            }
            .into());
        }

        let mut model = SourceModel::new(module);
        for path in &sources {
            let relative = path.strip_prefix(root).unwrap_or(path);
            let shown = relative.display();

            let source = match self.filesystem.read_to_string(path) {
                Ok(source) => source,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "unreadable source file");
                    self.reporter
                        .warning(&format!("Failed to read {shown}: {e}"));
                    continue;
                }
            };

            if !build_constraints::includes(tags, &source) {
                debug!(path = %path.display(), "excluded by build constraints");
                self.reporter
                    .info(&format!("Skipping {shown} due to build constraints"));
                continue;
            }

            let parsed = match self.parser.parse(relative, &source) {
                Ok(parsed) => parsed,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "parse failed");
                    self.reporter
                        .warning(&format!("Failed to parse {shown}: {e}"));
                    continue;
                }
            };

            for decl in &parsed.interfaces {
                let layer = classify_layer(&decl.name);
                debug!(interface = %decl.name, %layer, "interface found");
                self.reporter
                    .info(&format!("Found interface: {} ({layer} layer)", decl.name));
            }
            model.absorb(parsed);
        }

        relationships::resolve(&mut model);
        info!(
            interfaces = model.interfaces.len(),
            structs = model.structs.len(),
            "analysis finished"
        );
        Ok(model)
    }

    fn read_module(&self, root: &Path) -> ArchgenResult<String> {
        let path = root.join(MODULE_FILE);
        if !self.filesystem.exists(&path) {
            return Err(ApplicationError::ModuleFileMissing { path }.into());
        }
        let content = self
            .filesystem
            .read_to_string(&path)
            .map_err(|_| ApplicationError::ModuleFileMissing { path: path.clone() })?;

        module_declaration(&content).map(String::from).ok_or_else(|| {
            DomainError::MissingModuleDeclaration {
                path: path.display().to_string(),
            }
            .into()
        })
    }
}

/// The path after the first `module` directive, if any.
pub fn module_declaration(go_mod: &str) -> Option<&str> {
    go_mod
        .lines()
        .map(str::trim)
        .filter_map(|line| line.strip_prefix("module"))
        .filter(|rest| rest.starts_with(char::is_whitespace))
        .map(|rest| rest.trim().trim_matches('"'))
        .find(|module| !module.is_empty())
}

/// Whether a path, relative to the analysis root, is a Go file worth parsing.
fn is_candidate(relative: &Path) -> bool {
    let Some(name) = relative.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if !name.ends_with(".go") || name.ends_with("_test.go") || name.ends_with(GENERATED_SUFFIX) {
        return false;
    }
    !relative.components().any(|c| match c {
        Component::Normal(part) => SKIPPED_DIRECTORIES
            .iter()
            .any(|skipped| part == std::ffi::OsStr::new(skipped)),
        _ => false,
    })
}
