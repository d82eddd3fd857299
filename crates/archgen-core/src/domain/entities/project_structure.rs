use std::collections::HashSet;

use serde_json::Value;

use crate::domain::entities::common::RelativePath;
use crate::domain::entities::template::TemplateName;
use crate::domain::error::DomainError;

/// Output plan for one config-driven run.
///
/// Lists the directories to create and, for each file, which template to
/// render with which data. Rendering and writing happen later, behind ports,
/// so the plan itself is plain data.
#[derive(Debug, Clone, Default)]
pub struct ProjectStructure {
    pub(crate) entries: Vec<FsEntry>,
}

impl ProjectStructure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_directory(&mut self, path: RelativePath) {
        if self.contains(&path) {
            return;
        }
        self.entries
            .push(FsEntry::Directory(DirectoryToCreate { path }));
    }

    /// Plan a file. Returns `false` when the path is already planned; the
    /// first plan for a path wins.
    pub fn add_file(&mut self, path: RelativePath, template: TemplateName, data: Value) -> bool {
        if self.contains(&path) {
            return false;
        }
        self.entries.push(FsEntry::File(FileToRender {
            path,
            template,
            data,
        }));
        true
    }

    pub fn with_directory(mut self, path: RelativePath) -> Self {
        self.add_directory(path);
        self
    }

    pub fn with_file(mut self, path: RelativePath, template: TemplateName, data: Value) -> Self {
        self.add_file(path, template, data);
        self
    }

    fn contains(&self, path: &RelativePath) -> bool {
        self.entries.iter().any(|e| e.path() == path)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::EmptyOutputPlan);
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            if !seen.insert(entry.path()) {
                return Err(DomainError::DuplicatePath {
                    path: entry.path().to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToRender> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectoryToCreate> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::Directory(d) => Some(d),
            _ => None,
        })
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone)]
pub enum FsEntry {
    File(FileToRender),
    Directory(DirectoryToCreate),
}

impl FsEntry {
    pub fn path(&self) -> &RelativePath {
        match self {
            Self::File(f) => &f.path,
            Self::Directory(d) => &d.path,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileToRender {
    pub path: RelativePath,
    pub template: TemplateName,
    pub data: Value,
}

#[derive(Debug, Clone)]
pub struct DirectoryToCreate {
    pub path: RelativePath,
}
