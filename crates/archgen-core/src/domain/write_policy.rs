//! Overwrite policy for generated files.

use serde::{Deserialize, Serialize};

/// How existing files are treated on write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WritePolicy {
    pub skip_existing: bool,
    pub backup: bool,
    pub force: bool,
}

impl Default for WritePolicy {
    fn default() -> Self {
        Self {
            skip_existing: true,
            backup: false,
            force: false,
        }
    }
}

/// What to do with one target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteAction {
    Skip,
    Write,
    BackupThenWrite,
}

/// Suffix appended to the existing file's name when backing up.
pub const BACKUP_SUFFIX: &str = ".backup";

impl WritePolicy {
    /// Policy used by the analysis pipeline: skip unless forced.
    pub const fn skip_unless_forced(force: bool) -> Self {
        Self {
            skip_existing: true,
            backup: false,
            force,
        }
    }

    /// Decide for a target that does or does not exist yet.
    pub const fn decide(&self, exists: bool) -> WriteAction {
        if !exists {
            return WriteAction::Write;
        }
        if self.skip_existing && !self.force {
            return WriteAction::Skip;
        }
        if self.backup {
            WriteAction::BackupThenWrite
        } else {
            WriteAction::Write
        }
    }
}
