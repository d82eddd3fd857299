//! Policy-aware file writing shared by both pipelines.

use std::fmt;
use std::path::Path;

use tracing::{debug, warn};

use crate::{
    application::ports::{Filesystem, Reporter},
    domain::write_policy::{BACKUP_SUFFIX, WriteAction, WritePolicy},
};

/// Outcome counts for one generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteSummary {
    pub written: usize,
    pub skipped: usize,
    pub failed: usize,
    pub backed_up: usize,
}

impl WriteSummary {
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    pub fn total(&self) -> usize {
        self.written + self.skipped + self.failed
    }
}

impl fmt::Display for WriteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} generated, {} skipped, {} failed",
            self.written, self.skipped, self.failed
        )?;
        if self.backed_up > 0 {
            write!(f, ", {} backed up", self.backed_up)?;
        }
        Ok(())
    }
}

/// Writes files under a root, applying a [`WritePolicy`] per target.
///
/// Per-file failures are reported and counted, never returned.
pub struct FileWriter<'a> {
    filesystem: &'a dyn Filesystem,
    reporter: &'a dyn Reporter,
    policy: WritePolicy,
    summary: WriteSummary,
}

impl<'a> FileWriter<'a> {
    pub fn new(
        filesystem: &'a dyn Filesystem,
        reporter: &'a dyn Reporter,
        policy: WritePolicy,
    ) -> Self {
        Self {
            filesystem,
            reporter,
            policy,
            summary: WriteSummary::default(),
        }
    }

    /// Write `content` to `root/relative`.
    pub fn write(&mut self, root: &Path, relative: &Path, content: &str) {
        let target = root.join(relative);
        let shown = relative.display();

        match self.policy.decide(self.filesystem.exists(&target)) {
            WriteAction::Skip => {
                debug!(path = %target.display(), "skipping existing file");
                self.reporter
                    .info(&format!("Skipping existing file: {shown}"));
                self.summary.skipped += 1;
                return;
            }
            WriteAction::BackupThenWrite => {
                let mut backup = target.clone().into_os_string();
                backup.push(BACKUP_SUFFIX);
                match self.filesystem.copy_file(&target, Path::new(&backup)) {
                    Ok(()) => {
                        self.reporter.info(&format!("Backed up {shown}"));
                        self.summary.backed_up += 1;
                    }
                    Err(e) => {
                        warn!(path = %target.display(), error = %e, "backup failed");
                        self.reporter
                            .warning(&format!("Failed to back up {shown}: {e}"));
                    }
                }
            }
            WriteAction::Write => {}
        }

        match self.filesystem.write_file(&target, content) {
            Ok(()) => {
                self.reporter.success(&format!("Generated: {shown}"));
                self.summary.written += 1;
            }
            Err(e) => {
                warn!(path = %target.display(), error = %e, "write failed");
                self.reporter
                    .error(&format!("Failed to write {shown}: {e}"));
                self.summary.failed += 1;
            }
        }
    }

    pub fn finish(self) -> WriteSummary {
        self.summary
    }
}
