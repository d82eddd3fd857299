//! Go emitters for the analysis-driven pipeline.
//!
//! Output is produced by plain string assembly: one implementation file per
//! interface, then `factory.gen.go` and `wire.gen.go`. Interfaces are visited
//! in name order and the timestamp comes from [`GeneratorOptions`], so the
//! same model always yields the same bytes.

mod factory;
mod implementation;
mod wire;

use std::collections::{BTreeSet, HashSet};

use chrono::{DateTime, SecondsFormat, Utc};

use crate::domain::entities::source_model::{GeneratedFile, SourceModel};

pub use factory::render_factory;
pub use implementation::{Dependency, dependencies, render_implementation};
pub use wire::render_wire;

pub const FACTORY_FILE: &str = "factory.gen.go";
pub const WIRE_FILE: &str = "wire.gen.go";
pub const GENERATED_SUFFIX: &str = ".gen.go";

/// Settings shared by every emitter in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub generated_at: DateTime<Utc>,
}

impl GeneratorOptions {
    pub fn new(generated_at: DateTime<Utc>) -> Self {
        Self { generated_at }
    }

    pub fn now() -> Self {
        Self::new(Utc::now())
    }

    fn timestamp(&self) -> String {
        self.generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

/// Emit every file for `model`: implementations, then factory, then wire.
///
/// When two interfaces map to the same implementation file name (for
/// example `UserRepo` and `UserRepository`), the later one falls back to a
/// name built from the full interface name.
pub fn generate_all(model: &SourceModel, options: &GeneratorOptions) -> Vec<GeneratedFile> {
    let mut used = HashSet::new();
    let mut files = Vec::with_capacity(model.interfaces.len() + 2);

    for iface in model.interfaces.values() {
        let mut file = render_implementation(iface, model, options);
        if !used.insert(file.path.clone()) {
            file.path = format!(
                "{}_{}{}",
                iface.name.to_lowercase(),
                iface.layer,
                GENERATED_SUFFIX
            )
            .into();
            used.insert(file.path.clone());
        }
        files.push(file);
    }

    files.push(render_factory(model, options));
    files.push(render_wire(model, options));
    files
}

/// Line-oriented text buffer for Go source.
#[derive(Debug, Default)]
pub(crate) struct GoBuffer {
    buf: String,
}

impl GoBuffer {
    pub(crate) fn line(&mut self, text: impl AsRef<str>) {
        self.buf.push_str(text.as_ref());
        self.buf.push('\n');
    }

    pub(crate) fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// `// Code generated ...` banner plus the package clause.
    pub(crate) fn header(&mut self, package: &str, options: &GeneratorOptions) {
        self.line("// Code generated by archgen. DO NOT EDIT.");
        self.line(format!("// Generated at: {}", options.timestamp()));
        self.blank();
        self.line(format!("package {package}"));
        self.blank();
    }

    /// Sorted import block; nothing when `imports` is empty.
    pub(crate) fn imports(&mut self, imports: &BTreeSet<String>) {
        if imports.is_empty() {
            return;
        }
        self.line("import (");
        for import in imports {
            self.line(format!("\t{import}"));
        }
        self.line(")");
        self.blank();
    }

    pub(crate) fn finish(self) -> String {
        self.buf
    }
}
