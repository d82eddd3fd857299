//! In-memory model of an analyzed Go module.
//!
//! Built once per analysis run from the declarations a [`SourceParser`]
//! extracts, consumed by the code emitters and then dropped.
//!
//! [`SourceParser`]: crate::application::ports::SourceParser

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use crate::domain::classification::{base_name, classify_layer};
use crate::domain::entities::type_expr::TypeExpr;
use crate::domain::value_objects::Layer;

/// Everything the analyzer learned about a module.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceModel {
    /// Module path from `go.mod`.
    pub module: String,
    /// Package of the first parsed file; generated files use it.
    pub package: String,
    /// Import alias → import path across all files.
    pub imports: BTreeMap<String, String>,
    /// Interfaces keyed by name, so iteration order is deterministic.
    pub interfaces: BTreeMap<String, ExtractedInterface>,
    pub structs: BTreeMap<String, ExtractedStruct>,
}

impl SourceModel {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            ..Self::default()
        }
    }

    /// Merge one parsed file into the model.
    ///
    /// A later declaration with the same name replaces an earlier one.
    pub fn absorb(&mut self, file: ParsedFile) {
        if self.package.is_empty() {
            self.package = file.package.clone();
        }
        for import in file.imports {
            self.imports.insert(import.alias(), import.path);
        }
        for decl in file.interfaces {
            let iface = ExtractedInterface::from_decl(decl, &file.package, &file.path);
            self.interfaces.insert(iface.name.clone(), iface);
        }
        for decl in file.structs {
            let record = ExtractedStruct {
                name: decl.name,
                package: file.package.clone(),
                file_path: file.path.clone(),
                fields: decl.fields,
                doc_comments: decl.doc_comments,
            };
            self.structs.insert(record.name.clone(), record);
        }
    }

    pub fn interfaces_in(&self, layer: Layer) -> impl Iterator<Item = &ExtractedInterface> {
        self.interfaces.values().filter(move |i| i.layer == layer)
    }
}

/// An interface declaration with its inferred layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedInterface {
    pub name: String,
    pub package: String,
    /// Path relative to the analysis root.
    pub file_path: PathBuf,
    pub methods: Vec<ExtractedMethod>,
    pub layer: Layer,
    pub doc_comments: Vec<String>,
    /// Interfaces in other layers sharing this one's base name.
    pub related: BTreeSet<String>,
}

impl ExtractedInterface {
    pub fn from_decl(decl: InterfaceDecl, package: &str, file_path: &std::path::Path) -> Self {
        Self {
            layer: classify_layer(&decl.name),
            methods: decl.methods.into_iter().map(ExtractedMethod::from).collect(),
            name: decl.name,
            package: package.to_string(),
            file_path: file_path.to_path_buf(),
            doc_comments: decl.doc_comments,
            related: BTreeSet::new(),
        }
    }

    pub fn base_name(&self) -> &str {
        base_name(&self.name)
    }
}

/// One method signature with types already encoded as text.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedMethod {
    pub name: String,
    pub params: Vec<Param>,
    pub returns: Vec<Param>,
    /// Some parameter's type mentions `Context`.
    pub has_context: bool,
    /// The final return is exactly `error`.
    pub has_error: bool,
}

impl From<MethodDecl> for ExtractedMethod {
    fn from(decl: MethodDecl) -> Self {
        let encode = |items: Vec<(Option<String>, TypeExpr)>| {
            items
                .into_iter()
                .map(|(name, ty)| Param {
                    name,
                    ty: ty.encode(),
                })
                .collect::<Vec<_>>()
        };
        let params = encode(decl.params);
        let returns = encode(decl.returns);
        Self {
            has_context: params.iter().any(|p| p.ty.contains("Context")),
            has_error: returns.last().is_some_and(|r| r.ty == "error"),
            name: decl.name,
            params,
            returns,
        }
    }
}

/// Parameter or result: optional name plus encoded type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: Option<String>,
    pub ty: String,
}

impl Param {
    pub fn named(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ty: ty.into(),
        }
    }

    pub fn unnamed(ty: impl Into<String>) -> Self {
        Self {
            name: None,
            ty: ty.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedStruct {
    pub name: String,
    pub package: String,
    pub file_path: PathBuf,
    pub fields: Vec<Field>,
    pub doc_comments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Empty for embedded fields.
    pub name: String,
    pub ty: String,
    /// Raw tag literal including backquotes, if any.
    pub tag: Option<String>,
}

impl Field {
    pub fn is_embedded(&self) -> bool {
        self.name.is_empty()
    }
}

// ── parser output ────────────────────────────────────────────────────────────

/// Raw declarations of a single source file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedFile {
    /// Path relative to the analysis root.
    pub path: PathBuf,
    pub package: String,
    pub imports: Vec<Import>,
    pub interfaces: Vec<InterfaceDecl>,
    pub structs: Vec<StructDecl>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    pub name: Option<String>,
    pub path: String,
}

impl Import {
    /// Explicit alias, else the last path segment.
    pub fn alias(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => self
                .path
                .rsplit('/')
                .next()
                .unwrap_or(&self.path)
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceDecl {
    pub name: String,
    pub doc_comments: Vec<String>,
    pub methods: Vec<MethodDecl>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodDecl {
    pub name: String,
    pub params: Vec<(Option<String>, TypeExpr)>,
    pub returns: Vec<(Option<String>, TypeExpr)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructDecl {
    pub name: String,
    pub doc_comments: Vec<String>,
    pub fields: Vec<Field>,
}

/// A file produced by the implementation generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// File name relative to the output directory.
    pub path: PathBuf,
    pub content: String,
    pub line_count: usize,
}

impl GeneratedFile {
    pub fn new(path: impl Into<PathBuf>, content: String) -> Self {
        Self {
            path: path.into(),
            line_count: content.lines().count(),
            content,
        }
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}
