//! Go declaration extraction on top of tree-sitter-go.
//!
//! Only top-level `type` declarations are read. Interface methods keep their
//! parameter and result lists; structs keep their fields and raw tags. Type
//! shapes the encoder does not model (generics, inline structs) collapse to
//! the anonymous-interface placeholder.

use std::path::Path;

use archgen_core::{
    application::{ApplicationError, ports::SourceParser},
    domain::{
        TypeExpr,
        entities::{Field, Import, InterfaceDecl, MethodDecl, ParsedFile, StructDecl},
    },
    error::{ArchgenError, ArchgenResult},
};
use tracing::{debug, instrument};
use tree_sitter::{Node, Parser, Tree};

type Params = Vec<(Option<String>, TypeExpr)>;

/// Parses Go files with tree-sitter.
///
/// A fresh `tree_sitter::Parser` is created per file, so the adapter itself
/// is stateless and `Sync`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoSourceParser;

impl GoSourceParser {
    pub fn new() -> Self {
        Self
    }
}

impl SourceParser for GoSourceParser {
    #[instrument(skip_all, fields(path = %path.display()))]
    fn parse(&self, path: &Path, source: &str) -> ArchgenResult<ParsedFile> {
        let tree = syntax_tree(source).map_err(|reason| parse_failed(path, reason))?;
        let root = tree.root_node();

        if let Some(node) = first_error(root) {
            let at = node.start_position();
            return Err(parse_failed(
                path,
                format!("syntax error at {}:{}", at.row + 1, at.column + 1),
            ));
        }

        let file = Extractor {
            src: source.as_bytes(),
        }
        .file(path, root)?;
        debug!(
            interfaces = file.interfaces.len(),
            structs = file.structs.len(),
            "declarations extracted"
        );
        Ok(file)
    }
}

fn syntax_tree(source: &str) -> Result<Tree, String> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_go::LANGUAGE.into())
        .map_err(|e| e.to_string())?;
    parser
        .parse(source, None)
        .ok_or_else(|| "parser produced no tree".to_string())
}

fn parse_failed(path: &Path, reason: impl Into<String>) -> ArchgenError {
    ApplicationError::ParseFailed {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
    .into()
}

fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    children(node).into_iter().find_map(first_error)
}

fn children<'t>(node: Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.children(&mut cursor).collect()
}

fn named_children<'t>(node: Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).collect()
}

/// A comment sharing its first row with the end of the previous node.
fn trails_code(comment: Node<'_>) -> bool {
    comment
        .prev_named_sibling()
        .is_some_and(|prev| prev.end_position().row == comment.start_position().row)
}

fn field_children<'t>(node: Node<'t>, field: &str) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.children_by_field_name(field, &mut cursor).collect()
}

struct Extractor<'s> {
    src: &'s [u8],
}

impl Extractor<'_> {
    fn text(&self, node: Node<'_>) -> String {
        node.utf8_text(self.src).unwrap_or_default().to_string()
    }

    fn file(&self, path: &Path, root: Node<'_>) -> ArchgenResult<ParsedFile> {
        let mut file = ParsedFile {
            path: path.to_path_buf(),
            ..ParsedFile::default()
        };

        let mut docs: Vec<String> = Vec::new();
        let mut last_comment_row: Option<usize> = None;

        for node in named_children(root) {
            match node.kind() {
                "package_clause" => {
                    if let Some(id) = named_children(node)
                        .into_iter()
                        .find(|c| c.kind() == "package_identifier")
                    {
                        file.package = self.text(id);
                    }
                }
                "import_declaration" => self.imports(node, &mut file.imports),
                "comment" if !trails_code(node) => {
                    let row = node.start_position().row;
                    if !matches!(last_comment_row, Some(last) if last + 1 == row) {
                        docs.clear();
                    }
                    let text = self.text(node);
                    docs.push(text.strip_prefix("//").unwrap_or(&text).to_string());
                    last_comment_row = Some(node.end_position().row);
                    continue;
                }
                "type_declaration" => {
                    let adjacent = last_comment_row
                        .is_some_and(|row| row + 1 == node.start_position().row);
                    let doc = if adjacent { docs.clone() } else { Vec::new() };
                    self.type_declaration(node, &doc, &mut file);
                }
                _ => {}
            }
            docs.clear();
            last_comment_row = None;
        }

        if file.package.is_empty() {
            return Err(parse_failed(path, "missing package clause"));
        }
        Ok(file)
    }

    fn imports(&self, decl: Node<'_>, out: &mut Vec<Import>) {
        for child in named_children(decl) {
            let specs = match child.kind() {
                "import_spec" => vec![child],
                "import_spec_list" => named_children(child)
                    .into_iter()
                    .filter(|n| n.kind() == "import_spec")
                    .collect(),
                _ => continue,
            };
            for spec in specs {
                let Some(path) = spec.child_by_field_name("path") else {
                    continue;
                };
                out.push(Import {
                    name: spec.child_by_field_name("name").map(|n| self.text(n)),
                    path: self
                        .text(path)
                        .trim_matches(|c| c == '"' || c == '`')
                        .to_string(),
                });
            }
        }
    }

    fn type_declaration(&self, decl: Node<'_>, doc: &[String], file: &mut ParsedFile) {
        for spec in named_children(decl)
            .into_iter()
            .filter(|n| n.kind() == "type_spec")
        {
            let (Some(name), Some(ty)) = (
                spec.child_by_field_name("name"),
                spec.child_by_field_name("type"),
            ) else {
                continue;
            };
            let name = self.text(name);

            match ty.kind() {
                "interface_type" => file.interfaces.push(InterfaceDecl {
                    name,
                    doc_comments: doc.to_vec(),
                    methods: self.methods(ty),
                }),
                "struct_type" => file.structs.push(StructDecl {
                    name,
                    doc_comments: doc.to_vec(),
                    fields: self.fields(ty),
                }),
                _ => {}
            }
        }
    }

    fn methods(&self, iface: Node<'_>) -> Vec<MethodDecl> {
        named_children(iface)
            .into_iter()
            .filter(|n| matches!(n.kind(), "method_elem" | "method_spec"))
            .filter_map(|method| {
                let name = self.text(method.child_by_field_name("name")?);
                let params = method
                    .child_by_field_name("parameters")
                    .map(|list| self.params(list))
                    .unwrap_or_default();
                let returns = match method.child_by_field_name("result") {
                    Some(list) if list.kind() == "parameter_list" => self.params(list),
                    Some(single) => vec![(None, self.type_expr(single))],
                    None => Vec::new(),
                };
                Some(MethodDecl {
                    name,
                    params,
                    returns,
                })
            })
            .collect()
    }

    fn params(&self, list: Node<'_>) -> Params {
        let mut params = Params::new();
        for decl in named_children(list) {
            let ty = decl
                .child_by_field_name("type")
                .map(|t| self.type_expr(t))
                .unwrap_or(TypeExpr::AnonymousInterface);

            match decl.kind() {
                "parameter_declaration" => {
                    let names = field_children(decl, "name");
                    if names.is_empty() {
                        params.push((None, ty));
                    } else {
                        for name in names {
                            params.push((Some(self.text(name)), ty.clone()));
                        }
                    }
                }
                "variadic_parameter_declaration" => {
                    let name = decl.child_by_field_name("name").map(|n| self.text(n));
                    params.push((name, TypeExpr::variadic(ty)));
                }
                _ => {}
            }
        }
        params
    }

    fn fields(&self, strukt: Node<'_>) -> Vec<Field> {
        let Some(list) = named_children(strukt)
            .into_iter()
            .find(|n| n.kind() == "field_declaration_list")
        else {
            return Vec::new();
        };

        let mut fields = Vec::new();
        for decl in named_children(list)
            .into_iter()
            .filter(|n| n.kind() == "field_declaration")
        {
            let Some(ty_node) = decl.child_by_field_name("type") else {
                continue;
            };
            let mut ty = self.type_expr(ty_node);
            let tag = decl.child_by_field_name("tag").map(|t| self.text(t));
            let names = field_children(decl, "name");

            if names.is_empty() {
                if children(decl).iter().any(|c| c.kind() == "*") {
                    ty = TypeExpr::pointer(ty);
                }
                fields.push(Field {
                    name: String::new(),
                    ty: ty.encode(),
                    tag,
                });
            } else {
                for name in names {
                    fields.push(Field {
                        name: self.text(name),
                        ty: ty.encode(),
                        tag: tag.clone(),
                    });
                }
            }
        }
        fields
    }

    fn type_expr(&self, node: Node<'_>) -> TypeExpr {
        let field = |name: &str| {
            node.child_by_field_name(name)
                .map(|n| self.type_expr(n))
                .unwrap_or(TypeExpr::AnonymousInterface)
        };
        let first_named = || {
            node.named_child(0)
                .map(|n| self.type_expr(n))
                .unwrap_or(TypeExpr::AnonymousInterface)
        };

        match node.kind() {
            "type_identifier" | "identifier" | "package_identifier" => {
                TypeExpr::ident(self.text(node))
            }
            "qualified_type" => match (
                node.child_by_field_name("package"),
                node.child_by_field_name("name"),
            ) {
                (Some(package), Some(name)) => {
                    TypeExpr::qualified(self.text(package), self.text(name))
                }
                _ => TypeExpr::AnonymousInterface,
            },
            "pointer_type" => TypeExpr::pointer(first_named()),
            "slice_type" | "array_type" => TypeExpr::slice(field("element")),
            "map_type" => TypeExpr::map(field("key"), field("value")),
            "channel_type" => TypeExpr::chan(field("value")),
            "parenthesized_type" => first_named(),
            "function_type" => TypeExpr::Func,
            _ => TypeExpr::AnonymousInterface,
        }
    }
}
