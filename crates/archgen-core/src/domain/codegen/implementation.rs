use std::collections::BTreeSet;

use super::{GENERATED_SUFFIX, GeneratorOptions, GoBuffer};
use crate::domain::entities::source_model::{
    ExtractedInterface, ExtractedMethod, GeneratedFile, Param, SourceModel,
};
use crate::domain::entities::type_expr::zero_value;
use crate::domain::naming::{constructor_name, struct_name};
use crate::domain::relationships::find_related;
use crate::domain::value_objects::Layer;

/// A constructor parameter stored on the implementing struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub field: &'static str,
    pub ty: String,
}

/// Dependencies injected into the implementation of `iface`.
///
/// Repositories take the database handle. Use cases and handlers take the
/// interface one layer down with the same base name, when one exists.
pub fn dependencies(iface: &ExtractedInterface, model: &SourceModel) -> Vec<Dependency> {
    match iface.layer {
        Layer::Repository => vec![Dependency {
            field: "db",
            ty: "*sql.DB".into(),
        }],
        Layer::UseCase | Layer::Handler => {
            let field = if iface.layer == Layer::UseCase {
                "repo"
            } else {
                "useCase"
            };
            iface
                .layer
                .dependency()
                .and_then(|lower| find_related(model, iface.base_name(), lower))
                .map(|ty| Dependency { field, ty })
                .into_iter()
                .collect()
        }
        Layer::Service => Vec::new(),
    }
}

/// `<lowercase base>_<layer>.gen.go`
pub fn file_name(iface: &ExtractedInterface) -> String {
    format!(
        "{}_{}{}",
        iface.base_name().to_lowercase(),
        iface.layer,
        GENERATED_SUFFIX
    )
}

/// Emit the stub implementation of one interface.
pub fn render_implementation(
    iface: &ExtractedInterface,
    model: &SourceModel,
    options: &GeneratorOptions,
) -> GeneratedFile {
    let struct_name = struct_name(&iface.name);
    let deps = dependencies(iface, model);

    let mut out = GoBuffer::default();
    out.header(&model.package, options);
    out.imports(&imports(iface, model));

    for comment in &iface.doc_comments {
        out.line(format!("// {}", comment.trim()));
    }
    out.line(format!(
        "// {struct_name} implements {} interface",
        iface.name
    ));
    out.line(format!("type {struct_name} struct {{"));
    for dep in &deps {
        out.line(format!("\t{} {}", dep.field, dep.ty));
    }
    out.line("}");
    out.blank();

    let ctor = constructor_name(&iface.name);
    let params = deps
        .iter()
        .map(|d| format!("{} {}", d.field, d.ty))
        .collect::<Vec<_>>()
        .join(", ");
    out.line(format!("// {ctor} creates a new instance of {struct_name}"));
    out.line(format!("func {ctor}({params}) {} {{", iface.name));
    out.line(format!("\treturn &{struct_name}{{"));
    for dep in &deps {
        out.line(format!("\t\t{0}: {0},", dep.field));
    }
    out.line("\t}");
    out.line("}");
    out.blank();

    for method in &iface.methods {
        write_method(&mut out, &struct_name, method, iface.layer);
    }

    out.line(format!("// Ensure {struct_name} implements {}", iface.name));
    out.line(format!("var _ {} = (*{struct_name})(nil)", iface.name));

    GeneratedFile::new(file_name(iface), out.finish())
}

fn write_method(out: &mut GoBuffer, struct_name: &str, method: &ExtractedMethod, layer: Layer) {
    let params = join_params(&method.params);
    let returns = match method.returns.as_slice() {
        [] => String::new(),
        list => format!(" ({})", join_params(list)),
    };

    out.line(format!(
        "// {0} implements the {0} method",
        method.name
    ));
    out.line(format!(
        "func (impl *{struct_name}) {}({params}){returns} {{",
        method.name
    ));
    out.line(format!("\t// TODO: Implement {}", method.name));
    for line in layer_hint(layer) {
        out.line(format!("\t// {line}"));
    }
    if !method.returns.is_empty() {
        let zeros = method
            .returns
            .iter()
            .map(|r| zero_value(&r.ty))
            .collect::<Vec<_>>()
            .join(", ");
        out.line(format!("\treturn {zeros}"));
    }
    out.line("}");
    out.blank();
}

fn join_params(params: &[Param]) -> String {
    params
        .iter()
        .map(|p| match &p.name {
            Some(name) => format!("{name} {}", p.ty),
            None => p.ty.clone(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn layer_hint(layer: Layer) -> &'static [&'static str] {
    match layer {
        Layer::Repository => &[
            "Example database operation:",
            "query := \"SELECT * FROM table WHERE condition = ?\"",
            "rows, err := impl.db.QueryContext(ctx, query, param)",
            "if err != nil {",
            "    return result, fmt.Errorf(\"database query failed: %w\", err)",
            "}",
            "defer rows.Close()",
        ],
        Layer::UseCase => &[
            "Example business logic:",
            "1. Validate input parameters",
            "2. Call repository methods",
            "3. Apply business rules",
            "4. Return processed result",
        ],
        Layer::Handler => &[
            "Example HTTP handler:",
            "1. Parse request parameters",
            "2. Call use case methods",
            "3. Handle errors appropriately",
            "4. Return HTTP response",
        ],
        Layer::Service => &[],
    }
}

// ── imports ──────────────────────────────────────────────────────────────────

/// Packages resolvable even when the analyzed files never imported them.
static WELL_KNOWN_IMPORTS: &[(&str, &str)] = &[
    ("context", "context"),
    ("echo", "github.com/labstack/echo/v4"),
    ("fiber", "github.com/gofiber/fiber/v2"),
    ("gin", "github.com/gin-gonic/gin"),
    ("http", "net/http"),
    ("json", "encoding/json"),
    ("sql", "database/sql"),
    ("time", "time"),
];

/// Import lines for every package qualifier used in the struct or its methods.
fn imports(iface: &ExtractedInterface, model: &SourceModel) -> BTreeSet<String> {
    let mut lines = BTreeSet::new();
    if iface.layer == Layer::Repository {
        lines.insert("\"database/sql\"".to_string());
    }

    let types = iface
        .methods
        .iter()
        .flat_map(|m| m.params.iter().chain(&m.returns))
        .map(|p| p.ty.as_str());
    for ty in types {
        for alias in qualifiers(ty) {
            if let Some(line) = import_line(alias, model) {
                lines.insert(line);
            }
        }
    }
    lines
}

fn import_line(alias: &str, model: &SourceModel) -> Option<String> {
    if let Some(path) = model.imports.get(alias) {
        return Some(if implied_name(path) == alias {
            format!("\"{path}\"")
        } else {
            format!("{alias} \"{path}\"")
        });
    }
    WELL_KNOWN_IMPORTS
        .iter()
        .find(|(name, _)| *name == alias)
        .map(|(_, path)| format!("\"{path}\""))
}

/// Package name Go infers from an import path, skipping `/vN` suffixes.
fn implied_name(path: &str) -> &str {
    let mut segments = path.rsplit('/');
    let last = segments.next().unwrap_or(path);
    let is_major_version =
        last.len() > 1 && last.starts_with('v') && last[1..].chars().all(|c| c.is_ascii_digit());
    if is_major_version {
        segments.next().unwrap_or(last)
    } else {
        last
    }
}

/// Package qualifiers (`pkg` in `pkg.Name`) appearing in an encoded type.
fn qualifiers(ty: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let bytes = ty.as_bytes();
    let mut start = None;
    for (i, &b) in bytes.iter().enumerate() {
        let ident = b.is_ascii_alphanumeric() || b == b'_';
        match (ident, start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                if b == b'.' && bytes.get(i + 1).is_some_and(|n| n.is_ascii_alphabetic()) {
                    found.push(&ty[s..i]);
                }
                start = None;
            }
            _ => {}
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::domain::entities::type_expr::TypeExpr;

    fn user_repository() -> SourceModel {
        model(vec![(
            "UserRepository",
            vec![
                method(
                    "Create",
                    &[
                        ("ctx", ctx()),
                        ("user", TypeExpr::pointer(TypeExpr::ident("User"))),
                    ],
                    &[TypeExpr::ident("error")],
                ),
                method(
                    "GetByID",
                    &[("ctx", ctx()), ("id", TypeExpr::ident("string"))],
                    &[
                        TypeExpr::pointer(TypeExpr::ident("User")),
                        TypeExpr::ident("error"),
                    ],
                ),
            ],
        )])
    }

    #[test]
    fn repository_stub_shape() {
        let model = user_repository();
        let file = render_implementation(&model.interfaces["UserRepository"], &model, &options());
        let src = &file.content;

        assert_eq!(file.path.display().to_string(), "user_repository.gen.go");
        assert!(src.contains("package shop\n"));
        assert!(src.contains("import (\n\t\"context\"\n\t\"database/sql\"\n)\n"));
        assert!(src.contains("type userRepository struct {\n\tdb *sql.DB\n}\n"));
        assert!(src.contains("func NewUserRepository(db *sql.DB) UserRepository {"));
        assert!(src.contains("\t\tdb: db,\n"));
        assert!(src.contains(
            "func (impl *userRepository) GetByID(ctx context.Context, id string) (*User, error) {"
        ));
        assert!(src.contains("\treturn nil, nil\n"));
        assert!(src.contains("var _ UserRepository = (*userRepository)(nil)\n"));
        assert_eq!(file.line_count, src.lines().count());
    }

    #[test]
    fn any_returns_stub_as_nil() {
        let model = model(vec![(
            "CacheRepository",
            vec![method(
                "Get",
                &[("key", TypeExpr::ident("string"))],
                &[TypeExpr::ident("any"), TypeExpr::ident("error")],
            )],
        )]);
        let src = render_implementation(&model.interfaces["CacheRepository"], &model, &options())
            .content;
        assert!(src.contains("Get(key string) (any, error) {"));
        assert!(src.contains("\treturn nil, nil\n"));
        assert!(!src.contains("any{}"));
    }

    #[test]
    fn use_case_depends_on_repository() {
        let model = model(vec![("ProductRepo", vec![]), ("ProductUseCase", vec![])]);
        let iface = &model.interfaces["ProductUseCase"];
        assert_eq!(
            dependencies(iface, &model),
            [Dependency {
                field: "repo",
                ty: "ProductRepo".into()
            }]
        );
        let src = render_implementation(iface, &model, &options()).content;
        assert!(src.contains("func NewProductUseCase(repo ProductRepo) ProductUseCase {"));
        assert!(!src.contains("import ("));
    }

    #[test]
    fn unresolved_handler_has_no_dependencies() {
        let model = model(vec![("OrderHandler", vec![])]);
        let iface = &model.interfaces["OrderHandler"];
        assert!(dependencies(iface, &model).is_empty());
        let src = render_implementation(iface, &model, &options()).content;
        assert!(src.contains("func NewOrderHandler() OrderHandler {"));
        assert!(src.contains("type orderHandler struct {\n}\n"));
    }

    #[test]
    fn doc_comments_precede_struct() {
        let mut model = user_repository();
        if let Some(iface) = model.interfaces.get_mut("UserRepository") {
            iface.doc_comments = vec![" UserRepository persists users.".into()];
        }
        let src = render_implementation(&model.interfaces["UserRepository"], &model, &options())
            .content;
        assert!(src.contains(
            "// UserRepository persists users.\n// userRepository implements UserRepository interface\n"
        ));
    }

    #[test]
    fn layer_hints_and_void_methods() {
        let model = model(vec![(
            "AuthHandler",
            vec![method(
                "Serve",
                &[
                    ("w", TypeExpr::qualified("http", "ResponseWriter")),
                    ("", TypeExpr::pointer(TypeExpr::qualified("http", "Request"))),
                ],
                &[],
            )],
        )]);
        let src = render_implementation(&model.interfaces["AuthHandler"], &model, &options())
            .content;
        assert!(src.contains("func (impl *authHandler) Serve(w http.ResponseWriter, *http.Request) {"));
        assert!(src.contains("\t// Example HTTP handler:\n"));
        assert!(src.contains("import (\n\t\"net/http\"\n)\n"));
        let body = &src[src.find(") Serve(").unwrap()..];
        let body = &body[..body.find("\n}\n").unwrap() + 3];
        assert!(body.ends_with("\t// 4. Return HTTP response\n}\n"));
        assert!(!body.contains("\treturn"));
    }

    #[test]
    fn aliased_imports_come_from_the_import_table() {
        let mut model = model(vec![(
            "EventService",
            vec![method(
                "Handle",
                &[("c", TypeExpr::pointer(TypeExpr::qualified("fib", "Ctx")))],
                &[TypeExpr::ident("error")],
            )],
        )]);
        model
            .imports
            .insert("fib".into(), "github.com/gofiber/fiber/v2".into());
        let src = render_implementation(&model.interfaces["EventService"], &model, &options())
            .content;
        assert!(src.contains("\tfib \"github.com/gofiber/fiber/v2\"\n"));
    }

    #[test]
    fn qualifier_scan() {
        assert_eq!(qualifiers("map[string]*entity.User"), ["entity"]);
        assert_eq!(qualifiers("...string"), Vec::<&str>::new());
        assert_eq!(qualifiers("chan gin.Context"), ["gin"]);
        assert_eq!(implied_name("github.com/gofiber/fiber/v2"), "fiber");
        assert_eq!(implied_name("net/http"), "http");
    }
}
