use std::collections::BTreeSet;

use super::{GeneratorOptions, GoBuffer, WIRE_FILE};
use crate::domain::entities::source_model::{GeneratedFile, SourceModel};
use crate::domain::naming::constructor_name;
use crate::domain::value_objects::Layer;

/// Emit `wire.gen.go`: the provider set plus one injector per handler.
///
/// The build constraint goes above the banner so the Go toolchain honours it.
/// Injector bodies are placeholders that wire replaces.
pub fn render_wire(model: &SourceModel, options: &GeneratorOptions) -> GeneratedFile {
    let handlers: Vec<_> = model.interfaces_in(Layer::Handler).collect();

    let mut out = GoBuffer::default();
    out.line("//go:build wireinject");
    out.line("// +build wireinject");
    out.blank();
    out.header(&model.package, options);

    let mut imports = BTreeSet::from(["\"github.com/google/wire\"".to_string()]);
    if !handlers.is_empty() {
        imports.insert("\"context\"".into());
        imports.insert("\"database/sql\"".into());
    }
    out.imports(&imports);

    out.line("// ProviderSet is the Wire provider set for dependency injection");
    out.line("var ProviderSet = wire.NewSet(");
    for name in model.interfaces.keys() {
        out.line(format!("\t{},", constructor_name(name)));
    }
    out.line("\tNewFactory,");
    out.line(")");
    out.blank();

    for iface in handlers {
        let name = &iface.name;
        out.line(format!(
            "// Initialize{name} creates a fully wired {name} instance"
        ));
        out.line(format!(
            "func Initialize{name}(db *sql.DB, ctx context.Context, config *Config) ({name}, error) {{"
        ));
        out.line("\twire.Build(ProviderSet)");
        out.line("\treturn nil, nil // Wire will generate the implementation");
        out.line("}");
        out.blank();
    }

    GeneratedFile::new(WIRE_FILE, out.finish())
}
