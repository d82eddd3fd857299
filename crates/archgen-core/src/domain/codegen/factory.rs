use std::collections::BTreeSet;

use super::implementation::dependencies;
use super::{FACTORY_FILE, GeneratorOptions, GoBuffer};
use crate::domain::entities::source_model::{ExtractedInterface, GeneratedFile, SourceModel};
use crate::domain::naming::constructor_name;
use crate::domain::value_objects::Layer;

/// Emit `factory.gen.go`: one factory method per interface, each building
/// its lower-layer dependency through the factory first.
pub fn render_factory(model: &SourceModel, options: &GeneratorOptions) -> GeneratedFile {
    let mut out = GoBuffer::default();
    out.header(&model.package, options);
    out.imports(&BTreeSet::from([
        "\"context\"".to_string(),
        "\"database/sql\"".to_string(),
    ]));

    out.line("// Factory provides centralized dependency injection");
    out.line("// This follows the factory pattern for clean architecture");
    out.line("type Factory struct {");
    out.line("\tdb     *sql.DB");
    out.line("\tctx    context.Context");
    out.line("\tconfig *Config // Add your config struct");
    out.line("}");
    out.blank();

    out.line("// NewFactory creates a new factory instance");
    out.line("func NewFactory(db *sql.DB, ctx context.Context, config *Config) *Factory {");
    out.line("\treturn &Factory{");
    out.line("\t\tdb:     db,");
    out.line("\t\tctx:    ctx,");
    out.line("\t\tconfig: config,");
    out.line("\t}");
    out.line("}");
    out.blank();

    for iface in model.interfaces.values() {
        write_factory_method(&mut out, iface, model);
    }

    GeneratedFile::new(FACTORY_FILE, out.finish())
}

fn write_factory_method(out: &mut GoBuffer, iface: &ExtractedInterface, model: &SourceModel) {
    let name = &iface.name;
    let ctor = constructor_name(name);

    out.line(format!(
        "// {ctor} creates a new {name} instance with dependencies"
    ));
    out.line(format!("func (f *Factory) {ctor}() {name} {{"));

    match iface.layer {
        Layer::Repository => out.line(format!("\treturn {ctor}(f.db)")),
        Layer::UseCase | Layer::Handler => {
            match dependencies(iface, model).into_iter().next() {
                Some(dep) => {
                    out.line(format!(
                        "\t{} := f.{}()",
                        dep.field,
                        constructor_name(&dep.ty)
                    ));
                    out.line(format!("\treturn {ctor}({})", dep.field));
                }
                None => {
                    let missing = if iface.layer == Layer::UseCase {
                        "repository"
                    } else {
                        "use case"
                    };
                    out.line(format!("\t// TODO: Add {missing} dependency"));
                    out.line(format!("\treturn {ctor}(/* dependencies */)"));
                }
            }
        }
        Layer::Service => out.line(format!("\treturn {ctor}()")),
    }

    out.line("}");
    out.blank();
}
