//! Both pipelines run end to end against the in-memory filesystem, the
//! tree-sitter parser and the Handlebars renderer.

use std::path::Path;

use archgen_adapters::{GoSourceParser, HandlebarsRenderer, MemoryFilesystem, MemoryReporter};
use archgen_core::application::{
    AnalysisService, Filesystem, ImplementationService, ScaffoldService, Severity,
};
use archgen_core::domain::entities::default_domains;
use archgen_core::domain::{DatabaseKind, GeneratorOptions, ProjectDescription, WritePolicy};
use chrono::{TimeZone, Utc};

const GO_MOD: &str = "module example.com/shop\n\ngo 1.21\n";

fn options() -> GeneratorOptions {
    GeneratorOptions::new(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap())
}

fn analyze(fs: &MemoryFilesystem, reporter: &MemoryReporter) -> archgen_core::domain::SourceModel {
    let service = AnalysisService::new(
        Box::new(fs.clone()),
        Box::new(GoSourceParser::new()),
        Box::new(reporter.clone()),
    );
    service.analyze(Path::new("/proj"), &[]).unwrap()
}

fn implement(
    fs: &MemoryFilesystem,
    reporter: &MemoryReporter,
) -> Vec<archgen_core::domain::GeneratedFile> {
    let model = analyze(fs, reporter);
    let service = ImplementationService::new(Box::new(fs.clone()), Box::new(reporter.clone()));
    let files = service.generate(&model, &options());
    let summary = service.write(&files, Path::new("/proj"), false);
    assert_eq!(summary.written, files.len());
    files
}

#[test]
fn repository_interface_becomes_persistence_stub() {
    let fs = MemoryFilesystem::new().with_file("/proj/go.mod", GO_MOD).with_file(
        "/proj/domain/user.go",
        r#"package domain

import "context"

// UserRepository persists users.
type UserRepository interface {
	Create(ctx context.Context, user *User) error
	GetByID(ctx context.Context, id string) (*User, error)
}

type User struct {
	ID   string
	Name string
}
"#,
    );
    let reporter = MemoryReporter::new();
    implement(&fs, &reporter);

    let src = fs.read_file("/proj/user_repository.gen.go").unwrap();
    assert!(src.starts_with("// Code generated by archgen. DO NOT EDIT.\n"));
    assert!(src.contains("// Generated at: 2024-01-02T03:04:05Z\n"));
    assert!(src.contains("package domain\n"));
    assert!(src.contains("// UserRepository persists users.\n"));
    assert!(src.contains("type userRepository struct {\n\tdb *sql.DB\n}"));
    assert!(src.contains("func NewUserRepository(db *sql.DB) UserRepository {"));
    assert!(src.contains(
        "func (impl *userRepository) GetByID(ctx context.Context, id string) (*User, error) {"
    ));
    assert!(src.contains("\treturn nil, nil\n}"));
    assert!(src.contains("\"context\""));
    assert!(src.contains("\"database/sql\""));

    assert!(fs.read_file("/proj/factory.gen.go").is_some());
    assert!(fs.read_file("/proj/wire.gen.go").is_some());
    assert!(reporter
        .messages(Severity::Info)
        .contains(&"Found interface: UserRepository (repository layer)".to_string()));
}

#[test]
fn factory_builds_use_case_from_repository() {
    let fs = MemoryFilesystem::new().with_file("/proj/go.mod", GO_MOD).with_file(
        "/proj/product/ports.go",
        "package product\n\n\
         type ProductRepo interface {\n\tFind(id string) (string, error)\n}\n\n\
         type ProductUseCase interface {\n\tShow(id string) (string, error)\n}\n\n\
         type ProductHandler interface {\n\tServe() error\n}\n",
    );
    let reporter = MemoryReporter::new();
    let files = implement(&fs, &reporter);

    let names: Vec<String> = files.iter().map(|f| f.path.display().to_string()).collect();
    assert_eq!(
        names,
        [
            "product_handler.gen.go",
            "product_repository.gen.go",
            "product_usecase.gen.go",
            "factory.gen.go",
            "wire.gen.go",
        ]
    );

    let factory = fs.read_file("/proj/factory.gen.go").unwrap();
    assert!(factory.contains(
        "func (f *Factory) NewProductUseCase() ProductUseCase {\n\
         \trepo := f.NewProductRepo()\n\
         \treturn NewProductUseCase(repo)\n}"
    ));

    let use_case = fs.read_file("/proj/product_usecase.gen.go").unwrap();
    assert!(use_case.contains("func NewProductUseCase(repo ProductRepo) ProductUseCase {"));
}

#[test]
fn invalid_file_is_skipped_with_one_warning() {
    let fs = MemoryFilesystem::new()
        .with_file("/proj/go.mod", GO_MOD)
        .with_file(
            "/proj/a.go",
            "package shop\n\ntype OrderRepository interface {\n\tSave() error\n}\n",
        )
        .with_file(
            "/proj/b.go",
            "package shop\n\ntype OrderUseCase interface {\n\tPlace() error\n}\n",
        )
        .with_file(
            "/proj/broken.go",
            "package shop\n\ntype BrokenHandler interface {\n\tServe( error\n",
        );
    let reporter = MemoryReporter::new();
    let model = analyze(&fs, &reporter);

    let names: Vec<&str> = model.interfaces.keys().map(String::as_str).collect();
    assert_eq!(names, ["OrderRepository", "OrderUseCase"]);

    let warnings = reporter.messages(Severity::Warning);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].starts_with("Failed to parse broken.go"));
}

#[test]
fn generated_and_test_files_are_ignored() {
    let fs = MemoryFilesystem::new()
        .with_file("/proj/go.mod", GO_MOD)
        .with_file("/proj/svc.go", "package svc\n\ntype Clock interface {\n\tNow() int64\n}\n")
        .with_file("/proj/clock.gen.go", "package svc\n\ntype Stale interface{}\n")
        .with_file("/proj/svc_test.go", "package svc\n\ntype Fake interface{}\n")
        .with_file("/proj/vendor/x/x.go", "package x\n\ntype Vendored interface{}\n");
    let reporter = MemoryReporter::new();
    let model = analyze(&fs, &reporter);
    assert_eq!(model.interfaces.keys().collect::<Vec<_>>(), ["Clock"]);
    assert_eq!(model.package, "svc");
}

#[test]
fn both_databases_plan_every_store_and_skip_legacy_connection() {
    let fs = MemoryFilesystem::new();
    let reporter = MemoryReporter::new();
    let renderer = HandlebarsRenderer::new().unwrap();
    let service = ScaffoldService::new(
        Box::new(renderer),
        Box::new(fs.clone()),
        Box::new(reporter.clone()),
    );

    let mut desc = ProjectDescription::default();
    desc.project.name = "shop".into();
    desc.project.module = "example.com/shop".into();
    desc.database.kind = DatabaseKind::Both;
    desc.events.enabled = true;
    desc.domains = default_domains(2, DatabaseKind::Both);

    let summary = service
        .generate(&desc, "/out", WritePolicy::default())
        .unwrap();
    assert_eq!(summary.failed, 0);
    assert!(summary.written > 0);

    assert!(fs.is_dir("/out/internal/infrastructure/database/postgres"));
    assert!(fs.is_dir("/out/internal/infrastructure/database/mongodb"));
    assert!(fs.read_file("/out/internal/infrastructure/database/connection.go").is_none());
    assert!(fs
        .read_file("/out/internal/infrastructure/database/postgres/with_schema.go")
        .is_some());

    let go_mod = fs.read_file("/out/go.mod").unwrap();
    assert!(go_mod.contains("github.com/jackc/pgx/v5"));
    assert!(go_mod.contains("go.mongodb.org/mongo-driver"));

    let main = fs.read_file("/out/cmd/server/main.go").unwrap();
    assert!(main.contains("userRepository := postgres.NewUserRepository(pgDB)"));
    assert!(main.contains("productRepository := mongodb.NewProductRepository(mongoDB.Database)"));
    assert!(main.contains("eventBus, err := events.NewRabbitMQBus(cfg.RabbitMQURL)"));

    let mongo_repo = fs
        .read_file("/out/internal/infrastructure/database/mongodb/product_repository_impl.go")
        .unwrap();
    assert!(mongo_repo.contains("collection: db.Collection(\"products\"),"));
}

#[test]
fn second_generation_skips_everything() {
    let fs = MemoryFilesystem::new();
    let reporter = MemoryReporter::new();
    let service = ScaffoldService::new(
        Box::new(HandlebarsRenderer::new().unwrap()),
        Box::new(fs.clone()),
        Box::new(reporter.clone()),
    );
    let mut desc = ProjectDescription::default();
    desc.project.name = "shop".into();
    desc.project.module = "example.com/shop".into();
    desc.database.kind = DatabaseKind::Postgres;
    desc.domains = default_domains(1, DatabaseKind::Postgres);

    let first = service.generate(&desc, "/out", WritePolicy::default()).unwrap();
    fs.write_file(Path::new("/out/go.mod"), "module edited\n")
        .unwrap();
    let second = service.generate(&desc, "/out", WritePolicy::default()).unwrap();

    assert_eq!(second.written, 0);
    assert_eq!(second.skipped, first.written);
    assert_eq!(fs.read_file("/out/go.mod").unwrap(), "module edited\n");
}
