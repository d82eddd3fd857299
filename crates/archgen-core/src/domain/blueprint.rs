//! Output planning for the config-driven pipeline.
//!
//! Turns a [`ProjectDescription`] into a [`ProjectStructure`]: the directories
//! its feature flags call for plus every (template, data) pair to render.
//! Pure: no rendering, no I/O.

use serde_json::{Value, json};

use crate::domain::entities::{
    DomainSpec, ProjectDescription, ProjectStructure, RelativePath, TemplateName,
};
use crate::domain::error::DomainError;
use crate::domain::naming::to_snake_case;
use crate::domain::value_objects::{DatabaseKind, StoreKind};

const BASE_DIRECTORIES: &[&str] = &[
    "cmd/server",
    "internal/domain/entity",
    "internal/domain/repository",
    "internal/usecase",
    "internal/handler/http",
    "internal/infrastructure/config",
    "pkg/logger",
    "pkg/validator",
    "docs",
];

const POSTGRES_DIRECTORIES: &[&str] = &[
    "internal/infrastructure/database/postgres",
    "internal/infrastructure/database/postgres/sqlc",
    "db/migrations",
    "db/queries",
];

const MONGODB_DIRECTORIES: &[&str] = &["internal/infrastructure/database/mongodb"];

const DATABASE_ROOT: &str = "internal/infrastructure/database";

/// Directories required by the description's flags, in creation order.
pub fn plan_directories(desc: &ProjectDescription) -> Vec<&'static str> {
    let db = desc.database.kind;
    let mut dirs: Vec<&'static str> = BASE_DIRECTORIES.to_vec();

    if db.uses_postgres() {
        dirs.extend_from_slice(POSTGRES_DIRECTORIES);
    }
    if db.uses_mongodb() {
        dirs.extend_from_slice(MONGODB_DIRECTORIES);
    }
    if db.is_specified() {
        dirs.push(DATABASE_ROOT);
    }
    if desc.database.migrations {
        dirs.push("migrations");
    }
    if desc.events.enabled {
        dirs.push("internal/infrastructure/events");
    }
    dirs
}

/// Full output plan for `desc`.
pub fn plan(desc: &ProjectDescription) -> Result<ProjectStructure, DomainError> {
    let mut structure = ProjectStructure::new();
    for dir in plan_directories(desc) {
        structure.add_directory(RelativePath::try_new(dir)?);
    }

    let project = json!({ "config": desc });
    for template in [
        TemplateName::GoMod,
        TemplateName::Main,
        TemplateName::Readme,
        TemplateName::Makefile,
    ] {
        add(&mut structure, template.output_pattern(), template, project.clone())?;
    }

    for domain in &desc.domains {
        plan_domain(&mut structure, desc, domain)?;
    }

    plan_infrastructure(&mut structure, desc, &project)?;
    structure.validate()?;
    Ok(structure)
}

fn plan_domain(
    structure: &mut ProjectStructure,
    desc: &ProjectDescription,
    domain: &DomainSpec,
) -> Result<(), DomainError> {
    for entity in &domain.entities {
        let store = domain.store_for(entity);
        let template = match store {
            StoreKind::MongoDb => TemplateName::MongoEntity,
            _ => TemplateName::PostgresEntity,
        };
        let data = json!({
            "config": desc,
            "domain": domain,
            "entity": entity,
            "databaseType": store,
        });
        let path = format!("internal/domain/entity/{}.go", to_snake_case(entity));
        add(structure, &path, template, data)?;
    }

    if domain.has_postgres_entities() {
        add(
            structure,
            TemplateName::SqlcConfig.output_pattern(),
            TemplateName::SqlcConfig,
            json!({ "config": desc }),
        )?;
        let stores = domain.entity_stores();
        for entity in &domain.entities {
            if stores.get(entity.as_str()) == Some(&StoreKind::Postgres) {
                let data = json!({ "config": desc, "domain": domain, "entity": entity });
                let path = format!("db/queries/{}.sql", to_snake_case(entity));
                add(structure, &path, TemplateName::SqlcQuery, data)?;
            }
        }
    }

    for repo in &domain.repositories {
        let data = json!({ "config": desc, "domain": domain, "repository": repo });
        let snake = to_snake_case(&repo.name);

        add(
            structure,
            &format!("internal/domain/repository/{snake}.go"),
            TemplateName::RepositoryInterface,
            data.clone(),
        )?;

        let store = repo.database.effective();
        let template = match store {
            StoreKind::MongoDb => TemplateName::MongoRepository,
            _ => TemplateName::PostgresRepository,
        };
        add(
            structure,
            &format!("{DATABASE_ROOT}/{store}/{snake}_impl.go"),
            template,
            data,
        )?;
    }

    for use_case in &domain.use_cases {
        let data = json!({ "config": desc, "domain": domain, "useCase": use_case });
        let path = format!("internal/usecase/{}.go", to_snake_case(use_case));
        add(structure, &path, TemplateName::UseCase, data)?;
    }

    for handler in &domain.handlers {
        let data = json!({ "config": desc, "domain": domain, "handler": handler });
        let path = format!("internal/handler/http/{}.go", to_snake_case(&handler.name));
        add(structure, &path, TemplateName::Handler, data)?;
    }

    Ok(())
}

fn plan_infrastructure(
    structure: &mut ProjectStructure,
    desc: &ProjectDescription,
    project: &Value,
) -> Result<(), DomainError> {
    let db = desc.database.kind;
    let mut templates = Vec::new();

    if db.uses_postgres() {
        templates.push(TemplateName::PostgresConnection);
        templates.push(TemplateName::PostgresSchema);
    }
    if db.uses_mongodb() {
        templates.push(TemplateName::MongoConnection);
    }
    for template in templates {
        add(structure, template.output_pattern(), template, project.clone())?;
    }

    if db == DatabaseKind::Unspecified {
        add(
            structure,
            &format!("{DATABASE_ROOT}/connection.go"),
            TemplateName::PostgresConnection,
            project.clone(),
        )?;
    }
    if desc.events.enabled {
        add(
            structure,
            TemplateName::EventBus.output_pattern(),
            TemplateName::EventBus,
            project.clone(),
        )?;
    }
    for template in [TemplateName::Config, TemplateName::Logger] {
        add(structure, template.output_pattern(), template, project.clone())?;
    }
    Ok(())
}

fn add(
    structure: &mut ProjectStructure,
    path: &str,
    template: TemplateName,
    data: Value,
) -> Result<(), DomainError> {
    if !structure.add_file(RelativePath::try_new(path)?, template, data) {
        tracing::debug!(path, %template, "path already planned, keeping first");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::domain::entities::{RepositorySpec, default_domains};

    fn desc(db: DatabaseKind) -> ProjectDescription {
        let mut desc = ProjectDescription::default();
        desc.project.name = "shop".into();
        desc.project.module = "example.com/shop".into();
        desc.database.kind = db;
        desc.domains = default_domains(2, db);
        desc
    }

    fn paths(structure: &ProjectStructure) -> Vec<String> {
        structure.files().map(|f| f.path.to_string()).collect()
    }

    #[test]
    fn base_directories_only_without_flags() {
        let dirs = plan_directories(&desc(DatabaseKind::Unspecified));
        assert_eq!(dirs, BASE_DIRECTORIES);
    }

    #[test]
    fn both_plans_every_store_directory() {
        let dirs = plan_directories(&desc(DatabaseKind::Both));
        for dir in POSTGRES_DIRECTORIES.iter().chain(MONGODB_DIRECTORIES) {
            assert!(dirs.contains(dir), "missing {dir}");
        }
        assert!(dirs.contains(&DATABASE_ROOT));
    }

    #[test]
    fn flags_add_directories_without_duplicates() {
        let mut d = desc(DatabaseKind::Postgres);
        d.database.migrations = true;
        d.events.enabled = true;
        let dirs = plan_directories(&d);
        assert!(dirs.contains(&"migrations"));
        assert!(dirs.contains(&"internal/infrastructure/events"));
        let unique: HashSet<_> = dirs.iter().collect();
        assert_eq!(unique.len(), dirs.len());
        assert_eq!(plan_directories(&d), dirs);
    }

    #[test]
    fn both_skips_legacy_connection() {
        let structure = plan(&desc(DatabaseKind::Both)).unwrap();
        let files = paths(&structure);
        assert!(files.contains(&"internal/infrastructure/database/postgres/connection.go".into()));
        assert!(files.contains(&"internal/infrastructure/database/mongodb/connection.go".into()));
        assert!(!files.contains(&"internal/infrastructure/database/connection.go".into()));
        // Product domain (index 1) persists to mongodb.
        assert!(files.contains(
            &"internal/infrastructure/database/mongodb/product_repository_impl.go".into()
        ));
    }

    #[test]
    fn unspecified_database_uses_legacy_connection() {
        let structure = plan(&desc(DatabaseKind::Unspecified)).unwrap();
        let files = paths(&structure);
        assert!(files.contains(&"internal/infrastructure/database/connection.go".into()));
        assert!(!files.iter().any(|f| f.ends_with("with_schema.go")));
        // Repositories without a store fall back to postgres implementations.
        assert!(files.contains(
            &"internal/infrastructure/database/postgres/user_repository_impl.go".into()
        ));
        assert!(!files.contains(&"sqlc.yaml".into()));
    }

    #[test]
    fn sqlc_config_is_planned_once() {
        let structure = plan(&desc(DatabaseKind::Postgres)).unwrap();
        let files = paths(&structure);
        assert_eq!(files.iter().filter(|f| *f == "sqlc.yaml").count(), 1);
        assert!(files.contains(&"db/queries/category.sql".into()));
        assert!(files.contains(&"db/queries/profile.sql".into()));
    }

    #[test]
    fn entity_template_follows_repository_store() {
        let mut d = desc(DatabaseKind::Both);
        d.domains[0].repositories.push(RepositorySpec {
            name: "AuditRepository".into(),
            entity: "User".into(),
            database: StoreKind::MongoDb,
        });
        let structure = plan(&d).unwrap();
        let user = structure
            .files()
            .find(|f| f.path.to_string() == "internal/domain/entity/user.go")
            .unwrap();
        assert_eq!(user.template, TemplateName::MongoEntity);
        assert_eq!(user.data["entity"], "User");
        assert_eq!(user.data["config"]["project"]["module"], "example.com/shop");
    }

    #[test]
    fn events_and_common_files() {
        let mut d = desc(DatabaseKind::Postgres);
        d.events.enabled = true;
        let files = paths(&plan(&d).unwrap());
        for expected in [
            "go.mod",
            "cmd/server/main.go",
            "README.md",
            "Makefile",
            "internal/infrastructure/events/eventbus.go",
            "internal/infrastructure/config/config.go",
            "pkg/logger/logger.go",
            "internal/usecase/get_user_profile.go",
            "internal/handler/http/user_handler.go",
            "internal/domain/repository/profile_repository.go",
        ] {
            assert!(files.contains(&expected.to_string()), "missing {expected}");
        }
    }
}
