use std::collections::HashSet;

use crate::domain::{
    entities::{ProjectDescription, ProjectStructure},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_description(desc: &ProjectDescription) -> Result<(), DomainError> {
        desc.validate()
    }

    pub fn validate_project_structure(structure: &ProjectStructure) -> Result<(), DomainError> {
        structure.validate()
    }

    /// Dangling references in a description.
    ///
    /// Repositories naming an entity their domain does not declare, and
    /// handlers naming a use case no domain declares. Generation proceeds
    /// regardless; callers surface these as warnings.
    pub fn description_warnings(desc: &ProjectDescription) -> Vec<String> {
        let use_cases: HashSet<&str> = desc.all_use_cases().collect();
        let mut warnings = Vec::new();

        for domain in &desc.domains {
            for repo in &domain.repositories {
                if !repo.entity.is_empty() && !domain.entities.contains(&repo.entity) {
                    warnings.push(format!(
                        "Repository {} in domain {} references undeclared entity {}",
                        repo.name, domain.name, repo.entity
                    ));
                }
            }
            for handler in &domain.handlers {
                for use_case in &handler.use_cases {
                    if !use_cases.contains(use_case.as_str()) {
                        warnings.push(format!(
                            "Handler {} in domain {} references undeclared use case {}",
                            handler.name, domain.name, use_case
                        ));
                    }
                }
            }
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{DomainSpec, HandlerSpec, RepositorySpec};

    fn desc() -> ProjectDescription {
        let mut desc = ProjectDescription::default();
        desc.project.name = "shop".into();
        desc.project.module = "example.com/shop".into();
        desc.domains.push(DomainSpec {
            name: "User".into(),
            entities: vec!["User".into()],
            repositories: vec![RepositorySpec {
                name: "UserRepository".into(),
                entity: "User".into(),
                ..RepositorySpec::default()
            }],
            use_cases: vec!["CreateUser".into()],
            handlers: vec![HandlerSpec {
                name: "UserHandler".into(),
                use_cases: vec!["CreateUser".into()],
            }],
        });
        desc
    }

    #[test]
    fn consistent_description_has_no_warnings() {
        assert!(DomainValidator::description_warnings(&desc()).is_empty());
        assert!(DomainValidator::validate_description(&desc()).is_ok());
    }

    #[test]
    fn dangling_references_are_reported_not_rejected() {
        let mut desc = desc();
        desc.domains[0].repositories[0].entity = "Ghost".into();
        desc.domains[0].handlers[0].use_cases.push("Missing".into());

        let warnings = DomainValidator::description_warnings(&desc);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("undeclared entity Ghost"));
        assert!(warnings[1].contains("undeclared use case Missing"));
        assert!(DomainValidator::validate_description(&desc).is_ok());
    }

    #[test]
    fn use_cases_resolve_across_domains() {
        let mut desc = desc();
        desc.domains.push(DomainSpec {
            name: "Admin".into(),
            handlers: vec![HandlerSpec {
                name: "AdminHandler".into(),
                use_cases: vec!["CreateUser".into()],
            }],
            ..DomainSpec::default()
        });
        assert!(DomainValidator::description_warnings(&desc).is_empty());
    }
}
