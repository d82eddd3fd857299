//! Cross-layer relationships between interfaces of the same base name.

use std::collections::BTreeMap;

use crate::domain::classification::{base_name, related_candidates};
use crate::domain::entities::source_model::SourceModel;
use crate::domain::value_objects::Layer;

/// Link every interface to the others sharing its base name.
///
/// The relation is symmetric and irreflexive. Previous links are replaced.
pub fn resolve(model: &mut SourceModel) {
    let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for name in model.interfaces.keys() {
        groups
            .entry(base_name(name).to_string())
            .or_default()
            .push(name.clone());
    }

    for members in groups.values() {
        for name in members {
            if let Some(iface) = model.interfaces.get_mut(name) {
                iface.related = members.iter().filter(|m| *m != name).cloned().collect();
            }
        }
    }
}

/// Name of the `layer` interface for `base`, trying the layer's suffixes in order.
pub fn find_related(model: &SourceModel, base: &str, layer: Layer) -> Option<String> {
    related_candidates(base, layer).find(|candidate| model.interfaces.contains_key(candidate))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::domain::entities::source_model::{ExtractedInterface, InterfaceDecl};

    fn model_with(names: &[&str]) -> SourceModel {
        let mut model = SourceModel::new("example.com/app");
        for name in names {
            let iface = ExtractedInterface::from_decl(
                InterfaceDecl {
                    name: name.to_string(),
                    doc_comments: vec![],
                    methods: vec![],
                },
                "app",
                std::path::Path::new("x.go"),
            );
            model.interfaces.insert(name.to_string(), iface);
        }
        model
    }

    #[test]
    fn relation_is_symmetric_and_irreflexive() {
        let mut model = model_with(&["ProductRepo", "ProductUseCase", "ProductHandler", "Clock"]);
        resolve(&mut model);

        for (name, iface) in &model.interfaces {
            assert!(!iface.related.contains(name));
            for other in &iface.related {
                assert!(model.interfaces[other].related.contains(name));
            }
        }
        let expected: BTreeSet<String> = ["ProductHandler".into(), "ProductUseCase".into()].into();
        assert_eq!(model.interfaces["ProductRepo"].related, expected);
        assert!(model.interfaces["Clock"].related.is_empty());
    }

    #[test]
    fn resolve_is_repeatable() {
        let mut model = model_with(&["UserRepo", "UserHandler"]);
        resolve(&mut model);
        let first = model.clone();
        resolve(&mut model);
        assert_eq!(model, first);
    }

    #[test]
    fn find_related_prefers_short_suffix() {
        let model = model_with(&["UserRepo", "UserRepository", "UserService"]);
        assert_eq!(
            find_related(&model, "User", Layer::Repository).as_deref(),
            Some("UserRepo")
        );
        assert_eq!(
            find_related(&model, "User", Layer::UseCase).as_deref(),
            Some("UserService")
        );
        assert_eq!(find_related(&model, "Order", Layer::Repository), None);
    }
}
