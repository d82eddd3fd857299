//! Layer classification registry.
//!
//! Every name heuristic used by the analyzer and the generators is described
//! once in a static table here. Classification, base-name extraction and
//! related-interface lookup are linear scans over these tables.
//!
//! The rules are deliberately plain substring and suffix matches. Names such
//! as `ServiceRepository` or `MyRepoFacade` land in the persistence layer
//! because `repo` is checked first; downstream wiring relies on exactly this
//! precedence.

use crate::domain::value_objects::Layer;

// ── Layer rules ──────────────────────────────────────────────────────────────

/// One classification rule: a layer and the lowercase fragments selecting it.
#[derive(Debug, Clone, Copy)]
pub struct LayerRule {
    pub layer: Layer,
    pub fragments: &'static [&'static str],
}

/// Rules in precedence order. The first rule with a matching fragment wins.
pub static LAYER_RULES: &[LayerRule] = &[
    LayerRule {
        layer: Layer::Repository,
        fragments: &["repo"],
    },
    LayerRule {
        layer: Layer::UseCase,
        fragments: &["usecase", "use_case"],
    },
    LayerRule {
        layer: Layer::Handler,
        fragments: &["handler", "controller"],
    },
    LayerRule {
        layer: Layer::Service,
        fragments: &["service"],
    },
];

/// Layer assigned when no rule matches.
pub const DEFAULT_LAYER: Layer = Layer::Service;

/// Classify an interface name into a layer.
///
/// Case-insensitive substring match against [`LAYER_RULES`].
pub fn classify_layer(name: &str) -> Layer {
    let lowered = name.to_lowercase();
    LAYER_RULES
        .iter()
        .find(|rule| rule.fragments.iter().any(|f| lowered.contains(f)))
        .map_or(DEFAULT_LAYER, |rule| rule.layer)
}

// ── Base names ───────────────────────────────────────────────────────────────

/// Suffixes stripped to obtain a base name, tried in this order.
pub static BASE_NAME_SUFFIXES: &[&str] = &[
    "Handler",
    "Controller",
    "UseCase",
    "Service",
    "Repo",
    "Repository",
];

/// Strip the first matching layer suffix from `name`.
///
/// At most one suffix is removed. A name without a known suffix is returned
/// unchanged.
pub fn base_name(name: &str) -> &str {
    BASE_NAME_SUFFIXES
        .iter()
        .find_map(|suffix| name.strip_suffix(suffix))
        .unwrap_or(name)
}

// ── Related-interface lookup ─────────────────────────────────────────────────

/// Suffixes tried, in order, when looking for `<base><suffix>` in a layer.
pub fn related_suffixes(layer: Layer) -> &'static [&'static str] {
    match layer {
        Layer::Repository => &["Repo", "Repository"],
        Layer::UseCase => &["UseCase", "Service"],
        Layer::Handler => &["Handler", "Controller"],
        Layer::Service => &[],
    }
}

/// Candidate interface names for the `layer` counterpart of `base`.
pub fn related_candidates(base: &str, layer: Layer) -> impl Iterator<Item = String> + '_ {
    related_suffixes(layer)
        .iter()
        .map(move |suffix| format!("{base}{suffix}"))
}
