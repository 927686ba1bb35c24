//! Rule tables and the pure functions that consult them
//!
//! The tables are built once at startup ([`Rules::default`]) and passed
//! explicitly wherever they are needed, so the recommendation and
//! filtering functions stay unit-testable against custom tables.

use crate::config::{Framework, Lifetime, Scale};
use crate::prompt::Choice;

/// One exclusive-selection rule: while `trigger` is selected, the
/// `disables` choice is marked disabled with `reason`.
#[derive(Debug, Clone)]
pub struct ExclusivityRule {
    pub trigger: String,
    pub disables: String,
    pub reason: String,
}

/// Architectures forbidden while a given store is selected
#[derive(Debug, Clone)]
pub struct StoreRule {
    pub store: String,
    pub forbidden: Vec<String>,
}

/// The immutable rule set for one program run.
#[derive(Debug, Clone)]
pub struct Rules {
    catalogs: Vec<(Framework, Vec<String>)>,
    exclusivity: Vec<ExclusivityRule>,
    store_rules: Vec<StoreRule>,
}

impl Default for Rules {
    fn default() -> Self {
        let arch = |names: &[&str]| names.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        Self {
            catalogs: vec![
                (Framework::Nuxt, arch(&["default", "feature", "layered", "enterprise"])),
                (Framework::Vue, arch(&["simple", "atomic", "feature", "enterprise"])),
                (Framework::Vuetify, arch(&["simple", "feature", "enterprise"])),
            ],
            exclusivity: vec![
                ExclusivityRule {
                    trigger: "eslint".to_string(),
                    disables: "cypress".to_string(),
                    reason: "ESLint selected, Cypress optional".to_string(),
                },
                ExclusivityRule {
                    trigger: "vitest".to_string(),
                    disables: "cypress".to_string(),
                    reason: "Vitest selected, Cypress optional".to_string(),
                },
            ],
            store_rules: vec![StoreRule {
                store: "vuex".to_string(),
                forbidden: vec!["atomic".to_string()],
            }],
        }
    }
}

impl Rules {
    /// Build a rule set from custom tables.
    pub fn new(
        catalogs: Vec<(Framework, Vec<String>)>,
        exclusivity: Vec<ExclusivityRule>,
        store_rules: Vec<StoreRule>,
    ) -> Self {
        Self {
            catalogs,
            exclusivity,
            store_rules,
        }
    }

    /// Ordered architecture catalog for a framework; the first entry is
    /// the fallback default. `None` when the tables have no entry.
    pub fn architectures(&self, framework: Framework) -> Option<&[String]> {
        self.catalogs
            .iter()
            .find(|(fw, _)| *fw == framework)
            .map(|(_, archs)| archs.as_slice())
    }

    /// Recommend an architecture for the given project context.
    ///
    /// First matching row wins. The result is always a member of the
    /// framework's catalog before store filtering; the caller re-checks
    /// validity after filtering. `lifetime` is threaded through for
    /// future sizing rules but no current row consults it.
    pub fn recommend(
        &self,
        framework: Framework,
        scale: Scale,
        _lifetime: Lifetime,
        features: &[String],
    ) -> String {
        let has = |token: &str| features.iter().any(|f| f == token);
        let name = match framework {
            Framework::Nuxt => {
                if scale == Scale::Large {
                    "enterprise"
                } else if scale == Scale::Medium && has("ts") {
                    "feature"
                } else {
                    "default"
                }
            }
            Framework::Vuetify => {
                if scale == Scale::Large {
                    "enterprise"
                } else if has("ts") && has("router") {
                    "feature"
                } else {
                    "simple"
                }
            }
            Framework::Vue => {
                if scale == Scale::Large {
                    "enterprise"
                } else if has("ts") && has("router") && has("pinia") {
                    "feature"
                } else if has("ts") {
                    "atomic"
                } else {
                    "simple"
                }
            }
        };
        name.to_string()
    }

    /// Mark choices disabled per the exclusivity rules for the current
    /// selection. Returns an annotated copy; the input is untouched and
    /// no choice is removed. Multiple rules may disable the same choice;
    /// the last matching rule's reason wins.
    pub fn apply_exclusivity(&self, selected: &[String], choices: &[Choice]) -> Vec<Choice> {
        choices
            .iter()
            .map(|choice| {
                let mut copy = choice.clone();
                for rule in &self.exclusivity {
                    if selected.iter().any(|f| *f == rule.trigger)
                        && rule.disables == choice.value
                    {
                        copy.disabled = Some(rule.reason.clone());
                    }
                }
                copy
            })
            .collect()
    }

    /// Remove architectures forbidden for the given store, preserving
    /// order. Identity when `store` is `None` or matches no rule.
    pub fn filter_architectures(&self, store: Option<&str>, architectures: &[String]) -> Vec<String> {
        let Some(rule) = store.and_then(|s| self.store_rules.iter().find(|r| r.store == s)) else {
            return architectures.to_vec();
        };
        architectures
            .iter()
            .filter(|a| !rule.forbidden.contains(a))
            .cloned()
            .collect()
    }
}

/// The selectable feature choices, in presentation order.
///
/// Store tokens (`pinia`/`vuex`) are deliberately absent; the store is a
/// separate question whose answer joins the feature set afterward.
pub fn feature_choices() -> Vec<Choice> {
    vec![
        Choice::new("ts", "TypeScript"),
        Choice::new("router", "Vue Router"),
        Choice::new("eslint", "ESLint"),
        Choice::new("vitest", "Vitest (Unit Testing)"),
        Choice::new("cypress", "Cypress (E2E Testing)"),
        Choice::new("tailwind", "Tailwind CSS"),
        Choice::new("scss", "SCSS / Sass"),
        Choice::new("pwa", "PWA Support"),
        Choice::new("axios", "Axios / HTTP Module"),
        Choice::new("i18n", "i18n Module"),
        Choice::new("auth", "Auth Module"),
    ]
}
