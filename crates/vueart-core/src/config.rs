//! Project configuration collected across an interactive session

use std::fmt;

/// Supported frameworks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Framework {
    Vue,
    Nuxt,
    Vuetify,
}

impl Framework {
    pub const ALL: [Framework; 3] = [Framework::Vue, Framework::Nuxt, Framework::Vuetify];

    /// Token used in rule tables and summaries
    pub fn value(&self) -> &'static str {
        match self {
            Framework::Vue => "vue",
            Framework::Nuxt => "nuxt",
            Framework::Vuetify => "vuetify",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::Vue => "Vue",
            Framework::Nuxt => "Nuxt 3",
            Framework::Vuetify => "Vue 3 + Vuetify",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "vue" => Some(Framework::Vue),
            "nuxt" => Some(Framework::Nuxt),
            "vuetify" => Some(Framework::Vuetify),
            _ => None,
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Expected project scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Small,
    Medium,
    Large,
}

impl Scale {
    pub const ALL: [Scale; 3] = [Scale::Small, Scale::Medium, Scale::Large];

    pub fn value(&self) -> &'static str {
        match self {
            Scale::Small => "small",
            Scale::Medium => "medium",
            Scale::Large => "large",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Scale::Small => "Small",
            Scale::Medium => "Medium",
            Scale::Large => "Large",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "small" => Some(Scale::Small),
            "medium" => Some(Scale::Medium),
            "large" => Some(Scale::Large),
            _ => None,
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Expected project lifetime
///
/// Accepted by the recommendation table for forward compatibility; no
/// current rule consults it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifetime {
    Short,
    Long,
}

impl Lifetime {
    pub const ALL: [Lifetime; 2] = [Lifetime::Short, Lifetime::Long];

    pub fn value(&self) -> &'static str {
        match self {
            Lifetime::Short => "short",
            Lifetime::Long => "long",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Lifetime::Short => "Short-term",
            Lifetime::Long => "Long-term",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "short" => Some(Lifetime::Short),
            "long" => Some(Lifetime::Long),
            _ => None,
        }
    }
}

impl fmt::Display for Lifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Package manager used for dependency installation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    pub const ALL: [PackageManager; 3] =
        [PackageManager::Npm, PackageManager::Yarn, PackageManager::Pnpm];

    /// Binary name, also the token shown in summaries
    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "npm" => Some(PackageManager::Npm),
            "yarn" => Some(PackageManager::Yarn),
            "pnpm" => Some(PackageManager::Pnpm),
            _ => None,
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command())
    }
}

/// State-management store, carried in the feature set as a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Store {
    Pinia,
    Vuex,
}

impl Store {
    pub fn token(&self) -> &'static str {
        match self {
            Store::Pinia => "pinia",
            Store::Vuex => "vuex",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pinia" => Some(Store::Pinia),
            "vuex" => Some(Store::Vuex),
            _ => None,
        }
    }
}

impl fmt::Display for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// The configuration built across the interactive session.
///
/// Created by the collection workflow, optionally revised field-by-field
/// during the edit pass, and frozen once the user confirms. At most one
/// store token (`pinia`/`vuex`) is ever present in `features`; the
/// workflows strip and reattach it around the generic feature question.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectConfig {
    /// Project name; non-empty, no spaces
    pub name: String,
    pub framework: Framework,
    /// Selected feature tokens, including the store token if any
    pub features: Vec<String>,
    /// Member of the framework's architecture catalog after store filtering
    pub architecture: String,
    pub scale: Scale,
    pub lifetime: Lifetime,
    pub package_manager: PackageManager,
    /// Run the package manager after emission
    pub install_deps: bool,
}

impl ProjectConfig {
    pub fn has_feature(&self, token: &str) -> bool {
        self.features.iter().any(|f| f == token)
    }

    /// The store token currently in the feature set, if any
    pub fn store(&self) -> Option<Store> {
        self.features.iter().find_map(|f| Store::parse(f))
    }

    /// Feature tokens with the store token removed
    pub fn features_without_store(&self) -> Vec<String> {
        self.features
            .iter()
            .filter(|f| Store::parse(f).is_none())
            .cloned()
            .collect()
    }

    /// Comma-joined feature list for summaries, `"none"` when empty
    pub fn features_summary(&self) -> String {
        if self.features.is_empty() {
            "none".to_string()
        } else {
            self.features.join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framework_tokens_round_trip() {
        for fw in Framework::ALL {
            assert_eq!(Framework::parse(fw.value()), Some(fw));
        }
        assert_eq!(Framework::parse("svelte"), None);
    }

    #[test]
    fn store_extracted_from_features() {
        let config = ProjectConfig {
            name: "demo".to_string(),
            framework: Framework::Vue,
            features: vec!["ts".to_string(), "vuex".to_string()],
            architecture: "simple".to_string(),
            scale: Scale::Small,
            lifetime: Lifetime::Short,
            package_manager: PackageManager::Npm,
            install_deps: false,
        };
        assert_eq!(config.store(), Some(Store::Vuex));
        assert_eq!(config.features_without_store(), vec!["ts".to_string()]);
    }
}
