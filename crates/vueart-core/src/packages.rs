//! Framework and feature to npm package mappings

use crate::config::Framework;

/// Immutable package tables: core packages always required per
/// framework, plus feature-token to package-name mappings.
#[derive(Debug, Clone)]
pub struct PackageTables {
    core: Vec<(Framework, Vec<&'static str>)>,
    map: Vec<(Framework, Vec<(&'static str, Vec<&'static str>)>)>,
}

impl Default for PackageTables {
    fn default() -> Self {
        Self {
            core: vec![
                (Framework::Vue, vec!["vue", "vite", "@vitejs/plugin-vue"]),
                (
                    Framework::Vuetify,
                    vec![
                        "vue",
                        "vite",
                        "@vitejs/plugin-vue",
                        "vuetify",
                        "vite-plugin-vuetify",
                        "@mdi/font",
                    ],
                ),
                (Framework::Nuxt, vec!["nuxt"]),
            ],
            map: vec![
                (
                    Framework::Vue,
                    vec![
                        ("ts", vec!["typescript"]),
                        ("router", vec!["vue-router"]),
                        ("pinia", vec!["pinia"]),
                        ("vuex", vec!["vuex"]),
                        ("eslint", vec!["eslint"]),
                        ("vitest", vec!["vitest"]),
                        ("cypress", vec!["cypress"]),
                        ("tailwind", vec!["tailwindcss", "postcss", "autoprefixer"]),
                        ("scss", vec!["sass"]),
                        ("pwa", vec!["vite-plugin-pwa"]),
                        ("axios", vec!["axios"]),
                    ],
                ),
                (
                    Framework::Vuetify,
                    vec![
                        ("ts", vec!["typescript"]),
                        ("router", vec!["vue-router"]),
                        ("pinia", vec!["pinia"]),
                        ("vuex", vec!["vuex"]),
                        ("eslint", vec!["eslint"]),
                        ("tailwind", vec!["tailwindcss", "postcss", "autoprefixer"]),
                        ("pwa", vec!["vite-plugin-pwa"]),
                        ("axios", vec!["axios"]),
                    ],
                ),
                (
                    Framework::Nuxt,
                    vec![
                        ("ts", vec!["@nuxt/typescript-build"]),
                        ("pinia", vec!["@pinia/nuxt"]),
                        ("vuex", vec!["vuex"]),
                        ("eslint", vec!["eslint"]),
                        ("pwa", vec!["@nuxt/pwa"]),
                        ("i18n", vec!["@nuxt/i18n"]),
                        ("auth", vec!["@nuxt/auth-next"]),
                        ("axios", vec!["@nuxt/axios"]),
                        ("vitest", vec!["vitest"]),
                        ("cypress", vec!["cypress"]),
                        ("tailwind", vec!["@nuxt/tailwindcss"]),
                    ],
                ),
            ],
        }
    }
}

impl PackageTables {
    /// Packages a feature token maps to for a framework; empty when the
    /// framework has no mapping for that token.
    pub fn packages_for_feature(&self, framework: Framework, feature: &str) -> &[&'static str] {
        self.map
            .iter()
            .find(|(fw, _)| *fw == framework)
            .and_then(|(_, entries)| {
                entries
                    .iter()
                    .find(|(token, _)| *token == feature)
                    .map(|(_, pkgs)| pkgs.as_slice())
            })
            .unwrap_or(&[])
    }

    /// Core packages always required for a framework
    pub fn core_packages(&self, framework: Framework) -> &[&'static str] {
        self.core
            .iter()
            .find(|(fw, _)| *fw == framework)
            .map(|(_, pkgs)| pkgs.as_slice())
            .unwrap_or(&[])
    }

    /// Deduplicated package list: core packages plus everything the
    /// selected features map to, in first-seen order.
    pub fn packages_list(&self, framework: Framework, features: &[String]) -> Vec<String> {
        let mut list: Vec<String> = Vec::new();
        let mut push = |pkg: &str| {
            if !list.iter().any(|p| p == pkg) {
                list.push(pkg.to_string());
            }
        };
        for pkg in self.core_packages(framework) {
            push(pkg);
        }
        for feature in features {
            for pkg in self.packages_for_feature(framework, feature) {
                push(pkg);
            }
        }
        list
    }
}
