//! package.json generation

use crate::config::{Framework, ProjectConfig};
use crate::packages::PackageTables;
use crate::registry::VersionResolver;
use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Packages that belong in `dependencies`
const RUNTIME_DEPS: &[&str] = &[
    "vue-router",
    "pinia",
    "vuex",
    "axios",
    "vuetify",
    "@mdi/font",
    "@nuxt/pwa",
    "@nuxt/axios",
    "@nuxt/i18n",
    "@nuxt/auth-next",
    "@pinia/nuxt",
];

/// Packages that belong in `devDependencies`
const DEV_DEPS: &[&str] = &[
    "typescript",
    "vite",
    "@vitejs/plugin-vue",
    "tailwindcss",
    "postcss",
    "autoprefixer",
    "sass",
    "vite-plugin-pwa",
    "eslint",
    "vitest",
    "cypress",
    "@nuxt/typescript-build",
    "@nuxt/tailwindcss",
];

#[derive(Debug, Serialize)]
pub struct PackageJson {
    name: String,
    version: &'static str,
    private: bool,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    module_type: Option<&'static str>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    scripts: BTreeMap<&'static str, &'static str>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    dependencies: BTreeMap<String, String>,
    #[serde(rename = "devDependencies", skip_serializing_if = "BTreeMap::is_empty")]
    dev_dependencies: BTreeMap<String, String>,
}

impl PackageJson {
    #[cfg(test)]
    fn dependency(&self, name: &str) -> Option<&str> {
        self.dependencies.get(name).map(String::as_str)
    }

    #[cfg(test)]
    fn dev_dependency(&self, name: &str) -> Option<&str> {
        self.dev_dependencies.get(name).map(String::as_str)
    }
}

/// Base manifest for the framework: scripts and pinned base versions.
fn base_manifest(config: &ProjectConfig) -> PackageJson {
    let name = config.name.split_whitespace().collect::<Vec<_>>().join("-").to_lowercase();

    let mut manifest = PackageJson {
        name,
        version: "1.0.0",
        private: true,
        module_type: None,
        scripts: BTreeMap::new(),
        dependencies: BTreeMap::new(),
        dev_dependencies: BTreeMap::new(),
    };

    match config.framework {
        Framework::Vue | Framework::Vuetify => {
            manifest.module_type = Some("module");
            manifest.scripts.insert("dev", "vite");
            manifest.scripts.insert("build", "vite build");
            manifest.scripts.insert("preview", "vite preview");

            manifest.dependencies.insert("vue".into(), "^3.4.0".into());
            manifest.dev_dependencies.insert("vite".into(), "^5.0.0".into());
            manifest
                .dev_dependencies
                .insert("@vitejs/plugin-vue".into(), "^5.0.0".into());

            if config.framework == Framework::Vuetify {
                manifest.dependencies.insert("vuetify".into(), "^3.5.0".into());
                manifest.dependencies.insert("@mdi/font".into(), "^7.4.0".into());
            }
        }
        Framework::Nuxt => {
            manifest.scripts.insert("dev", "nuxt dev");
            manifest.scripts.insert("build", "nuxt build");
            manifest.scripts.insert("preview", "nuxt preview");
            manifest.scripts.insert("generate", "nuxt generate");

            manifest.dependencies.insert("nuxt".into(), "^3.12.0".into());
        }
    }

    if config.has_feature("vitest") {
        manifest.scripts.insert("test", "vitest");
    }

    manifest
}

/// Feature-derived packages still needing a version, in mapping order.
fn unpinned_feature_packages(config: &ProjectConfig, tables: &PackageTables) -> Vec<String> {
    let base = base_manifest(config);
    let mut packages = Vec::new();
    for feature in &config.features {
        for pkg in tables.packages_for_feature(config.framework, feature) {
            let pkg = pkg.to_string();
            if base.dependencies.contains_key(&pkg)
                || base.dev_dependencies.contains_key(&pkg)
                || packages.contains(&pkg)
            {
                continue;
            }
            packages.push(pkg);
        }
    }
    packages
}

/// Assemble the manifest from resolved `(package, version)` pairs.
fn assemble(config: &ProjectConfig, resolved: &[(String, String)]) -> PackageJson {
    let mut manifest = base_manifest(config);
    for (pkg, version) in resolved {
        if RUNTIME_DEPS.contains(&pkg.as_str()) {
            manifest.dependencies.insert(pkg.clone(), version.clone());
        } else if DEV_DEPS.contains(&pkg.as_str()) {
            manifest.dev_dependencies.insert(pkg.clone(), version.clone());
        } else {
            // Unlisted packages default to runtime dependencies
            manifest.dependencies.insert(pkg.clone(), version.clone());
        }
    }
    manifest
}

/// Generate and write `package.json` into the project directory,
/// resolving unpinned versions through the registry.
pub async fn write_package_json(
    project_dir: &Path,
    config: &ProjectConfig,
    tables: &PackageTables,
    resolver: &VersionResolver,
) -> Result<()> {
    let mut resolved = Vec::new();
    for pkg in unpinned_feature_packages(config, tables) {
        let version = resolver.latest_stable(&pkg).await;
        resolved.push((pkg, version));
    }

    let manifest = assemble(config, &resolved);
    let content = serde_json::to_string_pretty(&manifest).context("Failed to serialize package.json")?;

    let path = project_dir.join("package.json");
    std::fs::write(&path, content.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Lifetime, PackageManager, Scale};

    fn config(framework: Framework, features: &[&str]) -> ProjectConfig {
        ProjectConfig {
            name: "My Demo App".to_string(),
            framework,
            features: features.iter().map(|s| s.to_string()).collect(),
            architecture: "simple".to_string(),
            scale: Scale::Small,
            lifetime: Lifetime::Short,
            package_manager: PackageManager::Npm,
            install_deps: false,
        }
    }

    fn resolve_all(config: &ProjectConfig, tables: &PackageTables) -> Vec<(String, String)> {
        unpinned_feature_packages(config, tables)
            .into_iter()
            .map(|pkg| (pkg, "^9.9.9".to_string()))
            .collect()
    }

    #[test]
    fn name_is_slugified() {
        let manifest = base_manifest(&config(Framework::Vue, &[]));
        assert_eq!(manifest.name, "my-demo-app");
    }

    #[test]
    fn vue_base_manifest_pins_versions() {
        let manifest = base_manifest(&config(Framework::Vue, &[]));
        assert_eq!(manifest.module_type, Some("module"));
        assert_eq!(manifest.scripts.get("dev"), Some(&"vite"));
        assert_eq!(manifest.dependency("vue"), Some("^3.4.0"));
        assert_eq!(manifest.dev_dependency("vite"), Some("^5.0.0"));
        assert_eq!(manifest.dev_dependency("@vitejs/plugin-vue"), Some("^5.0.0"));
    }

    #[test]
    fn vuetify_adds_runtime_ui_packages() {
        let manifest = base_manifest(&config(Framework::Vuetify, &[]));
        assert_eq!(manifest.dependency("vuetify"), Some("^3.5.0"));
        assert_eq!(manifest.dependency("@mdi/font"), Some("^7.4.0"));
    }

    #[test]
    fn nuxt_scripts_include_generate() {
        let manifest = base_manifest(&config(Framework::Nuxt, &[]));
        assert_eq!(manifest.scripts.get("generate"), Some(&"nuxt generate"));
        assert_eq!(manifest.dependency("nuxt"), Some("^3.12.0"));
        assert_eq!(manifest.module_type, None);
    }

    #[test]
    fn vitest_feature_adds_test_script() {
        let with = base_manifest(&config(Framework::Vue, &["vitest"]));
        assert_eq!(with.scripts.get("test"), Some(&"vitest"));
        let without = base_manifest(&config(Framework::Vue, &[]));
        assert_eq!(without.scripts.get("test"), None);
    }

    #[test]
    fn features_classify_into_runtime_and_dev() {
        let tables = PackageTables::default();
        let cfg = config(Framework::Vue, &["ts", "router", "pinia", "tailwind"]);
        let manifest = assemble(&cfg, &resolve_all(&cfg, &tables));

        assert_eq!(manifest.dependency("vue-router"), Some("^9.9.9"));
        assert_eq!(manifest.dependency("pinia"), Some("^9.9.9"));
        assert_eq!(manifest.dev_dependency("typescript"), Some("^9.9.9"));
        assert_eq!(manifest.dev_dependency("tailwindcss"), Some("^9.9.9"));
        assert_eq!(manifest.dev_dependency("postcss"), Some("^9.9.9"));
        assert_eq!(manifest.dev_dependency("autoprefixer"), Some("^9.9.9"));
    }

    #[test]
    fn pinned_base_packages_are_never_re_resolved() {
        let tables = PackageTables::default();
        // vuetify maps no feature back onto vue/vite, but ts maps to
        // typescript only; the pinned bases must stay untouched
        let cfg = config(Framework::Vuetify, &["ts"]);
        let unpinned = unpinned_feature_packages(&cfg, &tables);
        assert_eq!(unpinned, vec!["typescript".to_string()]);

        let manifest = assemble(&cfg, &resolve_all(&cfg, &tables));
        assert_eq!(manifest.dependency("vuetify"), Some("^3.5.0"));
    }

    #[test]
    fn nuxt_feature_tokens_resolve_to_nuxt_modules() {
        let tables = PackageTables::default();
        let cfg = config(Framework::Nuxt, &["pinia", "auth", "i18n"]);
        let manifest = assemble(&cfg, &resolve_all(&cfg, &tables));
        assert_eq!(manifest.dependency("@pinia/nuxt"), Some("^9.9.9"));
        assert_eq!(manifest.dependency("@nuxt/auth-next"), Some("^9.9.9"));
        assert_eq!(manifest.dependency("@nuxt/i18n"), Some("^9.9.9"));
        // Feature tokens themselves never appear as package names
        assert_eq!(manifest.dependency("pinia"), None);
        assert_eq!(manifest.dependency("auth"), None);
    }

    #[test]
    fn duplicate_feature_packages_resolved_once() {
        let tables = PackageTables::default();
        let cfg = config(Framework::Vue, &["eslint", "vitest", "eslint"]);
        let unpinned = unpinned_feature_packages(&cfg, &tables);
        assert_eq!(
            unpinned,
            vec!["eslint".to_string(), "vitest".to_string()]
        );
    }
}
