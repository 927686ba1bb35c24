//! Initial linear collection of a project configuration

use super::architecture::{select_architecture, ArchitectureRequest};
use super::{
    prompt_project_name, select_features, select_framework, select_lifetime,
    select_package_manager, select_scale, select_store,
};
use crate::config::ProjectConfig;
use crate::prompt::{ask, Answer, Prompter};
use crate::rules::Rules;
use anyhow::Result;

/// Run the collection sequence: name, framework, features, store,
/// scale, lifetime, architecture (recommendation offered), package
/// manager. No backtracking; revisions happen in the review pass.
pub fn collect_project_config<P: Prompter>(
    prompter: &mut P,
    rules: &Rules,
) -> Result<Answer<ProjectConfig>> {
    let name = ask!(prompt_project_name(prompter, None));
    let framework = ask!(select_framework(prompter, None));

    let mut features = ask!(select_features(prompter, rules, &[]));
    if let Some(store) = ask!(select_store(prompter, None)) {
        features.push(store.token().to_string());
    }

    let scale = ask!(select_scale(prompter, None));
    let lifetime = ask!(select_lifetime(prompter, None));

    let architecture = ask!(select_architecture(
        prompter,
        rules,
        &ArchitectureRequest {
            framework,
            scale,
            lifetime,
            features: &features,
            skip_recommendation: false,
            current: None,
        }
    ));

    let package_manager = ask!(select_package_manager(prompter, None));

    Ok(Answer::Value(ProjectConfig {
        name,
        framework,
        features,
        architecture,
        scale,
        lifetime,
        package_manager,
        install_deps: false,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Framework, Lifetime, PackageManager, Scale};
    use crate::prompt::script::{Reply, ScriptedPrompter};

    #[test]
    fn full_collection_run() {
        let rules = Rules::default();
        let mut prompter = ScriptedPrompter::new([
            Reply::Text("my-app"),
            Reply::Pick("vue"),
            Reply::Pick("ts"),
            Reply::Pick("__done__"),
            Reply::Pick("pinia"),
            Reply::Pick("small"),
            Reply::Pick("long"),
            // vue + small + {ts, pinia} recommends atomic; accept it
            Reply::Yes,
            Reply::Pick("npm"),
        ]);
        let answer = collect_project_config(&mut prompter, &rules).unwrap();
        let Answer::Value(config) = answer else {
            panic!("expected a configuration");
        };
        assert_eq!(config.name, "my-app");
        assert_eq!(config.framework, Framework::Vue);
        assert_eq!(config.features, vec!["ts".to_string(), "pinia".to_string()]);
        assert_eq!(config.architecture, "atomic");
        assert_eq!(config.scale, Scale::Small);
        assert_eq!(config.lifetime, Lifetime::Long);
        assert_eq!(config.package_manager, PackageManager::Npm);
        assert!(!config.install_deps);
        assert!(prompter.finished());
    }

    #[test]
    fn invalid_name_is_reprompted() {
        let rules = Rules::default();
        let mut prompter = ScriptedPrompter::new([
            Reply::Text("has spaces"),
            Reply::Text(""),
            Reply::Text("ok-name"),
            Reply::Cancel,
        ]);
        let answer = collect_project_config(&mut prompter, &rules).unwrap();
        assert!(answer.is_canceled());
        assert_eq!(prompter.warnings.len(), 2);
    }

    #[test]
    fn disabled_feature_cannot_be_added() {
        let rules = Rules::default();
        let mut prompter = ScriptedPrompter::new([
            Reply::Text("app"),
            Reply::Pick("vue"),
            // eslint disables cypress; trying cypress warns and keeps going
            Reply::Pick("eslint"),
            Reply::Pick("cypress"),
            Reply::Pick("__done__"),
            Reply::Pick("none"),
            Reply::Pick("small"),
            Reply::Pick("short"),
            Reply::Yes,
            Reply::Pick("pnpm"),
        ]);
        let answer = collect_project_config(&mut prompter, &rules).unwrap();
        let Answer::Value(config) = answer else {
            panic!("expected a configuration");
        };
        assert_eq!(config.features, vec!["eslint".to_string()]);
        assert_eq!(prompter.warnings, vec!["ESLint selected, Cypress optional".to_string()]);
    }

    #[test]
    fn previously_selected_feature_survives_later_disablement() {
        let rules = Rules::default();
        let mut prompter = ScriptedPrompter::new([
            Reply::Text("app"),
            Reply::Pick("vue"),
            // cypress first, then vitest which disables it; cypress stays
            Reply::Pick("cypress"),
            Reply::Pick("vitest"),
            Reply::Pick("__done__"),
            Reply::Pick("none"),
            Reply::Pick("small"),
            Reply::Pick("short"),
            Reply::Yes,
            Reply::Pick("yarn"),
        ]);
        let answer = collect_project_config(&mut prompter, &rules).unwrap();
        let Answer::Value(config) = answer else {
            panic!("expected a configuration");
        };
        assert_eq!(
            config.features,
            vec!["cypress".to_string(), "vitest".to_string()]
        );
        assert!(prompter.warnings.is_empty());
    }

    #[test]
    fn cancel_mid_sequence_propagates() {
        let rules = Rules::default();
        let mut prompter =
            ScriptedPrompter::new([Reply::Text("app"), Reply::Pick("nuxt"), Reply::Cancel]);
        let answer = collect_project_config(&mut prompter, &rules).unwrap();
        assert!(answer.is_canceled());
    }
}
