//! Review, field-by-field editing, and the final confirmation gates

use super::architecture::{select_architecture, ArchitectureRequest};
use super::{
    prompt_project_name, select_features, select_framework, select_lifetime,
    select_package_manager, select_scale, select_store,
};
use crate::config::ProjectConfig;
use crate::packages::PackageTables;
use crate::prompt::{ask, Answer, Prompter};
use crate::rules::Rules;
use anyhow::Result;

fn render_summary(config: &ProjectConfig, tables: &PackageTables) -> String {
    let packages = tables.packages_list(config.framework, &config.features);
    let packages = if packages.is_empty() {
        "none".to_string()
    } else {
        packages.join(", ")
    };
    format!(
        "\nProject: {}\nFramework: {}\nArchitecture: {}\nFeatures: {}\nPackages: {}\n",
        config.name,
        config.framework,
        config.architecture,
        config.features_summary(),
        packages
    )
}

/// Show the draft, offer editing, then the proceed and install gates.
///
/// Declining a proceed gate cancels the whole session. On proceed the
/// install answer is attached to the returned configuration.
pub fn review_and_confirm<P: Prompter>(
    prompter: &mut P,
    rules: &Rules,
    tables: &PackageTables,
    config: ProjectConfig,
) -> Result<Answer<ProjectConfig>> {
    let wants_edit = ask!(prompter.confirm(
        &format!(
            "{}\nDo you want to edit any of these options?",
            render_summary(&config, tables)
        ),
        false
    ));

    let mut final_config = config;
    if wants_edit {
        final_config = ask!(edit_config(prompter, rules, final_config));
        let proceed = ask!(prompter.confirm(
            &format!(
                "Updated configuration:{}Proceed?",
                render_summary(&final_config, tables)
            ),
            true
        ));
        if !proceed {
            return Ok(Answer::Canceled);
        }
    } else {
        let proceed = ask!(prompter.confirm("Proceed?", true));
        if !proceed {
            return Ok(Answer::Canceled);
        }
    }

    final_config.install_deps =
        ask!(prompter.confirm("Do you want to install dependencies?", true));

    Ok(Answer::Value(final_config))
}

/// Walk the fields in a fixed order, re-running a field's prompt only
/// when its "edit this?" confirm is accepted.
///
/// Features and store are separate questions over the same feature set:
/// the store token is stripped before the generic feature question and
/// reattached afterward, from the edited store if it was edited or the
/// original one if not.
fn edit_config<P: Prompter>(
    prompter: &mut P,
    rules: &Rules,
    config: ProjectConfig,
) -> Result<Answer<ProjectConfig>> {
    let mut edited = config.clone();

    if ask!(prompter.confirm(&format!("Edit project name? (Current: {})", config.name), false)) {
        edited.name = ask!(prompt_project_name(prompter, Some(&config.name)));
    }

    if ask!(prompter.confirm(&format!("Edit framework? (Current: {})", config.framework), false)) {
        edited.framework = ask!(select_framework(prompter, Some(config.framework)));
    }

    let current_store = config.store();
    let features_without_store = config.features_without_store();

    if ask!(prompter.confirm(
        &format!("Edit features? (Current: {})", config.features_summary()),
        false
    )) {
        edited.features = ask!(select_features(prompter, rules, &features_without_store));
    } else {
        edited.features = features_without_store;
    }

    let store_label = current_store.map(|s| s.token()).unwrap_or("None");
    if ask!(prompter.confirm(&format!("Edit store? (Current: {store_label})"), false)) {
        if let Some(store) = ask!(select_store(prompter, current_store)) {
            edited.features.push(store.token().to_string());
        }
    } else if let Some(store) = current_store {
        edited.features.push(store.token().to_string());
    }

    if ask!(prompter.confirm(&format!("Edit project scale? (Current: {})", config.scale), false)) {
        edited.scale = ask!(select_scale(prompter, Some(config.scale)));
    }

    if ask!(prompter.confirm(
        &format!("Edit project lifetime? (Current: {})", config.lifetime),
        false
    )) {
        edited.lifetime = ask!(select_lifetime(prompter, Some(config.lifetime)));
    }

    if ask!(prompter.confirm(
        &format!("Edit architecture? (Current: {})", edited.architecture),
        false
    )) {
        edited.architecture = ask!(select_architecture(
            prompter,
            rules,
            &ArchitectureRequest {
                framework: edited.framework,
                scale: edited.scale,
                lifetime: edited.lifetime,
                features: &edited.features,
                skip_recommendation: true,
                current: Some(&edited.architecture),
            }
        ));
    }

    if ask!(prompter.confirm(
        &format!("Edit package manager? (Current: {})", config.package_manager),
        false
    )) {
        edited.package_manager = ask!(select_package_manager(prompter, Some(config.package_manager)));
    }

    Ok(Answer::Value(edited))
}
