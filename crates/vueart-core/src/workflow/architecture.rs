//! Architecture selection: recommend, confirm, or pick manually

use crate::config::{Framework, Lifetime, Scale, Store};
use crate::error::ConfigError;
use crate::prompt::{ask, Answer, Choice, Prompter};
use crate::rules::Rules;
use anyhow::Result;

/// Inputs to one architecture selection pass.
#[derive(Debug, Clone)]
pub struct ArchitectureRequest<'a> {
    pub framework: Framework,
    pub scale: Scale,
    pub lifetime: Lifetime,
    /// Current feature tokens, store token included
    pub features: &'a [String],
    /// Skip the recommendation and go straight to the manual list
    /// (used by the edit flow)
    pub skip_recommendation: bool,
    /// Prior architecture, pre-seeded as the manual default when it
    /// survives store filtering
    pub current: Option<&'a str>,
}

/// Select an architecture for the request.
///
/// Computes the framework catalog, applies store filtering, then either
/// offers the recommendation for confirmation or presents the filtered
/// list for a manual pick. The returned value is always a member of the
/// post-filter catalog.
pub fn select_architecture<P: Prompter>(
    prompter: &mut P,
    rules: &Rules,
    request: &ArchitectureRequest<'_>,
) -> Result<Answer<String>> {
    let catalog = rules
        .architectures(request.framework)
        .filter(|archs| !archs.is_empty())
        .ok_or(ConfigError::UnknownFramework(request.framework))?;

    let store = request.features.iter().find_map(|f| Store::parse(f));
    let filtered = rules.filter_architectures(store.map(|s| s.token()), catalog);
    if filtered.is_empty() {
        return Err(ConfigError::NoArchitecturesAfterFilter(request.framework).into());
    }

    if request.skip_recommendation {
        let initial = request
            .current
            .filter(|current| filtered.iter().any(|a| a == current));
        return pick_manually(prompter, &filtered, initial);
    }

    let recommended = rules.recommend(
        request.framework,
        request.scale,
        request.lifetime,
        request.features,
    );

    // A recommendation knocked out by store filtering falls through to
    // the manual list.
    if filtered.contains(&recommended) {
        let use_recommended = ask!(prompter.confirm(
            &format!("Recommended architecture: \"{recommended}\". Use it?"),
            true
        ));
        if use_recommended {
            return Ok(Answer::Value(recommended));
        }
    }

    pick_manually(prompter, &filtered, None)
}

fn pick_manually<P: Prompter>(
    prompter: &mut P,
    architectures: &[String],
    initial: Option<&str>,
) -> Result<Answer<String>> {
    let choices: Vec<Choice> = architectures
        .iter()
        .map(|a| Choice::new(a.clone(), a.clone()))
        .collect();
    Ok(prompter.select("Select architecture:", &choices, initial)?)
}
