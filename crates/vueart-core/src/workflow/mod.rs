//! The interactive configuration workflow
//!
//! Collection builds a draft [`ProjectConfig`] question by question;
//! review lets the user revise any field before the final gates. Both
//! are generic over [`Prompter`] and return [`Answer::Canceled`] the
//! moment the user backs out, leaving the filesystem untouched.

pub mod architecture;
mod collect;
mod review;

pub use architecture::{select_architecture, ArchitectureRequest};
pub use collect::collect_project_config;
pub use review::review_and_confirm;

use crate::config::{Framework, Lifetime, PackageManager, Scale, Store};
use crate::prompt::{ask, Answer, Choice, Prompter};
use crate::rules::{feature_choices, Rules};
use anyhow::{Context, Result};
use std::io;

/// Sentinel value for the "done" entry in the feature toggle menu
const DONE: &str = "__done__";

fn select_framework<P: Prompter>(
    prompter: &mut P,
    current: Option<Framework>,
) -> Result<Answer<Framework>> {
    let choices: Vec<Choice> = Framework::ALL
        .iter()
        .map(|fw| Choice::new(fw.value(), fw.display_name()))
        .collect();
    let picked = ask!(prompter.select(
        "Select project type:",
        &choices,
        current.map(|fw| fw.value())
    ));
    let framework = Framework::parse(&picked).context("prompter returned an unknown framework")?;
    Ok(Answer::Value(framework))
}

fn select_scale<P: Prompter>(prompter: &mut P, current: Option<Scale>) -> Result<Answer<Scale>> {
    let choices: Vec<Choice> = Scale::ALL
        .iter()
        .map(|s| Choice::new(s.value(), s.display_name()))
        .collect();
    let picked = ask!(prompter.select("Project scale:", &choices, current.map(|s| s.value())));
    let scale = Scale::parse(&picked).context("prompter returned an unknown scale")?;
    Ok(Answer::Value(scale))
}

fn select_lifetime<P: Prompter>(
    prompter: &mut P,
    current: Option<Lifetime>,
) -> Result<Answer<Lifetime>> {
    let choices: Vec<Choice> = Lifetime::ALL
        .iter()
        .map(|l| Choice::new(l.value(), l.display_name()))
        .collect();
    let picked = ask!(prompter.select("Project lifetime:", &choices, current.map(|l| l.value())));
    let lifetime = Lifetime::parse(&picked).context("prompter returned an unknown lifetime")?;
    Ok(Answer::Value(lifetime))
}

fn select_package_manager<P: Prompter>(
    prompter: &mut P,
    current: Option<PackageManager>,
) -> Result<Answer<PackageManager>> {
    let choices: Vec<Choice> = PackageManager::ALL
        .iter()
        .map(|pm| Choice::new(pm.command(), pm.command()))
        .collect();
    let picked = ask!(prompter.select(
        "Select package manager:",
        &choices,
        current.map(|pm| pm.command())
    ));
    let pm = PackageManager::parse(&picked).context("prompter returned an unknown package manager")?;
    Ok(Answer::Value(pm))
}

fn select_store<P: Prompter>(
    prompter: &mut P,
    current: Option<Store>,
) -> Result<Answer<Option<Store>>> {
    let choices = vec![
        Choice::new("none", "None"),
        Choice::new("pinia", "Pinia"),
        Choice::new("vuex", "Vuex"),
    ];
    let initial = current.map(|s| s.token()).unwrap_or("none");
    let picked = ask!(prompter.select("Select store:", &choices, Some(initial)));
    Ok(Answer::Value(Store::parse(&picked)))
}

/// Prompt until the name is non-empty and contains no spaces.
fn prompt_project_name<P: Prompter>(
    prompter: &mut P,
    current: Option<&str>,
) -> io::Result<Answer<String>> {
    loop {
        let raw = match prompter.input("Project name:", current)? {
            Answer::Value(v) => v,
            Answer::Canceled => return Ok(Answer::Canceled),
        };
        let name = raw.trim().to_string();
        if !name.is_empty() && !name.contains(' ') {
            return Ok(Answer::Value(name));
        }
        prompter.warn("Invalid project name: must be non-empty with no spaces")?;
    }
}

/// Feature selection as a toggle loop.
///
/// The choice list is re-derived through the exclusivity rules after
/// every toggle, so a disablement takes effect immediately. Disabling is
/// advisory: a disabled choice cannot be newly added (the reason is
/// shown instead), but one selected before the rule triggered stays and
/// can still be toggled off.
fn select_features<P: Prompter>(
    prompter: &mut P,
    rules: &Rules,
    initial: &[String],
) -> Result<Answer<Vec<String>>> {
    let mut selected: Vec<String> = initial.to_vec();
    loop {
        let annotated = rules.apply_exclusivity(&selected, &feature_choices());
        let mut menu: Vec<Choice> = annotated
            .iter()
            .map(|choice| {
                let marker = if selected.iter().any(|f| *f == choice.value) {
                    "[x]"
                } else {
                    "[ ]"
                };
                let label = match &choice.disabled {
                    Some(reason) => format!("{marker} {} ({reason})", choice.label),
                    None => format!("{marker} {}", choice.label),
                };
                Choice {
                    value: choice.value.clone(),
                    label,
                    disabled: choice.disabled.clone(),
                }
            })
            .collect();
        menu.push(Choice::new(DONE, "Done selecting features"));

        let picked = ask!(prompter.select("Select features:", &menu, None));
        if picked == DONE {
            return Ok(Answer::Value(selected));
        }

        if let Some(pos) = selected.iter().position(|f| *f == picked) {
            selected.remove(pos);
            continue;
        }
        let disabled = annotated
            .iter()
            .find(|c| c.value == picked)
            .and_then(|c| c.disabled.clone());
        match disabled {
            Some(reason) => prompter.warn(&reason)?,
            None => selected.push(picked),
        }
    }
}
