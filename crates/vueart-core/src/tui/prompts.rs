//! Charm-style prompting and the end-to-end scaffolding session

use crate::config::ProjectConfig;
use crate::install::install_packages;
use crate::manifest::write_package_json;
use crate::packages::PackageTables;
use crate::prompt::{Answer, Choice, Prompter};
use crate::registry::VersionResolver;
use crate::rules::Rules;
use crate::scaffold::create_project_structure;
use crate::workflow::{collect_project_config, review_and_confirm};
use anyhow::Result;
use colored::Colorize;
use std::io;

/// [`Prompter`] backed by cliclack.
///
/// cliclack reports Esc/Ctrl+C inside a prompt as an `Interrupted` io
/// error; that is remapped to [`Answer::Canceled`] here so workflows
/// never see cancellation as a failure.
pub struct CliclackPrompter;

fn map_cancel<T>(result: io::Result<T>) -> io::Result<Answer<T>> {
    match result {
        Ok(value) => Ok(Answer::Value(value)),
        Err(e) if e.kind() == io::ErrorKind::Interrupted => Ok(Answer::Canceled),
        Err(e) => Err(e),
    }
}

impl Prompter for CliclackPrompter {
    fn input(&mut self, message: &str, default: Option<&str>) -> io::Result<Answer<String>> {
        let mut input = cliclack::input(message);
        if let Some(default) = default {
            input = input.placeholder(default).default_input(default);
        }
        map_cancel(input.interact())
    }

    fn select(
        &mut self,
        message: &str,
        choices: &[Choice],
        initial: Option<&str>,
    ) -> io::Result<Answer<String>> {
        let mut select = cliclack::select(message);
        for choice in choices {
            let hint = choice.disabled.as_deref().unwrap_or("");
            select = select.item(choice.value.clone(), &choice.label, hint);
        }
        if let Some(value) = initial {
            // cliclack panics on an initial value that is not an item
            if choices.iter().any(|c| c.value == value) {
                select = select.initial_value(value.to_string());
            }
        }
        map_cancel(select.interact())
    }

    fn confirm(&mut self, message: &str, default: bool) -> io::Result<Answer<bool>> {
        map_cancel(cliclack::confirm(message).initial_value(default).interact())
    }

    fn warn(&mut self, message: &str) -> io::Result<()> {
        cliclack::log::warning(message)
    }
}

/// Run the full interactive session: collect, review, emit, install.
pub async fn run() -> Result<()> {
    cliclack::intro("VueArt CLI")?;

    let rules = Rules::default();
    let tables = PackageTables::default();
    let mut prompter = CliclackPrompter;

    let draft = match collect_project_config(&mut prompter, &rules)? {
        Answer::Value(config) => config,
        Answer::Canceled => return canceled(),
    };

    let config = match review_and_confirm(&mut prompter, &rules, &tables, draft)? {
        Answer::Value(config) => config,
        Answer::Canceled => return canceled(),
    };

    let project_dir = std::env::current_dir()?.join(&config.name);

    create_project_structure(&project_dir, &config)?;
    cliclack::log::success(format!(
        "Project structure created at {}",
        project_dir.display()
    ))?;

    let resolver = VersionResolver::new()?;
    let spinner = cliclack::spinner();
    spinner.start("Generating package.json...");
    write_package_json(&project_dir, &config, &tables, &resolver).await?;
    spinner.stop("package.json generated");

    let mut install_skipped = true;
    if config.install_deps {
        match install_packages(&project_dir, config.package_manager).await? {
            Answer::Value(()) => {
                install_skipped = false;
                cliclack::log::success("Dependencies installed")?;
            }
            Answer::Canceled => return canceled(),
        }
    }

    print_next_steps(&config, install_skipped);
    cliclack::outro("Happy coding!")?;

    Ok(())
}

fn canceled() -> Result<()> {
    cliclack::outro("Project creation canceled.".yellow())?;
    Ok(())
}

fn print_next_steps(config: &ProjectConfig, install_skipped: bool) {
    let pm = config.package_manager.command();
    let mut steps = vec![format!("cd {}", config.name)];
    if install_skipped {
        steps.push(format!("{pm} install"));
    }
    steps.push(format!("{pm} run dev"));

    println!();
    println!("  {}", "Next steps".bold());
    println!();
    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step.cyan());
    }
    println!();
}
