//! Dependency installation via the selected package manager.

use crate::config::PackageManager;
use crate::prompt::Answer;
use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::Path;
use tokio::process::Command;

/// Run `<package manager> install` inside the freshly emitted project.
///
/// The child inherits stdio so the package manager's own progress output
/// reaches the terminal. A Ctrl-C during the install surfaces as
/// [`Answer::Canceled`] rather than an error.
pub async fn install_packages(
    project_dir: &Path,
    package_manager: PackageManager,
) -> Result<Answer<()>> {
    let manifest = project_dir.join("package.json");
    if !manifest.exists() {
        println!(
            "{}",
            "No package.json found, skipping dependency installation.".yellow()
        );
        return Ok(Answer::Value(()));
    }

    let pm = package_manager.command();
    println!();
    println!(
        "{} {}",
        "Running:".dimmed(),
        format!("{pm} install").yellow()
    );
    println!();

    let status = Command::new(pm)
        .arg("install")
        .current_dir(project_dir)
        .status()
        .await
        .with_context(|| format!("Failed to run {pm} install"))?;

    if status.success() {
        return Ok(Answer::Value(()));
    }
    if interrupted(&status) {
        return Ok(Answer::Canceled);
    }
    match status.code() {
        Some(code) => bail!("{pm} install exited with code {code}"),
        None => bail!("{pm} install was terminated by a signal"),
    }
}

#[cfg(unix)]
fn interrupted(status: &std::process::ExitStatus) -> bool {
    use std::os::unix::process::ExitStatusExt;
    // SIGINT directly, or the 128+2 convention some managers exit with
    status.signal() == Some(2) || status.code() == Some(130)
}

#[cfg(not(unix))]
fn interrupted(status: &std::process::ExitStatus) -> bool {
    status.code() == Some(130)
}
