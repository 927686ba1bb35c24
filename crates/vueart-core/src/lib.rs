//! VueArt Core - Shared library for the VueArt scaffolding CLI
//!
//! This library implements the full project-creation pipeline for Vue,
//! Vuetify, and Nuxt applications: interactive configuration (with
//! recommendation and compatibility rules), project tree emission,
//! `package.json` generation with registry version resolution, and
//! dependency installation.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Rule tables, package tables,
//!   scaffolding, manifest generation, registry lookups
//! - **Layer 2: Workflow Orchestration** - Prompter-generic collection,
//!   review/edit, and architecture selection
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts
//!   (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use vueart_core::{collect_project_config, Rules};
//!
//! let rules = Rules::default();
//! let answer = collect_project_config(&mut my_prompter, &rules)?;
//! ```

pub mod config;
pub mod error;
pub mod install;
pub mod manifest;
pub mod packages;
pub mod prompt;
pub mod registry;
pub mod rules;
pub mod scaffold;
pub mod workflow;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{Framework, Lifetime, PackageManager, ProjectConfig, Scale, Store};
pub use error::ConfigError;
pub use packages::PackageTables;
pub use prompt::{Answer, Choice, Prompter};
pub use rules::{ExclusivityRule, Rules, StoreRule};
pub use workflow::{collect_project_config, review_and_confirm, select_architecture};

#[cfg(feature = "tui")]
pub use tui::run;
