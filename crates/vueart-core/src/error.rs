//! Fatal configuration errors
//!
//! These indicate a rule-table inconsistency, not user input, and are
//! never recovered silently. User cancellation is not an error; see
//! [`crate::prompt::Answer`].

use crate::config::Framework;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The rule tables define no architectures for this framework
    #[error("no architectures defined for framework: {0}")]
    UnknownFramework(Framework),

    /// Store filtering removed every architecture from the catalog
    #[error("no architectures available after store filtering for framework: {0}")]
    NoArchitecturesAfterFilter(Framework),
}
