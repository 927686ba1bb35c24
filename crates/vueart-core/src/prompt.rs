//! Prompting abstraction with explicit cancellation
//!
//! Every prompt returns an [`Answer`] so that user cancellation (Esc or
//! Ctrl+C inside a prompt) flows back as a value checked at the call
//! site, never as an exception-like escape. Workflows use the [`ask!`]
//! macro to unwrap a value or return `Answer::Canceled` early.

use std::io;

/// A selectable choice with an optional disablement reason.
///
/// `disabled` carries a human-readable reason; disabled choices are
/// still shown but cannot be newly selected.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    pub value: String,
    pub label: String,
    pub disabled: Option<String>,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: None,
        }
    }
}

/// Outcome of a prompt: a value, or the user backed out.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum Answer<T> {
    Value(T),
    Canceled,
}

impl<T> Answer<T> {
    pub fn is_canceled(&self) -> bool {
        matches!(self, Answer::Canceled)
    }
}

/// Interactive prompting collaborator.
///
/// Implementations must map their native interrupt mechanism to
/// `Answer::Canceled` rather than an error.
pub trait Prompter {
    /// Free-text input. Validation is the caller's responsibility.
    fn input(&mut self, message: &str, default: Option<&str>) -> io::Result<Answer<String>>;

    /// Single choice from a list; returns the chosen `value`.
    fn select(
        &mut self,
        message: &str,
        choices: &[Choice],
        initial: Option<&str>,
    ) -> io::Result<Answer<String>>;

    /// Yes/no question with a default.
    fn confirm(&mut self, message: &str, default: bool) -> io::Result<Answer<bool>>;

    /// Advisory message (validation failures, disabled-choice reasons).
    fn warn(&mut self, message: &str) -> io::Result<()>;
}

/// Unwrap an `Answer`, returning `Ok(Answer::Canceled)` from the
/// enclosing function when the user backed out.
macro_rules! ask {
    ($expr:expr) => {
        match $expr? {
            $crate::prompt::Answer::Value(v) => v,
            $crate::prompt::Answer::Canceled => {
                return Ok($crate::prompt::Answer::Canceled)
            }
        }
    };
}

pub(crate) use ask;
