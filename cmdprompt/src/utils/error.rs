//! # Prompt Errors
//!
//! Failures that leave the prompt engine and reach the caller.
//!
//! Invalid operator input is never one of them: a rejected answer is a
//! [`ValidationError`](crate::utils::ValidationError), which [`Terminal`](crate::utils::Terminal)
//! prints and retries locally. [`PromptError`] only covers misconfiguration
//! (reported before anything is read) and a broken input channel.
use std::io;
use thiserror::Error;

/// Error returned by [`Terminal::ask`](crate::utils::Terminal::ask) and the
/// validator constructors.
#[derive(Debug, Error)]
pub enum PromptError {
    /// A [`PromptKind::Choice`](crate::utils::PromptKind::Choice) prompt was
    /// built without any choices.
    #[error("choice prompt `{label}` requires a non-empty choice list")]
    EmptyChoiceList { label: String },

    /// A regex validator was generated from a pattern that does not compile.
    #[error("invalid regex pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The input stream reached end-of-file before a valid value was entered.
    #[error("input closed before a valid value was entered")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl PromptError {
    /// Returns `true` for errors caused by how the prompt was built rather
    /// than by the input channel.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            PromptError::EmptyChoiceList { .. } | PromptError::InvalidPattern { .. }
        )
    }
}
