//! # Input Validation
//!
//! Validators decide whether a sanitized value is an acceptable answer. Each
//! one takes the candidate [`PromptValue`] plus an optional message override
//! and either returns the accepted value (possibly converted, e.g. `"y"` →
//! `true`) or a [`ValidationError`] carrying the message and the rejected value.
//!
//! ## Built-in validators
//! - [`Validator::NonEmpty`]: rejects empty text.
//! - [`Validator::Optional`]: accepts anything.
//! - [`Validator::YesNo`]: maps `y`/`yes`/`n`/`no` to a boolean.
//! - [`Validator::Regex`]: returns the first match of a pattern.
//! - [`Validator::Choice`]: maps an index into a [`ChoiceList`] to the index
//!   itself or the payload of that entry.
//!
//! The last two are built with [`Validator::regex`] and [`Validator::choice`].
//! Any closure with the right signature also implements [`Validate`], so
//! callers can plug in their own rules.
//!
//! ## Example
//! ```rust
//! use cmdprompt::utils::{PromptValue, Validate, Validator};
//!
//! let digits = Validator::regex(r"\d+").unwrap();
//! assert_eq!(
//!     digits.validate(PromptValue::from("abc123"), None),
//!     Ok(PromptValue::from("123"))
//! );
//! assert!(digits.validate(PromptValue::from("abc"), None).is_err());
//! ```
use crate::utils::choice::{Choice, ChoiceList};
use crate::utils::error::PromptError;
use crate::utils::request::PromptKind;
use crate::utils::style::indent;
use crate::utils::value::PromptValue;
use regex::Regex;
use thiserror::Error;

pub const NONEMPTY_MESSAGE: &str = "Please enter some text.";
pub const YES_NO_MESSAGE: &str = "Please enter \"y\" or \"n\".";
pub const REGEX_MESSAGE: &str = "No matches found.";
pub const CHOICE_MESSAGE: &str = "Invalid choice. Please choose one of the following:";

/// A rejected answer.
///
/// `value` is the value the validator saw, which the prompt engine inspects
/// to tell an empty answer to an optional prompt apart from a wrong one.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
    pub value: PromptValue,
}

impl ValidationError {
    pub fn new(message: impl Into<String>, value: PromptValue) -> Self {
        ValidationError {
            message: message.into(),
            value,
        }
    }
}

/// Validation capability shared by built-in and caller-supplied validators.
pub trait Validate {
    /// Accepts or rejects `value`. `message` replaces the validator's default
    /// failure text when set.
    fn validate(
        &self,
        value: PromptValue,
        message: Option<&str>,
    ) -> Result<PromptValue, ValidationError>;
}

impl<F> Validate for F
where
    F: Fn(PromptValue, Option<&str>) -> Result<PromptValue, ValidationError>,
{
    fn validate(
        &self,
        value: PromptValue,
        message: Option<&str>,
    ) -> Result<PromptValue, ValidationError> {
        self(value, message)
    }
}

/// Built-in validators.
#[derive(Debug, Clone)]
pub enum Validator {
    NonEmpty,
    Optional,
    YesNo,
    Regex(RegexValidator),
    Choice(ChoiceValidator),
}

impl Validator {
    /// Regex validator with the default message, showing the pattern on failure.
    pub fn regex(pattern: &str) -> Result<Validator, PromptError> {
        RegexValidator::new(pattern).map(Validator::Regex)
    }

    /// Choice validator with the default message.
    pub fn choice(choices: ChoiceList) -> Validator {
        Validator::Choice(ChoiceValidator::new(choices))
    }
}

impl Validate for Validator {
    fn validate(
        &self,
        value: PromptValue,
        message: Option<&str>,
    ) -> Result<PromptValue, ValidationError> {
        match self {
            Validator::NonEmpty => validate_nonempty(value, message),
            Validator::Optional => validate_optional(value, message),
            Validator::YesNo => validate_yes_no(value, message),
            Validator::Regex(r) => r.validate(value, message),
            Validator::Choice(c) => c.validate(value, message),
        }
    }
}

/// Rejects empty values.
pub fn validate_nonempty(
    value: PromptValue,
    message: Option<&str>,
) -> Result<PromptValue, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new(
            message.unwrap_or(NONEMPTY_MESSAGE),
            value,
        ));
    }
    Ok(value)
}

/// Pass-through for optional text prompts.
pub fn validate_optional(
    value: PromptValue,
    _message: Option<&str>,
) -> Result<PromptValue, ValidationError> {
    Ok(value)
}

/// Maps a y/n answer to a boolean. Booleans are returned as they are.
pub fn validate_yes_no(
    value: PromptValue,
    message: Option<&str>,
) -> Result<PromptValue, ValidationError> {
    let fail = |value| ValidationError::new(message.unwrap_or(YES_NO_MESSAGE), value);
    match value {
        PromptValue::Bool(b) => Ok(PromptValue::Bool(b)),
        PromptValue::Text(text) => {
            let answer = text.trim().to_lowercase();
            match answer.as_str() {
                "y" | "yes" => Ok(PromptValue::Bool(true)),
                "n" | "no" => Ok(PromptValue::Bool(false)),
                _ => Err(fail(PromptValue::Text(answer))),
            }
        }
        other => Err(fail(other)),
    }
}

/// Accepts values containing a match of `pattern`.
#[derive(Debug, Clone)]
pub struct RegexValidator {
    regex: Regex,
    message: String,
    show_pattern: bool,
}

impl RegexValidator {
    pub fn new(pattern: &str) -> Result<Self, PromptError> {
        Self::with_message(pattern, REGEX_MESSAGE, true)
    }

    /// `message` is the default failure text; `show_pattern` appends the
    /// pattern to it (and to any override) on an indented line.
    pub fn with_message(
        pattern: &str,
        message: impl Into<String>,
        show_pattern: bool,
    ) -> Result<Self, PromptError> {
        let regex = Regex::new(pattern).map_err(|source| PromptError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(RegexValidator {
            regex,
            message: message.into(),
            show_pattern,
        })
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// First match in `text`. A pattern with exactly one capture group yields
    /// that group instead of the whole match.
    fn first_match(&self, text: &str) -> Option<String> {
        let caps = self.regex.captures(text)?;
        if self.regex.captures_len() == 2 {
            Some(caps.get(1).map_or("", |m| m.as_str()).to_string())
        } else {
            caps.get(0).map(|m| m.as_str().to_string())
        }
    }
}

impl Validate for RegexValidator {
    fn validate(
        &self,
        value: PromptValue,
        message: Option<&str>,
    ) -> Result<PromptValue, ValidationError> {
        let found = match &value {
            PromptValue::Text(text) => self.first_match(text),
            _ => None,
        };
        match found {
            Some(m) => Ok(PromptValue::Text(m)),
            None => {
                let mut msg = message.unwrap_or(&self.message).to_string();
                if self.show_pattern {
                    msg.push('\n');
                    msg.push_str(&indent(
                        &format!("Must match regex: {}", self.regex.as_str()),
                        1,
                    ));
                }
                Err(ValidationError::new(msg, value))
            }
        }
    }
}

/// Accepts the zero-based position of an entry in a [`ChoiceList`].
#[derive(Debug, Clone)]
pub struct ChoiceValidator {
    choices: ChoiceList,
    message: String,
}

impl ChoiceValidator {
    pub fn new(choices: ChoiceList) -> Self {
        Self::with_message(choices, CHOICE_MESSAGE)
    }

    pub fn with_message(choices: ChoiceList, message: impl Into<String>) -> Self {
        ChoiceValidator {
            choices,
            message: message.into(),
        }
    }

    pub fn choices(&self) -> &ChoiceList {
        &self.choices
    }
}

impl Validate for ChoiceValidator {
    fn validate(
        &self,
        value: PromptValue,
        message: Option<&str>,
    ) -> Result<PromptValue, ValidationError> {
        // Unparsable input is just another invalid option.
        let index = match &value {
            PromptValue::Index(i) => Some(*i),
            PromptValue::Text(text) => text.trim().parse::<usize>().ok(),
            _ => None,
        };
        match index.and_then(|i| self.choices.get(i).map(|c| (i, c))) {
            Some((_, Choice::Pair(_, payload))) => Ok(PromptValue::Payload(payload.clone())),
            Some((i, Choice::Label(_))) => Ok(PromptValue::Index(i)),
            None => {
                let msg = format!(
                    "{}\n\n{}\n",
                    message.unwrap_or(&self.message),
                    self.choices.render()
                );
                Err(ValidationError::new(msg, value))
            }
        }
    }
}

/// Default validator for a prompt kind.
///
/// | kind | optional | validator |
/// |---|---|---|
/// | `Text` | no | [`Validator::NonEmpty`] |
/// | `Text` | yes | [`Validator::Optional`] |
/// | `YesNo` | any | [`Validator::YesNo`] |
/// | `Choice` | any | [`Validator::Choice`] over `choices` |
///
/// A `Choice` kind without choices is a configuration error.
pub fn resolve_validator(
    label: &str,
    kind: PromptKind,
    optional: bool,
    choices: Option<&ChoiceList>,
) -> Result<Validator, PromptError> {
    let validator = match kind {
        PromptKind::Text if optional => Validator::Optional,
        PromptKind::Text => Validator::NonEmpty,
        PromptKind::YesNo => Validator::YesNo,
        PromptKind::Choice => match choices {
            Some(list) if !list.is_empty() => Validator::choice(list.clone()),
            _ => {
                return Err(PromptError::EmptyChoiceList {
                    label: label.to_string(),
                });
            }
        },
    };
    tracing::debug!(label, ?kind, optional, validator = validator.name(), "resolved validator");
    Ok(validator)
}

impl Validator {
    fn name(&self) -> &'static str {
        match self {
            Validator::NonEmpty => "nonempty",
            Validator::Optional => "optional",
            Validator::YesNo => "yes_no",
            Validator::Regex(_) => "regex",
            Validator::Choice(_) => "choice",
        }
    }
}
