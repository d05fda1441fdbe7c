//! # Prompt Requests
//!
//! A [`PromptRequest`] describes one question: what to show, which kind of
//! answer is expected, and how raw input is sanitized, formatted and
//! validated. It is built per call and consumed by
//! [`Terminal::ask`](crate::utils::Terminal::ask).
//!
//! ```rust
//! use cmdprompt::utils::{PromptKind, PromptRequest};
//!
//! let request = PromptRequest::new("Continue?")
//!     .describe("The scan will take a few minutes.")
//!     .kind(PromptKind::YesNo)
//!     .default_value("n");
//! assert_eq!(request.label(), "Continue?");
//! ```
use crate::utils::choice::ChoiceList;
use crate::utils::validate::Validate;
use crate::utils::value::PromptValue;
use std::fmt;

/// Normalizes raw text before it is formatted and validated.
pub type SanitizeFn = Box<dyn Fn(&str) -> String>;

/// Reshapes a sanitized value before validation.
pub type FormatFn = Box<dyn Fn(PromptValue) -> PromptValue>;

/// Default sanitizer: trims surrounding whitespace.
pub fn sanitize_input(raw: &str) -> String {
    raw.trim().to_string()
}

/// Kind of answer a prompt expects. Drives the default validator and the
/// hint shown next to the label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PromptKind {
    #[default]
    Text,
    YesNo,
    Choice,
}

/// One question to ask the operator.
pub struct PromptRequest {
    pub(crate) label: String,
    pub(crate) description: Vec<String>,
    pub(crate) kind: PromptKind,
    pub(crate) choices: Option<ChoiceList>,
    pub(crate) optional: bool,
    pub(crate) initial_input: Option<PromptValue>,
    pub(crate) default_value: Option<PromptValue>,
    pub(crate) sanitize: SanitizeFn,
    pub(crate) validator: Option<Box<dyn Validate>>,
    pub(crate) format: Option<FormatFn>,
    pub(crate) invalid_message: Option<String>,
    pub(crate) newline_on_success: bool,
}

impl PromptRequest {
    pub fn new(label: impl Into<String>) -> Self {
        PromptRequest {
            label: label.into(),
            description: Vec::new(),
            kind: PromptKind::Text,
            choices: None,
            optional: false,
            initial_input: None,
            default_value: None,
            sanitize: Box::new(sanitize_input),
            validator: None,
            format: None,
            invalid_message: None,
            newline_on_success: true,
        }
    }

    /// Yes/no question.
    pub fn yes_no(label: impl Into<String>) -> Self {
        Self::new(label).kind(PromptKind::YesNo)
    }

    /// Pick-one question over `choices`.
    pub fn choice(label: impl Into<String>, choices: impl Into<ChoiceList>) -> Self {
        Self::new(label).kind(PromptKind::Choice).choices(choices)
    }

    /// Adds a description line, printed above the prompt.
    pub fn describe(mut self, line: impl Into<String>) -> Self {
        self.description.push(line.into());
        self
    }

    pub fn description<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.description.extend(lines.into_iter().map(Into::into));
        self
    }

    pub fn kind(mut self, kind: PromptKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn choices(mut self, choices: impl Into<ChoiceList>) -> Self {
        self.choices = Some(choices.into());
        self
    }

    /// An empty answer ends an optional prompt instead of re-asking.
    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Value supplied ahead of time (e.g. from command-line arguments). When
    /// it validates, the operator is never asked.
    pub fn initial_input(mut self, value: impl Into<PromptValue>) -> Self {
        self.initial_input = Some(value.into());
        self
    }

    /// Sets or clears the initial input from an `Option`, as parsed from arguments.
    pub fn maybe_initial_input<V: Into<PromptValue>>(mut self, value: Option<V>) -> Self {
        self.initial_input = value.map(Into::into);
        self
    }

    /// Used in place of an empty answer.
    pub fn default_value(mut self, value: impl Into<PromptValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn sanitize(mut self, f: impl Fn(&str) -> String + 'static) -> Self {
        self.sanitize = Box::new(f);
        self
    }

    /// Overrides the validator resolved from the prompt kind.
    pub fn validator(mut self, validator: impl Validate + 'static) -> Self {
        self.validator = Some(Box::new(validator));
        self
    }

    pub fn format(mut self, f: impl Fn(PromptValue) -> PromptValue + 'static) -> Self {
        self.format = Some(Box::new(f));
        self
    }

    /// Replaces the validator's failure message.
    pub fn invalid_message(mut self, message: impl Into<String>) -> Self {
        self.invalid_message = Some(message.into());
        self
    }

    pub fn newline_on_success(mut self, enabled: bool) -> Self {
        self.newline_on_success = enabled;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn prompt_kind(&self) -> PromptKind {
        self.kind
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Sanitizes text values; other values pass through unchanged.
    pub(crate) fn apply_sanitize(&self, value: PromptValue) -> PromptValue {
        match value {
            PromptValue::Text(text) => PromptValue::Text((self.sanitize)(&text)),
            other => other,
        }
    }

    pub(crate) fn apply_format(&self, value: PromptValue) -> PromptValue {
        match &self.format {
            Some(f) => f(value),
            None => value,
        }
    }
}

impl fmt::Debug for PromptRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PromptRequest")
            .field("label", &self.label)
            .field("description", &self.description)
            .field("kind", &self.kind)
            .field("choices", &self.choices)
            .field("optional", &self.optional)
            .field("initial_input", &self.initial_input)
            .field("default_value", &self.default_value)
            .field("custom_validator", &self.validator.is_some())
            .field("format", &self.format.is_some())
            .field("invalid_message", &self.invalid_message)
            .field("newline_on_success", &self.newline_on_success)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let request = PromptRequest::new("Name");
        assert_eq!(request.prompt_kind(), PromptKind::Text);
        assert!(!request.is_optional());
        assert!(request.initial_input.is_none());
        assert!(request.newline_on_success);
    }

    #[test]
    fn test_sanitize_trims_text_only() {
        let request = PromptRequest::new("Name");
        assert_eq!(
            request.apply_sanitize(PromptValue::from("  bob \n")),
            PromptValue::from("bob")
        );
        assert_eq!(
            request.apply_sanitize(PromptValue::Bool(false)),
            PromptValue::Bool(false)
        );
    }

    #[test]
    fn test_custom_sanitize_and_format() {
        let request = PromptRequest::new("Code")
            .sanitize(|raw| raw.replace('-', ""))
            .format(|v| match v {
                PromptValue::Text(t) => PromptValue::Text(t.to_uppercase()),
                other => other,
            });
        let value = request.apply_sanitize(PromptValue::from("ab-cd"));
        assert_eq!(request.apply_format(value), PromptValue::from("ABCD"));
    }

    #[test]
    fn test_empty_string_initial_input_counts_as_supplied() {
        let request = PromptRequest::new("Name").initial_input("");
        assert_eq!(request.initial_input, Some(PromptValue::from("")));

        let request = PromptRequest::yes_no("Sure?").initial_input(false);
        assert_eq!(request.initial_input, Some(PromptValue::Bool(false)));
    }

    #[test]
    fn test_maybe_initial_input() {
        let request = PromptRequest::new("Name").maybe_initial_input(None::<String>);
        assert!(request.initial_input.is_none());
        let request = PromptRequest::new("Name").maybe_initial_input(Some("x"));
        assert_eq!(request.initial_input, Some(PromptValue::from("x")));
    }

    #[test]
    fn test_description_lines_accumulate() {
        let request = PromptRequest::new("Pick")
            .describe("one")
            .description(["two", "three"]);
        assert_eq!(request.description, vec!["one", "two", "three"]);
    }
}
