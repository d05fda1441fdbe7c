//! # Terminal Prompt Engine
//!
//! [`Terminal`] asks the operator one question at a time and keeps asking
//! until the answer passes validation.
//!
//! For each [`PromptRequest`] it:
//! 1. Resolves the validator for the prompt kind. Misconfiguration (a choice
//!    prompt without choices) is reported before anything is read.
//! 2. Tries the initial input, if one was supplied. A valid initial input
//!    skips the interactive part entirely.
//! 3. Prints the description and, for choice prompts, the numbered choices.
//! 4. Loops: show the prompt, read a line, sanitize, substitute the default
//!    for an empty answer, format, validate. Rejected answers print the
//!    validator's message and ask again.
//! 5. Prints a blank line once an answer is accepted (unless disabled).
//!
//! An optional prompt accepts an empty answer as "no value" and returns the
//! default, if any.
//!
//! ## Example
//! ```rust,no_run
//! use cmdprompt::utils::{PromptKind, PromptRequest, PromptValue, Terminal};
//!
//! let mut terminal = Terminal::stdio();
//! let proceed = terminal
//!     .ask(PromptRequest::yes_no("Continue?").default_value("y"))
//!     .unwrap();
//! if proceed == PromptValue::Bool(true) {
//!     let name = terminal.ask(PromptRequest::new("Name")).unwrap();
//!     println!("Hello {}", name);
//! }
//! ```
use crate::utils::error::PromptError;
use crate::utils::format::format_prompt_text;
use crate::utils::printer::Printer;
use crate::utils::request::{PromptKind, PromptRequest};
use crate::utils::style::Styles;
use crate::utils::validate::{Validate, resolve_validator};
use crate::utils::value::PromptValue;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use tracing::{debug, trace};

/// Shown when an answer cannot be decoded as text.
pub const UNREADABLE_MESSAGE: &str = "Input is not valid text. Please try again.";

/// Interactive prompt engine over a line reader and an output writer.
pub struct Terminal<'s, R, W: Write> {
    input: R,
    printer: Printer<'s, W>,
}

impl Terminal<'static, StdinLock<'static>, Stdout> {
    /// Terminal bound to stdin/stdout with the process-wide [`Styles`].
    pub fn stdio() -> Self {
        Terminal::new(io::stdin().lock(), io::stdout(), Styles::global())
    }
}

impl<'s, R: BufRead, W: Write> Terminal<'s, R, W> {
    pub fn new(input: R, output: W, styles: &'s Styles) -> Self {
        Terminal {
            input,
            printer: Printer::new(output, styles),
        }
    }

    /// Printer writing to the same output as the prompts.
    pub fn printer(&mut self) -> &mut Printer<'s, W> {
        &mut self.printer
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.printer.into_inner())
    }

    /// Asks `request` until an answer is accepted.
    ///
    /// The accepted value's variant depends on the validator that ran:
    /// text for text and regex prompts, a boolean for yes/no prompts, and an
    /// index or payload for choice prompts.
    pub fn ask(&mut self, mut request: PromptRequest) -> Result<PromptValue, PromptError> {
        let resolved = resolve_validator(
            &request.label,
            request.kind,
            request.optional,
            request.choices.as_ref(),
        )?;
        let initial_input = request.initial_input.take();
        let validator: &dyn Validate = request.validator.as_deref().unwrap_or(&resolved);
        let message = request.invalid_message.as_deref();

        if let Some(initial) = initial_input {
            let value = request.apply_format(request.apply_sanitize(initial));
            match validator.validate(value, message) {
                Ok(value) => {
                    debug!(label = %request.label, "initial input accepted");
                    return self.accept(&request, optional_fallback(&request, value));
                }
                Err(e) if request.optional && e.value.is_empty() => {
                    debug!(label = %request.label, "optional prompt left empty by initial input");
                    return self.accept(&request, optional_fallback(&request, e.value));
                }
                Err(e) => {
                    debug!(label = %request.label, "initial input rejected");
                    self.printer.error_message(&e.message)?;
                }
            }
        }

        if !request.description.is_empty() {
            self.printer.lines(&request.description)?;
        }
        if request.kind == PromptKind::Choice {
            if let Some(choices) = &request.choices {
                self.printer.blank()?;
                self.printer.lines(&[choices.render()])?;
                self.printer.blank()?;
            }
        }

        let text = format_prompt_text(
            &request.label,
            request.kind,
            request.default_value.as_ref(),
            self.printer.styles(),
        );
        let mut attempt: u64 = 0;
        let value = loop {
            attempt = attempt.saturating_add(1);
            trace!(label = %request.label, attempt, "waiting for answer");
            self.printer.inline(&text)?;
            let Some(raw) = self.read_line()? else {
                debug!(label = %request.label, attempt, "answer is not valid UTF-8");
                self.printer.error_message(UNREADABLE_MESSAGE)?;
                continue;
            };

            let mut value = request.apply_sanitize(PromptValue::Text(raw));
            if value.is_empty() {
                if let Some(default) = &request.default_value {
                    value = default.clone();
                }
            }
            let value = request.apply_format(value);

            match validator.validate(value, message) {
                Ok(value) => break optional_fallback(&request, value),
                Err(e) if request.optional && e.value.is_empty() => {
                    debug!(label = %request.label, attempt, "optional prompt left empty");
                    break optional_fallback(&request, e.value);
                }
                Err(e) => {
                    debug!(label = %request.label, attempt, "answer rejected");
                    self.printer.error_message(&e.message)?;
                }
            }
        };
        self.accept(&request, value)
    }

    fn accept(
        &mut self,
        request: &PromptRequest,
        value: PromptValue,
    ) -> Result<PromptValue, PromptError> {
        if request.newline_on_success {
            self.printer.blank()?;
        }
        Ok(value)
    }

    /// One line without its line terminator, or `None` when the line is not
    /// valid UTF-8.
    fn read_line(&mut self) -> Result<Option<String>, PromptError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(PromptError::InputClosed);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(String::from_utf8(buf).ok())
    }
}

/// An empty answer to an optional prompt becomes the default, if one is set.
fn optional_fallback(request: &PromptRequest, value: PromptValue) -> PromptValue {
    if request.optional && value.is_empty() {
        if let Some(default) = &request.default_value {
            return default.clone();
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::choice::ChoiceList;
    use crate::utils::validate::{ValidationError, Validator};
    use serde_json::json;
    use std::io::Cursor;

    fn run(input: &str, request: PromptRequest) -> (Result<PromptValue, PromptError>, String) {
        let styles = Styles::plain();
        let mut terminal = Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), &styles);
        let result = terminal.ask(request);
        let (_, out) = terminal.into_parts();
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_text_retries_until_nonempty() {
        let (result, out) = run("\n   \nhello\n", PromptRequest::new("Name"));
        assert_eq!(result.unwrap(), PromptValue::from("hello"));
        assert_eq!(out.matches("Please enter some text.").count(), 2);
        assert_eq!(
            out,
            "> Name: Please enter some text.\n> Name: Please enter some text.\n> Name: \n"
        );
    }

    #[test]
    fn test_optional_empty_initial_input_skips_loop() {
        let (result, out) = run("", PromptRequest::new("Nick").optional(true).initial_input(""));
        assert_eq!(result.unwrap(), PromptValue::from(""));
        assert_eq!(out, "\n");

        let request = PromptRequest::new("Nick")
            .optional(true)
            .initial_input("   ")
            .default_value("anon");
        let (result, out) = run("", request);
        assert_eq!(result.unwrap(), PromptValue::from("anon"));
        assert!(!out.contains("> Nick"));
    }

    #[test]
    fn test_optional_empty_initial_input_with_strict_validator() {
        let request = PromptRequest::new("Tag")
            .optional(true)
            .validator(Validator::NonEmpty)
            .initial_input("")
            .default_value("none");
        let (result, out) = run("", request);
        assert_eq!(result.unwrap(), PromptValue::from("none"));
        assert!(!out.contains("Please enter some text."));
    }

    #[test]
    fn test_optional_empty_answer_ends_loop() {
        let request = PromptRequest::new("Tag").optional(true).validator(Validator::NonEmpty);
        let (result, out) = run("\n", request);
        assert_eq!(result.unwrap(), PromptValue::from(""));
        assert_eq!(out, "> Tag: \n");
    }

    #[test]
    fn test_yes_no_default_used_for_blank_answer() {
        let request = PromptRequest::yes_no("Overwrite?").default_value("n");
        let (result, out) = run("\n", request);
        assert_eq!(result.unwrap(), PromptValue::Bool(false));
        assert_eq!(out, "> Overwrite? (y/[n]): \n");
    }

    #[test]
    fn test_yes_no_rejects_then_accepts() {
        let (result, out) = run("maybe\nYES\n", PromptRequest::yes_no("Sure?"));
        assert_eq!(result.unwrap(), PromptValue::Bool(true));
        assert_eq!(out.matches("Please enter \"y\" or \"n\".").count(), 1);
    }

    #[test]
    fn test_choice_returns_index() {
        let choices: ChoiceList = ["X", "Y"].into_iter().collect();
        let (result, out) = run("1\n", PromptRequest::choice("Pick", choices));
        assert_eq!(result.unwrap(), PromptValue::Index(1));
        assert_eq!(out, "\n[0]: X\n[1]: Y\n\n> Pick: \n");
    }

    #[test]
    fn test_choice_out_of_range_then_valid() {
        let choices: ChoiceList = ["X", "Y"].into_iter().collect();
        let (result, out) = run("9\n0\n", PromptRequest::choice("Pick", choices));
        assert_eq!(result.unwrap(), PromptValue::Index(0));
        assert_eq!(out.matches("Invalid choice.").count(), 1);
        // listing printed once up front and once inside the error
        assert_eq!(out.matches("[1]: Y").count(), 2);
    }

    #[test]
    fn test_choice_payload() {
        let choices: ChoiceList = [("Quick", json!("q")), ("Deep", json!({"depth": 3}))]
            .into_iter()
            .collect();
        let (result, _) = run("1\n", PromptRequest::choice("Scan", choices));
        assert_eq!(result.unwrap(), PromptValue::Payload(json!({"depth": 3})));
    }

    #[test]
    fn test_choice_without_choices_fails_before_reading() {
        let request = PromptRequest::new("Pick").kind(PromptKind::Choice);
        let (result, out) = run("0\n", request);
        assert!(matches!(result, Err(PromptError::EmptyChoiceList { .. })));
        assert_eq!(out, "");

        let (result, _) = run("0\n", PromptRequest::choice("Pick", ChoiceList::default()));
        assert!(result.unwrap_err().is_configuration());
    }

    #[test]
    fn test_regex_validator_retries() {
        let request = PromptRequest::new("Port").validator(Validator::regex(r"\d+").unwrap());
        let (result, out) = run("abc\nabc123\n", request);
        assert_eq!(result.unwrap(), PromptValue::from("123"));
        assert_eq!(out.matches("No matches found.").count(), 1);
        assert!(out.contains("    Must match regex: \\d+\n"));
    }

    #[test]
    fn test_valid_initial_input_never_prompts() {
        let request = PromptRequest::yes_no("Proceed?").initial_input("y");
        let (result, out) = run("", request);
        assert_eq!(result.unwrap(), PromptValue::Bool(true));
        assert!(!out.contains('>'));
        assert_eq!(out, "\n");
    }

    #[test]
    fn test_boolean_initial_input() {
        let request = PromptRequest::yes_no("Proceed?").initial_input(false);
        let (result, _) = run("", request);
        assert_eq!(result.unwrap(), PromptValue::Bool(false));
    }

    #[test]
    fn test_invalid_initial_input_falls_back_to_loop() {
        let request = PromptRequest::yes_no("Proceed?")
            .describe("Line one.")
            .describe("Line two.")
            .initial_input("perhaps");
        let (result, out) = run("x\nn\n", request);
        assert_eq!(result.unwrap(), PromptValue::Bool(false));
        assert!(!out.contains("perhaps"));
        assert_eq!(out.matches("Please enter").count(), 2);
        assert_eq!(out.matches("Line one.").count(), 1);
        assert!(out.starts_with("Please enter \"y\" or \"n\".\nLine one.\nLine two.\n> Proceed? (y/n): "));
    }

    #[test]
    fn test_invalid_message_override() {
        let request = PromptRequest::new("Name").invalid_message("A name is required.");
        let (result, out) = run("\nAda\n", request);
        assert_eq!(result.unwrap(), PromptValue::from("Ada"));
        assert!(out.contains("A name is required.\n"));
        assert!(!out.contains("Please enter some text."));
    }

    #[test]
    fn test_default_for_text_prompt() {
        let request = PromptRequest::new("Host").default_value("localhost");
        let (result, out) = run("\n", request);
        assert_eq!(result.unwrap(), PromptValue::from("localhost"));
        assert_eq!(out, "> Host [localhost]: \n");
    }

    #[test]
    fn test_no_newline_on_success() {
        let request = PromptRequest::new("Name").newline_on_success(false);
        let (_, out) = run("bob\n", request);
        assert_eq!(out, "> Name: ");
    }

    #[test]
    fn test_format_runs_before_validation() {
        let request = PromptRequest::yes_no("Go?").format(|v| match v {
            PromptValue::Text(t) if t == "ok" => PromptValue::from("yes"),
            other => other,
        });
        let (result, _) = run("ok\n", request);
        assert_eq!(result.unwrap(), PromptValue::Bool(true));
    }

    #[test]
    fn test_custom_closure_validator() {
        let request = PromptRequest::new("Even").validator(
            |value: PromptValue, message: Option<&str>| match value
                .as_text()
                .and_then(|t| t.parse::<u32>().ok())
            {
                Some(n) if n % 2 == 0 => Ok(PromptValue::Index(n as usize)),
                _ => Err(ValidationError::new(message.unwrap_or("Even numbers only."), value)),
            },
        );
        let (result, out) = run("3\n4\n", request);
        assert_eq!(result.unwrap(), PromptValue::Index(4));
        assert_eq!(out.matches("Even numbers only.").count(), 1);
    }

    #[test]
    fn test_crlf_line_endings() {
        let (result, _) = run("hello\r\n", PromptRequest::new("Name").sanitize(|s| s.to_string()));
        assert_eq!(result.unwrap(), PromptValue::from("hello"));
    }

    #[test]
    fn test_undecodable_line_is_asked_again() {
        let styles = Styles::plain();
        let input = Cursor::new(b"\xff\xfe\nok\n".to_vec());
        let mut terminal = Terminal::new(input, Vec::new(), &styles);
        let result = terminal.ask(PromptRequest::new("Name"));
        let (_, out) = terminal.into_parts();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(result.unwrap(), PromptValue::from("ok"));
        assert_eq!(out, format!("> Name: {}\n> Name: \n", UNREADABLE_MESSAGE));
    }

    #[test]
    fn test_format_applies_to_initial_input() {
        let request = PromptRequest::yes_no("Deploy?")
            .initial_input("  Sure ")
            .format(|v| match v {
                PromptValue::Text(t) if t == "Sure" => PromptValue::from("yes"),
                other => other,
            });
        let (result, out) = run("", request);
        assert_eq!(result.unwrap(), PromptValue::Bool(true));
        assert_eq!(out, "\n");
    }

    #[test]
    fn test_input_closed() {
        let (result, out) = run("\n", PromptRequest::new("Name"));
        assert!(matches!(result, Err(PromptError::InputClosed)));
        assert_eq!(out.matches("> Name: ").count(), 2);
    }

    #[test]
    fn test_printer_shares_output() {
        let styles = Styles::plain();
        let mut terminal = Terminal::new(Cursor::new(b"a\n".to_vec()), Vec::new(), &styles);
        terminal.printer().success(&["Ready"]).unwrap();
        terminal.ask(PromptRequest::new("Name")).unwrap();
        let (_, out) = terminal.into_parts();
        assert_eq!(String::from_utf8(out).unwrap(), "Ready\n> Name: \n");
    }
}
