//! # Prompt Text
//!
//! Builds the line shown in front of the operator's cursor:
//!
//! | request | text |
//! |---|---|
//! | label only | `> Name: ` |
//! | with default | `> Name [bob]: ` |
//! | yes/no | `> Continue? (y/n): ` |
//! | yes/no, default yes | `> Continue? ([y]/n): ` |
//! | yes/no, default no | `> Continue? (y/[n]): ` |
//!
//! The result is decorated with [`Category::Prompt`]. No I/O happens here.
use crate::utils::request::PromptKind;
use crate::utils::style::{Category, Styles};
use crate::utils::validate::validate_yes_no;
use crate::utils::value::PromptValue;

pub fn format_prompt_text(
    label: &str,
    kind: PromptKind,
    default_value: Option<&PromptValue>,
    styles: &Styles,
) -> String {
    let text = match (kind, default_value) {
        (PromptKind::YesNo, default) => format!("> {} {}: ", label, yes_no_hint(default)),
        (_, Some(default)) => format!("> {} [{}]: ", label, default),
        (_, None) => format!("> {}: ", label),
    };
    styles.apply(Some(Category::Prompt), &text)
}

/// Hint for yes/no prompts. A default that is not a recognizable yes/no
/// answer gets the neutral hint.
fn yes_no_hint(default_value: Option<&PromptValue>) -> &'static str {
    match default_value.map(|d| validate_yes_no(d.clone(), None)) {
        Some(Ok(PromptValue::Bool(true))) => "([y]/n)",
        Some(Ok(PromptValue::Bool(false))) => "(y/[n])",
        _ => "(y/n)",
    }
}
