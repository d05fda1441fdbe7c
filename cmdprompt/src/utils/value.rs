//! # Prompt Values
//!
//! A prompt's answer can be text, a yes/no flag, a choice index or the payload
//! attached to a choice, depending on which validator accepted it.
//! [`PromptValue`] carries all of them so a single engine can serve every
//! prompt kind; callers match on the variant they asked for.
use serde::Serialize;
use std::fmt::Display;

/// A value flowing through a prompt: initial input, default value, raw
/// operator input and the accepted answer all share this type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PromptValue {
    Text(String),
    Bool(bool),
    Index(usize),
    Payload(serde_json::Value),
}

impl PromptValue {
    /// Empty text or a `null` payload.
    ///
    /// `Bool(false)` and `Index(0)` are real answers and never count as empty.
    pub fn is_empty(&self) -> bool {
        match self {
            PromptValue::Text(s) => s.is_empty(),
            PromptValue::Payload(v) => v.is_null(),
            PromptValue::Bool(_) | PromptValue::Index(_) => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PromptValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PromptValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_index(&self) -> Option<usize> {
        match self {
            PromptValue::Index(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_payload(&self) -> Option<&serde_json::Value> {
        match self {
            PromptValue::Payload(v) => Some(v),
            _ => None,
        }
    }
}

impl Display for PromptValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{}", s),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Index(i) => write!(f, "{}", i),
            Self::Payload(serde_json::Value::String(s)) => write!(f, "{}", s),
            Self::Payload(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for PromptValue {
    fn from(value: &str) -> Self {
        PromptValue::Text(value.to_string())
    }
}

impl From<String> for PromptValue {
    fn from(value: String) -> Self {
        PromptValue::Text(value)
    }
}

impl From<bool> for PromptValue {
    fn from(value: bool) -> Self {
        PromptValue::Bool(value)
    }
}

impl From<usize> for PromptValue {
    fn from(value: usize) -> Self {
        PromptValue::Index(value)
    }
}

impl From<serde_json::Value> for PromptValue {
    fn from(value: serde_json::Value) -> Self {
        PromptValue::Payload(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_emptiness() {
        assert!(PromptValue::from("").is_empty());
        assert!(PromptValue::Payload(serde_json::Value::Null).is_empty());
        assert!(!PromptValue::from(" ").is_empty());
        assert!(!PromptValue::from(false).is_empty());
        assert!(!PromptValue::from(0usize).is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(PromptValue::from("hello").to_string(), "hello");
        assert_eq!(PromptValue::from(true).to_string(), "true");
        assert_eq!(PromptValue::from(3usize).to_string(), "3");
        assert_eq!(PromptValue::from(json!("x")).to_string(), "x");
        assert_eq!(PromptValue::from(json!({"a": 1})).to_string(), r#"{"a":1}"#);
    }

    #[test]
    fn test_serializes_untagged() {
        let values = vec![
            PromptValue::from("a"),
            PromptValue::from(false),
            PromptValue::from(2usize),
            PromptValue::from(json!([1, 2])),
        ];
        let out = serde_json::to_string(&values).unwrap();
        assert_eq!(out, r#"["a",false,2,[1,2]]"#);
    }
}
