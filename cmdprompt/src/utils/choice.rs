//! # Choice Lists
//!
//! Ordered options for [`PromptKind::Choice`](crate::utils::PromptKind::Choice)
//! prompts. The operator answers with the zero-based position of an entry;
//! an entry may carry a payload that is returned instead of the position.
//!
//! Choice lists deserialize from JSON, where a bare string is a label and a
//! two-element array is a `(label, payload)` pair:
//!
//! ```rust
//! use cmdprompt::utils::{Choice, ChoiceList};
//!
//! let list: ChoiceList = serde_json::from_str(r#"["Quick", ["Deep", {"depth": 3}]]"#).unwrap();
//! assert_eq!(list.labels(), vec!["Quick", "Deep"]);
//! assert!(matches!(list.get(1), Some(Choice::Pair(_, _))));
//! ```
use serde::{Deserialize, Serialize};

/// One entry of a [`ChoiceList`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Choice {
    Label(String),
    Pair(String, serde_json::Value),
}

impl Choice {
    pub fn label(&self) -> &str {
        match self {
            Choice::Label(l) | Choice::Pair(l, _) => l,
        }
    }

    pub fn payload(&self) -> Option<&serde_json::Value> {
        match self {
            Choice::Label(_) => None,
            Choice::Pair(_, p) => Some(p),
        }
    }
}

impl From<&str> for Choice {
    fn from(label: &str) -> Self {
        Choice::Label(label.to_string())
    }
}

impl From<String> for Choice {
    fn from(label: String) -> Self {
        Choice::Label(label)
    }
}

impl<L: Into<String>, P: Into<serde_json::Value>> From<(L, P)> for Choice {
    fn from((label, payload): (L, P)) -> Self {
        Choice::Pair(label.into(), payload.into())
    }
}

/// Ordered sequence of [`Choice`]s addressed by zero-based position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChoiceList(Vec<Choice>);

impl ChoiceList {
    pub fn new(choices: Vec<Choice>) -> Self {
        ChoiceList(choices)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Choice> {
        self.0.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Choice> {
        self.0.iter()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.0.iter().map(Choice::label).collect()
    }

    /// Numbered listing shown to the operator, one `[i]: label` line per entry.
    pub fn render(&self) -> String {
        self.0
            .iter()
            .enumerate()
            .map(|(i, c)| format!("[{}]: {}", i, c.label()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<C: Into<Choice>> FromIterator<C> for ChoiceList {
    fn from_iter<T: IntoIterator<Item = C>>(iter: T) -> Self {
        ChoiceList(iter.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<Choice>> for ChoiceList {
    fn from(choices: Vec<Choice>) -> Self {
        ChoiceList(choices)
    }
}
