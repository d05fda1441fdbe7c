//! # cmdprompt
//!
//! Interactive command-line prompts for Rust CLI applications: ask the
//! operator a question, sanitize and validate the answer, and keep asking
//! until it is acceptable.
//!
//! ## Features
//!
//! - **Prompt engine** - [`utils::Terminal`] runs the ask / validate / retry
//!   loop over any `BufRead` + `Write` pair (stdin/stdout by default)
//! - **Prompt kinds** - free text, yes/no and pick-from-a-list prompts
//! - **Validators** - non-empty, optional, yes/no, regex and choice
//!   validators, or any closure with the same signature
//! - **Non-interactive bypass** - pass an initial input (e.g. a command-line
//!   argument) and the operator is only asked when it is invalid
//! - **Defaults and optional prompts** - empty answers can fall back to a
//!   default or end the prompt with no value
//! - **Decorated output** - errors, warnings, prompts and info lines styled
//!   through an immutable [`utils::Styles`] table (`color` feature)
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! cmdprompt = "0.1"
//! # or, without terminal colors
//! cmdprompt = { version = "0.1", default-features = false }
//! ```
//!
//! ## Usage Examples
//!
//! ### Text with a default
//!
//! ```rust,no_run
//! use cmdprompt::utils::{PromptRequest, Terminal};
//!
//! let mut terminal = Terminal::stdio();
//! let host = terminal
//!     .ask(PromptRequest::new("Target host").default_value("localhost"))
//!     .unwrap();
//! println!("Host: {}", host);
//! ```
//!
//! ### Yes/no with initial input
//!
//! ```rust,no_run
//! use cmdprompt::utils::{PromptRequest, PromptValue, Terminal};
//!
//! // `--yes` on the command line answers the question up front
//! let from_args: Option<bool> = std::env::args().any(|a| a == "--yes").then_some(true);
//!
//! let mut terminal = Terminal::stdio();
//! let answer = terminal
//!     .ask(PromptRequest::yes_no("Overwrite existing report?").maybe_initial_input(from_args))
//!     .unwrap();
//! assert!(matches!(answer, PromptValue::Bool(_)));
//! ```
//!
//! ### Choices with payloads
//!
//! ```rust,no_run
//! use cmdprompt::utils::{ChoiceList, PromptRequest, Terminal};
//! use serde_json::json;
//!
//! let choices: ChoiceList = [("Quick", json!(100)), ("Full", json!(65535))]
//!     .into_iter()
//!     .collect();
//! let mut terminal = Terminal::stdio();
//! let ports = terminal
//!     .ask(PromptRequest::choice("Scan type", choices).describe("How many ports to scan."))
//!     .unwrap();
//! println!("Scanning {} ports", ports);
//! ```
//!
//! ### Regex validation
//!
//! ```rust,no_run
//! use cmdprompt::utils::{PromptRequest, Terminal, Validator};
//!
//! let mut terminal = Terminal::stdio();
//! let port = terminal
//!     .ask(PromptRequest::new("Port").validator(Validator::regex(r"^\d{1,5}$").unwrap()))
//!     .unwrap();
//! println!("Port: {}", port);
//! ```
//!
//! ## Architecture
//!
//! - **`utils::validate`** - validator contract and built-in validators
//! - **`utils::format`** - prompt text rendering
//! - **`utils::style`** / **`utils::printer`** - decorated line output
//! - **`utils::request`** - per-call prompt description
//! - **`utils::terminal`** - the prompt engine
//!
//! ## Error Handling
//!
//! Rejected answers never reach the caller; they are printed and the
//! question is asked again. [`utils::PromptError`] is returned for
//! misconfigured prompts and for a closed or failing input stream:
//!
//! ```rust,no_run
//! use cmdprompt::utils::{PromptError, PromptKind, PromptRequest, Terminal};
//!
//! match Terminal::stdio().ask(PromptRequest::new("Pick").kind(PromptKind::Choice)) {
//!     Ok(v) => println!("{}", v),
//!     Err(PromptError::EmptyChoiceList { label }) => eprintln!("no choices for {}", label),
//!     Err(PromptError::InputClosed) => eprintln!("stdin closed"),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```
//!
//! ## License
//!
//! This project is licensed under the MIT License.

pub mod utils;
