pub mod choice;
pub use choice::{Choice, ChoiceList};

pub mod error;
pub use error::PromptError;

pub mod format;
pub use format::format_prompt_text;

pub mod printer;
pub use printer::Printer;

pub mod request;
pub use request::{FormatFn, PromptKind, PromptRequest, SanitizeFn, sanitize_input};

pub mod style;
pub use style::{Category, Color, INDENT, Style, Styles, indent};

pub mod terminal;
pub use terminal::Terminal;

pub mod validate;
pub use validate::{
    ChoiceValidator, RegexValidator, Validate, ValidationError, Validator, resolve_validator,
    validate_nonempty, validate_optional, validate_yes_no,
};

pub mod value;
pub use value::PromptValue;
