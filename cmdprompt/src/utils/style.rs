//! # Text Decoration
//!
//! Every line the prompt engine writes can be tagged with a [`Category`].
//! A [`Styles`] table maps each category to a [`Style`] and applies it.
//!
//! The table is built once and never mutated afterwards. Use
//! [`Styles::global`] for the process-wide palette, or [`Styles::plain`] to
//! write undecorated text (tests, `--no-color`, non-terminal output).
//!
//! Colors come from the `colored` crate when the `color` feature is enabled
//! (the default). Without it every style is a no-op.
use once_cell::sync::OnceCell;

/// String used for one level of indentation.
pub const INDENT: &str = "    ";

/// Prefixes `text` with `level` units of [`INDENT`].
pub fn indent(text: &str, level: usize) -> String {
    format!("{}{}", INDENT.repeat(level), text)
}

/// Formatting categories understood by [`Styles`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Error,
    ErrorTitle,
    Warning,
    Success,
    Info,
    Prompt,
}

/// Terminal colors available to a [`Style`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Yellow,
    Green,
    Cyan,
    Magenta,
    Blue,
    White,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: Color,
    pub bold: bool,
}

impl Style {
    pub const fn new(color: Color) -> Self {
        Style { color, bold: false }
    }

    pub const fn bold(self) -> Self {
        Style {
            color: self.color,
            bold: true,
        }
    }

    fn paint(&self, text: &str) -> String {
        cfg_if::cfg_if! {
            if #[cfg(feature = "color")] {
                use colored::Colorize;

                let colored = match self.color {
                    Color::Red => text.red(),
                    Color::Yellow => text.yellow(),
                    Color::Green => text.green(),
                    Color::Cyan => text.cyan(),
                    Color::Magenta => text.magenta(),
                    Color::Blue => text.blue(),
                    Color::White => text.white(),
                };
                if self.bold {
                    colored.bold().to_string()
                } else {
                    colored.to_string()
                }
            } else {
                text.to_string()
            }
        }
    }
}

/// Immutable category → style table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Styles {
    enabled: bool,
    error: Style,
    error_title: Style,
    warning: Style,
    success: Style,
    info: Style,
    prompt: Style,
}

static GLOBAL: OnceCell<Styles> = OnceCell::new();

impl Default for Styles {
    fn default() -> Self {
        Styles {
            enabled: true,
            error: Style::new(Color::Red),
            error_title: Style::new(Color::Red).bold(),
            warning: Style::new(Color::Yellow),
            success: Style::new(Color::Green),
            info: Style::new(Color::Cyan),
            prompt: Style::new(Color::Magenta),
        }
    }
}

impl Styles {
    /// The default palette with decoration disabled.
    pub fn plain() -> Self {
        Styles {
            enabled: false,
            ..Styles::default()
        }
    }

    /// Process-wide table. Initialized with the default palette on first use
    /// unless [`Styles::install`] ran earlier.
    pub fn global() -> &'static Styles {
        GLOBAL.get_or_init(Styles::default)
    }

    /// Sets the process-wide table. Only the first call (or first
    /// [`Styles::global`] access) wins; later calls hand the rejected table back.
    pub fn install(styles: Styles) -> Result<&'static Styles, Styles> {
        GLOBAL.set(styles)?;
        Ok(Styles::global())
    }

    pub fn with_style(mut self, category: Category, style: Style) -> Self {
        *self.slot(category) = style;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn style(&self, category: Category) -> Style {
        match category {
            Category::Error => self.error,
            Category::ErrorTitle => self.error_title,
            Category::Warning => self.warning,
            Category::Success => self.success,
            Category::Info => self.info,
            Category::Prompt => self.prompt,
        }
    }

    /// Applies `category` to `text`. `None` leaves the text untouched.
    pub fn apply(&self, category: Option<Category>, text: &str) -> String {
        match category {
            Some(c) if self.enabled => self.style(c).paint(text),
            _ => text.to_string(),
        }
    }

    fn slot(&mut self, category: Category) -> &mut Style {
        match category {
            Category::Error => &mut self.error,
            Category::ErrorTitle => &mut self.error_title,
            Category::Warning => &mut self.warning,
            Category::Success => &mut self.success,
            Category::Info => &mut self.info,
            Category::Prompt => &mut self.prompt,
        }
    }
}

/// Forces `colored` to emit escapes under the test harness, where stdout is
/// not a terminal. Only ever turns colors on, so parallel tests agree.
#[cfg(all(test, feature = "color"))]
pub(crate) fn force_colors() {
    static FORCE: std::sync::Once = std::sync::Once::new();
    FORCE.call_once(|| colored::control::set_override(true));
}
