//! # Printer
//!
//! Line-oriented output helpers. Each line is decorated through a [`Styles`]
//! table before it is written, and lines after the first can be indented.
use crate::utils::style::{Category, INDENT, Styles};
use std::io::{self, Write};

/// Writes decorated lines to `W`.
pub struct Printer<'s, W: Write> {
    out: W,
    styles: &'s Styles,
}

impl<'s, W: Write> Printer<'s, W> {
    pub fn new(out: W, styles: &'s Styles) -> Self {
        Printer { out, styles }
    }

    pub fn styles(&self) -> &'s Styles {
        self.styles
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Writes `lines`, one per line.
    ///
    /// `first_line_formatting` falls back to `formatting` when unset.
    /// `indent_rest` indents every line after the first by one unit,
    /// `indent_first` does the same for the first line. Nothing is written
    /// for an empty slice.
    pub fn multiline<S: AsRef<str>>(
        &mut self,
        lines: &[S],
        formatting: Option<Category>,
        first_line_formatting: Option<Category>,
        indent_rest: bool,
        indent_first: bool,
    ) -> io::Result<()> {
        let Some((first, rest)) = lines.split_first() else {
            return Ok(());
        };
        let first_fmt = first_line_formatting.or(formatting);
        let prefix = if indent_first { INDENT } else { "" };
        writeln!(
            self.out,
            "{}",
            self.styles
                .apply(first_fmt, &format!("{}{}", prefix, first.as_ref()))
        )?;

        let prefix = if indent_rest { INDENT } else { "" };
        for line in rest {
            writeln!(
                self.out,
                "{}",
                self.styles
                    .apply(formatting, &format!("{}{}", prefix, line.as_ref()))
            )?;
        }
        Ok(())
    }

    /// Error block: the first line is an error title, the rest plain errors.
    pub fn error<S: AsRef<str>>(&mut self, lines: &[S]) -> io::Result<()> {
        self.multiline(
            lines,
            Some(Category::Error),
            Some(Category::ErrorTitle),
            true,
            false,
        )
    }

    pub fn warning<S: AsRef<str>>(&mut self, lines: &[S]) -> io::Result<()> {
        self.multiline(lines, Some(Category::Warning), None, true, false)
    }

    pub fn success<S: AsRef<str>>(&mut self, lines: &[S]) -> io::Result<()> {
        self.multiline(lines, Some(Category::Success), None, true, false)
    }

    pub fn info<S: AsRef<str>>(&mut self, lines: &[S]) -> io::Result<()> {
        self.multiline(lines, Some(Category::Info), None, true, false)
    }

    /// Prints a multi-line message (such as a validation failure) as an error
    /// block, keeping whatever indentation the message already carries.
    pub fn error_message(&mut self, message: &str) -> io::Result<()> {
        let lines: Vec<&str> = message.split('\n').collect();
        self.multiline(
            &lines,
            Some(Category::Error),
            Some(Category::ErrorTitle),
            false,
            false,
        )
    }

    /// Writes undecorated lines.
    pub fn lines<S: AsRef<str>>(&mut self, lines: &[S]) -> io::Result<()> {
        for line in lines {
            writeln!(self.out, "{}", line.as_ref())?;
        }
        Ok(())
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// Writes `text` without a newline and flushes, for inline prompts.
    pub fn inline(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{}", text)?;
        self.out.flush()
    }
}
