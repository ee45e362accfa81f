//! Line builder for generating properly indented code.

use crate::{Indent, LINE_SEPARATOR};

/// Fluent API for building code as an ordered sequence of lines.
///
/// Renderers accumulate lines here and either join them into a file with
/// [`CodeBuilder::build`] or hand the raw lines to an enclosing builder
/// with [`CodeBuilder::into_lines`] (nested declarations are rendered
/// without their outer indentation and re-indented by the parent).
///
/// # Example
///
/// ```
/// use batis_codegen::CodeBuilder;
///
/// let code = CodeBuilder::java()
///     .line("public final class Customer {")
///     .indent()
///     .line("private Long custId;")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "public final class Customer {\n    private Long custId;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    lines: Vec<String>,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            lines: Vec::new(),
        }
    }

    /// Create a new CodeBuilder with Java indentation (4 spaces).
    pub fn java() -> Self {
        Self::new(Indent::JAVA)
    }

    /// Create a new CodeBuilder with Kotlin indentation (4 spaces).
    pub fn kotlin() -> Self {
        Self::new(Indent::KOTLIN)
    }

    /// Add a line of code with current indentation.
    ///
    /// Empty lines are recorded as blank lines, never as trailing
    /// whitespace.
    pub fn line(mut self, s: &str) -> Self {
        if s.is_empty() {
            self.lines.push(String::new());
        } else {
            self.lines.push(format!("{}{}", self.prefix(), s));
        }
        self
    }

    /// Add a blank line.
    pub fn blank(mut self) -> Self {
        self.lines.push(String::new());
        self
    }

    /// Add pre-rendered lines, re-indenting each at the current level.
    ///
    /// Lines may already carry indentation relative to their own root (a
    /// method body inside a class body); the current level is prefixed to
    /// every non-blank line.
    pub fn lines(mut self, lines: impl IntoIterator<Item = String>) -> Self {
        let prefix = self.prefix();
        for line in lines {
            if line.is_empty() {
                self.lines.push(line);
            } else {
                self.lines.push(format!("{prefix}{line}"));
            }
        }
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Whether no lines have been added.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Consume the builder and return the ordered lines.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Consume the builder and join the lines with the platform line
    /// separator, with a trailing separator.
    pub fn build(self) -> String {
        if self.lines.is_empty() {
            return String::new();
        }
        let mut out = self.lines.join(LINE_SEPARATOR);
        out.push_str(LINE_SEPARATOR);
        out
    }

    fn prefix(&self) -> String {
        self.indent.as_str().repeat(self.indent_level)
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::java()
    }
}
