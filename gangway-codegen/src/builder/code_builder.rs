//! Code builder utility for generating properly indented code.

use super::Indent;
use crate::renderable::{CodeFragment, Renderable};

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use gangway_codegen::CodeBuilder;
///
/// let code = CodeBuilder::typescript()
///     .line("function foo() {")
///     .indent()
///     .line("return 1;")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "function foo() {\n  return 1;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation (Rust default).
    pub fn rust() -> Self {
        Self::new(Indent::RUST)
    }

    /// Create a new CodeBuilder with 2-space indentation (JS/TS default).
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline.
    pub fn raw(mut self, s: &str) -> Self {
        self.buffer.push_str(s);
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

    /// Add a block with a closing line.
    ///
    /// # Example
    ///
    /// ```
    /// use gangway_codegen::CodeBuilder;
    ///
    /// let code = CodeBuilder::typescript()
    ///     .block_with_close("if (ok) {", "}", |b| b.line("return;"))
    ///     .build();
    /// ```
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
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

    /// Emit a Renderable node.
    pub fn emit(mut self, node: &impl Renderable) -> Self {
        for fragment in node.to_fragments() {
            self = self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(mut self, fragment: CodeFragment) -> Self {
        match fragment {
            CodeFragment::Line(s) => self.line(&s),
            CodeFragment::Blank => self.blank(),
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self = self.line(&header).indent();
                for f in body {
                    self = self.apply_fragment(f);
                }
                self = self.dedent();
                match close {
                    Some(c) => self.line(&c),
                    None => self,
                }
            }
            CodeFragment::Indent(fragments) => {
                self = self.indent();
                for f in fragments {
                    self = self.apply_fragment(f);
                }
                self.dedent()
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self = self.apply_fragment(f);
                }
                self
            }
        }
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::rust()
    }
}
