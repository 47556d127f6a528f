//! Code Writer
//!
//! Line-and-indent buffer the structure renderers and the code generator
//! write into. Text fragments that span several lines are re-indented to the
//! current level, except for lines that sit inside a template literal.

use crate::syntax;

#[derive(Debug, Clone)]
struct EmittedLine {
    parts: Vec<String>,
    indent: usize,
    /// Emitted without indentation (template literal content).
    raw: bool,
}

impl EmittedLine {
    fn new(indent: usize) -> Self {
        EmittedLine {
            parts: Vec::new(),
            indent,
            raw: false,
        }
    }

    fn is_empty(&self) -> bool {
        self.parts.iter().all(|p| p.is_empty())
    }
}

#[derive(Debug, Clone)]
pub struct CodeWriter {
    lines: Vec<EmittedLine>,
    indent: usize,
    indent_with: String,
}

impl Default for CodeWriter {
    fn default() -> Self {
        CodeWriter::new(4)
    }
}

impl CodeWriter {
    pub fn new(indent_width: usize) -> Self {
        CodeWriter {
            lines: vec![EmittedLine::new(0)],
            indent: 0,
            indent_with: " ".repeat(indent_width),
        }
    }

    fn current_line_mut(&mut self) -> &mut EmittedLine {
        if self.lines.is_empty() {
            self.lines.push(EmittedLine::new(self.indent));
        }
        let last = self.lines.len() - 1;
        &mut self.lines[last]
    }

    fn line_is_empty(&self) -> bool {
        self.lines.last().map_or(true, EmittedLine::is_empty)
    }

    /// Appends text to the current line. Embedded newlines start new lines at
    /// the current indentation.
    pub fn write(&mut self, text: &str) -> &mut Self {
        let in_template = syntax::template_lines(text);
        for (i, (part, raw)) in text.split('\n').zip(in_template).enumerate() {
            if i > 0 {
                self.lines.push(EmittedLine::new(self.indent));
                self.current_line_mut().raw = raw;
            }
            if !part.is_empty() {
                self.current_line_mut().parts.push(part.to_string());
            }
        }
        self
    }

    pub fn write_line(&mut self, text: &str) -> &mut Self {
        self.write(text).new_line()
    }

    pub fn new_line(&mut self) -> &mut Self {
        self.lines.push(EmittedLine::new(self.indent));
        self
    }

    /// Ensures exactly one blank line precedes whatever is written next.
    pub fn blank_line(&mut self) -> &mut Self {
        if !self.line_is_empty() {
            self.new_line();
        }
        let len = self.lines.len();
        let previous_blank = len < 2 || self.lines[len - 2].is_empty();
        if !previous_blank {
            self.new_line();
        }
        self
    }

    pub fn inc_indent(&mut self) {
        self.indent += 1;
        if self.line_is_empty() {
            let indent = self.indent;
            self.current_line_mut().indent = indent;
        }
    }

    pub fn dec_indent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        if self.line_is_empty() {
            let indent = self.indent;
            self.current_line_mut().indent = indent;
        }
    }

    /// Writes `{`, the indented block body, and a closing `}` left open for
    /// a trailing `,` or `)`.
    pub fn inline_block(&mut self, block: impl FnOnce(&mut CodeWriter)) -> &mut Self {
        self.write("{").new_line();
        self.inc_indent();
        block(self);
        if !self.line_is_empty() {
            self.new_line();
        }
        self.dec_indent();
        self.write("}")
    }

    pub fn to_source(&self) -> String {
        let mut lines = self.lines.as_slice();
        if lines.last().is_some_and(EmittedLine::is_empty) {
            lines = &lines[..lines.len() - 1];
        }
        let mut source = lines
            .iter()
            .map(|l| {
                if l.is_empty() {
                    String::new()
                } else if l.raw {
                    l.parts.join("")
                } else {
                    format!("{}{}", self.indent_with.repeat(l.indent), l.parts.join(""))
                }
            })
            .collect::<Vec<_>>()
            .join("\n");
        if !source.is_empty() {
            source.push('\n');
        }
        source
    }
}
