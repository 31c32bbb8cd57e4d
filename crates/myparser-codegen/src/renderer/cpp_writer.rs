// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Simple line-based writer for generating C++ declarations with proper indentation.

use crate::options::LayoutOptions;

/// Formatting context shared by every rendering function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// One indentation unit.
    pub indent: String,
}

impl Layout {
    pub fn with_width(width: usize) -> Self {
        Self {
            indent: " ".repeat(width),
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout::from(&LayoutOptions::default())
    }
}

impl From<&LayoutOptions> for Layout {
    fn from(options: &LayoutOptions) -> Self {
        Layout::with_width(options.indent_width)
    }
}

/// Writer context for generating C++ code.
/// Tracks indentation and handles line-based output.
///
/// Text written while indented gets one indentation unit per level at the
/// start of every non-empty line, including lines inside fragments that were
/// rendered on their own. Fragments are therefore rendered at depth zero and
/// land at the right depth once embedded.
pub struct CppWriter<'a> {
    out: String,
    layout: &'a Layout,
    indent: usize,
    at_line_start: bool,
}

impl<'a> CppWriter<'a> {
    pub fn new(layout: &'a Layout) -> Self {
        Self {
            out: String::new(),
            layout,
            indent: 0,
            at_line_start: true,
        }
    }

    /// Write a string, handling indentation at line starts.
    pub fn write(&mut self, s: &str) {
        for line in s.split_inclusive('\n') {
            let (text, ends_line) = match line.strip_suffix('\n') {
                Some(text) => (text, true),
                None => (line, false),
            };
            if !text.is_empty() {
                if self.at_line_start {
                    for _ in 0..self.indent {
                        self.out.push_str(&self.layout.indent);
                    }
                }
                self.at_line_start = false;
                self.out.push_str(text);
            }
            if ends_line {
                self.out.push('\n');
                self.at_line_start = true;
            }
        }
    }

    /// Write a complete line (adds newline at end).
    pub fn line(&mut self, s: &str) {
        self.write(s);
        self.newline();
    }

    pub fn newline(&mut self) {
        self.write("\n");
    }

    /// Increase indentation for subsequent lines.
    /// If `newline` is true, writes a newline before indenting (for block starts).
    pub fn indent(&mut self, newline: bool) {
        if newline {
            self.newline();
        }
        self.indent += 1;
    }

    /// Decrease indentation for subsequent lines.
    /// If `newline` is true, writes a newline after dedenting (for block ends).
    pub fn dedent(&mut self, newline: bool) {
        self.indent = self.indent.saturating_sub(1);
        if newline {
            self.newline();
        }
    }

    /// Write items separated by a separator string.
    /// Example: `w.sep(",\n", &["a", "b"])` writes each item on its own line.
    pub fn sep<I, T>(&mut self, separator: &str, items: I)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut first = true;
        for item in items {
            if !first {
                self.write(separator);
            }
            first = false;
            self.write(item.as_ref());
        }
    }

    pub fn into_inner(self) -> String {
        self.out
    }
}

/// Render to a string, starting at depth zero.
pub fn render_to_string<F>(layout: &Layout, f: F) -> String
where
    F: FnOnce(&mut CppWriter<'_>),
{
    let mut writer = CppWriter::new(layout);
    f(&mut writer);
    writer.into_inner()
}
