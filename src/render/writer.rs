//! Line-oriented output buffer with nesting depth.

use super::RenderOptions;

pub(crate) struct Writer<'a> {
    options: &'a RenderOptions,
    lines: Vec<String>,
    depth: usize,
}

impl<'a> Writer<'a> {
    pub(crate) fn new(options: &'a RenderOptions) -> Self {
        Self {
            options,
            lines: Vec::new(),
            depth: 0,
        }
    }

    /// Push `text` at the current depth. Embedded newlines become separate
    /// lines, each indented.
    pub(crate) fn line(&mut self, text: impl AsRef<str>) {
        let indent = " ".repeat(self.depth * self.options.indent);
        for line in text.as_ref().split('\n') {
            if line.is_empty() {
                self.lines.push(String::new());
            } else {
                self.lines.push(format!("{}{}", indent, line));
            }
        }
    }

    /// Push `text` untouched, whatever the depth. Used for data payloads
    /// where leading whitespace is significant.
    pub(crate) fn verbatim(&mut self, text: &str) {
        for line in text.split('\n') {
            self.lines.push(line.to_string());
        }
    }

    /// Run `f` one nesting level deeper.
    pub(crate) fn nested(&mut self, f: impl FnOnce(&mut Self)) {
        self.depth += 1;
        f(self);
        self.depth -= 1;
    }

    /// `open`, children one level deeper, `close`.
    pub(crate) fn block(&mut self, open: impl AsRef<str>, close: &str, f: impl FnOnce(&mut Self)) {
        self.line(open);
        self.nested(f);
        self.line(close);
    }

    pub(crate) fn finish(self) -> String {
        let mut out = self.lines.join("\n");
        if self.options.trailing_newline {
            out.push('\n');
        }
        out
    }
}
