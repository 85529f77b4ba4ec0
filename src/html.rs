//! The HTML output sequence and escaping helpers.

pub mod document;

use std::fmt::{self, Write};

/// Accumulates the output sequence: one entry per emitted line, each
/// prefixed with indentation proportional to the number of open heading
/// sections.
pub struct Context {
    lines: Vec<String>,
    indent: usize,
    depth: usize,
}

impl Context {
    pub fn new(indent: usize) -> Self {
        Context {
            lines: Vec::new(),
            indent,
            depth: 0,
        }
    }

    /// Appends `line` at the current depth.
    pub fn push<S: AsRef<str>>(&mut self, line: S) {
        let line = line.as_ref();
        let mut indented = String::with_capacity(self.depth * self.indent + line.len());
        indented.extend(std::iter::repeat(' ').take(self.depth * self.indent));
        indented.push_str(line);
        self.lines.push(indented);
    }

    /// Sets the heading depth used for subsequent lines.
    pub fn set_depth(&mut self, depth: usize) {
        self.depth = depth;
    }

    pub fn finish(self) -> Vec<String> {
        self.lines
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("<foldmark::html::Context>")
    }
}

/// Writes `buffer` to `output`, escaping `&`, `<`, `>`, `"` and `'`.
pub fn escape(output: &mut dyn Write, buffer: &str) -> fmt::Result {
    let bytes = buffer.as_bytes();
    let matcher = jetscii::bytes!(b'&', b'<', b'>', b'"', b'\'');

    let mut offset = 0;
    while let Some(found) = matcher.find(&bytes[offset..]) {
        let i = offset + found;
        let esc = match bytes[i] {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' => "&quot;",
            b'\'' => "&#39;",
            _ => unreachable!(),
        };
        output.write_str(&buffer[offset..i])?;
        output.write_str(esc)?;
        offset = i + 1;
    }
    output.write_str(&buffer[offset..])
}

/// Returns `buffer` with HTML metacharacters escaped.
pub fn escape_string(buffer: &str) -> String {
    let mut s = String::with_capacity(buffer.len());
    // Writing to a String never fails.
    let _ = escape(&mut s, buffer);
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_all_five() {
        assert_eq!(
            escape_string(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn escape_passthrough() {
        assert_eq!(escape_string("plain text, 日本語"), "plain text, 日本語");
    }

    #[test]
    fn context_indents_by_depth() {
        let mut cx = Context::new(2);
        cx.push("<a>");
        cx.set_depth(2);
        cx.push("<b>");
        cx.set_depth(0);
        cx.push("</a>");
        assert_eq!(cx.finish(), vec!["<a>", "    <b>", "</a>"]);
    }
}
