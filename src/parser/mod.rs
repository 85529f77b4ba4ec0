pub mod alert;
pub mod options;
mod table;

use std::iter::Peekable;
use std::mem;
use std::sync::LazyLock;

use regex::Regex;
use smallvec::SmallVec;

use crate::html::{escape_string, Context};
use crate::inlines;
use crate::nodes::{AlertType, FenceState, ListType, NodeAlert, NodeHeading, NodeList};
pub use crate::parser::options::Options;
use crate::strings::{self, Lines};

const FENCE: &str = "```";

static THEMATIC_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\*\*\*|---|___)\s*$").unwrap());

static ATX_HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.*)$").unwrap());

static LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)([-*+]|\d+\.)\s+(.*)$").unwrap());

static ALERT_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*>+\s*\[!(NOTE|TIP|IMPORTANT|WARNING|CAUTION)\]\s*(.*)$").unwrap()
});

static BLOCK_QUOTE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*>+\s*(.*)$").unwrap());

/// Converts a Markdown document to the output sequence: the HTML fragment
/// as a list of lines, indentation included.
///
/// ```rust
/// # use foldmark::{parse_document, Options};
/// let lines = parse_document("# Title\nHello", &Options::default());
/// assert_eq!(lines, vec![
///     "<details style=\"margin-left:1em\">",
///     "<summary><h1>Title</h1></summary>",
///     "  <p>",
///     "  Hello",
///     "  </p>",
///     "  </details>",
/// ]);
/// ```
pub fn parse_document(md: &str, options: &Options) -> Vec<String> {
    Parser::new(options).parse(md)
}

/// State for one conversion. Every stack and buffer lives here, so separate
/// conversions never share anything mutable.
pub struct Parser<'s, 'o> {
    options: &'o Options,
    cx: Context,
    line_number: usize,
    headings: SmallVec<[NodeHeading; 6]>,
    lists: SmallVec<[NodeList; 8]>,
    paragraph: Vec<&'s str>,
    block_quote: Vec<String>,
    table: Vec<&'s str>,
    fence: FenceState,
}

impl<'s, 'o> Parser<'s, 'o> {
    fn new(options: &'o Options) -> Self {
        Parser {
            options,
            cx: Context::new(options.render.indent),
            line_number: 0,
            headings: SmallVec::new(),
            lists: SmallVec::new(),
            paragraph: Vec::new(),
            block_quote: Vec::new(),
            table: Vec::new(),
            fence: FenceState::Closed,
        }
    }

    fn parse(mut self, s: &'s str) -> Vec<String> {
        log::debug!("converting document of {} bytes", s.len());

        let mut lines = Lines::new(s).peekable();
        while let Some(line) = lines.next() {
            self.line_number += 1;
            self.process_line(line, &mut lines);
        }

        self.finalize_document();
        let output = self.cx.finish();
        log::debug!(
            "converted {} lines into {} output lines",
            self.line_number,
            output.len()
        );
        output
    }

    fn process_line(&mut self, line: &'s str, rest: &mut Peekable<Lines<'s>>) {
        if let FenceState::Open { .. } = self.fence {
            if line.starts_with(FENCE) {
                log::trace!("line {}: closing fence", self.line_number);
                self.cx.push("</code></pre>");
                self.fence = FenceState::Closed;
            } else {
                self.cx.push(escape_string(line));
            }
            return;
        }

        let list_item = LIST_ITEM.captures(line);
        let quote = BLOCK_QUOTE.captures(line);
        let table_row = self.options.extension.table && table::matches(line);

        if list_item.is_none() {
            self.close_lists();
        }
        if quote.is_none() {
            self.flush_block_quote();
        }
        if !table_row {
            self.flush_table();
        }

        if THEMATIC_BREAK.is_match(line) {
            log::trace!("line {}: thematic break", self.line_number);
            self.flush_paragraph();
            self.cx.push("<hr>");
        } else if let Some(info) = line.strip_prefix(FENCE) {
            self.open_code_fence(info.trim());
        } else if let Some(caps) = ATX_HEADING.captures(line) {
            self.open_heading(caps[1].len(), caps[2].trim());
        } else if let Some(caps) = list_item {
            let list_type = if caps[2].ends_with('.') {
                ListType::Ordered
            } else {
                ListType::Bullet
            };
            self.add_list_item(caps[1].chars().count(), list_type, &caps[3]);
        } else if let Some(caps) = quote {
            match self.try_alert(line) {
                Some((alert_type, first)) => {
                    let mut lines = vec![first.to_string()];
                    while let Some(next) = rest.next_if(|l| BLOCK_QUOTE.is_match(l)) {
                        self.line_number += 1;
                        if let Some(body) = BLOCK_QUOTE.captures(next) {
                            lines.push(body[1].to_string());
                        }
                    }
                    self.render_alert(&NodeAlert { alert_type, lines });
                }
                None => {
                    self.flush_paragraph();
                    let text = inlines::transform(&caps[1], self.options);
                    self.block_quote.push(text);
                }
            }
        } else if table_row {
            self.flush_paragraph();
            self.table.push(line);
        } else if strings::is_blank(line) {
            self.flush_paragraph();
        } else {
            self.paragraph.push(line);
        }
    }

    fn open_code_fence(&mut self, info: &str) {
        log::trace!("line {}: opening fence {:?}", self.line_number, info);
        self.flush_paragraph();
        self.cx
            .push(format!("<pre><code class=\"{}\">", escape_string(info)));
        self.fence = FenceState::Open {
            info: info.to_string(),
        };
    }

    fn open_heading(&mut self, level: usize, text: &str) {
        log::trace!("line {}: heading level {}", self.line_number, level);
        let text = inlines::transform(text, self.options);
        self.flush_paragraph();
        self.close_sections(level);

        let open = if self.options.render.open_sections {
            " open"
        } else {
            ""
        };
        self.cx
            .push(format!("<details{} style=\"margin-left:{}em\">", open, level));
        self.cx
            .push(format!("<summary><h{0}>{1}</h{0}></summary>", level, text));

        self.headings.push(NodeHeading { level });
        self.cx.set_depth(self.headings.len());
    }

    /// Closes every open section at `level` or deeper. The closing tag sits
    /// at the depth of the section's children.
    fn close_sections(&mut self, level: usize) {
        while self.headings.last().is_some_and(|h| h.level >= level) {
            self.cx.push("</details>");
            self.headings.pop();
            self.cx.set_depth(self.headings.len());
        }
    }

    fn add_list_item(&mut self, indent: usize, list_type: ListType, text: &str) {
        let level = indent / self.options.parse.list_indent_width.max(1) + 1;
        log::trace!(
            "line {}: {:?} item at level {}",
            self.line_number,
            list_type,
            level
        );
        let text = inlines::transform(text, self.options);
        self.flush_paragraph();

        while let Some(top) = self.lists.last().copied() {
            if top.level > level || (top.level == level && top.list_type != list_type) {
                self.lists.pop();
                self.cx.push(format!("</{}>", top.list_type.tag()));
            } else {
                break;
            }
        }

        if self.lists.last().map_or(true, |top| top.level < level) {
            self.cx.push(format!("<{}>", list_type.tag()));
            self.lists.push(NodeList { list_type, level });
        }

        self.cx.push(format!("<li>{}</li>", text));
    }

    fn close_lists(&mut self) {
        while let Some(list) = self.lists.pop() {
            self.cx.push(format!("</{}>", list.list_type.tag()));
        }
    }

    /// Returns the alert type and the text after the tag when `line` opens
    /// an alert.
    fn try_alert<'l>(&self, line: &'l str) -> Option<(AlertType, &'l str)> {
        if !self.options.extension.alerts {
            return None;
        }
        let caps = ALERT_START.captures(line)?;
        let alert_type = AlertType::from_tag(caps.get(1)?.as_str())?;
        Some((alert_type, caps.get(2).map_or("", |m| m.as_str())))
    }

    fn render_alert(&mut self, alert: &NodeAlert) {
        log::trace!(
            "line {}: {:?} alert with {} body lines",
            self.line_number,
            alert.alert_type,
            alert.lines.len()
        );
        self.flush_paragraph();
        self.flush_block_quote();

        let body = alert
            .lines
            .iter()
            .filter(|l| !strings::is_blank(l))
            .map(|l| inlines::transform(l, self.options))
            .collect::<Vec<_>>()
            .join("<br>");

        let alert_type = alert.alert_type;
        self.cx.push(format!(
            "<div class=\"markdown-alert {}\" dir=\"auto\">",
            alert_type.css_class()
        ));
        self.cx.push(format!(
            "<p class=\"markdown-alert-title\" dir=\"auto\">{}{}</p>",
            alert_type.icon(),
            alert_type.default_title()
        ));
        self.cx.push(format!("<p dir=\"auto\">{}</p>", body));
        self.cx.push("</div>");
    }

    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let lines = mem::take(&mut self.paragraph);
        let last = lines.len() - 1;

        self.cx.push("<p>");
        for (i, line) in lines.iter().enumerate() {
            let mut text = inlines::transform(line, self.options);
            if i != last {
                text.push_str("<br>");
            }
            self.cx.push(text);
        }
        self.cx.push("</p>");
    }

    fn flush_block_quote(&mut self) {
        if self.block_quote.is_empty() {
            return;
        }
        let lines = mem::take(&mut self.block_quote);
        self.cx
            .push(format!("<blockquote>{}</blockquote>", lines.join("<br>\n")));
    }

    fn flush_table(&mut self) {
        if self.table.is_empty() {
            return;
        }
        let rows = mem::take(&mut self.table);
        table::render(&mut self.cx, &rows, self.options);
    }

    fn finalize_document(&mut self) {
        if let FenceState::Open { info } = mem::take(&mut self.fence) {
            log::debug!("unterminated code fence {:?} closed at end of document", info);
            self.cx.push("</code></pre>");
        }
        self.close_lists();
        self.flush_block_quote();
        self.flush_table();
        self.flush_paragraph();
        self.close_sections(1);
    }
}
