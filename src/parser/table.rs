use std::sync::LazyLock;

use regex::Regex;

use crate::html::Context;
use crate::inlines;
use crate::parser::options::Options;

static TABLE_ROW: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\|(.+)\|\s*$").unwrap());

/// Whether `line` is a table row: bounded by pipes at both ends, leading and
/// trailing whitespace aside.
pub fn matches(line: &str) -> bool {
    TABLE_ROW.is_match(line)
}

/// Splits a row into trimmed cells.
///
/// The fragments outside the bounding pipes are dropped; empty cells between
/// two pipes are kept.
pub fn row(line: &str) -> Vec<&str> {
    let trimmed = line.trim();
    let inner = trimmed.strip_prefix('|').unwrap_or(trimmed);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner.split('|').map(str::trim).collect()
}

/// Renders the buffered rows of one table. The first row is the header and
/// the second, the alignment row, is skipped.
pub fn render(cx: &mut Context, rows: &[&str], options: &Options) {
    let Some((header, rest)) = rows.split_first() else {
        return;
    };
    let body = rest.get(1..).unwrap_or_default();

    cx.push("<table>");
    cx.push(format!("<thead><tr>{}</tr></thead>", cells(header, "th", options)));
    if !body.is_empty() {
        cx.push("<tbody>");
        for line in body {
            cx.push(format!("<tr>{}</tr>", cells(line, "td", options)));
        }
        cx.push("</tbody>");
    }
    cx.push("</table>");
}

fn cells(line: &str, tag: &str, options: &Options) -> String {
    row(line)
        .into_iter()
        .map(|cell| format!("<{tag}>{}</{tag}>", inlines::transform(cell, options)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_matching() {
        assert!(matches("|a|b|"));
        assert!(matches("  | a | b |  "));
        assert!(!matches("a|b"));
        assert!(!matches("| a"));
        assert!(!matches("||"));
    }

    #[test]
    fn row_splitting() {
        assert_eq!(row("| a | b |"), vec!["a", "b"]);
        assert_eq!(row("  |a||c|"), vec!["a", "", "c"]);
        assert_eq!(row("|---|:-:|"), vec!["---", ":-:"]);
    }
}
