//! Span-level rewriting of a single line of text.
//!
//! The line is escaped first, code spans are parked in a side table behind
//! placeholder tokens, and the remaining rules run in a fixed order over the
//! escaped text. Code spans come back last of all, so nothing inside them is
//! ever rewritten.

use std::borrow::Cow;
use std::sync::LazyLock;

use fancy_regex::Regex as FancyRegex;
use regex::{Captures, Regex};

use crate::html::escape_string;
use crate::parser::options::{Extension, Options, Render};

static CODE_SPAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

static CODE_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x00CODE(\d+)\x00").unwrap());

// The digits may not run into an ASCII word character; any other text,
// `#f00重要` included, may follow directly.
static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(#(?:[0-9A-Fa-f]{3}|[0-9A-Fa-f]{6}))(?:[^0-9A-Za-z_]|$)").unwrap()
});

enum Stage {
    /// Substitutes every match with a fixed template.
    Template {
        pattern: Regex,
        template: &'static str,
    },
    /// Single-delimiter emphasis. Group 1 is the character before the
    /// opening delimiter, kept as-is; group 2 is the emphasised text.
    Emphasis { pattern: FancyRegex },
    /// `<span>` styled by an optional leading hex color. Group 1 is the
    /// content between the delimiters.
    Span {
        pattern: Regex,
        property: &'static str,
        fallback: fn(&Render) -> &str,
    },
}

struct Rule {
    enabled: fn(&Extension) -> bool,
    stage: Stage,
}

impl Rule {
    fn template(enabled: fn(&Extension) -> bool, pattern: &str, template: &'static str) -> Self {
        Rule {
            enabled,
            stage: Stage::Template {
                pattern: Regex::new(pattern).unwrap(),
                template,
            },
        }
    }

    fn emphasis(delimiter: char) -> Self {
        let d = regex::escape(&delimiter.to_string());
        let pattern = format!(r"(^|[^{d}]){d}([^{d}]+){d}(?!{d})");
        Rule {
            enabled: always,
            stage: Stage::Emphasis {
                pattern: FancyRegex::new(&pattern).unwrap(),
            },
        }
    }

    fn span(
        enabled: fn(&Extension) -> bool,
        pattern: &str,
        property: &'static str,
        fallback: fn(&Render) -> &str,
    ) -> Self {
        Rule {
            enabled,
            stage: Stage::Span {
                pattern: Regex::new(pattern).unwrap(),
                property,
                fallback,
            },
        }
    }
}

fn always(_: &Extension) -> bool {
    true
}

fn default_text_color(render: &Render) -> &str {
    &render.default_text_color
}

fn default_highlight_color(render: &Render) -> &str {
    &render.default_highlight_color
}

static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::template(always, r"!\[([^\]]*)\]\(([^)]+)\)", r#"<img src="${2}" alt="${1}">"#),
        Rule::template(always, r"\[([^\]]+)\]\(([^)]+)\)", r#"<a href="${2}">${1}</a>"#),
        Rule::template(
            always,
            r"\*\*\*([^*]+)\*\*\*",
            "<strong><em>${1}</em></strong>",
        ),
        Rule::template(always, r"\*\*([^*]+)\*\*", "<strong>${1}</strong>"),
        Rule::template(|e| e.underline, r"__([^_]+)__", "<u>${1}</u>"),
        Rule::emphasis('*'),
        Rule::emphasis('_'),
        Rule::template(|e| e.strikethrough, r"~~([^~]+)~~", "<del>${1}</del>"),
        Rule::span(
            |e| e.colored_text,
            r"@@([^@]+)@@",
            "color",
            default_text_color,
        ),
        Rule::span(
            |e| e.highlight,
            r"%%([^%]+)%%",
            "background-color",
            default_highlight_color,
        ),
    ]
});

impl Stage {
    fn apply<'t>(&self, text: &'t str, render: &Render) -> Cow<'t, str> {
        match self {
            Stage::Template { pattern, template } => pattern.replace_all(text, *template),
            Stage::Emphasis { pattern } => replace_emphasis(pattern, text),
            Stage::Span {
                pattern,
                property,
                fallback,
            } => {
                let fallback = escape_string(fallback(render));
                pattern.replace_all(text, |caps: &Captures| {
                    styled_span(&caps[1], property, &fallback)
                })
            }
        }
    }
}

fn replace_emphasis<'t>(pattern: &FancyRegex, text: &'t str) -> Cow<'t, str> {
    let mut out = String::new();
    let mut last = 0;

    while last < text.len() {
        let caps = match pattern.captures_from_pos(text, last) {
            Ok(Some(caps)) => caps,
            Ok(None) => break,
            Err(err) => {
                log::warn!("emphasis matching stopped early: {}", err);
                break;
            }
        };
        let (Some(whole), Some(body)) = (caps.get(0), caps.get(2)) else {
            break;
        };
        let lead = caps.get(1).map_or("", |m| m.as_str());

        out.push_str(&text[last..whole.start()]);
        out.push_str(lead);
        out.push_str("<em>");
        out.push_str(body.as_str());
        out.push_str("</em>");
        last = whole.end();
    }

    if last == 0 {
        Cow::Borrowed(text)
    } else {
        out.push_str(&text[last..]);
        Cow::Owned(out)
    }
}

fn styled_span(inner: &str, property: &str, fallback: &str) -> String {
    match HEX_COLOR.captures(inner).and_then(|caps| caps.get(1)) {
        Some(color) => format!(
            "<span style=\"{}:{}\">{}</span>",
            property,
            color.as_str(),
            inner[color.end()..].trim_start()
        ),
        None => format!("<span style=\"{}:{}\">{}</span>", property, fallback, inner),
    }
}

/// Rewrites the span-level Markdown in `line` into HTML.
///
/// Every `&`, `<`, `>`, `"` and `'` in the input comes out escaped; the only
/// raw markup in the result is what the rules themselves insert.
///
/// ```rust
/// # use foldmark::{inlines, Options};
/// assert_eq!(
///     inlines::transform("**bold** and `*code*`", &Options::default()),
///     "<strong>bold</strong> and <code>*code*</code>"
/// );
/// ```
pub fn transform(line: &str, options: &Options) -> String {
    if line.is_empty() {
        return String::new();
    }

    let escaped = if line.contains('\0') {
        escape_string(&line.replace('\0', "\u{fffd}"))
    } else {
        escape_string(line)
    };

    let mut code_spans: Vec<String> = Vec::new();
    let mut s = CODE_SPAN
        .replace_all(&escaped, |caps: &Captures| {
            code_spans.push(caps[1].to_string());
            format!("\x00CODE{}\x00", code_spans.len() - 1)
        })
        .into_owned();

    for rule in RULES.iter() {
        if (rule.enabled)(&options.extension) {
            s = rule.stage.apply(&s, &options.render).into_owned();
        }
    }

    if code_spans.is_empty() {
        return s;
    }

    // Contents were escaped along with the rest of the line.
    CODE_PLACEHOLDER
        .replace_all(&s, |caps: &Captures| {
            match caps[1].parse::<usize>().ok().and_then(|ix| code_spans.get(ix)) {
                Some(code) => format!("<code>{}</code>", code),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
