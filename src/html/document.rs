//! Standalone page shell around a rendered fragment.
//!
//! The page links the GitHub markdown stylesheet, switches to a dark palette
//! when the reader prefers one, and carries a small script that replaces
//! `{name}` placeholders at display time. The script prompts once per
//! distinct name and reuses the answer for every repeat; an empty answer
//! leaves the placeholder as written.

use std::fmt::{self, Write};

#[cfg(feature = "bon")]
use bon::Builder;

use crate::html::escape;

/// Stylesheet linked from every standalone page.
pub const MARKDOWN_CSS: &str =
    "https://cdn.jsdelivr.net/npm/github-markdown-css/github-markdown.min.css";

const DARK_STYLE: &str = r#"    <style>
      @media (prefers-color-scheme: dark) {
        body { background-color:#0d1117; color:#c9d1d9; }
        .markdown-body { background-color:transparent; }
      }
    </style>
"#;

const PLACEHOLDER_SCRIPT: &str = r#"    <script>
(function(){
  try {
    var seen = Object.create(null);
    var article = document.querySelector("article");
    article.innerHTML = article.innerHTML.replace(/\{([^\}]+)\}/g, function(m,key){
      if(!(key in seen)){
        var v = prompt("Enter the text for “"+key+"”:","");
        seen[key] = (v && v.length) ? v : m;
      }
      return seen[key];
    });
  } catch(e) { console.error(e); }
})();
    </script>
"#;

/// Page metadata for [`wrap`].
///
/// The defaults produce an English page (`lang="en"`, English title and
/// placeholder prompt). Only the language tag and title are configurable;
/// the prompt wording stays English.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "bon", derive(Builder))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct DocumentOptions {
    /// Contents of the `<title>` element.
    #[cfg_attr(feature = "bon", builder(default = String::from("Converted Markdown")))]
    pub title: String,

    /// Value of the `lang` attribute on `<html>`. Defaults to `en`.
    ///
    /// ```rust
    /// # use foldmark::DocumentOptions;
    /// # use foldmark::html::document::wrap;
    /// let options = DocumentOptions {
    ///     lang: "ja".to_string(),
    ///     ..DocumentOptions::default()
    /// };
    /// assert!(wrap("", &options).contains("<html lang=\"ja\">"));
    /// ```
    #[cfg_attr(feature = "bon", builder(default = String::from("en")))]
    pub lang: String,

    /// Whether to append the placeholder substitution script.
    #[cfg_attr(feature = "bon", builder(default = true))]
    pub placeholders: bool,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        DocumentOptions {
            title: String::from("Converted Markdown"),
            lang: String::from("en"),
            placeholders: true,
        }
    }
}

/// Embeds `body` in a complete HTML page, writing the result to `output`.
///
/// `body` is inserted as-is.
pub fn format_document(
    body: &str,
    options: &DocumentOptions,
    output: &mut dyn Write,
) -> fmt::Result {
    output.write_str("<!DOCTYPE html>\n<html lang=\"")?;
    escape(output, &options.lang)?;
    output.write_str("\">\n  <head>\n")?;
    output.write_str("    <meta charset=\"UTF-8\">\n")?;
    output.write_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
    )?;
    output.write_str("    <title>")?;
    escape(output, &options.title)?;
    output.write_str("</title>\n")?;
    writeln!(output, "    <link rel=\"stylesheet\" href=\"{}\">", MARKDOWN_CSS)?;
    output.write_str(DARK_STYLE)?;
    output.write_str("  </head>\n  <body>\n")?;
    output.write_str("    <article class=\"markdown-body\">\n")?;
    output.write_str(body)?;
    if !body.is_empty() && !body.ends_with('\n') {
        output.write_char('\n')?;
    }
    output.write_str("    </article>\n")?;
    if options.placeholders {
        output.write_str(PLACEHOLDER_SCRIPT)?;
    }
    output.write_str("  </body>\n</html>\n")
}

/// Embeds `body` in a complete HTML page.
pub fn wrap(body: &str, options: &DocumentOptions) -> String {
    let mut s = String::with_capacity(body.len() + 1024);
    // Writing to a String never fails.
    let _ = format_document(body, options, &mut s);
    s
}
