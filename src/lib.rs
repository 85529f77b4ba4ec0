//! A Markdown to HTML converter that folds every heading into a collapsible
//! `<details>` section.
//!
//! Conversion is a single forward pass over the document's lines. Headings
//! nest as sections, lists nest by indentation, and blockquotes, tables,
//! GitHub-style alerts and fenced code are buffered until they close. Span
//! syntax (emphasis, links, images, code, strikethrough, and colored or
//! highlighted text) is rewritten line by line.
//!
//! ```rust
//! use foldmark::{markdown_to_html, Options};
//!
//! assert_eq!(
//!     markdown_to_html("# Hello\n- **world**", &Options::default()),
//!     concat!(
//!         "<details style=\"margin-left:1em\">\n",
//!         "<summary><h1>Hello</h1></summary>\n",
//!         "  <ul>\n",
//!         "  <li><strong>world</strong></li>\n",
//!         "  </ul>\n",
//!         "  </details>",
//!     )
//! );
//! ```
//!
//! The fragment can be embedded in a standalone page, which also carries a
//! script that fills in `{placeholder}` tokens when the page is opened:
//!
//! ```rust
//! use foldmark::{markdown_to_document, DocumentOptions, Options};
//!
//! let page = markdown_to_document("Dear {name},", &Options::default(), &DocumentOptions::default());
//! assert!(page.starts_with("<!DOCTYPE html>"));
//! assert!(page.contains("Dear {name},"));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_debug_implementations)]

pub mod html;
pub mod inlines;
pub mod nodes;
mod parser;
mod strings;

use std::fmt;

pub use html::document::DocumentOptions;
pub use parser::options::{
    Extension as ExtensionOptions, Options, Parse as ParseOptions, Render as RenderOptions,
};
pub use parser::parse_document;

#[cfg(feature = "bon")]
pub use parser::options::{
    ExtensionBuilder as ExtensionOptionsBuilder, OptionsBuilder, ParseBuilder as ParseOptionsBuilder,
    RenderBuilder as RenderOptionsBuilder,
};

/// Render Markdown to an HTML fragment, writing it to `output`.
///
/// Lines are separated by `\n`; no newline follows the last one.
pub fn format_html(md: &str, options: &Options, output: &mut dyn fmt::Write) -> fmt::Result {
    let lines = parse_document(md, options);
    let mut first = true;
    for line in &lines {
        if !first {
            output.write_char('\n')?;
        }
        output.write_str(line)?;
        first = false;
    }
    Ok(())
}

/// Render Markdown to an HTML fragment.
///
/// See the documentation of the crate root for an example.
pub fn markdown_to_html(md: &str, options: &Options) -> String {
    let mut s = String::with_capacity(md.len() * 2);
    // Writing to a String never fails.
    let _ = format_html(md, options, &mut s);
    s
}

/// Render Markdown to a complete, standalone HTML page.
pub fn markdown_to_document(
    md: &str,
    options: &Options,
    document_options: &DocumentOptions,
) -> String {
    html::document::wrap(&markdown_to_html(md, options), document_options)
}

/// Return the version of the crate.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
