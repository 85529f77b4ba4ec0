use super::*;
use crate::html::document::{format_document, wrap};

#[test]
fn page_shell() {
    let page = wrap("<p>\nhi\n</p>", &DocumentOptions::default());
    assert!(page.starts_with("<!DOCTYPE html>\n<html lang=\"en\">\n"));
    assert!(page.contains("<title>Converted Markdown</title>"));
    assert!(page.contains("<article class=\"markdown-body\">\n<p>\nhi\n</p>\n    </article>"));
    assert!(page.contains("<script>"));
    assert!(page.ends_with("</body>\n</html>\n"));
}

#[test]
fn title_and_lang_are_escaped() {
    let options = DocumentOptions {
        title: "<Notes & \"stuff\">".to_string(),
        lang: "en\"x".to_string(),
        placeholders: true,
    };
    let page = wrap("", &options);
    assert!(page.contains("<title>&lt;Notes &amp; &quot;stuff&quot;&gt;</title>"));
    assert!(page.contains("<html lang=\"en&quot;x\">"));
    assert!(page.contains("<article class=\"markdown-body\">\n    </article>"));
}

#[test]
fn placeholder_script_is_optional() {
    let options = DocumentOptions {
        placeholders: false,
        ..DocumentOptions::default()
    };
    let page = wrap("x", &options);
    assert!(!page.contains("<script>"));
    assert!(page.contains("<article class=\"markdown-body\">\nx\n    </article>"));
}

#[test]
fn streamed_matches_wrapped() {
    let options = DocumentOptions::default();
    let mut streamed = String::new();
    format_document("<hr>", &options, &mut streamed).unwrap();
    compare_strs(&streamed, &wrap("<hr>", &options), "document", "<hr>");
}

#[test]
fn whole_document() {
    let page = markdown_to_document(
        "# Hi {name}\n---",
        &Options::default(),
        &DocumentOptions::default(),
    );
    assert!(page.contains(concat!(
        "<article class=\"markdown-body\">\n",
        "<details style=\"margin-left:1em\">\n",
        "<summary><h1>Hi {name}</h1></summary>\n",
        "  <hr>\n",
        "  </details>\n",
        "    </article>",
    )));
}

#[test]
fn defaults_to_english() {
    let page = wrap("", &DocumentOptions::default());
    assert!(page.contains("<html lang=\"en\">"));
    assert!(page.contains("prompt(\"Enter the text for"));
}
