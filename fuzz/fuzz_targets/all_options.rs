#![no_main]

use libfuzzer_sys::fuzz_target;

use foldmark::{markdown_to_document, markdown_to_html, DocumentOptions, Options};

#[derive(Debug, arbitrary::Arbitrary)]
struct FuzzInput<'s> {
    s: &'s str,
    opts: Options,
    document: DocumentOptions,
}

fuzz_target!(|i: FuzzInput| {
    let mut opts = i.opts;
    // Keep pathological indent widths from dominating the run.
    opts.render.indent %= 16;
    opts.parse.list_indent_width %= 16;

    let html = markdown_to_html(i.s, &opts);
    assert_eq!(html.matches("<details").count(), html.matches("</details>").count());
    markdown_to_document(i.s, &opts, &i.document);
});
