use super::*;

#[test]
fn metacharacters() {
    html(
        "<script>alert('x')</script> & \"q\"",
        &para("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; &quot;q&quot;"),
    );
}

#[test]
fn plain_text_is_a_fixed_point() {
    let options = Options::default();
    let input = "Plain words, numbers 1 2 3, and {placeholders}.";
    let once = inlines::transform(input, &options);
    assert_eq!(once, input);
    assert_eq!(inlines::transform(&once, &options), once);
}

#[test]
fn entities_in_source_are_text() {
    html("&amp;", &para("&amp;amp;"));
}

#[test]
fn link_destination_cannot_break_out() {
    html(
        "[x](a\"onmouseover=\"b)",
        &para("<a href=\"a&quot;onmouseover=&quot;b\">x</a>"),
    );
}

#[test]
fn nul_cannot_forge_code_placeholder() {
    let options = Options::default();
    assert_eq!(
        inlines::transform("\0CODE0\0 `x`", &options),
        "\u{fffd}CODE0\u{fffd} <code>x</code>"
    );
}

#[test]
fn fenced_code_is_escaped() {
    html(
        "```\n<div>&</div>\n```",
        "<pre><code class=\"\">\n&lt;div&gt;&amp;&lt;/div&gt;\n</code></pre>",
    );
}
