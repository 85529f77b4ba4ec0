use super::*;

#[test]
fn nested_and_back_out() {
    html(
        "- a\n  - b\n  - c\n- d",
        concat!(
            "<ul>\n",
            "<li>a</li>\n",
            "<ul>\n",
            "<li>b</li>\n",
            "<li>c</li>\n",
            "</ul>\n",
            "<li>d</li>\n",
            "</ul>",
        ),
    );
}

#[test]
fn ordered() {
    html(
        "1. one\n2. two\n10. ten",
        "<ol>\n<li>one</li>\n<li>two</li>\n<li>ten</li>\n</ol>",
    );
}

#[test]
fn bullet_markers_are_one_kind() {
    html(
        "- a\n+ b\n* c",
        "<ul>\n<li>a</li>\n<li>b</li>\n<li>c</li>\n</ul>",
    );
}

#[test]
fn kind_change_at_same_level() {
    html(
        "- a\n1. b",
        "<ul>\n<li>a</li>\n</ul>\n<ol>\n<li>b</li>\n</ol>",
    );
}

#[test]
fn ordered_inside_bullet() {
    html(
        "- a\n  1. b\n- c",
        concat!(
            "<ul>\n",
            "<li>a</li>\n",
            "<ol>\n",
            "<li>b</li>\n",
            "</ol>\n",
            "<li>c</li>\n",
            "</ul>",
        ),
    );
}

#[test]
fn skipped_levels_open_one_container() {
    html(
        "- a\n      - b\n- c",
        concat!(
            "<ul>\n",
            "<li>a</li>\n",
            "<ul>\n",
            "<li>b</li>\n",
            "</ul>\n",
            "<li>c</li>\n",
            "</ul>",
        ),
    );
}

#[test]
fn odd_indent_rounds_down() {
    html(
        "- a\n - b\n   - c",
        concat!(
            "<ul>\n",
            "<li>a</li>\n",
            "<li>b</li>\n",
            "<ul>\n",
            "<li>c</li>\n",
            "</ul>\n",
            "</ul>",
        ),
    );
}

#[test]
fn tabs_count_as_one_column() {
    html("- a\n\t- b", "<ul>\n<li>a</li>\n<li>b</li>\n</ul>");
    html(
        "- a\n\t\t- b",
        "<ul>\n<li>a</li>\n<ul>\n<li>b</li>\n</ul>\n</ul>",
    );
}

#[test]
fn blank_line_ends_list() {
    html(
        "- a\n\n- b",
        "<ul>\n<li>a</li>\n</ul>\n<ul>\n<li>b</li>\n</ul>",
    );
}

#[test]
fn text_after_list() {
    html(
        "- a\ntext",
        concat!("<ul>\n", "<li>a</li>\n", "</ul>\n", "<p>\n", "text\n", "</p>"),
    );
}

#[test]
fn list_flushes_paragraph() {
    html(
        "text\n- a",
        concat!("<p>\n", "text\n", "</p>\n", "<ul>\n", "<li>a</li>\n", "</ul>"),
    );
}

#[test]
fn heading_after_list_closes_it_first() {
    html(
        "- a\n# H",
        concat!(
            "<ul>\n",
            "<li>a</li>\n",
            "</ul>\n",
            "<details style=\"margin-left:1em\">\n",
            "<summary><h1>H</h1></summary>\n",
            "  </details>",
        ),
    );
}

#[test]
fn item_text_is_inline_transformed() {
    html(
        "- *it* and [link](u)",
        "<ul>\n<li><em>it</em> and <a href=\"u\">link</a></li>\n</ul>",
    );
}

#[test]
fn marker_needs_whitespace() {
    html("-a", &para("-a"));
    html("1.a", &para("1.a"));
}
