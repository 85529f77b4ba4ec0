use super::*;
use crate::nodes::AlertType;
use strum::VariantArray;

fn alert(alert_type: AlertType, body: &str) -> String {
    format!(
        concat!(
            "<div class=\"markdown-alert markdown-alert-{}\" dir=\"auto\">\n",
            "<p class=\"markdown-alert-title\" dir=\"auto\">{}{}</p>\n",
            "<p dir=\"auto\">{}</p>\n",
            "</div>",
        ),
        alert_type.name(),
        alert_type.icon(),
        alert_type.default_title(),
        body,
    )
}

#[test]
fn note() {
    html(
        "> [!NOTE]\n> Pay attention\n>\n> Really",
        &alert(AlertType::Note, "Pay attention<br>Really"),
    );
}

#[test]
fn tag_is_case_insensitive() {
    html("> [!tip] Short one", &alert(AlertType::Tip, "Short one"));
}

#[test]
fn every_type() {
    for &alert_type in AlertType::VARIANTS {
        let md = format!("> [!{}]\n> body", alert_type.name().to_uppercase());
        html(&md, &alert(alert_type, "body"));
    }
}

#[test]
fn title_and_class() {
    assert_eq!(AlertType::Important.default_title(), "Important");
    assert_eq!(AlertType::Caution.css_class(), "markdown-alert-caution");
    assert_eq!(AlertType::from_tag("WaRnInG"), Some(AlertType::Warning));
    assert_eq!(AlertType::from_tag("info"), None);
}

#[test]
fn body_is_inline_transformed() {
    html(
        "> [!WARNING] **careful**\n> `rm -rf`",
        &alert(
            AlertType::Warning,
            "<strong>careful</strong><br><code>rm -rf</code>",
        ),
    );
}

#[test]
fn followed_by_paragraph() {
    html(
        "> [!NOTE]\n> a\nb",
        &format!("{}\n<p>\nb\n</p>", alert(AlertType::Note, "a")),
    );
}

#[test]
fn runs_to_end_of_document() {
    html(
        "> [!CAUTION]\n> one\n> two",
        &alert(AlertType::Caution, "one<br>two"),
    );
}

#[test]
fn quote_before_alert_is_flushed_first() {
    html(
        "> q\n> [!NOTE] n",
        &format!(
            "<blockquote>q</blockquote>\n{}",
            alert(AlertType::Note, "n")
        ),
    );
}

#[test]
fn nested_tag_is_body_text() {
    html(
        "> [!NOTE] a\n> [!TIP] b",
        &alert(AlertType::Note, "a<br>[!TIP] b"),
    );
}

#[test]
fn disabled() {
    html_opts!(
        [extension.alerts = false],
        "> [!NOTE]\n> a",
        "<blockquote>[!NOTE]<br>\na</blockquote>",
    );
}
