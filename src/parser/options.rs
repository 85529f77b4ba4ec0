//! Configuration for the parser and renderer.  Extensions affect both.

#[cfg(feature = "bon")]
use bon::Builder;

#[derive(Default, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "bon", derive(Builder))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
/// Umbrella options struct.
pub struct Options {
    /// Select the syntax extensions to recognise.
    #[cfg_attr(feature = "bon", builder(default))]
    pub extension: Extension,

    /// Configure parse-time options.
    #[cfg_attr(feature = "bon", builder(default))]
    pub parse: Parse,

    /// Configure render-time options.
    #[cfg_attr(feature = "bon", builder(default))]
    pub render: Render,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "bon", derive(Builder))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
/// Options to select extensions.
///
/// Every extension is enabled by default; switching one off makes its syntax
/// fall through to the next rule in line (usually plain text).
pub struct Extension {
    /// GitHub-style alert blocks.
    ///
    /// ```rust
    /// # use foldmark::{markdown_to_html, Options};
    /// let html = markdown_to_html("> [!TIP]\n> Use a map.", &Options::default());
    /// assert!(html.starts_with("<div class=\"markdown-alert markdown-alert-tip\" dir=\"auto\">"));
    /// ```
    #[cfg_attr(feature = "bon", builder(default = true))]
    pub alerts: bool,

    /// Pipe tables.
    ///
    /// ```rust
    /// # use foldmark::{markdown_to_html, Options};
    /// let mut options = Options::default();
    /// options.extension.table = false;
    /// assert_eq!(markdown_to_html("| a |", &options), "<p>\n| a |\n</p>");
    /// ```
    #[cfg_attr(feature = "bon", builder(default = true))]
    pub table: bool,

    /// `~~text~~` renders as `<del>`.
    ///
    /// ```rust
    /// # use foldmark::{markdown_to_html, Options};
    /// assert_eq!(markdown_to_html("~~gone~~", &Options::default()),
    ///            "<p>\n<del>gone</del>\n</p>");
    /// ```
    #[cfg_attr(feature = "bon", builder(default = true))]
    pub strikethrough: bool,

    /// `__text__` renders as `<u>`.
    #[cfg_attr(feature = "bon", builder(default = true))]
    pub underline: bool,

    /// `@@#hex text@@` renders as a colored `<span>`.
    ///
    /// ```rust
    /// # use foldmark::{markdown_to_html, Options};
    /// assert_eq!(markdown_to_html("@@#00f blue@@", &Options::default()),
    ///            "<p>\n<span style=\"color:#00f\">blue</span>\n</p>");
    /// ```
    #[cfg_attr(feature = "bon", builder(default = true))]
    pub colored_text: bool,

    /// `%%#hex text%%` renders as a `<span>` with a background color.
    #[cfg_attr(feature = "bon", builder(default = true))]
    pub highlight: bool,
}

impl Default for Extension {
    fn default() -> Self {
        Extension {
            alerts: true,
            table: true,
            strikethrough: true,
            underline: true,
            colored_text: true,
            highlight: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "bon", derive(Builder))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
/// Options for parser functions.
pub struct Parse {
    /// Number of leading whitespace characters per list nesting level.
    /// Each whitespace character, tabs included, counts as one. Zero is
    /// treated as one.
    ///
    /// ```rust
    /// # use foldmark::{markdown_to_html, Options};
    /// let mut options = Options::default();
    /// options.parse.list_indent_width = 4;
    /// assert_eq!(markdown_to_html("- a\n  - b", &options),
    ///            "<ul>\n<li>a</li>\n<li>b</li>\n</ul>");
    /// ```
    #[cfg_attr(feature = "bon", builder(default = 2))]
    pub list_indent_width: usize,
}

impl Default for Parse {
    fn default() -> Self {
        Parse {
            list_indent_width: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "bon", derive(Builder))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
/// Options for formatter functions.
pub struct Render {
    /// Spaces of indentation per open heading section.
    #[cfg_attr(feature = "bon", builder(default = 2))]
    pub indent: usize,

    /// Render heading sections expanded (`<details open>`).
    ///
    /// ```rust
    /// # use foldmark::{markdown_to_html, Options};
    /// let mut options = Options::default();
    /// options.render.open_sections = true;
    /// assert_eq!(markdown_to_html("# Hi", &options),
    ///            "<details open style=\"margin-left:1em\">\n\
    ///             <summary><h1>Hi</h1></summary>\n  </details>");
    /// ```
    #[cfg_attr(feature = "bon", builder(default))]
    pub open_sections: bool,

    /// Color for `@@text@@` spans that name none.
    #[cfg_attr(feature = "bon", builder(default = String::from("#f00")))]
    pub default_text_color: String,

    /// Background for `%%text%%` spans that name none.
    #[cfg_attr(feature = "bon", builder(default = String::from("#FFA500")))]
    pub default_highlight_color: String,
}

impl Default for Render {
    fn default() -> Self {
        Render {
            indent: 2,
            open_sections: false,
            default_text_color: String::from("#f00"),
            default_highlight_color: String::from("#FFA500"),
        }
    }
}
