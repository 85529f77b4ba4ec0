//! The open block contexts tracked while converting a document.

pub use crate::parser::alert::{AlertType, NodeAlert};

/// The type of list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListType {
    /// A bullet list, i.e. an unordered list.
    #[default]
    Bullet,

    /// An ordered list.
    Ordered,
}

impl ListType {
    /// The container element's tag name.
    pub fn tag(&self) -> &'static str {
        match *self {
            ListType::Bullet => "ul",
            ListType::Ordered => "ol",
        }
    }
}

/// An open list container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeList {
    /// The kind of list.
    pub list_type: ListType,

    /// Nesting level, 1-based, derived from the items' indentation.
    pub level: usize,
}

/// An open heading section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeHeading {
    /// The level of the heading; from 1 to 6.
    pub level: usize,
}

/// State of fenced code handling.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FenceState {
    /// Lines are classified normally.
    #[default]
    Closed,

    /// Inside a fenced code block; lines are copied verbatim until the
    /// closing fence.
    Open {
        /// The info string following the opening fence, trimmed.
        info: String,
    },
}
