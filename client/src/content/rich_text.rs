//! Structured inline formatting for guide text.
//!
//! A closed set of node types replaces markup strings: emphasis, inline code,
//! and simple bullet lists. Components map each node to an element.

#[cfg(test)]
#[path = "rich_text_test.rs"]
mod rich_text_test;

/// A run of inline text with at most one formatting attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Inline {
    /// Unformatted text.
    Text(&'static str),
    /// Emphasised text, rendered as `<strong>`.
    Strong(&'static str),
    /// Monospace code span, rendered as `<code>`.
    Code(&'static str),
}

#[cfg(test)]
impl Inline {
    /// The raw text of this node without formatting.
    pub(crate) fn text(&self) -> &'static str {
        match *self {
            Self::Text(t) | Self::Strong(t) | Self::Code(t) => t,
        }
    }
}

/// A sequence of inline nodes forming one line or sentence group.
pub type RichText = &'static [Inline];

/// A block-level element within a step description.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Block {
    Paragraph(RichText),
    /// Unordered list; each item is its own inline run.
    List(&'static [RichText]),
}

#[cfg(test)]
impl Block {
    /// Concatenated plain text of the block. List items are joined by newlines.
    pub(crate) fn plain_text(&self) -> String {
        match self {
            Self::Paragraph(inlines) => plain_text(inlines),
            Self::List(items) => items
                .iter()
                .map(|item| plain_text(item))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Concatenate the text of every inline node.
#[cfg(test)]
pub(crate) fn plain_text(inlines: &[Inline]) -> String {
    inlines.iter().map(Inline::text).collect()
}
