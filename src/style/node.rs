//! Style tree nodes.

use serde::{Deserialize, Serialize};

use super::code::StyleCode;

/// A node of the style tree.
///
/// A document is a `Vec<StyleNode>`; spans own their children, so the
/// tree can never contain shared or cyclic nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StyleNode {
    /// A run of literal characters.
    Text { content: String },
    /// A styled range wrapping its children.
    Span {
        code: StyleCode,
        #[serde(default)]
        children: Vec<StyleNode>,
    },
    /// A hard line break, rendered as `\n`.
    LineBreak,
}

impl StyleNode {
    pub fn text(content: impl Into<String>) -> Self {
        StyleNode::Text {
            content: content.into(),
        }
    }

    pub fn span(code: StyleCode, children: Vec<StyleNode>) -> Self {
        StyleNode::Span { code, children }
    }

    /// Shorthand for a span wrapping a single text leaf.
    pub fn styled(code: StyleCode, content: impl Into<String>) -> Self {
        StyleNode::span(code, vec![StyleNode::text(content)])
    }

    /// Number of characters this node contributes to the flattened document.
    ///
    /// Line breaks count as one character.
    pub fn char_len(&self) -> usize {
        match self {
            StyleNode::Text { content } => content.chars().count(),
            StyleNode::Span { children, .. } => char_len(children),
            StyleNode::LineBreak => 1,
        }
    }

    pub fn is_leaf(&self) -> bool {
        !matches!(self, StyleNode::Span { .. })
    }

    fn write_plain(&self, out: &mut String) {
        match self {
            StyleNode::Text { content } => out.push_str(content),
            StyleNode::Span { children, .. } => {
                for child in children {
                    child.write_plain(out);
                }
            }
            StyleNode::LineBreak => out.push('\n'),
        }
    }
}

/// Total character count of a node list.
pub fn char_len(nodes: &[StyleNode]) -> usize {
    nodes.iter().map(StyleNode::char_len).sum()
}

/// The document text with all styling removed.
pub fn plain_text(nodes: &[StyleNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        node.write_plain(&mut out);
    }
    out
}

/// Concatenation of the `Text` leaves only, in document order.
pub fn leaf_text(nodes: &[StyleNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            StyleNode::Text { content } => out.push_str(content),
            StyleNode::Span { children, .. } => out.push_str(&leaf_text(children)),
            StyleNode::LineBreak => {}
        }
    }
    out
}

/// Build leaves from plain text, turning each `\n` into a [`StyleNode::LineBreak`].
pub fn from_plain(text: &str) -> Vec<StyleNode> {
    let mut nodes = Vec::new();
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            nodes.push(StyleNode::LineBreak);
        }
        if !line.is_empty() {
            nodes.push(StyleNode::text(line));
        }
    }
    nodes
}

/// Move every leaf out of `nodes`, dropping all span wrapping.
pub fn into_leaves(nodes: Vec<StyleNode>, out: &mut Vec<StyleNode>) {
    for node in nodes {
        match node {
            StyleNode::Span { children, .. } => into_leaves(children, out),
            leaf => out.push(leaf),
        }
    }
}

/// Merge adjacent text siblings and drop empty text leaves.
pub fn merge_text(nodes: Vec<StyleNode>) -> Vec<StyleNode> {
    let mut out: Vec<StyleNode> = Vec::with_capacity(nodes.len());
    for node in nodes {
        match node {
            StyleNode::Text { content } if content.is_empty() => {}
            StyleNode::Text { content } => match out.last_mut() {
                Some(StyleNode::Text { content: prev }) => prev.push_str(&content),
                _ => out.push(StyleNode::Text { content }),
            },
            other => out.push(other),
        }
    }
    out
}

/// Split `content` at a character offset.
pub(crate) fn split_chars(content: &str, at: usize) -> (&str, &str) {
    match content.char_indices().nth(at) {
        Some((byte, _)) => content.split_at(byte),
        None => (content, ""),
    }
}

/// Split a node list at a character offset.
///
/// Text leaves and spans straddling the offset are cut in two; a cut span
/// is duplicated with the same code on both sides.
pub(crate) fn split_nodes(nodes: Vec<StyleNode>, at: usize) -> (Vec<StyleNode>, Vec<StyleNode>) {
    let mut left = Vec::new();
    let mut right = Vec::new();
    let mut pos = 0;

    for node in nodes {
        let len = node.char_len();
        if pos + len <= at {
            left.push(node);
        } else if pos >= at {
            right.push(node);
        } else {
            match node {
                StyleNode::Text { content } => {
                    let (a, b) = split_chars(&content, at - pos);
                    left.push(StyleNode::text(a));
                    right.push(StyleNode::text(b));
                }
                StyleNode::Span { code, children } => {
                    let (a, b) = split_nodes(children, at - pos);
                    left.push(StyleNode::span(code, a));
                    right.push(StyleNode::span(code, b));
                }
                // A one character leaf cannot straddle an offset.
                StyleNode::LineBreak => right.push(node),
            }
        }
        pos += len;
    }

    (left, right)
}
