//! Style tree edits driven by a character selection.
//!
//! Selections are `start..end` character offsets over the flattened
//! document, where a line break counts as one character. Edits are pure:
//! they read the current tree and return a new one, so a failed edit can
//! never leave a half-styled document behind.
//!
//! New spans are always placed directly around leaves, below any span that
//! already encloses them. The encoder lets the innermost attribute of each
//! kind win, so re-coloring a range replaces its color instead of stacking
//! under the old one.

use std::ops::Range;

use tracing::debug;

use super::code::{StyleCode, StyleKind, RAINBOW};
use super::error::StyleError;
use super::node::{self, split_chars, split_nodes, StyleNode};

/// Apply `code` to the selected characters.
///
/// Code 0 is a structural reset: every span enclosing the selection is cut
/// away and the selected characters become bare text. An empty selection
/// returns the tree unchanged.
pub fn apply_style(
    nodes: &[StyleNode],
    range: Range<usize>,
    code: StyleCode,
) -> Result<Vec<StyleNode>, StyleError> {
    let kind = code.kind().ok_or(StyleError::UnsupportedStyleCode(code.0))?;
    if range.is_empty() {
        return Ok(nodes.to_vec());
    }
    check_range(nodes, &range)?;

    let result = if code.is_reset() {
        reset(nodes.to_vec(), &range)
    } else {
        let mut wrapper = Uniform { code, kind };
        wrap_selection(nodes.to_vec(), &range, &mut wrapper)
    };
    debug!(
        start = range.start,
        end = range.end,
        code = code.0,
        nodes = result.len(),
        "Applied style"
    );
    Ok(result)
}

/// Give each selected character its own foreground span, cycling through
/// [`RAINBOW`].
///
/// Line breaks inside the selection are kept as they are and do not use up
/// a color.
pub fn apply_rainbow(nodes: &[StyleNode], range: Range<usize>) -> Result<Vec<StyleNode>, StyleError> {
    if range.is_empty() {
        return Ok(nodes.to_vec());
    }
    check_range(nodes, &range)?;

    let mut wrapper = Rainbow { index: 0 };
    let result = wrap_selection(nodes.to_vec(), &range, &mut wrapper);
    debug!(
        start = range.start,
        end = range.end,
        colors = wrapper.index,
        "Applied rainbow"
    );
    Ok(result)
}

fn check_range(nodes: &[StyleNode], range: &Range<usize>) -> Result<(), StyleError> {
    let len = node::char_len(nodes);
    if range.start > range.end || range.end > len {
        return Err(StyleError::InvalidRange {
            start: range.start,
            end: range.end,
            len,
        });
    }
    Ok(())
}

/// Cut the selection out of every enclosing span and splice its leaves back
/// in as bare nodes.
fn reset(nodes: Vec<StyleNode>, range: &Range<usize>) -> Vec<StyleNode> {
    let (before, rest) = split_nodes(nodes, range.start);
    let (inside, after) = split_nodes(rest, range.end - range.start);

    let mut out = before;
    node::into_leaves(inside, &mut out);
    out.extend(after);
    node::merge_text(out)
}

/// How a run of selected leaves gets wrapped.
trait Wrapper {
    /// The attribute kind this wrapper sets.
    fn kind(&self) -> StyleKind;

    /// Wrap `run` and append the result to `out`.
    fn wrap(&mut self, run: Vec<StyleNode>, out: &mut Vec<StyleNode>);
}

/// Wraps each contiguous run in a single span.
struct Uniform {
    code: StyleCode,
    kind: StyleKind,
}

impl Wrapper for Uniform {
    fn kind(&self) -> StyleKind {
        self.kind
    }

    fn wrap(&mut self, run: Vec<StyleNode>, out: &mut Vec<StyleNode>) {
        out.push(StyleNode::span(self.code, run));
    }
}

/// Wraps every character in its own span, continuing the color cycle across
/// runs.
struct Rainbow {
    index: usize,
}

impl Wrapper for Rainbow {
    fn kind(&self) -> StyleKind {
        StyleKind::Foreground
    }

    fn wrap(&mut self, run: Vec<StyleNode>, out: &mut Vec<StyleNode>) {
        for leaf in run {
            match leaf {
                StyleNode::Text { content } => {
                    for c in content.chars() {
                        let code = RAINBOW[self.index % RAINBOW.len()];
                        out.push(StyleNode::styled(code, c));
                        self.index += 1;
                    }
                }
                other => out.push(other),
            }
        }
    }
}

fn wrap_selection<W: Wrapper>(
    nodes: Vec<StyleNode>,
    range: &Range<usize>,
    wrapper: &mut W,
) -> Vec<StyleNode> {
    let mut cursor = 0;
    wrap_list(nodes, range, &mut cursor, wrapper)
}

/// Wrap the selected part of one sibling list.
fn wrap_list<W: Wrapper>(
    nodes: Vec<StyleNode>,
    range: &Range<usize>,
    cursor: &mut usize,
    wrapper: &mut W,
) -> Vec<StyleNode> {
    let mut builder = RunBuilder::default();
    builder.visit(nodes, range, cursor, wrapper);
    builder.finish(wrapper)
}

/// Accumulates output siblings plus the run of selected leaves that has
/// not been wrapped yet.
#[derive(Default)]
struct RunBuilder {
    out: Vec<StyleNode>,
    run: Vec<StyleNode>,
}

impl RunBuilder {
    fn flush<W: Wrapper>(&mut self, wrapper: &mut W) {
        if !self.run.is_empty() {
            let run = std::mem::take(&mut self.run);
            wrapper.wrap(run, &mut self.out);
        }
    }

    fn push<W: Wrapper>(&mut self, node: StyleNode, wrapper: &mut W) {
        self.flush(wrapper);
        self.out.push(node);
    }

    fn finish<W: Wrapper>(mut self, wrapper: &mut W) -> Vec<StyleNode> {
        self.flush(wrapper);
        self.out
    }

    fn visit<W: Wrapper>(
        &mut self,
        nodes: Vec<StyleNode>,
        range: &Range<usize>,
        cursor: &mut usize,
        wrapper: &mut W,
    ) {
        for node in nodes {
            let start = *cursor;
            let len = node.char_len();
            let end = start + len;

            if len == 0 || end <= range.start || start >= range.end {
                self.push(node, wrapper);
                *cursor = end;
                continue;
            }
            let covered = range.start <= start && end <= range.end;

            match node {
                StyleNode::Text { content } if !covered => {
                    let from = range.start.saturating_sub(start);
                    let to = range.end.min(end) - start;
                    let (head, rest) = split_chars(&content, from);
                    let (inside, tail) = split_chars(rest, to - from);
                    if !head.is_empty() {
                        self.push(StyleNode::text(head), wrapper);
                    }
                    self.run.push(StyleNode::text(inside));
                    if !tail.is_empty() {
                        self.push(StyleNode::text(tail), wrapper);
                    }
                    *cursor = end;
                }
                StyleNode::Span { code, children } => {
                    if covered && code.kind() == Some(wrapper.kind()) {
                        // Fully overridden, so the old wrapper can go and
                        // its children join the current run.
                        self.visit(children, range, cursor, wrapper);
                    } else {
                        self.flush(wrapper);
                        let children = wrap_list(children, range, cursor, wrapper);
                        self.out.push(StyleNode::span(code, children));
                    }
                }
                leaf => {
                    self.run.push(leaf);
                    *cursor = end;
                }
            }
        }
    }
}
