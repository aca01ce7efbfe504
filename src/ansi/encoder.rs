//! Style tree to ANSI encoder.
//!
//! Every recognized span opens with `ESC[<style>;<color>m` and closes with
//! `ESC[0m`. Discord has no way to pop a single attribute, so after the
//! reset the parent's foreground and background are written again, each as
//! its own sequence. When both are set that produces two sequences where
//! one would do; existing generators emit the same bytes, so the output is
//! kept identical.

use std::fmt::Write;

use tracing::trace;

use super::state::ActiveState;
use crate::style::{StyleCode, StyleKind, StyleNode};

/// Full SGR reset.
pub const RESET: &str = "\x1b[0m";

/// Encode a node list into Discord ANSI text.
pub fn encode(nodes: &[StyleNode]) -> String {
    let mut out = String::new();
    encode_nodes(nodes, ActiveState::default(), &mut out);
    out
}

/// Encode `nodes` under the state of their enclosing span.
///
/// The state travels down the call stack by value, so a sibling always sees
/// its parent's state no matter how deep the previous sibling went.
fn encode_nodes(nodes: &[StyleNode], parent: ActiveState, out: &mut String) {
    for node in nodes {
        match node {
            StyleNode::Text { content } => out.push_str(content),
            StyleNode::LineBreak => out.push('\n'),
            StyleNode::Span { code, children } => match parent.with(*code) {
                Some(state) => encode_span(*code, children, parent, state, out),
                None => {
                    trace!(code = code.0, "Passing through span with unrecognized code");
                    encode_nodes(children, parent, out);
                }
            },
        }
    }
}

fn encode_span(
    code: StyleCode,
    children: &[StyleNode],
    parent: ActiveState,
    state: ActiveState,
    out: &mut String,
) {
    let color = if code.kind() == Some(StyleKind::Background) {
        state.bg
    } else {
        state.fg
    };
    push_sgr(out, state.style, color);

    encode_nodes(children, state, out);

    out.push_str(RESET);
    if parent.fg.is_some() {
        push_sgr(out, parent.style, parent.fg);
    }
    if parent.bg.is_some() {
        push_sgr(out, parent.style, parent.bg);
    }
}

/// Write `ESC[<style>;<color>m`, using the sentinel for unset fields.
fn push_sgr(out: &mut String, style: Option<StyleCode>, color: Option<StyleCode>) {
    let param = |code: Option<StyleCode>| code.map_or(StyleCode::SENTINEL, |c| c.0);
    // Writing to a String cannot fail.
    let _ = write!(out, "\x1b[{};{}m", param(style), param(color));
}
