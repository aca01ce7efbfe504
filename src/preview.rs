//! Terminal preview of a document.
//!
//! Approximates what Discord shows for an encoded block by painting each
//! text run with the palette's display colors in true color. Attribute
//! resolution follows the encoder: the innermost span of each kind wins and
//! spans with unrecognized codes are transparent.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
};

use crate::ansi::ActiveState;
use crate::style::{StyleCode, StyleNode};
use crate::theme::ColorScheme;

/// Render `nodes` as true-color terminal output.
pub fn render(nodes: &[StyleNode], scheme: ColorScheme) -> String {
    let mut buf = Vec::new();
    // Writes into a Vec<u8> cannot fail.
    let _ = render_to(&mut buf, nodes, scheme);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Render `nodes` into any writer, e.g. stdout.
pub fn render_to<W: Write>(out: &mut W, nodes: &[StyleNode], scheme: ColorScheme) -> io::Result<()> {
    render_nodes(out, nodes, ActiveState::default(), scheme)?;
    queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
    out.flush()
}

fn render_nodes<W: Write>(
    out: &mut W,
    nodes: &[StyleNode],
    state: ActiveState,
    scheme: ColorScheme,
) -> io::Result<()> {
    for node in nodes {
        match node {
            StyleNode::Text { content } => render_text(out, content, state, scheme)?,
            StyleNode::LineBreak => {
                queue!(out, SetAttribute(Attribute::Reset), ResetColor, Print('\n'))?;
            }
            StyleNode::Span { code, children } => {
                let inner = state.with(*code).unwrap_or(state);
                render_nodes(out, children, inner, scheme)?;
            }
        }
    }
    Ok(())
}

fn render_text<W: Write>(
    out: &mut W,
    content: &str,
    state: ActiveState,
    scheme: ColorScheme,
) -> io::Result<()> {
    let fg = state.fg.and_then(display_color).unwrap_or(rgb(scheme.text()));
    let bg = state.bg.and_then(display_color).unwrap_or(rgb(scheme.background()));

    queue!(
        out,
        SetAttribute(Attribute::Reset),
        SetForegroundColor(fg),
        SetBackgroundColor(bg)
    )?;
    match state.style {
        Some(StyleCode::BOLD) => queue!(out, SetAttribute(Attribute::Bold))?,
        Some(StyleCode::UNDERLINE) => queue!(out, SetAttribute(Attribute::Underlined))?,
        _ => {}
    }
    queue!(out, Print(content))
}

fn display_color(code: StyleCode) -> Option<Color> {
    code.swatch().and_then(|s| s.rgb).map(rgb)
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb { r, g, b }
}
