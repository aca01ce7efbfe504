//! Active SGR state during an encode.

use crate::style::{StyleCode, StyleKind};

/// Attributes in effect at a point of the tree walk.
///
/// `None` means the attribute was never set by an enclosing span; it is
/// written as the sentinel parameter `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveState {
    pub style: Option<StyleCode>,
    pub fg: Option<StyleCode>,
    pub bg: Option<StyleCode>,
}

impl ActiveState {
    /// The state inside a span with `code`, or `None` if the code is not
    /// one Discord understands.
    pub fn with(self, code: StyleCode) -> Option<ActiveState> {
        let mut next = self;
        match code.kind()? {
            StyleKind::Style => next.style = Some(code),
            StyleKind::Foreground => next.fg = Some(code),
            StyleKind::Background => next.bg = Some(code),
        }
        Some(next)
    }

    pub fn is_default(&self) -> bool {
        *self == ActiveState::default()
    }
}
