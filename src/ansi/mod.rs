//! Discord ANSI output.
//!
//! [`encode`] turns a style tree into text with SGR escape sequences;
//! [`discord_block`] wraps that text in the fenced `ansi` code block Discord
//! renders in color.

pub mod encoder;
pub mod state;

pub use encoder::{encode, RESET};
pub use state::ActiveState;

use crate::style::StyleNode;

/// Info string that turns on ANSI rendering in a Discord code block.
pub const FENCE_LANG: &str = "ansi";

/// Wrap an encoded body in a fenced Discord code block.
pub fn discord_block(body: &str) -> String {
    format!("```{}\n{}\n```", FENCE_LANG, body)
}

/// Encode `nodes` and wrap the result, ready to paste into Discord.
pub fn to_discord_block(nodes: &[StyleNode]) -> String {
    discord_block(&encode(nodes))
}
