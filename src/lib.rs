//! Discord ANSI text generator library.
//!
//! Builds styled messages as a tree of [`StyleNode`]s, applies styles to
//! character selections, and encodes the result as the ANSI escape text
//! Discord renders inside a fenced `ansi` code block.

pub mod ansi;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod document;
pub mod preview;
pub mod style;
pub mod theme;

pub use ansi::{discord_block, encode, to_discord_block};
pub use config::Config;
pub use document::{Document, Edit, EditAction};
pub use style::{
    apply_rainbow, apply_style, load_template, StyleCode, StyleError, StyleKind, StyleNode,
    Template,
};
pub use theme::ColorScheme;
