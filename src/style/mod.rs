//! Styled text model.
//!
//! A document is an ordered list of [`StyleNode`]s. Text and line breaks are
//! leaves; a [`StyleNode::Span`] applies one [`StyleCode`] to everything it
//! wraps. Edits in [`edit`] operate on character selections and return a
//! new tree.

pub mod code;
pub mod edit;
mod error;
pub mod node;
pub mod template;

pub use code::{StyleCode, StyleKind, Swatch, RAINBOW};
pub use edit::{apply_rainbow, apply_style};
pub use error::StyleError;
pub use node::StyleNode;
pub use template::{load_template, Template};
