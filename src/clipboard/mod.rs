//! Clipboard operations for exported messages.
//!
//! Shells out to the platform's clipboard tool: `pbcopy` on macOS,
//! `wl-copy`, `xclip` or `xsel` on Linux.
//!
//! # Example
//!
//! ```ignore
//! use disco::clipboard::copy_text_to_clipboard;
//!
//! let result = copy_text_to_clipboard("```ansi\nhello\n```")?;
//! println!("{}", result.message());
//! ```

pub mod copy;
mod error;
mod result;
pub mod tool;
pub mod tools;

pub use error::ClipboardError;
pub use result::{CopyMethod, CopyResult};

use copy::Copy;

/// Copy text to the system clipboard.
///
/// # Errors
/// - `ClipboardError::EmptyContent` - nothing to copy
/// - `ClipboardError::NoToolAvailable` - no clipboard tool found
/// - `ClipboardError::UnsupportedPlatform` - no known tools for this OS
pub fn copy_text_to_clipboard(text: &str) -> Result<CopyResult, ClipboardError> {
    Copy::new().text(text)
}
