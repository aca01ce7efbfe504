//! Clipboard operation errors.

/// Errors that can occur during clipboard operations.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Nothing to copy")]
    EmptyContent,

    #[error("No clipboard tool available. On Linux, install wl-copy, xclip, or xsel.")]
    NoToolAvailable,

    #[error("Platform not supported (only macOS and Linux)")]
    UnsupportedPlatform,
}
