//! Style model errors.

/// Errors raised by style tree operations.
///
/// A failed operation never leaves a partially edited tree behind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    #[error("Selection {start}..{end} is outside the document ({len} characters)")]
    InvalidRange { start: usize, end: usize, len: usize },

    #[error("Unsupported style code {0}. Run 'disco palette' to see the available codes.")]
    UnsupportedStyleCode(u16),

    #[error("Unknown template '{0}'. Run 'disco templates' to see the available templates.")]
    UnknownTemplate(String),

    #[error("Malformed style tree: {0}")]
    MalformedTree(String),

    #[error("Invalid edit: {0}")]
    InvalidEdit(String),
}
