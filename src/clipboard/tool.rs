//! Clipboard tool abstraction.

use super::result::CopyMethod;

/// Why a single tool could not copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyToolError {
    /// The tool is not installed.
    NotFound,
    /// The tool ran but reported failure.
    Failed(String),
}

/// A command-line clipboard tool.
pub trait CopyTool {
    /// Which tool this is.
    fn method(&self) -> CopyMethod;

    /// Whether the tool can be used on this machine.
    fn is_available(&self) -> bool;

    /// Put `text` on the clipboard.
    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError>;

    /// Tool name for log messages.
    fn name(&self) -> &'static str {
        self.method().name()
    }
}
