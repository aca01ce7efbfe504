//! Linux xsel clipboard tool.

use super::{pipe_text, tool_exists};
use crate::clipboard::result::CopyMethod;
use crate::clipboard::tool::{CopyTool, CopyToolError};

/// Linux X11 clipboard tool using xsel, the fallback when xclip is missing.
pub struct Xsel;

impl Xsel {
    /// Create a new Xsel tool.
    pub fn new() -> Self {
        Self
    }
}

impl CopyTool for Xsel {
    fn method(&self) -> CopyMethod {
        CopyMethod::Xsel
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && tool_exists("xsel")
    }

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
        pipe_text("xsel", &["--clipboard", "--input"], text)
    }
}

impl Default for Xsel {
    fn default() -> Self {
        Self::new()
    }
}
