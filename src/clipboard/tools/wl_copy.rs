//! Wayland wl-copy clipboard tool.

use super::{pipe_text, tool_exists};
use crate::clipboard::result::CopyMethod;
use crate::clipboard::tool::{CopyTool, CopyToolError};

/// Wayland clipboard tool using `wl-copy` from wl-clipboard.
///
/// Only offered when a Wayland session is detected, so X11 desktops that
/// happen to have wl-clipboard installed fall through to xclip/xsel.
pub struct WlCopy;

impl WlCopy {
    /// Create a new WlCopy tool.
    pub fn new() -> Self {
        Self
    }

    fn wayland_session() -> bool {
        std::env::var_os("WAYLAND_DISPLAY").is_some()
    }
}

impl CopyTool for WlCopy {
    fn method(&self) -> CopyMethod {
        CopyMethod::WlCopy
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && Self::wayland_session() && tool_exists("wl-copy")
    }

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
        pipe_text("wl-copy", &["--type", "text/plain"], text)
    }
}

impl Default for WlCopy {
    fn default() -> Self {
        Self::new()
    }
}
