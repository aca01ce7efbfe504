//! Copy orchestrator for clipboard operations.

use tracing::{debug, warn};

use super::error::ClipboardError;
use super::result::CopyResult;
use super::tool::{CopyTool, CopyToolError};
use super::tools::platform_tools;

/// Orchestrates clipboard copy operations using available tools.
///
/// Tools are tried in priority order; the first one that succeeds wins.
pub struct Copy {
    tools: Vec<Box<dyn CopyTool>>,
}

impl Copy {
    /// Create with platform-appropriate tools.
    pub fn new() -> Self {
        Self {
            tools: platform_tools(),
        }
    }

    /// Create with specific tools (for testing).
    pub fn with_tools(tools: Vec<Box<dyn CopyTool>>) -> Self {
        Self { tools }
    }

    /// Get a reference to the tools list.
    pub fn tools(&self) -> &[Box<dyn CopyTool>] {
        &self.tools
    }

    /// Copy text to the clipboard.
    pub fn text(&self, text: &str) -> Result<CopyResult, ClipboardError> {
        if text.is_empty() {
            return Err(ClipboardError::EmptyContent);
        }
        if self.tools.is_empty() {
            return Err(ClipboardError::UnsupportedPlatform);
        }

        let mut last_error: Option<String> = None;
        for tool in &self.tools {
            if !tool.is_available() {
                debug!(tool = tool.name(), "Clipboard tool not available");
                continue;
            }
            match tool.try_copy_text(text) {
                Ok(()) => {
                    return Ok(CopyResult::new(tool.method(), text.len()));
                }
                Err(CopyToolError::NotFound) => continue,
                Err(CopyToolError::Failed(msg)) => {
                    warn!(tool = tool.name(), error = %msg, "Clipboard tool failed, trying next tool");
                    last_error = Some(msg);
                    continue;
                }
            }
        }

        if let Some(err) = last_error {
            warn!(error = %err, "All clipboard tools failed");
        }

        Err(ClipboardError::NoToolAvailable)
    }
}

impl Default for Copy {
    fn default() -> Self {
        Self::new()
    }
}
