//! Clipboard copy results.

/// The tool that performed a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    Pbcopy,
    WlCopy,
    Xclip,
    Xsel,
}

impl CopyMethod {
    /// Command name of the tool.
    pub fn name(&self) -> &'static str {
        match self {
            CopyMethod::Pbcopy => "pbcopy",
            CopyMethod::WlCopy => "wl-copy",
            CopyMethod::Xclip => "xclip",
            CopyMethod::Xsel => "xsel",
        }
    }
}

/// Outcome of a successful copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyResult {
    pub tool: CopyMethod,
    pub size_bytes: usize,
}

impl CopyResult {
    pub fn new(tool: CopyMethod, size_bytes: usize) -> Self {
        Self { tool, size_bytes }
    }

    /// User-facing confirmation message.
    pub fn message(&self) -> String {
        format!(
            "Copied {} bytes to clipboard ({})",
            self.size_bytes,
            self.tool.name()
        )
    }
}
