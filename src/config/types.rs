//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::theme::ColorScheme;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Presentation settings owned by the editing surface
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Light or dark scheme for previews
    #[serde(default)]
    pub color_scheme: ColorScheme,
}

/// Export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Wrap the encoded text in a fenced ```ansi block
    #[serde(default = "default_fence")]
    pub fence: bool,
    /// Copy the result to the clipboard on every encode
    #[serde(default)]
    pub copy: bool,
}

pub fn default_fence() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            fence: default_fence(),
            copy: false,
        }
    }
}
