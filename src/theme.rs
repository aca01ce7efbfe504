//! Light/dark presentation scheme.
//!
//! The scheme only affects how a document is previewed locally. It is
//! persisted in the config file and has no influence on the encoded output.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Editor color scheme.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    #[default]
    Dark,
}

impl ColorScheme {
    /// The other scheme.
    pub fn toggled(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    /// Editor background as `(r, g, b)`.
    pub fn background(self) -> (u8, u8, u8) {
        match self {
            ColorScheme::Light => (0xf8, 0xf9, 0xfa),
            ColorScheme::Dark => (0x1a, 0x1b, 0x1e),
        }
    }

    /// Default text color as `(r, g, b)`.
    pub fn text(self) -> (u8, u8, u8) {
        match self {
            ColorScheme::Light => (0x00, 0x00, 0x00),
            ColorScheme::Dark => (0xff, 0xff, 0xff),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
