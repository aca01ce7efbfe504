//! Style codes and the Discord ANSI palette.
//!
//! Discord's `ansi` code blocks understand a small, fixed subset of SGR
//! parameters:
//! - 0: reset
//! - 1, 4: bold and underline
//! - 30-37: eight foreground colors
//! - 40-47: eight background colors
//!
//! Anything else is carried as a raw [`StyleCode`] so malformed trees can
//! still be encoded, but [`StyleCode::kind`] reports it as unrecognized.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::StyleError;

/// A single SGR parameter as used by Discord's ANSI renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleCode(pub u16);

/// Which attribute of the active state a code overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleKind {
    /// Text style: reset, bold or underline (codes below 30).
    Style,
    /// Foreground color (30-37).
    Foreground,
    /// Background color (40-47).
    Background,
}

impl StyleCode {
    pub const RESET: StyleCode = StyleCode(0);
    pub const BOLD: StyleCode = StyleCode(1);
    pub const UNDERLINE: StyleCode = StyleCode(4);

    /// Placeholder parameter emitted for an unset attribute.
    ///
    /// Not a meaningful SGR code, but Discord ignores it and the exported
    /// text must match what existing generators produce.
    pub const SENTINEL: u16 = 2;

    /// Classify the code, or `None` when it is outside the supported set.
    pub fn kind(self) -> Option<StyleKind> {
        match self.0 {
            0 | 1 | 4 => Some(StyleKind::Style),
            30..=37 => Some(StyleKind::Foreground),
            40..=47 => Some(StyleKind::Background),
            _ => None,
        }
    }

    pub fn is_supported(self) -> bool {
        self.kind().is_some()
    }

    pub fn is_reset(self) -> bool {
        self == Self::RESET
    }

    /// Palette entry for this code, if it has one.
    pub fn swatch(self) -> Option<&'static Swatch> {
        ALL_SWATCHES.iter().find(|s| s.code == self)
    }

    /// Look up a code by its kebab-case palette name (`gold`, `bg-blurple`).
    pub fn from_name(name: &str) -> Option<StyleCode> {
        let name = name.trim().to_ascii_lowercase();
        ALL_SWATCHES
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.code)
    }
}

impl fmt::Display for StyleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u16> for StyleCode {
    fn from(code: u16) -> Self {
        StyleCode(code)
    }
}

impl FromStr for StyleCode {
    type Err = StyleError;

    /// Accepts either a numeric code or a palette name.
    ///
    /// Unknown numbers parse fine; validation is left to the operation that
    /// uses the code so it can report `UnsupportedStyleCode`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<u16>() {
            return Ok(StyleCode(n));
        }
        StyleCode::from_name(s)
            .ok_or_else(|| StyleError::InvalidEdit(format!("unknown style '{}'", s)))
    }
}

/// One entry of the palette shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub code: StyleCode,
    /// Kebab-case name accepted on the command line.
    pub name: &'static str,
    /// Human readable label.
    pub label: &'static str,
    /// Approximate color Discord renders for this code, as `(r, g, b)`.
    /// `None` for text styles.
    pub rgb: Option<(u8, u8, u8)>,
}

impl Swatch {
    const fn style(code: u16, name: &'static str, label: &'static str) -> Self {
        Self {
            code: StyleCode(code),
            name,
            label,
            rgb: None,
        }
    }

    const fn color(code: u16, name: &'static str, label: &'static str, rgb: (u8, u8, u8)) -> Self {
        Self {
            code: StyleCode(code),
            name,
            label,
            rgb: Some(rgb),
        }
    }

    /// Display color as `#rrggbb`.
    pub fn hex(&self) -> Option<String> {
        self.rgb
            .map(|(r, g, b)| format!("#{:02x}{:02x}{:02x}", r, g, b))
    }
}

pub const STYLES: [Swatch; 3] = [
    Swatch::style(0, "reset", "Reset All"),
    Swatch::style(1, "bold", "Bold"),
    Swatch::style(4, "underline", "Underline"),
];

pub const FOREGROUND: [Swatch; 8] = [
    Swatch::color(30, "dark-gray", "Dark Gray (33%)", (0x4f, 0x54, 0x5c)),
    Swatch::color(31, "red", "Red", (0xdc, 0x32, 0x2f)),
    Swatch::color(32, "yellowish-green", "Yellowish Green", (0x85, 0x99, 0x00)),
    Swatch::color(33, "gold", "Gold", (0xb5, 0x89, 0x00)),
    Swatch::color(34, "light-blue", "Light Blue", (0x26, 0x8b, 0xd2)),
    Swatch::color(35, "pink", "Pink", (0xd3, 0x36, 0x82)),
    Swatch::color(36, "teal", "Teal", (0x2a, 0xa1, 0x98)),
    Swatch::color(37, "white", "White", (0xff, 0xff, 0xff)),
];

pub const BACKGROUND: [Swatch; 8] = [
    Swatch::color(40, "bg-blueish-black", "Blueish Black", (0x00, 0x2b, 0x36)),
    Swatch::color(41, "bg-rust-brown", "Rust Brown", (0xcb, 0x4b, 0x16)),
    Swatch::color(42, "bg-gray-40", "Gray (40%)", (0x58, 0x6e, 0x75)),
    Swatch::color(43, "bg-gray-45", "Gray (45%)", (0x65, 0x7b, 0x83)),
    Swatch::color(44, "bg-light-gray-55", "Light Gray (55%)", (0x83, 0x94, 0x96)),
    Swatch::color(45, "bg-blurple", "Blurple", (0x6c, 0x71, 0xc4)),
    Swatch::color(46, "bg-light-gray-60", "Light Gray (60%)", (0x93, 0xa1, 0xa1)),
    Swatch::color(47, "bg-cream-white", "Cream White", (0xfd, 0xf6, 0xe3)),
];

const ALL_SWATCHES: [Swatch; 19] = [
    STYLES[0],
    STYLES[1],
    STYLES[2],
    FOREGROUND[0],
    FOREGROUND[1],
    FOREGROUND[2],
    FOREGROUND[3],
    FOREGROUND[4],
    FOREGROUND[5],
    FOREGROUND[6],
    FOREGROUND[7],
    BACKGROUND[0],
    BACKGROUND[1],
    BACKGROUND[2],
    BACKGROUND[3],
    BACKGROUND[4],
    BACKGROUND[5],
    BACKGROUND[6],
    BACKGROUND[7],
];

/// Every supported code in palette order: styles, foregrounds, backgrounds.
pub fn swatches() -> &'static [Swatch] {
    &ALL_SWATCHES
}

/// Foreground cycle used by rainbow text.
pub const RAINBOW: [StyleCode; 7] = [
    StyleCode(31),
    StyleCode(33),
    StyleCode(32),
    StyleCode(36),
    StyleCode(34),
    StyleCode(35),
    StyleCode(37),
];
