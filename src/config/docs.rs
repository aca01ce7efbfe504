//! Config field documentation, the single source of truth for descriptions.
//!
//! Used by:
//! - `disco config show` to annotate TOML output with inline comments
//! - `cargo xtask gen-docs` to generate the configuration reference

/// Documentation for a config section.
pub struct SectionDoc {
    /// TOML section name (e.g., "display", "output")
    pub name: &'static str,
    /// Human-readable description of the section
    pub description: &'static str,
    /// Fields in this section
    pub fields: &'static [FieldDoc],
}

/// Documentation for a config field.
pub struct FieldDoc {
    /// Field name as it appears in TOML
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Default value as a display string
    pub default_display: &'static str,
}

/// Config sections in canonical display order.
pub const CONFIG_SECTIONS: &[SectionDoc] = &[
    SectionDoc {
        name: "display",
        description: "Local presentation settings",
        fields: &[FieldDoc {
            name: "color_scheme",
            description: "Preview color scheme (light, dark)",
            default_display: "\"dark\"",
        }],
    },
    SectionDoc {
        name: "output",
        description: "Export settings",
        fields: &[
            FieldDoc {
                name: "fence",
                description: "Wrap output in a ```ansi code block",
                default_display: "true",
            },
            FieldDoc {
                name: "copy",
                description: "Copy output to the clipboard on every encode",
                default_display: "false",
            },
        ],
    },
];

fn section(name: &str) -> Option<&'static SectionDoc> {
    CONFIG_SECTIONS.iter().find(|s| s.name == name)
}

/// Add a `# description` comment above every documented section and field.
pub fn annotate(toml_str: &str) -> String {
    let mut out = String::new();
    let mut current: Option<&SectionDoc> = None;

    for line in toml_str.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('[') && !trimmed.starts_with("[[") {
            let name = trimmed.trim_matches(|c| c == '[' || c == ']').trim();
            current = section(name);
            if let Some(doc) = current {
                out.push_str(&format!("# {}\n", doc.description));
            }
        } else if let Some((key, _)) = trimmed.split_once('=') {
            let key = key.trim();
            if let Some(field) = current.and_then(|s| s.fields.iter().find(|f| f.name == key)) {
                out.push_str(&format!(
                    "# {} (default: {})\n",
                    field.description, field.default_display
                ));
            }
        }
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Render the configuration reference as markdown.
pub fn markdown() -> String {
    let mut out = String::from("# Configuration\n\nLocation: `~/.config/disco/config.toml`\n");
    for section in CONFIG_SECTIONS {
        out.push_str(&format!("\n## [{}]\n\n{}\n\n", section.name, section.description));
        out.push_str("| Field | Default | Description |\n|---|---|---|\n");
        for field in section.fields {
            out.push_str(&format!(
                "| `{}` | `{}` | {} |\n",
                field.name,
                field.default_display.replace('|', "\\|"),
                field.description
            ));
        }
    }
    out
}
