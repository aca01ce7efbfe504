//! An editing session's document.
//!
//! [`Document`] owns the style tree for one session and applies selection
//! edits in place. Every edit is all-or-nothing: when it fails the tree is
//! left exactly as it was.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use crate::ansi;
use crate::style::{self, node, StyleCode, StyleError, StyleNode, Template};

/// The style tree being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    nodes: Vec<StyleNode>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_nodes(nodes: Vec<StyleNode>) -> Self {
        Self { nodes }
    }

    /// Unstyled document; `\n` becomes a line break.
    pub fn from_plain(text: &str) -> Self {
        Self::from_nodes(node::from_plain(text))
    }

    pub fn from_template(template: Template) -> Self {
        Self::from_nodes(template.nodes())
    }

    /// Parse a tree previously written by [`Document::to_json`].
    pub fn from_json(json: &str) -> Result<Self, StyleError> {
        serde_json::from_str(json)
            .map(Self::from_nodes)
            .map_err(|e| StyleError::MalformedTree(e.to_string()))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.nodes)
    }

    pub fn nodes(&self) -> &[StyleNode] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<StyleNode> {
        self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Length of the flattened document in characters.
    pub fn char_count(&self) -> usize {
        node::char_len(&self.nodes)
    }

    pub fn plain_text(&self) -> String {
        node::plain_text(&self.nodes)
    }

    pub fn apply_style(&mut self, range: Range<usize>, code: StyleCode) -> Result<(), StyleError> {
        self.nodes = style::apply_style(&self.nodes, range, code)?;
        Ok(())
    }

    pub fn apply_rainbow(&mut self, range: Range<usize>) -> Result<(), StyleError> {
        self.nodes = style::apply_rainbow(&self.nodes, range)?;
        Ok(())
    }

    /// Replace the whole document with a template.
    pub fn load_template(&mut self, name: &str) -> Result<(), StyleError> {
        self.nodes = style::load_template(name)?;
        Ok(())
    }

    pub fn apply_edit(&mut self, edit: &Edit) -> Result<(), StyleError> {
        match edit.action {
            EditAction::Style(code) => self.apply_style(edit.range.clone(), code),
            EditAction::Rainbow => self.apply_rainbow(edit.range.clone()),
        }
    }

    /// The encoded body without the code fence.
    pub fn encode(&self) -> String {
        ansi::encode(&self.nodes)
    }

    pub fn to_discord_block(&self) -> String {
        ansi::to_discord_block(&self.nodes)
    }
}

/// What an [`Edit`] does to its selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    Style(StyleCode),
    Rainbow,
}

/// A selection plus the action to apply to it.
///
/// Written as `START..END=ACTION`, where ACTION is a style code (`33`), a
/// palette name (`gold`, `bg-blurple`, `bold`, `reset`) or `rainbow`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub range: Range<usize>,
    pub action: EditAction,
}

impl Edit {
    pub fn style(range: Range<usize>, code: StyleCode) -> Self {
        Self {
            range,
            action: EditAction::Style(code),
        }
    }

    pub fn rainbow(range: Range<usize>) -> Self {
        Self {
            range,
            action: EditAction::Rainbow,
        }
    }
}

impl FromStr for Edit {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |why: &str| StyleError::InvalidEdit(format!("'{}': {}", s, why));

        let (range, action) = s
            .split_once('=')
            .ok_or_else(|| invalid("expected START..END=ACTION"))?;
        let (start, end) = range
            .split_once("..")
            .ok_or_else(|| invalid("expected a range like 0..5"))?;
        let start: usize = start
            .trim()
            .parse()
            .map_err(|_| invalid("range start is not a number"))?;
        let end: usize = end
            .trim()
            .parse()
            .map_err(|_| invalid("range end is not a number"))?;

        let action = match action.trim().to_ascii_lowercase().as_str() {
            "rainbow" => EditAction::Rainbow,
            other => EditAction::Style(other.parse()?),
        };

        Ok(Edit {
            range: start..end,
            action,
        })
    }
}

impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}=", self.range.start, self.range.end)?;
        match self.action {
            EditAction::Style(code) => write!(f, "{}", code),
            EditAction::Rainbow => f.write_str("rainbow"),
        }
    }
}
