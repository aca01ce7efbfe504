//! Example documents.

use std::fmt;
use std::str::FromStr;

use super::code::StyleCode;
use super::error::StyleError;
use super::node::StyleNode;

/// Built-in example documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Template {
    /// Plain welcome line
    Welcome,
    /// The rainbow color codes written out
    Rainbow,
    /// A sentence to try bold and underline on
    Styled,
    /// Multi-line server rules
    Rules,
    /// A fully colored example with nested and sequential spans
    Colored,
}

impl Template {
    pub const ALL: [Template; 5] = [
        Template::Welcome,
        Template::Rainbow,
        Template::Styled,
        Template::Rules,
        Template::Colored,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Template::Welcome => "welcome",
            Template::Rainbow => "rainbow",
            Template::Styled => "styled",
            Template::Rules => "rules",
            Template::Colored => "colored",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Template::Welcome => "Welcome Message",
            Template::Rainbow => "Rainbow Text",
            Template::Styled => "Styled Message",
            Template::Rules => "Server Rules",
            Template::Colored => "Colored Example",
        }
    }

    /// Build the template's style tree.
    pub fn nodes(self) -> Vec<StyleNode> {
        match self {
            Template::Welcome => plain("Welcome to Discord Colored Text Generator!"),
            Template::Rainbow => plain("R:31 A:32 I:33 N:34 B:35 O:36 W:37"),
            Template::Styled => plain("This text has bold and underline sections!"),
            Template::Rules => {
                plain("SERVER RULES:\n1. Be respectful\n2. No spamming\n3. Have fun!")
            }
            Template::Colored => colored(),
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Template {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Template::ALL
            .into_iter()
            .find(|t| t.name() == wanted)
            .ok_or_else(|| StyleError::UnknownTemplate(s.to_string()))
    }
}

/// Replace a document with the named template.
pub fn load_template(name: &str) -> Result<Vec<StyleNode>, StyleError> {
    name.parse::<Template>().map(Template::nodes)
}

fn plain(text: &str) -> Vec<StyleNode> {
    vec![StyleNode::text(text)]
}

/// Each character of `word` in its own foreground span.
fn letters(word: &str, codes: &[u16]) -> Vec<StyleNode> {
    word.chars()
        .zip(codes.iter().cycle())
        .map(|(c, &code)| StyleNode::styled(StyleCode(code), c))
        .collect()
}

fn colored() -> Vec<StyleNode> {
    let mut nodes = vec![
        StyleNode::text("Welcome to "),
        StyleNode::styled(StyleCode(33), "Discord"),
        StyleNode::text(" "),
        StyleNode::span(
            StyleCode(45),
            vec![StyleNode::styled(StyleCode(37), "Colored")],
        ),
        StyleNode::text(" "),
    ];
    nodes.extend(letters("Text", &[31, 32, 33, 34]));
    nodes.push(StyleNode::text(" "));
    nodes.extend(letters("Generator!", &[35, 36, 37, 31, 32, 33, 34]));
    nodes
}
