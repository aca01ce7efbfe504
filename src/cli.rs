//! CLI definitions for disco
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages, markdown).

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

use crate::document::Edit;
use crate::style::Template;
use crate::theme::ColorScheme;

/// Build clap styles for help output.
///
/// - Blue: headers, usage, command names (Discord's accent)
/// - White: descriptions, placeholders
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Blue.on_default() | Effects::BOLD)
        .usage(AnsiColor::Blue.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "disco")]
#[command(about = "[ disco ] - colored text for Discord messages")]
#[command(
    long_about = "disco - build colored Discord messages with ANSI code blocks.

Discord renders a ```ansi code block with a small set of SGR codes:
bold and underline, eight text colors and eight background colors.
disco styles character ranges of your text and prints the block ready
to paste.

QUICK START:
    disco encode \"Hello world\" --apply 0..5=gold
    disco encode --template colored --copy
    disco encode \"Party time\" --apply 0..10=rainbow --preview
    disco palette                    List codes and names
    disco templates                  List starter templates"
)]
#[command(version = VERSION)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Version string: the package version, plus the git SHA on dev builds.
#[cfg(feature = "release")]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version string: the package version, plus the git SHA on dev builds.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ")"
);

#[derive(Subcommand)]
pub enum Commands {
    /// Style text and print a Discord ANSI code block
    #[command(long_about = "Build a document, apply edits and print the encoded result.

The document comes from TEXT, from standard input when TEXT is omitted,
from a template (--template) or from a saved style tree (--tree).
Newlines in the text become line breaks.

Each --apply edit is START..END=ACTION over character offsets of the
whole document (line breaks count as one character). ACTION is a style
code (33), a palette name (gold, bg-blurple, bold, underline, reset)
or rainbow. Edits run in the order given.

EXAMPLES:
    disco encode \"Hello world\" --apply 0..5=33
    disco encode \"Hello world\" --apply 0..5=bold --apply 6..11=bg-blurple
    disco encode --template rules --apply 0..12=underline --raw
    echo \"stdin works too\" | disco encode --apply 0..5=rainbow
    disco encode \"Saved\" --apply 0..5=red --json > tree.json
    disco encode --tree tree.json --copy")]
    Encode {
        /// Text to style (reads stdin when omitted)
        #[arg(help = "Text to style (reads stdin when omitted)")]
        text: Option<String>,
        /// Start from a template instead of text
        #[arg(long, short, value_enum, conflicts_with_all = ["text", "tree"])]
        template: Option<Template>,
        /// Start from a style tree saved with --json
        #[arg(long, value_name = "FILE", conflicts_with = "text")]
        tree: Option<PathBuf>,
        /// Edit to apply, as START..END=ACTION (repeatable)
        #[arg(long = "apply", short = 'a', value_name = "EDIT")]
        edits: Vec<Edit>,
        /// Print the encoded text without the code fence
        #[arg(long, conflicts_with = "json")]
        raw: bool,
        /// Print the style tree as JSON
        #[arg(long)]
        json: bool,
        /// Copy the code block to the clipboard
        #[arg(long, short)]
        copy: bool,
        /// Render a color preview in the terminal
        #[arg(long, short)]
        preview: bool,
    },

    /// List available templates
    #[command(long_about = "List the built-in starter templates.

Load one with 'disco encode --template NAME'.

EXAMPLE:
    disco templates")]
    Templates,

    /// List style codes with their names and colors
    #[command(long_about = "List every supported style code.

Shows the numeric code, the name accepted by --apply and the color
Discord displays it with.

EXAMPLE:
    disco palette")]
    Palette,

    /// Set or toggle the preview color scheme
    #[command(long_about = "Set the light or dark color scheme used by --preview.

Without an argument the scheme toggles. The choice is saved in
~/.config/disco/config.toml.

EXAMPLES:
    disco theme           Toggle between light and dark
    disco theme light     Switch to light")]
    Theme {
        /// Scheme to switch to (toggles when omitted)
        #[arg(value_enum)]
        scheme: Option<ColorScheme>,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    #[command(long_about = "Generate shell completion scripts.

EXAMPLES:
    disco completions --shell bash > ~/.local/share/bash-completion/completions/disco
    disco completions --shell zsh > ~/.zfunc/_disco")]
    Completions {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    #[command(long_about = "Display the current configuration in TOML format.

Every setting is printed with a comment describing it and its default.

EXAMPLE:
    disco config show")]
    Show,
    /// Open configuration file in your default editor
    #[command(long_about = "Open the configuration file in your default editor.

Uses the $EDITOR environment variable (defaults to 'vi').
Config file location: ~/.config/disco/config.toml

EXAMPLE:
    disco config edit
    EDITOR=nano disco config edit")]
    Edit,
}
