//! disco - Discord ANSI text generator CLI

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use disco::cli::{Cli, Commands, ConfigCommands};

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            text,
            template,
            tree,
            edits,
            raw,
            json,
            copy,
            preview,
        } => commands::encode::handle(commands::encode::EncodeArgs {
            text,
            template,
            tree,
            edits,
            raw,
            json,
            copy,
            preview,
        }),
        Commands::Templates => commands::templates::handle(),
        Commands::Palette => commands::palette::handle(),
        Commands::Theme { scheme } => commands::theme::handle(scheme),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Edit => commands::config::handle_edit(),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}

/// Log to stderr so stdout carries only the encoded message.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("DISCO_LOG").unwrap_or_else(|_| "disco=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
