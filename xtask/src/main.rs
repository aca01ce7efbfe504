//! xtask - Build tasks for disco
//!
//! Run with: cargo xtask <command>
//!
//! Commands:
//! - gen-docs: Generate documentation (man pages, COMMANDS.md, CONFIG.md)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Command, CommandFactory, Parser, Subcommand};

use disco::cli::Cli;
use disco::config::docs;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for disco")]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Subcommand)]
enum XtaskCommand {
    /// Generate documentation from CLI definitions
    #[command(name = "gen-docs")]
    GenDocs {
        /// Output directory (default: docs/)
        #[arg(long, short, default_value = "docs")]
        output: PathBuf,

        /// Generate man pages
        #[arg(long)]
        man: bool,

        /// Generate COMMANDS.md
        #[arg(long)]
        markdown: bool,

        /// Generate CONFIG.md
        #[arg(long)]
        config: bool,

        /// Generate all formats (default if no specific format is specified)
        #[arg(long)]
        all: bool,
    },
}

fn main() -> Result<()> {
    let args = Xtask::parse();

    match args.command {
        XtaskCommand::GenDocs {
            output,
            man,
            markdown,
            config,
            all,
        } => {
            // If no specific format is specified, generate all
            let gen_all = all || (!man && !markdown && !config);

            if gen_all || man {
                generate_man_pages(&output)?;
            }
            if gen_all || markdown {
                generate_markdown(&output)?;
            }
            if gen_all || config {
                generate_config_reference(&output)?;
            }
        }
    }

    Ok(())
}

/// Generate man pages using clap_mangen
fn generate_man_pages(output: &Path) -> Result<()> {
    let man_dir = output.join("man");
    fs::create_dir_all(&man_dir).context("Failed to create man directory")?;

    let cmd = Cli::command();
    write_man_page(&man_dir, "disco", &cmd)?;

    for subcommand in cmd.get_subcommands().filter(|c| !c.is_hide_set()) {
        let name = format!("disco-{}", subcommand.get_name());
        write_man_page(&man_dir, &name, subcommand)?;

        for nested in subcommand.get_subcommands().filter(|c| !c.is_hide_set()) {
            write_man_page(&man_dir, &format!("{}-{}", name, nested.get_name()), nested)?;
        }
    }

    println!("Man pages generated in {}", man_dir.display());
    Ok(())
}

fn write_man_page(dir: &Path, name: &str, cmd: &Command) -> Result<()> {
    let man = clap_mangen::Man::new(cmd.clone());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    let path = dir.join(format!("{}.1", name));
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Generated: {}", path.display());
    Ok(())
}

/// Generate COMMANDS.md markdown documentation
fn generate_markdown(output: &Path) -> Result<()> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let cmd = Cli::command();
    let mut markdown = String::new();

    markdown.push_str("# disco Command Reference\n\n");
    markdown.push_str("This document is auto-generated from the CLI definitions.\n\n");
    markdown.push_str("## Table of Contents\n\n");
    for subcommand in cmd.get_subcommands().filter(|c| !c.is_hide_set()) {
        let name = subcommand.get_name();
        markdown.push_str(&format!("- [{}](#disco-{})\n", name, name));
    }
    markdown.push_str("\n---\n\n");

    markdown.push_str("## disco\n\n");
    if let Some(about) = cmd.get_about() {
        markdown.push_str(&format!("{}\n\n", about));
    }
    if let Some(long_about) = cmd.get_long_about() {
        markdown.push_str(&format!("```\n{}\n```\n\n", long_about));
    }

    for subcommand in cmd.get_subcommands().filter(|c| !c.is_hide_set()) {
        let name = subcommand.get_name();
        markdown.push_str(&format!("## disco {}\n\n", name));
        if let Some(about) = subcommand.get_about() {
            markdown.push_str(&format!("{}\n\n", about));
        }

        push_arguments(&mut markdown, subcommand, "###");

        if let Some(long_about) = subcommand.get_long_about() {
            markdown.push_str("### Description\n\n");
            markdown.push_str(&format!("```\n{}\n```\n\n", long_about));
        }

        let nested: Vec<_> = subcommand
            .get_subcommands()
            .filter(|c| !c.is_hide_set())
            .collect();
        if !nested.is_empty() {
            markdown.push_str("### Subcommands\n\n");
            for nested_cmd in nested {
                markdown.push_str(&format!("#### disco {} {}\n\n", name, nested_cmd.get_name()));
                if let Some(about) = nested_cmd.get_about() {
                    markdown.push_str(&format!("{}\n\n", about));
                }
                push_arguments(&mut markdown, nested_cmd, "#####");
            }
        }

        markdown.push_str("---\n\n");
    }

    let path = output.join("COMMANDS.md");
    fs::write(&path, markdown)?;
    println!("Generated: {}", path.display());
    Ok(())
}

/// Append the positional arguments and options of `cmd`.
fn push_arguments(markdown: &mut String, cmd: &Command, heading: &str) {
    let args: Vec<_> = cmd
        .get_arguments()
        .filter(|a| {
            let id = a.get_id().as_str();
            id != "help" && id != "version"
        })
        .collect();

    let positional: Vec<_> = args.iter().filter(|a| a.is_positional()).collect();
    if !positional.is_empty() {
        markdown.push_str(&format!("{} Arguments\n\n", heading));
        for arg in positional {
            markdown.push_str(&format!("- `<{}>`: ", arg.get_id().as_str().to_uppercase()));
            if let Some(help) = arg.get_help() {
                markdown.push_str(&help.to_string());
            }
            markdown.push('\n');
        }
        markdown.push('\n');
    }

    let options: Vec<_> = args.iter().filter(|a| !a.is_positional()).collect();
    if !options.is_empty() {
        markdown.push_str(&format!("{} Options\n\n", heading));
        for arg in options {
            let long = arg.get_long().map(|l| format!("--{}", l));
            let short = arg.get_short().map(|s| format!("-{}", s));
            let flag = match (long, short) {
                (Some(l), Some(s)) => format!("{}, {}", s, l),
                (Some(l), None) => l,
                (None, Some(s)) => s,
                _ => continue,
            };
            markdown.push_str(&format!("- `{}`: ", flag));
            if let Some(help) = arg.get_help() {
                markdown.push_str(&help.to_string());
            }
            markdown.push('\n');
        }
        markdown.push('\n');
    }
}

/// Generate CONFIG.md from the config field documentation
fn generate_config_reference(output: &Path) -> Result<()> {
    fs::create_dir_all(output).context("Failed to create output directory")?;
    let path = output.join("CONFIG.md");
    fs::write(&path, docs::markdown())?;
    println!("Generated: {}", path.display());
    Ok(())
}
