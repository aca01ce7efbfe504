//! Encode command handler

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use disco::clipboard::copy_text_to_clipboard;
use disco::{preview, Config, Document, Edit, Template};

/// Arguments of `disco encode`.
pub struct EncodeArgs {
    pub text: Option<String>,
    pub template: Option<Template>,
    pub tree: Option<PathBuf>,
    pub edits: Vec<Edit>,
    pub raw: bool,
    pub json: bool,
    pub copy: bool,
    pub preview: bool,
}

/// Build the document, apply the edits and print the result.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: EncodeArgs) -> Result<()> {
    let config = Config::load()?;

    let mut document = source_document(&args)?;
    apply_edits(&mut document, &args.edits)?;

    if args.preview {
        preview::render_to(
            &mut io::stdout(),
            document.nodes(),
            config.display.color_scheme,
        )?;
        println!();
    }

    println!("{}", render(&document, &args, &config)?);

    if args.copy || config.output.copy {
        let result = copy_text_to_clipboard(&document.to_discord_block())?;
        eprintln!("{}", result.message());
    }

    Ok(())
}

fn source_document(args: &EncodeArgs) -> Result<Document> {
    if let Some(template) = args.template {
        return Ok(Document::from_template(template));
    }
    if let Some(path) = &args.tree {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read style tree {}", path.display()))?;
        return Document::from_json(&json)
            .with_context(|| format!("Failed to load style tree {}", path.display()));
    }
    match &args.text {
        Some(text) => Ok(Document::from_plain(text)),
        None => {
            if atty::is(atty::Stream::Stdin) {
                bail!("No text given. Pass TEXT, --template, --tree or pipe text on stdin.");
            }
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(Document::from_plain(strip_final_newline(&input)))
        }
    }
}

/// Apply edits in order, stopping at the first one that fails.
fn apply_edits(document: &mut Document, edits: &[Edit]) -> Result<()> {
    for edit in edits {
        document
            .apply_edit(edit)
            .with_context(|| format!("Failed to apply edit {}", edit))?;
    }
    Ok(())
}

fn render(document: &Document, args: &EncodeArgs, config: &Config) -> Result<String> {
    if args.json {
        return Ok(document.to_json()?);
    }
    if args.raw || !config.output.fence {
        Ok(document.encode())
    } else {
        Ok(document.to_discord_block())
    }
}

/// Piped input almost always ends with one newline that is not part of
/// the message.
fn strip_final_newline(input: &str) -> &str {
    input
        .strip_suffix("\r\n")
        .or_else(|| input.strip_suffix('\n'))
        .unwrap_or(input)
}
