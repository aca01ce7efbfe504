//! Palette command handler

use anyhow::Result;

use disco::style::code::{swatches, Swatch};

/// Print every supported code with its name and display color.
pub fn handle() -> Result<()> {
    print!("{}", table(swatches()));
    Ok(())
}

fn table(swatches: &[Swatch]) -> String {
    let mut out = format!("{:>4}  {:<20}  {:<22}  {}\n", "CODE", "NAME", "LABEL", "COLOR");
    for swatch in swatches {
        out.push_str(&format!(
            "{:>4}  {:<20}  {:<22}  {}\n",
            swatch.code,
            swatch.name,
            swatch.label,
            swatch.hex().unwrap_or_else(|| "-".to_string())
        ));
    }
    out
}
