//! Theme command handler

use anyhow::Result;

use disco::{ColorScheme, Config};

/// Set the color scheme, or toggle it when none is given, and persist it.
#[cfg(not(tarpaulin_include))]
pub fn handle(scheme: Option<ColorScheme>) -> Result<()> {
    let mut config = Config::load()?;
    let scheme = select(&mut config, scheme);
    config.save()?;
    println!("Color scheme: {}", scheme);
    Ok(())
}

fn select(config: &mut Config, scheme: Option<ColorScheme>) -> ColorScheme {
    match scheme {
        Some(scheme) => {
            config.display.color_scheme = scheme;
            scheme
        }
        None => config.toggle_color_scheme(),
    }
}
