//! Templates command handler

use anyhow::Result;

use disco::Template;

/// List every template with its title and text.
pub fn handle() -> Result<()> {
    print!("{}", listing());
    Ok(())
}

fn listing() -> String {
    let mut out = String::new();
    for template in Template::ALL {
        let document = disco::Document::from_template(template);
        let preview = document.plain_text().replace('\n', " / ");
        out.push_str(&format!(
            "{:<8}  {:<16}  {}\n",
            template.name(),
            template.title(),
            preview
        ));
    }
    out
}
