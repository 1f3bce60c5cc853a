use std::path::PathBuf;

use console::style;
use miette::Result;

use letterpress::{ProviderOptions, TemplateProvider};

pub fn run(root: Option<PathBuf>, config: Option<PathBuf>) -> Result<()> {
    let options = ProviderOptions::discover(root, config)?;
    let provider = TemplateProvider::new(options)?;
    let cache = provider.cache();

    if cache.template_count() == 0 && cache.theme_count() == 0 {
        println!(
            "No templates or themes found under {}",
            style(provider.options().template_path.display()).cyan()
        );
        return Ok(());
    }

    let languages = cache.languages();
    println!(
        "{} {}\n",
        style("Template root").bold(),
        style(provider.options().template_path.display()).cyan()
    );

    println!(
        "{} ({}):",
        style("Templates").bold(),
        cache.template_count()
    );
    let mut keys: Vec<&str> = cache.templates().map(|(key, _)| key).collect();
    keys.sort_unstable();
    for key in keys {
        println!("  {key}");
    }

    println!(
        "\n{} ({}): {}",
        style("Languages").bold(),
        languages.len(),
        languages.join(", ")
    );

    println!("\n{} ({}):", style("Themes").bold(), cache.theme_count());
    let mut themes: Vec<&str> = cache.themes().map(|(name, _)| name).collect();
    themes.sort_unstable();
    for name in themes {
        println!("  {name}");
    }

    Ok(())
}
