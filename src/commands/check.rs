use std::path::PathBuf;

use console::style;
use miette::Result;

use letterpress::tokens::BODY_MARKER;
use letterpress::{ProviderOptions, TemplateProvider};

pub fn run(root: Option<PathBuf>, config: Option<PathBuf>) -> Result<()> {
    let options = ProviderOptions::discover(root, config)?;

    println!(
        "{} {}",
        style("Checking template root at").bold(),
        style(options.template_path.display()).cyan()
    );

    let provider = TemplateProvider::new(options)?;
    let cache = provider.cache();
    let languages = cache.languages();

    println!(
        "  Languages: {}",
        if languages.is_empty() {
            "none".to_string()
        } else {
            languages.join(", ")
        }
    );
    println!("  Templates: {}", cache.template_count());
    println!("  Themes: {}", cache.theme_count());

    let mut warnings = Vec::new();
    if cache.template_count() == 0 {
        warnings.push(
            "no templates discovered; check language directory names and file extensions"
                .to_string(),
        );
    }
    for (name, content) in cache.themes() {
        if !content.contains(BODY_MARKER) {
            warnings.push(format!(
                "theme '{name}' has no {BODY_MARKER} marker; it will replace template content \
                 instead of wrapping it"
            ));
        }
    }
    warnings.sort();

    if warnings.is_empty() {
        println!("\n{} Template root is valid!", style("✓").green().bold());
    } else {
        println!("\n{}", style("Warnings:").yellow().bold());
        for warning in &warnings {
            println!("  {} {}", style("⚠").yellow(), warning);
        }
    }

    Ok(())
}
