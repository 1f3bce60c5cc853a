use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "letterpress",
    about = "File-based, language-aware message templates with themes and token substitution",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a template and print the rendered message
    Render {
        /// Template key (file name without extension)
        key: String,

        /// Theme to wrap the template in
        #[arg(long, default_value = "default")]
        theme: String,

        /// Content type: text, html, json, xml, markdown
        #[arg(long = "content-type", default_value = "text", value_name = "TYPE")]
        content_type: String,

        /// Language code (default: the configured culture)
        #[arg(long)]
        lang: Option<String>,

        /// Set token values (can be repeated: -t KEY=VALUE)
        #[arg(short = 't', long = "token", value_name = "KEY=VALUE")]
        tokens: Vec<String>,

        /// Token values as a flat JSON object
        #[arg(long = "tokens-json", value_name = "JSON")]
        tokens_json: Option<String>,

        /// Print the resolved template without any token substitution
        #[arg(long)]
        raw: bool,

        /// Template root directory (overrides config discovery)
        #[arg(long)]
        root: Option<PathBuf>,

        /// Path to an options TOML file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List discovered languages, templates and themes
    List {
        /// Template root directory (overrides config discovery)
        #[arg(long)]
        root: Option<PathBuf>,

        /// Path to an options TOML file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate a template root and report problems
    Check {
        /// Template root directory (overrides config discovery)
        #[arg(long)]
        root: Option<PathBuf>,

        /// Path to an options TOML file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}
