mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Commands::Render {
            key,
            theme,
            content_type,
            lang,
            tokens,
            tokens_json,
            raw,
            root,
            config,
        } => commands::render::run(
            key,
            theme,
            content_type,
            lang,
            tokens,
            tokens_json,
            raw,
            root,
            config,
        ),
        Commands::List { root, config } => commands::list::run(root, config),
        Commands::Check { root, config } => commands::check::run(root, config),
    }
}
