use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum TemplateError {
    #[error("Template root directory not found: {path}")]
    #[diagnostic(help(
        "Ensure the configured template path exists and contains per-language subdirectories"
    ))]
    RootNotFound { path: PathBuf },

    #[error("Options file not found at {path}")]
    #[diagnostic(help(
        "Pass --root, set LETTERPRESS_ROOT, or create a config file with a 'template_path' entry"
    ))]
    ConfigNotFound { path: PathBuf },

    #[error("Failed to parse options file")]
    #[diagnostic(help("Check the TOML syntax of your letterpress config file"))]
    ConfigParse {
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid options: {reason}")]
    ConfigInvalid { reason: String },

    #[error(
        "Template '{template_key}' not found for language '{language_code}' \
         and content type '{content_type}' (lookup key '{lookup_key}')"
    )]
    #[diagnostic(help(
        "Check that <root>/<language>/<key><extension> exists and was picked up by the scan"
    ))]
    TemplateNotFound {
        template_key: String,
        language_code: String,
        content_type: String,
        lookup_key: String,
    },

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown content type: {input}")]
    #[diagnostic(help("Supported content types: text, html, json, xml, markdown, other"))]
    UnknownContentType { input: String },

    #[error("Invalid token pair: {input}")]
    #[diagnostic(help("Token values must be given as KEY=VALUE"))]
    InvalidTokenPair { input: String },

    #[error("Failed to parse token JSON")]
    #[diagnostic(help("--tokens-json expects a flat JSON object of string values"))]
    TokensJson {
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, TemplateError>;
