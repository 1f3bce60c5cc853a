use std::path::PathBuf;

use miette::Result;

use letterpress::{ProviderOptions, ResolveOptions, TemplateError, TemplateProvider, TokenMap};

#[allow(clippy::too_many_arguments)]
pub fn run(
    key: String,
    theme: String,
    content_type: String,
    lang: Option<String>,
    tokens: Vec<String>,
    tokens_json: Option<String>,
    raw: bool,
    root: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<()> {
    let options = ProviderOptions::discover(root, config)?;
    let provider = TemplateProvider::new(options)?;

    let resolve = ResolveOptions {
        theme_name: theme,
        content_type: content_type.parse()?,
        language_code: lang,
    };

    let output = if raw {
        provider.get_message(&key, None, &resolve)?
    } else {
        let token_map = collect_tokens(&tokens, tokens_json.as_deref())?;
        provider.get_message(&key, Some(&token_map), &resolve)?
    };

    println!("{output}");
    Ok(())
}

/// Merge `--tokens-json` entries and `-t KEY=VALUE` pairs, in that order, so
/// explicitly passed pairs override the JSON object.
fn collect_tokens(pairs: &[String], json: Option<&str>) -> letterpress::Result<TokenMap> {
    let mut map = TokenMap::new();

    if let Some(json) = json {
        let object: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(json).map_err(|e| TemplateError::TokensJson { source: e })?;
        for (name, value) in object {
            match value {
                serde_json::Value::String(s) => map.insert(name, s),
                other => map.insert(name, other.to_string()),
            }
        }
    }

    for pair in pairs {
        let (name, value) =
            pair.split_once('=')
                .ok_or_else(|| TemplateError::InvalidTokenPair {
                    input: pair.clone(),
                })?;
        map.insert(name, value);
    }

    Ok(map)
}
