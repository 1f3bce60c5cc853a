use tracing::debug;

use crate::cache::TemplateCache;
use crate::content_type::ContentType;
use crate::error::{Result, TemplateError};
use crate::options::ProviderOptions;
use crate::scan;
use crate::tokens::{replace_tokens, TokenMap, BODY_MARKER};

/// Theme name used when a lookup does not ask for one.
pub const DEFAULT_THEME_NAME: &str = "default";

/// Per-call lookup parameters with every default spelled out.
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Theme to wrap the template in (`"default"` if not set).
    pub theme_name: String,
    /// Content type of the template to resolve (`Text` if not set).
    pub content_type: ContentType,
    /// Language code; `None` resolves to the provider's configured default.
    pub language_code: Option<String>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            theme_name: DEFAULT_THEME_NAME.to_string(),
            content_type: ContentType::Text,
            language_code: None,
        }
    }
}

/// Resolves templates from an in-memory cache built by a single directory
/// scan at construction time.
///
/// After `new` returns the provider is immutable: lookups perform no I/O and
/// take `&self`, so a provider can be shared across threads (behind an `Arc`
/// or otherwise) without locking.
#[derive(Debug)]
pub struct TemplateProvider {
    options: ProviderOptions,
    default_language: String,
    cache: TemplateCache,
}

impl TemplateProvider {
    /// Validates the options and scans the template root. Fails if the root
    /// directory does not exist or any file under it cannot be read.
    pub fn new(options: ProviderOptions) -> Result<Self> {
        options.validate()?;

        let default_language = options.default_language();
        let mut cache = TemplateCache::new();
        scan::populate(&mut cache, &options.template_path)?;

        Ok(Self {
            options,
            default_language,
            cache,
        })
    }

    pub fn options(&self) -> &ProviderOptions {
        &self.options
    }

    /// Read access to the populated cache, for listing and inspection.
    pub fn cache(&self) -> &TemplateCache {
        &self.cache
    }

    /// Resolves a template by key and wraps it in the requested theme.
    ///
    /// The lookup requires an exact `(language, key, content type)` match;
    /// there is no cross-language or cross-content-type fallback. When the
    /// theme cache holds a non-blank entry for the theme name under the
    /// requested content type, every `$BODY$` in the theme is replaced with
    /// the template content; otherwise the template content is returned
    /// verbatim. A theme without a `$BODY$` marker is returned as-is.
    pub fn get_template(&self, template_key: &str, resolve: &ResolveOptions) -> Result<String> {
        let language_code = resolve
            .language_code
            .as_deref()
            .unwrap_or(&self.default_language);
        let lookup_key =
            TemplateCache::lookup_key(language_code, template_key, resolve.content_type);

        let Some(template) = self.cache.template(&lookup_key) else {
            return Err(TemplateError::TemplateNotFound {
                template_key: template_key.to_string(),
                language_code: language_code.to_string(),
                content_type: resolve.content_type.to_string(),
                lookup_key,
            });
        };

        let theme_key = TemplateCache::theme_key(&resolve.theme_name, resolve.content_type);
        match self.cache.theme(&theme_key) {
            Some(theme) if !theme.trim().is_empty() => {
                debug!("wrapping '{lookup_key}' in theme '{theme_key}'");
                Ok(theme.replace(BODY_MARKER, &template.content))
            }
            _ => Ok(template.content.clone()),
        }
    }

    /// Resolves a template and substitutes token values into it.
    ///
    /// `tokens: None` returns the resolved content untouched; `Some` applies
    /// [`replace_tokens`], including the reserved `DATETIME`/`DATE`/`TIME`
    /// injection.
    pub fn get_message(
        &self,
        template_key: &str,
        tokens: Option<&TokenMap>,
        resolve: &ResolveOptions,
    ) -> Result<String> {
        let content = self.get_template(template_key, resolve)?;
        Ok(replace_tokens(&content, tokens))
    }
}
