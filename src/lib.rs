pub mod cache;
pub mod content_type;
pub mod error;
pub mod locale;
pub mod options;
pub mod provider;
pub mod scan;
pub mod template;
pub mod tokens;

pub use cache::TemplateCache;
pub use content_type::ContentType;
pub use error::{Result, TemplateError};
pub use options::ProviderOptions;
pub use provider::{ResolveOptions, TemplateProvider, DEFAULT_THEME_NAME};
pub use scan::ScanSummary;
pub use template::Template;
pub use tokens::{replace_tokens, TokenMap};
