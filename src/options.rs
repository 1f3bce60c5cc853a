use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TemplateError};
use crate::locale::primary_language;

/// Environment variable overriding the template root for the CLI.
pub const ROOT_ENV_VAR: &str = "LETTERPRESS_ROOT";

/// Configuration contract consumed by [`TemplateProvider`](crate::provider::TemplateProvider):
/// where the template tree lives and which culture to resolve against when a
/// lookup does not name a language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderOptions {
    /// Root directory holding per-language subdirectories and `themes/`.
    pub template_path: PathBuf,

    /// Default culture for lookups without an explicit language code. Its
    /// two-letter primary subtag is what lookups actually use, so `"en-US"`
    /// resolves templates under `en/`.
    #[serde(default = "default_culture")]
    pub default_culture: String,
}

fn default_culture() -> String {
    "en".to_string()
}

impl Default for ProviderOptions {
    fn default() -> Self {
        Self {
            template_path: PathBuf::new(),
            default_culture: default_culture(),
        }
    }
}

impl ProviderOptions {
    pub fn new(template_path: impl Into<PathBuf>) -> Self {
        Self {
            template_path: template_path.into(),
            ..Self::default()
        }
    }

    /// The two-letter language code lookups fall back to.
    pub fn default_language(&self) -> String {
        primary_language(&self.default_culture)
    }

    /// Validate the options for internal consistency. Existence of the root
    /// directory is checked by the scan, not here.
    pub fn validate(&self) -> Result<()> {
        if self.template_path.as_os_str().is_empty() {
            return Err(TemplateError::ConfigInvalid {
                reason: "template_path must not be empty".into(),
            });
        }
        if self.default_culture.trim().is_empty() {
            return Err(TemplateError::ConfigInvalid {
                reason: "default_culture must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Load and validate options from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(TemplateError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| TemplateError::Io {
            context: format!("reading options file {}", path.display()),
            source: e,
        })?;

        let options: ProviderOptions =
            toml::from_str(&content).map_err(|e| TemplateError::ConfigParse { source: e })?;

        options.validate()?;

        Ok(options)
    }

    /// Resolve options for the CLI: explicit root flag, explicit config file,
    /// `LETTERPRESS_ROOT`, then the user config file, in that order.
    pub fn discover(root: Option<PathBuf>, config: Option<PathBuf>) -> Result<Self> {
        if let Some(root) = root {
            return Ok(Self::new(root));
        }
        if let Some(config) = config {
            return Self::load(&config);
        }
        if let Ok(root) = std::env::var(ROOT_ENV_VAR) {
            return Ok(Self::new(root));
        }
        if let Some(path) = user_config_path() {
            if path.exists() {
                return Self::load(&path);
            }
        }
        Err(TemplateError::ConfigInvalid {
            reason: format!(
                "no template root configured: pass --root or --config, set {ROOT_ENV_VAR}, \
                 or create a user config file"
            ),
        })
    }
}

/// Path of the XDG user config file, if a config directory exists.
fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("letterpress").join("config.toml"))
}
