use serde::{Deserialize, Serialize};

use crate::content_type::ContentType;

/// A resolved unit of template content, as discovered by the scanner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    /// Language code of the directory the template was found in.
    #[serde(default = "default_language_code")]
    pub language_code: String,

    /// MIME string describing the content (e.g. `text/plain`).
    #[serde(default = "default_content_type")]
    pub content_type: String,

    /// Raw file content.
    #[serde(default)]
    pub content: String,
}

fn default_language_code() -> String {
    "en".to_string()
}

fn default_content_type() -> String {
    ContentType::Text.mime().to_string()
}

impl Default for Template {
    fn default() -> Self {
        Self {
            language_code: default_language_code(),
            content_type: default_content_type(),
            content: String::new(),
        }
    }
}

impl Template {
    /// The enum view of the stored MIME string. Unknown strings map to
    /// [`ContentType::Other`].
    pub fn template_type(&self) -> ContentType {
        ContentType::from_mime(&self.content_type)
    }
}
