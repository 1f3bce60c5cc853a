use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TemplateError;

/// Closed set of content types a template can carry.
///
/// `Other` exists only as a fallback for unrecognized MIME strings; the
/// scanner never discovers templates of that type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Text,
    Html,
    Json,
    Xml,
    Markdown,
    Other,
}

/// Single source of truth for the content-type/MIME/extension mapping.
/// All derived lookups read this table, so the three views cannot drift.
const REGISTRY: [(ContentType, &str, &str); 6] = [
    (ContentType::Text, "text/plain", ".txt"),
    (ContentType::Html, "text/html", ".html"),
    (ContentType::Json, "application/json", ".json"),
    (ContentType::Xml, "application/xml", ".xml"),
    (ContentType::Markdown, "text/markdown", ".md"),
    (ContentType::Other, "other", ".txt"),
];

impl ContentType {
    /// Content types the scanner looks for, in scan order. `Other` is
    /// excluded: it has no extension of its own.
    pub const SCANNABLE: [ContentType; 5] = [
        ContentType::Text,
        ContentType::Html,
        ContentType::Json,
        ContentType::Xml,
        ContentType::Markdown,
    ];

    /// Returns the canonical lowercase label used in lookup keys and CLI args.
    pub const fn as_str(self) -> &'static str {
        match self {
            ContentType::Text => "text",
            ContentType::Html => "html",
            ContentType::Json => "json",
            ContentType::Xml => "xml",
            ContentType::Markdown => "markdown",
            ContentType::Other => "other",
        }
    }

    /// The MIME string stored on templates of this type.
    pub fn mime(self) -> &'static str {
        REGISTRY
            .iter()
            .find(|(ct, _, _)| *ct == self)
            .map(|(_, mime, _)| *mime)
            .unwrap_or("other")
    }

    /// The file extension (with leading dot) for this type. `Other` maps to
    /// `.txt` so theme keys can always be built.
    pub fn extension(self) -> &'static str {
        REGISTRY
            .iter()
            .find(|(ct, _, _)| *ct == self)
            .map(|(_, _, ext)| *ext)
            .unwrap_or(".txt")
    }

    /// Maps a MIME string back to its content type, falling back to `Other`
    /// for anything the registry does not know.
    pub fn from_mime(mime: &str) -> ContentType {
        REGISTRY
            .iter()
            .find(|(_, m, _)| m.eq_ignore_ascii_case(mime))
            .map(|(ct, _, _)| *ct)
            .unwrap_or(ContentType::Other)
    }

    /// Maps a file extension (with or without leading dot, case-insensitive)
    /// to a scannable content type. Unrecognized extensions return `None`.
    pub fn from_extension(ext: &str) -> Option<ContentType> {
        let ext = ext.strip_prefix('.').unwrap_or(ext);
        Self::SCANNABLE
            .iter()
            .find(|ct| ct.extension()[1..].eq_ignore_ascii_case(ext))
            .copied()
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" | "plain" => Ok(ContentType::Text),
            "html" => Ok(ContentType::Html),
            "json" => Ok(ContentType::Json),
            "xml" => Ok(ContentType::Xml),
            "markdown" | "md" => Ok(ContentType::Markdown),
            "other" => Ok(ContentType::Other),
            _ => Err(TemplateError::UnknownContentType {
                input: s.to_string(),
            }),
        }
    }
}
