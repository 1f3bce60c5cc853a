use std::collections::HashMap;

use crate::content_type::ContentType;
use crate::template::Template;

/// In-memory store for scanned templates and themes.
///
/// Owned by a [`TemplateProvider`](crate::provider::TemplateProvider) and
/// populated exactly once; afterwards it is read-only, so lookups from many
/// threads need no locking. Insertion is first-write-wins: a later insert for
/// an existing key is discarded.
#[derive(Debug, Default)]
pub struct TemplateCache {
    templates: HashMap<String, Template>,
    themes: HashMap<String, String>,
}

impl TemplateCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the composite key addressing a cached template.
    pub fn lookup_key(language_code: &str, template_key: &str, content_type: ContentType) -> String {
        format!("{language_code}:{template_key}:{content_type}")
    }

    /// Builds the key addressing a cached theme: name plus the extension for
    /// the requested content type.
    pub fn theme_key(theme_name: &str, content_type: ContentType) -> String {
        format!("{theme_name}{}", content_type.extension())
    }

    /// Inserts a template unless the key is already present. Returns whether
    /// the entry was added.
    pub(crate) fn insert_template(&mut self, key: String, template: Template) -> bool {
        match self.templates.entry(key) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(template);
                true
            }
        }
    }

    /// Inserts a theme unless the file name is already present. Returns
    /// whether the entry was added.
    pub(crate) fn insert_theme(&mut self, file_name: String, content: String) -> bool {
        match self.themes.entry(file_name) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(content);
                true
            }
        }
    }

    pub fn template(&self, lookup_key: &str) -> Option<&Template> {
        self.templates.get(lookup_key)
    }

    pub fn theme(&self, theme_key: &str) -> Option<&str> {
        self.themes.get(theme_key).map(String::as_str)
    }

    /// True once both stores hold entries; the scanner treats this as the
    /// fully-populated fast path and skips all disk access.
    pub fn is_populated(&self) -> bool {
        !self.templates.is_empty() && !self.themes.is_empty()
    }

    pub fn template_count(&self) -> usize {
        self.templates.len()
    }

    pub fn theme_count(&self) -> usize {
        self.themes.len()
    }

    pub(crate) fn has_templates(&self) -> bool {
        !self.templates.is_empty()
    }

    pub(crate) fn has_themes(&self) -> bool {
        !self.themes.is_empty()
    }

    /// Iterates cached templates as `(lookup_key, template)` pairs.
    pub fn templates(&self) -> impl Iterator<Item = (&str, &Template)> {
        self.templates.iter().map(|(k, t)| (k.as_str(), t))
    }

    /// Iterates cached themes as `(file_name, content)` pairs.
    pub fn themes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.themes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Sorted, deduplicated language codes present in the template cache.
    pub fn languages(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self
            .templates
            .values()
            .map(|t| t.language_code.as_str())
            .collect();
        codes.sort_unstable();
        codes.dedup();
        codes
    }
}
