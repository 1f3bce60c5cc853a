use std::path::Path;

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::cache::TemplateCache;
use crate::content_type::ContentType;
use crate::error::{Result, TemplateError};
use crate::locale::is_language_code;
use crate::template::Template;

/// What a single `populate` call added to the cache. A call against an
/// already-populated cache reports zeros.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    /// Language directories accepted by this call.
    pub languages: usize,
    /// Template entries added by this call.
    pub templates: usize,
    /// Theme entries added by this call.
    pub themes: usize,
}

/// Scans `root` once and fills the cache.
///
/// The scan is idempotent: when both stores already hold entries the call
/// returns immediately without touching the disk, and each store is only
/// (re)scanned while it is empty. Unrecognized language directories and file
/// extensions are skipped silently; an absent `themes/` subdirectory is not
/// an error. Read failures abort the scan.
pub fn populate(cache: &mut TemplateCache, root: &Path) -> Result<ScanSummary> {
    let mut summary = ScanSummary::default();

    if cache.is_populated() {
        debug!("template cache already populated, skipping scan");
        return Ok(summary);
    }

    if !root.is_dir() {
        return Err(TemplateError::RootNotFound {
            path: root.to_path_buf(),
        });
    }

    if !cache.has_themes() {
        summary.themes = scan_themes(cache, &root.join("themes"))?;
    }

    if !cache.has_templates() {
        let (languages, templates) = scan_languages(cache, root)?;
        summary.languages = languages;
        summary.templates = templates;
    }

    info!(
        languages = summary.languages,
        templates = summary.templates,
        themes = summary.themes,
        "scanned template root {}",
        root.display()
    );

    Ok(summary)
}

/// Reads every regular file directly under the themes directory into the
/// theme cache, keyed by full file name.
fn scan_themes(cache: &mut TemplateCache, themes_dir: &Path) -> Result<usize> {
    if !themes_dir.is_dir() {
        debug!("no themes directory at {}", themes_dir.display());
        return Ok(0);
    }

    let mut added = 0;
    for entry in WalkDir::new(themes_dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| TemplateError::Io {
            context: format!("reading themes directory {}", themes_dir.display()),
            source: e.into(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let content = std::fs::read_to_string(entry.path()).map_err(|e| TemplateError::Io {
            context: format!("reading theme file {}", entry.path().display()),
            source: e,
        })?;
        let file_name = entry.file_name().to_string_lossy().into_owned();

        if cache.insert_theme(file_name, content) {
            added += 1;
        }
    }

    Ok(added)
}

/// Walks the immediate subdirectories of the root, treating each accepted
/// name as a language code, and loads every file with a registry extension.
fn scan_languages(cache: &mut TemplateCache, root: &Path) -> Result<(usize, usize)> {
    let mut languages = 0;
    let mut templates = 0;

    for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| TemplateError::Io {
            context: format!("reading template root {}", root.display()),
            source: e.into(),
        })?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let language_code = entry.file_name().to_string_lossy().into_owned();
        if !is_language_code(&language_code) {
            debug!("skipping non-language directory '{language_code}'");
            continue;
        }

        languages += 1;
        templates += scan_language_dir(cache, entry.path(), &language_code)?;
    }

    Ok((languages, templates))
}

fn scan_language_dir(cache: &mut TemplateCache, dir: &Path, language_code: &str) -> Result<usize> {
    let mut added = 0;

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| TemplateError::Io {
            context: format!("reading language directory {}", dir.display()),
            source: e.into(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Some(content_type) = path
            .extension()
            .and_then(|ext| ContentType::from_extension(&ext.to_string_lossy()))
        else {
            debug!("skipping unrecognized template file {}", path.display());
            continue;
        };
        let Some(template_key) = path.file_stem().map(|s| s.to_string_lossy().into_owned())
        else {
            continue;
        };

        let content = std::fs::read_to_string(path).map_err(|e| TemplateError::Io {
            context: format!("reading template file {}", path.display()),
            source: e,
        })?;

        let template = Template {
            language_code: language_code.to_string(),
            content_type: content_type.mime().to_string(),
            content,
        };
        let key = TemplateCache::lookup_key(language_code, &template_key, content_type);

        if cache.insert_template(key, template) {
            added += 1;
        }
    }

    Ok(added)
}
