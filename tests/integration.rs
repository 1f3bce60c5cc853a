use std::path::Path;

use letterpress::{
    ContentType, ProviderOptions, ResolveOptions, TemplateError, TemplateProvider, TokenMap,
};

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

/// Builds the standard fixture tree used by most tests:
/// two plain languages, one culture-named language, a junk directory that
/// must be ignored, and a handful of themes.
fn fixture_root() -> tempfile::TempDir {
    let root = tempfile::tempdir().unwrap();
    let base = root.path();

    write(&base.join("en/greet.txt"), "Hello $NAME$");
    write(&base.join("en/greet.html"), "<p>Hello $NAME$</p>");
    write(&base.join("en/farewell.txt"), "Goodbye");
    write(&base.join("en/schedule.txt"), "$DATETIME$\n$DATE$\n$TIME$");
    write(&base.join("fr/greet.txt"), "Bonjour $NAME$");
    write(&base.join("en-US/spelling.txt"), "color");
    write(&base.join("zzzzz/junk.txt"), "must not be scanned");

    write(
        &base.join("themes/default.html"),
        "<html><body>$BODY$</body></html>",
    );
    write(&base.join("themes/plain.txt"), "Header\n$BODY$\nFooter");
    write(&base.join("themes/double.txt"), "$BODY$|$BODY$");
    write(&base.join("themes/nobody.txt"), "just the theme text");

    root
}

fn provider(root: &tempfile::TempDir) -> TemplateProvider {
    TemplateProvider::new(ProviderOptions::new(root.path())).unwrap()
}

fn resolve_with(theme: &str, content_type: ContentType) -> ResolveOptions {
    ResolveOptions {
        theme_name: theme.to_string(),
        content_type,
        language_code: None,
    }
}

#[test]
fn template_returned_verbatim_when_no_matching_theme() {
    let root = fixture_root();
    let provider = provider(&root);

    // No themes/default.txt exists, so the text lookup is unwrapped.
    let content = provider
        .get_template("greet", &ResolveOptions::default())
        .unwrap();
    assert_eq!(content, "Hello $NAME$");
}

#[test]
fn theme_wraps_template_content() {
    let root = fixture_root();
    let provider = provider(&root);

    let content = provider
        .get_template("greet", &resolve_with("plain", ContentType::Text))
        .unwrap();
    assert_eq!(content, "Header\nHello $NAME$\nFooter");
}

#[test]
fn html_lookup_uses_html_theme() {
    let root = fixture_root();
    let provider = provider(&root);

    let content = provider
        .get_template("greet", &resolve_with("default", ContentType::Html))
        .unwrap();
    assert_eq!(content, "<html><body><p>Hello $NAME$</p></body></html>");
}

#[test]
fn every_body_marker_is_replaced() {
    let root = fixture_root();
    let provider = provider(&root);

    let content = provider
        .get_template("farewell", &resolve_with("double", ContentType::Text))
        .unwrap();
    assert_eq!(content, "Goodbye|Goodbye");
}

#[test]
fn theme_without_body_marker_is_returned_as_is() {
    let root = fixture_root();
    let provider = provider(&root);

    let content = provider
        .get_template("farewell", &resolve_with("nobody", ContentType::Text))
        .unwrap();
    assert_eq!(content, "just the theme text");
}

#[test]
fn message_substitutes_caller_tokens() {
    let root = fixture_root();
    let provider = provider(&root);

    let tokens: TokenMap = [("NAME", "Bob")].into_iter().collect();
    let message = provider
        .get_message("greet", Some(&tokens), &ResolveOptions::default())
        .unwrap();
    assert_eq!(message, "Hello Bob");
}

#[test]
fn message_substitutes_tokens_inside_theme() {
    let root = fixture_root();
    let provider = provider(&root);

    let tokens: TokenMap = [("name", "Bob")].into_iter().collect();
    let message = provider
        .get_message("greet", Some(&tokens), &resolve_with("plain", ContentType::Text))
        .unwrap();
    assert_eq!(message, "Header\nHello Bob\nFooter");
}

#[test]
fn reserved_tokens_are_injected_for_empty_map() {
    let root = fixture_root();
    let provider = provider(&root);

    let message = provider
        .get_message("schedule", Some(&TokenMap::new()), &ResolveOptions::default())
        .unwrap();
    let lines: Vec<&str> = message.lines().collect();
    assert_eq!(lines.len(), 3, "expected one line per reserved token");

    chrono::NaiveDateTime::parse_from_str(lines[0], "%m/%d/%Y %H:%M:%S")
        .expect("DATETIME line should parse");
    chrono::NaiveDate::parse_from_str(lines[1], "%m/%d/%Y").expect("DATE line should parse");
    chrono::NaiveTime::parse_from_str(lines[2], "%H:%M").expect("TIME line should parse");
}

#[test]
fn explicit_date_value_is_not_overwritten() {
    let root = fixture_root();
    let provider = provider(&root);

    let tokens: TokenMap = [("DATE", "01/01/1999")].into_iter().collect();
    let message = provider
        .get_message("schedule", Some(&tokens), &ResolveOptions::default())
        .unwrap();
    assert_eq!(message.lines().nth(1), Some("01/01/1999"));
}

#[test]
fn no_tokens_means_no_substitution_at_all() {
    let root = fixture_root();
    let provider = provider(&root);

    let message = provider
        .get_message("schedule", None, &ResolveOptions::default())
        .unwrap();
    assert_eq!(message, "$DATETIME$\n$DATE$\n$TIME$");
}

#[test]
fn junk_language_directory_is_not_scanned() {
    let root = fixture_root();
    let provider = provider(&root);

    // en: 4 templates, fr: 1, en-US: 1; zzzzz contributes nothing.
    assert_eq!(provider.cache().template_count(), 6);
    assert_eq!(provider.cache().languages(), vec!["en", "en-US", "fr"]);

    let err = provider
        .get_template(
            "junk",
            &ResolveOptions {
                language_code: Some("zzzzz".to_string()),
                ..ResolveOptions::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, TemplateError::TemplateNotFound { .. }));
}

#[test]
fn missing_key_is_always_a_lookup_error() {
    let root = fixture_root();
    let provider = provider(&root);

    let err = provider
        .get_template("nonexistent", &ResolveOptions::default())
        .unwrap_err();
    assert!(matches!(err, TemplateError::TemplateNotFound { .. }));
}

#[test]
fn no_cross_content_type_fallback() {
    let root = fixture_root();
    let provider = provider(&root);

    // farewell exists only as .txt
    let err = provider
        .get_template("farewell", &resolve_with("missing", ContentType::Html))
        .unwrap_err();
    assert!(matches!(err, TemplateError::TemplateNotFound { .. }));
}

#[test]
fn no_cross_language_fallback() {
    let root = fixture_root();
    let provider = provider(&root);

    // farewell exists in en but not fr
    let err = provider
        .get_template(
            "farewell",
            &ResolveOptions {
                language_code: Some("fr".to_string()),
                ..ResolveOptions::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, TemplateError::TemplateNotFound { .. }));
}

#[test]
fn same_key_under_two_extensions_is_two_entries() {
    let root = fixture_root();
    let provider = provider(&root);

    let text = provider
        .get_template("greet", &resolve_with("missing", ContentType::Text))
        .unwrap();
    let html = provider
        .get_template("greet", &resolve_with("missing", ContentType::Html))
        .unwrap();
    assert_eq!(text, "Hello $NAME$");
    assert_eq!(html, "<p>Hello $NAME$</p>");
}

#[test]
fn culture_named_directory_resolves_with_exact_language() {
    let root = fixture_root();
    let provider = provider(&root);

    let content = provider
        .get_template(
            "spelling",
            &ResolveOptions {
                language_code: Some("en-US".to_string()),
                ..ResolveOptions::default()
            },
        )
        .unwrap();
    assert_eq!(content, "color");
}

#[test]
fn configured_culture_selects_default_language() {
    let root = fixture_root();
    let options = ProviderOptions {
        template_path: root.path().to_path_buf(),
        default_culture: "fr-FR".into(),
    };
    let provider = TemplateProvider::new(options).unwrap();

    let tokens: TokenMap = [("NAME", "Bob")].into_iter().collect();
    let message = provider
        .get_message("greet", Some(&tokens), &ResolveOptions::default())
        .unwrap();
    assert_eq!(message, "Bonjour Bob");
}

#[test]
fn explicit_language_overrides_default() {
    let root = fixture_root();
    let provider = provider(&root);

    let content = provider
        .get_template(
            "greet",
            &ResolveOptions {
                language_code: Some("fr".to_string()),
                ..ResolveOptions::default()
            },
        )
        .unwrap();
    assert_eq!(content, "Bonjour $NAME$");
}

#[test]
fn lookups_work_from_multiple_threads() {
    let root = fixture_root();
    let provider = std::sync::Arc::new(provider(&root));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let provider = std::sync::Arc::clone(&provider);
            std::thread::spawn(move || {
                let tokens: TokenMap = [("NAME", format!("user{i}"))].into_iter().collect();
                provider
                    .get_message("greet", Some(&tokens), &ResolveOptions::default())
                    .unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("Hello user{i}"));
    }
}
