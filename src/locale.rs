//! Language-directory acceptance rules.
//!
//! A subdirectory of the template root is treated as a language iff its name
//! is exactly two characters, or it matches a known culture identifier from
//! the reference list below (case-insensitive). Everything else is skipped
//! silently by the scanner.

/// Reference list of recognized culture identifiers. Not an exhaustive locale
/// database; it covers the `language-REGION` names realistically used to
/// organize localized message content.
const KNOWN_CULTURES: &[&str] = &[
    "af-ZA", "am-ET", "ar-AE", "ar-BH", "ar-DZ", "ar-EG", "ar-IQ", "ar-JO",
    "ar-KW", "ar-LB", "ar-LY", "ar-MA", "ar-OM", "ar-QA", "ar-SA", "ar-SY",
    "ar-TN", "ar-YE", "az-AZ", "be-BY", "bg-BG", "bn-BD", "bn-IN", "bs-BA",
    "ca-ES", "cs-CZ", "cy-GB", "da-DK", "de-AT", "de-CH", "de-DE", "de-LI",
    "de-LU", "el-GR", "en-AU", "en-BZ", "en-CA", "en-GB", "en-HK", "en-IE",
    "en-IN", "en-JM", "en-MY", "en-NZ", "en-PH", "en-SG", "en-TT", "en-US",
    "en-ZA", "en-ZW", "es-AR", "es-BO", "es-CL", "es-CO", "es-CR", "es-DO",
    "es-EC", "es-ES", "es-GT", "es-HN", "es-MX", "es-NI", "es-PA", "es-PE",
    "es-PR", "es-PY", "es-SV", "es-US", "es-UY", "es-VE", "et-EE", "eu-ES",
    "fa-IR", "fi-FI", "fil-PH", "fr-BE", "fr-CA", "fr-CH", "fr-FR", "fr-LU",
    "fr-MC", "ga-IE", "gl-ES", "gu-IN", "he-IL", "hi-IN", "hr-BA", "hr-HR",
    "hu-HU", "hy-AM", "id-ID", "is-IS", "it-CH", "it-IT", "ja-JP", "ka-GE",
    "kk-KZ", "km-KH", "kn-IN", "ko-KR", "lo-LA", "lt-LT", "lv-LV", "mk-MK",
    "ml-IN", "mn-MN", "mr-IN", "ms-BN", "ms-MY", "mt-MT", "nb-NO", "ne-NP",
    "nl-BE", "nl-NL", "nn-NO", "pa-IN", "pl-PL", "pt-BR", "pt-PT", "ro-RO",
    "ru-RU", "si-LK", "sk-SK", "sl-SI", "sq-AL", "sr-Cyrl-RS", "sr-Latn-RS",
    "sv-FI", "sv-SE", "sw-KE", "ta-IN", "te-IN", "th-TH", "tr-TR", "uk-UA",
    "ur-PK", "uz-UZ", "vi-VN", "zh-CN", "zh-HK", "zh-Hans", "zh-Hant",
    "zh-MO", "zh-SG", "zh-TW", "zu-ZA",
];

/// Decides whether a directory name should be scanned as a language.
pub fn is_language_code(name: &str) -> bool {
    name.chars().count() == 2 || KNOWN_CULTURES.iter().any(|c| c.eq_ignore_ascii_case(name))
}

/// Extracts the two-letter primary subtag of a culture name: `"en-US"` and
/// `"en_US"` both yield `"en"`, a bare `"fr"` stays `"fr"`.
pub fn primary_language(culture: &str) -> String {
    culture
        .split(['-', '_'])
        .next()
        .unwrap_or(culture)
        .to_ascii_lowercase()
}
