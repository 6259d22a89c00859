use serde::Serialize;

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LanguageEntry {
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
}

const fn entry(code: &'static str, name: &'static str, native_name: &'static str) -> LanguageEntry {
    LanguageEntry {
        code,
        name,
        native_name,
    }
}

static SUPPORTED_LANGUAGES: [LanguageEntry; 10] = [
    entry("en", "English", "English"),
    entry("hi", "Hindi", "हिन्दी"),
    entry("ta", "Tamil", "தமிழ்"),
    entry("kn", "Kannada", "ಕನ್ನಡ"),
    entry("bn", "Bengali", "বাংলা"),
    entry("te", "Telugu", "తెలుగు"),
    entry("ml", "Malayalam", "മലയാളം"),
    entry("gu", "Gujarati", "ગુજરાતી"),
    entry("mr", "Marathi", "मराठी"),
    entry("pa", "Punjabi", "ਪੰਜਾਬੀ"),
];

/// Languages offered for selection, English first, in display order.
pub fn supported_languages() -> &'static [LanguageEntry] {
    &SUPPORTED_LANGUAGES
}

pub fn find_language(code: &str) -> Option<&'static LanguageEntry> {
    SUPPORTED_LANGUAGES.iter().find(|entry| entry.code == code)
}

// Checked in order; Hindi and Marathi share Devanagari so "mr" is never returned.
const SCRIPT_RANGES: [(char, char, &str); 6] = [
    ('\u{0900}', '\u{097F}', "hi"),
    ('\u{0B80}', '\u{0BFF}', "ta"),
    ('\u{0C80}', '\u{0CFF}', "kn"),
    ('\u{0980}', '\u{09FF}', "bn"),
    ('\u{0C00}', '\u{0C7F}', "te"),
    ('\u{0D00}', '\u{0D7F}', "ml"),
];

/// Guesses a language code from the scripts present in `text`, falling back
/// to `"en"`.
pub fn detect_language(text: &str) -> &'static str {
    SCRIPT_RANGES
        .iter()
        .find(|(start, end, _)| text.chars().any(|c| (*start..=*end).contains(&c)))
        .map(|(_, _, code)| *code)
        .unwrap_or("en")
}
