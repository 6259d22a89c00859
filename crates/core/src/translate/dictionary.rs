//! Word-for-word substitution over small per-language vocabularies.
//!
//! Coverage is deliberately partial: anything missing from a table, and every
//! word for a language without a table, passes through untouched.

const HINDI: &[(&str, &str)] = &[
    ("hello", "नमस्ते"),
    ("help", "मदद"),
    ("form", "फॉर्म"),
    ("job", "नौकरी"),
    ("problem", "समस्या"),
];

const TAMIL: &[(&str, &str)] = &[
    ("hello", "வணக்கம்"),
    ("help", "உதவி"),
    ("form", "படிவம்"),
    ("job", "வேலை"),
    ("problem", "பிரச்சினை"),
];

const KANNADA: &[(&str, &str)] = &[
    ("hello", "ನಮಸ್ಕಾರ"),
    ("help", "ಸಹಾಯ"),
    ("form", "ಫಾರ್ಮ್"),
    ("job", "ಕೆಲಸ"),
    ("problem", "ಸಮಸ್ಯೆ"),
];

const BENGALI: &[(&str, &str)] = &[
    ("hello", "নমস্কার"),
    ("help", "সাহায্য"),
    ("form", "ফর্ম"),
    ("job", "কাজ"),
    ("problem", "সমস্যা"),
];

const TRAILING_PUNCTUATION: [char; 4] = ['.', ',', '!', '?'];

fn table_for(code: &str) -> Option<&'static [(&'static str, &'static str)]> {
    match code {
        "hi" => Some(HINDI),
        "ta" => Some(TAMIL),
        "kn" => Some(KANNADA),
        "bn" => Some(BENGALI),
        _ => None,
    }
}

fn find_in(table: &[(&'static str, &'static str)], word: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(english, _)| *english == word)
        .map(|(_, translated)| *translated)
}

/// Looks up a single lowercase English word.
pub fn lookup(code: &str, word: &str) -> Option<&'static str> {
    find_in(table_for(code)?, word)
}

/// Substitutes known words in `text` for their `target` equivalents.
///
/// Tokens are split on single spaces only. A token is matched after dropping
/// trailing `. , ! ?` and lowercasing; a token with no entry is kept exactly
/// as written. `"en"` and unknown codes return the input unchanged.
pub fn translate_words(text: &str, target: &str) -> String {
    if target == "en" {
        return text.to_owned();
    }
    let Some(table) = table_for(target) else {
        return text.to_owned();
    };

    text.split(' ')
        .map(|token| {
            let cleaned = token
                .trim_end_matches(&TRAILING_PUNCTUATION[..])
                .to_lowercase();
            match find_in(table, &cleaned) {
                Some(translated) => translated,
                None => token,
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
