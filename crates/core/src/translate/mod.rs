mod dictionary;
mod languages;
mod local;
mod localizer;

use crate::config::LanguageCode;
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};

pub use dictionary::{lookup, translate_words};
pub use languages::{detect_language, find_language, supported_languages, LanguageEntry};
pub use local::DictionaryTranslator;
pub use localizer::Localizer;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
    pub target: LanguageCode,
}

/// Best-effort translation. Never fails: untranslatable input comes back
/// as-is rather than as an error.
pub trait Translator: Send + Sync {
    fn translate(&self, text: String, target: LanguageCode) -> BoxFuture<'_, Translation>;
}
