use crate::config::LanguageCode;
use crate::translate::Translator;

/// Tracks the session language and routes text through a [`Translator`].
#[derive(Clone, Debug)]
pub struct Localizer<T> {
    translator: T,
    current: LanguageCode,
}

impl<T: Translator> Localizer<T> {
    pub fn new(translator: T) -> Self {
        Self::with_language(translator, LanguageCode::default())
    }

    pub fn with_language(translator: T, language: LanguageCode) -> Self {
        Self {
            translator,
            current: language,
        }
    }

    pub fn current_language(&self) -> &LanguageCode {
        &self.current
    }

    pub fn set_language(&mut self, language: LanguageCode) {
        tracing::debug!(from = %self.current, to = %language, "language changed");
        self.current = language;
    }

    /// Translates `text` into `target`, or the session language when `None`.
    /// English returns immediately without going through the translator.
    pub async fn localize(&self, text: String, target: Option<LanguageCode>) -> String {
        let target = target.unwrap_or_else(|| self.current.clone());
        if target.is_english() {
            return text;
        }
        self.translator.translate(text, target).await.text
    }
}
