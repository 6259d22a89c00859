use crate::config::{LanguageCode, TranslateDelay};
use crate::translate::{translate_words, Translation, Translator};
use futures::future::BoxFuture;
use futures::FutureExt;
use std::time::Duration;

/// Offline translator backed by the built-in word tables.
///
/// Resolution is held back by `delay` to stand in for a network round trip;
/// the wait is a timer, so other tasks keep running meanwhile.
#[derive(Clone, Debug)]
pub struct DictionaryTranslator {
    delay: Duration,
}

impl DictionaryTranslator {
    pub fn new(delay: TranslateDelay) -> Self {
        Self {
            delay: delay.duration(),
        }
    }

    pub fn instant() -> Self {
        Self::new(TranslateDelay::none())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for DictionaryTranslator {
    fn default() -> Self {
        Self::new(TranslateDelay::default())
    }
}

impl Translator for DictionaryTranslator {
    fn translate(&self, text: String, target: LanguageCode) -> BoxFuture<'_, Translation> {
        let delay = self.delay;
        async move {
            tracing::debug!(target_lang = %target, delay = ?delay, "translating");
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            Translation {
                text: translate_words(&text, target.as_str()),
                target,
            }
        }
        .boxed()
    }
}
