//! Reply flow: track the user's mood, pick or accept a reply, open it with a
//! matching sympathetic line, and deliver it in the session language.

mod replies;

pub use replies::{KeywordReplyGenerator, ReplyGenerator};

use crate::config::{AppConfig, LanguageCode};
use crate::emotion::{Emotion, EmotionAnalyzer, EmotionResult, KeywordEmotionAnalyzer, MoodTracker};
use crate::translate::{DictionaryTranslator, Localizer, Translator};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AssistantReply {
    pub mood: EmotionResult,
    pub language: LanguageCode,
    pub text: String,
}

pub struct Assistant<E, T, G = KeywordReplyGenerator> {
    mood: MoodTracker<E>,
    localizer: Localizer<T>,
    replies: G,
}

impl Assistant<KeywordEmotionAnalyzer, DictionaryTranslator, KeywordReplyGenerator> {
    pub fn from_app(app: &AppConfig) -> Self {
        Self::new(
            KeywordEmotionAnalyzer::new(),
            Localizer::with_language(
                DictionaryTranslator::new(app.translate_delay),
                app.language.clone(),
            ),
            KeywordReplyGenerator::new(),
        )
    }
}

impl<E, T, G> Assistant<E, T, G>
where
    E: EmotionAnalyzer,
    T: Translator,
    G: ReplyGenerator,
{
    pub fn new(analyzer: E, localizer: Localizer<T>, replies: G) -> Self {
        Self {
            mood: MoodTracker::with_analyzer(analyzer),
            localizer,
            replies,
        }
    }

    pub fn mood(&self) -> &EmotionResult {
        self.mood.current()
    }

    pub fn reset_mood(&mut self) {
        self.mood.reset();
    }

    pub fn set_language(&mut self, language: LanguageCode) {
        self.localizer.set_language(language);
    }

    /// Answers `user_text` with a generated reply.
    pub async fn respond_to(&mut self, user_text: &str) -> AssistantReply {
        let reply = self.replies.generate(user_text);
        self.respond(user_text, &reply).await
    }

    /// Delivers a caller-supplied `reply` to `user_text`.
    pub async fn respond(&mut self, user_text: &str, reply: &str) -> AssistantReply {
        self.mood.observe(user_text);
        let mood = self.mood.current().clone();

        let composed = if mood.category == Emotion::Neutral {
            reply.to_owned()
        } else {
            format!("{} {}", mood.category.supportive_reply(), reply)
        };

        tracing::debug!(
            mood = mood.category.as_str(),
            intensity = mood.intensity,
            "composing reply"
        );

        let language = self.localizer.current_language().clone();
        let text = self.localizer.localize(composed, None).await;
        AssistantReply {
            mood,
            language,
            text,
        }
    }
}
