use crate::emotion::{keywords, Emotion, EmotionResult};

const INTENSITY_SCALE: f64 = 0.3;
const EXCLAMATION_BOOST: f64 = 0.2;
const HELP_QUESTION_BOOST: f64 = 0.1;
const LONG_TEXT_BOOST: f64 = 0.1;
const LONG_TEXT_CHARS: usize = 100;

pub trait EmotionAnalyzer: Send + Sync {
    fn classify(&self, text: &str) -> EmotionResult;
}

/// Keyword-counting classifier over the static emotion tables.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeywordEmotionAnalyzer;

impl KeywordEmotionAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl EmotionAnalyzer for KeywordEmotionAnalyzer {
    fn classify(&self, text: &str) -> EmotionResult {
        let lower_text = text.to_lowercase();
        let tokens: Vec<&str> = lower_text.split_whitespace().collect();

        let mut category = Emotion::Neutral;
        let mut top_score = 0usize;
        for emotion in Emotion::CLASSIFIED {
            let score = keywords::score(emotion.keywords(), &tokens);
            tracing::trace!(emotion = emotion.as_str(), score, "keyword score");
            // strict comparison keeps the earliest category on ties
            if score > top_score {
                category = emotion;
                top_score = score;
            }
        }

        let boost = sentiment_boost(text);
        let intensity = ((top_score as f64 + boost) * INTENSITY_SCALE).min(1.0);

        EmotionResult {
            category,
            intensity,
            color_theme: category.color_theme(),
            source_text: text.to_owned(),
        }
    }
}

/// Classifies `text` with the default keyword analyzer.
pub fn classify(text: &str) -> EmotionResult {
    KeywordEmotionAnalyzer.classify(text)
}

fn sentiment_boost(text: &str) -> f64 {
    let mut boost = 0.0;
    if text.contains('!') {
        boost += EXCLAMATION_BOOST;
    }
    if text.contains('?') && text.contains("help") {
        boost += HELP_QUESTION_BOOST;
    }
    if text.chars().count() > LONG_TEXT_CHARS {
        boost += LONG_TEXT_BOOST;
    }
    boost
}
