use crate::emotion::{EmotionAnalyzer, EmotionResult, KeywordEmotionAnalyzer};

/// Ambient mood of the conversation, updated from each non-blank user message.
#[derive(Clone, Debug)]
pub struct MoodTracker<E = KeywordEmotionAnalyzer> {
    analyzer: E,
    state: EmotionResult,
}

impl MoodTracker<KeywordEmotionAnalyzer> {
    pub fn new() -> Self {
        Self::with_analyzer(KeywordEmotionAnalyzer)
    }
}

impl Default for MoodTracker<KeywordEmotionAnalyzer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EmotionAnalyzer> MoodTracker<E> {
    pub fn with_analyzer(analyzer: E) -> Self {
        Self {
            analyzer,
            state: EmotionResult::neutral(),
        }
    }

    /// Classifies `text` and stores the result. Blank input carries no
    /// signal and leaves the current mood untouched.
    pub fn observe(&mut self, text: &str) -> Option<&EmotionResult> {
        if text.trim().is_empty() {
            tracing::debug!("skipping blank text for mood analysis");
            return None;
        }
        self.state = self.analyzer.classify(text);
        Some(&self.state)
    }

    pub fn current(&self) -> &EmotionResult {
        &self.state
    }

    pub fn reset(&mut self) {
        self.state = EmotionResult::neutral();
    }
}
