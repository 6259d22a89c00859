mod analyzer;
mod keywords;
mod mood;

use serde::{Deserialize, Serialize};

pub use analyzer::{classify, EmotionAnalyzer, KeywordEmotionAnalyzer};
pub use mood::MoodTracker;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Happy,
    Sad,
    Angry,
    Stressed,
    Excited,
    Fearful,
    Confused,
    Neutral,
}

impl Emotion {
    /// Categories that can be scored, in table order. Equal scores resolve
    /// to whichever category appears first here.
    pub const CLASSIFIED: [Emotion; 7] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Stressed,
        Emotion::Excited,
        Emotion::Fearful,
        Emotion::Confused,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Angry => "angry",
            Emotion::Stressed => "stressed",
            Emotion::Excited => "excited",
            Emotion::Fearful => "fearful",
            Emotion::Confused => "confused",
            Emotion::Neutral => "neutral",
        }
    }

    pub fn color_theme(&self) -> ColorTheme {
        match self {
            Emotion::Happy => ColorTheme::Green,
            Emotion::Sad => ColorTheme::Blue,
            Emotion::Angry => ColorTheme::Red,
            Emotion::Stressed => ColorTheme::Orange,
            Emotion::Excited => ColorTheme::Purple,
            Emotion::Fearful => ColorTheme::Teal,
            Emotion::Confused => ColorTheme::Pink,
            Emotion::Neutral => ColorTheme::Blue,
        }
    }

    /// Lowercase keyword substrings that vote for this category. Empty for
    /// [`Emotion::Neutral`], which is never scored.
    pub fn keywords(&self) -> &'static [&'static str] {
        keywords::for_emotion(*self)
    }

    /// Sympathetic sentence used to open a reply while the user is in this mood.
    pub fn supportive_reply(&self) -> &'static str {
        match self {
            Emotion::Happy => {
                "I'm glad you're feeling positive! How can I help you maintain this great mood?"
            }
            Emotion::Sad => {
                "I understand you might be going through a tough time. I'm here to support you."
            }
            Emotion::Angry => {
                "I can sense your frustration. Let me help you find a solution to what's bothering you."
            }
            Emotion::Stressed => {
                "It sounds like you're under pressure. Let's work together to manage this stress."
            }
            Emotion::Excited => {
                "Your enthusiasm is wonderful! How can I help you channel this energy?"
            }
            Emotion::Fearful => {
                "I understand you might be feeling anxious. I'm here to provide support and guidance."
            }
            Emotion::Confused => {
                "It's okay to feel uncertain. Let me help clarify things for you."
            }
            Emotion::Neutral => "I'm here to help you with whatever you need today.",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    Blue,
    Green,
    Purple,
    Orange,
    Red,
    Pink,
    Teal,
}

impl ColorTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTheme::Blue => "blue",
            ColorTheme::Green => "green",
            ColorTheme::Purple => "purple",
            ColorTheme::Orange => "orange",
            ColorTheme::Red => "red",
            ColorTheme::Pink => "pink",
            ColorTheme::Teal => "teal",
        }
    }

    /// CSS color the UI applies for this theme.
    pub fn hex(&self) -> &'static str {
        match self {
            ColorTheme::Blue => "#3B82F6",
            ColorTheme::Green => "#10B981",
            ColorTheme::Purple => "#8B5CF6",
            ColorTheme::Orange => "#F59E0B",
            ColorTheme::Red => "#EF4444",
            ColorTheme::Pink => "#EC4899",
            ColorTheme::Teal => "#14B8A6",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EmotionResult {
    pub category: Emotion,
    /// Always within `[0.0, 1.0]`.
    pub intensity: f64,
    pub color_theme: ColorTheme,
    pub source_text: String,
}

impl EmotionResult {
    pub fn neutral() -> Self {
        Self {
            category: Emotion::Neutral,
            intensity: 0.0,
            color_theme: Emotion::Neutral.color_theme(),
            source_text: String::new(),
        }
    }
}

impl Default for EmotionResult {
    fn default() -> Self {
        Self::neutral()
    }
}

#[cfg(test)]
mod analyzer_test;
