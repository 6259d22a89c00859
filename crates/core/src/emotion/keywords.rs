use crate::emotion::Emotion;

const HAPPY: &[&str] = &[
    "happy",
    "joy",
    "excited",
    "great",
    "wonderful",
    "amazing",
    "love",
    "celebration",
    "success",
];

const SAD: &[&str] = &[
    "sad",
    "upset",
    "depressed",
    "down",
    "crying",
    "heartbroken",
    "loss",
    "grief",
    "disappointed",
];

const ANGRY: &[&str] = &[
    "angry",
    "mad",
    "furious",
    "annoyed",
    "frustrated",
    "rage",
    "hate",
    "irritated",
    "outraged",
];

const STRESSED: &[&str] = &[
    "stressed",
    "anxiety",
    "worried",
    "panic",
    "overwhelmed",
    "pressure",
    "tension",
    "burden",
];

const EXCITED: &[&str] = &[
    "excited",
    "thrilled",
    "enthusiasm",
    "energetic",
    "pumped",
    "eager",
    "anticipation",
];

// "worried" and "panic" also vote for stressed; stressed wins ties.
const FEARFUL: &[&str] = &[
    "scared",
    "afraid",
    "fear",
    "terrified",
    "nervous",
    "anxious",
    "worried",
    "panic",
];

const CONFUSED: &[&str] = &[
    "confused",
    "lost",
    "unclear",
    "puzzled",
    "uncertain",
    "perplexed",
    "bewildered",
];

pub(crate) fn for_emotion(emotion: Emotion) -> &'static [&'static str] {
    match emotion {
        Emotion::Happy => HAPPY,
        Emotion::Sad => SAD,
        Emotion::Angry => ANGRY,
        Emotion::Stressed => STRESSED,
        Emotion::Excited => EXCITED,
        Emotion::Fearful => FEARFUL,
        Emotion::Confused => CONFUSED,
        Emotion::Neutral => &[],
    }
}

/// Number of keywords contained in at least one token.
pub(crate) fn score(keywords: &[&str], tokens: &[&str]) -> usize {
    keywords
        .iter()
        .filter(|keyword| tokens.iter().any(|token| token.contains(*keyword)))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_lowercase_and_neutral_is_empty() {
        for emotion in Emotion::CLASSIFIED {
            let keywords = for_emotion(emotion);
            assert!(!keywords.is_empty(), "{emotion:?} has no keywords");
            assert!(keywords.iter().all(|k| *k == k.to_lowercase()));
        }
        assert!(for_emotion(Emotion::Neutral).is_empty());
    }

    #[test]
    fn keyword_counts_once_even_when_repeated() {
        assert_eq!(score(SAD, &["sad", "sad", "sadness"]), 1);
    }

    #[test]
    fn keyword_matches_inside_a_token() {
        // "heartbroken" is a substring of the token, "down" of "meltdown"
        assert_eq!(score(SAD, &["heartbroken,", "meltdown"]), 2);
        assert_eq!(score(SAD, &["fine"]), 0);
    }
}
