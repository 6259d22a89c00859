use crate::emotion::{
    classify, ColorTheme, Emotion, EmotionAnalyzer, EmotionResult, KeywordEmotionAnalyzer,
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn no_keywords_is_neutral_and_blue() {
    let result = classify("the weather today");
    assert_eq!(result.category, Emotion::Neutral);
    assert_eq!(result.color_theme, ColorTheme::Blue);
    assert_eq!(result.intensity, 0.0);
    assert_eq!(result.source_text, "the weather today");
}

#[test]
fn empty_text_yields_default_state() {
    let result = classify("");
    assert_eq!(result, EmotionResult::neutral());
}

#[test]
fn happy_beats_excited_with_exclamation_boost() {
    let result = classify("I am so happy and excited today!!");
    assert_eq!(result.category, Emotion::Happy);
    assert_eq!(result.color_theme, ColorTheme::Green);
    // two happy keywords plus the "!" boost
    assert!(approx(result.intensity, (2.0 + 0.2) * 0.3));
}

#[test]
fn ties_go_to_first_declared_category() {
    // "worried" and "panic" score 2 for both stressed and fearful
    let result = classify("worried and in a panic");
    assert_eq!(result.category, Emotion::Stressed);
    assert_eq!(result.color_theme, ColorTheme::Orange);

    // one hit each for sad and confused
    let result = classify("sad and puzzled");
    assert_eq!(result.category, Emotion::Sad);
}

#[test]
fn higher_score_wins_regardless_of_order() {
    let result = classify("scared, terrified and nervous");
    assert_eq!(result.category, Emotion::Fearful);
    assert_eq!(result.color_theme, ColorTheme::Teal);
    assert!(approx(result.intensity, 0.9));
}

#[test]
fn matching_is_case_insensitive_and_substring_based() {
    let result = classify("Totally BEWILDERED by this form");
    assert_eq!(result.category, Emotion::Confused);
    assert_eq!(result.color_theme, ColorTheme::Pink);

    let result = classify("thrilled-to-bits");
    assert_eq!(result.category, Emotion::Excited);
    assert_eq!(result.color_theme, ColorTheme::Purple);
}

#[test]
fn boost_alone_does_not_pick_a_category() {
    let result = classify("can you help with my paperwork?");
    assert_eq!(result.category, Emotion::Neutral);
    assert!(approx(result.intensity, 0.1 * 0.3));
}

#[test]
fn intensity_is_clamped_to_one() {
    let text = format!(
        "happy joy great wonderful amazing love celebration success!!! help??? {}",
        "!?".repeat(80)
    );
    let result = classify(&text);
    assert_eq!(result.category, Emotion::Happy);
    assert_eq!(result.intensity, 1.0);
}

#[test]
fn intensity_stays_in_range_for_assorted_inputs() {
    let inputs = [
        "",
        "!!!!!!!!!!!!!!!!!!!!!!!!!!",
        "help? help? help?",
        "नमस्ते, मुझे मदद चाहिए",
        "angry mad furious annoyed frustrated rage hate irritated outraged",
    ];
    for input in inputs {
        let result = classify(input);
        assert!(
            (0.0..=1.0).contains(&result.intensity),
            "{input:?} -> {}",
            result.intensity
        );
    }
}

#[test]
fn classification_is_deterministic() {
    let analyzer = KeywordEmotionAnalyzer::new();
    let text = "I feel lost and a bit upset, can you help?";
    assert_eq!(analyzer.classify(text), analyzer.classify(text));
}

#[test]
fn every_category_has_a_reply_and_color() {
    for emotion in Emotion::CLASSIFIED {
        assert!(!emotion.supportive_reply().is_empty());
        assert!(emotion.color_theme().hex().starts_with('#'));
    }
    assert_eq!(
        Emotion::Neutral.supportive_reply(),
        "I'm here to help you with whatever you need today."
    );
}

#[test]
fn result_serializes_with_lowercase_tags() {
    let json = serde_json::to_value(classify("so sad")).expect("serializes");
    assert_eq!(json["category"], "sad");
    assert_eq!(json["color_theme"], "blue");
}
