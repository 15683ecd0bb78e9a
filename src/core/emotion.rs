// src/core/emotion.rs — Emotion labels and keyword classifier

use serde::{Deserialize, Serialize};

/// The six moods the engine distinguishes. Closed set so the classifier and
/// the fallback table are checked exhaustively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionLabel {
    Happy,
    Sad,
    Angry,
    Anxious,
    Calm,
    #[default]
    Neutral,
}

impl std::fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EmotionLabel::Happy => "happy",
            EmotionLabel::Sad => "sad",
            EmotionLabel::Angry => "angry",
            EmotionLabel::Anxious => "anxious",
            EmotionLabel::Calm => "calm",
            EmotionLabel::Neutral => "neutral",
        };
        f.write_str(s)
    }
}

/// Ordered rule list; earlier rules win on multi-keyword input.
const RULES: &[(EmotionLabel, &[&str])] = &[
    (EmotionLabel::Happy, &["happy", "joy", "excited"]),
    (EmotionLabel::Sad, &["sad", "depressed", "unhappy"]),
    (EmotionLabel::Angry, &["angry", "frustrated", "mad"]),
    (EmotionLabel::Anxious, &["anxious", "nervous", "worried"]),
    (EmotionLabel::Calm, &["calm", "peaceful", "relaxed"]),
];

/// Case-insensitive substring match against the rule list, first match wins.
/// Returns `None` when nothing matches; the caller decides what that means
/// (the session keeps its current label rather than resetting to neutral).
pub fn classify(text: &str) -> Option<EmotionLabel> {
    let lowered = text.to_lowercase();
    for (label, keywords) in RULES {
        if keywords.iter().any(|k| lowered.contains(k)) {
            return Some(*label);
        }
    }
    None
}
