// src/core/fallback.rs — Canned replies used when the remote call fails

use super::emotion::EmotionLabel;

/// Deterministic reply for each mood. Total: every label has exactly one
/// fixed string, so a failed turn always ends in a visible assistant message.
pub fn fallback_reply(emotion: EmotionLabel) -> &'static str {
    match emotion {
        EmotionLabel::Happy => {
            "Your joy is contagious! What's contributing to your happiness today?"
        }
        EmotionLabel::Sad => {
            "I'm sorry to hear you're feeling down. Would you like to talk more about what's troubling you?"
        }
        EmotionLabel::Angry => {
            "I can sense your frustration. Would it help to explore what triggered these feelings?"
        }
        EmotionLabel::Anxious => {
            "Anxiety can be challenging. Would you like to try a quick breathing exercise together?"
        }
        EmotionLabel::Calm => {
            "It's wonderful that you're feeling peaceful. What helps you maintain this sense of calm?"
        }
        EmotionLabel::Neutral => "I'm here to support you. What's on your mind today?",
    }
}
