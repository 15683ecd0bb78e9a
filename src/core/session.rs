// src/core/session.rs — Session state and turn transitions

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::emotion::{self, EmotionLabel};
use super::fallback::fallback_reply;
use super::history::{Message, MessageStore};
use crate::infra::errors::MindMateError;

/// The engine's only real state. Mutated exclusively through [`submit`] and
/// [`resolve`]; one session lives for the process duration.
///
/// [`submit`]: SessionState::submit
/// [`resolve`]: SessionState::resolve
#[derive(Debug, Clone)]
pub struct SessionState {
    pub id: String,
    pub started_at: DateTime<Utc>,
    messages: MessageStore,
    current_emotion: EmotionLabel,
    awaiting_reply: bool,
}

/// Result of a submit transition. An accepted turn carries what the gateway
/// call needs; rejections leave the session untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Accepted(AcceptedTurn),
    /// Blank after trimming; silently ignored.
    RejectedBlank,
    /// A turn is already in flight; no queueing.
    RejectedBusy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedTurn {
    pub text: String,
    pub emotion: EmotionLabel,
}

impl SessionState {
    /// New session seeded with the assistant greeting and a neutral mood.
    pub fn new(greeting: &str) -> Self {
        let mut messages = MessageStore::new();
        messages.append(Message::assistant(greeting));
        Self {
            id: Uuid::new_v4().to_string(),
            started_at: Utc::now(),
            messages,
            current_emotion: EmotionLabel::Neutral,
            awaiting_reply: false,
        }
    }

    pub fn messages(&self) -> &MessageStore {
        &self.messages
    }

    pub fn current_emotion(&self) -> EmotionLabel {
        self.current_emotion
    }

    /// True while a turn is in flight; doubles as the UI "composing"
    /// indicator and the gate against concurrent turns.
    pub fn awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }

    /// Start a turn. Appends the user message, classifies the mood (keeping
    /// the current label when no keyword matches), and raises the
    /// awaiting-reply gate. The caller is expected to follow up with exactly
    /// one [`resolve`](Self::resolve).
    pub fn submit(&mut self, text: &str) -> Submission {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Submission::RejectedBlank;
        }
        if self.awaiting_reply {
            return Submission::RejectedBusy;
        }

        self.messages.append(Message::user(text));
        if let Some(label) = emotion::classify(trimmed) {
            self.current_emotion = label;
        }
        self.awaiting_reply = true;

        Submission::Accepted(AcceptedTurn {
            text: trimmed.to_string(),
            emotion: self.current_emotion,
        })
    }

    /// Finish the in-flight turn with the gateway outcome. A failed call
    /// resolves to the canned reply for the current mood, so every accepted
    /// turn ends in a visible assistant message and an idle session.
    ///
    /// Returns `None` when no turn is in flight.
    pub fn resolve(&mut self, outcome: Result<String, MindMateError>) -> Option<&Message> {
        if !self.awaiting_reply {
            return None;
        }

        let reply = match outcome {
            Ok(text) => text,
            Err(_) => fallback_reply(self.current_emotion).to_string(),
        };
        self.messages.append(Message::assistant(reply));
        self.awaiting_reply = false;
        self.messages.last()
    }
}
