// src/core/engine.rs — Async driver for session turns

use std::sync::Arc;
use std::time::Duration;

use super::session::{SessionState, Submission};
use crate::provider::ReplyGateway;

/// Owns a session and its gateway, and drives whole turns: the submit
/// transition, the single awaited remote call, the presentation delay, and
/// the resolve transition. Turns are strictly sequential; the session's
/// awaiting-reply gate (not a lock) keeps a second turn from starting.
///
/// Cancellation follows future-drop semantics: dropping an in-flight
/// `submit` future abandons the outbound call. [`shutdown`](Self::shutdown)
/// additionally closes the session so later submits are rejected; the
/// upstream behavior (never cancel, always resolve) is the default path.
pub struct SessionEngine {
    state: SessionState,
    gateway: Arc<dyn ReplyGateway>,
    reply_delay: Duration,
    closed: bool,
}

/// What a driven turn amounted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The turn completed; `via_fallback` is true when the reply is the
    /// canned one for the current mood.
    Replied { text: String, via_fallback: bool },
    RejectedBlank,
    RejectedBusy,
    Closed,
}

impl SessionEngine {
    pub fn new(gateway: Arc<dyn ReplyGateway>, greeting: &str, reply_delay: Duration) -> Self {
        Self {
            state: SessionState::new(greeting),
            gateway,
            reply_delay,
            closed: false,
        }
    }

    /// Read-only view for the UI layer: transcript, current mood, and the
    /// composing indicator.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Drive one full turn. Exactly one network request is made for an
    /// accepted submit; a rejected submit makes none.
    pub async fn submit(&mut self, text: &str) -> TurnOutcome {
        if self.closed {
            return TurnOutcome::Closed;
        }

        let turn = match self.state.submit(text) {
            Submission::Accepted(turn) => turn,
            Submission::RejectedBlank => return TurnOutcome::RejectedBlank,
            Submission::RejectedBusy => return TurnOutcome::RejectedBusy,
        };

        let outcome = self.gateway.generate(&turn.text, turn.emotion).await;
        let via_fallback = outcome.is_err();
        match &outcome {
            Ok(_) => tracing::debug!(session = %self.state.id, "reply generated"),
            Err(e) => tracing::warn!(
                session = %self.state.id,
                emotion = %turn.emotion,
                "generation failed, using fallback: {}",
                e
            ),
        }

        tokio::time::sleep(self.reply_delay).await;

        let text = self
            .state
            .resolve(outcome)
            .map(|m| m.text.clone())
            .unwrap_or_default();
        TurnOutcome::Replied { text, via_fallback }
    }

    /// Session teardown hook. The session cannot accept turns afterwards.
    pub fn shutdown(&mut self) {
        self.closed = true;
    }
}
