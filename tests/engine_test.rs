// tests/engine_test.rs — Integration test: session engine with stub gateways

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use pretty_assertions::assert_eq;

use mindmate::core::emotion::EmotionLabel;
use mindmate::core::engine::{SessionEngine, TurnOutcome};
use mindmate::core::history::Sender;
use mindmate::infra::errors::MindMateError;
use mindmate::provider::ReplyGateway;

/// A stub gateway that returns a canned reply without any network calls,
/// counting how many requests it receives.
struct StubGateway {
    reply: Result<String, String>,
    calls: AtomicUsize,
}

impl StubGateway {
    fn ok(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReplyGateway for StubGateway {
    async fn generate(
        &self,
        _user_text: &str,
        _emotion: EmotionLabel,
    ) -> Result<String, MindMateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(MindMateError::transport(message.clone())),
        }
    }
}

fn engine(gateway: Arc<dyn ReplyGateway>) -> SessionEngine {
    SessionEngine::new(gateway, "Welcome to MindMate X!", Duration::ZERO)
}

#[tokio::test]
async fn test_success_path_appends_reply() {
    let gateway = Arc::new(StubGateway::ok("Tell me more."));
    let mut engine = engine(gateway.clone());

    let outcome = engine.submit("I've had a strange week").await;
    assert_eq!(
        outcome,
        TurnOutcome::Replied {
            text: "Tell me more.".into(),
            via_fallback: false,
        }
    );

    let last = engine.state().messages().last().unwrap();
    assert_eq!(last.sender, Sender::Assistant);
    assert_eq!(last.text, "Tell me more.");
    assert_eq!(gateway.calls(), 1);
}

#[tokio::test]
async fn test_failure_path_uses_anxious_fallback() {
    let gateway = Arc::new(StubGateway::failing("connection refused"));
    let mut engine = engine(gateway);

    let outcome = engine.submit("I'm anxious about the results").await;
    assert_eq!(engine.state().current_emotion(), EmotionLabel::Anxious);
    assert_eq!(
        outcome,
        TurnOutcome::Replied {
            text: "Anxiety can be challenging. Would you like to try a quick breathing exercise together?".into(),
            via_fallback: true,
        }
    );
    assert_eq!(
        engine.state().messages().last().unwrap().text,
        "Anxiety can be challenging. Would you like to try a quick breathing exercise together?"
    );
}

#[tokio::test]
async fn test_session_returns_to_idle_after_each_turn() {
    let gateway = Arc::new(StubGateway::ok("Understood."));
    let mut engine = engine(gateway);

    for text in ["first", "second", "third"] {
        let outcome = engine.submit(text).await;
        assert!(matches!(outcome, TurnOutcome::Replied { .. }));
        assert!(!engine.state().awaiting_reply());
    }
    // Seed greeting + three completed turns
    assert_eq!(engine.state().messages().len(), 1 + 3 * 2);
}

#[tokio::test]
async fn test_rejected_submit_makes_no_request_and_adds_nothing() {
    let gateway = Arc::new(StubGateway::ok("unused"));
    let mut engine = engine(gateway.clone());

    let before = engine.state().messages().len();
    assert_eq!(engine.submit("  \t ").await, TurnOutcome::RejectedBlank);
    assert_eq!(engine.state().messages().len(), before);
    assert_eq!(gateway.calls(), 0);
}

#[tokio::test]
async fn test_exactly_one_request_per_completed_turn() {
    let gateway = Arc::new(StubGateway::ok("Okay."));
    let mut engine = engine(gateway.clone());

    engine.submit("turn one").await;
    engine.submit("").await;
    engine.submit("turn two").await;

    assert_eq!(gateway.calls(), 2);
}

#[tokio::test]
async fn test_mood_sticks_across_unmatched_turns() {
    let gateway = Arc::new(StubGateway::failing("down"));
    let mut engine = engine(gateway);

    engine.submit("so frustrated with work").await;
    assert_eq!(engine.state().current_emotion(), EmotionLabel::Angry);

    // No keyword here; the mood (and thus the fallback) must stay angry
    let outcome = engine.submit("it keeps piling up").await;
    assert_eq!(engine.state().current_emotion(), EmotionLabel::Angry);
    assert_eq!(
        outcome,
        TurnOutcome::Replied {
            text: "I can sense your frustration. Would it help to explore what triggered these feelings?".into(),
            via_fallback: true,
        }
    );
}

#[tokio::test]
async fn test_keyword_precedence_end_to_end() {
    let gateway = Arc::new(StubGateway::ok("Glad to hear it!"));
    let mut engine = engine(gateway);

    engine.submit("I am happy but also kind of sad").await;
    assert_eq!(engine.state().current_emotion(), EmotionLabel::Happy);
}

#[tokio::test]
async fn test_shutdown_closes_the_session() {
    let gateway = Arc::new(StubGateway::ok("unused"));
    let mut engine = engine(gateway.clone());

    engine.shutdown();
    assert_eq!(engine.submit("anyone there?").await, TurnOutcome::Closed);
    assert_eq!(gateway.calls(), 0);
}
