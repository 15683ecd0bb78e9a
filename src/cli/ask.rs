// src/cli/ask.rs — One-shot turn

use std::sync::Arc;
use std::time::Duration;

use crate::core::engine::{SessionEngine, TurnOutcome};
use crate::infra::config::Config;
use crate::provider::potential::PotentialGateway;

/// Run a single turn against a fresh session and print the reply.
pub async fn run_ask(config: &Config, text: &str) -> anyhow::Result<()> {
    let gateway = Arc::new(PotentialGateway::new(&config.gateway)?);
    let mut engine = SessionEngine::new(
        gateway,
        &config.session.greeting,
        Duration::from_millis(config.session.reply_delay_ms),
    );

    match engine.submit(text).await {
        TurnOutcome::Replied { text, .. } => {
            println!("{}", text);
            Ok(())
        }
        TurnOutcome::RejectedBlank => {
            anyhow::bail!("message is empty")
        }
        // A fresh session can be neither busy nor closed
        TurnOutcome::RejectedBusy | TurnOutcome::Closed => {
            anyhow::bail!("session unavailable")
        }
    }
}
