// src/cli/chat.rs — Interactive REPL

use std::sync::Arc;
use std::time::Duration;

use crate::core::engine::{SessionEngine, TurnOutcome};
use crate::infra::config::Config;
use crate::provider::potential::PotentialGateway;

/// Run the interactive chat REPL over one session.
pub async fn run_chat(config: &Config) -> anyhow::Result<()> {
    let gateway = Arc::new(PotentialGateway::new(&config.gateway)?);
    let mut engine = SessionEngine::new(
        gateway,
        &config.session.greeting,
        Duration::from_millis(config.session.reply_delay_ms),
    );

    eprintln!(
        "mindmate v{} | companion: {} | type quit to end\n",
        env!("CARGO_PKG_VERSION"),
        config.gateway.assistant_name,
    );
    println!("{}: {}", config.gateway.assistant_name, config.session.greeting);

    while let Some(input) = read_input() {
        let trimmed = input.trim();

        if trimmed == "quit" || trimmed == "exit" || trimmed == "/quit" {
            break;
        }

        if trimmed.starts_with('/') {
            handle_slash_command(trimmed, &engine);
            continue;
        }

        if trimmed.is_empty() {
            continue;
        }

        eprintln!("{} is typing...", config.gateway.assistant_name);
        match engine.submit(trimmed).await {
            TurnOutcome::Replied { text, .. } => {
                println!("{}: {}", config.gateway.assistant_name, text);
            }
            TurnOutcome::RejectedBlank | TurnOutcome::RejectedBusy => {}
            TurnOutcome::Closed => break,
        }
    }

    let state = engine.state();
    eprintln!(
        "\nSession {}: {} message(s), final mood {}",
        state.id,
        state.messages().len(),
        state.current_emotion(),
    );
    engine.shutdown();
    Ok(())
}

fn read_input() -> Option<String> {
    use std::io::{self, BufRead, Write};

    print!("> ");
    io::stdout().flush().ok();

    let stdin = io::stdin();
    let mut line = String::new();
    match stdin.lock().read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line),
        Err(_) => None,
    }
}

fn handle_slash_command(input: &str, engine: &SessionEngine) {
    let state = engine.state();
    match input {
        "/status" => {
            eprintln!("  Session: {}", state.id);
            eprintln!("  Started: {}", state.started_at.format("%Y-%m-%d %H:%M:%S UTC"));
            eprintln!("  Messages: {}", state.messages().len());
            eprintln!("  Mood: {}", state.current_emotion());
        }

        "/mood" => {
            eprintln!("  Current mood: {}", state.current_emotion());
        }

        "/history" => {
            for message in state.messages().iter() {
                let who = match message.sender {
                    crate::core::history::Sender::User => "you",
                    crate::core::history::Sender::Assistant => "assistant",
                };
                eprintln!(
                    "  [{}] {}: {}",
                    message.timestamp.format("%H:%M"),
                    who,
                    message.text,
                );
            }
        }

        "/help" => {
            eprintln!("Slash commands:");
            eprintln!("  /status            Show session status");
            eprintln!("  /mood              Show the detected mood");
            eprintln!("  /history           Show the transcript so far");
            eprintln!("  /help              Show this help");
            eprintln!("  /quit, quit, exit  End session");
        }

        _ => {
            eprintln!("Unknown command: {}. Type /help for commands.", input);
        }
    }
}
