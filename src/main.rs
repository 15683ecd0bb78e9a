// src/main.rs — MindMate entry point

use clap::Parser;

use mindmate::cli::{self, Cli, Commands};
use mindmate::infra::config::Config;
use mindmate::infra::logger;

#[tokio::main]
async fn main() {
    // Initialize logging (respects MINDMATE_LOG / RUST_LOG)
    logger::init_logging("warn");

    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load config (falls back to defaults if no config.toml)
    let config = if let Some(ref path) = cli.config {
        Config::load_from(std::path::Path::new(path))?
    } else {
        Config::load()?
    };

    match cli.command {
        Some(Commands::Ask { text }) => {
            let message = text.join(" ");
            cli::ask::run_ask(&config, &message).await
        }
        Some(Commands::Chat) | None => cli::chat::run_chat(&config).await,
    }
}
