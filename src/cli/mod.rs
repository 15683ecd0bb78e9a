// src/cli/mod.rs — CLI definition (clap derive)

pub mod ask;
pub mod chat;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mindmate", about = "Emotion-aware AI companion", version)]
pub struct Cli {
    /// Config file path
    #[arg(long)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive chat session (the default when no subcommand is given)
    Chat,
    /// Run a single turn and print the reply
    Ask {
        /// Message text
        #[arg(trailing_var_arg = true, required = true)]
        text: Vec<String>,
    },
}
