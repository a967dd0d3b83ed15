pub mod chats;
pub mod completions;
pub mod mail;
pub mod output;
pub mod token;
pub mod utils;

use clap::{Parser, Subcommand, ValueEnum};

/// Outlook mail and Teams chats through Microsoft Graph (app-only credentials)
#[derive(Parser, Debug)]
#[command(name = "teams-graph")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Acquire an application access token
    Token(token::TokenCommand),

    /// Outlook mail operations
    Mail(mail::MailCommand),

    /// Teams chat operations
    Chats(chats::ChatsCommand),

    /// Generate shell completions
    Completions(completions::CompletionsCommand),
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    /// JSON output (raw Graph entries)
    Json,
    /// Table output (best for humans)
    #[default]
    Table,
    /// Plain output (minimal, for scripting)
    Plain,
}
