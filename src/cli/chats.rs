use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use teams_graph::{Config, GraphClient};

use super::output::{print_output, print_single};
use super::utils::{field, truncate};
use super::OutputFormat;

#[derive(Args, Debug)]
pub struct ChatsCommand {
    #[command(subcommand)]
    pub command: ChatsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ChatsSubcommand {
    /// List a user's chats
    List {
        /// User ID or email (default: USER_EMAIL)
        #[arg(short, long)]
        user: Option<String>,
    },
}

#[derive(Debug, Serialize, Tabled)]
struct ChatRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Topic")]
    topic: String,
    #[tabled(rename = "Type")]
    chat_type: String,
    #[tabled(rename = "Created")]
    created: String,
}

pub async fn execute(cmd: ChatsCommand, config: &Config, format: OutputFormat) -> Result<()> {
    match cmd.command {
        ChatsSubcommand::List { user } => list(config, user, format).await,
    }
}

async fn list(config: &Config, user: Option<String>, format: OutputFormat) -> Result<()> {
    let user = user.as_deref().unwrap_or(&config.user_email);
    let client = GraphClient::new(config)?;
    let token = client.get_access_token().await?;
    let chats = client.get_teams_messages(&token.value, user).await?;

    match format {
        OutputFormat::Json => print_single(&chats),
        _ => {
            let rows: Vec<ChatRow> = chats
                .iter()
                .map(|c| ChatRow {
                    id: truncate(&field(c, "/id"), 40),
                    topic: truncate(&field(c, "/topic"), 30),
                    chat_type: field(c, "/chatType"),
                    created: truncate(&field(c, "/createdDateTime"), 20),
                })
                .collect();

            print_output(&rows, format)
        }
    }
}
