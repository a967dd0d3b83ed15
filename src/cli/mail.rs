use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use teams_graph::{Config, GraphClient};

use super::output::{print_output, print_single, print_success};
use super::utils::{field, parse_recipients, read_body, truncate};
use super::OutputFormat;

#[derive(Args, Debug)]
pub struct MailCommand {
    #[command(subcommand)]
    pub command: MailSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum MailSubcommand {
    /// List mailbox messages
    List {
        /// User ID or email (default: USER_EMAIL)
        #[arg(short, long)]
        user: Option<String>,
    },

    /// Send an email
    Send {
        /// Recipient email address(es), comma-separated
        #[arg(short, long)]
        to: String,

        /// Email subject
        #[arg(short, long)]
        subject: String,

        /// Email body (omit to read from stdin or a file)
        body: Option<String>,

        /// Sending mailbox (default: USER_EMAIL)
        #[arg(long)]
        from: Option<String>,

        /// Read body from stdin
        #[arg(long)]
        stdin: bool,

        /// Read body from file
        #[arg(long)]
        file: Option<String>,
    },
}

#[derive(Debug, Serialize, Tabled)]
struct MailRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "From")]
    from: String,
    #[tabled(rename = "Subject")]
    subject: String,
    #[tabled(rename = "Received")]
    received: String,
}

pub async fn execute(cmd: MailCommand, config: &Config, format: OutputFormat) -> Result<()> {
    match cmd.command {
        MailSubcommand::List { user } => list(config, user, format).await,
        MailSubcommand::Send {
            to,
            subject,
            body,
            from,
            stdin,
            file,
        } => send(config, &to, &subject, body, from, stdin, file).await,
    }
}

async fn list(config: &Config, user: Option<String>, format: OutputFormat) -> Result<()> {
    let user = user.as_deref().unwrap_or(&config.user_email);
    let client = GraphClient::new(config)?;
    let token = client.get_access_token().await?;
    let messages = client.get_outlook_emails(&token.value, user).await?;

    match format {
        OutputFormat::Json => print_single(&messages),
        _ => {
            let rows: Vec<MailRow> = messages
                .iter()
                .map(|m| MailRow {
                    id: truncate(&field(m, "/id"), 12),
                    from: truncate(&field(m, "/from/emailAddress/address"), 30),
                    subject: truncate(&field(m, "/subject"), 40),
                    received: truncate(&field(m, "/receivedDateTime"), 20),
                })
                .collect();

            print_output(&rows, format)
        }
    }
}

async fn send(
    config: &Config,
    to: &str,
    subject: &str,
    body: Option<String>,
    from: Option<String>,
    stdin: bool,
    file: Option<String>,
) -> Result<()> {
    let content = read_body(body, stdin, file.as_deref())?;

    let recipients = parse_recipients(to);
    if recipients.is_empty() {
        bail!("At least one recipient is required");
    }

    let sender = from.as_deref().unwrap_or(&config.user_email);
    let client = GraphClient::new(config)?;
    let token = client.get_access_token().await?;

    client
        .send_outlook_email(&token.value, sender, subject, &content, recipients.as_slice())
        .await?;
    print_success("Email sent successfully");

    Ok(())
}
