mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use teams_graph::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so JSON on stdout stays parseable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "teams_graph=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    // Credentials are resolved once, and only for commands that reach Graph
    match cli.command {
        Commands::Token(cmd) => cli::token::execute(cmd, &Config::load()?, cli.format).await,
        Commands::Mail(cmd) => cli::mail::execute(cmd, &Config::load()?, cli.format).await,
        Commands::Chats(cmd) => cli::chats::execute(cmd, &Config::load()?, cli.format).await,
        Commands::Completions(cmd) => cli::completions::execute(cmd),
    }
}
