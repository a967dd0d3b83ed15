use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use teams_graph::{Config, GraphClient};

use super::output::{print_output, print_success};
use super::OutputFormat;

#[derive(Args, Debug)]
pub struct TokenCommand {
    /// Print the token value itself
    #[arg(long)]
    pub show: bool,
}

#[derive(Debug, Serialize, Tabled)]
struct TokenRow {
    #[tabled(rename = "Tenant")]
    tenant: String,
    #[tabled(rename = "Client")]
    client: String,
    #[tabled(rename = "Expires")]
    expires: u64,
}

pub async fn execute(cmd: TokenCommand, config: &Config, format: OutputFormat) -> Result<()> {
    let client = GraphClient::new(config)?;
    let token = client.get_access_token().await?;

    if cmd.show {
        println!("{}", token.value);
        return Ok(());
    }

    if let OutputFormat::Table = format {
        print_success("Access token acquired");
    }
    let rows = [TokenRow {
        tenant: config.auth.tenant_id.clone(),
        client: config.auth.client_id.clone(),
        expires: token.expires,
    }];
    print_output(&rows, format)
}
