use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use serde::Serialize;
use serde_json::Value;

use siacentral::capability::{ConnectivityApi, WalletApi};
use siacentral::cli::{Cli, Commands, Network};
use siacentral::config::{Settings, load_configuration};
use siacentral::{LegacyClient, ScPrimeClient, SiaClient};

#[tokio::main]
async fn main() -> Result<()> {
    siacentral::logging::init_logging()?;

    let cli = Cli::parse();

    let overrides: Vec<(String, String)> = cli
        .base_url
        .iter()
        .map(|url| (cli.command.base_url_key().to_string(), url.clone()))
        .collect();
    let cfg = load_configuration(&cli.config, &overrides)?;
    let settings = Settings::from_config(cfg)?;

    match cli.command {
        Commands::Averages => {
            let client = SiaClient::new(settings.sia_client_config()?)?;
            print_json(&client.get_network_averages().await?)
        },
        Commands::Hosts(args) => {
            let client = SiaClient::new(settings.sia_client_config()?)?;
            let hosts = client
                .get_active_hosts(args.page, args.limit, &args.filters())
                .await?;
            info!(count = hosts.len(); "Fetched active hosts");
            print_json(&hosts)
        },
        Commands::Host { id } => {
            let client = SiaClient::new(settings.sia_client_config()?)?;
            print_json(&client.get_host(&id).await?)
        },
        Commands::Troubleshoot { netaddress, network } => match network {
            Network::Sia => {
                let client = SiaClient::new(settings.sia_client_config()?)?;
                troubleshoot(&client, &netaddress).await
            },
            Network::Scprime => {
                let client = ScPrimeClient::new(settings.scprime_client_config()?)?;
                troubleshoot(&client, &netaddress).await
            },
        },
        Commands::Fees { legacy: true } => {
            let client = LegacyClient::new(settings.legacy_client_config()?)?;
            print_json(&client.get_transaction_fees().await?)
        },
        Commands::Fees { legacy: false } => {
            let client = SiaClient::new(settings.sia_client_config()?)?;
            print_json(&client.get_fees().await?)
        },
        Commands::Balance {
            addresses,
            legacy,
            limit,
            page,
        } => {
            if legacy {
                let client = LegacyClient::new(settings.legacy_client_config()?)?;
                balance(&client, limit, page, &addresses).await
            } else {
                let client = SiaClient::new(settings.sia_client_config()?)?;
                balance(&client, limit, page, &addresses).await
            }
        },
        Commands::Used { addresses, legacy } => {
            let used = if legacy {
                let client = LegacyClient::new(settings.legacy_client_config()?)?;
                WalletApi::find_used_addresses(&client, &addresses).await?
            } else {
                let client = SiaClient::new(settings.sia_client_config()?)?;
                WalletApi::find_used_addresses(&client, &addresses).await?
            };
            print_json(&used)
        },
        Commands::Broadcast { file } => {
            let transactions = read_transactions(&file)?;
            let client = SiaClient::new(settings.sia_client_config()?)?;
            client.broadcast_transaction_set(&transactions).await?;
            info!(count = transactions.len(); "Transaction set broadcast");
            Ok(())
        },
    }
}

async fn troubleshoot<C: ConnectivityApi>(client: &C, netaddress: &str) -> Result<()> {
    let report = client.get_host_connectivity(netaddress).await?;
    print_json(&report)?;
    if !report.passed() {
        info!(netaddress = netaddress; "Host did not pass all connectivity checks");
    }
    Ok(())
}

async fn balance<C: WalletApi>(client: &C, limit: u32, page: u32, addresses: &[String]) -> Result<()> {
    match addresses {
        [address] => print_json(&client.get_address_balance(limit, page, address).await?),
        _ => print_json(&client.find_address_balance(limit, page, addresses).await?),
    }
}

fn read_transactions(path: &Path) -> Result<Vec<Value>> {
    let content = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("{} is not a JSON array of transactions", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let output = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{output}");
    Ok(())
}
