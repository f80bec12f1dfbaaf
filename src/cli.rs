use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::DEFAULT_CONFIG_FILE;
use crate::sia::{HostFilter, HostSort, MAX_HOSTS_LIMIT};
use crate::types::Currency;

#[derive(Parser)]
#[command(name = "siacentral")]
#[command(about = "Query the Sia Central blockchain API", long_about = None)]
pub struct Cli {
    #[arg(short, long, help = "Path to the configuration file", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
    #[arg(
        short = 'u',
        long,
        help = "Base URL for the API used by the command, overriding the configuration"
    )]
    pub base_url: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Network {
    Sia,
    Scprime,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show average settings, prices and benchmarks across active hosts
    Averages,
    /// List hosts scanned successfully in the last 24 hours
    Hosts(HostsArgs),
    /// Show a single host by public key or net address
    Host {
        #[arg(help = "Public key or net address of the host")]
        id: String,
    },
    /// Check that a host is running and connectable
    Troubleshoot {
        #[arg(help = "Net address of the host, e.g. host.example.com:9982")]
        netaddress: String,
        #[arg(short, long, value_enum, default_value_t = Network::Sia, help = "Network the host belongs to")]
        network: Network,
    },
    /// Show recommended transaction fees and the API fee
    Fees {
        #[arg(long, help = "Use the legacy v1 API")]
        legacy: bool,
    },
    /// Show unspent outputs and recent transactions of one or more addresses
    Balance {
        #[arg(required = true, help = "Wallet addresses")]
        addresses: Vec<String>,
        #[arg(long, help = "Use the legacy v1 API")]
        legacy: bool,
        #[arg(short, long, help = "Number of transactions per page", default_value_t = 100)]
        limit: u32,
        #[arg(short, long, help = "Page of transactions", default_value_t = 0)]
        page: u32,
    },
    /// Show which addresses have been used on chain
    Used {
        #[arg(required = true, help = "Wallet addresses")]
        addresses: Vec<String>,
        #[arg(long, help = "Use the legacy v1 API")]
        legacy: bool,
    },
    /// Broadcast a signed transaction set read from a JSON file
    Broadcast {
        #[arg(help = "Path to a JSON array of signed transactions")]
        file: PathBuf,
    },
}

#[derive(Args, Debug, Default)]
pub struct HostsArgs {
    #[arg(short, long, help = "Page of hosts", default_value_t = 0)]
    pub page: i64,
    #[arg(short, long, help = "Hosts per page", default_value_t = MAX_HOSTS_LIMIT)]
    pub limit: i64,
    #[arg(long, help = "Only hosts accepting (or refusing) contracts")]
    pub accepting_contracts: Option<bool>,
    #[arg(long, help = "Only online (or offline) hosts")]
    pub online: Option<bool>,
    #[arg(long, help = "Only benchmarked (or unbenchmarked) hosts")]
    pub benchmarked: Option<bool>,
    #[arg(long, help = "Minimum age in blocks")]
    pub min_age: Option<u64>,
    #[arg(long, help = "Minimum uptime ratio between 0 and 1")]
    pub min_uptime: Option<f64>,
    #[arg(long, help = "Minimum contract duration in blocks")]
    pub min_duration: Option<u64>,
    #[arg(long, help = "Minimum remaining storage in bytes")]
    pub min_storage: Option<u64>,
    #[arg(long, help = "Minimum upload speed")]
    pub min_upload_speed: Option<u64>,
    #[arg(long, help = "Minimum download speed")]
    pub min_download_speed: Option<u64>,
    #[arg(long, help = "Maximum storage price in hastings")]
    pub max_storage_price: Option<Currency>,
    #[arg(long, help = "Maximum upload price in hastings")]
    pub max_upload_price: Option<Currency>,
    #[arg(long, help = "Maximum download price in hastings")]
    pub max_download_price: Option<Currency>,
    #[arg(long, help = "Maximum contract price in hastings")]
    pub max_contract_price: Option<Currency>,
    #[arg(long, help = "Maximum base RPC price in hastings")]
    pub max_base_rpc_price: Option<Currency>,
    #[arg(long, help = "Maximum sector access price in hastings")]
    pub max_sector_access_price: Option<Currency>,
    #[arg(long, help = "Field to sort by, e.g. uptime or storage_price")]
    pub sort: Option<HostSort>,
    #[arg(long, help = "Sort descending", requires = "sort")]
    pub desc: bool,
}

impl HostsArgs {
    /// Filters selected on the command line, in flag order.
    pub fn filters(&self) -> Vec<HostFilter> {
        let mut filters = Vec::new();
        filters.extend(self.accepting_contracts.map(HostFilter::AcceptingContracts));
        filters.extend(self.online.map(HostFilter::Online));
        filters.extend(self.benchmarked.map(HostFilter::Benchmarked));
        filters.extend(self.min_age.map(HostFilter::MinAge));
        filters.extend(self.min_uptime.map(HostFilter::MinUptime));
        filters.extend(self.min_duration.map(HostFilter::MinDuration));
        filters.extend(self.min_storage.map(HostFilter::MinStorage));
        filters.extend(self.min_upload_speed.map(HostFilter::MinUploadSpeed));
        filters.extend(self.min_download_speed.map(HostFilter::MinDownloadSpeed));
        filters.extend(self.max_storage_price.clone().map(HostFilter::MaxStoragePrice));
        filters.extend(self.max_upload_price.clone().map(HostFilter::MaxUploadPrice));
        filters.extend(self.max_download_price.clone().map(HostFilter::MaxDownloadPrice));
        filters.extend(self.max_contract_price.clone().map(HostFilter::MaxContractPrice));
        filters.extend(self.max_base_rpc_price.clone().map(HostFilter::MaxBaseRpcPrice));
        filters.extend(self.max_sector_access_price.clone().map(HostFilter::MaxSectorAccessPrice));
        filters.extend(self.sort.map(|field| HostFilter::Sort { field, desc: self.desc }));
        filters
    }
}

impl Commands {
    /// Configuration key of the base URL this command talks to.
    pub fn base_url_key(&self) -> &'static str {
        match self {
            Commands::Troubleshoot {
                network: Network::Scprime,
                ..
            } => "scprime.base_url",
            Commands::Fees { legacy: true }
            | Commands::Balance { legacy: true, .. }
            | Commands::Used { legacy: true, .. } => "legacy.base_url",
            _ => "sia.base_url",
        }
    }
}
