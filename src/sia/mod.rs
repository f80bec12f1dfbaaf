//! Client for the current Sia Central API.
//!
//! [`SiaClient`] covers host discovery, wallet lookups, transaction broadcast
//! and host troubleshooting. Each method makes exactly one request and either
//! returns the typed payload or a [`ClientError`](crate::ClientError).
//!
//! # Example
//!
//! ```rust,no_run
//! use siacentral::sia::{HostFilter, HostSort, SiaClient};
//!
//! # async fn example() -> Result<(), anyhow::Error> {
//! let client = SiaClient::mainnet()?;
//!
//! let hosts = client
//!     .get_active_hosts(
//!         0,
//!         50,
//!         &[
//!             HostFilter::AcceptingContracts(true),
//!             HostFilter::Sort { field: HostSort::Uptime, desc: true },
//!         ],
//!     )
//!     .await?;
//! for host in hosts {
//!     println!("{} {}", host.public_key, host.net_address);
//! }
//! # Ok(())
//! # }
//! ```

mod filters;
mod hosts;
pub(crate) mod troubleshoot;
mod wallet;

use url::Url;

use crate::http::{ClientConfig, HttpClient, HttpError};

pub use filters::{HostFilter, HostSort, MAX_HOSTS_LIMIT, QueryParams, clamp_page, host_query};
pub use hosts::NetworkAverages;
pub use wallet::{ApiFees, TransactionFees};

pub const SIA_MAINNET_URL: &str = "https://api.siacentral.com/v2";

#[derive(Debug, Clone)]
pub struct SiaClient {
    http: HttpClient,
}

impl SiaClient {
    pub fn new(config: ClientConfig) -> Result<Self, HttpError> {
        Ok(Self {
            http: HttpClient::new(config)?,
        })
    }

    /// Client for the public Sia Central endpoint with default settings.
    pub fn mainnet() -> Result<Self, HttpError> {
        Self::new(ClientConfig::new(Url::parse(SIA_MAINNET_URL)?))
    }

    pub fn with_http_client(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn base_url(&self) -> &Url {
        self.http.base_url()
    }
}
