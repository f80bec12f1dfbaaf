//! Client for the first generation (`/v1`) Sia Central wallet API.
//!
//! The legacy API shares the envelope and currency encoding of the current
//! one but reports balances with different field names and returns the Sia
//! Central fee next to the network fee range.

mod wallet;

use url::Url;

use crate::http::{ClientConfig, HttpClient, HttpError};

pub use wallet::{LegacyBalance, LegacyFees};

pub const LEGACY_MAINNET_URL: &str = "https://api.siacentral.com/v1";

#[derive(Debug, Clone)]
pub struct LegacyClient {
    http: HttpClient,
}

impl LegacyClient {
    pub fn new(config: ClientConfig) -> Result<Self, HttpError> {
        Ok(Self {
            http: HttpClient::new(config)?,
        })
    }

    pub fn mainnet() -> Result<Self, HttpError> {
        Self::new(ClientConfig::new(Url::parse(LEGACY_MAINNET_URL)?))
    }

    pub fn with_http_client(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn base_url(&self) -> &Url {
        self.http.base_url()
    }
}
