//! Client for the ScPrime network endpoints of the Sia Central API.

use url::Url;

use crate::error::ClientResult;
use crate::http::{ClientConfig, HttpClient, HttpError};
use crate::sia::troubleshoot::probe;
use crate::types::ConnectionReport;

pub const SCPRIME_MAINNET_URL: &str = "https://api.siacentral.com/v2/scprime";

#[derive(Debug, Clone)]
pub struct ScPrimeClient {
    http: HttpClient,
}

impl ScPrimeClient {
    pub fn new(config: ClientConfig) -> Result<Self, HttpError> {
        Ok(Self {
            http: HttpClient::new(config)?,
        })
    }

    pub fn mainnet() -> Result<Self, HttpError> {
        Self::new(ClientConfig::new(Url::parse(SCPRIME_MAINNET_URL)?))
    }

    pub fn with_http_client(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn base_url(&self) -> &Url {
        self.http.base_url()
    }

    /// Checks that a ScPrime host is running and connectable at `netaddress`.
    ///
    /// Like the Sia probe, success is decided by HTTP status alone.
    pub async fn get_host_connectivity(&self, netaddress: &str) -> ClientResult<ConnectionReport> {
        probe(&self.http, netaddress).await
    }
}
