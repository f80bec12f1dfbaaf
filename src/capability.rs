//! Operations shared by more than one client generation.
//!
//! Code that only needs wallet lookups or host probes can be written once
//! against these traits and handed any client that supports them.

use serde::Serialize;

use crate::error::ClientResult;
use crate::legacy::{LegacyBalance, LegacyClient};
use crate::scprime::ScPrimeClient;
use crate::sia::SiaClient;
use crate::types::{AddressBalance, AddressUsage, ConnectionReport, Currency};

#[allow(async_fn_in_trait)]
pub trait WalletApi {
    type Balance: Serialize;

    /// Minimum and maximum recommended fee per byte.
    async fn fee_range(&self) -> ClientResult<(Currency, Currency)>;

    async fn find_address_balance(&self, limit: u32, page: u32, addresses: &[String])
    -> ClientResult<Self::Balance>;

    async fn find_used_addresses(&self, addresses: &[String]) -> ClientResult<Vec<AddressUsage>>;

    async fn get_address_balance(&self, limit: u32, page: u32, address: &str) -> ClientResult<Self::Balance>;
}

#[allow(async_fn_in_trait)]
pub trait ConnectivityApi {
    async fn get_host_connectivity(&self, netaddress: &str) -> ClientResult<ConnectionReport>;
}

impl WalletApi for SiaClient {
    type Balance = AddressBalance;

    async fn fee_range(&self) -> ClientResult<(Currency, Currency)> {
        self.get_transaction_fees().await
    }

    async fn find_address_balance(
        &self,
        limit: u32,
        page: u32,
        addresses: &[String],
    ) -> ClientResult<AddressBalance> {
        SiaClient::find_address_balance(self, limit, page, addresses).await
    }

    async fn find_used_addresses(&self, addresses: &[String]) -> ClientResult<Vec<AddressUsage>> {
        SiaClient::find_used_addresses(self, addresses).await
    }

    async fn get_address_balance(&self, limit: u32, page: u32, address: &str) -> ClientResult<AddressBalance> {
        SiaClient::get_address_balance(self, limit, page, address).await
    }
}

impl WalletApi for LegacyClient {
    type Balance = LegacyBalance;

    async fn fee_range(&self) -> ClientResult<(Currency, Currency)> {
        let fees = self.get_transaction_fees().await?;
        Ok((fees.minimum, fees.maximum))
    }

    async fn find_address_balance(&self, limit: u32, page: u32, addresses: &[String]) -> ClientResult<LegacyBalance> {
        LegacyClient::find_address_balance(self, limit, page, addresses).await
    }

    async fn find_used_addresses(&self, addresses: &[String]) -> ClientResult<Vec<AddressUsage>> {
        LegacyClient::find_used_addresses(self, addresses).await
    }

    async fn get_address_balance(&self, limit: u32, page: u32, address: &str) -> ClientResult<LegacyBalance> {
        LegacyClient::get_address_balance(self, limit, page, address).await
    }
}

impl ConnectivityApi for SiaClient {
    async fn get_host_connectivity(&self, netaddress: &str) -> ClientResult<ConnectionReport> {
        SiaClient::get_host_connectivity(self, netaddress).await
    }
}

impl ConnectivityApi for ScPrimeClient {
    async fn get_host_connectivity(&self, netaddress: &str) -> ClientResult<ConnectionReport> {
        ScPrimeClient::get_host_connectivity(self, netaddress).await
    }
}
