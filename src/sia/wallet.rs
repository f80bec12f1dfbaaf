use log::{debug, info};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::SiaClient;
use crate::endpoint::call;
use crate::error::ClientResult;
use crate::http::{Empty, HttpError, ResponseCheck, check_address_count};
use crate::logging::mask_string;
use crate::types::{AddressBalance, AddressUsage, Currency, null_as_default};

/// The fee Sia Central charges on transactions built through its wallet, and
/// where it is paid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiFees {
    pub address: String,
    pub fee: Currency,
}

/// Everything `/wallet/fees` reports: the recommended fee range per byte and
/// the API fee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionFees {
    pub minimum: Currency,
    pub maximum: Currency,
    pub api: ApiFees,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AddressesPayload {
    #[serde(deserialize_with = "null_as_default")]
    addresses: Vec<AddressUsage>,
}

impl SiaClient {
    /// Gets the fee range and the API fee in one request.
    pub async fn get_fees(&self) -> ClientResult<TransactionFees> {
        debug!("HTTP: Requesting transaction fees");
        call(&self.http, Method::GET, "/wallet/fees", None, ResponseCheck::StatusAndType).await
    }

    /// Gets the current minimum and maximum recommended transaction fees,
    /// per byte.
    pub async fn get_transaction_fees(&self) -> ClientResult<(Currency, Currency)> {
        let fees = self.get_fees().await?;
        Ok((fees.minimum, fees.maximum))
    }

    /// Gets the Sia Central API fee and its payout address.
    pub async fn get_api_fees(&self) -> ClientResult<ApiFees> {
        Ok(self.get_fees().await?.api)
    }

    /// Gets unspent outputs and the latest transactions for a set of
    /// addresses.
    ///
    /// Fails locally, without a request, when more than
    /// [`MAX_ADDRESSES`](crate::http::MAX_ADDRESSES) are supplied.
    pub async fn find_address_balance(
        &self,
        limit: u32,
        page: u32,
        addresses: &[String],
    ) -> ClientResult<AddressBalance> {
        check_address_count(addresses)?;
        debug!(
            count = addresses.len(),
            limit = limit,
            page = page;
            "HTTP: Requesting balance for address set"
        );

        let body = serde_json::json!({ "addresses": addresses });
        call(
            &self.http,
            Method::POST,
            &format!("/wallet/addresses?limit={limit}&page={page}"),
            Some(body),
            ResponseCheck::StatusAndType,
        )
        .await
    }

    /// Filters `addresses` down to those seen in a transaction on chain.
    ///
    /// Fails locally, without a request, when more than
    /// [`MAX_ADDRESSES`](crate::http::MAX_ADDRESSES) are supplied.
    pub async fn find_used_addresses(&self, addresses: &[String]) -> ClientResult<Vec<AddressUsage>> {
        check_address_count(addresses)?;
        debug!(count = addresses.len(); "HTTP: Requesting used addresses");

        let body = serde_json::json!({ "addresses": addresses });
        let payload: AddressesPayload = call(
            &self.http,
            Method::POST,
            "/wallet/addresses/used",
            Some(body),
            ResponseCheck::StatusAndType,
        )
        .await?;
        Ok(payload.addresses)
    }

    /// Gets unspent outputs and the latest transactions of one address.
    pub async fn get_address_balance(&self, limit: u32, page: u32, address: &str) -> ClientResult<AddressBalance> {
        let mut url = self.http.resolve_with_segment("/wallet/addresses", address)?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string())
            .append_pair("page", &page.to_string());

        debug!(address = &*mask_string(address); "HTTP: Requesting address balance");

        call(&self.http, Method::GET, url.as_str(), None, ResponseCheck::StatusAndType).await
    }

    /// Broadcasts a signed transaction set to the network.
    ///
    /// The transactions are sent as given; nothing is checked locally.
    pub async fn broadcast_transaction_set<T: Serialize>(&self, transactions: &[T]) -> ClientResult<()> {
        info!(target: "audit", count = transactions.len(); "HTTP: Broadcasting transaction set");

        let transactions = serde_json::to_value(transactions).map_err(HttpError::InvalidBody)?;
        let body = serde_json::json!({ "transactions": transactions });
        let _: Empty = call(
            &self.http,
            Method::POST,
            "/wallet/broadcast",
            Some(body),
            ResponseCheck::StatusAndType,
        )
        .await?;
        Ok(())
    }
}
