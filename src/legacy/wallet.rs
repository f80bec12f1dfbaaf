use log::debug;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::LegacyClient;
use crate::endpoint::call;
use crate::error::ClientResult;
use crate::http::{ResponseCheck, check_address_count};
use crate::logging::mask_string;
use crate::types::{AddressUsage, Currency, SiacoinOutput, Transaction, null_as_default};

/// Fee range of the network plus the fee Sia Central adds, per byte.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyFees {
    pub minimum: Currency,
    pub maximum: Currency,
    pub sia_central: Currency,
}

/// Unspent siacoin outputs and recent transactions of one or more addresses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyBalance {
    #[serde(rename = "unspent_total")]
    pub unspent: Currency,
    #[serde(deserialize_with = "null_as_default")]
    pub unspent_outputs: Vec<SiacoinOutput>,
    #[serde(deserialize_with = "null_as_default")]
    pub transactions: Vec<Transaction>,
    #[serde(deserialize_with = "null_as_default")]
    pub unconfirmed_transactions: Vec<Transaction>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AddressesPayload {
    #[serde(deserialize_with = "null_as_default")]
    addresses: Vec<AddressUsage>,
}

impl LegacyClient {
    pub async fn get_transaction_fees(&self) -> ClientResult<LegacyFees> {
        debug!("HTTP: Requesting legacy transaction fees");
        call(&self.http, Method::GET, "/wallet/fees", None, ResponseCheck::StatusAndType).await
    }

    /// Gets unspent outputs and the latest transactions for a set of
    /// addresses. At most [`MAX_ADDRESSES`](crate::http::MAX_ADDRESSES) are
    /// accepted; larger sets fail before any request.
    pub async fn find_address_balance(
        &self,
        limit: u32,
        page: u32,
        addresses: &[String],
    ) -> ClientResult<LegacyBalance> {
        check_address_count(addresses)?;
        debug!(count = addresses.len(), limit = limit, page = page; "HTTP: Requesting legacy balance");

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

    pub async fn find_used_addresses(&self, addresses: &[String]) -> ClientResult<Vec<AddressUsage>> {
        check_address_count(addresses)?;
        debug!(count = addresses.len(); "HTTP: Requesting legacy used addresses");

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

    pub async fn get_address_balance(&self, limit: u32, page: u32, address: &str) -> ClientResult<LegacyBalance> {
        let mut url = self.http.resolve_with_segment("/wallet/addresses", address)?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string())
            .append_pair("page", &page.to_string());

        debug!(address = &*mask_string(address); "HTTP: Requesting legacy address balance");

        call(&self.http, Method::GET, url.as_str(), None, ResponseCheck::StatusAndType).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_reads_legacy_field_names() {
        let json = r#"{
            "unspent_total": "1000000000000000000000000",
            "unspent_outputs": [{ "output_id": "abc", "unlock_hash": "def", "value": "1000000000000000000000000" }],
            "transactions": [],
            "unconfirmed_transactions": []
        }"#;

        let balance: LegacyBalance = serde_json::from_str(json).unwrap();
        assert_eq!(balance.unspent, Currency::siacoins(1));
        assert_eq!(balance.unspent_outputs.len(), 1);
        assert_eq!(balance.unspent_outputs[0].output_id, "abc");
    }

    #[test]
    fn fees_include_sia_central_share() {
        let json = r#"{ "minimum": "10", "maximum": "20", "sia_central": "5" }"#;
        let fees: LegacyFees = serde_json::from_str(json).unwrap();
        assert_eq!(fees.sia_central, Currency::from(5u64));
        assert!(fees.minimum < fees.maximum);
    }

    #[test]
    fn balance_accepts_null_lists() {
        let json = r#"{ "unspent_total": "0", "unspent_outputs": null, "transactions": null, "unconfirmed_transactions": null }"#;
        let balance: LegacyBalance = serde_json::from_str(json).unwrap();
        assert!(balance.unspent_outputs.is_empty());
        assert!(balance.transactions.is_empty());
    }
}
