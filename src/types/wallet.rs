//! Ledger records returned by the wallet endpoints.
//!
//! These are read-only views of what the indexer knows about a set of
//! addresses. They are handed to the caller as decoded and never rebuilt or
//! checked locally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Currency, null_as_default};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiacoinOutput {
    pub output_id: String,
    pub unlock_hash: String,
    pub value: Currency,
    /// What created the output, e.g. `transaction` or `miner_payout`.
    pub source: String,
    pub maturity_height: u64,
    pub block_height: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiafundOutput {
    pub output_id: String,
    pub unlock_hash: String,
    pub value: Currency,
    pub claim_start: Currency,
    pub block_height: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiacoinInput {
    pub output_id: String,
    pub unlock_hash: String,
    pub value: Currency,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiafundInput {
    pub output_id: String,
    pub unlock_hash: String,
    pub value: Currency,
    pub claim_value: Currency,
}

/// A transaction touching one of the queried addresses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    pub transaction_id: String,
    pub block_id: String,
    pub block_height: u64,
    pub confirmations: u64,
    pub timestamp: DateTime<Utc>,
    pub fees: Currency,
    #[serde(deserialize_with = "null_as_default")]
    pub siacoin_inputs: Vec<SiacoinInput>,
    #[serde(deserialize_with = "null_as_default")]
    pub siacoin_outputs: Vec<SiacoinOutput>,
    #[serde(deserialize_with = "null_as_default")]
    pub siafund_inputs: Vec<SiafundInput>,
    #[serde(deserialize_with = "null_as_default")]
    pub siafund_outputs: Vec<SiafundOutput>,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressUsage {
    pub address: String,
    pub used: bool,
}

/// Balance, unspent outputs and recent transactions for one or more addresses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressBalance {
    pub unspent_siacoins: Currency,
    pub unspent_siafunds: Currency,
    #[serde(deserialize_with = "null_as_default")]
    pub unspent_siacoin_outputs: Vec<SiacoinOutput>,
    #[serde(deserialize_with = "null_as_default")]
    pub unspent_siafund_outputs: Vec<SiafundOutput>,
    #[serde(deserialize_with = "null_as_default")]
    pub transactions: Vec<Transaction>,
    #[serde(deserialize_with = "null_as_default")]
    pub unconfirmed_transactions: Vec<Transaction>,
    pub siafund_claim: Currency,
}

impl AddressBalance {
    /// Sum of the listed unspent siacoin outputs. May differ from
    /// `unspent_siacoins` when the server paginates the output list.
    pub fn listed_siacoin_total(&self) -> Currency {
        self.unspent_siacoin_outputs.iter().map(|o| o.value.clone()).sum()
    }
}
