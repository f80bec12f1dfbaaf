//! Host records: announced settings, RPC price table and benchmark results.
//!
//! Fields are independent measurements reported by the API. Nothing here is
//! validated client-side; the server is the source of truth. Every struct
//! defaults missing fields so partially populated records still decode.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Currency, UniqueId, duration_nanos};

/// Settings a host announces to renters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    #[serde(rename = "acceptingcontracts")]
    pub accepting_contracts: bool,
    #[serde(rename = "maxdownloadbatchsize")]
    pub max_download_batch_size: u64,
    #[serde(rename = "maxduration")]
    pub max_duration: u64,
    #[serde(rename = "maxrevisebatchsize")]
    pub max_revise_batch_size: u64,
    #[serde(rename = "netaddress")]
    pub net_address: String,
    #[serde(rename = "remainingstorage")]
    pub remaining_storage: u64,
    #[serde(rename = "sectorsize")]
    pub sector_size: u64,
    #[serde(rename = "totalstorage")]
    pub total_storage: u64,
    #[serde(rename = "unlockhash")]
    pub unlock_hash: String,
    #[serde(rename = "windowsize")]
    pub window_size: u64,

    pub collateral: Currency,
    #[serde(rename = "maxcollateral")]
    pub max_collateral: Currency,

    #[serde(rename = "baserpcprice")]
    pub base_rpc_price: Currency,
    #[serde(rename = "contractprice")]
    pub contract_price: Currency,
    #[serde(rename = "downloadbandwidthprice")]
    pub download_bandwidth_price: Currency,
    #[serde(rename = "sectoraccessprice")]
    pub sector_access_price: Currency,
    #[serde(rename = "storageprice")]
    pub storage_price: Currency,
    #[serde(rename = "uploadbandwidthprice")]
    pub upload_bandwidth_price: Currency,

    #[serde(rename = "ephemeralaccountexpiry", with = "duration_nanos")]
    pub ephemeral_account_expiry: Duration,
    #[serde(rename = "maxephemeralaccountbalance")]
    pub max_ephemeral_account_balance: Currency,

    #[serde(rename = "revisionnumber")]
    pub revision_number: u64,
    pub version: String,
    #[serde(rename = "siamuxport")]
    pub sia_mux_port: String,
}

/// Cost of executing RPCs on a host.
///
/// Each host sets its own prices for the individual program instructions and
/// RPCs. A table is valid for `validity` after it was issued.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RpcPriceTable {
    /// Identifies this particular price table.
    pub uid: UniqueId,
    #[serde(with = "duration_nanos")]
    pub validity: Duration,
    #[serde(rename = "hostblockheight")]
    pub host_block_height: u64,

    #[serde(rename = "updatepricetablecost")]
    pub update_price_table_cost: Currency,
    #[serde(rename = "accountbalancecost")]
    pub account_balance_cost: Currency,
    #[serde(rename = "fundaccountcost")]
    pub fund_account_cost: Currency,
    #[serde(rename = "latestrevisioncost")]
    pub latest_revision_cost: Currency,
    #[serde(rename = "subscriptionmemorycost")]
    pub subscription_memory_cost: Currency,
    #[serde(rename = "subscriptionnotificationcost")]
    pub subscription_notification_cost: Currency,

    /// Charged once when a program starts, before memory costs.
    #[serde(rename = "initbasecost")]
    pub init_base_cost: Currency,
    /// Per byte per unit of time of program memory.
    #[serde(rename = "memorytimecost")]
    pub memory_time_cost: Currency,

    #[serde(rename = "downloadbandwidthcost")]
    pub download_bandwidth_cost: Currency,
    #[serde(rename = "uploadbandwidthcost")]
    pub upload_bandwidth_cost: Currency,

    #[serde(rename = "dropsectorsbasecost")]
    pub drop_sectors_base_cost: Currency,
    #[serde(rename = "dropsectorsunitcost")]
    pub drop_sectors_unit_cost: Currency,
    #[serde(rename = "hassectorbasecost")]
    pub has_sector_base_cost: Currency,
    #[serde(rename = "readbasecost")]
    pub read_base_cost: Currency,
    #[serde(rename = "readlengthcost")]
    pub read_length_cost: Currency,
    #[serde(rename = "renewcontractcost")]
    pub renew_contract_cost: Currency,
    #[serde(rename = "revisionbasecost")]
    pub revision_base_cost: Currency,
    #[serde(rename = "swapsectorcost")]
    pub swap_sector_cost: Currency,

    /// Per write.
    #[serde(rename = "writebasecost")]
    pub write_base_cost: Currency,
    /// Per byte written.
    #[serde(rename = "writelengthcost")]
    pub write_length_cost: Currency,
    /// Per byte per block of additional storage.
    #[serde(rename = "writestorecost")]
    pub write_store_cost: Currency,

    #[serde(rename = "txnfeeminrecommended")]
    pub txn_fee_min_recommended: Currency,
    #[serde(rename = "txnfeemaxrecommended")]
    pub txn_fee_max_recommended: Currency,

    /// Flat fee for forming or renewing a contract.
    #[serde(rename = "contractprice")]
    pub contract_price: Currency,
    /// Per byte the host locks away as collateral for new data.
    #[serde(rename = "collateralcost")]
    pub collateral_cost: Currency,
    #[serde(rename = "maxcollateral")]
    pub max_collateral: Currency,
    #[serde(rename = "maxduration")]
    pub max_duration: u64,
    #[serde(rename = "windowsize")]
    pub window_size: u64,

    #[serde(rename = "registryentriesleft")]
    pub registry_entries_left: u64,
    #[serde(rename = "registryentriestotal")]
    pub registry_entries_total: u64,
}

/// Network-wide benchmark averages, in milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvgHostBenchmark {
    pub contract_time: f64,
    pub upload_time: f64,
    pub download_time: f64,
    pub ttfb: f64,
}

/// The most recent benchmark of a single host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostBenchmark {
    pub timestamp: DateTime<Utc>,
    pub success: bool,
    pub error: String,
    pub contract_time: f64,
    pub upload_time: f64,
    pub download_time: f64,
    pub ttfb: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostDetails {
    pub public_key: String,
    #[serde(rename = "netaddress")]
    pub net_address: String,
    pub version: String,
    pub country_code: String,
    pub online: bool,
    pub benchmarked: bool,
    pub estimated_uptime: f64,
    pub total_scans: u64,
    pub successful_scans: u64,
    pub first_seen_height: u64,
    pub first_seen_timestamp: DateTime<Utc>,
    pub last_scan: DateTime<Utc>,
    pub last_success_scan: DateTime<Utc>,
    pub last_announcement: DateTime<Utc>,
    pub settings: HostConfig,
    pub price_table: Option<RpcPriceTable>,
    pub benchmark: Option<HostBenchmark>,
    pub benchmark_rhp2: Option<HostBenchmark>,
}
