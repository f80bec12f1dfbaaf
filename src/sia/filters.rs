//! Filters and sort order for the host listing.
//!
//! Each [`HostFilter`] is a pure step from one parameter set to the next.
//! [`host_query`] folds them in the order given, so a later filter for the
//! same key replaces the earlier value and no key ever repeats, then appends
//! the clamped pagination parameters.

use crate::types::Currency;

const ACCEPT_CONTRACTS_PARAM: &str = "acceptcontracts";
const ONLINE_PARAM: &str = "online";
const BENCHMARKED_PARAM: &str = "benchmarked";
const MIN_AGE_PARAM: &str = "minage";
const MIN_UPTIME_PARAM: &str = "minuptime";
const MIN_DURATION_PARAM: &str = "minduration";
const MIN_STORAGE_PARAM: &str = "minstorage";
const MIN_UPLOAD_SPEED_PARAM: &str = "minuploadspeed";
const MIN_DOWNLOAD_SPEED_PARAM: &str = "mindownloadspeed";
const MAX_STORAGE_PRICE_PARAM: &str = "maxstorageprice";
const MAX_UPLOAD_PRICE_PARAM: &str = "maxuploadprice";
const MAX_DOWNLOAD_PRICE_PARAM: &str = "maxdownloadprice";
const MAX_CONTRACT_PRICE_PARAM: &str = "maxcontractprice";
const MAX_BASE_RPC_PRICE_PARAM: &str = "maxbaserpcprice";
const MAX_SECTOR_ACCESS_PRICE_PARAM: &str = "maxsectoraccessprice";
const SORT_PARAM: &str = "sort";
const DIR_PARAM: &str = "dir";
const PAGE_PARAM: &str = "page";
const LIMIT_PARAM: &str = "limit";

/// Largest page the host listing serves; also used when `limit` is out of range.
pub const MAX_HOSTS_LIMIT: i64 = 500;

/// Field the host listing is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostSort {
    DateCreated,
    NetAddress,
    PublicKey,
    AcceptingContracts,
    Uptime,
    UploadSpeed,
    DownloadSpeed,
    RemainingStorage,
    TotalStorage,
    UsedStorage,
    Age,
    Utilization,
    ContractPrice,
    StoragePrice,
    DownloadPrice,
    UploadPrice,
}

impl HostSort {
    pub const ALL: [HostSort; 16] = [
        HostSort::DateCreated,
        HostSort::NetAddress,
        HostSort::PublicKey,
        HostSort::AcceptingContracts,
        HostSort::Uptime,
        HostSort::UploadSpeed,
        HostSort::DownloadSpeed,
        HostSort::RemainingStorage,
        HostSort::TotalStorage,
        HostSort::UsedStorage,
        HostSort::Age,
        HostSort::Utilization,
        HostSort::ContractPrice,
        HostSort::StoragePrice,
        HostSort::DownloadPrice,
        HostSort::UploadPrice,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HostSort::DateCreated => "date_created",
            HostSort::NetAddress => "net_address",
            HostSort::PublicKey => "public_key",
            HostSort::AcceptingContracts => "accepting_contracts",
            HostSort::Uptime => "uptime",
            HostSort::UploadSpeed => "upload_speed",
            HostSort::DownloadSpeed => "download_speed",
            HostSort::RemainingStorage => "remaining_storage",
            HostSort::TotalStorage => "total_storage",
            HostSort::UsedStorage => "used_storage",
            HostSort::Age => "age",
            HostSort::Utilization => "utilization",
            HostSort::ContractPrice => "contract_price",
            HostSort::StoragePrice => "storage_price",
            HostSort::DownloadPrice => "download_price",
            HostSort::UploadPrice => "upload_price",
        }
    }
}

impl std::fmt::Display for HostSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HostSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HostSort::ALL
            .into_iter()
            .find(|sort| sort.as_str() == s)
            .ok_or_else(|| format!("unknown host sort field: {s}"))
    }
}

/// One restriction or ordering applied to the host listing.
#[derive(Debug, Clone, PartialEq)]
pub enum HostFilter {
    AcceptingContracts(bool),
    Online(bool),
    Benchmarked(bool),
    /// Minimum age in blocks.
    MinAge(u64),
    /// Minimum uptime ratio.
    MinUptime(f64),
    /// Minimum contract duration in blocks.
    MinDuration(u64),
    /// Minimum remaining storage in bytes.
    MinStorage(u64),
    MinUploadSpeed(u64),
    MinDownloadSpeed(u64),
    MaxStoragePrice(Currency),
    MaxUploadPrice(Currency),
    MaxDownloadPrice(Currency),
    MaxContractPrice(Currency),
    MaxBaseRpcPrice(Currency),
    MaxSectorAccessPrice(Currency),
    Sort { field: HostSort, desc: bool },
}

impl HostFilter {
    /// Returns `params` with this filter's key(s) set.
    #[must_use]
    pub fn apply(&self, params: QueryParams) -> QueryParams {
        match self {
            HostFilter::AcceptingContracts(v) => params.with(ACCEPT_CONTRACTS_PARAM, v.to_string()),
            HostFilter::Online(v) => params.with(ONLINE_PARAM, v.to_string()),
            HostFilter::Benchmarked(v) => params.with(BENCHMARKED_PARAM, v.to_string()),
            HostFilter::MinAge(v) => params.with(MIN_AGE_PARAM, v.to_string()),
            HostFilter::MinUptime(v) => params.with(MIN_UPTIME_PARAM, v.to_string()),
            HostFilter::MinDuration(v) => params.with(MIN_DURATION_PARAM, v.to_string()),
            HostFilter::MinStorage(v) => params.with(MIN_STORAGE_PARAM, v.to_string()),
            HostFilter::MinUploadSpeed(v) => params.with(MIN_UPLOAD_SPEED_PARAM, v.to_string()),
            HostFilter::MinDownloadSpeed(v) => params.with(MIN_DOWNLOAD_SPEED_PARAM, v.to_string()),
            HostFilter::MaxStoragePrice(p) => params.with(MAX_STORAGE_PRICE_PARAM, p.to_string()),
            HostFilter::MaxUploadPrice(p) => params.with(MAX_UPLOAD_PRICE_PARAM, p.to_string()),
            HostFilter::MaxDownloadPrice(p) => params.with(MAX_DOWNLOAD_PRICE_PARAM, p.to_string()),
            HostFilter::MaxContractPrice(p) => params.with(MAX_CONTRACT_PRICE_PARAM, p.to_string()),
            HostFilter::MaxBaseRpcPrice(p) => params.with(MAX_BASE_RPC_PRICE_PARAM, p.to_string()),
            HostFilter::MaxSectorAccessPrice(p) => params.with(MAX_SECTOR_ACCESS_PRICE_PARAM, p.to_string()),
            HostFilter::Sort { field, desc } => params
                .with(SORT_PARAM, field.as_str())
                .with(DIR_PARAM, if *desc { "desc" } else { "asc" }),
        }
    }
}

/// Ordered query parameters with unique keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Sets `key`, replacing any existing value in place.
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key.to_string(), value)),
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Clamps pagination: negative `page` becomes 0, `limit` outside `0..=500`
/// becomes 500.
pub fn clamp_page(page: i64, limit: i64) -> (i64, i64) {
    let page = page.max(0);
    let limit = if !(0..=MAX_HOSTS_LIMIT).contains(&limit) {
        MAX_HOSTS_LIMIT
    } else {
        limit
    };
    (page, limit)
}

/// Builds the full query for the host listing.
pub fn host_query(page: i64, limit: i64, filters: &[HostFilter]) -> QueryParams {
    let (page, limit) = clamp_page(page, limit);
    filters
        .iter()
        .fold(QueryParams::default(), |params, filter| filter.apply(params))
        .with(PAGE_PARAM, page.to_string())
        .with(LIMIT_PARAM, limit.to_string())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn sample_filters() -> Vec<HostFilter> {
        vec![
            HostFilter::AcceptingContracts(true),
            HostFilter::Online(true),
            HostFilter::Benchmarked(false),
            HostFilter::MinAge(1008),
            HostFilter::MinUptime(0.95),
            HostFilter::MinDuration(4320),
            HostFilter::MinStorage(1 << 40),
            HostFilter::MinUploadSpeed(1_000_000),
            HostFilter::MinDownloadSpeed(2_000_000),
            HostFilter::MaxStoragePrice(Currency::siacoins(1000)),
            HostFilter::MaxUploadPrice(Currency::siacoins(1)),
            HostFilter::MaxDownloadPrice(Currency::siacoins(2)),
            HostFilter::MaxContractPrice(Currency::new(7)),
            HostFilter::MaxBaseRpcPrice(Currency::new(8)),
            HostFilter::MaxSectorAccessPrice(Currency::new(9)),
            HostFilter::Sort {
                field: HostSort::Uptime,
                desc: true,
            },
        ]
    }

    fn expected_keys(filter: &HostFilter) -> Vec<&'static str> {
        match filter {
            HostFilter::AcceptingContracts(_) => vec![ACCEPT_CONTRACTS_PARAM],
            HostFilter::Online(_) => vec![ONLINE_PARAM],
            HostFilter::Benchmarked(_) => vec![BENCHMARKED_PARAM],
            HostFilter::MinAge(_) => vec![MIN_AGE_PARAM],
            HostFilter::MinUptime(_) => vec![MIN_UPTIME_PARAM],
            HostFilter::MinDuration(_) => vec![MIN_DURATION_PARAM],
            HostFilter::MinStorage(_) => vec![MIN_STORAGE_PARAM],
            HostFilter::MinUploadSpeed(_) => vec![MIN_UPLOAD_SPEED_PARAM],
            HostFilter::MinDownloadSpeed(_) => vec![MIN_DOWNLOAD_SPEED_PARAM],
            HostFilter::MaxStoragePrice(_) => vec![MAX_STORAGE_PRICE_PARAM],
            HostFilter::MaxUploadPrice(_) => vec![MAX_UPLOAD_PRICE_PARAM],
            HostFilter::MaxDownloadPrice(_) => vec![MAX_DOWNLOAD_PRICE_PARAM],
            HostFilter::MaxContractPrice(_) => vec![MAX_CONTRACT_PRICE_PARAM],
            HostFilter::MaxBaseRpcPrice(_) => vec![MAX_BASE_RPC_PRICE_PARAM],
            HostFilter::MaxSectorAccessPrice(_) => vec![MAX_SECTOR_ACCESS_PRICE_PARAM],
            HostFilter::Sort { .. } => vec![SORT_PARAM, DIR_PARAM],
        }
    }

    #[test]
    fn test_every_filter_subset_sets_exactly_its_keys() {
        let filters = sample_filters();
        let n = filters.len();

        // Walk a spread of subsets, including empty and full, without the full 2^16 grid.
        let masks = (0u32..(1 << n)).step_by(257).chain([0, (1 << n) - 1]);
        for mask in masks {
            let chosen: Vec<HostFilter> = (0..n)
                .filter(|i| mask & (1 << i) != 0)
                .map(|i| filters[i].clone())
                .collect();

            let query = host_query(1, 50, &chosen);
            let keys: Vec<&str> = query.keys().collect();
            let unique: HashSet<&str> = keys.iter().copied().collect();
            assert_eq!(keys.len(), unique.len(), "duplicate key for mask {mask:#x}");

            let mut expected: HashSet<&str> = chosen.iter().flat_map(expected_keys).collect();
            expected.insert(PAGE_PARAM);
            expected.insert(LIMIT_PARAM);
            assert_eq!(unique, expected, "mask {mask:#x}");
        }
    }

    #[test]
    fn test_repeated_filter_keeps_last_value_once() {
        let query = host_query(
            0,
            10,
            &[
                HostFilter::Online(true),
                HostFilter::Sort {
                    field: HostSort::Age,
                    desc: false,
                },
                HostFilter::Online(false),
                HostFilter::Sort {
                    field: HostSort::StoragePrice,
                    desc: true,
                },
            ],
        );

        assert_eq!(query.len(), 5);
        assert_eq!(query.get(ONLINE_PARAM), Some("false"));
        assert_eq!(query.get(SORT_PARAM), Some("storage_price"));
        assert_eq!(query.get(DIR_PARAM), Some("desc"));
        // First insertion position is kept.
        assert_eq!(query.keys().next(), Some(ONLINE_PARAM));
    }

    #[test]
    fn test_value_rendering() {
        let query = host_query(
            2,
            20,
            &[
                HostFilter::AcceptingContracts(true),
                HostFilter::MinUptime(0.95),
                HostFilter::MinStorage(1_000),
                HostFilter::MaxStoragePrice("123456789012345678901234567890".parse().unwrap()),
                HostFilter::Sort {
                    field: HostSort::UsedStorage,
                    desc: false,
                },
            ],
        );

        assert_eq!(query.get(ACCEPT_CONTRACTS_PARAM), Some("true"));
        assert_eq!(query.get(MIN_UPTIME_PARAM), Some("0.95"));
        assert_eq!(query.get(MIN_STORAGE_PARAM), Some("1000"));
        assert_eq!(query.get(MAX_STORAGE_PRICE_PARAM), Some("123456789012345678901234567890"));
        assert_eq!(query.get(SORT_PARAM), Some("used_storage"));
        assert_eq!(query.get(DIR_PARAM), Some("asc"));
        assert_eq!(query.get(PAGE_PARAM), Some("2"));
        assert_eq!(query.get(LIMIT_PARAM), Some("20"));
        assert_eq!(HostFilter::MinUptime(1.0).apply(QueryParams::default()).get(MIN_UPTIME_PARAM), Some("1"));
    }

    #[test]
    fn test_pagination_clamping() {
        assert_eq!(clamp_page(0, -1), (0, 500));
        assert_eq!(clamp_page(0, 501), (0, 500));
        assert_eq!(clamp_page(0, 500), (0, 500));
        assert_eq!(clamp_page(0, 0), (0, 0));
        assert_eq!(clamp_page(-1, 10), (0, 10));
        assert_eq!(clamp_page(3, 10), (3, 10));

        let query = host_query(-5, 9999, &[]);
        assert_eq!(query.get(PAGE_PARAM), Some("0"));
        assert_eq!(query.get(LIMIT_PARAM), Some("500"));
        assert_eq!(query.len(), 2);
    }

    #[test]
    fn test_sort_field_names_round_trip() {
        for sort in HostSort::ALL {
            assert_eq!(sort.as_str().parse::<HostSort>().unwrap(), sort);
        }
        assert!("fastest".parse::<HostSort>().is_err());
    }
}
