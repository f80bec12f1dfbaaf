use log::debug;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::SiaClient;
use super::filters::{HostFilter, host_query};
use crate::endpoint::call;
use crate::error::ClientResult;
use crate::http::ResponseCheck;
use crate::types::{AvgHostBenchmark, HostConfig, HostDetails, RpcPriceTable, null_as_default};

/// Average settings, prices and benchmarks across active hosts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkAverages {
    pub settings: HostConfig,
    pub price_table: RpcPriceTable,
    /// RHP3 benchmark averages.
    pub benchmarks: AvgHostBenchmark,
    pub benchmarks_rhp2: AvgHostBenchmark,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct HostsPayload {
    #[serde(deserialize_with = "null_as_default")]
    hosts: Vec<HostDetails>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct HostPayload {
    host: HostDetails,
}

impl SiaClient {
    /// Gets the average settings and benchmarks of all active hosts.
    pub async fn get_network_averages(&self) -> ClientResult<NetworkAverages> {
        debug!("HTTP: Requesting network averages");
        call(
            &self.http,
            Method::GET,
            "/hosts/network/averages",
            None,
            ResponseCheck::StatusAndType,
        )
        .await
    }

    /// Lists hosts successfully scanned in the last 24 hours.
    ///
    /// `page` below zero is treated as 0; `limit` below zero or above
    /// [`MAX_HOSTS_LIMIT`](super::MAX_HOSTS_LIMIT) is treated as the maximum.
    /// Filters apply in order; a later filter on the same key wins.
    pub async fn get_active_hosts(
        &self,
        page: i64,
        limit: i64,
        filters: &[HostFilter],
    ) -> ClientResult<Vec<HostDetails>> {
        let query = host_query(page, limit, filters);
        let mut url = self.http.resolve("/hosts")?;
        url.query_pairs_mut().extend_pairs(query.iter());

        debug!(
            filters = filters.len(),
            url = url.as_str();
            "HTTP: Requesting active hosts"
        );

        let payload: HostsPayload =
            call(&self.http, Method::GET, url.as_str(), None, ResponseCheck::StatusAndType).await?;
        Ok(payload.hosts)
    }

    /// Finds a host by public key or net address.
    pub async fn get_host(&self, id: &str) -> ClientResult<HostDetails> {
        let url = self.http.resolve_with_segment("/hosts", id)?;
        debug!(id = id; "HTTP: Requesting host");

        let payload: HostPayload =
            call(&self.http, Method::GET, url.as_str(), None, ResponseCheck::StatusAndType).await?;
        Ok(payload.host)
    }
}
