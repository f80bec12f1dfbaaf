use log::debug;
use reqwest::Method;
use serde::Deserialize;

use super::SiaClient;
use crate::endpoint::call;
use crate::error::ClientResult;
use crate::http::{HttpClient, ResponseCheck};
use crate::types::ConnectionReport;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConnectionPayload {
    report: ConnectionReport,
}

/// Probes `netaddress` through the API's troubleshooter.
///
/// Only the HTTP status decides success here; the envelope `type` is not
/// consulted, so a 2xx response whose `type` is `"error"` still yields its
/// report.
pub(crate) async fn probe(http: &HttpClient, netaddress: &str) -> ClientResult<ConnectionReport> {
    let url = http.resolve_with_segment("/troubleshoot", netaddress)?;
    debug!(netaddress = netaddress; "HTTP: Requesting host connectivity report");

    let payload: ConnectionPayload = call(http, Method::GET, url.as_str(), None, ResponseCheck::StatusOnly).await?;
    Ok(payload.report)
}

impl SiaClient {
    /// Checks that a host is running and connectable at `netaddress`.
    pub async fn get_host_connectivity(&self, netaddress: &str) -> ClientResult<ConnectionReport> {
        probe(&self.http, netaddress).await
    }
}
