use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::error::ClientResult;
use crate::http::{ApiResponse, HttpClient, ResponseCheck};

/// Dispatches one request and classifies its envelope.
///
/// Transport errors pass through unchanged; a decoded envelope that fails
/// `check` becomes [`ClientError::Api`](crate::ClientError::Api).
pub(crate) async fn call<T: DeserializeOwned>(
    http: &HttpClient,
    method: Method,
    target: &str,
    body: Option<serde_json::Value>,
    check: ResponseCheck,
) -> ClientResult<T> {
    let (status, resp) = http.send_request::<ApiResponse<T>>(method, target, body).await?;
    resp.into_payload(status, check)
}
