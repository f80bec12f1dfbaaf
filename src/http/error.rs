//! Error types for transport-level operations.
//!
//! This module defines the [`HttpError`] enum which covers every way a single
//! request to the Sia Central API can fail before the response envelope is
//! inspected. Application-level failures (a non-2xx status or an envelope whose
//! `type` is not `"success"`) are not transport errors; they are reported by
//! [`ClientError::Api`](crate::ClientError::Api).

use thiserror::Error;

/// Errors that can occur while sending a request and decoding its body.
///
/// The transport never interprets the HTTP status code, so there is no
/// variant for "server returned 4xx/5xx" here. Each failure mode is a
/// distinct variant so callers can tell a dead connection from a server that
/// answered with something other than the expected JSON shape.
///
/// # Example
///
/// ```rust,no_run
/// use siacentral::http::HttpError;
///
/// fn describe(err: &HttpError) -> &'static str {
///     match err {
///         HttpError::RequestFailed(_) => "network",
///         HttpError::InvalidJson(_) => "not json",
///         HttpError::MalformedEnvelope(_) => "unexpected shape",
///         _ => "other",
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// The HTTP request failed due to a network or connection error.
    ///
    /// This typically indicates connectivity issues such as:
    /// - Connection refused
    /// - Connection or read timeout (when one is configured)
    /// - DNS resolution failure
    /// - TLS handshake errors
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The response body could not be parsed as JSON at all.
    #[error("Response is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// The response body is JSON but does not match the expected envelope.
    #[error("Malformed response envelope: {0}")]
    MalformedEnvelope(#[source] serde_json::Error),

    /// The request body could not be serialized.
    #[error("Failed to serialize request body: {0}")]
    InvalidBody(#[source] serde_json::Error),

    /// Failed to parse or construct a URL.
    ///
    /// Occurs when the target is neither a valid absolute URL nor a path that
    /// forms a valid URL once appended to the base URL.
    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),

    /// The requested HTTP method is not supported.
    ///
    /// Only `GET` and `POST` are used by the API.
    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(reqwest::Method),
}
