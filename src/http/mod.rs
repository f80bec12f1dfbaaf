//! HTTP transport and response envelope for the Sia Central API.
//!
//! Every endpoint in this crate goes through the same path: build a target and
//! optional JSON body, hand it to [`HttpClient::send_request`], then classify
//! the decoded [`ApiResponse`] envelope.
//!
//! # Architecture
//!
//! - [`HttpClient`] - low-level transport shared by all clients
//! - [`ClientConfig`] - base URL, optional timeout, user agent and API key
//! - [`HttpError`] - transport failures (network, invalid JSON, bad shape)
//! - [`ApiResponse`] / [`ResponseCheck`] - the `{type, message, ...}` envelope
//!   and the rules that turn it into success or failure
//!
//! # Example
//!
//! ```rust,no_run
//! use reqwest::Method;
//! use siacentral::http::{ApiResponse, ClientConfig, Empty, HttpClient, ResponseCheck};
//! use url::Url;
//!
//! # async fn example() -> Result<(), anyhow::Error> {
//! let client = HttpClient::new(ClientConfig::new(Url::parse("https://api.siacentral.com/v2")?))?;
//! let (status, resp): (_, ApiResponse<Empty>) = client.send_request(Method::GET, "/wallet/fees", None).await?;
//! resp.into_payload(status, ResponseCheck::StatusAndType)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! The transport reports only what went wrong on the wire. Deciding whether a
//! well-formed response means success is left to [`ApiResponse::into_payload`].

mod error;
mod http_client;
mod types;
mod utils;

pub use error::HttpError;
pub use http_client::{ClientConfig, DEFAULT_USER_AGENT, HttpClient};
pub use types::{ApiResponse, Empty, ResponseCheck, SUCCESS_TYPE};
pub use utils::{MAX_ADDRESSES, TooManyAddressesError, check_address_count};
