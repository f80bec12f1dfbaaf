use reqwest::StatusCode;
use thiserror::Error;

use crate::http::{HttpError, TooManyAddressesError};

/// Errors returned by the endpoint methods of every client.
///
/// A call either fully succeeds or fails with exactly one of these:
///
/// - local validation, raised before any request is sent
/// - transport failure, passed through from [`HttpError`] unchanged
/// - application failure, built from the response envelope
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    TooManyAddresses(#[from] TooManyAddressesError),

    #[error(transparent)]
    Http(#[from] HttpError),

    /// The server answered but the call failed: status outside 2xx, or an
    /// envelope `type` other than `"success"` where the endpoint checks it.
    /// Displays as the server's message, untouched.
    #[error("{message}")]
    Api { status: StatusCode, message: String },
}

impl ClientError {
    /// HTTP status of an application failure.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
