//! Client SDK for the Sia Central blockchain indexing API.
//!
//! - [`sia::SiaClient`] talks to the current (`/v2`) API.
//! - [`scprime::ScPrimeClient`] covers the ScPrime troubleshooter.
//! - [`legacy::LegacyClient`] talks to the first generation (`/v1`) wallet API.
//!
//! Every endpoint method sends exactly one request and returns either the
//! decoded payload or a [`ClientError`].

pub mod capability;
pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod legacy;
pub mod logging;
pub mod scprime;
pub mod sia;
pub mod types;

mod endpoint;

pub use crate::capability::{ConnectivityApi, WalletApi};
pub use crate::error::{ClientError, ClientResult};
pub use crate::legacy::LegacyClient;
pub use crate::scprime::ScPrimeClient;
pub use crate::sia::SiaClient;
