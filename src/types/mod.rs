//! Data-transfer types shared by the API clients.
//!
//! # Key Types
//!
//! - [`Currency`] - exact arbitrary-precision amount in base units
//! - [`UniqueId`] - 16-byte identifier rendered as hex
//! - [`HostDetails`], [`HostConfig`], [`RpcPriceTable`], [`AvgHostBenchmark`] - host records
//! - [`AddressBalance`], [`Transaction`], [`SiacoinOutput`], [`SiafundOutput`], [`AddressUsage`] - wallet records
//! - [`ConnectionReport`] - result of a host connectivity probe
//!
//! Every value is built once from a decoded response and never mutated by
//! the client.

mod currency;
mod hosts;
mod troubleshoot;
mod unique_id;
mod wallet;

use serde::{Deserialize, Deserializer};

pub use currency::{Currency, ParseCurrencyError, SCPRIME_PRECISION, SIACOIN_PRECISION};
pub use hosts::{AvgHostBenchmark, HostBenchmark, HostConfig, HostDetails, RpcPriceTable};
pub use troubleshoot::{ConnectionReport, ProtocolReport};
pub use unique_id::{ParseIdError, UNIQUE_ID_LEN, UniqueId};
pub use wallet::{
    AddressBalance, AddressUsage, SiacoinInput, SiacoinOutput, SiafundInput, SiafundOutput, Transaction,
};

/// Deserializes an explicit JSON `null` as `T::default()`.
///
/// The API encodes empty lists as `null`; `#[serde(default)]` alone only
/// covers a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Serde adapter for durations the API encodes as integer nanoseconds.
pub(crate) mod duration_nanos {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let nanos = u64::try_from(d.as_nanos()).map_err(serde::ser::Error::custom)?;
        serializer.serialize_u64(nanos)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_nanos)
    }
}
