use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

pub const UNIQUE_ID_LEN: usize = 16;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseIdError {
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("expected 16 bytes, got {0}")]
    Length(usize),
}

/// Fixed-length opaque identifier, such as the id of a host price table.
/// Serialized as lowercase hex.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UniqueId(pub [u8; UNIQUE_ID_LEN]);

impl UniqueId {
    pub fn as_bytes(&self) -> &[u8; UNIQUE_ID_LEN] {
        &self.0
    }
}

impl From<[u8; UNIQUE_ID_LEN]> for UniqueId {
    fn from(bytes: [u8; UNIQUE_ID_LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for UniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl FromStr for UniqueId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s)?;
        let arr: [u8; UNIQUE_ID_LEN] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| ParseIdError::Length(bytes.len()))?;
        Ok(Self(arr))
    }
}

impl Serialize for UniqueId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for UniqueId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
