use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Outcome of one protocol handshake during a connectivity probe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProtocolReport {
    pub connected: bool,
    pub scanned: bool,
    /// Round trip in milliseconds.
    pub latency: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub errors: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub warnings: Vec<String>,
}

impl ProtocolReport {
    pub fn passed(&self) -> bool {
        self.connected && self.errors.is_empty()
    }
}

/// Server-computed result of probing a host's network address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionReport {
    pub public_key: String,
    #[serde(rename = "netaddress")]
    pub net_address: String,
    pub version: String,
    pub scanned: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub resolved_addresses: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub errors: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub warnings: Vec<String>,
    pub rhp2: Option<ProtocolReport>,
    pub rhp3: Option<ProtocolReport>,
}

impl ConnectionReport {
    /// True when the host was reached and no protocol reported an error.
    pub fn passed(&self) -> bool {
        self.scanned
            && self.errors.is_empty()
            && self.rhp2.as_ref().is_none_or(ProtocolReport::passed)
            && self.rhp3.as_ref().is_none_or(ProtocolReport::passed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passed_requires_every_protocol() {
        let mut report: ConnectionReport = serde_json::from_value(serde_json::json!({
            "netaddress": "host.example.com:9982",
            "scanned": true,
            "rhp2": { "connected": true, "scanned": true, "latency": 41.5 },
            "rhp3": { "connected": true, "scanned": true }
        }))
        .unwrap();
        assert!(report.passed());

        report.rhp3 = Some(ProtocolReport {
            connected: false,
            errors: vec!["connection refused".into()],
            ..Default::default()
        });
        assert!(!report.passed());

        assert!(!ConnectionReport::default().passed());
    }

    #[test]
    fn test_null_lists_decode_as_empty() {
        let report: ConnectionReport = serde_json::from_value(serde_json::json!({
            "scanned": true,
            "resolved_addresses": null,
            "errors": null,
            "warnings": null,
            "rhp3": { "connected": true, "errors": null, "warnings": null }
        }))
        .unwrap();
        assert!(report.errors.is_empty());
        assert!(report.passed());
    }
}
