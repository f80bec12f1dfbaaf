use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Value of the envelope `type` field on a successful call.
pub const SUCCESS_TYPE: &str = "success";

/// The JSON wrapper every API response uses.
///
/// `type` discriminates success from error states and `message` carries the
/// server's explanation on failure. Everything else in the object belongs to
/// the endpoint-specific `payload`, which must tolerate missing fields so an
/// error envelope still decodes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub message: String,
    #[serde(flatten)]
    pub payload: T,
}

/// Payload for endpoints that return nothing beyond the envelope.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Empty {}

/// Which parts of a response decide success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCheck {
    /// 2xx status and envelope `type == "success"`.
    StatusAndType,
    /// 2xx status only; the envelope `type` is ignored. Used by the
    /// troubleshoot endpoints.
    StatusOnly,
}

impl<T> ApiResponse<T> {
    pub fn is_success_type(&self) -> bool {
        self.kind == SUCCESS_TYPE
    }

    /// Classifies a decoded response and hands back its payload on success.
    ///
    /// On failure the error carries the envelope `message` verbatim and the
    /// payload is dropped.
    pub fn into_payload(self, status: StatusCode, check: ResponseCheck) -> Result<T, ClientError> {
        let ok = status.is_success()
            && match check {
                ResponseCheck::StatusAndType => self.is_success_type(),
                ResponseCheck::StatusOnly => true,
            };

        if ok {
            Ok(self.payload)
        } else {
            Err(ClientError::Api {
                status,
                message: self.message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default)]
    struct Payload {
        count: u64,
    }

    fn decode(json: serde_json::Value) -> ApiResponse<Payload> {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_success_envelope_yields_payload() {
        let resp = decode(serde_json::json!({ "type": "success", "message": "", "count": 3 }));
        let payload = resp.into_payload(StatusCode::OK, ResponseCheck::StatusAndType).unwrap();
        assert_eq!(payload, Payload { count: 3 });
    }

    #[test]
    fn test_error_type_with_ok_status_fails_when_type_checked() {
        let resp = decode(serde_json::json!({ "type": "error", "message": "host not found" }));
        let err = resp
            .into_payload(StatusCode::OK, ResponseCheck::StatusAndType)
            .unwrap_err();
        assert_eq!(err.to_string(), "host not found");
        assert!(matches!(err, ClientError::Api { status, .. } if status == StatusCode::OK));
    }

    #[test]
    fn test_error_type_with_ok_status_passes_when_status_only() {
        let resp = decode(serde_json::json!({ "type": "error", "message": "ignored", "count": 1 }));
        let payload = resp.into_payload(StatusCode::OK, ResponseCheck::StatusOnly).unwrap();
        assert_eq!(payload.count, 1);
    }

    #[test]
    fn test_non_2xx_status_fails_in_both_modes() {
        for check in [ResponseCheck::StatusAndType, ResponseCheck::StatusOnly] {
            let resp = decode(serde_json::json!({ "type": "success", "message": "gone" }));
            let err = resp.into_payload(StatusCode::NOT_FOUND, check).unwrap_err();
            assert_eq!(err.to_string(), "gone");
        }

        let resp = decode(serde_json::json!({ "type": "success" }));
        assert!(resp.into_payload(StatusCode::from_u16(300).unwrap(), ResponseCheck::StatusOnly).is_err());
    }

    #[test]
    fn test_missing_envelope_fields_default_to_empty() {
        let resp = decode(serde_json::json!({}));
        assert_eq!(resp.kind, "");
        assert_eq!(resp.message, "");
        assert!(!resp.is_success_type());
    }
}
