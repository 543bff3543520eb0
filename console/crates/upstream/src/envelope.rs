//! Backend Response Envelope
//!
//! Wire contract shared by every backend endpoint and its normalized form.

use serde::Deserialize;
use thiserror::Error;

/// Message synthesized when the backend flags a failure without detail
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error occurred";

/// Sentinel status for failures where no HTTP response was received
pub const NO_RESPONSE_STATUS: u16 = 0;

/// Normalized backend failure
///
/// `status_code` keeps the backend-declared or transport-observed HTTP
/// status; [`NO_RESPONSE_STATUS`] (0) marks a pure network/timeout failure
/// that never reached the server, which no real HTTP status can collide with.
#[derive(Debug, Clone, PartialEq, Eq, Error, Deserialize)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    #[serde(default)]
    pub status_code: Option<u16>,
}

impl ApiError {
    /// Failure with a known HTTP status
    pub fn with_status(message: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            status_code: Some(status),
        }
    }

    /// Failure where no response was received (network error, timeout)
    pub fn no_response(message: impl Into<String>) -> Self {
        Self::with_status(message, NO_RESPONSE_STATUS)
    }

    /// True when the failure never reached the server
    pub fn is_transport(&self) -> bool {
        self.status_code == Some(NO_RESPONSE_STATUS)
    }
}

/// Normalized outcome of one backend call
///
/// Callers branch on this result; the client guarantees ordinary request
/// failures never surface as anything else.
pub type ApiResult<T> = Result<T, ApiError>;

/// Raw wire envelope, prior to normalization
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<ApiError>,
}

impl<T> Envelope<T> {
    /// Strip the wrapper
    ///
    /// A semantically failed envelope lacking an `error` field yields the
    /// synthesized [`UNKNOWN_ERROR_MESSAGE`] carrying the HTTP status. A
    /// `success: true` envelope with no `data` is a contract violation and is
    /// normalized the same way rather than trusted.
    pub fn into_result(self, http_status: u16) -> ApiResult<T> {
        if self.success {
            match self.data {
                Some(data) => Ok(data),
                None => Err(ApiError::with_status(UNKNOWN_ERROR_MESSAGE, http_status)),
            }
        } else {
            Err(self
                .error
                .unwrap_or_else(|| ApiError::with_status(UNKNOWN_ERROR_MESSAGE, http_status)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_passthrough_unmutated() {
        let wire = json!({
            "success": true,
            "data": {"id": "s1", "title": "Ascension", "totalChapters": 812}
        });
        let envelope: Envelope<serde_json::Value> = serde_json::from_value(wire).unwrap();
        let data = envelope.into_result(200).unwrap();

        assert_eq!(
            data,
            json!({"id": "s1", "title": "Ascension", "totalChapters": 812})
        );
    }

    #[test]
    fn test_declared_failure() {
        let wire = json!({
            "success": false,
            "error": {"message": "Series not found", "statusCode": 404}
        });
        let envelope: Envelope<serde_json::Value> = serde_json::from_value(wire).unwrap();
        let err = envelope.into_result(200).unwrap_err();

        assert_eq!(err.message, "Series not found");
        assert_eq!(err.status_code, Some(404));
    }

    #[test]
    fn test_failure_without_error_field_synthesized() {
        let wire = json!({"success": false});
        let envelope: Envelope<serde_json::Value> = serde_json::from_value(wire).unwrap();
        let err = envelope.into_result(200).unwrap_err();

        assert_eq!(err.message, UNKNOWN_ERROR_MESSAGE);
        assert_eq!(err.status_code, Some(200));
    }

    #[test]
    fn test_error_without_status_code() {
        let wire = json!({
            "success": false,
            "error": {"message": "nope"}
        });
        let envelope: Envelope<()> = serde_json::from_value(wire).unwrap();
        let err = envelope.into_result(200).unwrap_err();

        assert_eq!(err.message, "nope");
        assert_eq!(err.status_code, None);
    }

    #[test]
    fn test_success_without_data_is_failure() {
        let wire = json!({"success": true});
        let envelope: Envelope<serde_json::Value> = serde_json::from_value(wire).unwrap();
        let err = envelope.into_result(200).unwrap_err();

        assert_eq!(err.message, UNKNOWN_ERROR_MESSAGE);
    }

    #[test]
    fn test_no_response_sentinel() {
        let err = ApiError::no_response("connection refused");
        assert!(err.is_transport());
        assert_eq!(err.status_code, Some(0));

        let err = ApiError::with_status("gateway timeout", 504);
        assert!(!err.is_transport());
    }
}
