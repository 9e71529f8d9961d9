//! Error types for the gateway crate.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use algotrace_core::CoreError;

/// Errors that can occur during gateway request handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// Sequence generation parameters were rejected by the core.
    #[error("invalid generation parameters: {0}")]
    Generate(#[from] CoreError),

    /// The body was not valid JSON or did not match the request schema.
    #[error("malformed request body: {0}")]
    Body(#[from] JsonRejection),

    /// The request body is well-formed but contains invalid values.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::Body(rejection) => rejection.status(),
            GatewayError::Generate(_) | GatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };
        tracing::debug!(%status, error = %self, "rejecting request");
        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}

/// Errors raised while loading [`GatewayConfig`](crate::config::GatewayConfig).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// An environment variable was set to a value that cannot be parsed.
    #[error("invalid value '{value}' for {key}")]
    Invalid { key: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_error_status_codes_map_correctly() {
        let bad_req = GatewayError::InvalidRequest("sequence too long".to_owned());
        let resp = bad_req.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let core_err = GatewayError::Generate(CoreError::InvalidDigits { digits: 0, max: 9 });
        let resp = core_err.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "core errors must map to 400");
    }

    #[test]
    fn gateway_error_display_includes_message() {
        let err = GatewayError::InvalidRequest("bad target".to_owned());
        let msg = err.to_string();
        assert!(msg.contains("bad target"), "Display must include the message");
    }

    #[test]
    fn config_error_display_names_the_variable() {
        let err = ConfigError::Invalid { key: "ALGOTRACE_MAX_LEN", value: "lots".to_owned() };
        let msg = err.to_string();
        assert!(msg.contains("ALGOTRACE_MAX_LEN"));
        assert!(msg.contains("lots"));
    }
}
