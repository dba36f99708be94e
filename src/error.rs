use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::telephony::TelephonyError;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("Phone state permission denied")]
    PermissionDenied,

    #[error("Failed to get cell info: {0}")]
    CellInfo(String),

    #[error("Method not implemented: {0}")]
    NotImplemented(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for BridgeError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            BridgeError::PermissionDenied => (
                StatusCode::FORBIDDEN,
                "PERMISSION_DENIED",
                "Phone state permission denied".to_string(),
            ),
            BridgeError::CellInfo(msg) => (
                StatusCode::BAD_GATEWAY,
                "ERROR",
                format!("Failed to get cell info: {}", msg),
            ),
            BridgeError::NotImplemented(method) => (
                StatusCode::NOT_IMPLEMENTED,
                "NOT_IMPLEMENTED",
                format!("Method not implemented: {}", method),
            ),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                details: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<TelephonyError> for BridgeError {
    fn from(err: TelephonyError) -> Self {
        match err {
            TelephonyError::PermissionDenied => BridgeError::PermissionDenied,
            TelephonyError::Rpc(msg) => BridgeError::CellInfo(msg),
        }
    }
}
