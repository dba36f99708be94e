use crate::models::{CellRecord, JsonRpcError, JsonRpcRequest, JsonRpcResponse, PlatformInfo};
use reqwest::Client;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

/// RPC error code the platform daemon uses to signal that the caller lacks
/// the phone state permission.
pub const PERMISSION_DENIED_CODE: i64 = -32001;

#[derive(Debug, Error)]
pub enum TelephonyError {
    #[error("phone state permission denied")]
    PermissionDenied,

    #[error("{0}")]
    Rpc(String),
}

/// Read-only view of the platform telephony state.
///
/// The resolver only ever needs the current cell scan and the running
/// platform version, so both are behind this seam and the resolver can be
/// exercised without a device.
pub trait Telephony: Send + Sync {
    fn cell_scan(&self) -> impl Future<Output = Result<Vec<CellRecord>, TelephonyError>> + Send;

    fn platform_info(&self) -> impl Future<Output = Result<PlatformInfo, TelephonyError>> + Send;
}

pub struct TelephonyRpc {
    client: Client,
    url: String,
    request_id: AtomicU64,
}

impl TelephonyRpc {
    pub fn new(url: &str) -> Self {
        Self {
            client: Client::new(),
            url: url.to_string(),
            request_id: AtomicU64::new(1),
        }
    }

    fn next_id(&self) -> u64 {
        self.request_id.fetch_add(1, Ordering::SeqCst)
    }

    async fn call<T, R>(&self, method: &str, params: T) -> Result<R, TelephonyError>
    where
        T: serde::Serialize,
        R: serde::de::DeserializeOwned,
    {
        let request = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: self.next_id(),
            method: method.to_string(),
            params,
        };

        let response = self.client.post(&self.url).json(&request).send().await?;

        let rpc_response: JsonRpcResponse<R> = response.json().await?;

        if let Some(error) = rpc_response.error {
            return Err(rpc_error(error));
        }

        rpc_response
            .result
            .ok_or_else(|| TelephonyError::Rpc("Empty response".to_string()))
    }
}

fn rpc_error(error: JsonRpcError) -> TelephonyError {
    if error.code == PERMISSION_DENIED_CODE {
        TelephonyError::PermissionDenied
    } else {
        TelephonyError::Rpc(format!("{}: {}", error.code, error.message))
    }
}

impl Telephony for TelephonyRpc {
    async fn cell_scan(&self) -> Result<Vec<CellRecord>, TelephonyError> {
        self.call("get_all_cell_info", Vec::<()>::new()).await
    }

    async fn platform_info(&self) -> Result<PlatformInfo, TelephonyError> {
        self.call("get_platform_info", Vec::<()>::new()).await
    }
}

impl From<reqwest::Error> for TelephonyError {
    fn from(err: reqwest::Error) -> Self {
        TelephonyError::Rpc(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_code_maps_to_permission_denied() {
        let error = JsonRpcError {
            code: PERMISSION_DENIED_CODE,
            message: "READ_PHONE_STATE not granted".to_string(),
        };
        assert!(matches!(rpc_error(error), TelephonyError::PermissionDenied));
    }

    #[test]
    fn other_codes_map_to_rpc_error_with_context() {
        let error = JsonRpcError {
            code: -32603,
            message: "modem unavailable".to_string(),
        };
        match rpc_error(error) {
            TelephonyError::Rpc(msg) => assert_eq!(msg, "-32603: modem unavailable"),
            other => panic!("expected Rpc, got {:?}", other),
        }
    }
}
