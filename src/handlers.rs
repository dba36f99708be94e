use crate::error::BridgeError;
use crate::models::{MethodCall, MethodReply, StatusResponse};
use crate::resolver::{self, NR_MIN_API_LEVEL};
use crate::telephony::Telephony;
use crate::AppState;
use axum::{extract::State, Json};

// POST /v1/cell_info
//
// The method-call channel. One known method; anything else gets the
// distinct not-implemented reply.
pub async fn method_call<T: Telephony + 'static>(
    State(state): State<AppState<T>>,
    Json(call): Json<MethodCall>,
) -> Result<Json<MethodReply>, BridgeError> {
    match call.method.as_str() {
        "getConnectedCell" => {
            let cell = resolver::resolve_connected_cell(&*state.telephony).await?;

            match &cell {
                Some(cell) => tracing::debug!(
                    "Resolved registered cell: type={:?}, signal={} dBm",
                    cell.network_type,
                    cell.signal_strength
                ),
                None => tracing::debug!("No registered cell to report"),
            }

            Ok(Json(MethodReply {
                result: cell.into(),
            }))
        }
        other => {
            tracing::debug!("Unknown channel method: {}", other);
            Err(BridgeError::NotImplemented(other.to_string()))
        }
    }
}

// GET /v1/status
pub async fn get_status<T: Telephony + 'static>(
    State(state): State<AppState<T>>,
) -> Json<StatusResponse> {
    match state.telephony.platform_info().await {
        Ok(info) => Json(StatusResponse {
            platform_api_level: Some(info.api_level),
            nr_supported: info.api_level >= NR_MIN_API_LEVEL,
            healthy: true,
        }),
        Err(err) => {
            tracing::warn!("Telephony service unreachable: {}", err);
            Json(StatusResponse {
                platform_api_level: None,
                nr_supported: false,
                healthy: false,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        CellIdentity, CellRecord, CellReply, PlatformInfo, SignalStrength,
    };
    use crate::telephony::TelephonyError;
    use std::sync::Arc;

    struct StaticTelephony {
        records: Vec<CellRecord>,
        api_level: u32,
    }

    impl Telephony for StaticTelephony {
        async fn cell_scan(&self) -> Result<Vec<CellRecord>, TelephonyError> {
            Ok(self.records.clone())
        }

        async fn platform_info(&self) -> Result<PlatformInfo, TelephonyError> {
            Ok(PlatformInfo {
                api_level: self.api_level,
            })
        }
    }

    struct Denied;

    impl Telephony for Denied {
        async fn cell_scan(&self) -> Result<Vec<CellRecord>, TelephonyError> {
            Err(TelephonyError::PermissionDenied)
        }

        async fn platform_info(&self) -> Result<PlatformInfo, TelephonyError> {
            Err(TelephonyError::Rpc("connection refused".to_string()))
        }
    }

    fn state<T: Telephony>(telephony: T) -> AppState<T> {
        AppState {
            telephony: Arc::new(telephony),
        }
    }

    fn call(method: &str) -> Json<MethodCall> {
        Json(MethodCall {
            method: method.to_string(),
        })
    }

    #[tokio::test]
    async fn get_connected_cell_returns_mapped_cell() {
        let telephony = StaticTelephony {
            records: vec![CellRecord {
                registered: true,
                identity: CellIdentity::Gsm {
                    mcc: 310,
                    mnc: 260,
                    lac: 1000,
                    cid: 5000,
                },
                signal: SignalStrength { dbm: -85 },
            }],
            api_level: 33,
        };

        let reply = method_call(State(state(telephony)), call("getConnectedCell"))
            .await
            .unwrap();
        match &reply.result {
            CellReply::Cell(cell) => {
                assert_eq!(cell.mcc, Some(310));
                assert_eq!(cell.signal_strength, -85);
            }
            CellReply::Empty {} => panic!("expected a cell reply"),
        }
    }

    #[tokio::test]
    async fn get_connected_cell_with_nothing_registered_is_empty_success() {
        let telephony = StaticTelephony {
            records: vec![],
            api_level: 33,
        };

        let reply = method_call(State(state(telephony)), call("getConnectedCell"))
            .await
            .unwrap();
        assert!(matches!(reply.result, CellReply::Empty {}));
    }

    #[tokio::test]
    async fn permission_denial_surfaces_verbatim() {
        let err = method_call(State(state(Denied)), call("getConnectedCell"))
            .await
            .unwrap_err();
        assert!(matches!(err, BridgeError::PermissionDenied));
    }

    #[tokio::test]
    async fn unknown_method_is_not_implemented() {
        let telephony = StaticTelephony {
            records: vec![],
            api_level: 33,
        };

        let err = method_call(State(state(telephony)), call("getSignalHistory"))
            .await
            .unwrap_err();
        match err {
            BridgeError::NotImplemented(method) => assert_eq!(method, "getSignalHistory"),
            other => panic!("expected NotImplemented, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn status_reports_platform_and_nr_gate() {
        let telephony = StaticTelephony {
            records: vec![],
            api_level: 28,
        };

        let status = get_status(State(state(telephony))).await;
        assert_eq!(status.platform_api_level, Some(28));
        assert!(!status.nr_supported);
        assert!(status.healthy);
    }

    #[tokio::test]
    async fn status_degrades_when_service_unreachable() {
        let status = get_status(State(state(Denied))).await;
        assert_eq!(status.platform_api_level, None);
        assert!(!status.nr_supported);
        assert!(!status.healthy);
    }
}
