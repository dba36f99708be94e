use serde::{Deserialize, Serialize};

// ============ Channel Types ============

#[derive(Debug, Deserialize)]
pub struct MethodCall {
    pub method: String,
}

#[derive(Debug, Serialize)]
pub struct MethodReply {
    pub result: CellReply,
}

/// Success payload of `getConnectedCell`: either the six-field mapping for
/// the registered cell or a completely empty object.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CellReply {
    Cell(ConnectedCell),
    Empty {},
}

impl From<Option<ConnectedCell>> for CellReply {
    fn from(cell: Option<ConnectedCell>) -> Self {
        match cell {
            Some(cell) => CellReply::Cell(cell),
            None => CellReply::Empty {},
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedCell {
    /// Mobile country code; null when the platform reported an unparseable
    /// value (NR only).
    pub mcc: Option<i32>,
    pub mnc: Option<i32>,
    /// Location area code for 2G/3G, tracking area code for 4G/5G.
    pub lac: i32,
    pub cell_id: i64,
    pub network_type: NetworkType,
    pub signal_strength: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NetworkType {
    Gsm,
    Lte,
    Wcdma,
    Nr,
}

// ============ API Response Types ============

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub platform_api_level: Option<u32>,
    pub nr_supported: bool,
    pub healthy: bool,
}

// ============ Telephony Service Types ============

/// One visible cell tower observation as reported by the platform telephony
/// service.
#[derive(Debug, Clone, Deserialize)]
pub struct CellRecord {
    /// True for the cell the device is currently attached to, as opposed to
    /// merely measured.
    #[serde(default)]
    pub registered: bool,
    #[serde(flatten)]
    pub identity: CellIdentity,
    pub signal: SignalStrength,
}

/// Technology-specific identity fields, tagged by radio technology.
///
/// NR reports its country and network codes as numeric strings and carries a
/// 64-bit cell identifier; the older technologies report plain integers.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "radio", rename_all = "lowercase")]
pub enum CellIdentity {
    Gsm {
        mcc: i32,
        mnc: i32,
        lac: i32,
        cid: i32,
    },
    Lte {
        mcc: i32,
        mnc: i32,
        tac: i32,
        ci: i64,
    },
    Wcdma {
        mcc: i32,
        mnc: i32,
        lac: i32,
        cid: i64,
    },
    #[serde(rename_all = "camelCase")]
    Nr {
        mcc_string: Option<String>,
        mnc_string: Option<String>,
        tac: i32,
        nci: i64,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SignalStrength {
    pub dbm: i32,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformInfo {
    pub api_level: u32,
}

// ============ Telephony RPC Types ============

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonRpcRequest<T> {
    pub jsonrpc: String,
    pub id: u64,
    pub method: String,
    pub params: T,
}

#[derive(Debug, Deserialize)]
pub struct JsonRpcResponse<T> {
    pub jsonrpc: String,
    pub id: u64,
    pub result: Option<T>,
    pub error: Option<JsonRpcError>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
}
