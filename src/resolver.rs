use crate::models::{CellIdentity, CellRecord, ConnectedCell, NetworkType};
use crate::telephony::{Telephony, TelephonyError};

/// Minimum platform API level that exposes the NR identity shape. Below
/// this the record is treated like a missing cell.
pub const NR_MIN_API_LEVEL: u32 = 29;

/// Looks up the cell the device is currently attached to and flattens it
/// into the channel's six-field mapping.
///
/// `Ok(None)` covers every non-error empty case: nothing registered, an
/// unknown radio technology, or NR on a platform too old to report it.
pub async fn resolve_connected_cell<T: Telephony>(
    telephony: &T,
) -> Result<Option<ConnectedCell>, TelephonyError> {
    let records = telephony.cell_scan().await?;

    let registered = match records.into_iter().find(|r| r.registered) {
        Some(record) => record,
        None => return Ok(None),
    };

    // Only the NR arm consults the platform version, so skip the extra
    // round trip for everything else.
    let api_level = match registered.identity {
        CellIdentity::Nr { .. } => telephony.platform_info().await?.api_level,
        _ => 0,
    };

    Ok(connected_cell(registered, api_level))
}

/// Flattens one registered record into the output mapping.
pub fn connected_cell(record: CellRecord, api_level: u32) -> Option<ConnectedCell> {
    let dbm = record.signal.dbm;

    match record.identity {
        CellIdentity::Gsm { mcc, mnc, lac, cid } => Some(ConnectedCell {
            mcc: Some(mcc),
            mnc: Some(mnc),
            lac,
            cell_id: cid as i64,
            network_type: NetworkType::Gsm,
            signal_strength: dbm,
        }),
        CellIdentity::Lte { mcc, mnc, tac, ci } => Some(ConnectedCell {
            mcc: Some(mcc),
            mnc: Some(mnc),
            // LTE has no location area code; the tracking area code is its
            // coarse-area analogue.
            lac: tac,
            cell_id: ci,
            network_type: NetworkType::Lte,
            signal_strength: dbm,
        }),
        CellIdentity::Wcdma { mcc, mnc, lac, cid } => Some(ConnectedCell {
            mcc: Some(mcc),
            mnc: Some(mnc),
            lac,
            cell_id: cid,
            network_type: NetworkType::Wcdma,
            signal_strength: dbm,
        }),
        CellIdentity::Nr {
            mcc_string,
            mnc_string,
            tac,
            nci,
        } => {
            if api_level < NR_MIN_API_LEVEL {
                return None;
            }
            Some(ConnectedCell {
                mcc: parse_plmn(mcc_string.as_deref()),
                mnc: parse_plmn(mnc_string.as_deref()),
                lac: tac,
                cell_id: nci,
                network_type: NetworkType::Nr,
                signal_strength: dbm,
            })
        }
        CellIdentity::Other => None,
    }
}

/// NR reports country and network codes as numeric strings; a malformed
/// value becomes an absent field rather than a failure.
fn parse_plmn(code: Option<&str>) -> Option<i32> {
    code.and_then(|s| s.parse().ok())
}
