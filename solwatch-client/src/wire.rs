//! Vendor wire format: endpoint paths, headers, and the response envelope.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use solwatch_core::VendorFailure;

// ============================================================================
// Constants
// ============================================================================

/// The vendor's international northbound base path.
pub const DEFAULT_BASE_URL: &str = "https://intl.fusionsolar.huawei.com/thirdData";

/// Session establishment.
pub const LOGIN: &str = "/login";
/// Plant list for the account.
pub const STATION_LIST: &str = "/getStationList";
/// Real-time plant KPIs.
pub const STATION_REAL_KPI: &str = "/getStationRealKpi";
/// Daily plant KPI series.
pub const KPI_STATION_DAY: &str = "/getKpiStationDay";
/// Monthly plant KPI series.
pub const KPI_STATION_MONTH: &str = "/getKpiStationMonth";
/// Device list for one or more plants.
pub const DEV_LIST: &str = "/getDevList";
/// Real-time device KPIs.
pub const DEV_REAL_KPI: &str = "/getDevRealKpi";

/// Header carrying the login signature or, after login, the session token.
pub const XSRF_TOKEN_HEADER: &str = "XSRF-TOKEN";
/// Header carrying the epoch-millisecond timestamp the signature covers.
pub const TIMESTAMP_HEADER: &str = "timeStamp";

// ============================================================================
// Response Envelope
// ============================================================================

/// The envelope every vendor endpoint returns.
///
/// Exactly one of `data` (success) and `fail_code` (failure) is meaningful;
/// the vendor also emits `failCode: 0` alongside successes, which parses but
/// is ignored.
#[derive(Debug, Deserialize)]
pub struct VendorResponse {
    /// Whether the call succeeded.
    #[serde(default)]
    pub success: bool,

    /// Numeric failure code; number or numeric string on the wire.
    #[serde(default, rename = "failCode", deserialize_with = "lenient_code")]
    pub fail_code: Option<i64>,

    /// Endpoint-specific payload.
    #[serde(default)]
    pub data: Option<Value>,

    /// Optional human-readable message.
    #[serde(default)]
    pub message: Option<String>,
}

impl VendorResponse {
    /// Classifies this envelope's failure, if it is one.
    ///
    /// Returns `None` for successes. A failure without a code classifies as
    /// code 0 (unknown).
    pub fn failure(&self) -> Option<VendorFailure> {
        if self.success {
            return None;
        }
        let mut failure = VendorFailure::from_code(self.fail_code.unwrap_or(0));
        if let Some(message) = &self.message {
            // Prefer the server's own wording when it sends one.
            failure.message = message.clone();
        }
        Some(failure)
    }

    /// Takes the payload, substituting JSON null when absent.
    pub fn into_data(self) -> Value {
        self.data.unwrap_or(Value::Null)
    }
}

fn lenient_code<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        Some(_) => None,
    })
}

// ============================================================================
// Tests
// ============================================================================
