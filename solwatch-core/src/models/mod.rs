//! Domain models for the Solwatch monitor.
//!
//! All wire-facing structs use the vendor's camelCase field names; metric
//! keys inside [`KpiMap`] stay snake_case because that is what the vendor
//! emits inside `dataItemMap`.

mod device;
mod kpi;
mod plant;

pub use device::Device;
pub use kpi::{DailySeries, KpiMap, KpiSample, Provenance};
pub use plant::Plant;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes a float the vendor may send as a number, a numeric string,
/// or null.
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        Some(_) => None,
    })
}

/// Deserializes a value the vendor may send as a string or a number into its
/// string form.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(_) => None,
    })
}
