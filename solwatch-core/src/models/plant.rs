//! Plant (station) model.

use serde::{Deserialize, Serialize};

use super::lenient_f64;

/// A monitored solar installation, identified by a vendor-issued code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    /// Vendor-issued station code.
    pub station_code: String,

    /// Display name of the plant.
    #[serde(default)]
    pub station_name: String,

    /// Rated capacity in kWp.
    #[serde(default, deserialize_with = "lenient_f64")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<f64>,

    /// Street address, when the vendor provides one.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station_addr: Option<String>,

    /// Grid-connection state reported by the vendor.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_state: Option<String>,
}

impl Plant {
    /// Creates a plant with just the identifying fields set.
    pub fn new(station_code: impl Into<String>, station_name: impl Into<String>) -> Self {
        Self {
            station_code: station_code.into(),
            station_name: station_name.into(),
            capacity: None,
            station_addr: None,
            build_state: None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vendor_station() {
        let json = r#"{
            "stationCode": "BA4372D08E014822AB065017416F254C",
            "stationName": "Fazenda Norte",
            "capacity": "75.6",
            "stationAddr": "Rodovia BR-101, km 42"
        }"#;

        let plant: Plant = serde_json::from_str(json).unwrap();
        assert_eq!(plant.station_code, "BA4372D08E014822AB065017416F254C");
        assert_eq!(plant.station_name, "Fazenda Norte");
        assert_eq!(plant.capacity, Some(75.6));
        assert!(plant.build_state.is_none());
    }

    #[test]
    fn test_parse_numeric_capacity() {
        let json = r#"{"stationCode": "S1", "stationName": "P", "capacity": 12.5}"#;
        let plant: Plant = serde_json::from_str(json).unwrap();
        assert_eq!(plant.capacity, Some(12.5));
    }
}
