//! Device model.

use serde::{Deserialize, Serialize};

/// A device (inverter, power sensor, meter, ...) within a plant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Vendor-issued device id.
    pub id: i64,

    /// Device name, when set by the installer.
    #[serde(default, alias = "devAlias")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_name: Option<String>,

    /// Vendor device-type discriminator (1 = string inverter, 38 =
    /// residential inverter, 47 = power sensor, ...).
    pub dev_type_id: i64,

    /// Serial number, when reported.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub esn_code: Option<String>,

    /// Station the device belongs to.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station_code: Option<String>,
}

impl Device {
    /// Display label: name when present, otherwise the id.
    pub fn label(&self) -> String {
        self.dev_name
            .clone()
            .unwrap_or_else(|| format!("device {}", self.id))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vendor_device() {
        let json = r#"{
            "id": 1000000031415926,
            "devName": "Inverter-01",
            "devTypeId": 38,
            "esnCode": "HV3021731085",
            "stationCode": "S1"
        }"#;

        let device: Device = serde_json::from_str(json).unwrap();
        assert_eq!(device.id, 1000000031415926);
        assert_eq!(device.dev_type_id, 38);
        assert_eq!(device.label(), "Inverter-01");
    }

    #[test]
    fn test_label_falls_back_to_id() {
        let json = r#"{"id": 7, "devTypeId": 47}"#;
        let device: Device = serde_json::from_str(json).unwrap();
        assert_eq!(device.label(), "device 7");
    }

    #[test]
    fn test_dev_alias_accepted() {
        let json = r#"{"id": 9, "devTypeId": 1, "devAlias": "Roof West"}"#;
        let device: Device = serde_json::from_str(json).unwrap();
        assert_eq!(device.dev_name.as_deref(), Some("Roof West"));
    }
}
