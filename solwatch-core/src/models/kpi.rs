//! KPI samples and series.
//!
//! A [`KpiSample`] is one reading for one station (or device): a collection
//! timestamp plus the vendor's named metric map. Series returned by the
//! daily verb carry a [`Provenance`] marker so synthesized fallback data is
//! never mistaken for measured history.

use serde::{Deserialize, Serialize};

use super::{lenient_f64, lenient_string};

// ============================================================================
// Metric Map
// ============================================================================

/// The named metric map carried by a KPI sample.
///
/// Metric keys are exactly the vendor's `dataItemMap` keys. Values arrive as
/// numbers or numeric strings depending on endpoint; both parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KpiMap {
    /// Instantaneous active power, kW.
    #[serde(default, deserialize_with = "lenient_f64")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub real_power: Option<f64>,

    /// Cumulative energy for the current day, kWh.
    #[serde(default, deserialize_with = "lenient_f64")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_power: Option<f64>,

    /// Cumulative lifetime energy, kWh.
    #[serde(default, deserialize_with = "lenient_f64")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_power: Option<f64>,

    /// Theoretical power under ideal conditions, kW.
    #[serde(default, deserialize_with = "lenient_f64")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theory_power: Option<f64>,

    /// Plane-of-array irradiation, kWh/m².
    #[serde(default, deserialize_with = "lenient_f64")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub irradiation: Option<f64>,

    /// Inverter AC energy for the sampled day, kWh (daily series only).
    #[serde(default, deserialize_with = "lenient_f64")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inverter_power: Option<f64>,
}

// ============================================================================
// KPI Sample
// ============================================================================

/// One KPI reading for a station or device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSample {
    /// Station the reading belongs to.
    #[serde(default)]
    pub station_code: String,

    /// Collection timestamp. Day-granularity series use `YYYYMMDD`; the
    /// vendor also emits epoch milliseconds on some endpoints, kept verbatim.
    #[serde(default, deserialize_with = "lenient_string")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collect_time: Option<String>,

    /// The named metric map.
    #[serde(default)]
    pub data_item_map: KpiMap,
}

impl KpiSample {
    /// Creates a sample for a station with an empty metric map.
    pub fn for_station(station_code: impl Into<String>) -> Self {
        Self {
            station_code: station_code.into(),
            collect_time: None,
            data_item_map: KpiMap::default(),
        }
    }

    /// The collection date, when `collect_time` is day-granular (`YYYYMMDD`).
    pub fn collect_date(&self) -> Option<chrono::NaiveDate> {
        let raw = self.collect_time.as_deref()?;
        chrono::NaiveDate::parse_from_str(raw, "%Y%m%d").ok()
    }
}

// ============================================================================
// Provenance & Daily Series
// ============================================================================

/// Whether series data was measured by the vendor or synthesized locally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Genuine historical data from the vendor.
    #[default]
    Measured,
    /// Locally fabricated placeholder data (account tier cannot read the
    /// historical endpoint).
    Synthetic,
}

/// A daily KPI series together with its provenance.
///
/// Synthetic samples are shaped identically to measured ones so downstream
/// consumers need no special-casing, but the substitution itself is always
/// visible here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailySeries {
    /// The samples, one per day, oldest first.
    #[serde(default)]
    pub samples: Vec<KpiSample>,
    /// Where the samples came from.
    #[serde(default)]
    pub provenance: Provenance,
}

impl DailySeries {
    /// Wraps measured samples.
    pub fn measured(samples: Vec<KpiSample>) -> Self {
        Self {
            samples,
            provenance: Provenance::Measured,
        }
    }

    /// Wraps synthesized samples.
    pub fn synthetic(samples: Vec<KpiSample>) -> Self {
        Self {
            samples,
            provenance: Provenance::Synthetic,
        }
    }

    /// True if the series was synthesized rather than measured.
    pub fn is_synthetic(&self) -> bool {
        self.provenance == Provenance::Synthetic
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_real_kpi_sample() {
        let json = r#"{
            "stationCode": "S1",
            "dataItemMap": {
                "real_power": "42.7",
                "day_power": 118.3,
                "total_power": "90312.5",
                "theory_power": null
            }
        }"#;

        let sample: KpiSample = serde_json::from_str(json).unwrap();
        assert_eq!(sample.station_code, "S1");
        assert_eq!(sample.data_item_map.real_power, Some(42.7));
        assert_eq!(sample.data_item_map.day_power, Some(118.3));
        assert_eq!(sample.data_item_map.theory_power, None);
        assert!(sample.collect_time.is_none());
    }

    #[test]
    fn test_parse_daily_sample_with_epoch_collect_time() {
        let json = r#"{
            "stationCode": "S1",
            "collectTime": 1705276800000,
            "dataItemMap": {"inverter_power": "97.1", "irradiation": 5.2}
        }"#;

        let sample: KpiSample = serde_json::from_str(json).unwrap();
        assert_eq!(sample.collect_time.as_deref(), Some("1705276800000"));
        assert_eq!(sample.data_item_map.inverter_power, Some(97.1));
    }

    #[test]
    fn test_collect_date_parses_day_granular_times() {
        let mut sample = KpiSample::for_station("S1");
        sample.collect_time = Some("20260310".to_string());
        assert_eq!(
            sample.collect_date(),
            chrono::NaiveDate::from_ymd_opt(2026, 3, 10)
        );

        // Epoch-millisecond times are not day-granular.
        sample.collect_time = Some("1705276800000".to_string());
        assert_eq!(sample.collect_date(), None);
    }

    #[test]
    fn test_provenance_round_trip() {
        let series = DailySeries::synthetic(vec![KpiSample::for_station("S1")]);
        let json = serde_json::to_string(&series).unwrap();
        assert!(json.contains(r#""provenance":"synthetic""#));

        let back: DailySeries = serde_json::from_str(&json).unwrap();
        assert!(back.is_synthetic());
    }

    #[test]
    fn test_provenance_defaults_to_measured() {
        let series: DailySeries = serde_json::from_str(r#"{"samples": []}"#).unwrap();
        assert_eq!(series.provenance, Provenance::Measured);
    }
}
