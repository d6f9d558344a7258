//! Formatter tests.

use super::{JsonFormatter, TextFormatter};
use solwatch_core::{DailySeries, Device, KpiSample, Plant};

fn sample_plants() -> Vec<Plant> {
    let mut fazenda = Plant::new("S1", "Fazenda Norte");
    fazenda.capacity = Some(75.6);
    vec![fazenda, Plant::new("S2", "Telhado Sul")]
}

#[test]
fn test_text_plants_table() {
    let out = TextFormatter::new(false).plants(&sample_plants());
    assert!(out.contains("Fazenda Norte"));
    assert!(out.contains("75.6 kWp"));
    assert!(out.contains("S2"));
    // No ANSI escapes without color.
    assert!(!out.contains('\x1b'));
}

#[test]
fn test_text_plants_empty() {
    let out = TextFormatter::new(false).plants(&[]);
    assert!(out.contains("No plants"));
}

#[test]
fn test_text_daily_synthetic_banner() {
    let mut sample = KpiSample::for_station("S1");
    sample.collect_time = Some("20260310".to_string());
    sample.data_item_map.day_power = Some(97.5);
    let series = DailySeries::synthetic(vec![sample]);

    let out = TextFormatter::new(false).daily(&series);
    assert!(out.contains("synthesized"));
    assert!(out.contains("20260310"));
    assert!(out.contains("97.5"));
}

#[test]
fn test_text_daily_measured_has_no_banner() {
    let series = DailySeries::measured(vec![KpiSample::for_station("S1")]);
    let out = TextFormatter::new(false).daily(&series);
    assert!(!out.contains("synthesized"));
}

#[test]
fn test_text_devices_table() {
    let device: Device = serde_json::from_str(
        r#"{"id": 101, "devName": "Inverter-01", "devTypeId": 38, "esnCode": "HV3021"}"#,
    )
    .unwrap();
    let out = TextFormatter::new(false).devices(&[device]);
    assert!(out.contains("Inverter-01"));
    assert!(out.contains("38"));
    assert!(out.contains("HV3021"));
}

#[test]
fn test_json_carries_provenance() {
    let series = DailySeries::synthetic(vec![KpiSample::for_station("S1")]);
    let out = JsonFormatter::new(false).render(&series).unwrap();
    assert!(out.contains(r#""provenance":"synthetic""#));
}

#[test]
fn test_json_pretty_is_indented() {
    let out = JsonFormatter::new(true).render(&sample_plants()).unwrap();
    assert!(out.contains('\n'));
    assert!(out.contains("  "));
}
