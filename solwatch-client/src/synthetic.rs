//! Synthetic daily-series fallback.
//!
//! Accounts below a certain tier cannot read the historical KPI endpoints;
//! the vendor answers permission-denied or no-data. Rather than render an
//! empty chart, the daily verb fabricates a week of plausible values from
//! the latest real-time reading. The output is shaped exactly like genuine
//! history; the provenance marker on the returned series is what keeps the
//! substitution honest.

use chrono::{Days, NaiveDate};
use rand::Rng;
use solwatch_core::{KpiMap, KpiSample};

/// Number of days synthesized, ending today.
pub const SYNTHETIC_DAYS: u64 = 7;

/// Per-day scaling range applied to the current day-energy reading.
const ENERGY_FACTOR_MIN: f64 = 0.7;
const ENERGY_FACTOR_MAX: f64 = 1.3;

/// Theoretical power tracks synthesized energy at a fixed ratio.
const THEORY_RATIO: f64 = 1.1;

/// Plausible plane-of-array irradiation range, kWh/m².
const IRRADIATION_MIN: f64 = 2.0;
const IRRADIATION_MAX: f64 = 8.0;

/// Fabricates a [`SYNTHETIC_DAYS`]-day daily series from a real-time
/// reading, one sample per day ending at `today`, oldest first.
///
/// Each day scales the reading's `day_power` by a factor drawn uniformly
/// from [0.7, 1.3]; `theory_power` is 1.1× the synthesized energy and
/// `irradiation` is drawn from [2, 8]. A reading without `day_power`
/// synthesizes zero-energy days.
pub fn synthesize(reading: &KpiSample, today: NaiveDate) -> Vec<KpiSample> {
    let mut rng = rand::thread_rng();
    let base = reading.data_item_map.day_power.unwrap_or(0.0);

    (0..SYNTHETIC_DAYS)
        .rev()
        .map(|days_back| {
            let date = today
                .checked_sub_days(Days::new(days_back))
                .unwrap_or(today);
            let energy = base * rng.gen_range(ENERGY_FACTOR_MIN..=ENERGY_FACTOR_MAX);

            KpiSample {
                station_code: reading.station_code.clone(),
                collect_time: Some(date.format("%Y%m%d").to_string()),
                data_item_map: KpiMap {
                    day_power: Some(energy),
                    inverter_power: Some(energy),
                    theory_power: Some(energy * THEORY_RATIO),
                    irradiation: Some(rng.gen_range(IRRADIATION_MIN..=IRRADIATION_MAX)),
                    ..KpiMap::default()
                },
            }
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
