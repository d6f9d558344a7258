//! Human-readable text output.

use solwatch_core::{DailySeries, Device, KpiSample, Plant};

/// Text formatter with optional ANSI color.
pub struct TextFormatter {
    color: bool,
}

impl TextFormatter {
    /// Creates a formatter; `color` enables ANSI escapes.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn dim(&self, s: &str) -> String {
        if self.color {
            format!("\x1b[2m{s}\x1b[0m")
        } else {
            s.to_string()
        }
    }

    fn warn(&self, s: &str) -> String {
        if self.color {
            format!("\x1b[33m{s}\x1b[0m")
        } else {
            s.to_string()
        }
    }

    /// Renders the plant list as a table.
    pub fn plants(&self, plants: &[Plant]) -> String {
        if plants.is_empty() {
            return "No plants visible to this account.\n".to_string();
        }

        let mut out = String::new();
        out.push_str(&format!(
            "{:<34} {:<24} {:>10}\n",
            "CODE", "NAME", "CAPACITY"
        ));
        for plant in plants {
            out.push_str(&format!(
                "{:<34} {:<24} {:>10}\n",
                plant.station_code,
                plant.station_name,
                plant
                    .capacity
                    .map_or_else(|| self.dim("-"), |c| format!("{c} kWp")),
            ));
        }
        out
    }

    /// Renders real-time KPI samples.
    pub fn kpis(&self, samples: &[KpiSample]) -> String {
        if samples.is_empty() {
            return "No KPI data returned.\n".to_string();
        }

        let mut out = String::new();
        for sample in samples {
            out.push_str(&format!("{}\n", sample.station_code));
            let map = &sample.data_item_map;
            out.push_str(&format!(
                "  current power    {}\n",
                metric(map.real_power, "kW")
            ));
            out.push_str(&format!(
                "  energy today     {}\n",
                metric(map.day_power, "kWh")
            ));
            out.push_str(&format!(
                "  lifetime energy  {}\n",
                metric(map.total_power, "kWh")
            ));
            out.push_str(&format!(
                "  theoretical      {}\n",
                metric(map.theory_power, "kW")
            ));
        }
        out
    }

    /// Renders a daily series; synthetic series get an unmissable banner.
    pub fn daily(&self, series: &DailySeries) -> String {
        let mut out = String::new();
        if series.is_synthetic() {
            out.push_str(&self.warn(
                "! historical data unavailable to this account; values below are synthesized\n",
            ));
        }
        out.push_str(&format!(
            "{:<10} {:>12} {:>12} {:>12}\n",
            "DATE", "ENERGY", "THEORY", "IRRAD"
        ));
        for sample in &series.samples {
            let map = &sample.data_item_map;
            let energy = map.inverter_power.or(map.day_power);
            out.push_str(&format!(
                "{:<10} {:>12} {:>12} {:>12}\n",
                sample.collect_time.as_deref().unwrap_or("-"),
                metric(energy, "kWh"),
                metric(map.theory_power, "kW"),
                metric(map.irradiation, ""),
            ));
        }
        out
    }

    /// Renders the device list.
    pub fn devices(&self, devices: &[Device]) -> String {
        if devices.is_empty() {
            return "No devices found.\n".to_string();
        }

        let mut out = String::new();
        out.push_str(&format!(
            "{:<20} {:<24} {:>8} {:<16}\n",
            "ID", "NAME", "TYPE", "SERIAL"
        ));
        for device in devices {
            out.push_str(&format!(
                "{:<20} {:<24} {:>8} {:<16}\n",
                device.id,
                device.label(),
                device.dev_type_id,
                device.esn_code.as_deref().unwrap_or("-"),
            ));
        }
        out
    }
}

fn metric(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) if unit.is_empty() => format!("{v:.1}"),
        Some(v) => format!("{v:.1} {unit}"),
        None => "-".to_string(),
    }
}
