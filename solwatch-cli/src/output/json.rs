//! JSON output for scripting.
//!
//! Domain models already serialize with the vendor's camelCase field names,
//! so JSON output is a thin wrapper; the daily series keeps its
//! `provenance` field, which is the machine-readable synthetic marker.

use anyhow::Result;
use serde::Serialize;

/// JSON formatter.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a formatter; `pretty` switches to indented output.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Serializes any output value.
    pub fn render<T: Serialize>(&self, value: &T) -> Result<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(rendered)
    }
}
