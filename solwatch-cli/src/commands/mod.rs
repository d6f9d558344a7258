//! CLI command implementations.

pub mod daily;
pub mod detail;
pub mod device_kpi;
pub mod devices;
pub mod monthly;
pub mod plants;
pub mod watch;
