// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Solwatch Core
//!
//! Core types and models for the Solwatch solar fleet monitor.
//!
//! This crate provides the foundational abstractions used across the other
//! Solwatch crates, including:
//!
//! - Domain models (plants, KPI samples, devices)
//! - The vendor error taxonomy
//! - Provenance marking for degraded data
//!
//! ## Key Types
//!
//! ### Domain Models
//! - [`Plant`] - A monitored solar installation (vendor "station")
//! - [`KpiSample`] - One KPI reading for a station or device
//! - [`KpiMap`] - The named metric map carried by a sample
//! - [`Device`] - A device (inverter, meter, ...) within a plant
//!
//! ### Series & Provenance
//! - [`DailySeries`] - Daily KPI series with a provenance marker
//! - [`Provenance`] - Whether data is measured or synthesized
//!
//! ### Errors
//! - [`VendorErrorKind`] - Semantic classification of vendor failure codes
//! - [`VendorFailure`] - A classified vendor failure (kind + code + message)

pub mod error;
pub mod models;

// Re-export error types
pub use error::{classify, VendorErrorKind, VendorFailure};

// Re-export all model types
pub use models::{DailySeries, Device, KpiMap, KpiSample, Plant, Provenance};
