// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Solwatch Client
//!
//! Resilient authenticated client for the monitoring vendor's northbound
//! HTTP API.
//!
//! The vendor authenticates with a non-standard scheme: every request is
//! HMAC-signed, the login response pins the session to one backend via
//! cookies, and subsequent calls carry a server-issued token in the same
//! `XSRF-TOKEN` header the signature used. Sessions expire server-side
//! after roughly half an hour and the rate limiter penalizes bursts, so
//! every call runs through an executor that re-logs-in and backs off as
//! needed.
//!
//! ## Key Types
//!
//! - [`SolarClient`] - the public verb facade
//! - [`Credentials`] - account identifier + shared secret
//! - [`RetryPolicy`] - retry budget and backoff windows
//! - [`CancelHandle`] - aborts in-flight backoff waits
//! - [`ClientError`] - classified errors (vendor, connectivity, ...)
//!
//! ## Example
//!
//! ```no_run
//! use solwatch_client::{Credentials, SolarClient};
//!
//! # async fn run() -> Result<(), solwatch_client::ClientError> {
//! let client = SolarClient::new(Credentials::new("fleet-api", "secret"))?;
//! for plant in client.list_plants().await? {
//!     println!("{}: {}", plant.station_code, plant.station_name);
//! }
//! # Ok(())
//! # }
//! ```

mod api;
mod cancel;
mod error;
mod executor;
mod policy;
mod session;
mod signer;
mod synthetic;
mod wire;

pub use api::SolarClient;
pub use cancel::CancelHandle;
pub use error::ClientError;
pub use policy::RetryPolicy;
pub use session::Credentials;
pub use signer::sign;
pub use synthetic::{synthesize, SYNTHETIC_DAYS};
pub use wire::DEFAULT_BASE_URL;
