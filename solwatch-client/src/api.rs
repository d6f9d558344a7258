//! The plant API facade.
//!
//! Each verb is a thin composition of the request executor with an endpoint
//! path and a payload shape. Multi-station arguments join into the vendor's
//! comma-separated list form.

use chrono::NaiveDate;
use serde_json::{json, Value};
use tracing::info;

use solwatch_core::{DailySeries, Device, KpiSample, Plant};

use crate::cancel::CancelHandle;
use crate::error::ClientError;
use crate::executor::RequestExecutor;
use crate::policy::RetryPolicy;
use crate::session::{Credentials, SessionManager};
use crate::synthetic::synthesize;
use crate::wire;

/// Client for the vendor's northbound API.
///
/// Owns the single authoritative session; construct one per account and
/// share it by reference. Verbs may be called concurrently: session
/// mutations serialize internally, and data calls reuse the same affinity
/// cookies.
#[derive(Debug)]
pub struct SolarClient {
    executor: RequestExecutor,
    cancel: CancelHandle,
}

impl SolarClient {
    /// Creates a client against the vendor's production base path with the
    /// default retry policy.
    pub fn new(credentials: Credentials) -> Result<Self, ClientError> {
        Self::with_config(credentials, wire::DEFAULT_BASE_URL, RetryPolicy::default())
    }

    /// Creates a client with an explicit base URL and retry policy.
    pub fn with_config(
        credentials: Credentials,
        base_url: impl Into<String>,
        policy: RetryPolicy,
    ) -> Result<Self, ClientError> {
        let base_url = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ClientError::InvalidConfig("base URL is empty".into()));
        }

        // One HTTP client for login and data calls alike: the cookie store
        // carries the session affinity cookies between them.
        let http = reqwest::Client::builder()
            .timeout(policy.request_timeout)
            .cookie_store(true)
            .user_agent(concat!("solwatch/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let session = SessionManager::new(
            http.clone(),
            base_url.clone(),
            credentials,
            policy.session_timeout,
        );

        Ok(Self {
            executor: RequestExecutor::new(http, base_url, session, policy),
            cancel: CancelHandle::new(),
        })
    }

    /// A handle that aborts this client's in-flight backoff waits.
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Establishes a session now instead of lazily on the first verb call.
    pub async fn login(&self) -> Result<(), ClientError> {
        self.executor.ensure_login().await
    }

    /// Lists the plants visible to the account.
    pub async fn list_plants(&self) -> Result<Vec<Plant>, ClientError> {
        let data = self
            .executor
            .execute(wire::STATION_LIST, &json!({}), &self.cancel)
            .await?;
        parse_list(data)
    }

    /// Real-time KPIs for one or more plants.
    pub async fn get_plant_detail<S: AsRef<str>>(
        &self,
        station_codes: &[S],
    ) -> Result<Vec<KpiSample>, ClientError> {
        let payload = json!({ "stationCodes": join_codes(station_codes) });
        let data = self
            .executor
            .execute(wire::STATION_REAL_KPI, &payload, &self.cancel)
            .await?;
        parse_list(data)
    }

    /// Daily KPI series for the inclusive day range.
    ///
    /// When the account tier cannot read the historical endpoint (the
    /// vendor reports permission-denied or no-data), degrades to a
    /// synthesized week derived from the current real-time reading; the
    /// returned series is flagged [`Synthetic`](solwatch_core::Provenance).
    pub async fn get_daily_series<S: AsRef<str>>(
        &self,
        station_codes: &[S],
        start_day: NaiveDate,
        end_day: NaiveDate,
    ) -> Result<DailySeries, ClientError> {
        let payload = json!({
            "stationCodes": join_codes(station_codes),
            "startTime": start_day.format("%Y%m%d").to_string(),
            "endTime": end_day.format("%Y%m%d").to_string(),
        });

        match self
            .executor
            .execute(wire::KPI_STATION_DAY, &payload, &self.cancel)
            .await
        {
            Ok(data) => Ok(DailySeries::measured(parse_list(data)?)),
            Err(ClientError::Vendor { kind, code, .. }) if kind.denotes_unavailable_data() => {
                info!(code, "historical data unavailable to this account, synthesizing");
                let readings = self.get_plant_detail(station_codes).await?;
                let today = chrono::Local::now().date_naive();
                let samples = readings
                    .iter()
                    .flat_map(|reading| synthesize(reading, today))
                    .collect();
                Ok(DailySeries::synthetic(samples))
            }
            Err(e) => Err(e),
        }
    }

    /// Monthly KPI series for the inclusive month range (`month` arguments
    /// use the first of the month; the day component is ignored).
    ///
    /// The target account class cannot read this endpoint at all; when the
    /// vendor reports it unavailable the verb returns an empty series,
    /// never a synthesized one.
    pub async fn get_monthly_series<S: AsRef<str>>(
        &self,
        station_codes: &[S],
        start_month: NaiveDate,
        end_month: NaiveDate,
    ) -> Result<Vec<KpiSample>, ClientError> {
        let payload = json!({
            "stationCodes": join_codes(station_codes),
            "startTime": start_month.format("%Y%m").to_string(),
            "endTime": end_month.format("%Y%m").to_string(),
        });

        match self
            .executor
            .execute(wire::KPI_STATION_MONTH, &payload, &self.cancel)
            .await
        {
            Ok(data) => parse_list(data),
            Err(ClientError::Vendor { kind, code, .. }) if kind.denotes_unavailable_data() => {
                info!(code, "monthly data unavailable to this account");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Lists devices across one or more plants.
    pub async fn list_devices<S: AsRef<str>>(
        &self,
        station_codes: &[S],
    ) -> Result<Vec<Device>, ClientError> {
        let payload = json!({ "stationCodes": join_codes(station_codes) });
        let data = self
            .executor
            .execute(wire::DEV_LIST, &payload, &self.cancel)
            .await?;
        parse_list(data)
    }

    /// Real-time KPIs for one or more devices of a single type.
    pub async fn get_device_detail<S: AsRef<str>>(
        &self,
        dev_ids: &[S],
        dev_type_id: i64,
    ) -> Result<Vec<KpiSample>, ClientError> {
        let payload = json!({
            "devIds": join_codes(dev_ids),
            "devTypeId": dev_type_id.to_string(),
        });
        let data = self
            .executor
            .execute(wire::DEV_REAL_KPI, &payload, &self.cancel)
            .await?;
        parse_list(data)
    }
}

/// Joins codes into the vendor's comma-separated list form.
fn join_codes<S: AsRef<str>>(codes: &[S]) -> String {
    codes
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",")
}

/// Parses a list payload; the vendor sends JSON null for "no rows".
fn parse_list<T: serde::de::DeserializeOwned>(data: Value) -> Result<Vec<T>, ClientError> {
    match data {
        Value::Null => Ok(Vec::new()),
        other => Ok(serde_json::from_value(other)?),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_codes() {
        assert_eq!(join_codes(&["S1"]), "S1");
        assert_eq!(join_codes(&["S1", "S2", "S3"]), "S1,S2,S3");
        assert_eq!(join_codes::<&str>(&[]), "");
    }

    #[test]
    fn test_parse_list_accepts_null() {
        let plants: Vec<Plant> = parse_list(Value::Null).unwrap();
        assert!(plants.is_empty());
    }

    #[test]
    fn test_parse_list_rejects_non_list() {
        let result: Result<Vec<Plant>, _> = parse_list(json!({"not": "a list"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let err = SolarClient::with_config(
            Credentials::new("a", "s"),
            "",
            RetryPolicy::immediate(),
        )
        .unwrap_err();
        assert!(matches!(err, ClientError::InvalidConfig(_)));
    }
}
