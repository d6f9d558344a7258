//! Resilient request executor.
//!
//! Wraps every vendor call with session-ensure, bounded retry, and timed
//! backoff. The retry loop is explicit and holds its own budget; a call
//! never recurses into itself. Recoverable failures are exactly two:
//! session-expired (re-login and go again) and rate-limited (back off
//! first). Everything else surfaces immediately, classified.

use serde_json::Value;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::cancel::CancelHandle;
use crate::error::ClientError;
use crate::policy::RetryPolicy;
use crate::session::SessionManager;
use crate::wire::{self, VendorResponse};

#[derive(Debug)]
pub(crate) struct RequestExecutor {
    http: reqwest::Client,
    base_url: String,
    session: Mutex<SessionManager>,
    policy: RetryPolicy,
}

impl RequestExecutor {
    pub(crate) fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        session: SessionManager,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            session: Mutex::new(session),
            policy,
        }
    }

    /// Establishes a session now if none is valid. Single attempt; the
    /// retry machinery belongs to [`execute`](Self::execute).
    pub(crate) async fn ensure_login(&self) -> Result<(), ClientError> {
        let mut session = self.session.lock().await;
        if session.is_valid() {
            return Ok(());
        }
        session.login().await
    }

    /// Executes one vendor call, retrying recoverable failures within the
    /// policy budget. Returns the envelope's `data` payload.
    pub(crate) async fn execute(
        &self,
        endpoint: &str,
        payload: &Value,
        cancel: &CancelHandle,
    ) -> Result<Value, ClientError> {
        // The rate limiter penalizes bursts right after login, so every call
        // starts with a quiet period.
        self.wait(self.policy.warmup_delay, cancel).await?;

        let mut retries_left = self.policy.max_retries;

        loop {
            // Ensure a valid session. Holding the lock across login makes
            // it single-flight: concurrent callers wait for this result.
            let token = {
                let mut session = self.session.lock().await;
                if !session.is_valid() {
                    match session.login().await {
                        Ok(()) => {}
                        Err(ClientError::Vendor { kind, code, message }) => {
                            if kind.recovers_with_backoff() && retries_left > 0 {
                                retries_left -= 1;
                                drop(session);
                                warn!(
                                    code,
                                    message = %message,
                                    backoff_secs = self.policy.login_backoff.as_secs(),
                                    "login rate limited, backing off"
                                );
                                self.wait(self.policy.login_backoff, cancel).await?;
                                continue;
                            }
                            return Err(ClientError::Vendor { kind, code, message });
                        }
                        Err(ClientError::Http(e)) if RetryPolicy::is_transient(&e) => {
                            if retries_left > 0 {
                                retries_left -= 1;
                                drop(session);
                                warn!(error = %e, "login transport failure, retrying");
                                self.wait(self.policy.network_backoff, cancel).await?;
                                continue;
                            }
                            return Err(ClientError::Connectivity(e.to_string()));
                        }
                        Err(e) => return Err(e),
                    }
                }
                session
                    .token()
                    .map(str::to_string)
                    .ok_or_else(|| {
                        ClientError::InvalidResponse("session token missing after login".into())
                    })?
            };

            // Sign-and-send. A retry recomputes the timestamp; nothing from
            // a previous attempt is reused.
            let body = serde_json::to_string(payload)?;
            let timestamp = chrono::Utc::now().timestamp_millis().to_string();

            debug!(endpoint, attempt = self.policy.max_retries - retries_left + 1, "calling vendor");

            let sent = self
                .http
                .post(format!("{}{}", self.base_url, endpoint))
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .header(wire::XSRF_TOKEN_HEADER, &token)
                .header(wire::TIMESTAMP_HEADER, &timestamp)
                .body(body)
                .send()
                .await;

            let response = match sent {
                Ok(response) => response,
                Err(e) if RetryPolicy::is_transient(&e) && retries_left > 0 => {
                    retries_left -= 1;
                    warn!(endpoint, error = %e, "transport failure, retrying");
                    self.wait(self.policy.network_backoff, cancel).await?;
                    continue;
                }
                Err(e) if RetryPolicy::is_transient(&e) => {
                    return Err(ClientError::Connectivity(e.to_string()));
                }
                Err(e) => return Err(ClientError::Http(e)),
            };

            let envelope: VendorResponse = response.json().await?;

            let Some(failure) = envelope.failure() else {
                return Ok(envelope.into_data());
            };

            if failure.kind.recovers_with_relogin() && retries_left > 0 {
                retries_left -= 1;
                debug!(endpoint, code = failure.code, "session rejected, re-logging in");
                self.session.lock().await.invalidate();
                continue;
            }

            if failure.kind.recovers_with_backoff() && retries_left > 0 {
                retries_left -= 1;
                warn!(
                    endpoint,
                    code = failure.code,
                    backoff_secs = self.policy.retry_backoff.as_secs(),
                    "rate limited, backing off"
                );
                self.session.lock().await.invalidate();
                self.wait(self.policy.retry_backoff, cancel).await?;
                continue;
            }

            warn!(endpoint, code = failure.code, kind = %failure.kind, "vendor call failed");
            return Err(ClientError::vendor(failure));
        }
    }

    /// Cancellable wait. Zero-length waits return immediately without
    /// consulting the handle so delay-free test policies cannot race a
    /// pre-cancelled handle.
    async fn wait(&self, duration: Duration, cancel: &CancelHandle) -> Result<(), ClientError> {
        if duration.is_zero() {
            return Ok(());
        }
        if cancel.is_cancelled() {
            return Err(ClientError::Cancelled);
        }
        tokio::select! {
            () = tokio::time::sleep(duration) => Ok(()),
            () = cancel.cancelled() => Err(ClientError::Cancelled),
        }
    }
}
