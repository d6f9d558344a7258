//! Vendor session lifecycle.
//!
//! One login establishes two things at once: the server-issued session token
//! (echoed back in the `xsrf-token` response header and expected on every
//! subsequent call) and a set of affinity cookies pinning the session to the
//! backend instance that authenticated it. The cookies live in the shared
//! HTTP client's cookie store; this module owns everything else.

use std::fmt;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::error::ClientError;
use crate::signer::sign;
use crate::wire::{self, VendorResponse};

// ============================================================================
// Credentials
// ============================================================================

/// Account identifier and shared secret, supplied once at construction.
#[derive(Clone)]
pub struct Credentials {
    account: String,
    secret: String,
}

impl Credentials {
    /// Creates credentials from an account name and its shared secret.
    pub fn new(account: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            secret: secret.into(),
        }
    }

    /// The account identifier.
    pub fn account(&self) -> &str {
        &self.account
    }

    pub(crate) fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("account", &self.account)
            .field("secret", &"<redacted>")
            .finish()
    }
}

// ============================================================================
// Session State
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Unauthenticated,
    Authenticating,
    Authenticated,
    Expired,
}

/// Owns the authenticated session: token, expiry clock, and state machine.
///
/// Not internally synchronized; the executor keeps one instance behind an
/// async mutex, which also makes login single-flight (the vendor throttles
/// concurrent logins from one account).
#[derive(Debug)]
pub(crate) struct SessionManager {
    http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
    session_timeout: Duration,
    state: SessionState,
    token: Option<String>,
    established: Option<Instant>,
}

impl SessionManager {
    pub(crate) fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        credentials: Credentials,
        session_timeout: Duration,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            credentials,
            session_timeout,
            state: SessionState::Unauthenticated,
            token: None,
            established: None,
        }
    }

    /// True while the session is authenticated and inside the local validity
    /// window. Purely a clock check; no network traffic.
    pub(crate) fn is_valid(&self) -> bool {
        self.state == SessionState::Authenticated
            && self
                .established
                .is_some_and(|at| at.elapsed() < self.session_timeout)
    }

    /// Forces the session into the expired state. Called by the executor
    /// when a downstream response reveals the server no longer honors it.
    pub(crate) fn invalidate(&mut self) {
        if self.state == SessionState::Authenticated {
            debug!("invalidating session");
        }
        self.state = SessionState::Expired;
        self.token = None;
        self.established = None;
    }

    /// The current session token, when authenticated.
    pub(crate) fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Performs a signed login and records the resulting session.
    ///
    /// On vendor failure the state returns to `Unauthenticated` and the
    /// classified error is raised.
    pub(crate) async fn login(&mut self) -> Result<(), ClientError> {
        self.state = SessionState::Authenticating;
        self.token = None;
        self.established = None;

        let body = serde_json::to_string(&serde_json::json!({
            "userName": self.credentials.account(),
            "systemCode": self.credentials.secret(),
        }))?;
        let timestamp = chrono::Utc::now().timestamp_millis().to_string();
        let signature = sign(self.credentials.secret(), &body, &timestamp);

        debug!(account = %self.credentials.account(), "logging in");

        let response = self
            .http
            .post(format!("{}{}", self.base_url, wire::LOGIN))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(wire::XSRF_TOKEN_HEADER, &signature)
            .header(wire::TIMESTAMP_HEADER, &timestamp)
            .body(body)
            .send()
            .await
            .inspect_err(|_| self.state = SessionState::Unauthenticated)?;

        // The server echoes the session token in a response header; fall
        // back to the login signature, which older gateway versions accept.
        let server_token = response
            .headers()
            .get("xsrf-token")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let envelope: VendorResponse = response.json().await.inspect_err(|_| {
            self.state = SessionState::Unauthenticated;
        })?;

        if let Some(failure) = envelope.failure() {
            warn!(code = failure.code, kind = %failure.kind, "login rejected");
            self.state = SessionState::Unauthenticated;
            return Err(ClientError::vendor(failure));
        }

        self.token = Some(server_token.unwrap_or(signature));
        self.established = Some(Instant::now());
        self.state = SessionState::Authenticated;
        info!(account = %self.credentials.account(), "session established");
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use solwatch_core::VendorErrorKind;

    fn manager(base_url: &str, timeout: Duration) -> SessionManager {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .unwrap();
        SessionManager::new(http, base_url, Credentials::new("fleet-api", "secret"), timeout)
    }

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let rendered = format!("{:?}", Credentials::new("fleet-api", "hunter2"));
        assert!(rendered.contains("fleet-api"));
        assert!(!rendered.contains("hunter2"));
    }

    #[tokio::test]
    async fn test_login_establishes_valid_session() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/login")
            .with_status(200)
            .with_header("xsrf-token", "server-issued-token")
            .with_body(r#"{"success": true}"#)
            .create_async()
            .await;

        let mut session = manager(&server.url(), Duration::from_secs(25 * 60));
        assert!(!session.is_valid());

        session.login().await.unwrap();
        assert!(session.is_valid());
        assert_eq!(session.token(), Some("server-issued-token"));
    }

    #[tokio::test]
    async fn test_session_expires_by_clock_alone() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/login")
            .with_status(200)
            .with_header("xsrf-token", "tok")
            .with_body(r#"{"success": true}"#)
            .create_async()
            .await;

        let mut session = manager(&server.url(), Duration::from_millis(40));
        session.login().await.unwrap();
        assert!(session.is_valid());

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(!session.is_valid());
    }

    #[tokio::test]
    async fn test_invalidate_forces_expired() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/login")
            .with_status(200)
            .with_header("xsrf-token", "tok")
            .with_body(r#"{"success": true}"#)
            .create_async()
            .await;

        let mut session = manager(&server.url(), Duration::from_secs(25 * 60));
        session.login().await.unwrap();
        session.invalidate();
        assert!(!session.is_valid());
        assert!(session.token().is_none());
    }

    #[tokio::test]
    async fn test_rejected_login_classifies_and_resets() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/login")
            .with_status(200)
            .with_body(r#"{"success": false, "failCode": 20003}"#)
            .create_async()
            .await;

        let mut session = manager(&server.url(), Duration::from_secs(25 * 60));
        let err = session.login().await.unwrap_err();
        assert_eq!(err.vendor_kind(), Some(VendorErrorKind::BadCredential));
        assert!(!session.is_valid());
    }

    #[tokio::test]
    async fn test_login_without_token_header_keeps_signature() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/login")
            .with_status(200)
            .with_body(r#"{"success": true}"#)
            .create_async()
            .await;

        let mut session = manager(&server.url(), Duration::from_secs(25 * 60));
        session.login().await.unwrap();
        // Falls back to the request signature: 64 hex chars.
        assert_eq!(session.token().map(str::len), Some(64));
    }
}
