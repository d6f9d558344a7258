//! Credential and endpoint resolution.
//!
//! Flags win over environment variables. Nothing is persisted: the secret
//! lives for the process only.

use anyhow::{anyhow, Result};
use solwatch_client::{Credentials, RetryPolicy, DEFAULT_BASE_URL};

use crate::Cli;

/// Environment variable carrying the account name.
pub const ACCOUNT_ENV: &str = "SOLWATCH_ACCOUNT";
/// Environment variable carrying the shared secret.
pub const SECRET_ENV: &str = "SOLWATCH_SECRET";
/// Environment variable overriding the vendor base URL.
pub const BASE_URL_ENV: &str = "SOLWATCH_BASE_URL";

/// Resolved client settings.
pub struct ClientSettings {
    /// Account credentials.
    pub credentials: Credentials,
    /// Vendor base URL.
    pub base_url: String,
    /// Retry policy for the session.
    pub policy: RetryPolicy,
}

impl ClientSettings {
    /// Resolves settings from flags, then environment.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let account = cli
            .account
            .clone()
            .or_else(|| env_var(ACCOUNT_ENV))
            .ok_or_else(|| anyhow!("no account: pass --account or set {ACCOUNT_ENV}"))?;

        let secret = cli
            .secret
            .clone()
            .or_else(|| env_var(SECRET_ENV))
            .ok_or_else(|| anyhow!("no secret: pass --secret or set {SECRET_ENV}"))?;

        let base_url = cli
            .base_url
            .clone()
            .or_else(|| env_var(BASE_URL_ENV))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            credentials: Credentials::new(account, secret),
            base_url,
            policy: RetryPolicy::default(),
        })
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

// ============================================================================
// Tests
// ============================================================================
