//! Client error types.

use solwatch_core::{VendorErrorKind, VendorFailure};
use thiserror::Error;

/// Error type for client operations.
///
/// Every public verb either returns data or exactly one of these; partial
/// results do not exist. Vendor-classified failures and transport failures
/// stay distinct so callers can tell "the service refused" from "the network
/// ate it".
#[derive(Debug, Error)]
pub enum ClientError {
    /// The vendor reported a failure code; classified via the taxonomy.
    #[error("{kind} (vendor code {code}): {message}")]
    Vendor {
        /// Semantic kind from the taxonomy.
        kind: VendorErrorKind,
        /// Raw vendor failure code.
        code: i64,
        /// Taxonomy or server-supplied message.
        message: String,
    },

    /// Transport-level failure that survived the retry budget.
    #[error("Connectivity error: {0}")]
    Connectivity(String),

    /// HTTP request failed (non-transient transport or protocol error).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Payload did not parse.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The vendor answered outside its own envelope contract.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Client construction or argument problem.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The operation was cancelled through its [`crate::CancelHandle`].
    #[error("Operation cancelled")]
    Cancelled,
}

impl ClientError {
    /// Wraps a classified vendor failure.
    pub fn vendor(failure: VendorFailure) -> Self {
        Self::Vendor {
            kind: failure.kind,
            code: failure.code,
            message: failure.message,
        }
    }

    /// The vendor kind, when this is a vendor-classified error.
    pub fn vendor_kind(&self) -> Option<VendorErrorKind> {
        match self {
            Self::Vendor { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vendor_error_renders_kind_and_code() {
        let err = ClientError::vendor(VendorFailure::from_code(20003));
        let rendered = err.to_string();
        assert!(rendered.contains("bad credential"));
        assert!(rendered.contains("20003"));
        assert_eq!(err.vendor_kind(), Some(VendorErrorKind::BadCredential));
    }

    #[test]
    fn test_non_vendor_errors_have_no_kind() {
        assert!(ClientError::Cancelled.vendor_kind().is_none());
        assert!(ClientError::Connectivity("reset".into()).vendor_kind().is_none());
    }
}
