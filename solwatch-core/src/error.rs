//! Vendor error taxonomy.
//!
//! The monitoring service reports failures through numeric `failCode` values
//! in its response envelope. This module maps every known code to a semantic
//! kind and a human-readable message, in one place, so call sites never
//! carry their own code tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ============================================================================
// Error Kind
// ============================================================================

/// Semantic classification of a vendor failure code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VendorErrorKind {
    /// Request parameters were rejected.
    InvalidParameters,
    /// The account does not exist.
    UnknownAccount,
    /// The account/secret pair was rejected.
    BadCredential,
    /// The account is locked.
    AccountLocked,
    /// The account has expired.
    AccountExpired,
    /// The presented token was not recognized.
    InvalidToken,
    /// The presented token has expired.
    ExpiredToken,
    /// Too many login attempts.
    TooManyAttempts,
    /// The service is under maintenance.
    ServiceMaintenance,
    /// The account tier may not access the resource.
    PermissionDenied,
    /// No data is available for the query.
    NoData,
    /// The server-side session has expired; recoverable by re-login.
    SessionExpired,
    /// The caller is being rate limited; recoverable by backing off.
    RateLimited,
    /// A failure code outside the known table.
    Unknown,
}

impl VendorErrorKind {
    /// Returns the display name for this kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::InvalidParameters => "invalid parameters",
            Self::UnknownAccount => "unknown account",
            Self::BadCredential => "bad credential",
            Self::AccountLocked => "account locked",
            Self::AccountExpired => "account expired",
            Self::InvalidToken => "invalid token",
            Self::ExpiredToken => "expired token",
            Self::TooManyAttempts => "too many attempts",
            Self::ServiceMaintenance => "service maintenance",
            Self::PermissionDenied => "permission denied",
            Self::NoData => "no data available",
            Self::SessionExpired => "session expired",
            Self::RateLimited => "rate limited",
            Self::Unknown => "unknown vendor error",
        }
    }

    /// True if a fresh login is expected to clear this failure.
    pub fn recovers_with_relogin(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }

    /// True if waiting out the rate limiter is expected to clear this failure.
    pub fn recovers_with_backoff(&self) -> bool {
        matches!(self, Self::RateLimited)
    }

    /// True if this failure is recoverable at all (relogin or backoff).
    pub fn is_recoverable(&self) -> bool {
        self.recovers_with_relogin() || self.recovers_with_backoff()
    }

    /// True if this failure means the data class is unavailable to the
    /// caller's account tier rather than the request being wrong.
    ///
    /// The daily-series verb degrades to a synthetic series on these.
    pub fn denotes_unavailable_data(&self) -> bool {
        matches!(self, Self::PermissionDenied | Self::NoData)
    }
}

impl fmt::Display for VendorErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Classification
// ============================================================================

/// Classifies a vendor failure code into a kind and message.
///
/// Codes outside the table classify as [`VendorErrorKind::Unknown`]; the raw
/// code still travels with the resulting [`VendorFailure`].
pub fn classify(code: i64) -> (VendorErrorKind, &'static str) {
    match code {
        20001 => (VendorErrorKind::InvalidParameters, "Invalid request parameters"),
        20002 => (VendorErrorKind::UnknownAccount, "Account does not exist"),
        20003 => (VendorErrorKind::BadCredential, "Account or system code is incorrect"),
        20004 => (VendorErrorKind::AccountLocked, "Account is locked"),
        20005 => (VendorErrorKind::AccountExpired, "Account has expired"),
        20006 => (VendorErrorKind::InvalidToken, "Token was not recognized"),
        20007 => (VendorErrorKind::ExpiredToken, "Token has expired"),
        20008 => (VendorErrorKind::TooManyAttempts, "Too many login attempts"),
        20009 => (VendorErrorKind::ServiceMaintenance, "Service is under maintenance"),
        20010 => (VendorErrorKind::PermissionDenied, "Permission denied for this account"),
        20012 => (VendorErrorKind::NoData, "No data available for the requested period"),
        20400 => (VendorErrorKind::InvalidParameters, "Request body was malformed"),
        20401 => (VendorErrorKind::BadCredential, "Not authorized; check account and system code"),
        20403 => (VendorErrorKind::PermissionDenied, "Access denied"),
        20404 => (VendorErrorKind::Unknown, "Resource not found"),
        20500 => (VendorErrorKind::ServiceMaintenance, "Internal server error"),
        20503 => (VendorErrorKind::ServiceMaintenance, "Service unavailable"),
        305 => (VendorErrorKind::SessionExpired, "Session expired; re-login required"),
        407 => (VendorErrorKind::RateLimited, "Request rate limited by the server"),
        _ => (VendorErrorKind::Unknown, "Unknown vendor error"),
    }
}

// ============================================================================
// Vendor Failure
// ============================================================================

/// A classified vendor failure: semantic kind, raw code, and message.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{kind} (code {code}): {message}")]
pub struct VendorFailure {
    /// Semantic kind from the taxonomy.
    pub kind: VendorErrorKind,
    /// The raw vendor failure code.
    pub code: i64,
    /// Human-readable message from the taxonomy.
    pub message: String,
}

impl VendorFailure {
    /// Classifies a raw vendor code into a failure record.
    pub fn from_code(code: i64) -> Self {
        let (kind, message) = classify(code);
        Self {
            kind,
            code,
            message: message.to_string(),
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
    fn test_known_codes_classify() {
        let table = [
            (20001, VendorErrorKind::InvalidParameters),
            (20002, VendorErrorKind::UnknownAccount),
            (20003, VendorErrorKind::BadCredential),
            (20004, VendorErrorKind::AccountLocked),
            (20005, VendorErrorKind::AccountExpired),
            (20006, VendorErrorKind::InvalidToken),
            (20007, VendorErrorKind::ExpiredToken),
            (20008, VendorErrorKind::TooManyAttempts),
            (20009, VendorErrorKind::ServiceMaintenance),
            (20010, VendorErrorKind::PermissionDenied),
            (20012, VendorErrorKind::NoData),
            (20400, VendorErrorKind::InvalidParameters),
            (20401, VendorErrorKind::BadCredential),
            (20403, VendorErrorKind::PermissionDenied),
            (20500, VendorErrorKind::ServiceMaintenance),
            (20503, VendorErrorKind::ServiceMaintenance),
            (305, VendorErrorKind::SessionExpired),
            (407, VendorErrorKind::RateLimited),
        ];

        for (code, expected) in table {
            assert_eq!(classify(code).0, expected, "code {code}");
        }
    }

    #[test]
    fn test_unknown_code_falls_back() {
        let failure = VendorFailure::from_code(99999);
        assert_eq!(failure.kind, VendorErrorKind::Unknown);
        assert_eq!(failure.code, 99999);
    }

    #[test]
    fn test_recovery_classes() {
        assert!(VendorErrorKind::SessionExpired.recovers_with_relogin());
        assert!(VendorErrorKind::RateLimited.recovers_with_backoff());
        assert!(!VendorErrorKind::BadCredential.is_recoverable());
        assert!(VendorErrorKind::PermissionDenied.denotes_unavailable_data());
        assert!(VendorErrorKind::NoData.denotes_unavailable_data());
        assert!(!VendorErrorKind::SessionExpired.denotes_unavailable_data());
    }

    #[test]
    fn test_failure_display() {
        let failure = VendorFailure::from_code(305);
        let rendered = failure.to_string();
        assert!(rendered.contains("session expired"));
        assert!(rendered.contains("305"));
    }
}
