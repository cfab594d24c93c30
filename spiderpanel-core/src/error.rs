//! Error types for the Spider Panel core library.
//!
//! # Error Codes Reference
//!
//! | Code Range | Category | Description |
//! |------------|----------|-------------|
//! | E1001-E1099 | Config | Environment, config file, and validation errors |
//! | E2001-E2099 | Api | Endpoint request, decode, and availability errors |
//! | E3001-E3099 | Control | Rejected or aborted control submissions |
//! | E4001-E4099 | General | Internal, IO, serialization errors |

use std::fmt;
use thiserror::Error;
use tracing::{error, warn};

/// The main error type for the Spider Panel core library.
#[derive(Debug, Error)]
pub enum PanelError {
    // ========================================================================
    // Configuration Errors (E1001-E1099)
    // ========================================================================
    /// Configuration file parse error
    #[error("[E1001] Failed to parse configuration: {0}")]
    ConfigParseError(String),

    /// Invalid configuration value
    #[error("[E1002] Invalid configuration value for '{key}': {message}")]
    InvalidConfigValue { key: String, message: String },

    /// Server URL is not a valid base URL
    #[error("[E1003] Invalid server URL: {0}")]
    InvalidServerUrl(String),

    // ========================================================================
    // Api Errors (E2001-E2099)
    // ========================================================================
    /// Endpoint request failed
    #[error("[E2001] Request to {endpoint} failed: {message}")]
    RequestFailed { endpoint: String, message: String },

    /// Response body did not match the expected shape
    #[error("[E2002] Failed to decode response from {endpoint}: {message}")]
    DecodeFailed { endpoint: String, message: String },

    /// Spider server unreachable
    #[error("[E2003] Spider server unavailable: {0}")]
    ServerUnavailable(String),

    /// Request timed out
    #[error("[E2004] Request timed out after {0} seconds")]
    Timeout(u64),

    // ========================================================================
    // Control Errors (E3001-E3099)
    // ========================================================================
    /// The server accepted the request but reported a failure
    #[error("[E3001] Control request rejected: {message}")]
    ControlRejected {
        message: String,
        traceback: Option<String>,
    },

    /// A reservation identifier was not a valid UUID
    #[error("[E3002] Invalid reservation UUID: {0}")]
    InvalidReservationId(String),

    /// The operator declined the shutdown confirmation
    #[error("[E3003] Shutdown aborted by operator")]
    ShutdownAborted,

    // ========================================================================
    // General Errors (E4001-E4099)
    // ========================================================================
    /// Internal error (catch-all for unexpected conditions)
    #[error("[E4001] Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("[E4002] IO error: {0}")]
    IoError(String),

    /// Serialization/deserialization error
    #[error("[E4003] Serialization error: {0}")]
    SerializationError(String),
}

/// Result type alias for Spider Panel operations.
pub type PanelResult<T> = Result<T, PanelError>;

// ============================================================================
// From trait implementations for seamless error propagation
// ============================================================================

impl From<reqwest::Error> for PanelError {
    fn from(err: reqwest::Error) -> Self {
        let endpoint = err
            .url()
            .map(|u| u.path().to_string())
            .unwrap_or_else(|| "(unknown)".to_string());
        if err.is_timeout() {
            PanelError::Timeout(5)
        } else if err.is_connect() {
            PanelError::ServerUnavailable(err.to_string())
        } else if err.is_decode() {
            PanelError::DecodeFailed {
                endpoint,
                message: err.to_string(),
            }
        } else {
            PanelError::RequestFailed {
                endpoint,
                message: err.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for PanelError {
    fn from(err: serde_json::Error) -> Self {
        PanelError::SerializationError(err.to_string())
    }
}

impl From<std::io::Error> for PanelError {
    fn from(err: std::io::Error) -> Self {
        PanelError::IoError(err.to_string())
    }
}

impl From<config::ConfigError> for PanelError {
    fn from(err: config::ConfigError) -> Self {
        match err {
            config::ConfigError::NotFound(key) => PanelError::InvalidConfigValue {
                key,
                message: "Key not found".to_string(),
            },
            other => PanelError::ConfigParseError(other.to_string()),
        }
    }
}

// ============================================================================
// Error categorization helpers
// ============================================================================

impl PanelError {
    /// Returns true if this error is related to configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            PanelError::ConfigParseError(_)
                | PanelError::InvalidConfigValue { .. }
                | PanelError::InvalidServerUrl(_)
        )
    }

    /// Returns true if this error is transient and the operation might
    /// succeed on a later poll.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            PanelError::ServerUnavailable(_) | PanelError::Timeout(_)
        )
    }

    /// Returns an error code suitable for logging or external reporting.
    pub fn error_code(&self) -> &'static str {
        match self {
            PanelError::ConfigParseError(_) => "E1001",
            PanelError::InvalidConfigValue { .. } => "E1002",
            PanelError::InvalidServerUrl(_) => "E1003",
            PanelError::RequestFailed { .. } => "E2001",
            PanelError::DecodeFailed { .. } => "E2002",
            PanelError::ServerUnavailable(_) => "E2003",
            PanelError::Timeout(_) => "E2004",
            PanelError::ControlRejected { .. } => "E3001",
            PanelError::InvalidReservationId(_) => "E3002",
            PanelError::ShutdownAborted => "E3003",
            PanelError::Internal(_) => "E4001",
            PanelError::IoError(_) => "E4002",
            PanelError::SerializationError(_) => "E4003",
        }
    }

    /// Returns a user-friendly suggestion for how to resolve this error.
    pub fn user_suggestion(&self) -> Option<&'static str> {
        match self {
            PanelError::ServerUnavailable(_) => {
                Some("Check that the spider server is running and SPIDER_URL points at it")
            }
            PanelError::Timeout(_) => {
                Some("The server is busy. Try again in a few seconds")
            }
            PanelError::InvalidServerUrl(_) => {
                Some("Pass a full base URL, e.g. http://localhost:5000")
            }
            PanelError::InvalidReservationId(_) => {
                Some("Reservation identifiers are UUIDs, e.g. ad9c9b38-d588-4658-8a4f-8960cad20aa9")
            }
            PanelError::ControlRejected { .. } => {
                Some("Check the server log for the full traceback")
            }
            _ => None,
        }
    }

    /// Log this error with appropriate severity level.
    pub fn log(&self) {
        let code = self.error_code();
        if self.is_transient() {
            warn!(error_code = %code, "Transient error occurred: {}", self);
        } else {
            error!(error_code = %code, "Error occurred: {}", self);
        }
    }
}

// ============================================================================
// User-friendly error formatting for CLI
// ============================================================================

/// Format an error for CLI display with suggestions.
pub struct CliErrorDisplay<'a> {
    error: &'a PanelError,
    show_suggestion: bool,
}

impl<'a> CliErrorDisplay<'a> {
    pub fn new(error: &'a PanelError) -> Self {
        Self {
            error,
            show_suggestion: true,
        }
    }

    pub fn without_suggestion(mut self) -> Self {
        self.show_suggestion = false;
        self
    }
}

impl<'a> fmt::Display for CliErrorDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.error)?;

        if self.show_suggestion {
            if let Some(suggestion) = self.error.user_suggestion() {
                writeln!(f)?;
                writeln!(f, "  Suggestion: {}", suggestion)?;
            }
        }

        if self.error.is_transient() {
            writeln!(f)?;
            writeln!(f, "  This error may be temporary. Try again shortly.")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PanelError::RequestFailed {
            endpoint: "/control/pause".to_string(),
            message: "connection reset".to_string(),
        };
        assert!(err.to_string().contains("E2001"));
        assert!(err.to_string().contains("/control/pause"));
    }

    #[test]
    fn test_error_categorization() {
        let config_err = PanelError::InvalidServerUrl("nope".to_string());
        assert!(config_err.is_config_error());
        assert!(!config_err.is_transient());

        let api_err = PanelError::ServerUnavailable("refused".to_string());
        assert!(!api_err.is_config_error());
        assert!(api_err.is_transient());
    }

    #[test]
    fn test_is_transient() {
        assert!(PanelError::Timeout(5).is_transient());
        assert!(PanelError::ServerUnavailable("503".to_string()).is_transient());

        assert!(!PanelError::ShutdownAborted.is_transient());
        assert!(!PanelError::ControlRejected {
            message: "bad uuid".to_string(),
            traceback: None,
        }
        .is_transient());
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            PanelError::ConfigParseError("err".to_string()).error_code(),
            "E1001"
        );
        assert_eq!(PanelError::Timeout(5).error_code(), "E2004");
        assert_eq!(PanelError::ShutdownAborted.error_code(), "E3003");
        assert_eq!(
            PanelError::Internal("err".to_string()).error_code(),
            "E4001"
        );
    }

    #[test]
    fn test_user_suggestions() {
        assert!(PanelError::ServerUnavailable("refused".to_string())
            .user_suggestion()
            .is_some());
        assert!(PanelError::InvalidReservationId("zzz".to_string())
            .user_suggestion()
            .is_some());
        assert!(PanelError::Internal("err".to_string())
            .user_suggestion()
            .is_none());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let panel_err: PanelError = io_err.into();
        assert!(matches!(panel_err, PanelError::IoError(_)));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_result: Result<serde_json::Value, _> = serde_json::from_str("invalid json");
        let panel_err: PanelError = json_result.unwrap_err().into();
        assert!(matches!(panel_err, PanelError::SerializationError(_)));
    }

    #[test]
    fn test_cli_error_display() {
        let err = PanelError::ServerUnavailable("connection refused".to_string());
        let output = CliErrorDisplay::new(&err).to_string();

        assert!(output.contains("connection refused"));
        assert!(output.contains("Suggestion"));
        assert!(output.contains("temporary"));
    }
}
