// Error types for scanlens
//
// Structured error taxonomy for the analytics core and the layers that feed it.
// Core errors are local and synchronous; the remaining variants belong to the
// caller side (HTTP client, configuration, file I/O).

use std::io;
use thiserror::Error;

/// Main error type for scanlens operations
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Fewer than two history points were supplied to the forecaster
    #[error("Insufficient data: {points} history point(s), at least 2 required")]
    InsufficientData { points: usize },

    /// A caller-supplied argument violates the operation's contract
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The independent variable has zero variance
    #[error("Degenerate regression: independent variable has zero variance")]
    DegenerateRegression,

    /// A scan record is missing data the comparison depends on
    #[error("Invalid scan record{}: {reason}", scan_label(.scan_id))]
    InvalidScanRecord { scan_id: Option<i64>, reason: String },

    /// The analytics service does not know the requested scan
    #[error("Scan {id} not found")]
    ScanNotFound { id: i64 },

    /// Non-success HTTP response from the analytics service
    #[error("HTTP error (status {status}): {details}")]
    Http { status: u16, details: String },

    /// Transport-level failure from the HTTP client
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Invalid or unreadable configuration
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// Generic I/O error
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// File system errors with the offending path
    #[error("File system error: {path}: {source}")]
    FileSystem {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

fn scan_label(scan_id: &Option<i64>) -> String {
    scan_id.map(|id| format!(" {}", id)).unwrap_or_default()
}

impl AnalyticsError {
    /// True for errors raised by the pure analytics core
    pub fn is_core_error(&self) -> bool {
        matches!(
            self,
            AnalyticsError::InsufficientData { .. }
                | AnalyticsError::InvalidArgument { .. }
                | AnalyticsError::DegenerateRegression
                | AnalyticsError::InvalidScanRecord { .. }
        )
    }

    /// Message the presentation layer shows instead of a chart or diff
    pub fn user_facing_state(&self) -> &'static str {
        match self {
            AnalyticsError::InsufficientData { .. } => "Need more data for prediction",
            AnalyticsError::DegenerateRegression => "Forecast unavailable for this history",
            AnalyticsError::InvalidScanRecord { .. } | AnalyticsError::ScanNotFound { .. } => {
                "Comparison data not available"
            }
            AnalyticsError::InvalidArgument { .. } | AnalyticsError::Config { .. } => {
                "Invalid request"
            }
            _ => "Analytics service unavailable",
        }
    }
}

impl From<toml::de::Error> for AnalyticsError {
    fn from(err: toml::de::Error) -> Self {
        AnalyticsError::Config {
            message: format!("Failed to parse config: {}", err),
        }
    }
}

impl From<anyhow::Error> for AnalyticsError {
    fn from(err: anyhow::Error) -> Self {
        AnalyticsError::Other(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_data_message() {
        let err = AnalyticsError::InsufficientData { points: 1 };
        let msg = err.to_string();
        assert!(msg.contains("1 history point"));
        assert!(msg.contains("at least 2"));
    }

    #[test]
    fn test_invalid_scan_record_with_and_without_id() {
        let with_id = AnalyticsError::InvalidScanRecord {
            scan_id: Some(42),
            reason: "missing scan_date".to_string(),
        };
        assert_eq!(with_id.to_string(), "Invalid scan record 42: missing scan_date");

        let without_id = AnalyticsError::InvalidScanRecord {
            scan_id: None,
            reason: "missing scan_date".to_string(),
        };
        assert_eq!(without_id.to_string(), "Invalid scan record: missing scan_date");
    }

    #[test]
    fn test_core_error_classification() {
        assert!(AnalyticsError::DegenerateRegression.is_core_error());
        assert!(AnalyticsError::InsufficientData { points: 0 }.is_core_error());
        assert!(!AnalyticsError::ScanNotFound { id: 7 }.is_core_error());
        assert!(!AnalyticsError::Other("boom".to_string()).is_core_error());
    }

    #[test]
    fn test_user_facing_states() {
        assert_eq!(
            AnalyticsError::InsufficientData { points: 1 }.user_facing_state(),
            "Need more data for prediction"
        );
        assert_eq!(
            AnalyticsError::InvalidScanRecord {
                scan_id: None,
                reason: String::new()
            }
            .user_facing_state(),
            "Comparison data not available"
        );
    }

    #[test]
    fn test_error_conversion_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: AnalyticsError = io_err.into();
        assert!(matches!(err, AnalyticsError::Io { .. }));
    }

    #[test]
    fn test_error_chain_preserved() {
        use std::error::Error;

        let err = AnalyticsError::FileSystem {
            path: "/tmp/scan.json".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.source().is_some());
    }
}
