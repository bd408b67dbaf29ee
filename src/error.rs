//! Error types
//!
//! Defines the errors that can occur while loading and rendering the dashboard.

use thiserror::Error;

/// Errors that can occur while fetching the grouped fatalities.
///
/// All variants are presented to the user the same way; the distinction only
/// shows up in the logs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Request never produced a response (connection refused, CORS, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-success status
    #[error("Server responded with {status} {status_text}")]
    Status { status: u16, status_text: String },

    /// Body was not a JSON array of records
    #[error("Parse error: {0}")]
    Decode(String),
}

impl FetchError {
    /// Text shown in the error region
    pub fn user_message(&self) -> String {
        format!("Error fetching fatalities data: {}", self)
    }
}

impl From<gloo_net::Error> for FetchError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => FetchError::Decode(e.to_string()),
            other => FetchError::Network(other.to_string()),
        }
    }
}

/// Errors raised by the chart renderer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    /// Canvas has no 2d rendering context
    #[error("Canvas 2d context unavailable")]
    ContextUnavailable,

    /// A drawing call was rejected by the browser
    #[error("Drawing failed: {0}")]
    Draw(String),
}

impl From<wasm_bindgen::JsValue> for ChartError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        ChartError::Draw(format!("{:?}", value))
    }
}

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid log level: {0}")]
    LogLevel(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_is_never_empty() {
        let errors = [
            FetchError::Network(String::new()),
            FetchError::Status {
                status: 500,
                status_text: "Internal Server Error".to_string(),
            },
            FetchError::Decode("expected a sequence".to_string()),
        ];

        for err in errors {
            let message = err.user_message();
            assert!(message.starts_with("Error fetching fatalities data"));
        }
    }

    #[test]
    fn test_status_message() {
        let err = FetchError::Status {
            status: 404,
            status_text: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "Server responded with 404 Not Found");
    }
}
