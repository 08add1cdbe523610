//! Failure classes for backend calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Alert shown when the backend answers with a non-OK status.
pub const UPLOAD_FAILED_ALERT: &str = "Failed to upload file.";
/// Alert shown for transport, decode, and configuration failures.
pub const UPLOAD_ERROR_ALERT: &str = "An error occurred while uploading the file.";

/// Errors from the upload and fallback-fetch calls.
///
/// Payloads are rendered strings because the underlying `gloo-net` and
/// `JsValue` errors only exist in the browser build.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("backend URL is not configured")]
    MissingBackendUrl,
    #[error("request failed: {0}")]
    Network(String),
    #[error("backend responded with status {0}")]
    Status(u16),
    #[error("invalid analysis response: {0}")]
    Decode(String),
}

impl ApiError {
    /// User-facing copy for the blocking upload alert.
    pub fn alert_message(&self) -> &'static str {
        match self {
            Self::Status(_) => UPLOAD_FAILED_ALERT,
            Self::MissingBackendUrl | Self::Network(_) | Self::Decode(_) => UPLOAD_ERROR_ALERT,
        }
    }
}
