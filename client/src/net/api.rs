//! HTTP calls to the analysis backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the fallback fetch is a stub returning an error, since
//! the backend is only ever contacted from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned as an `ApiError`; callers decide whether it
//! becomes a blocking alert (upload) or a log line (fallback fetch).

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::AnalysisResponse;
use crate::config::ClientConfig;

/// Multipart field name carrying the uploaded report.
pub const UPLOAD_FIELD: &str = "files";

/// Decode a response body into an `AnalysisResponse`.
///
/// # Errors
///
/// Returns `ApiError::Decode` when the body is not a JSON object of the
/// expected shape.
pub fn decode_analysis(body: &str) -> Result<AnalysisResponse, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Map an HTTP status onto success or `ApiError::Status`.
///
/// # Errors
///
/// Returns `ApiError::Status` for anything outside `200..=299`.
pub fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(ApiError::Status(status)) }
}

/// Upload one report via multipart `POST {backend}/api/upload`.
///
/// # Errors
///
/// Returns an error if no backend is configured, the request cannot be sent,
/// the backend answers with a non-OK status, or the body is not a valid
/// analysis response.
#[cfg(feature = "hydrate")]
pub async fn upload_report(config: &ClientConfig, file: &web_sys::File) -> Result<AnalysisResponse, ApiError> {
    let url = config.upload_endpoint().ok_or(ApiError::MissingBackendUrl)?;
    let form = web_sys::FormData::new().map_err(js_error)?;
    form.append_with_blob(UPLOAD_FIELD, file).map_err(js_error)?;

    let resp = gloo_net::http::Request::post(&url)
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check_status(resp.status())?;
    let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    decode_analysis(&body)
}

/// Re-fetch the latest analysis via `GET {backend}/api/upload`.
///
/// Used only when the results page is opened without navigation state. Falls
/// back to the local default backend when none is configured.
///
/// # Errors
///
/// Returns an error if the request fails, the status is not OK, or the body
/// does not decode.
pub async fn fetch_latest_analysis(config: &ClientConfig) -> Result<AnalysisResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.fallback_endpoint();
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(resp.status())?;
        let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        decode_analysis(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

#[cfg(feature = "hydrate")]
fn js_error(value: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Network(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}
