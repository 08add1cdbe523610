//! Backend location injected into the UI.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host renders the configured base URL into a `<meta>` tag in the SSR
//! shell. The hydrate entry point reads it back and passes a `ClientConfig`
//! into `App`, which provides it as context. Pages never read ambient
//! environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used by the fallback fetch when no backend is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";
/// Path of the backend's upload endpoint.
pub const UPLOAD_PATH: &str = "/api/upload";
/// `name` of the `<meta>` tag carrying the backend base URL.
pub const BACKEND_URL_META: &str = "analyzer-backend-url";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    backend_url: Option<String>,
}

impl ClientConfig {
    /// Build from a raw base URL. Blank values mean "not configured";
    /// surrounding whitespace and trailing slashes are dropped.
    pub fn new(backend_url: Option<&str>) -> Self {
        let backend_url = backend_url
            .map(|raw| raw.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .map(str::to_owned);
        Self { backend_url }
    }

    pub fn backend_url(&self) -> Option<&str> {
        self.backend_url.as_deref()
    }

    /// Upload target. `None` when no backend is configured.
    pub fn upload_endpoint(&self) -> Option<String> {
        self.backend_url.as_deref().map(endpoint)
    }

    /// Fallback-fetch target, substituting the local default backend.
    pub fn fallback_endpoint(&self) -> String {
        endpoint(self.backend_url.as_deref().unwrap_or(DEFAULT_BACKEND_URL))
    }

    /// Read the base URL from the `<meta>` tag rendered by the SSR shell.
    #[cfg(feature = "hydrate")]
    pub fn from_document() -> Self {
        let selector = format!("meta[name=\"{BACKEND_URL_META}\"]");
        let content = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.query_selector(&selector).ok().flatten())
            .and_then(|meta| meta.get_attribute("content"));
        Self::new(content.as_deref())
    }
}

fn endpoint(base: &str) -> String {
    format!("{base}{UPLOAD_PATH}")
}
