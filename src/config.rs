//! Host configuration parsed from environment variables.

use client::config::ClientConfig;

use crate::error::HostError;

pub const DEFAULT_PORT: u16 = 3000;
pub const PORT_VAR: &str = "PORT";
pub const BACKEND_URL_VAR: &str = "ANALYZER_BACKEND_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Analysis backend base URL handed to the UI, without trailing slash.
    pub backend_url: Option<String>,
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    /// - `ANALYZER_BACKEND_URL`: `http(s)://` base URL of the analysis backend
    pub fn from_env() -> Result<Self, HostError> {
        Self::from_vars(
            std::env::var(PORT_VAR).ok().as_deref(),
            std::env::var(BACKEND_URL_VAR).ok().as_deref(),
        )
    }

    /// Same as `from_env`, from explicit values.
    pub fn from_vars(port: Option<&str>, backend_url: Option<&str>) -> Result<Self, HostError> {
        Ok(Self { port: parse_port(port)?, backend_url: parse_backend_url(backend_url)? })
    }

    /// Config injected into the Leptos app.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.backend_url.as_deref())
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, HostError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(DEFAULT_PORT);
    };
    raw.parse::<u16>()
        .map_err(|e| HostError::Config { var: PORT_VAR, reason: format!("{raw:?}: {e}") })
}

fn parse_backend_url(raw: Option<&str>) -> Result<Option<String>, HostError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(HostError::Config {
            var: BACKEND_URL_VAR,
            reason: format!("{raw:?} must start with http:// or https://"),
        });
    }
    Ok(Some(raw.trim_end_matches('/').to_owned()))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
