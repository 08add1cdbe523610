use super::*;

#[test]
fn from_vars_defaults() {
    let cfg = ServerConfig::from_vars(None, None).unwrap();
    assert_eq!(cfg, ServerConfig { port: DEFAULT_PORT, backend_url: None });
}

#[test]
fn from_vars_parses_overrides() {
    let cfg = ServerConfig::from_vars(Some("8081"), Some("https://analyzer.example.com/")).unwrap();
    assert_eq!(cfg.port, 8081);
    assert_eq!(cfg.backend_url.as_deref(), Some("https://analyzer.example.com"));
}

#[test]
fn from_vars_blank_values_fall_back() {
    let cfg = ServerConfig::from_vars(Some("  "), Some("")).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, None);
}

#[test]
fn from_vars_invalid_port_errors() {
    let err = ServerConfig::from_vars(Some("eighty"), None).unwrap_err().to_string();
    assert!(err.contains("invalid PORT"), "{err}");

    let err = ServerConfig::from_vars(Some("70000"), None).unwrap_err().to_string();
    assert!(err.contains("invalid PORT"), "{err}");
}

#[test]
fn from_vars_backend_url_requires_http_scheme() {
    let err = ServerConfig::from_vars(None, Some("analyzer.local:8080")).unwrap_err().to_string();
    assert!(err.contains("invalid ANALYZER_BACKEND_URL"), "{err}");
}

#[test]
fn client_config_carries_backend_url() {
    let cfg = ServerConfig::from_vars(None, Some("http://127.0.0.1:8080")).unwrap();
    assert_eq!(
        cfg.client_config().upload_endpoint().as_deref(),
        Some("http://127.0.0.1:8080/api/upload")
    );
}

#[test]
fn client_config_without_backend_uses_fallback_default() {
    let cfg = ServerConfig::from_vars(None, None).unwrap();
    let client = cfg.client_config();
    assert_eq!(client.upload_endpoint(), None);
    assert_eq!(client.fallback_endpoint(), "http://localhost:8080/api/upload");
}
