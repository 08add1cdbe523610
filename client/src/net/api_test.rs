use super::*;
use crate::net::types::RiskStatus;

#[test]
fn upload_field_is_files() {
    assert_eq!(UPLOAD_FIELD, "files");
}

#[test]
fn check_status_accepts_2xx_only() {
    assert_eq!(check_status(200), Ok(()));
    assert_eq!(check_status(204), Ok(()));
    assert_eq!(check_status(299), Ok(()));
    assert_eq!(check_status(199), Err(ApiError::Status(199)));
    assert_eq!(check_status(302), Err(ApiError::Status(302)));
    assert_eq!(check_status(500), Err(ApiError::Status(500)));
}

#[test]
fn decode_analysis_parses_backend_body() {
    let body = r#"{"files":[{"filename":"scan.png","size":1024}],"isLifeThreatening":true,"keyValuePairs":{"Red":["a"]}}"#;
    let response = decode_analysis(body).unwrap();
    assert_eq!(response.files.len(), 1);
    assert_eq!(response.risk, RiskStatus::LifeThreatening);
    assert_eq!(response.findings[0].category, "Red");
}

#[test]
fn decode_analysis_reports_malformed_body() {
    let err = decode_analysis("<html>502</html>").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_latest_analysis_is_unavailable_on_server() {
    let config = ClientConfig::default();
    let mut cx = std::task::Context::from_waker(std::task::Waker::noop());
    let mut fut = std::pin::pin!(fetch_latest_analysis(&config));
    let std::task::Poll::Ready(result) = fut.as_mut().poll(&mut cx) else {
        panic!("server stub should resolve immediately");
    };
    assert!(matches!(result, Err(ApiError::Network(_))));
}
