use super::*;
use crate::net::types::AnalysisResponse;

#[test]
fn format_kib_rounds_to_two_decimals() {
    assert_eq!(format_kib(0.0), "0.00");
    assert_eq!(format_kib(1024.0), "1.00");
    assert_eq!(format_kib(1536.0), "1.50");
    assert_eq!(format_kib(12_650.0), "12.35");
    assert_eq!(format_kib(100.0), "0.10");
}

#[test]
fn format_kib_does_not_switch_units() {
    assert_eq!(format_kib(5.0 * 1024.0 * 1024.0), "5120.00");
}

#[test]
fn format_kib_fractional_bytes_keep_two_decimals() {
    assert_eq!(format_kib(1536.7), "1.50");
    assert_eq!(format_kib(2560.5), "2.50");
}

#[test]
fn file_size_label_wraps_in_parentheses() {
    assert_eq!(file_size_label(Some(2048.0)), "(2.00 KB)");
}

#[test]
fn file_size_label_missing_size_has_fallback() {
    assert_eq!(file_size_label(None), "(size unknown)");
}

#[test]
fn decoded_fractional_size_renders_two_decimals() {
    let body = r#"{"files":[{"filename":"scan.pdf","size":1536.7}],"isLifeThreatening":true}"#;
    let response: AnalysisResponse = serde_json::from_str(body).unwrap();
    assert_eq!(file_size_label(response.files[0].size), "(1.50 KB)");
}
