use super::*;

#[test]
fn status_errors_use_failed_upload_alert() {
    assert_eq!(ApiError::Status(500).alert_message(), "Failed to upload file.");
    assert_eq!(ApiError::Status(413).alert_message(), "Failed to upload file.");
}

#[test]
fn transport_and_decode_errors_use_generic_alert() {
    let expected = "An error occurred while uploading the file.";
    assert_eq!(ApiError::Network("offline".to_owned()).alert_message(), expected);
    assert_eq!(ApiError::Decode("eof".to_owned()).alert_message(), expected);
    assert_eq!(ApiError::MissingBackendUrl.alert_message(), expected);
}

#[test]
fn display_includes_status_code() {
    assert_eq!(ApiError::Status(502).to_string(), "backend responded with status 502");
}
