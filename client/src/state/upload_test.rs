use super::*;

fn report() -> SelectedFile {
    SelectedFile { name: "bloodwork.pdf".to_owned(), size: 48_213 }
}

// =============================================================
// Selection
// =============================================================

#[test]
fn default_state_has_no_selection_and_cannot_submit() {
    let state = UploadState::default();
    assert_eq!(state.selected, None);
    assert!(!state.is_dragging);
    assert!(!state.can_submit());
    assert_eq!(state.drop_zone(), DropZoneState::Idle);
    assert_eq!(state.submit_label(), "Upload a file to analyze");
}

#[test]
fn browse_and_drop_reach_the_same_state() {
    let mut browsed = UploadState::default();
    browsed.select(report());

    let mut dropped = UploadState::default();
    dropped.drag_over();
    dropped.drop_file(Some(report()));

    assert_eq!(browsed, dropped);
    assert!(dropped.can_submit());
    assert_eq!(dropped.drop_zone(), DropZoneState::Selected);
    assert_eq!(dropped.submit_label(), "Analyze Report");
}

#[test]
fn new_selection_replaces_previous() {
    let mut state = UploadState::default();
    state.select(report());
    state.drop_file(Some(SelectedFile { name: "xray.png".to_owned(), size: 10 }));
    assert_eq!(state.selected.map(|f| f.name), Some("xray.png".to_owned()));
}

#[test]
fn empty_drop_keeps_selection_and_clears_drag() {
    let mut state = UploadState::default();
    state.select(report());
    state.drag_over();
    state.drop_file(None);
    assert!(!state.is_dragging);
    assert_eq!(state.selected, Some(report()));
}

// =============================================================
// Drag feedback
// =============================================================

#[test]
fn dragging_takes_precedence_over_selected() {
    let mut state = UploadState::default();
    state.select(report());
    state.drag_over();
    assert_eq!(state.drop_zone(), DropZoneState::Dragging);
    state.drag_leave();
    assert_eq!(state.drop_zone(), DropZoneState::Selected);
}

#[test]
fn drop_zone_classes_are_distinct() {
    assert_eq!(DropZoneState::Idle.class(), "drop-zone");
    assert_ne!(DropZoneState::Dragging.class(), DropZoneState::Selected.class());
}

// =============================================================
// Submit gate
// =============================================================

#[test]
fn submit_without_file_is_blocked_with_prompt() {
    let mut state = UploadState::default();
    assert_eq!(state.begin_submit(), Err(SubmitBlocked::NoFile));
    assert_eq!(SubmitBlocked::NoFile.to_string(), "Please upload a file.");
    assert!(!state.submitting);
}

#[test]
fn submit_with_file_marks_in_flight() {
    let mut state = UploadState::default();
    state.select(report());
    assert_eq!(state.begin_submit(), Ok(report()));
    assert!(state.submitting);
    assert!(!state.can_submit());
}

#[test]
fn second_submit_while_in_flight_is_blocked() {
    let mut state = UploadState::default();
    state.select(report());
    state.begin_submit().unwrap();
    assert_eq!(state.begin_submit(), Err(SubmitBlocked::InFlight));
}

#[test]
fn finish_submit_keeps_selection_for_retry() {
    let mut state = UploadState::default();
    state.select(report());
    state.begin_submit().unwrap();
    state.finish_submit();
    assert_eq!(state.selected, Some(report()));
    assert!(state.can_submit());
}

#[test]
fn accepted_file_types_cover_documents_and_images() {
    for ext in [".pdf", ".jpg", ".jpeg", ".png", ".doc", ".docx"] {
        assert!(ACCEPTED_FILE_TYPES.split(',').any(|t| t == ext), "missing {ext}");
    }
}
