//! Upload form state: current selection, drag feedback, submit gate.
//!
//! Browse and drop both funnel into `select`, so the post-selection state is
//! identical regardless of how the file arrived. A new selection always
//! replaces the previous one; only one file is ever sent.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

/// `accept` filter for the file picker.
pub const ACCEPTED_FILE_TYPES: &str = ".pdf,.jpg,.jpeg,.png,.doc,.docx";

/// Display metadata of the chosen file. The browser `File` handle itself is
/// held by the landing page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
}

/// Visual state of the drop zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropZoneState {
    Idle,
    Dragging,
    Selected,
}

/// Why a submit attempt did not start a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitBlocked {
    #[error("Please upload a file.")]
    NoFile,
    #[error("an upload is already in flight")]
    InFlight,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadState {
    pub selected: Option<SelectedFile>,
    pub is_dragging: bool,
    pub submitting: bool,
}

impl UploadState {
    /// Replace the current selection (browse path).
    pub fn select(&mut self, file: SelectedFile) {
        self.selected = Some(file);
    }

    pub fn drag_over(&mut self) {
        self.is_dragging = true;
    }

    pub fn drag_leave(&mut self) {
        self.is_dragging = false;
    }

    /// Finish a drag. An empty drop keeps the current selection.
    pub fn drop_file(&mut self, file: Option<SelectedFile>) {
        self.is_dragging = false;
        if let Some(file) = file {
            self.select(file);
        }
    }

    pub fn can_submit(&self) -> bool {
        self.selected.is_some() && !self.submitting
    }

    pub fn drop_zone(&self) -> DropZoneState {
        if self.is_dragging {
            DropZoneState::Dragging
        } else if self.selected.is_some() {
            DropZoneState::Selected
        } else {
            DropZoneState::Idle
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.selected.is_some() { "Analyze Report" } else { "Upload a file to analyze" }
    }

    /// Gate a submit attempt. On success the form is marked in flight and the
    /// selection to upload is returned.
    ///
    /// # Errors
    ///
    /// `NoFile` when nothing is selected, `InFlight` while a previous upload
    /// has not finished.
    pub fn begin_submit(&mut self) -> Result<SelectedFile, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }
        let file = self.selected.clone().ok_or(SubmitBlocked::NoFile)?;
        self.submitting = true;
        Ok(file)
    }

    /// Clear the in-flight flag. The selection is kept so a failed upload can
    /// be resubmitted as-is.
    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }
}

impl DropZoneState {
    pub fn class(self) -> &'static str {
        match self {
            Self::Idle => "drop-zone",
            Self::Dragging => "drop-zone drop-zone--dragging",
            Self::Selected => "drop-zone drop-zone--selected",
        }
    }
}
