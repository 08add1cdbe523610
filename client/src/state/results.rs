//! Results-view data source and the one-shot navigation handoff.
//!
//! DESIGN
//! ======
//! The results page either receives the upload response from the landing
//! page or re-fetches it. `ResultsSource` makes each of those outcomes, plus
//! the never-resolving and failed fetches, an explicit value. Transitions are
//! one-way out of `Pending`.

#[cfg(test)]
#[path = "results_test.rs"]
mod results_test;

use crate::net::error::ApiError;
use crate::net::types::AnalysisResponse;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ResultsSource {
    /// No data yet; a fallback fetch may be in flight.
    #[default]
    Pending,
    /// Handed over by the landing page after a successful upload.
    FromNavigation(AnalysisResponse),
    /// Adopted from the fallback fetch.
    FromFetch(AnalysisResponse),
    /// Fallback fetch failed. Rendered like `Pending`; the error is kept for
    /// diagnostics only.
    Failed(ApiError),
}

impl ResultsSource {
    /// Initial source on mount.
    pub fn from_handoff(handoff: Option<AnalysisResponse>) -> Self {
        handoff.map_or(Self::Pending, Self::FromNavigation)
    }

    pub fn data(&self) -> Option<&AnalysisResponse> {
        match self {
            Self::FromNavigation(data) | Self::FromFetch(data) => Some(data),
            Self::Pending | Self::Failed(_) => None,
        }
    }

    /// Panels are only rendered once data exists.
    pub fn is_loading(&self) -> bool {
        self.data().is_none()
    }

    pub fn needs_fetch(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Apply a fallback-fetch outcome. Ignored unless still `Pending`.
    pub fn resolve(&mut self, outcome: Result<AnalysisResponse, ApiError>) {
        if !self.needs_fetch() {
            return;
        }
        *self = match outcome {
            Ok(data) => Self::FromFetch(data),
            Err(error) => Self::Failed(error),
        };
    }
}

/// In-memory payload carried across the landing → results transition.
///
/// Lives in app context, so it is gone after a reload, which is exactly when
/// the results page falls back to fetching.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavigationHandoff {
    pending: Option<AnalysisResponse>,
}

impl NavigationHandoff {
    pub fn put(&mut self, response: AnalysisResponse) {
        self.pending = Some(response);
    }

    /// Consume the payload; a second call returns `None`.
    pub fn take(&mut self) -> Option<AnalysisResponse> {
        self.pending.take()
    }
}
