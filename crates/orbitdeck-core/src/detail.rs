//! Detail-view lifecycle state machine.
//!
//! Every detail page owns one `DetailState` per mount. The state
//! starts at `Loading`, transitions exactly once, and then ignores any
//! further resolution. That single-transition guard is what makes a
//! stale response (a task resolving after the view moved on) harmless.

use crate::error::{ApiError, ErrorNotice};

/// Per-mount state of a detail view.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailState<T> {
    /// Query in flight; render a spinner and nothing else.
    #[default]
    Loading,
    /// Query succeeded; render from the document.
    Populated(T),
    /// Query failed; the error notice has been handed off and
    /// navigation away is in progress. Terminal.
    NavigatedAway,
}

impl<T> DetailState<T> {
    /// Whether the view is still waiting on its query.
    pub fn is_loading(&self) -> bool {
        matches!(self, DetailState::Loading)
    }

    /// Apply a query outcome.
    ///
    /// Only a `Loading` state reacts: success stores the document,
    /// failure moves to `NavigatedAway` and returns the notice to hand
    /// to the error surface. Any resolution against a settled state is
    /// a no-op returning `None`.
    pub fn resolve(&mut self, outcome: Result<T, ApiError>) -> Option<ErrorNotice> {
        if !self.is_loading() {
            return None;
        }
        match outcome {
            Ok(doc) => {
                *self = DetailState::Populated(doc);
                None
            }
            Err(err) => {
                let notice = err.notice();
                *self = DetailState::NavigatedAway;
                Some(notice)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_loading() {
        let state: DetailState<u32> = DetailState::default();
        assert!(state.is_loading());
    }

    #[test]
    fn success_populates_once() {
        let mut state: DetailState<u32> = DetailState::Loading;
        assert_eq!(state.resolve(Ok(7)), None);
        assert_eq!(state, DetailState::Populated(7));

        // A late duplicate resolution must not overwrite the document
        // or produce a navigation.
        assert_eq!(state.resolve(Ok(8)), None);
        assert_eq!(state, DetailState::Populated(7));
        assert_eq!(state.resolve(Err(ApiError::NotFound)), None);
        assert_eq!(state, DetailState::Populated(7));
    }

    #[test]
    fn missing_document_navigates_with_404() {
        let mut state: DetailState<u32> = DetailState::Loading;
        let notice = state.resolve(Err(ApiError::NotFound)).unwrap();
        assert_eq!(notice.code, 404);
        assert_eq!(notice.text, "Not Found");
        assert_eq!(state, DetailState::NavigatedAway);
    }

    #[test]
    fn server_status_is_forwarded_unchanged() {
        let mut state: DetailState<u32> = DetailState::Loading;
        let notice = state
            .resolve(Err(ApiError::Status {
                status: 502,
                text: "Bad Gateway".to_string(),
            }))
            .unwrap();
        assert_eq!(notice.code, 502);
        assert_eq!(notice.text, "Bad Gateway");
    }

    #[test]
    fn failure_after_navigation_is_ignored() {
        let mut state: DetailState<u32> = DetailState::Loading;
        state.resolve(Err(ApiError::NotFound));
        assert_eq!(
            state.resolve(Err(ApiError::Status {
                status: 500,
                text: "Internal Server Error".to_string(),
            })),
            None
        );
        assert_eq!(state, DetailState::NavigatedAway);
    }
}
