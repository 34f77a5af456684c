//! User-facing notifications produced by the gallery workflow.

use serde::Serialize;

/// Severity of a notice, mirrored by the toast shown in the browser.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Failure,
}

/// A transient message for the user.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn empty_query() -> Self {
        Self::new(NoticeLevel::Warning, "Please, enter your search request")
    }

    pub fn invalid_query(reason: impl std::fmt::Display) -> Self {
        Self::new(
            NoticeLevel::Warning,
            format!("Please, check your search request: {reason}"),
        )
    }

    pub fn no_results() -> Self {
        Self::new(
            NoticeLevel::Failure,
            "Sorry, there are no images matching your search query. Please try again.",
        )
    }

    pub fn found(total_hits: u64) -> Self {
        Self::new(
            NoticeLevel::Success,
            format!("Hooray! We found {total_hits} images."),
        )
    }

    pub fn end_of_results() -> Self {
        Self::new(
            NoticeLevel::Failure,
            "We're sorry, but you've reached the end of search results.",
        )
    }

    pub fn search_failed() -> Self {
        Self::new(
            NoticeLevel::Failure,
            "Image search is unavailable right now. Please try again later.",
        )
    }
}
