//! Pagination state for a single search.

use serde::Serialize;

use crate::domain::types::{PageNumber, PageSize, SearchTerm};

/// Immutable search parameters sent with every fetch.
///
/// A session never changes in place: [`SearchSession::next`] returns the
/// session for the following page, so a response can always be matched to the
/// exact parameters that produced it.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct SearchSession {
    pub term: SearchTerm,
    pub page: PageNumber,
    pub per_page: PageSize,
}

impl SearchSession {
    /// Starts a new search at the first page.
    #[must_use]
    pub fn start(term: SearchTerm, per_page: PageSize) -> Self {
        Self::at_page(term, PageNumber::FIRST, per_page)
    }

    /// Resumes a search at an arbitrary page.
    #[must_use]
    pub fn at_page(term: SearchTerm, page: PageNumber, per_page: PageSize) -> Self {
        Self {
            term,
            page,
            per_page,
        }
    }

    /// Session for the page following this one.
    #[must_use]
    pub fn next(&self) -> Self {
        Self {
            term: self.term.clone(),
            page: self.page.next(),
            per_page: self.per_page,
        }
    }

    /// Number of hits covered by this page and every page before it.
    pub fn fetched(&self) -> u64 {
        u64::from(self.page.get()) * u64::from(self.per_page.get())
    }

    /// Whether no page after this one can return new hits.
    pub fn is_exhausted(&self, total_hits: u64) -> bool {
        self.fetched() >= total_hits
    }
}
