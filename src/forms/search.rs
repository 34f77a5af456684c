//! Forms submitted by the search bar and the load-more button.

use serde::Deserialize;
use validator::Validate;

use crate::domain::session::SearchSession;
use crate::domain::types::{PageNumber, PageSize, SearchTerm, TypeConstraintError};
use crate::forms::FormError;

/// Search bar submission. The field name matches the `searchQuery` input.
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(rename = "searchQuery", default)]
    pub search_query: String,
}

impl SearchForm {
    /// Builds the first-page session for this query.
    pub fn into_session(self, per_page: PageSize) -> Result<SearchSession, TypeConstraintError> {
        let term = SearchTerm::new(self.search_query)?;
        Ok(SearchSession::start(term, per_page))
    }
}

/// Session carried back by the load-more button.
#[derive(Debug, Deserialize, Validate)]
pub struct LoadMoreForm {
    #[validate(length(min = 1))]
    pub q: String,
    #[validate(range(min = 1))]
    pub page: u32,
}

impl LoadMoreForm {
    /// Validates the payload and rebuilds the session it describes.
    pub fn into_session(self, per_page: PageSize) -> Result<SearchSession, FormError> {
        self.validate()?;
        let term = SearchTerm::new(self.q).map_err(FormError::InvalidQuery)?;
        let page = PageNumber::new(self.page).map_err(FormError::InvalidPage)?;
        Ok(SearchSession::at_page(term, page, per_page))
    }
}
