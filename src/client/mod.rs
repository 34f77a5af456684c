//! Upstream image search clients.

use async_trait::async_trait;

use crate::client::errors::ClientResult;
use crate::domain::image::SearchPage;
use crate::domain::session::SearchSession;

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod pixabay;

pub use pixabay::PixabayClient;

/// Fetches one page of image hits for a search session.
///
/// Implementations issue exactly one upstream request per call and never
/// retry. Callers decide what to show when the request fails.
#[async_trait]
pub trait ImageSearch: Send + Sync {
    async fn search_images(&self, session: &SearchSession) -> ClientResult<SearchPage>;
}
