//! Mock image client for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::client::ImageSearch;
use crate::client::errors::ClientResult;
use crate::domain::image::SearchPage;
use crate::domain::session::SearchSession;

mock! {
    pub ImageClient {}

    #[async_trait]
    impl ImageSearch for ImageClient {
        async fn search_images(&self, session: &SearchSession) -> ClientResult<SearchPage>;
    }
}
