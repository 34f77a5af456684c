//! Pixabay image search client.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::client::ImageSearch;
use crate::client::errors::{ClientError, ClientResult};
use crate::domain::image::{ImageHit, SearchPage};
use crate::domain::session::SearchSession;
use crate::domain::types::ImageUrl;

pub const PIXABAY_API_BASE: &str = "https://pixabay.com/api/";

/// Query string sent with every search request.
#[derive(Debug, Serialize)]
struct SearchParams<'a> {
    key: &'a str,
    q: &'a str,
    page: u32,
    per_page: u32,
    image_type: &'static str,
    orientation: &'static str,
    safesearch: bool,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(rename = "totalHits")]
    total_hits: u64,
    #[serde(default)]
    hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
struct Hit {
    #[serde(rename = "webformatURL")]
    webformat_url: String,
    #[serde(rename = "largeImageURL")]
    large_image_url: String,
    #[serde(default)]
    tags: String,
    #[serde(default)]
    likes: u64,
    #[serde(default)]
    views: u64,
    #[serde(default)]
    comments: u64,
    #[serde(default)]
    downloads: u64,
}

impl TryFrom<Hit> for ImageHit {
    type Error = ClientError;

    fn try_from(hit: Hit) -> Result<Self, Self::Error> {
        let preview_url = ImageUrl::new(hit.webformat_url)
            .map_err(|e| ClientError::Parse(format!("webformatURL: {e}")))?;
        let full_image_url = ImageUrl::new(hit.large_image_url)
            .map_err(|e| ClientError::Parse(format!("largeImageURL: {e}")))?;

        Ok(ImageHit {
            preview_url,
            full_image_url,
            tags: hit.tags.trim().to_string(),
            likes: hit.likes,
            views: hit.views,
            comments: hit.comments,
            downloads: hit.downloads,
        })
    }
}

/// Pixabay search client
///
/// Wraps a shared `reqwest::Client`, so clones are cheap and reuse the same
/// connection pool.
#[derive(Debug, Clone)]
pub struct PixabayClient {
    client: Arc<Client>,
    api_url: String,
    api_key: String,
}

impl PixabayClient {
    /// Create a client with a per-request timeout.
    pub fn new(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> ClientResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ClientError::Configuration(
                "Pixabay API key is not set".to_string(),
            ));
        }

        let client = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ClientError::Configuration(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self::from_client(Arc::new(client), api_url, api_key))
    }

    /// Create from an existing reqwest Client
    pub fn from_client(
        client: Arc<Client>,
        api_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl ImageSearch for PixabayClient {
    async fn search_images(&self, session: &SearchSession) -> ClientResult<SearchPage> {
        let params = SearchParams {
            key: &self.api_key,
            q: session.term.as_str(),
            page: session.page.get(),
            per_page: session.per_page.get(),
            image_type: "photo",
            orientation: "horizontal",
            safesearch: true,
        };

        log::debug!(
            "Searching Pixabay for {:?}, page {} ({} per page)",
            params.q,
            params.page,
            params.per_page
        );

        let response = self
            .client
            .get(&self.api_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| ClientError::Network(format!("Failed to search Pixabay: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: message.trim().to_string(),
            });
        }

        let data: SearchResponse = response
            .json()
            .await
            .map_err(|e| ClientError::Parse(format!("Failed to parse JSON: {e}")))?;

        let mut hits = Vec::with_capacity(data.hits.len());
        for hit in data.hits {
            match ImageHit::try_from(hit) {
                Ok(hit) => hits.push(hit),
                Err(e) => log::warn!("Skipping image hit: {e}"),
            }
        }

        Ok(SearchPage::new(hits, data.total_hits))
    }
}
