//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::client::pixabay::PIXABAY_API_BASE;
use crate::domain::types::{DEFAULT_PAGE_SIZE, PageSize, TypeConstraintError};

fn default_pixabay_url() -> String {
    PIXABAY_API_BASE.to_string()
}

fn default_per_page() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_request_timeout_secs() -> u64 {
    30
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    /// Signing key for flash message cookies, at least 64 bytes.
    pub secret: String,
    #[serde(default = "default_pixabay_url")]
    pub pixabay_url: String,
    pub pixabay_key: String,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Number of hits requested per page, checked against the API limits.
    pub fn page_size(&self) -> Result<PageSize, TypeConstraintError> {
        PageSize::new(self.per_page)
    }
}
