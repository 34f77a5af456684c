//! DTOs exposed by the gallery API endpoints.

use serde::{Deserialize, Serialize};

use crate::dto::gallery::GalleryCard;

/// Query parameters accepted by the `/api/v1/images` service.
#[derive(Debug, Default, Deserialize)]
pub struct ImagesQuery {
    /// Search string entered by the user.
    pub q: Option<String>,
    /// Optional page number, defaults to the first page.
    pub page: Option<u32>,
}

/// Result payload returned by [`crate::services::api::list_images`].
#[derive(Debug, Serialize)]
pub struct ImagesResponse {
    pub query: String,
    pub page: u32,
    /// Number of matches reachable through pagination.
    pub total_hits: u64,
    pub has_more: bool,
    pub hits: Vec<GalleryCard>,
}
