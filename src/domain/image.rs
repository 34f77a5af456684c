use serde::Serialize;

use crate::domain::types::ImageUrl;

/// One image record returned by the search API.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ImageHit {
    /// Medium sized image shown inside the gallery card.
    pub preview_url: ImageUrl,
    /// Large image opened by the lightbox.
    pub full_image_url: ImageUrl,
    /// Comma separated tags, used as the caption.
    pub tags: String,
    pub likes: u64,
    pub views: u64,
    pub comments: u64,
    pub downloads: u64,
}

/// A single page of hits together with the number of reachable matches.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct SearchPage {
    pub hits: Vec<ImageHit>,
    pub total_hits: u64,
}

impl SearchPage {
    #[must_use]
    pub fn new(hits: Vec<ImageHit>, total_hits: u64) -> Self {
        Self { hits, total_hits }
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}
