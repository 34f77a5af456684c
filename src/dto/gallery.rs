//! DTOs shaped for the gallery templates and the load-more payload.

use serde::Serialize;

use crate::domain::image::ImageHit;
use crate::domain::notice::Notice;
use crate::domain::session::SearchSession;

/// One card of the gallery grid.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GalleryCard {
    pub preview_url: String,
    pub full_image_url: String,
    pub tags: String,
    pub likes: u64,
    pub views: u64,
    pub comments: u64,
    pub downloads: u64,
}

impl From<&ImageHit> for GalleryCard {
    fn from(hit: &ImageHit) -> Self {
        Self {
            preview_url: hit.preview_url.as_str().to_string(),
            full_image_url: hit.full_image_url.as_str().to_string(),
            tags: hit.tags.clone(),
            likes: hit.likes,
            views: hit.views,
            comments: hit.comments,
            downloads: hit.downloads,
        }
    }
}

/// Results shown while the gallery is in the listing state.
#[derive(Debug)]
pub struct Listing {
    /// Session that produced `cards`.
    pub session: SearchSession,
    pub cards: Vec<GalleryCard>,
    pub total_hits: u64,
    /// Whether the load-more control stays visible.
    pub has_more: bool,
}

impl Listing {
    /// Page the load-more button should request next.
    pub fn next_page(&self) -> Option<u32> {
        self.has_more.then(|| self.session.page.next().get())
    }
}

/// Controller state after a search submission.
#[derive(Debug)]
pub enum GalleryView {
    /// Nothing shown, load-more hidden.
    Idle,
    Listing(Listing),
}

/// Result of submitting the search bar.
#[derive(Debug)]
pub struct SearchOutcome {
    pub view: GalleryView,
    pub notice: Notice,
}

impl SearchOutcome {
    pub fn idle(notice: Notice) -> Self {
        Self {
            view: GalleryView::Idle,
            notice,
        }
    }
}

/// Result of a load-more request.
#[derive(Debug)]
pub struct LoadMoreOutcome {
    pub session: SearchSession,
    pub cards: Vec<GalleryCard>,
    pub has_more: bool,
    /// Whether the browser should clear the search form.
    pub reset_form: bool,
    pub notice: Option<Notice>,
}

impl LoadMoreOutcome {
    pub fn next_page(&self) -> Option<u32> {
        self.has_more.then(|| self.session.page.next().get())
    }
}

/// JSON payload answered to the load-more button.
#[derive(Debug, Serialize)]
pub struct LoadMoreResponse {
    /// Query the fragment belongs to; the browser drops stale answers.
    pub query: String,
    pub page: u32,
    /// Rendered cards to append to the gallery container.
    pub html: String,
    pub has_more: bool,
    pub next_page: Option<u32>,
    pub reset_form: bool,
    pub notice: Option<Notice>,
}

/// JSON body answered when a request could not be served.
#[derive(Debug, Serialize)]
pub struct NoticeResponse {
    pub notice: Notice,
}
