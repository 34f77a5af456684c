#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use pushkind_gallery::client::ImageSearch;
use pushkind_gallery::client::errors::{ClientError, ClientResult};
use pushkind_gallery::domain::image::{ImageHit, SearchPage};
use pushkind_gallery::domain::session::SearchSession;
use pushkind_gallery::domain::types::ImageUrl;

/// Serves `total_hits` numbered images, paged like the real API.
pub struct FakeImageSearch {
    total_hits: u64,
    sessions: Mutex<Vec<SearchSession>>,
}

impl FakeImageSearch {
    pub fn new(total_hits: u64) -> Self {
        Self {
            total_hits,
            sessions: Mutex::new(Vec::new()),
        }
    }

    /// Sessions received so far, in call order.
    pub fn sessions(&self) -> Vec<SearchSession> {
        self.sessions.lock().unwrap().clone()
    }
}

pub fn hit(n: u64) -> ImageHit {
    ImageHit {
        preview_url: ImageUrl::new(format!("https://cdn.example.com/{n}_640.jpg")).unwrap(),
        full_image_url: ImageUrl::new(format!("https://cdn.example.com/{n}_1280.jpg")).unwrap(),
        tags: format!("tag{n}"),
        likes: n,
        views: n + 1,
        comments: n + 2,
        downloads: n + 3,
    }
}

#[async_trait]
impl ImageSearch for FakeImageSearch {
    async fn search_images(&self, session: &SearchSession) -> ClientResult<SearchPage> {
        self.sessions.lock().unwrap().push(session.clone());

        let per_page = u64::from(session.per_page.get());
        let start = (u64::from(session.page.get()) - 1) * per_page;
        let end = (start + per_page).min(self.total_hits);
        let hits = (start..end.max(start)).map(hit).collect();

        Ok(SearchPage::new(hits, self.total_hits))
    }
}

/// Fails every request as if the API were unreachable.
#[derive(Default)]
pub struct UnreachableImageSearch;

#[async_trait]
impl ImageSearch for UnreachableImageSearch {
    async fn search_images(&self, _session: &SearchSession) -> ClientResult<SearchPage> {
        Err(ClientError::Network("connection refused".to_string()))
    }
}
