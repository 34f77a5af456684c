use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::client::ImageSearch;
use crate::domain::notice::{Notice, NoticeLevel};
use crate::domain::types::PageSize;
use crate::dto::gallery::{GalleryView, SearchOutcome};
use crate::forms::search::SearchForm;
use crate::routes::{base_context, flash_notice, redirect, render_template};
use crate::services::gallery::start_search;

#[get("/")]
pub async fn show_index(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(&flash_messages, &[], "index");
    context.insert("has_more", &false);

    render_template(&tera, "main/index.html", &context)
}

#[get("/search")]
pub async fn search(
    web::Query(form): web::Query<SearchForm>,
    flash_messages: IncomingFlashMessages,
    client: web::Data<dyn ImageSearch>,
    per_page: web::Data<PageSize>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let outcome = match start_search(client.get_ref(), form, *per_page.get_ref()).await {
        Ok(outcome) => outcome,
        Err(err) => {
            log::error!("Image search failed: {err}");
            SearchOutcome::idle(Notice::search_failed())
        }
    };

    let SearchOutcome { view, notice } = outcome;

    // Rejected input never reached the image API; back to the empty form.
    if matches!(view, GalleryView::Idle) && notice.level == NoticeLevel::Warning {
        flash_notice(&notice);
        return redirect("/");
    }

    let mut context = base_context(&flash_messages, std::slice::from_ref(&notice), "index");
    match view {
        GalleryView::Idle => {
            context.insert("has_more", &false);
        }
        GalleryView::Listing(listing) => {
            context.insert("search_query", listing.session.term.as_str());
            context.insert("cards", &listing.cards);
            context.insert("total_hits", &listing.total_hits);
            context.insert("has_more", &listing.has_more);
            if let Some(next_page) = listing.next_page() {
                context.insert("next_page", &next_page);
            }
        }
    }

    render_template(&tera, "main/index.html", &context)
}
