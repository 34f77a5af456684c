use actix_web::{HttpResponse, Responder, get, web};
use tera::Tera;

use crate::client::ImageSearch;
use crate::domain::notice::Notice;
use crate::domain::types::PageSize;
use crate::dto::gallery::{LoadMoreResponse, NoticeResponse};
use crate::forms::search::LoadMoreForm;
use crate::render::render_cards;
use crate::services::ServiceError;
use crate::services::gallery::load_more;

#[get("/gallery/more")]
pub async fn load_more_images(
    web::Query(form): web::Query<LoadMoreForm>,
    client: web::Data<dyn ImageSearch>,
    per_page: web::Data<PageSize>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let outcome = match load_more(client.get_ref(), form, *per_page.get_ref()).await {
        Ok(outcome) => outcome,
        Err(ServiceError::Form(message)) => {
            return HttpResponse::BadRequest().json(NoticeResponse {
                notice: Notice::invalid_query(message),
            });
        }
        Err(ServiceError::Upstream(err)) => {
            log::error!("Failed to load more images: {err}");
            return HttpResponse::BadGateway().json(NoticeResponse {
                notice: Notice::search_failed(),
            });
        }
    };

    let html = match render_cards(&tera, &outcome.cards) {
        Ok(html) => html,
        Err(e) => {
            log::error!("Failed to render gallery cards: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let next_page = outcome.next_page();
    HttpResponse::Ok().json(LoadMoreResponse {
        query: outcome.session.term.into_inner(),
        page: outcome.session.page.get(),
        html,
        has_more: outcome.has_more,
        next_page,
        reset_form: outcome.reset_form,
        notice: outcome.notice,
    })
}
