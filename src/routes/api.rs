use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;

use crate::client::ImageSearch;
use crate::domain::types::PageSize;
use crate::dto::api::ImagesQuery;
use crate::services::ServiceError;
use crate::services::api::list_images;

#[get("/v1/images")]
pub async fn api_v1_images(
    web::Query(params): web::Query<ImagesQuery>,
    client: web::Data<dyn ImageSearch>,
    per_page: web::Data<PageSize>,
) -> impl Responder {
    match list_images(client.get_ref(), params, *per_page.get_ref()).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(ServiceError::Form(message)) => {
            HttpResponse::BadRequest().json(json!({ "error": message }))
        }
        Err(ServiceError::Upstream(err)) => {
            log::error!("Failed to list images: {err}");
            HttpResponse::BadGateway().json(json!({ "error": "image search unavailable" }))
        }
    }
}
