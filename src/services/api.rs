use crate::client::ImageSearch;
use crate::domain::session::SearchSession;
use crate::domain::types::{PageNumber, PageSize, SearchTerm};
use crate::dto::api::{ImagesQuery, ImagesResponse};
use crate::dto::gallery::GalleryCard;
use crate::services::{ServiceError, ServiceResult};

/// Returns one page of images as plain data for API consumers.
pub async fn list_images<C>(
    client: &C,
    params: ImagesQuery,
    per_page: PageSize,
) -> ServiceResult<ImagesResponse>
where
    C: ImageSearch + ?Sized,
{
    let term = SearchTerm::new(params.q.unwrap_or_default())
        .map_err(|err| ServiceError::Form(format!("q: {err}")))?;
    let page = PageNumber::new(params.page.unwrap_or(1))
        .map_err(|err| ServiceError::Form(format!("page: {err}")))?;

    let session = SearchSession::at_page(term, page, per_page);
    let result = client.search_images(&session).await?;

    Ok(ImagesResponse {
        query: session.term.to_string(),
        page: session.page.get(),
        total_hits: result.total_hits,
        has_more: !session.is_exhausted(result.total_hits),
        hits: result.hits.iter().map(GalleryCard::from).collect(),
    })
}
