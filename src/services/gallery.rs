use crate::client::ImageSearch;
use crate::domain::notice::Notice;
use crate::domain::types::{PageSize, TypeConstraintError};
use crate::dto::gallery::{GalleryCard, GalleryView, Listing, LoadMoreOutcome, SearchOutcome};
use crate::forms::search::{LoadMoreForm, SearchForm};
use crate::services::ServiceResult;

/// Handles a search bar submission.
///
/// Invalid queries never reach the image API. An upstream failure is returned
/// as an error so the caller decides how to surface it.
pub async fn start_search<C>(
    client: &C,
    form: SearchForm,
    per_page: PageSize,
) -> ServiceResult<SearchOutcome>
where
    C: ImageSearch + ?Sized,
{
    let session = match form.into_session(per_page) {
        Ok(session) => session,
        Err(TypeConstraintError::EmptyString) => {
            return Ok(SearchOutcome::idle(Notice::empty_query()));
        }
        Err(err) => return Ok(SearchOutcome::idle(Notice::invalid_query(err))),
    };

    let page = client.search_images(&session).await?;

    if page.is_empty() {
        return Ok(SearchOutcome::idle(Notice::no_results()));
    }

    let has_more = !session.is_exhausted(page.total_hits);
    let cards = page.hits.iter().map(GalleryCard::from).collect();

    Ok(SearchOutcome {
        notice: Notice::found(page.total_hits),
        view: GalleryView::Listing(Listing {
            session,
            cards,
            total_hits: page.total_hits,
            has_more,
        }),
    })
}

/// Fetches the page described by the load-more button.
///
/// Once the page reaches the end of the results nothing is appended; the
/// control is hidden and the form resets instead.
pub async fn load_more<C>(
    client: &C,
    form: LoadMoreForm,
    per_page: PageSize,
) -> ServiceResult<LoadMoreOutcome>
where
    C: ImageSearch + ?Sized,
{
    let session = form.into_session(per_page)?;
    let page = client.search_images(&session).await?;

    let exhausted = session.is_exhausted(page.total_hits);
    let cards = if exhausted {
        Vec::new()
    } else {
        page.hits.iter().map(GalleryCard::from).collect()
    };

    Ok(LoadMoreOutcome {
        session,
        cards,
        has_more: !exhausted,
        reset_form: exhausted,
        notice: exhausted.then(Notice::end_of_results),
    })
}
