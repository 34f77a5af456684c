//! Gallery markup rendering.

use tera::{Context, Tera};

use crate::dto::gallery::GalleryCard;

/// Partial shared by the full page and the load-more fragment.
pub const CARDS_TEMPLATE: &str = "gallery/cards.html";

/// Renders `cards` into an HTML fragment, one `photo-card` per card in order.
///
/// Every interpolated value goes through tera's autoescaping.
pub fn render_cards(tera: &Tera, cards: &[GalleryCard]) -> tera::Result<String> {
    let mut context = Context::new();
    context.insert("cards", cards);
    tera.render(CARDS_TEMPLATE, &context)
}
