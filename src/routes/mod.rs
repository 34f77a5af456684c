//! HTTP handlers and the helpers they share.

use actix_web::HttpResponse;
use actix_web::http::header;
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages, Level};
use tera::{Context, Tera};

use crate::domain::notice::{Notice, NoticeLevel};

pub mod api;
pub mod gallery;
pub mod main;

/// Maps a flash message level onto the alert class used by the templates.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        Level::Info | Level::Debug => "info",
    }
}

/// Maps a notice level onto the alert class used by the templates.
pub fn notice_level_to_str(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Failure => "danger",
        NoticeLevel::Warning => "warning",
        NoticeLevel::Success => "success",
        NoticeLevel::Info => "info",
    }
}

/// Queues `notice` to be shown on the next rendered page.
pub fn flash_notice(notice: &Notice) {
    let message = notice.message.clone();
    match notice.level {
        NoticeLevel::Failure => FlashMessage::error(message).send(),
        NoticeLevel::Warning => FlashMessage::warning(message).send(),
        NoticeLevel::Success => FlashMessage::success(message).send(),
        NoticeLevel::Info => FlashMessage::info(message).send(),
    }
}

/// Context shared by every page: incoming flash messages plus `notices`
/// produced while handling the current request.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    notices: &[Notice],
    current_page: &str,
) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content().to_string(), alert_level_to_str(&f.level())))
        .chain(
            notices
                .iter()
                .map(|n| (n.message.clone(), notice_level_to_str(n.level))),
        )
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", current_page);
    context
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Failed to render template '{template}': {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}
