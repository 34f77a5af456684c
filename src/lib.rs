#[cfg(feature = "server")]
use std::sync::Arc;
#[cfg(feature = "server")]
use std::time::Duration;

#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_web::cookie::Key;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};
#[cfg(feature = "server")]
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "server")]
use crate::client::{ImageSearch, PixabayClient};
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::routes::api::api_v1_images;
#[cfg(feature = "server")]
use crate::routes::gallery::load_more_images;
#[cfg(feature = "server")]
use crate::routes::main::{search, show_index};

pub mod client;
pub mod domain;
pub mod dto;
pub mod forms;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod render;
#[cfg(feature = "server")]
pub mod routes;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let per_page = server_config
        .page_size()
        .map_err(|e| std::io::Error::other(format!("Invalid per_page setting: {e}")))?;

    // One pooled HTTP client shared by every worker.
    let client = PixabayClient::new(
        server_config.pixabay_url.clone(),
        server_config.pixabay_key.clone(),
        Duration::from_secs(server_config.request_timeout_secs),
    )
    .map_err(|e| std::io::Error::other(format!("Failed to create image client: {e}")))?;
    let client: Arc<dyn ImageSearch> = Arc::new(client);

    // Key and store for flash messages.
    let secret_key = Key::try_from(server_config.secret.as_bytes())
        .map_err(|e| std::io::Error::other(format!("Invalid secret: {e}")))?;

    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Starting gallery server on {}:{} ({} images per page)",
        bind_address.0,
        bind_address.1,
        per_page
    );

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(web::scope("/api").service(api_v1_images))
            .service(show_index)
            .service(search)
            .service(load_more_images)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::from(client.clone()))
            .app_data(web::Data::new(per_page))
    })
    .bind(bind_address)?
    .run()
    .await
}
