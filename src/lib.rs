//! Community board, course catalog and event pages of the LMS guide.
//!
//! The `data` feature exposes the pure list machinery ([`filter`],
//! [`pagination`], [`view_state`]) together with the domain, repository and
//! services. The `server` feature adds the Actix-web front end.

#[cfg(feature = "server")]
use actix_cors::Cors;
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
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::InMemoryRepository;
#[cfg(feature = "server")]
use crate::routes::api::api_v1_posts;
#[cfg(feature = "server")]
use crate::routes::community::{show_board, show_post};
#[cfg(feature = "server")]
use crate::routes::courses::show_courses;
#[cfg(feature = "server")]
use crate::routes::event::{comment_event, show_event};
#[cfg(feature = "server")]
use crate::routes::main::show_index;

pub mod domain;
pub mod dto;
pub mod error_conversions;
pub mod filter;
pub mod forms;
#[cfg(feature = "server")]
pub mod models;
pub mod pagination;
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
pub mod services;
pub mod view_state;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let repo = InMemoryRepository::seeded()
        .map_err(|e| std::io::Error::other(format!("Failed to load demo data: {e}")))?;

    // Flash messages are kept in signed cookies; no server-side session.
    let secret_key = Key::try_from(server_config.secret.as_bytes())
        .map_err(|e| std::io::Error::other(format!("Invalid secret key: {e}")))?;

    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Starting server on {}:{}",
        server_config.address,
        server_config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(web::scope("/api").service(api_v1_posts))
            .service(show_index)
            .service(show_board)
            .service(show_post)
            .service(show_courses)
            .service(show_event)
            .service(comment_event)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
