use actix_web::{HttpResponse, Responder, get, web};

use crate::domain::post::BoardType;
use crate::models::config::ServerConfig;
use crate::repository::InMemoryRepository;
use crate::services::api::list_posts;
use crate::view_state::ViewState;

#[get("/v1/posts")]
pub async fn api_v1_posts(
    query: web::Query<ViewState<BoardType>>,
    repo: web::Data<InMemoryRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    match list_posts(
        repo.get_ref(),
        query.into_inner(),
        server_config.page_sizes.board,
    ) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            log::error!("Failed to list posts: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
