//! Routes for the community board.

use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::post::BoardType;
use crate::models::config::ServerConfig;
use crate::repository::InMemoryRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::community::{self as community_service, BOARD_PATH};
use crate::services::ServiceError;
use crate::view_state::ViewState;

#[get("/community")]
/// Show one page of a board filtered by category and search term.
pub async fn show_board(
    query: web::Query<ViewState<BoardType>>,
    repo: web::Data<InMemoryRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match community_service::load_board_page(
        repo.get_ref(),
        query.into_inner(),
        server_config.page_sizes.board,
    ) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "community");
            context.insert("board", &data.board);
            context.insert("category", &data.state.category);
            context.insert("search", &data.state.search);
            context.insert("tabs", &data.tabs);
            context.insert("categories", &data.categories);
            context.insert("posts", &data.posts);
            context.insert("pager", &data.pager);
            context.insert("gallery", &data.gallery);

            render_template(&tera, "community/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load board: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/community/post/{post_id}")]
/// Show a single post with links to its neighbours.
pub async fn show_post(
    post_id: web::Path<i32>,
    repo: web::Data<InMemoryRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match community_service::load_post_detail(repo.get_ref(), post_id.into_inner()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "community");
            context.insert("post", &data.post);
            context.insert("content_html", &data.content_html);
            context.insert("previous", &data.previous);
            context.insert("next", &data.next);
            context.insert("back_href", &data.back_href);

            render_template(&tera, "community/post.html", &context)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("게시글을 찾을 수 없습니다.").send();
            redirect(BOARD_PATH)
        }
        Err(err) => {
            log::error!("Failed to load post: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
