use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::event::CommentForm;
use crate::models::config::ServerConfig;
use crate::repository::InMemoryRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::event::{self as event_service, EVENT_PATH};
use crate::services::ServiceError;
use crate::view_state::ViewState;

#[get("/event")]
/// Show the event page with one page of pledges.
pub async fn show_event(
    query: web::Query<ViewState<()>>,
    repo: web::Data<InMemoryRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match event_service::load_event_page(
        repo.get_ref(),
        query.into_inner(),
        server_config.page_sizes.comments,
    ) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "event");
            context.insert("comments", &data.comments);
            context.insert("pager", &data.pager);

            render_template(&tera, "event/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load event comments: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/event/comment")]
/// Accept a pledge and return to the first page of comments.
pub async fn comment_event(web::Form(form): web::Form<CommentForm>) -> impl Responder {
    let first_page = ViewState::<()>::default().href(EVENT_PATH);

    match event_service::submit_comment(form) {
        Ok(_) => {
            FlashMessage::success("합격 다짐이 등록되었습니다! (데모)").send();
        }
        Err(ServiceError::Form(_)) => {
            FlashMessage::error("합격 다짐을 입력해주세요.").send();
        }
        Err(err) => {
            log::error!("Failed to submit comment: {err}");
            FlashMessage::error("합격 다짐 등록에 실패했습니다.").send();
        }
    }

    redirect(&first_page)
}
