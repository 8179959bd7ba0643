use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::domain::course::CourseKind;
use crate::models::config::ServerConfig;
use crate::repository::InMemoryRepository;
use crate::routes::{base_context, render_template};
use crate::services::courses as courses_service;
use crate::view_state::ViewState;

#[get("/courses")]
/// Show the registration catalog for a tab and subject.
pub async fn show_courses(
    query: web::Query<ViewState<CourseKind>>,
    repo: web::Data<InMemoryRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match courses_service::load_courses_page(
        repo.get_ref(),
        query.into_inner(),
        server_config.page_sizes.courses,
    ) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "courses");
            context.insert("kind", &data.kind);
            context.insert("state", &data.state);
            context.insert("tabs", &data.tabs);
            context.insert("subjects", &data.subjects);
            context.insert("courses", &data.courses);
            context.insert("pager", &data.pager);
            context.insert("cart", &data.cart);
            context.insert("cart_count", &data.cart_count);
            context.insert("cart_total", &data.cart_total);

            render_template(&tera, "courses/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load courses: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
