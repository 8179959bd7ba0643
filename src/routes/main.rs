use actix_web::{Responder, get};

use crate::routes::redirect;
use crate::services::community::BOARD_PATH;

#[get("/")]
/// The guide opens on the community board.
pub async fn show_index() -> impl Responder {
    redirect(BOARD_PATH)
}
