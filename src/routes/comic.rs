use axum::{routing::get, Router};

use crate::handlers;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/comics", get(handlers::comic::list_comics))
        .route("/comics/{comic}", get(handlers::comic::get_navigation_tree))
        .route("/comics/{comic}/episodes/{episode}", get(handlers::episode::get_episode))
        .route("/comics/{comic}/{post}", get(handlers::post::get_post))
        .route("/comics/{comic}/links/{post}", get(handlers::post::get_reading_links))
}
