use axum::{routing::get, Router};

use crate::handlers;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/breadcrumbs/post/{id}", get(handlers::breadcrumb::post_breadcrumbs))
        .route("/breadcrumbs/episode/{id}", get(handlers::breadcrumb::episode_breadcrumbs))
}
