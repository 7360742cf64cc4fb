use axum::{
    extract::{Path, State},
    Json,
};

use crate::content::{ReadingLinks, VisibilityFilter};
use crate::service::PostPage;
use crate::state::AppState;
use crate::utils::response::{ApiError, ApiResponse};

#[utoipa::path(
    get,
    path = "/comics/{comic}/{post}",
    responses(
        (status = 200, description = "Post with images, reading links and breadcrumbs", body = ApiResponse<PostPage>),
        (status = 404, description = "Post not found")
    ),
    params(
        ("comic" = String, Path, description = "Comic slug"),
        ("post" = String, Path, description = "Post slug")
    )
)]
pub async fn get_post(
    State(state): State<AppState>,
    Path((comic, post)): Path<(String, String)>,
) -> Result<Json<ApiResponse<PostPage>>, ApiError> {
    let filter = VisibilityFilter::public();

    match state.service.post_page(&comic, &post, &filter).await? {
        Some(page) => Ok(Json(ApiResponse::success(page))),
        None => Err(ApiError::NotFound("Post not found".into())),
    }
}

#[utoipa::path(
    get,
    path = "/comics/{comic}/links/{post}",
    responses(
        (status = 200, description = "Previous and next post in reading order", body = ApiResponse<ReadingLinks>),
        (status = 404, description = "Post not in the comic's reading sequence")
    ),
    params(
        ("comic" = String, Path, description = "Comic slug"),
        ("post" = String, Path, description = "Post slug")
    )
)]
pub async fn get_reading_links(
    State(state): State<AppState>,
    Path((comic, post)): Path<(String, String)>,
) -> Result<Json<ApiResponse<ReadingLinks>>, ApiError> {
    let filter = VisibilityFilter::public();

    match state.service.reading_links(&comic, &post, &filter).await? {
        Some(links) => Ok(Json(ApiResponse::success(links))),
        None => Err(ApiError::NotFound("Post not found".into())),
    }
}
