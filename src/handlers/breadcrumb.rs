use axum::{
    extract::{Path, State},
    Json,
};

use crate::content::Breadcrumb;
use crate::state::AppState;
use crate::utils::response::{ApiError, ApiResponse};

fn check_id(id: i64) -> Result<i64, ApiError> {
    if id <= 0 {
        return Err(ApiError::BadRequest("id must be a positive integer".into()));
    }
    Ok(id)
}

#[utoipa::path(
    get,
    path = "/breadcrumbs/post/{id}",
    responses(
        (status = 200, description = "Trail from comic to post; empty when the post does not exist", body = ApiResponse<Vec<Breadcrumb>>),
        (status = 400, description = "Invalid id")
    ),
    params(
        ("id" = i64, Path, description = "Post ID")
    )
)]
pub async fn post_breadcrumbs(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<Breadcrumb>>>, ApiError> {
    let trail = state.service.breadcrumbs_for_post(check_id(id)?).await?;
    Ok(Json(ApiResponse::success(trail)))
}

#[utoipa::path(
    get,
    path = "/breadcrumbs/episode/{id}",
    responses(
        (status = 200, description = "Trail from comic to episode; empty when the episode does not exist", body = ApiResponse<Vec<Breadcrumb>>),
        (status = 400, description = "Invalid id")
    ),
    params(
        ("id" = i64, Path, description = "Episode ID")
    )
)]
pub async fn episode_breadcrumbs(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<Breadcrumb>>>, ApiError> {
    let trail = state.service.breadcrumbs_for_episode(check_id(id)?).await?;
    Ok(Json(ApiResponse::success(trail)))
}
