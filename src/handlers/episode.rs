use axum::{
    extract::{Path, State},
    Json,
};

use crate::content::VisibilityFilter;
use crate::service::EpisodePage;
use crate::state::AppState;
use crate::utils::response::{ApiError, ApiResponse};

#[utoipa::path(
    get,
    path = "/comics/{comic}/episodes/{episode}",
    responses(
        (status = 200, description = "Episode with its posts, child episodes and breadcrumbs", body = ApiResponse<EpisodePage>),
        (status = 404, description = "Episode not found")
    ),
    params(
        ("comic" = String, Path, description = "Comic slug"),
        ("episode" = String, Path, description = "Episode slug")
    )
)]
pub async fn get_episode(
    State(state): State<AppState>,
    Path((comic, episode)): Path<(String, String)>,
) -> Result<Json<ApiResponse<EpisodePage>>, ApiError> {
    let filter = VisibilityFilter::public();

    match state.service.episode_page(&comic, &episode, &filter).await? {
        Some(page) => Ok(Json(ApiResponse::success(page))),
        None => Err(ApiError::NotFound("Episode not found".into())),
    }
}
