use axum::{
    extract::{Path, State},
    Json,
};

use crate::content::VisibilityFilter;
use crate::models::Comic;
use crate::service::NavigationTree;
use crate::state::AppState;
use crate::utils::response::{ApiError, ApiResponse};

#[utoipa::path(
    get,
    path = "/comics",
    responses(
        (status = 200, description = "List comics", body = ApiResponse<Vec<Comic>>)
    )
)]
pub async fn list_comics(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Comic>>>, ApiError> {
    let comics = state.service.list_comics().await?;
    Ok(Json(ApiResponse::success(comics)))
}

#[utoipa::path(
    get,
    path = "/comics/{comic}",
    responses(
        (status = 200, description = "Navigation tree of published episodes and posts", body = ApiResponse<NavigationTree>),
        (status = 404, description = "Comic not found")
    ),
    params(
        ("comic" = String, Path, description = "Comic slug")
    )
)]
pub async fn get_navigation_tree(
    State(state): State<AppState>,
    Path(comic): Path<String>,
) -> Result<Json<ApiResponse<NavigationTree>>, ApiError> {
    let filter = VisibilityFilter::public();

    match state.service.navigation_tree(&comic, &filter).await? {
        Some(tree) => Ok(Json(ApiResponse::success(tree))),
        None => Err(ApiError::NotFound("Comic not found".into())),
    }
}
