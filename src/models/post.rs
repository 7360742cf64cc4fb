use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Leaf reading unit. `slug` is unique across every comic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Post {
    pub id: i64,
    pub episode_id: i64,
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub post_number: i64,
    pub published_at: Option<NaiveDateTime>,
    pub thumbnail_image_id: Option<i64>,
}
