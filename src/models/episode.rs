use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A node of a comic's content tree. `parent_id` is `None` for root-level
/// episodes; `episode_number` orders siblings and may repeat (ties by id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Episode {
    pub id: i64,
    pub comic_id: i64,
    pub parent_id: Option<i64>,
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub episode_number: i64,
    pub thumbnail: Option<String>,
    pub published_at: Option<NaiveDateTime>,
}
