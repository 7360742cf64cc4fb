use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Comic {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub cover_image: Option<String>,
}
