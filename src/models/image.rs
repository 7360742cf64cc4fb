use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Image {
    pub id: i64,
    pub post_id: i64,
    pub filename: String,
    pub storage_path: Option<String>,
    pub storage_provider: Option<String>,
    #[sqlx(rename = "sort_order")]
    pub order: i64,
}
