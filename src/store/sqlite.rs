use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::content::ContentResult;
use crate::models::{Comic, Episode, Image, Post};
use crate::store::ContentStore;

const COMIC_COLUMNS: &str = "id, slug, title, description, cover_image";
const EPISODE_COLUMNS: &str =
    "id, comic_id, parent_id, slug, title, description, episode_number, thumbnail, published_at";
const POST_COLUMNS: &str =
    "id, episode_id, slug, title, description, post_number, published_at, thumbnail_image_id";

#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentStore for SqliteStore {
    async fn list_comics(&self) -> ContentResult<Vec<Comic>> {
        let comics = sqlx::query_as::<sqlx::Sqlite, Comic>(&format!(
            "SELECT {} FROM comic ORDER BY title, id",
            COMIC_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(comics)
    }

    async fn comic(&self, id: i64) -> ContentResult<Option<Comic>> {
        let comic = sqlx::query_as::<sqlx::Sqlite, Comic>(&format!(
            "SELECT {} FROM comic WHERE id = ?",
            COMIC_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(comic)
    }

    async fn comic_by_slug(&self, slug: &str) -> ContentResult<Option<Comic>> {
        let comic = sqlx::query_as::<sqlx::Sqlite, Comic>(&format!(
            "SELECT {} FROM comic WHERE slug = ?",
            COMIC_COLUMNS
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(comic)
    }

    async fn episode(&self, id: i64) -> ContentResult<Option<Episode>> {
        let episode = sqlx::query_as::<sqlx::Sqlite, Episode>(&format!(
            "SELECT {} FROM episode WHERE id = ?",
            EPISODE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(episode)
    }

    async fn episode_by_slug(&self, comic_id: i64, slug: &str) -> ContentResult<Option<Episode>> {
        let episode = sqlx::query_as::<sqlx::Sqlite, Episode>(&format!(
            "SELECT {} FROM episode WHERE comic_id = ? AND slug = ?",
            EPISODE_COLUMNS
        ))
        .bind(comic_id)
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(episode)
    }

    async fn episodes_for_comic(&self, comic_id: i64) -> ContentResult<Vec<Episode>> {
        let episodes = sqlx::query_as::<sqlx::Sqlite, Episode>(&format!(
            "SELECT {} FROM episode WHERE comic_id = ? ORDER BY episode_number ASC, id ASC",
            EPISODE_COLUMNS
        ))
        .bind(comic_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(episodes)
    }

    async fn posts_for_comic(&self, comic_id: i64) -> ContentResult<Vec<Post>> {
        let posts = sqlx::query_as::<sqlx::Sqlite, Post>(
            "SELECT p.id, p.episode_id, p.slug, p.title, p.description, p.post_number,
                p.published_at, p.thumbnail_image_id
            FROM post p
            JOIN episode e ON e.id = p.episode_id
            WHERE e.comic_id = ?
            ORDER BY p.post_number ASC, p.id ASC",
        )
        .bind(comic_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn post(&self, id: i64) -> ContentResult<Option<Post>> {
        let post = sqlx::query_as::<sqlx::Sqlite, Post>(&format!(
            "SELECT {} FROM post WHERE id = ?",
            POST_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    async fn post_by_slug(&self, slug: &str) -> ContentResult<Option<Post>> {
        let post = sqlx::query_as::<sqlx::Sqlite, Post>(&format!(
            "SELECT {} FROM post WHERE slug = ?",
            POST_COLUMNS
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    async fn images_for_post(&self, post_id: i64) -> ContentResult<Vec<Image>> {
        let images = sqlx::query_as::<sqlx::Sqlite, Image>(
            "SELECT id, post_id, filename, storage_path, storage_provider, sort_order
            FROM image WHERE post_id = ? ORDER BY sort_order ASC",
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(images)
    }
}
