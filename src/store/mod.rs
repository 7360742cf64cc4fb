pub mod sqlite;

use async_trait::async_trait;

use crate::content::ContentResult;
use crate::models::{Comic, Episode, Image, Post};

pub use sqlite::SqliteStore;

/// Entity look-ups the resolvers consume. Records come back unfiltered;
/// publish visibility is the caller's concern.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn list_comics(&self) -> ContentResult<Vec<Comic>>;

    async fn comic(&self, id: i64) -> ContentResult<Option<Comic>>;

    async fn comic_by_slug(&self, slug: &str) -> ContentResult<Option<Comic>>;

    async fn episode(&self, id: i64) -> ContentResult<Option<Episode>>;

    async fn episode_by_slug(&self, comic_id: i64, slug: &str) -> ContentResult<Option<Episode>>;

    /// Every episode of the comic, ordered by episode number then id.
    async fn episodes_for_comic(&self, comic_id: i64) -> ContentResult<Vec<Episode>>;

    /// Every post of every episode of the comic, ordered by post number then id.
    async fn posts_for_comic(&self, comic_id: i64) -> ContentResult<Vec<Post>>;

    async fn post(&self, id: i64) -> ContentResult<Option<Post>>;

    async fn post_by_slug(&self, slug: &str) -> ContentResult<Option<Post>>;

    /// Images of a post in display order.
    async fn images_for_post(&self, post_id: i64) -> ContentResult<Vec<Image>>;
}
