use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::content::breadcrumbs;
use crate::content::reading_order::{linearize, resolve_links};
use crate::content::tree::{build_tree, find_in_forest};
use crate::content::{
    Breadcrumb, ContentResult, EpisodeNode, EpisodeWithPosts, PublishState, ReadingLinks,
    VisibilityFilter,
};
use crate::models::{Comic, Image, Post};
use crate::store::ContentStore;

#[derive(Debug, Serialize, ToSchema)]
pub struct NavigationTree {
    pub comic: Comic,
    pub episodes: Vec<EpisodeNode>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PostPage {
    pub comic_slug: String,
    pub post: Post,
    pub state: PublishState,
    pub images: Vec<Image>,
    pub thumbnail: Option<Image>,
    pub links: ReadingLinks,
    pub breadcrumbs: Vec<Breadcrumb>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EpisodePage {
    pub comic_slug: String,
    pub episode: EpisodeNode,
    pub state: PublishState,
    pub breadcrumbs: Vec<Breadcrumb>,
}

/// Every view is derived from fresh store reads; nothing is kept between
/// calls.
pub struct ContentService {
    store: Arc<dyn ContentStore>,
}

impl ContentService {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    pub async fn list_comics(&self) -> ContentResult<Vec<Comic>> {
        self.store.list_comics().await
    }

    /// Visible episodes of `comic` with their visible posts, nested.
    async fn load_forest(
        &self,
        comic: &Comic,
        filter: &VisibilityFilter,
    ) -> ContentResult<Vec<EpisodeNode>> {
        let episodes = filter.retain(self.store.episodes_for_comic(comic.id).await?);
        let posts = filter.retain(self.store.posts_for_comic(comic.id).await?);

        let mut posts_by_episode: HashMap<i64, Vec<Post>> = HashMap::new();
        for post in posts {
            posts_by_episode.entry(post.episode_id).or_default().push(post);
        }

        // Posts of hidden episodes stay in the map and are dropped with it.
        let flat = episodes
            .into_iter()
            .map(|episode| EpisodeWithPosts {
                posts: posts_by_episode.remove(&episode.id).unwrap_or_default(),
                episode,
            })
            .collect();

        build_tree(flat)
    }

    pub async fn navigation_tree(
        &self,
        comic_slug: &str,
        filter: &VisibilityFilter,
    ) -> ContentResult<Option<NavigationTree>> {
        let comic = match self.store.comic_by_slug(comic_slug).await? {
            Some(c) => c,
            None => {
                tracing::debug!("Comic '{}' not found", comic_slug);
                return Ok(None);
            }
        };

        let episodes = self.load_forest(&comic, filter).await?;
        Ok(Some(NavigationTree { comic, episodes }))
    }

    pub async fn reading_links(
        &self,
        comic_slug: &str,
        post_slug: &str,
        filter: &VisibilityFilter,
    ) -> ContentResult<Option<ReadingLinks>> {
        let comic = match self.store.comic_by_slug(comic_slug).await? {
            Some(c) => c,
            None => return Ok(None),
        };

        let forest = self.load_forest(&comic, filter).await?;
        let sequence = linearize(&forest)?;
        Ok(resolve_links(&sequence, &comic.slug, post_slug))
    }

    pub async fn post_page(
        &self,
        comic_slug: &str,
        post_slug: &str,
        filter: &VisibilityFilter,
    ) -> ContentResult<Option<PostPage>> {
        let comic = match self.store.comic_by_slug(comic_slug).await? {
            Some(c) => c,
            None => return Ok(None),
        };

        let post = match self.store.post_by_slug(post_slug).await? {
            Some(p) if filter.is_visible(&p) => p,
            _ => {
                tracing::debug!("Post '{}' not found or not visible", post_slug);
                return Ok(None);
            }
        };

        // Only the owning episode is checked, not its ancestors.
        match self.store.episode(post.episode_id).await? {
            Some(e) if e.comic_id == comic.id && filter.is_visible(&e) => {}
            _ => return Ok(None),
        }

        let forest = self.load_forest(&comic, filter).await?;
        let sequence = linearize(&forest)?;
        let links = match resolve_links(&sequence, &comic.slug, &post.slug) {
            Some(l) => l,
            None => return Ok(None),
        };

        let images = self.store.images_for_post(post.id).await?;
        let thumbnail = effective_thumbnail(&post, &images);
        let breadcrumbs = breadcrumbs::for_post(self.store.as_ref(), post.id).await?;

        Ok(Some(PostPage {
            comic_slug: comic.slug,
            state: filter.state_of(&post),
            post,
            images,
            thumbnail,
            links,
            breadcrumbs,
        }))
    }

    pub async fn episode_page(
        &self,
        comic_slug: &str,
        episode_slug: &str,
        filter: &VisibilityFilter,
    ) -> ContentResult<Option<EpisodePage>> {
        let comic = match self.store.comic_by_slug(comic_slug).await? {
            Some(c) => c,
            None => return Ok(None),
        };

        let episode = match self.store.episode_by_slug(comic.id, episode_slug).await? {
            Some(e) if filter.is_visible(&e) => e,
            _ => {
                tracing::debug!("Episode '{}' not found or not visible", episode_slug);
                return Ok(None);
            }
        };

        let forest = self.load_forest(&comic, filter).await?;
        let node = match find_in_forest(&forest, episode.id) {
            Some(n) => n.clone(),
            None => return Ok(None),
        };

        let breadcrumbs = breadcrumbs::for_episode(self.store.as_ref(), episode.id).await?;

        Ok(Some(EpisodePage {
            comic_slug: comic.slug,
            state: filter.state_of(&episode),
            episode: node,
            breadcrumbs,
        }))
    }

    pub async fn breadcrumbs_for_post(&self, post_id: i64) -> ContentResult<Vec<Breadcrumb>> {
        breadcrumbs::for_post(self.store.as_ref(), post_id).await
    }

    pub async fn breadcrumbs_for_episode(&self, episode_id: i64) -> ContentResult<Vec<Breadcrumb>> {
        breadcrumbs::for_episode(self.store.as_ref(), episode_id).await
    }
}

/// The designated thumbnail when it belongs to the post, else the first
/// image in display order.
pub fn effective_thumbnail(post: &Post, images: &[Image]) -> Option<Image> {
    post.thumbnail_image_id
        .and_then(|id| images.iter().find(|i| i.id == id))
        .or_else(|| images.first())
        .cloned()
}
