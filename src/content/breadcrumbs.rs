//! Root-to-leaf trail from a comic down to an episode or post.
//!
//! An unknown starting id yields an empty trail, not an error. A parent id
//! that resolves to nothing ends the walk as if the episode were a root.

use serde::Serialize;
use std::collections::{HashSet, VecDeque};
use utoipa::ToSchema;

use crate::content::error::{ContentError, ContentResult};
use crate::content::links::{comic_href, episode_href};
use crate::models::{Comic, Episode};
use crate::store::ContentStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Breadcrumb {
    pub label: String,
    /// `None` on the last crumb: the current page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl Breadcrumb {
    fn linked(label: &str, href: String) -> Self {
        Self {
            label: label.to_string(),
            href: Some(href),
        }
    }
}

/// Walks parent links from `start` upward. Returns the owning comic and the
/// episode chain in root-to-leaf order, or `None` if the comic is missing.
async fn ancestor_chain<S: ContentStore + ?Sized>(
    store: &S,
    start: Episode,
) -> ContentResult<Option<(Comic, VecDeque<Episode>)>> {
    let mut visited = HashSet::new();
    let mut chain = VecDeque::new();
    let mut current = start;

    loop {
        if !visited.insert(current.id) {
            tracing::error!("Parent chain of episode {} loops back on itself", current.id);
            return Err(ContentError::CycleDetected {
                episode_id: current.id,
            });
        }

        let parent = match current.parent_id {
            Some(parent_id) => store.episode(parent_id).await?,
            None => None,
        };
        chain.push_front(current);

        match parent {
            Some(p) => current = p,
            None => break,
        }
    }

    let comic_id = chain.front().map(|e| e.comic_id);
    let comic = match comic_id {
        Some(id) => store.comic(id).await?,
        None => None,
    };

    Ok(comic.map(|c| (c, chain)))
}

fn episode_trail(comic: &Comic, chain: &VecDeque<Episode>) -> Vec<Breadcrumb> {
    let mut trail = Vec::with_capacity(chain.len() + 2);
    trail.push(Breadcrumb::linked(&comic.title, comic_href(&comic.slug)));
    trail.extend(
        chain
            .iter()
            .map(|e| Breadcrumb::linked(&e.title, episode_href(&comic.slug, &e.slug))),
    );
    trail
}

pub async fn for_episode<S: ContentStore + ?Sized>(
    store: &S,
    episode_id: i64,
) -> ContentResult<Vec<Breadcrumb>> {
    let episode = match store.episode(episode_id).await? {
        Some(e) => e,
        None => {
            tracing::debug!("No breadcrumbs: episode {} not found", episode_id);
            return Ok(vec![]);
        }
    };

    let (comic, chain) = match ancestor_chain(store, episode).await? {
        Some(found) => found,
        None => return Ok(vec![]),
    };

    let mut trail = episode_trail(&comic, &chain);
    if let Some(last) = trail.last_mut() {
        last.href = None;
    }
    Ok(trail)
}

pub async fn for_post<S: ContentStore + ?Sized>(
    store: &S,
    post_id: i64,
) -> ContentResult<Vec<Breadcrumb>> {
    let post = match store.post(post_id).await? {
        Some(p) => p,
        None => {
            tracing::debug!("No breadcrumbs: post {} not found", post_id);
            return Ok(vec![]);
        }
    };

    let episode = match store.episode(post.episode_id).await? {
        Some(e) => e,
        None => return Ok(vec![]),
    };

    let (comic, chain) = match ancestor_chain(store, episode).await? {
        Some(found) => found,
        None => return Ok(vec![]),
    };

    let mut trail = episode_trail(&comic, &chain);
    trail.push(Breadcrumb {
        label: post.title,
        href: None,
    });
    Ok(trail)
}
