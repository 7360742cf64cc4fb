//! Flat episode records to nested navigation tree.
//!
//! Episodes are indexed once by id and linked to their parent by lookup,
//! so assembly is linear in the number of episodes.

use serde::Serialize;
use std::collections::HashMap;
use utoipa::ToSchema;

use crate::content::error::{ContentError, ContentResult};
use crate::models::{Episode, Post};

/// One flat input record: an episode and the posts it directly owns.
#[derive(Debug, Clone)]
pub struct EpisodeWithPosts {
    pub episode: Episode,
    pub posts: Vec<Post>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct EpisodeNode {
    #[serde(flatten)]
    pub episode: Episode,
    pub posts: Vec<Post>,
    #[schema(no_recursion)]
    pub child_episodes: Vec<EpisodeNode>,
}

impl EpisodeNode {
    /// Depth-first search for the node holding `episode_id`.
    pub fn find(&self, episode_id: i64) -> Option<&EpisodeNode> {
        if self.episode.id == episode_id {
            return Some(self);
        }
        self.child_episodes.iter().find_map(|c| c.find(episode_id))
    }
}

pub fn find_in_forest(forest: &[EpisodeNode], episode_id: i64) -> Option<&EpisodeNode> {
    forest.iter().find_map(|n| n.find(episode_id))
}

fn sibling_key(episode: &Episode) -> (i64, i64) {
    (episode.episode_number, episode.id)
}

/// Sorts posts into reading order within their episode.
pub fn sort_posts(posts: &mut [Post]) {
    posts.sort_by_key(|p| (p.post_number, p.id));
}

/// Builds the forest for one comic.
///
/// An episode whose parent id is absent from `episodes` (a draft parent
/// filtered out, or a dangling reference) becomes a root node. Episodes
/// caught in a parent cycle are never reachable from a root; they are
/// reported as `ContentError::CycleDetected` rather than dropped.
pub fn build_tree(mut episodes: Vec<EpisodeWithPosts>) -> ContentResult<Vec<EpisodeNode>> {
    episodes.sort_by_key(|e| sibling_key(&e.episode));

    let mut index: HashMap<i64, usize> = HashMap::with_capacity(episodes.len());
    for (pos, e) in episodes.iter().enumerate() {
        index.entry(e.episode.id).or_insert(pos);
    }

    let mut roots = Vec::new();
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); episodes.len()];
    for (pos, e) in episodes.iter().enumerate() {
        match e.episode.parent_id.and_then(|pid| index.get(&pid)) {
            Some(&parent) if parent != pos => children[parent].push(pos),
            Some(_) => {
                return Err(ContentError::CycleDetected {
                    episode_id: e.episode.id,
                })
            }
            None => roots.push(pos),
        }
    }

    let total = episodes.len();
    let ids: Vec<i64> = episodes.iter().map(|e| e.episode.id).collect();
    let mut slots: Vec<Option<EpisodeWithPosts>> = episodes.into_iter().map(Some).collect();
    let mut forest = Vec::with_capacity(roots.len());
    let mut placed = 0;
    for root in roots {
        forest.push(assemble(root, &ids, &mut slots, &children, &mut placed)?);
    }

    if placed != total {
        let stranded = slots
            .iter()
            .flatten()
            .map(|e| e.episode.id)
            .min()
            .unwrap_or_default();
        tracing::error!("{} episodes unreachable from any root", total - placed);
        return Err(ContentError::CycleDetected {
            episode_id: stranded,
        });
    }

    Ok(forest)
}

fn assemble(
    pos: usize,
    ids: &[i64],
    slots: &mut [Option<EpisodeWithPosts>],
    children: &[Vec<usize>],
    placed: &mut usize,
) -> ContentResult<EpisodeNode> {
    let EpisodeWithPosts { episode, mut posts } = match slots[pos].take() {
        Some(e) => e,
        None => return Err(ContentError::CycleDetected { episode_id: ids[pos] }),
    };
    *placed += 1;
    sort_posts(&mut posts);

    let mut child_episodes = Vec::with_capacity(children[pos].len());
    for &child in &children[pos] {
        child_episodes.push(assemble(child, ids, slots, children, placed)?);
    }

    Ok(EpisodeNode {
        episode,
        posts,
        child_episodes,
    })
}
