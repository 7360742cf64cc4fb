//! Canonical reading sequence of a comic and the prev/next links derived
//! from it.

use serde::Serialize;
use std::collections::HashSet;
use utoipa::ToSchema;

use crate::content::error::{ContentError, ContentResult};
use crate::content::links::post_href;
use crate::content::tree::EpisodeNode;
use crate::models::{Episode, Post};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadingEntry<'a> {
    pub episode: &'a Episode,
    pub post: &'a Post,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ReadingLinks {
    pub prev_href: Option<String>,
    pub next_href: Option<String>,
}

/// Pre-order walk of the forest: at each episode its own posts come first,
/// then its child episodes, roots in list order.
///
/// Visiting the same episode id twice aborts with `CycleDetected`.
pub fn linearize(forest: &[EpisodeNode]) -> ContentResult<Vec<ReadingEntry<'_>>> {
    let mut sequence = Vec::new();
    let mut visited = HashSet::new();
    let mut stack: Vec<&EpisodeNode> = forest.iter().rev().collect();

    while let Some(node) = stack.pop() {
        if !visited.insert(node.episode.id) {
            tracing::error!("Episode {} visited twice during linearization", node.episode.id);
            return Err(ContentError::CycleDetected {
                episode_id: node.episode.id,
            });
        }

        sequence.extend(node.posts.iter().map(|post| ReadingEntry {
            episode: &node.episode,
            post,
        }));
        stack.extend(node.child_episodes.iter().rev());
    }

    Ok(sequence)
}

pub fn position_of(sequence: &[ReadingEntry<'_>], post_slug: &str) -> Option<usize> {
    sequence.iter().position(|e| e.post.slug == post_slug)
}

/// Neighbours of `post_slug` in the sequence, or `None` when the post is
/// not part of it.
pub fn neighbours<'a>(
    sequence: &[ReadingEntry<'a>],
    post_slug: &str,
) -> Option<(Option<ReadingEntry<'a>>, Option<ReadingEntry<'a>>)> {
    let index = position_of(sequence, post_slug)?;
    let prev = index.checked_sub(1).map(|i| sequence[i]);
    let next = sequence.get(index + 1).copied();
    Some((prev, next))
}

pub fn resolve_links(
    sequence: &[ReadingEntry<'_>],
    comic_slug: &str,
    post_slug: &str,
) -> Option<ReadingLinks> {
    let (prev, next) = neighbours(sequence, post_slug)?;
    Some(ReadingLinks {
        prev_href: prev.map(|e| post_href(comic_slug, &e.post.slug)),
        next_href: next.map(|e| post_href(comic_slug, &e.post.slug)),
    })
}
