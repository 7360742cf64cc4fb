//! Time-gated publish policy shared by every public read.
//!
//! Visibility is never stored: it is derived from an entity's publish
//! timestamp and the `AsOf` instant the caller threads in.

use chrono::{NaiveDateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Episode, Post};

/// Instant against which publish timestamps are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsOf {
    /// Creator-facing reads: drafts and scheduled items are included.
    Unbounded,
    At(NaiveDateTime),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PublishState {
    Draft,
    Scheduled,
    Live,
}

pub trait Publishable {
    fn published_at(&self) -> Option<NaiveDateTime>;
}

impl Publishable for Episode {
    fn published_at(&self) -> Option<NaiveDateTime> {
        self.published_at
    }
}

impl Publishable for Post {
    fn published_at(&self) -> Option<NaiveDateTime> {
        self.published_at
    }
}

/// Applied at each level on its own: an episode and a post are checked
/// against their own timestamps only, never against further ancestors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityFilter {
    as_of: AsOf,
    clock: NaiveDateTime,
}

impl VisibilityFilter {
    /// Public reads evaluated at `now`.
    pub fn at(now: NaiveDateTime) -> Self {
        Self { as_of: AsOf::At(now), clock: now }
    }

    /// Creator-facing reads; `now` is only used to report publish state.
    pub fn unbounded_at(now: NaiveDateTime) -> Self {
        Self { as_of: AsOf::Unbounded, clock: now }
    }

    pub fn public() -> Self {
        Self::at(Utc::now().naive_utc())
    }

    pub fn is_visible<T: Publishable>(&self, entity: &T) -> bool {
        match self.as_of {
            AsOf::Unbounded => true,
            AsOf::At(now) => matches!(entity.published_at(), Some(at) if at <= now),
        }
    }

    pub fn retain<T: Publishable>(&self, entities: Vec<T>) -> Vec<T> {
        entities.into_iter().filter(|e| self.is_visible(e)).collect()
    }

    pub fn state_of<T: Publishable>(&self, entity: &T) -> PublishState {
        match entity.published_at() {
            None => PublishState::Draft,
            Some(at) if at > self.clock => PublishState::Scheduled,
            Some(_) => PublishState::Live,
        }
    }
}
