#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use comic_press::content::EpisodeWithPosts;
use comic_press::models::{Episode, Post};
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

/// Noon on the given day of January 2024.
pub fn ts(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, day)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

/// Fixed "now" used by every time-dependent test.
pub fn now() -> NaiveDateTime {
    ts(15)
}

pub fn episode(id: i64, number: i64, parent_id: Option<i64>) -> Episode {
    Episode {
        id,
        comic_id: 1,
        parent_id,
        slug: format!("ep-{}", id),
        title: format!("Episode {}", id),
        description: None,
        episode_number: number,
        thumbnail: None,
        published_at: Some(ts(1)),
    }
}

pub fn post(id: i64, episode_id: i64, number: i64) -> Post {
    Post {
        id,
        episode_id,
        slug: format!("post-{}", id),
        title: format!("Post {}", id),
        description: None,
        post_number: number,
        published_at: Some(ts(1)),
        thumbnail_image_id: None,
    }
}

pub fn entry(episode: Episode, posts: Vec<Post>) -> EpisodeWithPosts {
    EpisodeWithPosts { episode, posts }
}

pub async fn setup_pool() -> SqlitePool {
    // A single connection keeps every query on the same in-memory database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::migrate!("./migrations").run(&pool).await.unwrap();
    pool
}

pub async fn insert_comic(pool: &SqlitePool, slug: &str, title: &str) -> i64 {
    sqlx::query("INSERT INTO comic (slug, title) VALUES (?, ?)")
        .bind(slug)
        .bind(title)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn insert_episode(
    pool: &SqlitePool,
    comic_id: i64,
    parent_id: Option<i64>,
    slug: &str,
    number: i64,
    published_at: Option<NaiveDateTime>,
) -> i64 {
    sqlx::query(
        "INSERT INTO episode (comic_id, parent_id, slug, title, episode_number, published_at)
        VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(comic_id)
    .bind(parent_id)
    .bind(slug)
    .bind(slug.to_uppercase())
    .bind(number)
    .bind(published_at)
    .execute(pool)
    .await
    .unwrap()
    .last_insert_rowid()
}

pub async fn insert_post(
    pool: &SqlitePool,
    episode_id: i64,
    slug: &str,
    number: i64,
    published_at: Option<NaiveDateTime>,
) -> i64 {
    sqlx::query(
        "INSERT INTO post (episode_id, slug, title, post_number, published_at)
        VALUES (?, ?, ?, ?, ?)",
    )
    .bind(episode_id)
    .bind(slug)
    .bind(slug.to_uppercase())
    .bind(number)
    .bind(published_at)
    .execute(pool)
    .await
    .unwrap()
    .last_insert_rowid()
}

pub async fn insert_image(pool: &SqlitePool, post_id: i64, filename: &str, order: i64) -> i64 {
    sqlx::query("INSERT INTO image (post_id, filename, storage_path, sort_order) VALUES (?, ?, ?, ?)")
        .bind(post_id)
        .bind(filename)
        .bind(format!("uploads/{}", filename))
        .bind(order)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub struct StarDrift {
    pub comic_id: i64,
    pub a: i64,
    pub b: i64,
    pub a1: i64,
    pub a2: i64,
    pub b1: i64,
}

/// Comic "star-drift": root episodes A (posts a1, a2) and B (post b1).
/// Titles are the upper-cased slugs.
pub async fn seed_star_drift(pool: &SqlitePool) -> StarDrift {
    let comic_id = insert_comic(pool, "star-drift", "star-drift").await;
    let a = insert_episode(pool, comic_id, None, "a", 1, Some(ts(1))).await;
    let b = insert_episode(pool, comic_id, None, "b", 2, Some(ts(1))).await;
    let a1 = insert_post(pool, a, "a1", 1, Some(ts(1))).await;
    let a2 = insert_post(pool, a, "a2", 2, Some(ts(2))).await;
    let b1 = insert_post(pool, b, "b1", 1, Some(ts(3))).await;

    StarDrift {
        comic_id,
        a,
        b,
        a1,
        a2,
        b1,
    }
}
