mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use comic_press::routes::router;
use comic_press::service::ContentService;
use comic_press::state::AppState;
use comic_press::store::SqliteStore;
use common::{insert_episode, insert_post, seed_star_drift, setup_pool, StarDrift, ts};
use sqlx::SqlitePool;

async fn setup_app() -> (Router, SqlitePool, StarDrift) {
    let pool = setup_pool().await;
    let ids = seed_star_drift(&pool).await;

    let state = AppState {
        service: Arc::new(ContentService::new(Arc::new(SqliteStore::new(pool.clone())))),
    };

    (router(state), pool, ids)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_list_comics() {
    let (app, _, _) = setup_app().await;

    let (status, body) = get(app, "/comics").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"][0]["slug"], "star-drift");
}

#[tokio::test]
async fn test_navigation_tree() {
    let (app, pool, ids) = setup_app().await;
    insert_episode(&pool, ids.comic_id, Some(ids.a), "c", 3, Some(ts(1))).await;

    let (status, body) = get(app, "/comics/star-drift").await;

    assert_eq!(status, StatusCode::OK);
    let episodes = &body["data"]["episodes"];
    assert_eq!(episodes[0]["slug"], "a");
    assert_eq!(episodes[0]["posts"][1]["slug"], "a2");
    assert_eq!(episodes[0]["child_episodes"][0]["slug"], "c");
    assert_eq!(episodes[1]["slug"], "b");
}

#[tokio::test]
async fn test_unknown_comic_is_404() {
    let (app, _, _) = setup_app().await;

    let (status, body) = get(app, "/comics/missing").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Comic not found");
}

#[tokio::test]
async fn test_post_page_and_links() {
    let (app, _, _) = setup_app().await;

    let (status, body) = get(app.clone(), "/comics/star-drift/a2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["post"]["slug"], "a2");
    assert_eq!(body["data"]["state"], "live");

    let (status, body) = get(app, "/comics/star-drift/links/a2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["prev_href"], "/comics/star-drift/a1");
    assert_eq!(body["data"]["next_href"], "/comics/star-drift/b1");
}

#[tokio::test]
async fn test_first_post_has_null_prev() {
    let (app, _, _) = setup_app().await;

    let (status, body) = get(app, "/comics/star-drift/links/a1").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["prev_href"].is_null());
}

#[tokio::test]
async fn test_unknown_post_is_404() {
    let (app, _, _) = setup_app().await;

    let (status, _) = get(app.clone(), "/comics/star-drift/zz").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(app, "/comics/star-drift/links/zz").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_episode_page() {
    let (app, _, _) = setup_app().await;

    let (status, body) = get(app, "/comics/star-drift/episodes/b").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["episode"]["posts"][0]["slug"], "b1");
    assert_eq!(body["data"]["breadcrumbs"][0]["label"], "star-drift");
    assert!(body["data"]["breadcrumbs"][1].get("href").is_none());
}

#[tokio::test]
async fn test_breadcrumbs_endpoints() {
    let (app, _, ids) = setup_app().await;

    let (status, body) = get(app.clone(), &format!("/breadcrumbs/post/{}", ids.b1)).await;
    assert_eq!(status, StatusCode::OK);
    let labels: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["star-drift", "B", "B1"]);

    let (status, body) = get(app.clone(), "/breadcrumbs/episode/999").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], serde_json::json!([]));

    let (status, _) = get(app, "/breadcrumbs/episode/0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_cycle_is_500_without_detail() {
    let (app, pool, ids) = setup_app().await;
    sqlx::query("UPDATE episode SET parent_id = ? WHERE id = ?")
        .bind(ids.b)
        .bind(ids.a)
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("UPDATE episode SET parent_id = ? WHERE id = ?")
        .bind(ids.a)
        .bind(ids.b)
        .execute(&pool)
        .await
        .unwrap();

    let (status, body) = get(app, "/comics/star-drift").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Internal server error");
}

#[tokio::test]
async fn test_links_reachable_for_slugs_matching_route_segments() {
    let (app, pool, ids) = setup_app().await;
    insert_post(&pool, ids.b, "episodes", 2, Some(ts(1))).await;
    insert_episode(&pool, ids.comic_id, None, "links", 3, Some(ts(1))).await;

    let (status, body) = get(app.clone(), "/comics/star-drift/links/episodes").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["prev_href"], "/comics/star-drift/b1");
    assert!(body["data"]["next_href"].is_null());

    let (status, body) = get(app.clone(), "/comics/star-drift/episodes").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["post"]["slug"], "episodes");

    let (status, body) = get(app, "/comics/star-drift/episodes/links").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["episode"]["slug"], "links");
}

#[test]
fn test_openapi_documents_snake_case_fields() {
    use comic_press::openapi::ApiDoc;
    use utoipa::OpenApi;

    let doc = ApiDoc::openapi().to_json().unwrap();
    assert!(doc.contains("snake_case"));
    assert!(doc.contains("\"prev_href\""));
    assert!(doc.contains("\"child_episodes\""));
}
