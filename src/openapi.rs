use utoipa::OpenApi;
use crate::content;
use crate::handlers;
use crate::models;
use crate::service;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Comic Press API",
        description = "Read-only API for published webcomics: navigation trees, reading order and breadcrumbs. All JSON field names are snake_case (prev_href, next_href, child_episodes).",
        version = "1.0.0"
    ),
    servers(
        (url = "http://localhost:7783", description = "Local development server")
    ),
    paths(
        handlers::comic::list_comics,
        handlers::comic::get_navigation_tree,
        handlers::episode::get_episode,
        handlers::post::get_post,
        handlers::post::get_reading_links,
        handlers::breadcrumb::post_breadcrumbs,
        handlers::breadcrumb::episode_breadcrumbs,
    ),
    components(
        schemas(
            models::Comic,
            models::Episode,
            models::Post,
            models::Image,
            content::EpisodeNode,
            content::ReadingLinks,
            content::Breadcrumb,
            content::PublishState,
            service::NavigationTree,
            service::PostPage,
            service::EpisodePage,
        )
    )
)]
pub struct ApiDoc;
