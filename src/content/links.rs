pub fn comic_href(comic_slug: &str) -> String {
    format!("/comics/{}", comic_slug)
}

pub fn episode_href(comic_slug: &str, episode_slug: &str) -> String {
    format!("/comics/{}/episodes/{}", comic_slug, episode_slug)
}

pub fn post_href(comic_slug: &str, post_slug: &str) -> String {
    format!("/comics/{}/{}", comic_slug, post_slug)
}
