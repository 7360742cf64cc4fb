pub mod breadcrumb;
pub mod comic;
pub mod episode;
pub mod post;
