pub mod breadcrumbs;
pub mod error;
pub mod links;
pub mod reading_order;
pub mod tree;
pub mod visibility;

pub use breadcrumbs::Breadcrumb;
pub use error::{ContentError, ContentResult};
pub use reading_order::{ReadingEntry, ReadingLinks};
pub use tree::{EpisodeNode, EpisodeWithPosts};
pub use visibility::{PublishState, Publishable, VisibilityFilter};
