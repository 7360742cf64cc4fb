pub mod comic;
pub mod episode;
pub mod post;
pub mod image;

pub use comic::*;
pub use episode::*;
pub use post::*;
pub use image::*;
