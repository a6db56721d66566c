//! Domain entities

mod post;

pub use post::Post;
