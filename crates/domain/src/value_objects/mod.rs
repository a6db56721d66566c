//! Value objects for the blog domain

mod post_id;
mod slug;

pub use post_id::PostId;
pub use slug::Slug;
