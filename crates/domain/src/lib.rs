//! Domain layer - Blog entities and value objects
//!
//! Pure types with no I/O: the `Post` entity, the `Slug` and `PostId`
//! value objects, and the markup-stripping transform used to prepare
//! post bodies for speech synthesis.

pub mod entities;
pub mod errors;
pub mod markup;
pub mod value_objects;

pub use entities::Post;
pub use errors::DomainError;
pub use markup::strip_tags;
pub use value_objects::{PostId, Slug};
