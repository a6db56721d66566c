//! Port definitions
//!
//! Interfaces that infrastructure adapters implement for the
//! application layer.

mod post_catalog_port;
mod speech_port;

pub use post_catalog_port::PostCatalogPort;
pub use speech_port::SpeechPort;

#[cfg(test)]
pub use post_catalog_port::MockPostCatalogPort;
#[cfg(test)]
pub use speech_port::MockSpeechPort;
