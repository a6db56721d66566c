//! Port adapters
//!
//! Implement the application layer's ports over the integration crates,
//! translating integration errors into `ApplicationError`.

mod post_catalog_adapter;
mod speech_adapter;

pub use post_catalog_adapter::PostCatalogAdapter;
pub use speech_adapter::SpeechAdapter;
