//! Infrastructure layer - Configuration and port adapters
//!
//! Wires the integration crates behind the application layer's ports
//! and owns the layered application configuration.

pub mod adapters;
pub mod config;

pub use adapters::{PostCatalogAdapter, SpeechAdapter};
pub use config::{AppConfig, ServerConfig};
