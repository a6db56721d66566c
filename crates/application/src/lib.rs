//! Application layer - Use cases and orchestration
//!
//! Contains the post-page lifecycle, port definitions, and
//! application-level errors. Orchestrates domain objects and
//! infrastructure adapters.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
