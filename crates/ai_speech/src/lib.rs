//! AI Speech - Text-to-Speech narration abstractions
//!
//! Provides the trait and implementation for turning post text into a
//! narrated-audio URL:
//! - `TextToSpeech` - Request synthesis of plain text, yielding a URL
//!
//! # Architecture
//!
//! This crate follows the ports & adapters pattern:
//! - `ports` module defines the trait (port)
//! - `providers` module contains concrete implementations (adapters)
//!
//! The only provider today is the remote narration service, which
//! accepts stripped plain text and responds with a hosted audio URL.
//!
//! # Example
//!
//! ```ignore
//! use ai_speech::{RemoteSpeechProvider, SpeechConfig, TextToSpeech};
//!
//! let provider = RemoteSpeechProvider::new(SpeechConfig::default())?;
//! let narration = provider.synthesize("Hello, world!").await?;
//! println!("Listen at {}", narration.audio_url);
//! ```

pub mod config;
pub mod error;
pub mod ports;
pub mod providers;
pub mod types;

pub use config::SpeechConfig;
pub use error::SpeechError;
pub use ports::TextToSpeech;
pub use providers::remote::RemoteSpeechProvider;
pub use types::Narration;
