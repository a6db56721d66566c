//! Post identifier value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A unique post identifier
///
/// Post ids are opaque strings assigned by the backend (MongoDB-style
/// 24-character hex in practice, but nothing here depends on that shape
/// beyond non-emptiness).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    /// Create a post ID from a backend-assigned string
    pub fn parse(s: impl Into<String>) -> Result<Self, DomainError> {
        let s = s.into();
        if s.trim().is_empty() {
            return Err(DomainError::InvalidPostId(
                "post id cannot be empty".to_string(),
            ));
        }
        Ok(Self(s))
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
