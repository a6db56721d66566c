//! Slug value object
//!
//! A URL-safe unique identifier for a post, used for lookup.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A URL-safe post slug
///
/// Slugs are lowercase ASCII alphanumerics separated by single hyphens,
/// e.g. `hello-world`. They travel in URL paths and query strings, so
/// anything else is rejected at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Maximum accepted slug length
    pub const MAX_LEN: usize = 200;

    /// Parse and validate a slug
    pub fn parse(s: impl Into<String>) -> Result<Self, DomainError> {
        let s = s.into();
        if s.is_empty() {
            return Err(DomainError::InvalidSlug("slug cannot be empty".to_string()));
        }
        if s.len() > Self::MAX_LEN {
            return Err(DomainError::InvalidSlug(format!(
                "slug exceeds {} characters",
                Self::MAX_LEN
            )));
        }
        let valid = s
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
            && !s.starts_with('-')
            && !s.ends_with('-')
            && !s.contains("--");
        if !valid {
            return Err(DomainError::InvalidSlug(s));
        }
        Ok(Self(s))
    }

    /// Get the slug as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Slug {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
