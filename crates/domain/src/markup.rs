//! Markup stripping
//!
//! Removes tag-like substrings from post bodies before they are sent to
//! speech synthesis. This is a deliberately naive strip: any `<...>` run
//! is deleted, with no entity decoding and no nested-tag awareness. The
//! narration service receives plain text and reads entities literally,
//! which matches what the backend content contains in practice.

use std::sync::LazyLock;

use regex::Regex;

#[allow(clippy::unwrap_used)] // pattern is a compile-time constant
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Remove all `<...>` substrings from `content`.
///
/// Total over arbitrary input and idempotent: stripping a stripped
/// string is a no-op. An unclosed `<` with no matching `>` is left in
/// place, as is a bare `>`.
pub fn strip_tags(content: &str) -> String {
    TAG_RE.replace_all(content, "").into_owned()
}
