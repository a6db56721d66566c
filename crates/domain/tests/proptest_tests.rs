//! Property-based tests for domain value objects and transforms
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::value_objects::Slug;
use domain::{Post, PostId, strip_tags};
use proptest::prelude::*;

// ============================================================================
// Markup Stripping Property Tests
// ============================================================================

mod strip_tags_tests {
    use super::*;

    proptest! {
        /// Stripping never panics and never grows the input.
        #[test]
        fn strip_is_total(input in ".*") {
            let stripped = strip_tags(&input);
            prop_assert!(stripped.len() <= input.len());
        }

        /// Stripping a stripped string is a no-op.
        #[test]
        fn strip_is_idempotent(input in ".*") {
            let once = strip_tags(&input);
            let twice = strip_tags(&once);
            prop_assert_eq!(once, twice);
        }

        /// Well-formed tag pairs wrapping tag-free text are fully removed.
        #[test]
        fn well_formed_tags_leave_no_tag_substrings(
            tag in "[a-z]{1,8}",
            body in "[^<>]*"
        ) {
            let input = format!("<{tag}>{body}</{tag}>");
            let stripped = strip_tags(&input);
            prop_assert_eq!(stripped.as_str(), body.as_str());
        }

        /// Tag-free input passes through unchanged.
        #[test]
        fn tag_free_input_unchanged(input in "[^<>]*") {
            prop_assert_eq!(strip_tags(&input), input);
        }
    }
}

// ============================================================================
// Slug Property Tests
// ============================================================================

mod slug_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_slugs_round_trip(s in "[a-z0-9]{1,10}(-[a-z0-9]{1,10}){0,5}") {
            let slug = Slug::parse(s.clone());
            prop_assert!(slug.is_ok());
            let slug = slug.unwrap();
            prop_assert_eq!(slug.as_str(), s.as_str());
        }

        #[test]
        fn uppercase_rejected(s in "[A-Z][a-z0-9-]{0,20}") {
            prop_assert!(Slug::parse(s).is_err());
        }
    }
}

// ============================================================================
// Post Entity Tests
// ============================================================================

mod post_tests {
    use super::*;

    proptest! {
        /// The speech input derived from a post never contains a full tag.
        #[test]
        fn stripped_content_has_no_tags(body in "[^<>]{0,64}", tag in "[a-z]{1,6}") {
            let content = format!("<{tag}>{body}</{tag}>");
            let post = Post::new(
                PostId::parse("1").unwrap(),
                "t",
                Slug::parse("t").unwrap(),
                content,
            );
            prop_assert_eq!(post.stripped_content(), body);
        }
    }
}
