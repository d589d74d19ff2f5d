// src/payload/slug.rs
//! Slug derivation for generated option ids.

use lazy_static::lazy_static;
use regex::Regex;

use super::ids::IdGenerator;
use crate::constants::SLUG_MAX_LENGTH;

lazy_static! {
    /// Runs of anything outside lowercase ASCII alphanumerics. Applied
    /// after lowercasing, so uppercase input never reaches the pattern.
    static ref NON_SLUG_RUN: Regex =
        Regex::new("[^a-z0-9]+").expect("Failed to compile slug regex - this is a bug in the code");
}

/// Derive a url-safe slug from a human label.
///
/// Lowercases, collapses every run of other characters into a single
/// hyphen, strips hyphens from both edges and caps the result at
/// [`SLUG_MAX_LENGTH`] characters. A label with no usable characters at
/// all (punctuation-only, whitespace-only, empty) falls back to a
/// generated id so the result is never empty.
pub fn slugify(label: &str, ids: &dyn IdGenerator) -> String {
    let lowered = label.to_lowercase();
    let hyphenated = NON_SLUG_RUN.replace_all(&lowered, "-");
    let trimmed = hyphenated.trim_matches('-');
    let capped: String = trimmed.chars().take(SLUG_MAX_LENGTH).collect();

    if capped.is_empty() {
        ids.generate()
    } else {
        capped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::SequenceIdGenerator;

    #[test]
    fn test_slugify_joins_words_with_hyphens() {
        let ids = SequenceIdGenerator::new("opt");
        assert_eq!(slugify("To Do", &ids), "to-do");
        assert_eq!(slugify("In Progress", &ids), "in-progress");
    }

    #[test]
    fn test_slugify_collapses_runs_and_trims_edges() {
        let ids = SequenceIdGenerator::new("opt");
        assert_eq!(slugify("  Hello,   World!  ", &ids), "hello-world");
        assert_eq!(slugify("--Done--", &ids), "done");
    }

    #[test]
    fn test_slugify_replaces_non_ascii_letters() {
        let ids = SequenceIdGenerator::new("opt");
        assert_eq!(slugify("Déjà Vu", &ids), "d-j-vu");
    }

    #[test]
    fn test_slugify_caps_length() {
        let ids = SequenceIdGenerator::new("opt");
        let slug = slugify("a very long option label that keeps going", &ids);
        assert_eq!(slug.chars().count(), SLUG_MAX_LENGTH);
        assert_eq!(slug, "a-very-long-option-label");
    }

    #[test]
    fn test_slugify_falls_back_to_generated_id() {
        let ids = SequenceIdGenerator::new("opt");
        assert_eq!(slugify("", &ids), "opt-1");
        assert_eq!(slugify("!!! ???", &ids), "opt-2");
    }
}
