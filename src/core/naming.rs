//! Canonical filename derivation for numbered markdown documents.
//!
//! A canonical name has the shape `NNNN-slug.md`: a zero-padded sequence
//! number, a hyphen, and a slug built from the lower-cased original name.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Extension of the files that take part in renumbering.
pub const MARKDOWN_EXTENSION: &str = ".md";

/// Width of the zero-padded sequence prefix.
pub const SEQUENCE_WIDTH: usize = 4;

/// Which digits survive slug normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigitPolicy {
    /// Slug alphabet is `[a-z0-9-]`.
    #[default]
    All,
    /// Slug alphabet is `[a-z01-]`. Digits 2-9 collapse into hyphens, matching
    /// names produced by older tooling.
    Legacy,
}

impl DigitPolicy {
    fn pattern(&self) -> &'static Regex {
        static ALL: OnceLock<Regex> = OnceLock::new();
        static LEGACY: OnceLock<Regex> = OnceLock::new();

        match self {
            DigitPolicy::All => {
                ALL.get_or_init(|| Regex::new(r"[^a-z0-9-]+").expect("slug pattern is valid"))
            }
            DigitPolicy::Legacy => {
                LEGACY.get_or_init(|| Regex::new(r"[^a-z01-]+").expect("slug pattern is valid"))
            }
        }
    }
}

fn prefix_pattern() -> &'static Regex {
    static PREFIX: OnceLock<Regex> = OnceLock::new();
    PREFIX.get_or_init(|| Regex::new(r"^[0-9]{4}-").expect("prefix pattern is valid"))
}

/// Whether a directory entry name takes part in renumbering.
pub fn is_markdown(name: &str) -> bool {
    name.ends_with(MARKDOWN_EXTENSION)
}

/// Remove a leading `DDDD-` sequence prefix, if present.
pub fn strip_sequence_prefix(name: &str) -> &str {
    match prefix_pattern().find(name) {
        Some(m) => &name[m.end()..],
        None => name,
    }
}

/// Collapse every run of characters outside the slug alphabet into one hyphen.
///
/// Leading and trailing hyphens are kept as they fall out.
pub fn slugify_stem(stem: &str, digits: DigitPolicy) -> String {
    digits.pattern().replace_all(stem, "-").into_owned()
}

/// Zero-padded sequence prefix. Numbers wider than the pad are not truncated.
pub fn sequence_prefix(sequence: usize) -> String {
    format!("{:0width$}", sequence, width = SEQUENCE_WIDTH)
}

/// Canonical name for `original` at 0-based position `index` in the sorted set.
pub fn canonical_name(original: &str, index: usize, digits: DigitPolicy) -> String {
    let lowered = original.to_lowercase();
    let unprefixed = strip_sequence_prefix(&lowered);
    let stem = unprefixed
        .strip_suffix(MARKDOWN_EXTENSION)
        .unwrap_or(unprefixed);
    let slug = slugify_stem(stem, digits);

    format!(
        "{}-{}{}",
        sequence_prefix(index + 1),
        slug,
        MARKDOWN_EXTENSION
    )
}
