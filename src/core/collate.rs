//! Locale-aware string ordering for directory listings.
//!
//! Uses the Unicode Collation Algorithm with the CLDR root tailoring.
//! Punctuation and symbols are non-ignorable, matching the default of a
//! locale-aware compare with no explicit locale.

use feruca::{Collator, Locale, Tailoring};
use std::cmp::Ordering;

fn root_collator() -> Collator {
    // shifting = false keeps variable characters at the primary level;
    // tiebreak = true makes canonically equal names compare by bytes.
    Collator::new(Tailoring::Cldr(Locale::Root), false, true)
}

/// Compare two names the way a locale-aware sort would.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    root_collator().collate(a, b)
}

/// Sort names in place with [`locale_cmp`].
pub fn sort_names<S: AsRef<str>>(names: &mut [S]) {
    let mut collator = root_collator();
    names.sort_by(|a, b| collator.collate(a.as_ref(), b.as_ref()));
}
