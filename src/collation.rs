//! Human alphabetical ordering for article titles
//!
//! Titles are ordered the way a reader expects rather than by raw code
//! points: `"auton"` sorts next to `"Auton"`, `"Éclair"` sorts among the
//! `E` titles instead of after `Z`, `"Søren"` sorts with the `o` spellings and
//! `"Straße"` sorts as `"Strasse"`.
//!
//! Comparison follows the Unicode Collation Algorithm with the CLDR root
//! order, as implemented by [`feruca`].
//!
//! # Comparison levels
//!
//! - **Primary**: base letters. Whitespace and punctuation sort before
//!   digits, digits before letters. Letters without a decomposition (`ø`, `ł`,
//!   `æ`) take their place in the alphabet, and `ß` expands to `ss`.
//! - **Secondary**: unaccented before accented.
//! - **Tertiary**: lowercase before uppercase.
//! - **Identical**: byte order, so the ordering is total.
//!
//! Whitespace and punctuation are not ignorable: `"Alpha Centauri"` sorts
//! before `"Alphabet"`.
//!
//! # Example
//!
//! ```
//! use simplepedia::collation::compare;
//! use std::cmp::Ordering;
//!
//! assert_eq!(compare("Eclair", "Éclair"), Ordering::Less);
//! assert_eq!(compare("Éclair", "Ecru"), Ordering::Less);
//! assert_eq!(compare("dalek", "Dalek"), Ordering::Less);
//! assert_eq!(compare("Zorg", "auton"), Ordering::Greater);
//! assert_eq!(compare("Søren", "Sten"), Ordering::Less);
//! ```

use std::cmp::Ordering;

use feruca::{Collator, Locale, Tailoring};

/// Collator for title ordering: CLDR root, non-ignorable punctuation,
/// byte-order tiebreak
pub fn collator() -> Collator {
    Collator::new(Tailoring::Cldr(Locale::Root), false, true)
}

/// Compare two strings in human alphabetical order
pub fn compare(a: &str, b: &str) -> Ordering {
    collator().collate(a, b)
}

/// Stable sort of any slice by a string field in human alphabetical order
///
/// One collator is reused for every comparison; the keys are borrowed, not
/// copied.
pub fn sort_by_key_str<T, F>(items: &mut [T], key: F)
where
    F: Fn(&T) -> &str,
{
    let mut collator = collator();
    items.sort_by(|a, b| collator.collate(key(a), key(b)));
}
