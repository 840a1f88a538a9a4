//! Heading slug generation.
//!
//! Slugs identify headings for deep links and outline views. The
//! algorithm lowercases the text, strips everything outside
//! `[a-z0-9 -]`, hyphenates whitespace runs, collapses repeated hyphens
//! and trims the ends. Duplicate slugs gain `-1`, `-2`, ... suffixes.

use std::collections::HashSet;

/// Slug used when a heading contains no usable characters at all.
pub const FALLBACK_SLUG: &str = "section";

/// Turn heading text into a URL-safe slug.
///
/// Returns an empty string when the text contains no alphanumeric
/// characters; callers wanting a usable identifier should go through
/// [`unique_slug`], which substitutes [`FALLBACK_SLUG`].
///
/// # Examples
///
/// ```
/// use mdpostfix::slug::slugify;
/// assert_eq!(slugify("Getting Started"), "getting-started");
/// assert_eq!(slugify("What's new in 2.0?"), "whats-new-in-20");
/// assert_eq!(slugify("--!!--"), "");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    let hyphenated: String = text
        .to_lowercase()
        .chars()
        .filter_map(|ch| match ch {
            'a'..='z' | '0'..='9' | '-' => Some(ch),
            c if c.is_whitespace() => Some('-'),
            _ => None,
        })
        .collect();

    hyphenated
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Generate a slug for `text` that does not collide with `reserved`.
///
/// Collisions resolve by appending an incrementing numeric suffix. The
/// winning slug is inserted into `reserved` before returning, so later
/// calls can never produce the same identifier.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
///
/// use mdpostfix::slug::unique_slug;
/// let mut reserved = HashSet::new();
/// assert_eq!(unique_slug("Setup", &mut reserved), "setup");
/// assert_eq!(unique_slug("Setup", &mut reserved), "setup-1");
/// ```
#[must_use]
pub fn unique_slug(text: &str, reserved: &mut HashSet<String>) -> String {
    let base = match slugify(text) {
        s if s.is_empty() => FALLBACK_SLUG.to_string(),
        s => s,
    };

    let mut candidate = base.clone();
    let mut counter = 1;
    while reserved.contains(&candidate) {
        candidate = format!("{base}-{counter}");
        counter += 1;
    }
    reserved.insert(candidate.clone());
    candidate
}
