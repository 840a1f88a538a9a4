//! Image alt-text backfill.
//!
//! Accessibility checks downstream expect every image to carry alt text.
//! This pass derives a label from the image URL's final path segment and
//! only ever touches images whose alt text is empty or whitespace.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::fence::FenceTracker;

/// Label used when nothing usable can be derived from the URL.
pub const DEFAULT_ALT_TEXT: &str = "Blog image";

static EMPTY_ALT_RE: LazyLock<Regex> =
    crate::lazy_regex!(r"!\[\s*\]\(([^)]+)\)", "valid empty-alt regex");

/// Derive alt text from the final path segment of an image URL.
///
/// The segment is cut at its first dot, separators become spaces and any
/// character outside ASCII alphanumerics and whitespace is dropped.
fn alt_from_url(url: &str) -> String {
    let segment = url.rsplit('/').next().unwrap_or(url);
    let stem = segment.split('.').next().unwrap_or("");
    let derived: String = stem
        .chars()
        .filter_map(|ch| match ch {
            '-' | '_' => Some(' '),
            c if c.is_ascii_alphanumeric() || c.is_whitespace() => Some(c),
            _ => None,
        })
        .collect();

    let derived = derived.trim();
    if derived.is_empty() {
        DEFAULT_ALT_TEXT.to_string()
    } else {
        derived.to_string()
    }
}

/// Backfill missing image alt text from the image URL.
///
/// # Examples
///
/// ```
/// use mdpostfix::images::backfill_image_alts;
/// let lines = vec!["![](/images/my-cool-shot.png)".to_string()];
/// let (out, modified) = backfill_image_alts(&lines);
/// assert!(modified);
/// assert_eq!(out[0], "![my cool shot](/images/my-cool-shot.png)");
/// ```
#[must_use]
pub fn backfill_image_alts(lines: &[String]) -> (Vec<String>, bool) {
    let mut tracker = FenceTracker::new();
    let mut modified = false;

    let out = lines
        .iter()
        .map(|line| {
            if tracker.observe(line) || tracker.in_fence() {
                return line.clone();
            }
            let rewritten = EMPTY_ALT_RE.replace_all(line, |caps: &Captures<'_>| {
                modified = true;
                format!("![{}]({})", alt_from_url(&caps[1]), &caps[1])
            });
            rewritten.into_owned()
        })
        .collect();

    (out, modified)
}
