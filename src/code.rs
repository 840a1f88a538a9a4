//! Code-fence language backfill.
//!
//! The highlighter needs a language token on every opening fence. Bare
//! openers gain a default token; openers that already name a language and
//! closing fences are never touched.

use std::sync::LazyLock;

use regex::Regex;

use crate::fence::{FenceTracker, fence_info};

/// Language token appended to bare opening fences.
pub const DEFAULT_LANGUAGE: &str = "text";

static BARE_FENCE_RE: LazyLock<Regex> =
    crate::lazy_regex!(r"^(\s*)(`{3,})\s*$", "valid bare fence regex");

/// Append the default language to opening fences that lack one.
///
/// # Examples
///
/// ```
/// use mdpostfix::code::backfill_code_languages;
/// let lines = vec!["```".to_string(), "let x = 1;".to_string(), "```".to_string()];
/// let (out, modified) = backfill_code_languages(&lines);
/// assert!(modified);
/// assert_eq!(out[0], "```text");
/// assert_eq!(out[2], "```");
/// ```
#[must_use]
pub fn backfill_code_languages(lines: &[String]) -> (Vec<String>, bool) {
    let mut tracker = FenceTracker::new();
    let mut modified = false;

    let out = lines
        .iter()
        .map(|line| {
            if !tracker.observe(line) {
                return line.clone();
            }
            // Only opening delimiters can take a language token.
            let opening = tracker.in_fence();
            if opening && fence_info(line).is_some_and(str::is_empty) {
                modified = true;
                return BARE_FENCE_RE
                    .replace(line, format!("${{1}}${{2}}{DEFAULT_LANGUAGE}"))
                    .into_owned();
            }
            line.clone()
        })
        .collect();

    (out, modified)
}
