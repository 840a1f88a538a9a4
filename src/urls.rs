//! Media page URL normalisation.
//!
//! Authors paste Giphy and Tenor page links into image syntax, which the
//! renderer cannot embed. This pass rewrites both shapes into their
//! direct-media equivalents and leaves every other URL alone. Direct
//! URLs match neither pattern, so re-running the pass is a no-op.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::fence::FenceTracker;

pub(crate) static IMAGE_RE: LazyLock<Regex> =
    crate::lazy_regex!(r"!\[([^\]]*)\]\(([^)]+)\)", "valid image regex");

// Page URLs end in a slug whose trailing alphanumeric token is the media id.
static GIPHY_PAGE_RE: LazyLock<Regex> =
    crate::lazy_regex!(r"giphy\.com/gifs/(?:[^/]*-)?([A-Za-z0-9]+)$", "valid giphy regex");

static TENOR_PAGE_RE: LazyLock<Regex> =
    crate::lazy_regex!(r"tenor\.com/view/[^/]*-([0-9]+)$", "valid tenor regex");

/// Rewrite a single page URL into its direct-media form.
fn rewrite_page_url(url: &str) -> Option<String> {
    if let Some(cap) = GIPHY_PAGE_RE.captures(url) {
        return Some(format!("https://media.giphy.com/media/{}/giphy.gif", &cap[1]));
    }
    if let Some(cap) = TENOR_PAGE_RE.captures(url) {
        return Some(format!("https://media.tenor.com/images/{}/tenor.gif", &cap[1]));
    }
    None
}

/// Rewrite known media page URLs inside image syntax.
///
/// Returns the rewritten lines and whether anything changed. Lines inside
/// fenced code blocks are passed through untouched.
///
/// # Examples
///
/// ```
/// use mdpostfix::urls::normalize_media_urls;
/// let lines = vec!["![fun](https://giphy.com/gifs/cat-Ab1Cd2)".to_string()];
/// let (out, modified) = normalize_media_urls(&lines);
/// assert!(modified);
/// assert_eq!(out[0], "![fun](https://media.giphy.com/media/Ab1Cd2/giphy.gif)");
/// ```
#[must_use]
pub fn normalize_media_urls(lines: &[String]) -> (Vec<String>, bool) {
    let mut tracker = FenceTracker::new();
    let mut modified = false;

    let out = lines
        .iter()
        .map(|line| {
            if tracker.observe(line) || tracker.in_fence() {
                return line.clone();
            }
            let rewritten = IMAGE_RE.replace_all(line, |caps: &Captures<'_>| {
                match rewrite_page_url(&caps[2]) {
                    Some(url) => {
                        modified = true;
                        format!("![{}]({url})", &caps[1])
                    }
                    None => caps[0].to_string(),
                }
            });
            rewritten.into_owned()
        })
        .collect();

    (out, modified)
}
