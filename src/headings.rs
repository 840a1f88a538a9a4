//! Heading anchor assignment.
//!
//! Every heading ends up with a unique `{#id}` anchor so outline views
//! and deep links stay stable. Author-supplied anchors are collected
//! first and never rewritten; generated ids are guaranteed not to
//! collide with them. Generation walks the anchor-less headings in
//! reverse document order, so when two headings share a title the later
//! one keeps the bare slug and earlier ones take numeric suffixes.

use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;

use crate::{
    fence::FenceTracker,
    slug::unique_slug,
};

static HEADING_RE: LazyLock<Regex> = crate::lazy_regex!(
    r"^(#{1,6})\s+(\S.*?)(?:\s*\{#([^}]+)\})?\s*$",
    "valid heading anchor regex",
);

/// A heading extracted from the document, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// ATX level, 1 through 6.
    pub level: usize,
    /// Heading text without the hashes or anchor suffix.
    pub text: String,
    /// Unique anchor id, explicit or generated.
    pub id: String,
}

struct ParsedHeading {
    index: usize,
    level: usize,
    text: String,
    explicit_id: Option<String>,
}

fn parse_headings(lines: &[String]) -> Vec<ParsedHeading> {
    let mut tracker = FenceTracker::new();
    let mut parsed = Vec::new();
    for (index, line) in lines.iter().enumerate() {
        if tracker.observe(line) || tracker.in_fence() {
            continue;
        }
        if let Some(cap) = HEADING_RE.captures(line) {
            parsed.push(ParsedHeading {
                index,
                level: cap[1].len(),
                text: cap[2].trim().to_string(),
                explicit_id: cap.get(3).map(|m| m.as_str().to_string()),
            });
        }
    }
    parsed
}

/// Assign a unique anchor to every heading and extract the outline.
///
/// Returns the rewritten lines, the headings in document order and
/// whether any anchor was generated. Headings that already carry an
/// explicit anchor are left byte-identical.
///
/// # Examples
///
/// ```
/// use mdpostfix::headings::assign_anchors;
/// let lines = vec!["# My Post".to_string(), "## Setup {#setup}".to_string()];
/// let (out, headings, modified) = assign_anchors(&lines);
/// assert!(modified);
/// assert_eq!(out[0], "# My Post {#my-post}");
/// assert_eq!(out[1], "## Setup {#setup}");
/// assert_eq!(headings[1].id, "setup");
/// ```
#[must_use]
pub fn assign_anchors(lines: &[String]) -> (Vec<String>, Vec<Heading>, bool) {
    let parsed = parse_headings(lines);

    // Explicit anchors are reserved before anything is generated.
    let mut reserved: HashSet<String> = parsed
        .iter()
        .filter_map(|h| h.explicit_id.clone())
        .collect();

    let mut ids: Vec<Option<String>> =
        parsed.iter().map(|h| h.explicit_id.clone()).collect();
    let mut generated = false;

    // Reverse document order: the later of two same-titled headings
    // keeps the bare slug, earlier ones take suffixes.
    for (slot, heading) in parsed.iter().enumerate().rev() {
        if ids[slot].is_none() {
            ids[slot] = Some(unique_slug(&heading.text, &mut reserved));
            generated = true;
        }
    }

    let mut out = lines.to_vec();
    let mut headings = Vec::with_capacity(parsed.len());
    for (heading, id) in parsed.iter().zip(ids) {
        let id = id.unwrap_or_default();
        if heading.explicit_id.is_none() {
            out[heading.index] = format!(
                "{} {} {{#{id}}}",
                "#".repeat(heading.level),
                heading.text,
            );
        }
        headings.push(Heading {
            level: heading.level,
            text: heading.text.clone(),
            id,
        });
    }

    (out, headings, generated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::string_vec;

    #[test]
    fn appends_anchor_to_plain_heading() {
        let lines = string_vec!["## Getting Started"];
        let (out, headings, modified) = assign_anchors(&lines);
        assert!(modified);
        assert_eq!(out, string_vec!["## Getting Started {#getting-started}"]);
        assert_eq!(
            headings,
            vec![Heading {
                level: 2,
                text: "Getting Started".to_string(),
                id: "getting-started".to_string(),
            }]
        );
    }

    #[test]
    fn preserves_explicit_anchor_byte_for_byte() {
        let lines = string_vec!["## Setup {#custom-setup}"];
        let (out, headings, modified) = assign_anchors(&lines);
        assert!(!modified);
        assert_eq!(out, lines);
        assert_eq!(headings[0].id, "custom-setup");
    }

    #[test]
    fn later_duplicate_wins_the_bare_slug() {
        let lines = string_vec!["## Setup", "text", "## Setup"];
        let (out, headings, _) = assign_anchors(&lines);
        assert_eq!(out[0], "## Setup {#setup-1}");
        assert_eq!(out[2], "## Setup {#setup}");
        assert_eq!(headings[0].id, "setup-1");
        assert_eq!(headings[1].id, "setup");
    }

    #[test]
    fn generated_ids_avoid_explicit_anchors() {
        let lines = string_vec!["## A {#a}", "## A"];
        let (out, headings, _) = assign_anchors(&lines);
        assert_eq!(out[1], "## A {#a-1}");
        assert_eq!(headings[1].id, "a-1");
    }

    #[test]
    fn skips_headings_inside_fences() {
        let lines = string_vec!["```", "# not a heading", "```", "# Real"];
        let (out, headings, _) = assign_anchors(&lines);
        assert_eq!(out[1], "# not a heading");
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].text, "Real");
    }

    #[test]
    fn normalises_inner_spacing_when_rewriting() {
        let lines = string_vec!["##   Widely   Spaced"];
        let (out, _, _) = assign_anchors(&lines);
        assert_eq!(out[0], "## Widely   Spaced {#widely-spaced}");
    }

    #[test]
    fn headings_returned_in_document_order() {
        let lines = string_vec!["# One", "## Two", "### Three"];
        let (_, headings, _) = assign_anchors(&lines);
        let texts: Vec<&str> = headings.iter().map(|h| h.text.as_str()).collect();
        assert_eq!(texts, vec!["One", "Two", "Three"]);
    }
}
