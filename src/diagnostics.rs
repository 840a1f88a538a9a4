//! Validation checks and their result types.
//!
//! Every check here runs over the rewritten text and never mutates it.
//! Blocking problems become [`Issue`]s; advisory findings become
//! [`Warning`]s with a human-readable tip. The pipeline runs all checks
//! on every invocation, so the caller always sees the full picture.

use std::collections::HashSet;

use crate::{
    fence::{FenceTracker, fence_info},
    headings::Heading,
    toc::TOC_MARKER,
    urls::IMAGE_RE,
};

/// Below this word count the content is flagged as very short.
pub const SHORT_CONTENT_WORDS: usize = 100;

/// Below this word count the content draws a softer warning.
pub const RECOMMENDED_CONTENT_WORDS: usize = 300;

/// Severity of a blocking problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    Critical,
    Error,
}

/// A blocking problem the author must fix before publishing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub kind: IssueKind,
    pub message: String,
    pub location: Option<String>,
}

/// An advisory finding, never blocking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub message: String,
    pub suggestion: String,
}

impl Warning {
    pub(crate) fn new(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            suggestion: suggestion.into(),
        }
    }
}

/// Check heading presence and hierarchy.
///
/// A document with no headings at all, or with no H1, is invalid. More
/// than one H1 and level skips are advisory only.
#[must_use]
pub fn check_outline(headings: &[Heading]) -> (Vec<Issue>, Vec<Warning>) {
    let mut issues = Vec::new();
    let mut warnings = Vec::new();

    if headings.is_empty() {
        issues.push(Issue {
            kind: IssueKind::Critical,
            message: "No headings found. Blog posts should have at least one H1 heading."
                .to_string(),
            location: None,
        });
        return (issues, warnings);
    }

    let h1_count = headings.iter().filter(|h| h.level == 1).count();
    if h1_count == 0 {
        issues.push(Issue {
            kind: IssueKind::Error,
            message:
                "Missing H1 heading. Every blog post should have exactly one H1 (title-level) heading."
                    .to_string(),
            location: None,
        });
    } else if h1_count > 1 {
        warnings.push(Warning::new(
            format!(
                "Found {h1_count} H1 headings. SEO best practice is to have exactly one H1 per page."
            ),
            "Consider using H2 for secondary headings instead.",
        ));
    }

    let mut previous_level = 0;
    for heading in headings {
        if heading.level > previous_level + 1 {
            warnings.push(Warning::new(
                format!(
                    "Heading hierarchy skip detected: H{previous_level} → H{}",
                    heading.level
                ),
                format!("Use H{} instead of H{}", previous_level + 1, heading.level),
            ));
        }
        previous_level = heading.level;
    }

    (issues, warnings)
}

/// Warn about images still lacking alt text after the backfill pass.
#[must_use]
pub fn check_image_alts(lines: &[String]) -> Vec<Warning> {
    let mut tracker = FenceTracker::new();
    let mut seen = HashSet::new();
    let mut warnings = Vec::new();

    for line in lines {
        if tracker.observe(line) || tracker.in_fence() {
            continue;
        }
        for cap in IMAGE_RE.captures_iter(line) {
            let alt = &cap[1];
            let src = cap[2].to_string();
            if !seen.insert(src.clone()) {
                continue;
            }
            if alt.trim().is_empty() {
                warnings.push(Warning::new(
                    format!("Image missing alt text: {src}"),
                    "Alt text is important for accessibility and SEO.",
                ));
            }
        }
    }

    warnings
}

/// Warn about opening fences still lacking a language token.
#[must_use]
pub fn check_fence_languages(lines: &[String]) -> Vec<Warning> {
    let mut tracker = FenceTracker::new();
    let mut block_count = 0;
    let mut warnings = Vec::new();

    for line in lines {
        if !tracker.observe(line) || !tracker.in_fence() {
            continue;
        }
        block_count += 1;
        if fence_info(line).is_some_and(str::is_empty) {
            warnings.push(Warning::new(
                format!("Code block #{block_count} has no syntax highlighting"),
                "Specify a language for better readability (e.g. ```javascript)",
            ));
        }
    }

    warnings
}

fn word_count(lines: &[String]) -> usize {
    lines
        .iter()
        .filter(|l| l.trim() != TOC_MARKER)
        .map(|l| l.split_whitespace().count())
        .sum()
}

/// Flag content that falls short of the recommended length.
#[must_use]
pub fn check_length(lines: &[String]) -> Vec<Warning> {
    let words = word_count(lines);
    if words < SHORT_CONTENT_WORDS {
        vec![Warning::new(
            format!("Content is very short ({words} words). Longer content ranks better."),
            "Aim for at least 300-500 words for blog posts.",
        )]
    } else if words < RECOMMENDED_CONTENT_WORDS {
        vec![Warning::new(
            format!("Content might be too short ({words} words)."),
            "Consider expanding to 500+ words for better SEO.",
        )]
    } else {
        Vec::new()
    }
}

/// Informational note emitted when a `[TOC]` marker is present.
#[must_use]
pub fn toc_note() -> Warning {
    Warning::new(
        "Table of Contents: an interactive TOC will be generated from headings",
        "Ensure your post has 3+ headings (## H2 or ### H3) for the TOC to be most useful",
    )
}
