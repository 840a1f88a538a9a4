//! Spacing and list normalisation.
//!
//! The heavier cousin of the semantic passes: collapses runs of blank
//! lines, tidies list markers, guarantees a space after ATX heading
//! hashes and keeps one blank line around the `[TOC]` marker. Only the
//! "full format" save path runs this; live editing skips it so the
//! author's cursor is not yanked around.

use std::sync::LazyLock;

use regex::Regex;

use crate::{fence::FenceTracker, toc::TOC_MARKER};

static LIST_ITEM_RE: LazyLock<Regex> = crate::lazy_regex!(
    r"^(\s*)([-*+]|[0-9]+\.)\s+(.+)$",
    "valid list item regex",
);

static HEADING_NO_SPACE_RE: LazyLock<Regex> =
    crate::lazy_regex!(r"^(#{1,6})([^\s#].*)$", "valid tight heading regex");

fn push_blank_if_needed(out: &mut Vec<String>) {
    if out.last().is_some_and(|l| !l.trim().is_empty()) {
        out.push(String::new());
    }
}

/// Normalise blank lines, list markers and heading spacing.
///
/// Fenced code is untouched, including blank lines inside it. Blank-line
/// runs outside code collapse to a single blank and leading blanks are
/// dropped.
///
/// # Examples
///
/// ```
/// use mdpostfix::spacing::normalize_spacing;
/// let lines = vec!["##Tight".to_string(), "".to_string(), "".to_string(), "-  item".to_string()];
/// let (out, modified) = normalize_spacing(&lines);
/// assert!(modified);
/// assert_eq!(out, vec!["## Tight", "", "- item"]);
/// ```
#[must_use]
pub fn normalize_spacing(lines: &[String]) -> (Vec<String>, bool) {
    let mut tracker = FenceTracker::new();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());

    for line in lines {
        if tracker.observe(line) {
            out.push(line.clone());
            continue;
        }
        if tracker.in_fence() {
            out.push(line.clone());
            continue;
        }

        let trimmed = line.trim();

        if trimmed == TOC_MARKER {
            push_blank_if_needed(&mut out);
            out.push(TOC_MARKER.to_string());
            out.push(String::new());
            continue;
        }

        if trimmed.is_empty() {
            // Collapse runs and drop leading blanks.
            if out.last().is_some_and(|l| !l.is_empty()) {
                out.push(String::new());
            }
            continue;
        }

        if let Some(cap) = LIST_ITEM_RE.captures(line) {
            let indent = cap[1].replace('\t', "  ");
            out.push(format!("{indent}{} {}", &cap[2], cap[3].trim()));
            continue;
        }

        if let Some(cap) = HEADING_NO_SPACE_RE.captures(trimmed) {
            let indent = &line[..line.len() - line.trim_start().len()];
            out.push(format!("{indent}{} {}", &cap[1], &cap[2]));
            continue;
        }

        out.push(line.clone());
    }

    let modified = out != lines;
    (out, modified)
}
