//! Table-of-contents marker handling.
//!
//! The renderer replaces a `[TOC]` marker line with an outline generated
//! from the document's headings. Hand-written outline sections predate
//! the marker; the migrator here collapses them so a post never carries
//! two competing tables of contents.

use std::sync::LazyLock;

use regex::Regex;

use crate::{fence::annotate, headings::Heading};

/// The sentinel line the renderer replaces with a generated outline.
pub const TOC_MARKER: &str = "[TOC]";

// Matches "Table of Contents", "TOC" or "Contents" headings at levels
// 2-6, with or without an explicit anchor suffix.
static LEGACY_HEADING_RE: LazyLock<Regex> = crate::lazy_regex!(
    r"(?i)^#{2,6}\s+(?:table\s+of\s+contents|toc|contents)\s*(?:\{#[^}]+\})?\s*$",
    "valid legacy outline regex",
);

static ANY_HEADING_RE: LazyLock<Regex> =
    crate::lazy_regex!(r"^#{1,6}\s+.+", "valid heading regex");

static LIST_ITEM_RE: LazyLock<Regex> =
    crate::lazy_regex!(r"^(?:[-*+]\s+|[0-9]+\.\s+)", "valid list item regex");

/// What the migrator did with one legacy outline block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TocAction {
    /// The block became a single `[TOC]` marker line.
    Replaced,
    /// The block was deleted because a marker already exists.
    Removed,
}

/// Check whether any line is a `[TOC]` marker.
#[must_use]
pub fn has_toc_marker(lines: &[String]) -> bool {
    lines.iter().any(|l| l.trim() == TOC_MARKER)
}

/// Replace or remove hand-written table-of-contents sections.
///
/// A legacy block is a "Table of Contents"-style heading followed by at
/// least two list items before the next heading. The first migrated
/// block becomes a `[TOC]` marker (unless one already exists anywhere in
/// the document); later blocks are deleted so the marker stays unique.
/// One [`TocAction`] is returned per migrated block, in document order.
///
/// A heading merely titled "Contents" above an unrelated bullet list
/// will false-positive here; the pipeline surfaces the migration as a
/// warning rather than guessing at intent.
#[must_use]
pub fn migrate_legacy_toc(lines: &[String]) -> (Vec<String>, Vec<TocAction>) {
    let scanned = annotate(lines);
    let mut has_marker = has_toc_marker(lines);
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut actions = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let candidate = !scanned[i].delimiter
            && !scanned[i].in_code
            && LEGACY_HEADING_RE.is_match(&lines[i]);
        if !candidate {
            out.push(lines[i].clone());
            i += 1;
            continue;
        }

        // Span runs to the next heading of any level, or end of document.
        let mut end = lines.len();
        let mut list_items = 0;
        for j in (i + 1)..lines.len() {
            if scanned[j].delimiter || scanned[j].in_code {
                continue;
            }
            if ANY_HEADING_RE.is_match(&lines[j]) {
                end = j;
                break;
            }
            if LIST_ITEM_RE.is_match(lines[j].trim()) {
                list_items += 1;
            }
        }

        if list_items < 2 {
            out.push(lines[i].clone());
            i += 1;
            continue;
        }

        if has_marker {
            actions.push(TocAction::Removed);
        } else {
            if out.last().is_some_and(|l| !l.trim().is_empty()) {
                out.push(String::new());
            }
            out.push(TOC_MARKER.to_string());
            if end < lines.len() && !lines[end].trim().is_empty() {
                out.push(String::new());
            }
            has_marker = true;
            actions.push(TocAction::Replaced);
        }
        i = end;
    }

    (out, actions)
}

/// Restrict headings to the levels shown in outline views.
///
/// # Examples
///
/// ```
/// use mdpostfix::{headings::Heading, toc::extract_toc};
/// let headings = vec![
///     Heading { level: 1, text: "Title".into(), id: "title".into() },
///     Heading { level: 2, text: "Setup".into(), id: "setup".into() },
///     Heading { level: 4, text: "Detail".into(), id: "detail".into() },
/// ];
/// let toc = extract_toc(&headings);
/// assert_eq!(toc.len(), 1);
/// assert_eq!(toc[0].id, "setup");
/// ```
#[must_use]
pub fn extract_toc(headings: &[Heading]) -> Vec<Heading> {
    headings
        .iter()
        .filter(|h| (2..=3).contains(&h.level))
        .cloned()
        .collect()
}
