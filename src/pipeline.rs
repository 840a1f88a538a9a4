//! High-level document pipeline.
//!
//! Runs the rewrite passes in a fixed order, assigns heading anchors and
//! validates the result. Every invocation is independent: the pipeline
//! reads one string, allocates its own line buffers and returns a fresh
//! [`PipelineResult`], so callers may run it from as many threads as
//! they like.

use crate::{
    code::backfill_code_languages,
    diagnostics::{
        Issue, Warning, check_fence_languages, check_image_alts, check_length, check_outline,
        toc_note,
    },
    headings::{Heading, assign_anchors},
    images::backfill_image_alts,
    spacing::normalize_spacing,
    table::normalize_tables,
    toc::{TocAction, has_toc_marker, migrate_legacy_toc},
    urls::normalize_media_urls,
};

/// Which optional passes a pipeline invocation applies.
///
/// The semantic passes (URL rewriting, outline migration, backfills,
/// anchors) always run; tables and spacing are the disruptive ones that
/// live editing wants to skip.
#[derive(Debug, Clone, Copy)]
pub struct FormatOptions {
    /// Normalise table rows.
    pub tables: bool,
    /// Normalise blank lines, list markers and heading spacing.
    pub spacing: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            tables: true,
            spacing: false,
        }
    }
}

/// The sole artifact of a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineResult {
    /// `true` when no blocking issues were found.
    pub is_valid: bool,
    pub issues: Vec<Issue>,
    pub warnings: Vec<Warning>,
    /// The normalised, render-ready document text.
    pub transformed_text: String,
    /// All headings in document order, each with a unique anchor id.
    pub headings: Vec<Heading>,
    /// Whether any rewrite pass changed the text.
    pub was_modified: bool,
}

impl PipelineResult {
    fn unchanged(text: &str) -> Self {
        Self {
            is_valid: true,
            issues: Vec::new(),
            warnings: Vec::new(),
            transformed_text: text.to_string(),
            headings: Vec::new(),
            was_modified: false,
        }
    }
}

fn migration_warning(action: TocAction) -> Warning {
    match action {
        TocAction::Replaced => Warning::new(
            "Replaced legacy manual Table of Contents with [TOC]",
            "Use the [TOC] marker to keep the TOC in sync with your headings",
        ),
        TocAction::Removed => Warning::new(
            "Removed legacy manual Table of Contents (inline [TOC] is already present)",
            "Keep only the [TOC] marker to avoid duplicates",
        ),
    }
}

/// Rewrite and validate a document with explicit pass selection.
///
/// Empty or whitespace-only input short-circuits to an unmodified, valid
/// result with no diagnostics. Line endings are preserved: the text is
/// split and re-joined on `\n`, so a trailing newline survives.
#[must_use]
pub fn transform_with_options(text: &str, opts: FormatOptions) -> PipelineResult {
    if text.trim().is_empty() {
        return PipelineResult::unchanged(text);
    }

    let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();
    let mut was_modified = false;
    let mut warnings = Vec::new();

    let (next, modified) = normalize_media_urls(&lines);
    lines = next;
    was_modified |= modified;

    let (next, actions) = migrate_legacy_toc(&lines);
    lines = next;
    was_modified |= !actions.is_empty();
    warnings.extend(actions.into_iter().map(migration_warning));

    let (next, modified) = backfill_image_alts(&lines);
    lines = next;
    was_modified |= modified;

    let (next, modified) = backfill_code_languages(&lines);
    lines = next;
    was_modified |= modified;

    if opts.tables {
        let (next, modified) = normalize_tables(&lines);
        lines = next;
        was_modified |= modified;
    }

    if opts.spacing {
        let (next, modified) = normalize_spacing(&lines);
        lines = next;
        was_modified |= modified;
    }

    let (next, headings, modified) = assign_anchors(&lines);
    lines = next;
    was_modified |= modified;

    let (issues, outline_warnings) = check_outline(&headings);
    warnings.extend(outline_warnings);
    warnings.extend(check_image_alts(&lines));
    warnings.extend(check_fence_languages(&lines));
    warnings.extend(check_length(&lines));
    if has_toc_marker(&lines) {
        warnings.push(toc_note());
    }

    PipelineResult {
        is_valid: issues.is_empty(),
        issues,
        warnings,
        transformed_text: lines.join("\n"),
        headings,
        was_modified,
    }
}

/// Rewrite and validate a document with the default pass selection.
///
/// This is the primary entry point: all semantic passes plus table
/// normalisation, without the spacing reflow.
#[must_use]
pub fn transform_and_validate(text: &str) -> PipelineResult {
    transform_with_options(text, FormatOptions::default())
}

/// Apply the complete pipeline, including spacing normalisation.
///
/// The save/submit path runs this before persisting a document.
#[must_use]
pub fn full_format(text: &str) -> PipelineResult {
    transform_with_options(
        text,
        FormatOptions {
            tables: true,
            spacing: true,
        },
    )
}

/// Apply only the semantic fixes and return the rewritten text.
///
/// Used by live editors: URL rewriting, outline migration, backfills and
/// anchors run, but nothing that reflows tables or whitespace under the
/// author's cursor.
#[must_use]
pub fn quick_format(text: &str) -> String {
    transform_with_options(
        text,
        FormatOptions {
            tables: false,
            spacing: false,
        },
    )
    .transformed_text
}
