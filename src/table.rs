//! Markdown table row normalisation.
//!
//! Rows that belong to a table are rebuilt with exactly one space of
//! padding around each cell. A row only counts as part of a table when
//! its neighbourhood says so: the previous or next line must be a
//! separator row or itself split into two or more cells. Stray pipes in
//! prose never trigger a rewrite, and separator rows pass through
//! byte-identical so alignment markers survive.

use std::sync::LazyLock;

use regex::Regex;

use crate::fence::FenceTracker;

pub(crate) static SEPARATOR_RE: LazyLock<Regex> =
    crate::lazy_regex!(r"^\|[\s\-|:]+\|$", "valid separator regex");

/// Split a line on pipes and trim each cell.
#[must_use]
pub fn split_cells(line: &str) -> Vec<String> {
    line.trim().split('|').map(|c| c.trim().to_string()).collect()
}

/// Check whether a trimmed line is a table separator row.
#[must_use]
pub fn is_separator_row(trimmed: &str) -> bool {
    SEPARATOR_RE.is_match(trimmed)
}

/// A candidate row contains a pipe and at least two non-empty cells.
fn is_candidate_row(trimmed: &str) -> bool {
    trimmed.contains('|')
        && split_cells(trimmed).iter().filter(|c| !c.is_empty()).count() >= 2
}

/// A neighbour anchors a candidate when it is recognisably tabular.
fn anchors_table(trimmed: &str) -> bool {
    is_separator_row(trimmed) || is_candidate_row(trimmed)
}

/// Rebuild a row as `| cell | cell |` with single-space padding.
fn rebuild_row(trimmed: &str) -> String {
    let mut cells = split_cells(trimmed);
    while cells.first().is_some_and(String::is_empty) {
        cells.remove(0);
    }
    while cells.last().is_some_and(String::is_empty) {
        cells.pop();
    }
    format!("| {} |", cells.join(" | "))
}

/// Normalise table rows that sit next to other table rows.
///
/// # Examples
///
/// ```
/// use mdpostfix::table::normalize_tables;
/// let lines = vec!["|a|b  |c|".to_string(), "|---|---|---|".to_string()];
/// let (out, modified) = normalize_tables(&lines);
/// assert!(modified);
/// assert_eq!(out[0], "| a | b | c |");
/// assert_eq!(out[1], "|---|---|---|");
/// ```
#[must_use]
pub fn normalize_tables(lines: &[String]) -> (Vec<String>, bool) {
    let mut tracker = FenceTracker::new();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut modified = false;

    for (idx, line) in lines.iter().enumerate() {
        if tracker.observe(line) || tracker.in_fence() {
            out.push(line.clone());
            continue;
        }

        let trimmed = line.trim();
        if is_separator_row(trimmed) {
            out.push(line.clone());
            continue;
        }

        if is_candidate_row(trimmed) {
            let prev_anchors = out.last().is_some_and(|l| anchors_table(l.trim()));
            let next_anchors = lines
                .get(idx + 1)
                .is_some_and(|l| anchors_table(l.trim()));
            if prev_anchors || next_anchors {
                let rebuilt = rebuild_row(trimmed);
                if rebuilt != *line {
                    modified = true;
                }
                out.push(rebuilt);
                continue;
            }
        }

        out.push(line.clone());
    }

    (out, modified)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("|---|---|")]
    #[case("| --- | :-: |")]
    #[case("|:--|--:|")]
    fn recognises_separators(#[case] row: &str) {
        assert!(is_separator_row(row));
    }

    #[test]
    fn normalises_rows_around_separator() {
        let lines = vec![
            "|a|b  |c|".to_string(),
            "|---|---|---|".to_string(),
            "|1|2|3|".to_string(),
        ];
        let (out, modified) = normalize_tables(&lines);
        assert!(modified);
        assert_eq!(out, vec!["| a | b | c |", "|---|---|---|", "| 1 | 2 | 3 |"]);
    }

    #[test]
    fn separator_rows_pass_through_byte_identical() {
        let lines = vec!["| a | b |".to_string(), "  | --- | --- |".to_string()];
        let (out, _) = normalize_tables(&lines);
        assert_eq!(out[1], "  | --- | --- |");
    }

    #[test]
    fn lone_pipe_in_prose_is_untouched() {
        let lines = vec!["either | or".to_string(), "plain text".to_string()];
        let (out, modified) = normalize_tables(&lines);
        assert!(!modified);
        assert_eq!(out, lines);
    }

    #[test]
    fn adjacent_bare_rows_normalise_each_other() {
        let lines = vec!["a|b".to_string(), "1|2".to_string()];
        let (out, modified) = normalize_tables(&lines);
        assert!(modified);
        assert_eq!(out, vec!["| a | b |", "| 1 | 2 |"]);
    }

    #[test]
    fn skips_fenced_code() {
        let lines = vec![
            "```".to_string(),
            "|a|b|".to_string(),
            "|---|---|".to_string(),
            "```".to_string(),
        ];
        let (out, modified) = normalize_tables(&lines);
        assert!(!modified);
        assert_eq!(out, lines);
    }

    #[test]
    fn already_normalised_rows_report_no_change() {
        let lines = vec!["| a | b |".to_string(), "| --- | --- |".to_string()];
        let (out, modified) = normalize_tables(&lines);
        assert!(!modified);
        assert_eq!(out, lines);
    }

    #[test]
    fn interior_empty_cells_survive() {
        let lines = vec!["|a||b|".to_string(), "|---|---|---|".to_string()];
        let (out, _) = normalize_tables(&lines);
        assert_eq!(out[0], "| a |  | b |");
    }
}
