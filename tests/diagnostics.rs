//! Integration tests for the validation report.

use mdpostfix::{IssueKind, transform_and_validate};

#[macro_use]
mod prelude;
use prelude::*;

#[test]
fn missing_h1_blocks_validation() {
    let result = transform_and_validate("## Section {#s}\n\nBody text here.\n");
    assert!(!result.is_valid);
    assert_eq!(result.issues.len(), 1);
    assert_eq!(result.issues[0].kind, IssueKind::Error);
}

#[test]
fn headingless_document_is_critical() {
    let result = transform_and_validate("Just a paragraph of text.\n");
    assert!(!result.is_valid);
    assert_eq!(result.issues[0].kind, IssueKind::Critical);
}

#[test]
fn clean_outline_has_no_outline_diagnostics() {
    let result = transform_and_validate("# A\n\n## B\n\n### C\n");
    assert!(result.is_valid);
    assert!(
        !result
            .warnings
            .iter()
            .any(|w| w.message.contains("hierarchy") || w.message.contains("H1"))
    );
}

#[test]
fn second_h1_is_advisory_not_blocking() {
    let result = transform_and_validate("# A\n\nText.\n\n# B\n");
    assert!(result.is_valid);
    assert!(
        result
            .warnings
            .iter()
            .any(|w| w.message.contains("2 H1 headings"))
    );
}

#[test]
fn hierarchy_skip_warns_with_expected_level() {
    let result = transform_and_validate("# A\n\n### C\n");
    assert!(
        result
            .warnings
            .iter()
            .any(|w| w.suggestion.contains("Use H2 instead of H3"))
    );
}

#[rstest]
#[case(50, "very short")]
#[case(250, "might be too short")]
fn short_content_warns(#[case] words: usize, #[case] needle: &str) {
    let body = "word ".repeat(words);
    let input = format!("# T {{#t}}\n\n{body}\n");
    let result = transform_and_validate(&input);
    assert!(
        result.warnings.iter().any(|w| w.message.contains(needle)),
        "expected a '{needle}' warning at {words} words"
    );
}

#[test]
fn long_content_draws_no_length_warning() {
    let body = "word ".repeat(400);
    let input = format!("# T {{#t}}\n\n{body}\n");
    let result = transform_and_validate(&input);
    assert!(
        !result
            .warnings
            .iter()
            .any(|w| w.message.contains("short"))
    );
}

#[test]
fn issues_and_warnings_are_data_not_panics() {
    // Deliberately malformed markup must degrade gracefully.
    for input in [
        "```\nunterminated fence",
        "|||||\n",
        "# {#}\n",
        "####### not a heading\n",
        "![](\n",
    ] {
        let _ = transform_and_validate(input);
    }
}
