//! Utility helpers shared across integration tests.

/// Build a `Vec<String>` from a list of string slices.
///
/// This macro is primarily used in tests to reduce boilerplate when
/// constructing example documents or expected line collections.
macro_rules! lines_vec {
    ($($line:expr),* $(,)?) => {
        vec![$($line.to_string()),*]
    };
}

/// Assert that re-running the default pipeline on its own output is a
/// fixed point.
pub fn assert_idempotent(text: &str) {
    let once = mdpostfix::transform_and_validate(text);
    let twice = mdpostfix::transform_and_validate(&once.transformed_text);
    assert_eq!(
        once.transformed_text, twice.transformed_text,
        "pipeline output is not a fixed point"
    );
    assert!(!twice.was_modified, "second run reported modifications");
}

/// Assert the same fixed-point property for the full-format wrapper.
pub fn assert_full_format_idempotent(text: &str) {
    let once = mdpostfix::full_format(text);
    let twice = mdpostfix::full_format(&once.transformed_text);
    assert_eq!(
        once.transformed_text, twice.transformed_text,
        "full format output is not a fixed point"
    );
    assert!(!twice.was_modified, "second run reported modifications");
}
