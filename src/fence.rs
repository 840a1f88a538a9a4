//! Fenced code block tracking.
//!
//! Every rewrite and validation pass in this crate shares the scanner here
//! so that fenced code is never rewritten. A fence delimiter is any line
//! whose trimmed content starts with three backticks, matching what the
//! blog renderer treats as a fence.

/// Return the info string of a fence delimiter line, or `None` when the
/// line is not a delimiter.
///
/// The info string is whatever follows the backtick run, trimmed. An
/// opening fence without a language yields `Some("")`.
///
/// # Examples
///
/// ```
/// use mdpostfix::fence::fence_info;
/// assert_eq!(fence_info("```rust"), Some("rust"));
/// assert_eq!(fence_info("   ``` "), Some(""));
/// assert_eq!(fence_info("plain text"), None);
/// ```
#[must_use]
pub fn fence_info(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if !trimmed.starts_with("```") {
        return None;
    }
    Some(trimmed.trim_start_matches('`').trim())
}

/// Tracks fenced code block state across lines.
///
/// The tracker centralises fence matching so that all passes share the
/// same semantics for opening and closing blocks. Unterminated fences
/// degrade gracefully: every line after a dangling opener counts as code.
#[derive(Default)]
pub struct FenceTracker {
    in_fence: bool,
}

impl FenceTracker {
    /// Create a new tracker with no open fence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the tracker with a potential fence delimiter.
    ///
    /// Returns `true` when the line is a delimiter and toggles the open
    /// state. After observing an opening delimiter [`Self::in_fence`]
    /// reports `true`; after a closing delimiter it reports `false`.
    #[must_use]
    pub fn observe(&mut self, line: &str) -> bool {
        if fence_info(line).is_none() {
            return false;
        }
        self.in_fence = !self.in_fence;
        true
    }

    /// Check whether the tracker is currently inside a fenced block.
    #[must_use]
    pub fn in_fence(&self) -> bool {
        self.in_fence
    }
}

/// A line annotated with its fence context.
///
/// `delimiter` marks the fence lines themselves; `in_code` marks the
/// lines between an opening and a closing delimiter. A delimiter line is
/// never `in_code`.
pub struct ScannedLine<'a> {
    pub text: &'a str,
    pub delimiter: bool,
    pub in_code: bool,
}

/// Annotate each line with its fence context.
///
/// Passes that need random access to the document (such as the legacy
/// outline migrator) use this instead of streaming a [`FenceTracker`]
/// themselves.
#[must_use]
pub fn annotate(lines: &[String]) -> Vec<ScannedLine<'_>> {
    let mut tracker = FenceTracker::new();
    lines
        .iter()
        .map(|line| {
            if tracker.observe(line) {
                ScannedLine {
                    text: line,
                    delimiter: true,
                    in_code: false,
                }
            } else {
                ScannedLine {
                    text: line,
                    delimiter: false,
                    in_code: tracker.in_fence(),
                }
            }
        })
        .collect()
}
