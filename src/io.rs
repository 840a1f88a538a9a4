//! File helpers for rewriting Markdown documents.

use std::{fs, path::Path};

use crate::pipeline::{full_format, quick_format};

/// Rewrite a file in place with the complete pipeline.
///
/// # Errors
/// Returns an error if reading or writing the file fails.
pub fn rewrite(path: &Path) -> std::io::Result<()> {
    let text = fs::read_to_string(path)?;
    fs::write(path, full_format(&text).transformed_text)
}

/// Rewrite a file in place with semantic fixes only.
///
/// # Errors
/// Returns an error if reading or writing the file fails.
pub fn rewrite_quick(path: &Path) -> std::io::Result<()> {
    let text = fs::read_to_string(path)?;
    fs::write(path, quick_format(&text))
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn rewrite_roundtrip() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("post.md");
        fs::write(&file, "# Title\n\n![](/img/cover-art.png)\n").unwrap();
        rewrite(&file).unwrap();
        let out = fs::read_to_string(&file).unwrap();
        assert!(out.contains("# Title {#title}"));
        assert!(out.contains("![cover art](/img/cover-art.png)"));
    }

    #[test]
    fn rewrite_quick_leaves_tables_alone() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("post.md");
        fs::write(&file, "# T {#t}\n\n|a|b|\n|---|---|\n").unwrap();
        rewrite_quick(&file).unwrap();
        let out = fs::read_to_string(&file).unwrap();
        assert!(out.contains("|a|b|"));
    }
}
