pub mod markdown;
pub mod plaintext;

use crate::Sentence;
use anyhow::Result;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Markdown,
    PlainText,
}

impl FileType {
    /// Detect file type from extension
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "md" | "mdx" | "markdown" => FileType::Markdown,
            _ => FileType::PlainText,
        }
    }
}

/// Parse a file and extract its sentences for checking
pub fn parse_file(path: &Path, content: &str) -> Result<Vec<Sentence>> {
    let file_type = FileType::from_path(path);

    match file_type {
        FileType::Markdown => markdown::parse(content),
        FileType::PlainText => plaintext::parse(content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_file_type_detection() {
        assert_eq!(
            FileType::from_path(&PathBuf::from("test.md")),
            FileType::Markdown
        );
        assert_eq!(
            FileType::from_path(&PathBuf::from("notes.txt")),
            FileType::PlainText
        );
        assert_eq!(
            FileType::from_path(&PathBuf::from("README")),
            FileType::PlainText
        );
    }
}
