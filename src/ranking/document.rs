//! Document structures

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentKind {
    Resume,
    JobDescription,
}

/// One raw document as supplied by the acquisition layer. The ranking engine
/// only ever borrows the content; nothing derived from it outlives a ranking
/// pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub content: String,
    pub source: String,
    pub kind: DocumentKind,
    pub word_count: usize,
    pub character_count: usize,
}

impl Document {
    pub fn new(content: String, source: String, kind: DocumentKind) -> Self {
        let word_count = content.unicode_words().count();
        let character_count = content.chars().count();

        Self {
            content,
            source,
            kind,
            word_count,
            character_count,
        }
    }

    /// File name of the source path, for report rows.
    pub fn file_name(&self) -> &str {
        std::path::Path::new(&self.source)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_metadata() {
        let doc = Document::new(
            "John Doe\nSkills: Rust, Python".to_string(),
            "cv/john.txt".to_string(),
            DocumentKind::Resume,
        );
        assert_eq!(doc.kind, DocumentKind::Resume);
        assert_eq!(doc.word_count, 5);
        assert!(doc.character_count > 0);
        assert_eq!(doc.file_name(), "john.txt");
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::new(String::new(), "empty.pdf".to_string(), DocumentKind::Resume);
        assert_eq!(doc.word_count, 0);
        assert_eq!(doc.character_count, 0);
    }
}
