//! Text extraction from various file formats
//!
//! The ranking engine consumes decoded text only; everything about binary
//! formats ends here. A document that decodes to no extractable text yields
//! an empty string, never an error, so one unreadable page cannot take down a
//! batch.

use crate::error::{Result, ScreenerError};
use pulldown_cmark::{Event, Parser, Tag};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(ScreenerError::Io)?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ScreenerError::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })?;

        // A scanned or image-only PDF decodes to whitespace; report it as
        // empty rather than handing noise to the engine.
        if text.trim().is_empty() {
            return Ok(String::new());
        }
        Ok(text)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await.map_err(ScreenerError::Io)?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown = fs::read_to_string(path).await.map_err(ScreenerError::Io)?;
        Ok(markdown_to_text(&markdown))
    }
}

/// Strip markdown formatting, keeping the visible text and block boundaries.
fn markdown_to_text(markdown: &str) -> String {
    let mut text = String::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Text(body) | Event::Code(body) => text.push_str(&body),
            Event::SoftBreak => text.push(' '),
            Event::HardBreak => text.push('\n'),
            // Blank line between blocks, so headed sections keep their shape
            Event::End(Tag::Paragraph | Tag::Heading(..)) => text.push_str("\n\n"),
            Event::End(Tag::Item | Tag::TableRow | Tag::CodeBlock(_)) => text.push('\n'),
            _ => {}
        }
    }

    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_to_text_strips_formatting() {
        let markdown = "# John Doe\n\n**Skills:** `Rust`, *Python*\n\n- SQL\n- Airflow\n";
        let text = markdown_to_text(markdown);
        assert!(text.contains("John Doe"));
        assert!(text.contains("Skills:"));
        assert!(text.contains("Rust"));
        assert!(text.contains("SQL"));
        assert!(!text.contains("**"));
        assert!(!text.contains('#'));
        assert!(!text.contains('`'));
    }

    #[test]
    fn test_markdown_to_text_keeps_block_boundaries() {
        let text = markdown_to_text("first paragraph\n\nsecond paragraph");
        assert!(text.contains('\n'));
    }
}
