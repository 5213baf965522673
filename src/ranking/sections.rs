//! Labeled-section extraction
//!
//! Resumes and job descriptions carry their structure as headed blocks
//! ("Skills:", "Work Experience", ...). Each label owns a small table of
//! header synonyms; the matcher captures the block body up to the next blank
//! line or the end of the text.

use regex::{Regex, RegexBuilder};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionLabel {
    Skills,
    Experience,
    Education,
}

impl SectionLabel {
    pub const ALL: [SectionLabel; 3] = [
        SectionLabel::Skills,
        SectionLabel::Experience,
        SectionLabel::Education,
    ];

    /// Header synonyms recognized for this label.
    fn synonyms(&self) -> &'static [&'static str] {
        match self {
            SectionLabel::Skills => &["skills", "technical skills", "key skills"],
            SectionLabel::Experience => &[
                "work experience",
                "professional experience",
                "employment history",
            ],
            SectionLabel::Education => &["education", "academic background", "qualifications"],
        }
    }
}

impl fmt::Display for SectionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionLabel::Skills => write!(f, "skills"),
            SectionLabel::Experience => write!(f, "experience"),
            SectionLabel::Education => write!(f, "education"),
        }
    }
}

pub struct SectionExtractor {
    patterns: Vec<(SectionLabel, Regex)>,
}

impl SectionExtractor {
    pub fn new() -> Self {
        let patterns = SectionLabel::ALL
            .iter()
            .map(|&label| {
                // Header synonym, optional colons, then a lazy body capture
                // terminated by a blank line or the end of the text.
                let pattern = format!(r"(?:{})\s*:*(.*?)(?:\n\n|\z)", label.synonyms().join("|"));
                let regex = RegexBuilder::new(&pattern)
                    .case_insensitive(true)
                    .dot_matches_new_line(true)
                    .build()
                    .expect("Invalid section pattern");
                (label, regex)
            })
            .collect();

        Self { patterns }
    }

    /// Return the body of the first matching labeled block, trimmed, or an
    /// empty string when the text has no such header. Callers decide the
    /// fallback policy for absent sections.
    pub fn extract(&self, text: &str, label: SectionLabel) -> String {
        self.patterns
            .iter()
            .find(|(candidate, _)| *candidate == label)
            .and_then(|(_, regex)| regex.captures(text))
            .and_then(|captures| captures.get(1))
            .map(|body| body.as_str().trim().to_string())
            .unwrap_or_default()
    }
}

impl Default for SectionExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_skills_block() {
        let extractor = SectionExtractor::new();
        let text = "skills: python sql rust\n\nwork experience: data pipelines";
        assert_eq!(
            extractor.extract(text, SectionLabel::Skills),
            "python sql rust"
        );
    }

    #[test]
    fn test_extract_is_case_insensitive() {
        let extractor = SectionExtractor::new();
        let text = "Technical Skills:\nPython, SQL\n\nOther";
        assert_eq!(
            extractor.extract(text, SectionLabel::Skills),
            "Python, SQL"
        );
    }

    #[test]
    fn test_extract_recognizes_synonyms() {
        let extractor = SectionExtractor::new();
        assert_eq!(
            extractor.extract("employment history: acme corp", SectionLabel::Experience),
            "acme corp"
        );
        assert_eq!(
            extractor.extract("academic background: bsc physics", SectionLabel::Education),
            "bsc physics"
        );
    }

    #[test]
    fn test_extract_body_spans_lines() {
        let extractor = SectionExtractor::new();
        let text = "education:\nbsc computer science\nmsc data science\n\nreferences";
        assert_eq!(
            extractor.extract(text, SectionLabel::Education),
            "bsc computer science\nmsc data science"
        );
    }

    #[test]
    fn test_extract_runs_to_end_without_blank_line() {
        let extractor = SectionExtractor::new();
        let text = "skills python sql work experience data pipelines";
        assert_eq!(
            extractor.extract(text, SectionLabel::Skills),
            "python sql work experience data pipelines"
        );
    }

    #[test]
    fn test_extract_first_match_wins() {
        let extractor = SectionExtractor::new();
        let text = "skills: rust\n\nkey skills: cobol\n\n";
        assert_eq!(extractor.extract(text, SectionLabel::Skills), "rust");
    }

    #[test]
    fn test_extract_missing_section_is_empty() {
        let extractor = SectionExtractor::new();
        let text = "a plain paragraph with no headers at all";
        for label in SectionLabel::ALL {
            assert_eq!(extractor.extract(text, label), "");
        }
    }
}
