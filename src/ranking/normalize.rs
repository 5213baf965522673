//! Text normalization

use regex::Regex;

/// Lowercases raw document text and reduces it to the lowercase
/// alphanumeric-and-space alphabet the rest of the engine operates on.
pub struct TextNormalizer {
    non_alphanumeric: Regex,
    whitespace: Regex,
}

impl TextNormalizer {
    pub fn new() -> Self {
        let non_alphanumeric = Regex::new(r"[^a-zA-Z0-9\s]")
            .expect("Invalid character filter regex");

        let whitespace = Regex::new(r"\s+")
            .expect("Invalid whitespace regex");

        Self {
            non_alphanumeric,
            whitespace,
        }
    }

    /// Normalize raw text: lowercase, drop every character that is not a
    /// Latin letter, digit or whitespace, collapse whitespace runs to a
    /// single space and trim. Total and idempotent.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let stripped = self.non_alphanumeric.replace_all(&lowered, "");
        self.whitespace.replace_all(&stripped, " ").trim().to_string()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation_and_lowercases() {
        let normalizer = TextNormalizer::new();
        let normalized = normalizer.normalize("Rust, C++ & SQL! (5 years)");
        assert_eq!(normalized, "rust c sql 5 years");
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        let normalizer = TextNormalizer::new();
        let normalized = normalizer.normalize("  python\t\tsql\n\nrust  ");
        assert_eq!(normalized, "python sql rust");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let normalizer = TextNormalizer::new();
        let once = normalizer.normalize("Senior Engineer — Python/SQL\n\n10+ yrs");
        let twice = normalizer.normalize(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_normalize_output_alphabet() {
        let normalizer = TextNormalizer::new();
        let normalized = normalizer.normalize("Ærø café №42 <script>alert('x')</script>");
        assert!(normalized
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' '));
    }

    #[test]
    fn test_normalize_empty_input() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize(""), "");
        assert_eq!(normalizer.normalize("   \n\t "), "");
    }
}
