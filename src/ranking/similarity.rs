//! Pairwise term-frequency cosine similarity

use ndarray::Array1;
use std::collections::HashMap;

/// Cosine similarity between two normalized text fragments, in [0, 1].
///
/// The vocabulary is local to the pair: it is rebuilt from the union of the
/// two fragments on every call and never shared across comparisons. Caching a
/// global vocabulary would change which terms are in scope per comparison and
/// shift scores.
///
/// Either fragment being empty short-circuits to 0.0; a zero vector has no
/// defined cosine.
pub fn similarity(a: &str, b: &str) -> f32 {
    if a.trim().is_empty() || b.trim().is_empty() {
        return 0.0;
    }

    let vocabulary = pair_vocabulary(a, b);
    let vector_a = term_frequency_vector(a, &vocabulary);
    let vector_b = term_frequency_vector(b, &vocabulary);

    cosine(&vector_a, &vector_b)
}

/// Index every distinct token appearing in either fragment.
fn pair_vocabulary<'a>(a: &'a str, b: &'a str) -> HashMap<&'a str, usize> {
    let mut vocabulary = HashMap::new();
    for token in a.split_whitespace().chain(b.split_whitespace()) {
        let next_index = vocabulary.len();
        vocabulary.entry(token).or_insert(next_index);
    }
    vocabulary
}

fn term_frequency_vector(text: &str, vocabulary: &HashMap<&str, usize>) -> Array1<f32> {
    let mut vector = Array1::zeros(vocabulary.len());
    for token in text.split_whitespace() {
        if let Some(&index) = vocabulary.get(token) {
            vector[index] += 1.0;
        }
    }
    vector
}

fn cosine(a: &Array1<f32>, b: &Array1<f32>) -> f32 {
    let norm_product = a.dot(a).sqrt() * b.dot(b).sqrt();
    if norm_product == 0.0 {
        return 0.0;
    }
    (a.dot(b) / norm_product).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_fragments_score_one() {
        let score = similarity("python sql pipelines", "python sql pipelines");
        assert!((score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_disjoint_fragments_score_zero() {
        let score = similarity("python sql", "haskell prolog");
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_similarity_is_symmetric() {
        let pairs = [
            ("python sql rust", "sql rust"),
            ("a b b c", "b c d"),
            ("one token", "a rather longer fragment with one shared token"),
        ];
        for (a, b) in pairs {
            assert_eq!(similarity(a, b), similarity(b, a));
        }
    }

    #[test]
    fn test_empty_fragment_scores_zero() {
        assert_eq!(similarity("", "python sql"), 0.0);
        assert_eq!(similarity("python sql", ""), 0.0);
        assert_eq!(similarity("", ""), 0.0);
    }

    #[test]
    fn test_similarity_never_nan() {
        let score = similarity("   ", "python");
        assert!(!score.is_nan());
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_partial_overlap_is_strictly_between() {
        let score = similarity("python sql", "python java");
        assert!(score > 0.0 && score < 1.0);
    }

    #[test]
    fn test_term_frequency_weighting() {
        // Repeated shared terms pull the vectors closer than a single mention.
        let repeated = similarity("python python python sql", "python python sql");
        let single = similarity("python sql rust go", "python java c ruby");
        assert!(repeated > single);
    }
}
