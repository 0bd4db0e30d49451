//! Term weighting: sentence term counts and TF-IDF vectors.
//!
//! Each sentence of a document is treated as one "document" of the corpus.
//! Weighting is split into two stage traits so the counting rules and the
//! IDF formula can be swapped and tested independently:
//!
//! - [`TermCounter`]: normalized sentences → [`CountMatrix`] (raw term
//!   frequencies over a per-request vocabulary, stopwords excluded).
//! - [`TfIdfWeighter`]: [`CountMatrix`] → one [`TermVector`] per sentence.

pub mod counter;
pub mod tfidf;

pub use counter::StopwordTermCounter;
pub use tfidf::{SmoothedTfIdf, UnsmoothedTfIdf};

use crate::types::StringPool;

// ============================================================================
// Artifacts
// ============================================================================

/// Raw term frequencies of a single sentence, sorted by term id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermCounts {
    entries: Vec<(u32, u32)>,
}

impl TermCounts {
    /// Build from `(term id, count)` pairs; zero counts are dropped
    pub fn from_pairs(pairs: impl IntoIterator<Item = (u32, u32)>) -> Self {
        let mut entries: Vec<(u32, u32)> = pairs.into_iter().filter(|&(_, c)| c > 0).collect();
        entries.sort_unstable_by_key(|&(id, _)| id);
        Self { entries }
    }

    /// Count of a term in this sentence (0 when absent)
    pub fn get(&self, term: u32) -> u32 {
        self.entries
            .binary_search_by_key(&term, |&(id, _)| id)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0)
    }

    /// Iterate `(term id, count)` pairs in term-id order
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.entries.iter().copied()
    }

    /// Keep only the terms accepted by `keep`
    pub fn retain(&mut self, mut keep: impl FnMut(u32) -> bool) {
        self.entries.retain(|&(id, _)| keep(id));
    }

    /// Number of distinct terms
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no term was counted
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Document-term count matrix for one request
#[derive(Debug, Clone, Default)]
pub struct CountMatrix {
    /// Vocabulary built from all sentences
    pub vocabulary: StringPool,
    /// One row per sentence, in input order
    pub rows: Vec<TermCounts>,
    /// Number of sentences containing each term, indexed by term id
    /// (0 for terms pruned by a document-frequency cutoff)
    pub document_frequency: Vec<u32>,
}

impl CountMatrix {
    /// Number of sentences (corpus size N)
    pub fn num_documents(&self) -> usize {
        self.rows.len()
    }

    /// Document frequency of a term
    pub fn df(&self, term: u32) -> u32 {
        self.document_frequency
            .get(term as usize)
            .copied()
            .unwrap_or(0)
    }
}

/// Sparse TF-IDF vector of one sentence, sorted by term id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    entries: Vec<(u32, f64)>,
}

impl TermVector {
    /// Build from `(term id, weight)` pairs
    pub fn from_pairs(pairs: impl IntoIterator<Item = (u32, f64)>) -> Self {
        let mut entries: Vec<(u32, f64)> = pairs.into_iter().collect();
        entries.sort_unstable_by_key(|&(id, _)| id);
        Self { entries }
    }

    /// Weight of a term (0.0 when absent)
    pub fn get(&self, term: u32) -> f64 {
        self.entries
            .binary_search_by_key(&term, |&(id, _)| id)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0.0)
    }

    /// Iterate `(term id, weight)` pairs in term-id order
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Sum of absolute weights
    pub fn l1_norm(&self) -> f64 {
        self.entries.iter().map(|&(_, w)| w.abs()).sum()
    }

    /// Number of non-zero terms
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the vector has no terms
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// Stage traits
// ============================================================================

/// Counts vocabulary terms in each sentence.
///
/// # Contract
///
/// - **Input**: sentences already normalized (lowercased), in document order.
/// - **Output**: a [`CountMatrix`] with exactly one row per input sentence,
///   in the same order. Stopwords never enter a row.
/// - **Deterministic**: same input → same output.
pub trait TermCounter {
    /// Count terms across the sentence set
    fn count(&self, sentences: &[String]) -> CountMatrix;
}

/// Turns raw term counts into TF-IDF weights.
///
/// Implementors only choose the IDF formula; `weigh` multiplies every raw
/// count by its term's IDF.
///
/// # Contract
///
/// - `idf` must be finite for every `df` in `0..=n`, never divide by zero,
///   and be monotonically non-increasing in `df`.
/// - `weigh` returns one vector per matrix row, in row order.
pub trait TfIdfWeighter {
    /// Inverse document frequency of a term found in `df` of `n` sentences
    fn idf(&self, df: u32, n: usize) -> f64;

    /// Weight every row of the matrix
    fn weigh(&self, matrix: &CountMatrix) -> Vec<TermVector> {
        let n = matrix.num_documents();
        let idf: Vec<f64> = matrix
            .document_frequency
            .iter()
            .map(|&df| self.idf(df, n))
            .collect();

        matrix
            .rows
            .iter()
            .map(|row| {
                TermVector::from_pairs(
                    row.iter()
                        .map(|(term, count)| (term, count as f64 * idf[term as usize])),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_counts_sorted_and_sparse() {
        let counts = TermCounts::from_pairs(vec![(3, 1), (1, 2), (2, 0)]);

        assert_eq!(counts.len(), 2);
        assert_eq!(counts.get(1), 2);
        assert_eq!(counts.get(2), 0);
        assert_eq!(counts.iter().collect::<Vec<_>>(), vec![(1, 2), (3, 1)]);
    }

    #[test]
    fn test_term_vector_l1() {
        let vector = TermVector::from_pairs(vec![(0, 1.5), (2, -0.5)]);

        assert!((vector.l1_norm() - 2.0).abs() < 1e-12);
        assert_eq!(vector.get(2), -0.5);
        assert_eq!(vector.get(7), 0.0);
    }

    struct FlatIdf;

    impl TfIdfWeighter for FlatIdf {
        fn idf(&self, _df: u32, _n: usize) -> f64 {
            2.0
        }
    }

    #[test]
    fn test_default_weigh_multiplies_counts() {
        let mut vocabulary = StringPool::new();
        let cat = vocabulary.intern("cat");
        let dog = vocabulary.intern("dog");

        let matrix = CountMatrix {
            vocabulary,
            rows: vec![
                TermCounts::from_pairs(vec![(cat, 2)]),
                TermCounts::from_pairs(vec![(dog, 1)]),
                TermCounts::default(),
            ],
            document_frequency: vec![1, 1],
        };

        let vectors = FlatIdf.weigh(&matrix);
        assert_eq!(vectors.len(), 3);
        assert_eq!(vectors[0].get(cat), 4.0);
        assert_eq!(vectors[1].get(dog), 2.0);
        assert!(vectors[2].is_empty());
    }
}
