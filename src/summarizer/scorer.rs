//! Sentence scoring
//!
//! `score = (Σ|tfidf| / word_count) * position_weight`, plus tie-break noise
//! for ranking. The noise-free score is kept alongside the noised one.

use super::noise::NoiseSource;
use crate::types::{PositionWeights, Sentence};
use crate::weighting::TermVector;
use serde::{Deserialize, Serialize};

/// Score of one sentence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredSentence {
    /// Global sentence index
    pub index: usize,
    /// Noise-free score
    pub score: f64,
    /// Score used for ranking (`score` + noise)
    pub noised_score: f64,
}

/// Computes sentence importance scores
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    position_weights: PositionWeights,
}

impl Scorer {
    /// Create a scorer with the given positional bias
    pub fn new(position_weights: PositionWeights) -> Self {
        Self { position_weights }
    }

    /// Noise-free score of a single sentence.
    ///
    /// `word_count` is floored at 1, so the result is always finite and
    /// non-negative for non-negative position weights.
    pub fn score(&self, vector: &TermVector, word_count: usize, index: usize, total: usize) -> f64 {
        let base = vector.l1_norm() / word_count.max(1) as f64;
        base * self.position_weights.weight_for(index, total)
    }

    /// Score every sentence, drawing one noise sample per sentence
    pub fn score_all<N: NoiseSource + ?Sized>(
        &self,
        sentences: &[Sentence],
        vectors: &[TermVector],
        noise: &mut N,
    ) -> Vec<ScoredSentence> {
        let total = sentences.len();
        sentences
            .iter()
            .zip(vectors)
            .map(|(sentence, vector)| {
                let score = self.score(vector, sentence.word_count, sentence.index, total);
                ScoredSentence {
                    index: sentence.index,
                    score,
                    noised_score: score + noise.sample(),
                }
            })
            .collect()
    }
}
