//! Top-N sentence selection for summarization
//!
//! Ranks sentences by their noised score and keeps the best ones, returned
//! in document order.

use super::scorer::ScoredSentence;
use crate::errors::Result;
use crate::types::{SelectionTarget, SummarizerConfig};

/// Score-ranked sentence selector
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceSelector;

impl SentenceSelector {
    /// Create a new selector
    pub fn new() -> Self {
        Self
    }

    /// Sentence indices ordered by noised score, highest first.
    ///
    /// The sort is stable, so sentences with exactly equal noised scores
    /// keep document order.
    pub fn rank(&self, scored: &[ScoredSentence]) -> Vec<usize> {
        let mut order: Vec<&ScoredSentence> = scored.iter().collect();
        order.sort_by(|a, b| b.noised_score.total_cmp(&a.noised_score));
        order.into_iter().map(|s| s.index).collect()
    }

    /// Pick the top `count` sentences and return their indices in ascending
    /// (document) order
    pub fn select(&self, scored: &[ScoredSentence], count: usize) -> Vec<usize> {
        let mut top: Vec<usize> = self.rank(scored).into_iter().take(count).collect();
        top.sort_unstable();
        top
    }

    /// Resolve a [`SelectionTarget`] against the document, then select
    pub fn select_target(
        &self,
        scored: &[ScoredSentence],
        target: SelectionTarget,
        config: &SummarizerConfig,
    ) -> Result<Vec<usize>> {
        let count = target.resolve(scored.len(), config)?;
        Ok(self.select(scored, count))
    }
}
