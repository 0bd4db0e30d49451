//! Core types for rapid_summarizer
//!
//! This module defines the fundamental data structures used throughout the library,
//! including vocabulary interning, sentences, summary modes, and configuration.

use crate::errors::{Result, SummarizeError};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ============================================================================
// String Interning
// ============================================================================

/// A pool for string interning, used as the per-document term vocabulary.
///
/// Each unique term is stored once and addressed by a dense `u32` id, so term
/// vectors can be keyed by integer instead of by string.
#[derive(Debug, Default, Clone)]
pub struct StringPool {
    /// Maps strings to their interned IDs
    string_to_id: FxHashMap<Arc<str>, u32>,
    /// Maps IDs back to strings
    id_to_string: Vec<Arc<str>>,
}

impl StringPool {
    /// Create a new empty string pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a string pool with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            string_to_id: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            id_to_string: Vec::with_capacity(capacity),
        }
    }

    /// Intern a string, returning its ID
    pub fn intern(&mut self, s: &str) -> u32 {
        if let Some(&id) = self.string_to_id.get(s) {
            return id;
        }

        let id = self.id_to_string.len() as u32;
        let arc: Arc<str> = s.into();
        self.string_to_id.insert(arc.clone(), id);
        self.id_to_string.push(arc);
        id
    }

    /// Look up the ID of an already-interned string
    pub fn id_of(&self, s: &str) -> Option<u32> {
        self.string_to_id.get(s).copied()
    }

    /// Get a string by its ID
    pub fn get(&self, id: u32) -> Option<&str> {
        self.id_to_string.get(id as usize).map(|s| s.as_ref())
    }

    /// Get the number of unique strings in the pool
    pub fn len(&self) -> usize {
        self.id_to_string.len()
    }

    /// Check if the pool is empty
    pub fn is_empty(&self) -> bool {
        self.id_to_string.is_empty()
    }
}

// ============================================================================
// Sentence
// ============================================================================

/// A sentence from the input text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    /// The sentence text, trimmed, with original casing and punctuation
    pub text: String,
    /// Global sentence index (0-based, continuous across paragraphs)
    pub index: usize,
    /// Index of the paragraph this sentence belongs to
    pub paragraph_index: usize,
    /// Number of word tokens (never below 1)
    pub word_count: usize,
    /// Relevance score for summarization (noise-free)
    pub score: f64,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(text: impl Into<String>, index: usize, paragraph_index: usize) -> Self {
        Self {
            text: text.into(),
            index,
            paragraph_index,
            word_count: 1,
            score: 0.0,
        }
    }
}

/// Paragraphs and sentences of one document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Segmentation {
    /// Trimmed paragraph texts in document order
    pub paragraphs: Vec<String>,
    /// Sentences in document order
    pub sentences: Vec<Sentence>,
}

impl Segmentation {
    /// Number of sentences
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Check if there are no sentences
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Paragraph index of every sentence, by global sentence index
    pub fn sentence_to_paragraph(&self) -> Vec<usize> {
        self.sentences.iter().map(|s| s.paragraph_index).collect()
    }
}

// ============================================================================
// Summary Length
// ============================================================================

/// Ratio presets controlling how many sentences a summary keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryLength {
    /// Roughly a quarter of the sentences
    Short,
    /// Roughly 40% of the sentences
    #[default]
    Medium,
    /// Roughly 60% of the sentences
    Long,
}

impl SummaryLength {
    fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "short" => SummaryLength::Short,
            "long" => SummaryLength::Long,
            _ => SummaryLength::Medium,
        }
    }

    /// Get the lowercase name of this length
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryLength::Short => "short",
            SummaryLength::Medium => "medium",
            SummaryLength::Long => "long",
        }
    }
}

/// Unrecognized values fall back to [`SummaryLength::Medium`].
impl std::str::FromStr for SummaryLength {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Ok(SummaryLength::parse(value))
    }
}

// ============================================================================
// Summary Mode
// ============================================================================

/// Output mode requested by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryMode {
    /// Flowing paragraphs, sentence count from a ratio
    #[default]
    Paragraph,
    /// Bullet points, sentence count from a ratio
    Keypoints,
    /// Flowing paragraphs, explicit sentence count
    Custom,
}

impl SummaryMode {
    /// Get the canonical lowercase tag of this mode
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryMode::Paragraph => "paragraph",
            SummaryMode::Keypoints => "keypoints",
            SummaryMode::Custom => "custom",
        }
    }

    /// How blocks produced in this mode are rendered
    pub fn style(&self) -> BlockStyle {
        match self {
            SummaryMode::Paragraph | SummaryMode::Custom => BlockStyle::Prose,
            SummaryMode::Keypoints => BlockStyle::Bullets,
        }
    }
}

impl std::str::FromStr for SummaryMode {
    type Err = SummarizeError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "paragraph" => Ok(SummaryMode::Paragraph),
            "keypoints" | "bullet" | "bullets" => Ok(SummaryMode::Keypoints),
            "custom" => Ok(SummaryMode::Custom),
            _ => Err(SummarizeError::unknown_mode(value)),
        }
    }
}

/// Formatting of the sentences inside one paragraph block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockStyle {
    /// Sentences joined by a single space
    #[default]
    Prose,
    /// One bullet-prefixed sentence per line
    Bullets,
}

impl BlockStyle {
    /// Marker placed in front of every bullet
    pub const BULLET: &'static str = "\u{2022} ";
}

// ============================================================================
// Selection Target
// ============================================================================

/// How many sentences to select
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionTarget {
    /// A fraction of the document, from a length preset
    Ratio(SummaryLength),
    /// An explicit number of sentences
    Count(usize),
}

impl SelectionTarget {
    /// Resolve to a concrete sentence count for a document of `total` sentences.
    ///
    /// Ratios give `max(1, round(total * f))`; explicit counts are clamped
    /// to `total`. A count below 1 is rejected.
    pub fn resolve(&self, total: usize, config: &SummarizerConfig) -> Result<usize> {
        match *self {
            SelectionTarget::Ratio(length) => {
                let fraction = config.fraction(length);
                let count = (total as f64 * fraction).round() as usize;
                Ok(count.max(1))
            }
            SelectionTarget::Count(n) => {
                if n < 1 {
                    return Err(SummarizeError::invalid_count(format!(
                        "custom count must be >= 1, got {}",
                        n
                    )));
                }
                Ok(n.min(total))
            }
        }
    }
}

impl Default for SelectionTarget {
    fn default() -> Self {
        SelectionTarget::Ratio(SummaryLength::Medium)
    }
}

/// A validated summary request: output mode plus sentence-count target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryPlan {
    pub mode: SummaryMode,
    pub target: SelectionTarget,
}

impl SummaryPlan {
    /// Flowing paragraphs sized by a length preset
    pub fn paragraph(length: SummaryLength) -> Self {
        Self {
            mode: SummaryMode::Paragraph,
            target: SelectionTarget::Ratio(length),
        }
    }

    /// Bullet points sized by a length preset
    pub fn keypoints(length: SummaryLength) -> Self {
        Self {
            mode: SummaryMode::Keypoints,
            target: SelectionTarget::Ratio(length),
        }
    }

    /// Flowing paragraphs with an explicit sentence count
    pub fn custom(count: usize) -> Self {
        Self {
            mode: SummaryMode::Custom,
            target: SelectionTarget::Count(count),
        }
    }
}

impl Default for SummaryPlan {
    fn default() -> Self {
        Self::paragraph(SummaryLength::Medium)
    }
}

// ============================================================================
// Position Weights
// ============================================================================

/// Positional bias applied to sentence scores
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionWeights {
    /// Weight of the first sentence
    pub first: f64,
    /// Weight of the last sentence (only when there is more than one)
    pub last: f64,
    /// Weight of every other sentence
    pub interior: f64,
}

impl Default for PositionWeights {
    fn default() -> Self {
        Self {
            first: 1.5,
            last: 1.3,
            interior: 1.1,
        }
    }
}

impl PositionWeights {
    /// Weight for the sentence at `index` among `total` sentences
    pub fn weight_for(&self, index: usize, total: usize) -> f64 {
        if index == 0 {
            self.first
        } else if total > 1 && index == total - 1 {
            self.last
        } else {
            self.interior
        }
    }

    /// Disable positional bias entirely
    pub fn uniform() -> Self {
        Self {
            first: 1.0,
            last: 1.0,
            interior: 1.0,
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for summarization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Language code for stopwords (e.g., "en", "de", "fr")
    pub language: String,
    /// Additional stopwords (extends the built-in list)
    pub stopwords: Vec<String>,
    /// Minimum token length in chars for a word to count
    pub min_token_length: usize,
    /// Minimum document frequency (fraction of sentences) for a term to be kept
    pub min_df: f64,
    /// Positional bias weights
    pub position_weights: PositionWeights,
    /// Upper bound of the tie-break noise added to each score
    pub noise_bound: f64,
    /// Fraction of sentences kept by [`SummaryLength::Short`]
    pub short_ratio: f64,
    /// Fraction of sentences kept by [`SummaryLength::Medium`]
    pub medium_ratio: f64,
    /// Fraction of sentences kept by [`SummaryLength::Long`]
    pub long_ratio: f64,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            stopwords: Vec::new(),
            min_token_length: 2,
            min_df: 0.0,
            position_weights: PositionWeights::default(),
            noise_bound: 0.005,
            short_ratio: 0.25,
            medium_ratio: 0.4,
            long_ratio: 0.6,
        }
    }
}

impl SummarizerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of sentences kept for a length preset
    pub fn fraction(&self, length: SummaryLength) -> f64 {
        match length {
            SummaryLength::Short => self.short_ratio,
            SummaryLength::Medium => self.medium_ratio,
            SummaryLength::Long => self.long_ratio,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        for (name, ratio) in [
            ("short_ratio", self.short_ratio),
            ("medium_ratio", self.medium_ratio),
            ("long_ratio", self.long_ratio),
        ] {
            if !(ratio > 0.0 && ratio <= 1.0) {
                return Err(SummarizeError::invalid_config(format!(
                    "{} must be in (0, 1], got {}",
                    name, ratio
                )));
            }
        }

        if !(self.short_ratio <= self.medium_ratio && self.medium_ratio <= self.long_ratio) {
            return Err(SummarizeError::invalid_config(
                "ratios must satisfy short <= medium <= long",
            ));
        }

        if !self.noise_bound.is_finite() || self.noise_bound < 0.0 {
            return Err(SummarizeError::invalid_config(format!(
                "noise_bound must be finite and >= 0, got {}",
                self.noise_bound
            )));
        }

        let pw = &self.position_weights;
        if [pw.first, pw.last, pw.interior]
            .iter()
            .any(|w| !w.is_finite() || *w <= 0.0)
        {
            return Err(SummarizeError::invalid_config(
                "position weights must be finite and > 0",
            ));
        }

        if !(0.0..=1.0).contains(&self.min_df) {
            return Err(SummarizeError::invalid_config(format!(
                "min_df must be between 0 and 1, got {}",
                self.min_df
            )));
        }

        if self.min_token_length == 0 {
            return Err(SummarizeError::invalid_config(
                "min_token_length must be > 0",
            ));
        }

        Ok(())
    }

    /// Builder method: set language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Builder method: add extra stopwords
    pub fn with_stopwords(mut self, words: Vec<String>) -> Self {
        self.stopwords = words;
        self
    }

    /// Builder method: set minimum token length
    pub fn with_min_token_length(mut self, min_length: usize) -> Self {
        self.min_token_length = min_length;
        self
    }

    /// Builder method: set minimum document frequency
    pub fn with_min_df(mut self, min_df: f64) -> Self {
        self.min_df = min_df;
        self
    }

    /// Builder method: set position weights
    pub fn with_position_weights(mut self, weights: PositionWeights) -> Self {
        self.position_weights = weights;
        self
    }

    /// Builder method: set tie-break noise bound (0 disables noise)
    pub fn with_noise_bound(mut self, bound: f64) -> Self {
        self.noise_bound = bound;
        self
    }

    /// Builder method: set the short/medium/long fractions
    pub fn with_ratios(mut self, short: f64, medium: f64, long: f64) -> Self {
        self.short_ratio = short;
        self.medium_ratio = medium;
        self.long_ratio = long;
        self
    }
}
