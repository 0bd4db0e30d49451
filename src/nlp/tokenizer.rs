//! Unicode-aware normalization and word tokenization
//!
//! Words follow UAX #29 segmentation. Normalization is lowercasing only:
//! no stemming, accent folding, or lemmatization.

use unicode_segmentation::UnicodeSegmentation;

/// A Unicode-aware word tokenizer following UAX #29
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Minimum token length (in chars) to count as a word
    min_token_length: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Create a new tokenizer with default settings (words of 2+ chars)
    pub fn new() -> Self {
        Self {
            min_token_length: 2,
        }
    }

    /// Set minimum token length
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_token_length = min_length;
        self
    }

    /// Lowercase a sentence using Unicode case mapping
    pub fn normalize(&self, text: &str) -> String {
        text.to_lowercase()
    }

    /// Split text into word tokens.
    ///
    /// Pure punctuation/symbol segments and words shorter than the minimum
    /// length are skipped. Tokens borrow from `text` and keep its casing.
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.unicode_words()
            .filter(|word| word.chars().any(|c| c.is_alphanumeric()))
            .filter(|word| word.chars().count() >= self.min_token_length)
            .collect()
    }

    /// Number of words in a sentence after normalization, never below 1
    pub fn word_count(&self, sentence: &str) -> usize {
        let normalized = self.normalize(sentence);
        self.tokenize(&normalized).len().max(1)
    }
}
