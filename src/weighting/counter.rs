//! Stopword-filtered term counting

use super::{CountMatrix, TermCounter, TermCounts};
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::Tokenizer;
use crate::types::{StringPool, SummarizerConfig};
use rustc_hash::FxHashMap;

/// Default [`TermCounter`]: tokenizes each sentence, drops stopwords, and
/// counts the remaining terms over a vocabulary shared by all sentences.
#[derive(Debug, Clone, Default)]
pub struct StopwordTermCounter {
    tokenizer: Tokenizer,
    stopwords: StopwordFilter,
    /// Minimum fraction of sentences a term must appear in (0.0 keeps all)
    min_df: f64,
}

impl StopwordTermCounter {
    /// Create a counter from its parts
    pub fn new(tokenizer: Tokenizer, stopwords: StopwordFilter) -> Self {
        Self {
            tokenizer,
            stopwords,
            min_df: 0.0,
        }
    }

    /// Create a counter from a summarizer config
    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self {
            tokenizer: Tokenizer::new().with_min_length(config.min_token_length),
            stopwords: StopwordFilter::with_extra(&config.language, &config.stopwords),
            min_df: config.min_df,
        }
    }

    /// Set the minimum document-frequency cutoff
    pub fn with_min_df(mut self, min_df: f64) -> Self {
        self.min_df = min_df;
        self
    }
}

impl TermCounter for StopwordTermCounter {
    fn count(&self, sentences: &[String]) -> CountMatrix {
        let mut vocabulary = StringPool::with_capacity(sentences.len() * 8);
        let mut rows = Vec::with_capacity(sentences.len());

        for sentence in sentences {
            let mut counts: FxHashMap<u32, u32> = FxHashMap::default();
            for token in self.tokenizer.tokenize(sentence) {
                if self.stopwords.is_stopword(token) {
                    continue;
                }
                *counts.entry(vocabulary.intern(token)).or_insert(0) += 1;
            }
            rows.push(TermCounts::from_pairs(counts));
        }

        let mut document_frequency = vec![0u32; vocabulary.len()];
        for row in &rows {
            for (term, _) in row.iter() {
                document_frequency[term as usize] += 1;
            }
        }

        if self.min_df > 0.0 {
            let threshold = self.min_df * rows.len() as f64;
            for df in document_frequency.iter_mut() {
                if (*df as f64) < threshold {
                    *df = 0;
                }
            }
            for row in rows.iter_mut() {
                row.retain(|term| document_frequency[term as usize] > 0);
            }
        }

        CountMatrix {
            vocabulary,
            rows,
            document_frequency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalized(sentences: &[&str]) -> Vec<String> {
        sentences.iter().map(|s| s.to_lowercase()).collect()
    }

    #[test]
    fn test_counts_and_document_frequency() {
        let counter = StopwordTermCounter::default();
        let matrix = counter.count(&normalized(&[
            "the cat chased the cat.",
            "a dog chased.",
            "birds flew.",
        ]));

        assert_eq!(matrix.num_documents(), 3);

        let cat = matrix.vocabulary.id_of("cat").unwrap();
        let chased = matrix.vocabulary.id_of("chased").unwrap();
        assert_eq!(matrix.rows[0].get(cat), 2);
        assert_eq!(matrix.df(cat), 1);
        assert_eq!(matrix.df(chased), 2);
    }

    #[test]
    fn test_stopwords_excluded_from_vocabulary() {
        let counter = StopwordTermCounter::default();
        let matrix = counter.count(&normalized(&["the and of cats"]));

        assert!(matrix.vocabulary.id_of("the").is_none());
        assert!(matrix.vocabulary.id_of("and").is_none());
        assert!(matrix.vocabulary.id_of("cats").is_some());
    }

    #[test]
    fn test_stopword_only_sentence_has_empty_row() {
        let counter = StopwordTermCounter::default();
        let matrix = counter.count(&normalized(&["it is what it is.", "rockets launch."]));

        assert_eq!(matrix.rows.len(), 2);
        assert!(matrix.rows[0].is_empty());
        assert!(!matrix.rows[1].is_empty());
    }

    #[test]
    fn test_min_df_cutoff() {
        let counter = StopwordTermCounter::default().with_min_df(0.5);
        let matrix = counter.count(&normalized(&["cat dog.", "cat bird.", "cat fish.", "dog."]));

        let cat = matrix.vocabulary.id_of("cat").unwrap();
        let bird = matrix.vocabulary.id_of("bird").unwrap();
        let dog = matrix.vocabulary.id_of("dog").unwrap();

        assert_eq!(matrix.df(cat), 3);
        assert_eq!(matrix.df(dog), 2);
        assert_eq!(matrix.df(bird), 0);
        assert_eq!(matrix.rows[1].get(bird), 0);
        assert_eq!(matrix.rows[1].get(cat), 1);
    }

    #[test]
    fn test_extra_stopwords_from_config() {
        let config = SummarizerConfig::default().with_stopwords(vec!["cat".to_string()]);
        let counter = StopwordTermCounter::from_config(&config);
        let matrix = counter.count(&normalized(&["cat naps."]));

        assert!(matrix.vocabulary.id_of("cat").is_none());
        assert!(matrix.vocabulary.id_of("naps").is_some());
    }
}
