//! Natural Language Processing components
//!
//! This module provides paragraph/sentence segmentation, word tokenization,
//! and stopword filtering.

pub mod segmenter;
pub mod stopwords;
pub mod tokenizer;
