//! # rapid_summarizer
//!
//! Fast extractive text summarization with optional Python bindings.
//!
//! A document is split into paragraphs and sentences, each sentence is weighted
//! with TF-IDF over the document's own sentences, scored with a positional
//! bias, and the best sentences are returned grouped by their source
//! paragraph, in original order.
//!
//! ## Features
//!
//! - **Structure-preserving**: output keeps paragraph grouping and sentence order
//! - **Unicode-aware**: UAX #29 word segmentation and Unicode lowercasing
//! - **Pluggable**: term counting and IDF formula are swappable stage traits
//! - **Python bindings**: Seamless integration with Python via PyO3
//!
//! ## Example
//!
//! ```
//! use rapid_summarizer::{Summarizer, SummaryLength, SummaryPlan};
//!
//! let text = "Rust is fast. Rust is safe. Cargo builds crates.\n\nTests keep it honest.";
//! let summary = Summarizer::new()
//!     .summarize(text, &SummaryPlan::paragraph(SummaryLength::Short))
//!     .unwrap();
//!
//! assert_eq!(summary.sentence_count(), 1);
//! ```

pub mod errors;
pub mod nlp;
pub mod render;
pub mod request;
pub mod summarizer;
pub mod types;
pub mod weighting;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use errors::{Result, SummarizeError};
pub use types::{
    BlockStyle, PositionWeights, Segmentation, SelectionTarget, Sentence, StringPool,
    SummarizerConfig, SummaryLength, SummaryMode, SummaryPlan,
};

// Re-export main functionality
pub use nlp::{segmenter::Segmenter, stopwords::StopwordFilter, tokenizer::Tokenizer};
pub use render::{escape_html, render_html, render_plain};
pub use request::{summarize_batch_json, summarize_json, SummaryRequest, SummaryResponse};
pub use summarizer::assembler::{Summary, SummaryBlock};
pub use summarizer::noise::{NoiseSource, UniformNoise, ZeroNoise};
pub use summarizer::scorer::{ScoredSentence, Scorer};
pub use summarizer::selector::SentenceSelector;
pub use summarizer::{ScoredDocument, Summarizer};
pub use weighting::{
    CountMatrix, SmoothedTfIdf, StopwordTermCounter, TermCounter, TermCounts, TermVector,
    TfIdfWeighter, UnsmoothedTfIdf,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Initialize the Python module
#[cfg(feature = "python")]
#[pymodule]
fn _rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::register_module(m)?;
    Ok(())
}
