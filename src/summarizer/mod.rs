//! Summarization pipeline
//!
//! [`Summarizer`] runs the stages in order:
//!
//! 1. segment the document into paragraphs and sentences
//! 2. normalize and count words per sentence
//! 3. count terms ([`TermCounter`]) and apply TF-IDF ([`TfIdfWeighter`])
//! 4. score sentences with positional bias and tie-break noise
//! 5. select the top sentences and group them by paragraph
//!
//! # Static dispatch
//!
//! `Summarizer` is generic over its counting and weighting stages, so each
//! combination is monomorphized. The defaults are
//! [`StopwordTermCounter`] and [`SmoothedTfIdf`].
//!
//! Every call builds its own vocabulary and noise source; a `Summarizer`
//! holds no mutable state and can be shared across threads.

pub mod assembler;
pub mod noise;
pub mod scorer;
pub mod selector;

use crate::errors::{Result, SummarizeError};
use crate::nlp::segmenter::Segmenter;
use crate::nlp::tokenizer::Tokenizer;
use crate::types::{Segmentation, SummarizerConfig, SummaryPlan};
use crate::weighting::{SmoothedTfIdf, StopwordTermCounter, TermCounter, TermVector, TfIdfWeighter};
use assembler::{assemble, Summary};
use noise::{NoiseSource, UniformNoise};
use scorer::{ScoredSentence, Scorer};
use selector::SentenceSelector;

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

pub const STAGE_SEGMENT: &str = "segment";
pub const STAGE_TOKENIZE: &str = "tokenize";
pub const STAGE_WEIGH: &str = "weigh";
pub const STAGE_SCORE: &str = "score";
pub const STAGE_SELECT: &str = "select";
pub const STAGE_ASSEMBLE: &str = "assemble";

/// A segmented document with per-sentence scores
#[derive(Debug, Clone)]
pub struct ScoredDocument {
    /// Paragraphs and sentences; each sentence carries its word count and
    /// noise-free score
    pub segmentation: Segmentation,
    /// TF-IDF vector of every sentence
    pub vectors: Vec<TermVector>,
    /// Scores by global sentence index
    pub scores: Vec<ScoredSentence>,
}

/// Extractive summarizer composed of concrete stage implementations
#[derive(Debug, Clone)]
pub struct Summarizer<C = StopwordTermCounter, W = SmoothedTfIdf> {
    config: SummarizerConfig,
    segmenter: Segmenter,
    tokenizer: Tokenizer,
    scorer: Scorer,
    selector: SentenceSelector,
    counter: C,
    weighter: W,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer {
    /// Build a summarizer with the default configuration
    pub fn new() -> Self {
        Self::build(
            SummarizerConfig::default(),
            StopwordTermCounter::from_config(&SummarizerConfig::default()),
            SmoothedTfIdf,
        )
    }

    /// Build a summarizer from a validated configuration
    pub fn with_config(config: SummarizerConfig) -> Result<Self> {
        let counter = StopwordTermCounter::from_config(&config);
        Self::from_parts(config, counter, SmoothedTfIdf)
    }
}

impl<C: TermCounter, W: TfIdfWeighter> Summarizer<C, W> {
    /// Build a summarizer with custom counting and weighting stages
    pub fn from_parts(config: SummarizerConfig, counter: C, weighter: W) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, counter, weighter))
    }

    fn build(config: SummarizerConfig, counter: C, weighter: W) -> Self {
        Self {
            tokenizer: Tokenizer::new().with_min_length(config.min_token_length),
            scorer: Scorer::new(config.position_weights),
            segmenter: Segmenter::new(),
            selector: SentenceSelector::new(),
            config,
            counter,
            weighter,
        }
    }

    /// The active configuration
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Summarize `text` according to `plan`, with fresh tie-break noise
    pub fn summarize(&self, text: &str, plan: &SummaryPlan) -> Result<Summary> {
        let mut noise = UniformNoise::from_entropy(self.config.noise_bound);
        self.summarize_with_noise(text, plan, &mut noise)
    }

    /// Summarize `text` using a caller-provided noise source
    pub fn summarize_with_noise<N: NoiseSource + ?Sized>(
        &self,
        text: &str,
        plan: &SummaryPlan,
        noise: &mut N,
    ) -> Result<Summary> {
        if text.trim().is_empty() {
            return Err(SummarizeError::empty_input("no text provided"));
        }

        let doc = self.score_document(text, noise);
        let total = doc.segmentation.len();

        let selected = {
            trace_stage!(STAGE_SELECT);
            self.selector
                .select_target(&doc.scores, plan.target, &self.config)?
        };

        let blocks = {
            trace_stage!(STAGE_ASSEMBLE);
            assemble(&selected, &doc.segmentation.sentences, plan.mode.style())
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            total,
            selected = selected.len(),
            blocks = blocks.len(),
            mode = plan.mode.as_str(),
            "summary assembled"
        );

        Ok(Summary {
            blocks,
            selected,
            total_sentences: total,
            mode: plan.mode,
        })
    }

    /// Segment, weight, and score a document without selecting anything
    pub fn score_document<N: NoiseSource + ?Sized>(
        &self,
        text: &str,
        noise: &mut N,
    ) -> ScoredDocument {
        let mut segmentation = {
            trace_stage!(STAGE_SEGMENT);
            self.segmenter.segment(text)
        };

        let normalized: Vec<String> = {
            trace_stage!(STAGE_TOKENIZE);
            segmentation
                .sentences
                .iter_mut()
                .map(|sentence| {
                    let normalized = self.tokenizer.normalize(&sentence.text);
                    sentence.word_count = self.tokenizer.tokenize(&normalized).len().max(1);
                    normalized
                })
                .collect()
        };

        let vectors = {
            trace_stage!(STAGE_WEIGH);
            let matrix = self.counter.count(&normalized);
            self.weighter.weigh(&matrix)
        };

        let scores = {
            trace_stage!(STAGE_SCORE);
            self.scorer
                .score_all(&segmentation.sentences, &vectors, noise)
        };

        for (sentence, scored) in segmentation.sentences.iter_mut().zip(&scores) {
            sentence.score = scored.score;
        }

        ScoredDocument {
            segmentation,
            vectors,
            scores,
        }
    }
}
