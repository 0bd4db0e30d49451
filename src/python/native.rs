//! Native Python interface
//!
//! Direct Python classes for callers that pass plain strings and want
//! structured results back.

use crate::nlp::stopwords::StopwordFilter;
use crate::render::{render_html, render_plain};
use crate::request::SummaryRequest;
use crate::summarizer::assembler::{Summary, SummaryBlock};
use crate::summarizer::Summarizer;
use crate::types::{PositionWeights, SummarizerConfig};
use pyo3::prelude::*;

fn value_error(err: crate::errors::SummarizeError) -> PyErr {
    pyo3::exceptions::PyValueError::new_err(err.to_string())
}

/// Selected sentences of one source paragraph
#[pyclass(name = "SummaryBlock")]
#[derive(Clone)]
pub struct PySummaryBlock {
    #[pyo3(get)]
    pub paragraph_index: usize,
    #[pyo3(get)]
    pub sentence_indices: Vec<usize>,
    #[pyo3(get)]
    pub sentences: Vec<String>,
    #[pyo3(get)]
    pub text: String,
}

#[pymethods]
impl PySummaryBlock {
    fn __repr__(&self) -> String {
        format!(
            "SummaryBlock(paragraph_index={}, sentences={})",
            self.paragraph_index,
            self.sentences.len()
        )
    }

    fn __str__(&self) -> String {
        self.text.clone()
    }
}

impl From<&SummaryBlock> for PySummaryBlock {
    fn from(b: &SummaryBlock) -> Self {
        Self {
            paragraph_index: b.paragraph_index,
            sentence_indices: b.sentence_indices.clone(),
            sentences: b.sentences.clone(),
            text: b.text(),
        }
    }
}

/// Result of summarization
#[pyclass(name = "Summary")]
#[derive(Clone)]
pub struct PySummary {
    #[pyo3(get)]
    pub blocks: Vec<PySummaryBlock>,
    #[pyo3(get)]
    pub selected: Vec<usize>,
    #[pyo3(get)]
    pub total_sentences: usize,
    #[pyo3(get)]
    pub mode: String,
    #[pyo3(get)]
    pub text: String,
    #[pyo3(get)]
    pub html: String,
}

#[pymethods]
impl PySummary {
    fn __repr__(&self) -> String {
        format!(
            "Summary(selected={}, total_sentences={}, mode='{}')",
            self.selected.len(),
            self.total_sentences,
            self.mode
        )
    }

    fn __str__(&self) -> String {
        self.text.clone()
    }

    fn __len__(&self) -> usize {
        self.selected.len()
    }
}

impl From<Summary> for PySummary {
    fn from(s: Summary) -> Self {
        Self {
            blocks: s.blocks.iter().map(PySummaryBlock::from).collect(),
            text: render_plain(&s),
            html: render_html(&s),
            mode: s.mode.as_str().to_string(),
            total_sentences: s.total_sentences,
            selected: s.selected,
        }
    }
}

/// Reusable summarizer with a fixed configuration
#[pyclass(name = "Summarizer")]
pub struct PySummarizer {
    inner: Summarizer,
}

#[pymethods]
impl PySummarizer {
    #[new]
    #[pyo3(signature = (
        language="en",
        stopwords=None,
        min_token_length=2,
        noise_bound=0.005,
        first_weight=1.5,
        last_weight=1.3,
        interior_weight=1.1
    ))]
    #[allow(clippy::too_many_arguments)]
    fn new(
        language: &str,
        stopwords: Option<Vec<String>>,
        min_token_length: usize,
        noise_bound: f64,
        first_weight: f64,
        last_weight: f64,
        interior_weight: f64,
    ) -> PyResult<Self> {
        let config = SummarizerConfig::default()
            .with_language(language)
            .with_stopwords(stopwords.unwrap_or_default())
            .with_min_token_length(min_token_length)
            .with_noise_bound(noise_bound)
            .with_position_weights(PositionWeights {
                first: first_weight,
                last: last_weight,
                interior: interior_weight,
            });

        let inner = Summarizer::with_config(config).map_err(value_error)?;
        Ok(Self { inner })
    }

    /// Summarize text
    #[pyo3(signature = (text, ratio="medium", mode="paragraph", custom_count=None))]
    fn summarize(
        &self,
        text: &str,
        ratio: &str,
        mode: &str,
        custom_count: Option<i64>,
    ) -> PyResult<PySummary> {
        let request = build_request(text, ratio, mode, custom_count);
        let plan = request.validate().map_err(value_error)?;
        let summary = self.inner.summarize(text, &plan).map_err(value_error)?;
        Ok(summary.into())
    }

    fn __repr__(&self) -> String {
        let cfg = self.inner.config();
        format!(
            "Summarizer(language='{}', noise_bound={})",
            cfg.language, cfg.noise_bound
        )
    }
}

fn build_request(text: &str, ratio: &str, mode: &str, custom_count: Option<i64>) -> SummaryRequest {
    let mut request = SummaryRequest::new(text).with_ratio(ratio).with_mode(mode);
    request.custom_count = custom_count;
    request
}

/// Summarize text with the default configuration.
///
/// Returns HTML when `html` is true, plain text otherwise.
#[pyfunction]
#[pyo3(signature = (text, ratio="medium", mode="paragraph", custom_count=None, html=false))]
pub fn summarize(
    text: &str,
    ratio: &str,
    mode: &str,
    custom_count: Option<i64>,
    html: bool,
) -> PyResult<String> {
    let request = build_request(text, ratio, mode, custom_count);
    let plan = request.validate().map_err(value_error)?;
    let summary = Summarizer::new()
        .summarize(text, &plan)
        .map_err(value_error)?;

    Ok(if html {
        render_html(&summary)
    } else {
        render_plain(&summary)
    })
}

/// Get the built-in stopword list for a language.
#[pyfunction]
#[pyo3(signature = (language = "en"))]
pub fn get_stopwords(language: &str) -> PyResult<Vec<String>> {
    Ok(StopwordFilter::built_in_list(language))
}
