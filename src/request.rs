//! Request boundary: validation and JSON interface
//!
//! Raw requests carry loosely typed fields (`ratio`, `mode`, `custom_count`)
//! as submitted by a form or API client. They are validated into a
//! [`SummaryPlan`] before any summarization work starts; an invalid request
//! is rejected as a whole.

use crate::errors::{Result, SummarizeError};
use crate::render::{render_html, render_plain};
use crate::summarizer::assembler::{Summary, SummaryBlock};
use crate::summarizer::Summarizer;
use crate::types::{SummarizerConfig, SummaryLength, SummaryMode, SummaryPlan};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// A summarization request as received from a client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// Document text
    pub text: String,
    /// "short", "medium" or "long"; anything else means medium
    #[serde(default)]
    pub ratio: Option<String>,
    /// "paragraph", "keypoints", "bullet" or "custom" (default paragraph)
    #[serde(default)]
    pub mode: Option<String>,
    /// Number of sentences for custom mode
    #[serde(default, alias = "customCount")]
    pub custom_count: Option<i64>,
    /// Optional summarizer configuration overrides
    #[serde(default)]
    pub config: Option<SummarizerConfig>,
}

impl SummaryRequest {
    /// Create a request with default ratio and mode
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Builder method: set ratio
    pub fn with_ratio(mut self, ratio: impl Into<String>) -> Self {
        self.ratio = Some(ratio.into());
        self
    }

    /// Builder method: set mode
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    /// Builder method: set custom sentence count
    pub fn with_custom_count(mut self, count: i64) -> Self {
        self.custom_count = Some(count);
        self
    }

    /// Validate the request into a summary plan.
    ///
    /// Checks, in order: non-empty text, known mode, and for custom mode a
    /// count of at least 1.
    pub fn validate(&self) -> Result<SummaryPlan> {
        if self.text.trim().is_empty() {
            return Err(SummarizeError::empty_input("no text provided"));
        }

        let mode: SummaryMode = match self.mode.as_deref() {
            Some(tag) => tag.parse::<SummaryMode>()?,
            None => SummaryMode::default(),
        };

        let length: SummaryLength = self
            .ratio
            .as_deref()
            .map(|r| r.parse::<SummaryLength>().unwrap_or_default())
            .unwrap_or_default();

        match mode {
            SummaryMode::Paragraph => Ok(SummaryPlan::paragraph(length)),
            SummaryMode::Keypoints => Ok(SummaryPlan::keypoints(length)),
            SummaryMode::Custom => match self.custom_count {
                Some(n) if n >= 1 => Ok(SummaryPlan::custom(n as usize)),
                Some(n) => Err(SummarizeError::invalid_count(format!(
                    "please enter a valid number of sentences (got {})",
                    n
                ))),
                None => Err(SummarizeError::invalid_count(
                    "custom mode requires custom_count",
                )),
            },
        }
    }
}

/// A rendered summary returned to the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// HTML rendering (escaped, one `<p>` per source paragraph)
    pub html: String,
    /// Plain-text rendering
    pub text: String,
    /// Paragraph blocks in source order
    pub blocks: Vec<SummaryBlock>,
    /// Selected global sentence indices, ascending
    pub selected: Vec<usize>,
    /// Number of sentences in the source document
    pub total_sentences: usize,
    /// Mode the summary was produced in
    pub mode: SummaryMode,
}

impl From<Summary> for SummaryResponse {
    fn from(summary: Summary) -> Self {
        Self {
            html: render_html(&summary),
            text: render_plain(&summary),
            selected: summary.selected,
            total_sentences: summary.total_sentences,
            mode: summary.mode,
            blocks: summary.blocks,
        }
    }
}

/// Outcome of one document in a batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BatchItem {
    Ok { summary: SummaryResponse },
    Error { error: String },
}

/// Validate and summarize a single request
pub fn summarize_request(request: &SummaryRequest) -> Result<SummaryResponse> {
    let plan = request.validate()?;
    let summarizer = match &request.config {
        Some(config) => Summarizer::with_config(config.clone())?,
        None => Summarizer::new(),
    };
    let summary = summarizer.summarize(&request.text, &plan)?;
    Ok(summary.into())
}

/// Summarize a JSON-encoded [`SummaryRequest`], returning a JSON
/// [`SummaryResponse`]
pub fn summarize_json(json_input: &str) -> Result<String> {
    let request: SummaryRequest = serde_json::from_str(json_input)?;
    let response = summarize_request(&request)?;
    Ok(serde_json::to_string(&response)?)
}

/// Summarize a JSON array of requests in parallel.
///
/// Documents are independent; a failing document yields an error item and
/// does not affect the others. Output order matches input order.
pub fn summarize_batch_json(json_input: &str) -> Result<String> {
    let requests: Vec<SummaryRequest> = serde_json::from_str(json_input)?;

    let results: Vec<BatchItem> = requests
        .par_iter()
        .map(|request| match summarize_request(request) {
            Ok(summary) => BatchItem::Ok { summary },
            Err(e) => BatchItem::Error {
                error: e.to_string(),
            },
        })
        .collect();

    Ok(serde_json::to_string(&results)?)
}
