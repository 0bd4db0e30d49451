//! Paragraph and sentence segmentation
//!
//! Paragraphs are separated by blank lines. Sentences end at `.`, `?` or `!`
//! followed by whitespace; the punctuation stays attached to the sentence it
//! closes. Every non-empty input yields at least one sentence.

use crate::types::{Segmentation, Sentence};

const SENTENCE_TERMINATORS: [char; 3] = ['.', '?', '!'];

/// Splits documents into paragraphs and sentences
#[derive(Debug, Clone, Copy, Default)]
pub struct Segmenter;

impl Segmenter {
    /// Create a new segmenter
    pub fn new() -> Self {
        Self
    }

    /// Segment a document into paragraphs and globally indexed sentences
    pub fn segment(&self, text: &str) -> Segmentation {
        let mut paragraphs: Vec<String> = self
            .split_paragraphs(text)
            .into_iter()
            .map(str::to_string)
            .collect();

        // No blank-line breaks at all: the whole text is one paragraph
        if paragraphs.is_empty() && !text.trim().is_empty() {
            paragraphs.push(text.trim().to_string());
        }

        let mut sentences = Vec::new();
        for (paragraph_index, paragraph) in paragraphs.iter().enumerate() {
            let mut parts = self.split_sentences(paragraph);
            if parts.is_empty() && !paragraph.is_empty() {
                parts.push(paragraph.as_str());
            }

            for part in parts {
                let index = sentences.len();
                sentences.push(Sentence::new(part, index, paragraph_index));
            }
        }

        if sentences.is_empty() && !text.is_empty() {
            let whole = if text.trim().is_empty() { text } else { text.trim() };
            sentences.push(Sentence::new(whole, 0, 0));
            if paragraphs.is_empty() {
                paragraphs.push(whole.to_string());
            }

            #[cfg(feature = "tracing")]
            tracing::debug!("segmentation produced no sentences; using whole input");
        }

        Segmentation {
            paragraphs,
            sentences,
        }
    }

    /// Split text on blank lines, returning trimmed non-empty paragraphs.
    ///
    /// A break is a newline, optional whitespace, then another newline; a run
    /// of several blank lines counts as one break.
    pub fn split_paragraphs<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut raw = Vec::new();
        let mut start = 0;
        let mut pos = 0;

        while let Some(rel) = text[pos..].find('\n') {
            let newline = pos + rel;
            let after = newline + 1;
            let run_end = text[after..]
                .find(|c: char| !c.is_whitespace())
                .map_or(text.len(), |r| after + r);

            match text[after..run_end].rfind('\n') {
                Some(last) => {
                    raw.push(&text[start..newline]);
                    start = after + last + 1;
                    pos = start;
                }
                None => pos = after,
            }
        }
        raw.push(&text[start..]);

        raw.into_iter()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }

    /// Split a paragraph into trimmed non-empty sentences
    pub fn split_sentences<'a>(&self, paragraph: &'a str) -> Vec<&'a str> {
        let mut raw = Vec::new();
        let mut start = 0;
        let mut prev: Option<char> = None;
        let mut chars = paragraph.char_indices().peekable();

        while let Some((i, c)) = chars.next() {
            let after_terminator = prev.is_some_and(|p| SENTENCE_TERMINATORS.contains(&p));
            if c.is_whitespace() && after_terminator {
                raw.push(&paragraph[start..i]);

                let mut end = i + c.len_utf8();
                while let Some(&(j, next)) = chars.peek() {
                    if !next.is_whitespace() {
                        break;
                    }
                    end = j + next.len_utf8();
                    chars.next();
                }
                start = end;
                prev = None;
                continue;
            }
            prev = Some(c);
        }
        raw.push(&paragraph[start..]);

        raw.into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Segment a document with the default [`Segmenter`]
pub fn segment(text: &str) -> Segmentation {
    Segmenter::new().segment(text)
}
