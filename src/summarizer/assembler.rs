//! Summary assembly
//!
//! Groups selected sentences by their source paragraph. Sentence text is
//! carried through unmodified; escaping for a target format belongs to the
//! renderer.

use crate::types::{BlockStyle, Sentence, SummaryMode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The selected sentences of one source paragraph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryBlock {
    /// Index of the source paragraph
    pub paragraph_index: usize,
    /// Global indices of the sentences, ascending
    pub sentence_indices: Vec<usize>,
    /// Sentence texts, in the same order as `sentence_indices`
    pub sentences: Vec<String>,
    /// How the sentences are joined
    pub style: BlockStyle,
}

impl SummaryBlock {
    /// Plain-text rendering of the block.
    ///
    /// Prose joins sentences with a single space; bullets put each
    /// marker-prefixed sentence on its own line.
    pub fn text(&self) -> String {
        match self.style {
            BlockStyle::Prose => self.sentences.join(" "),
            BlockStyle::Bullets => self
                .sentences
                .iter()
                .map(|s| format!("{}{}", BlockStyle::BULLET, s))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    /// Number of sentences in the block
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Check if the block has no sentences
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// An extractive summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Paragraph blocks in source order
    pub blocks: Vec<SummaryBlock>,
    /// Selected global sentence indices, ascending
    pub selected: Vec<usize>,
    /// Number of sentences in the source document
    pub total_sentences: usize,
    /// Mode the summary was produced in
    pub mode: SummaryMode,
}

impl Summary {
    /// Number of selected sentences
    pub fn sentence_count(&self) -> usize {
        self.selected.len()
    }

    /// Selected sentence texts in document order
    pub fn sentences(&self) -> impl Iterator<Item = &str> {
        self.blocks
            .iter()
            .flat_map(|b| b.sentences.iter().map(String::as_str))
    }

    /// Check if nothing was selected
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

/// Group `selected` sentence indices into paragraph blocks.
///
/// Blocks come out in ascending paragraph order and sentences within a
/// block in ascending index order, whatever order `selected` is in.
/// Indices outside `sentences` are ignored.
pub fn assemble(selected: &[usize], sentences: &[Sentence], style: BlockStyle) -> Vec<SummaryBlock> {
    let mut groups: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for &index in selected {
        if let Some(sentence) = sentences.get(index) {
            groups
                .entry(sentence.paragraph_index)
                .or_default()
                .push(index);
        }
    }

    groups
        .into_iter()
        .map(|(paragraph_index, mut indices)| {
            indices.sort_unstable();
            indices.dedup();
            SummaryBlock {
                paragraph_index,
                sentences: indices.iter().map(|&i| sentences[i].text.clone()).collect(),
                sentence_indices: indices,
                style,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences() -> Vec<Sentence> {
        vec![
            Sentence::new("A cat sat.", 0, 0),
            Sentence::new("A cat slept.", 1, 0),
            Sentence::new("Birds flew high.", 2, 1),
            Sentence::new("Fish swam deep!", 3, 2),
        ]
    }

    #[test]
    fn test_grouping_by_paragraph() {
        let blocks = assemble(&[3, 0, 1], &sentences(), BlockStyle::Prose);

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].paragraph_index, 0);
        assert_eq!(blocks[0].sentence_indices, vec![0, 1]);
        assert_eq!(blocks[0].text(), "A cat sat. A cat slept.");
        assert_eq!(blocks[1].paragraph_index, 2);
        assert_eq!(blocks[1].text(), "Fish swam deep!");
    }

    #[test]
    fn test_bullet_style() {
        let blocks = assemble(&[0, 1], &sentences(), BlockStyle::Bullets);
        assert_eq!(blocks[0].text(), "\u{2022} A cat sat.\n\u{2022} A cat slept.");
    }

    #[test]
    fn test_text_passed_through_unmodified() {
        let s = vec![Sentence::new("Tom & <Jerry> said \"hi\".", 0, 0)];
        let blocks = assemble(&[0], &s, BlockStyle::Prose);
        assert_eq!(blocks[0].text(), "Tom & <Jerry> said \"hi\".");
    }

    #[test]
    fn test_out_of_range_ignored() {
        let blocks = assemble(&[1, 99], &sentences(), BlockStyle::Prose);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].sentence_indices, vec![1]);
    }

    #[test]
    fn test_empty_selection() {
        assert!(assemble(&[], &sentences(), BlockStyle::Prose).is_empty());
    }
}
