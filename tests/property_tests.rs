//! Property-based tests using proptest

use proptest::prelude::*;
use rapid_summarizer::*;

/// A document of 1..5 paragraphs, each with 1..6 sentences of lowercase words
fn document() -> impl Strategy<Value = String> {
    let sentence = prop::collection::vec("[a-z]{2,9}", 1..8).prop_map(|words| {
        let mut s = words.join(" ");
        s.push('.');
        s
    });
    let paragraph = prop::collection::vec(sentence, 1..6).prop_map(|s| s.join(" "));
    prop::collection::vec(paragraph, 1..5).prop_map(|p| p.join("\n\n"))
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn test_segmentation_covers_input(text in "[a-zA-Z.?! \n]{1,200}") {
        prop_assume!(!text.trim().is_empty());

        let seg = Segmenter::new().segment(&text);
        let joined: String = seg.sentences.iter().map(|s| s.text.as_str()).collect();

        prop_assert!(!seg.is_empty());
        prop_assert_eq!(strip_whitespace(&joined), strip_whitespace(&text));
    }

    #[test]
    fn test_segmentation_indices_contiguous(text in document()) {
        let seg = Segmenter::new().segment(&text);

        for (i, sentence) in seg.sentences.iter().enumerate() {
            prop_assert_eq!(sentence.index, i);
            prop_assert!(sentence.paragraph_index < seg.paragraphs.len());
        }
        prop_assert!(seg
            .sentences
            .windows(2)
            .all(|w| w[0].paragraph_index <= w[1].paragraph_index));
    }

    #[test]
    fn test_longer_ratio_selects_more(text in document()) {
        let summarizer = Summarizer::new();
        let count = |length| {
            summarizer
                .summarize_with_noise(&text, &SummaryPlan::paragraph(length), &mut ZeroNoise)
                .map(|s| s.sentence_count())
        };

        let short = count(SummaryLength::Short).unwrap();
        let medium = count(SummaryLength::Medium).unwrap();
        let long = count(SummaryLength::Long).unwrap();

        prop_assert!(short >= 1);
        prop_assert!(short <= medium);
        prop_assert!(medium <= long);
    }

    #[test]
    fn test_selection_preserves_document_order(text in document(), seed in any::<u64>()) {
        let mut noise = UniformNoise::seeded(0.005, seed);
        let summary = Summarizer::new()
            .summarize_with_noise(&text, &SummaryPlan::keypoints(SummaryLength::Long), &mut noise)
            .unwrap();

        prop_assert!(summary.selected.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(summary
            .blocks
            .windows(2)
            .all(|w| w[0].paragraph_index < w[1].paragraph_index));

        let flattened: Vec<usize> = summary
            .blocks
            .iter()
            .flat_map(|b| b.sentence_indices.iter().copied())
            .collect();
        prop_assert_eq!(flattened, summary.selected);
    }

    #[test]
    fn test_zero_noise_is_deterministic(text in document()) {
        let summarizer = Summarizer::new();
        let plan = SummaryPlan::paragraph(SummaryLength::Medium);

        let first = summarizer.summarize_with_noise(&text, &plan, &mut ZeroNoise).unwrap();
        let second = summarizer.summarize_with_noise(&text, &plan, &mut ZeroNoise).unwrap();

        prop_assert_eq!(render_plain(&first), render_plain(&second));
        prop_assert_eq!(first.selected, second.selected);
    }

    #[test]
    fn test_custom_count_bounds(text in document(), count in 1usize..50) {
        let summary = Summarizer::new()
            .summarize(&text, &SummaryPlan::custom(count))
            .unwrap();

        prop_assert_eq!(summary.sentence_count(), count.min(summary.total_sentences));
        prop_assert!(summary.sentence_count() >= 1);
        prop_assert!(summary.selected.iter().all(|&i| i < summary.total_sentences));
    }

    #[test]
    fn test_noise_within_bound(bound in 0.0f64..0.1, seed in any::<u64>()) {
        let mut noise = UniformNoise::seeded(bound, seed);
        for _ in 0..32 {
            let sample = noise.sample();
            prop_assert!((0.0..=bound).contains(&sample));
        }
    }

    #[test]
    fn test_scores_non_negative(text in document()) {
        let doc = Summarizer::new().score_document(&text, &mut ZeroNoise);

        prop_assert_eq!(doc.scores.len(), doc.segmentation.len());
        prop_assert!(doc.scores.iter().all(|s| s.score.is_finite() && s.score >= 0.0));
    }
}
