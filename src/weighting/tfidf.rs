//! IDF strategies

use super::TfIdfWeighter;

/// Smoothed IDF: `ln((1 + N) / (1 + df)) + 1`.
///
/// Acts as if one extra sentence contained every term, so neither `df = 0`
/// nor `df = N` can divide by zero or zero out a term.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmoothedTfIdf;

impl TfIdfWeighter for SmoothedTfIdf {
    #[inline]
    fn idf(&self, df: u32, n: usize) -> f64 {
        ((1.0 + n as f64) / (1.0 + df as f64)).ln() + 1.0
    }
}

/// Unsmoothed IDF: `ln(N / df) + 1`, with `df` floored at 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsmoothedTfIdf;

impl TfIdfWeighter for UnsmoothedTfIdf {
    #[inline]
    fn idf(&self, df: u32, n: usize) -> f64 {
        let n = n.max(1) as f64;
        (n / df.max(1) as f64).ln() + 1.0
    }
}
