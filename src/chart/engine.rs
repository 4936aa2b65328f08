//! The shared CYK sweep.
//!
//! [`ChartEngine`] fills a [`Chart`] bottom-up: width-1 cells are seeded
//! from the lexicon, then each span length from 2 to `n` is completed in
//! one pass. All mode-specific behavior is delegated to the
//! [`Semiring`]; the sweep itself is identical across modes.
//!
//! Within a cell, candidates are produced in a fixed order — ascending
//! split point, then grammar declaration order. That order is observable
//! (Viterbi tie-breaks, enumeration listings) and must not change.

use crate::chart::types::{Cell, Chart};
use crate::grammar::Grammar;
use crate::semiring::Semiring;

/// Fills the triangular parse table for a token sequence.
///
/// # Usage
///
/// ```
/// use chartparse::chart::ChartEngine;
/// use chartparse::grammar::Grammar;
/// use chartparse::inside::Inside;
///
/// let grammar = Grammar::builder("S")
///     .binary("S", "NP", "VP", 1.0)
///     .lexical("NP", "dogs", 0.5)
///     .lexical("VP", "bark", 0.5)
///     .build()
///     .unwrap();
///
/// let chart = ChartEngine::parse(&["dogs", "bark"], &grammar, &Inside);
/// assert_eq!(chart.get(0, 2, "S"), Some(&0.25));
/// ```
pub struct ChartEngine;

impl ChartEngine {
    /// Parses `words` under `semiring`, returning the filled chart.
    ///
    /// Never fails: an unparsable sentence leaves the start symbol out of
    /// the top cell, an unknown word leaves its seed cell empty, and an
    /// empty sentence yields a chart with no valid spans.
    pub fn parse<S: Semiring>(words: &[&str], grammar: &Grammar, semiring: &S) -> Chart<S::Entry> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("chart_parse", tokens = words.len()).entered();

        let n = words.len();
        let mut chart = Chart::new(n);
        seed(words, grammar, semiring, &mut chart);

        for length in 2..=n {
            for start in 0..=n - length {
                let end = start + length;
                let cell = build_cell(&chart, grammar, semiring, start, end);
                chart.set_cell(start, end, cell);
            }
        }
        chart
    }

    /// Like [`parse`](Self::parse), but fills each span-length layer in
    /// parallel with rayon.
    ///
    /// Cells of one layer depend only on strictly smaller spans, so each
    /// `(start, end)` cell is built independently and installed after the
    /// layer completes. The resulting chart is identical to the
    /// sequential one.
    #[cfg(feature = "parallel")]
    pub fn parse_parallel<S>(words: &[&str], grammar: &Grammar, semiring: &S) -> Chart<S::Entry>
    where
        S: Semiring + Sync,
        S::Entry: Send + Sync,
    {
        use rayon::prelude::*;

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("chart_parse_parallel", tokens = words.len()).entered();

        let n = words.len();
        let mut chart = Chart::new(n);
        seed(words, grammar, semiring, &mut chart);

        for length in 2..=n {
            let built: Vec<(usize, Cell<S::Entry>)> = (0..=n - length)
                .into_par_iter()
                .map(|start| {
                    let end = start + length;
                    (start, build_cell(&chart, grammar, semiring, start, end))
                })
                .collect();
            for (start, cell) in built {
                chart.set_cell(start, start + length, cell);
            }
        }
        chart
    }
}

/// Seeds the width-1 cells from the lexicon.
fn seed<S: Semiring>(words: &[&str], grammar: &Grammar, semiring: &S, chart: &mut Chart<S::Entry>) {
    for (pos, word) in words.iter().enumerate() {
        for rule in grammar.lexical_rules_for(word) {
            let candidate = semiring.lexical(rule);
            let cell = chart.cell_mut(pos, pos + 1);
            let merged = semiring.aggregate(cell.remove(&rule.left), candidate);
            cell.insert(rule.left.clone(), merged);
        }
    }
}

/// Builds the cell for `[start,end)` from strictly smaller spans.
fn build_cell<S: Semiring>(
    chart: &Chart<S::Entry>,
    grammar: &Grammar,
    semiring: &S,
    start: usize,
    end: usize,
) -> Cell<S::Entry> {
    let mut cell = Cell::new();
    for split in start + 1..end {
        for rule in grammar.binary_rules() {
            let Some(left) = chart.get(start, split, &rule.right1) else {
                continue;
            };
            let Some(right) = chart.get(split, end, &rule.right2) else {
                continue;
            };
            let candidate = semiring.combine(rule, start, split, end, left, right);
            let merged = semiring.aggregate(cell.remove(&rule.left), candidate);
            cell.insert(rule.left.clone(), merged);
        }
    }
    cell
}

// ============================================================================
// Tests
// ============================================================================
