//! Total-probability (inside) parsing.
//!
//! The sum-product counterpart of Viterbi: each cell entry is the
//! probability of its nonterminal over the span, *summed over all
//! derivations* rather than maximized. The top-cell entry for the start
//! symbol is the total probability of the sentence under the grammar,
//! marginalized over parse trees.
//!
//! # References
//!
//! - Baker (1979), *Trainable grammars for speech recognition* — the
//!   inside algorithm
//! - Lari & Young (1990), *The estimation of stochastic context-free
//!   grammars using the Inside-Outside algorithm*

use crate::chart::{Chart, ChartEngine};
use crate::grammar::{BinaryRule, Grammar, LexicalRule};
use crate::semiring::Semiring;

/// The sum-product semiring: plain probability, no backpointer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Inside;

impl Semiring for Inside {
    type Entry = f64;

    fn lexical(&self, rule: &LexicalRule) -> f64 {
        rule.weight
    }

    fn combine(
        &self,
        rule: &BinaryRule,
        _start: usize,
        _split: usize,
        _end: usize,
        left: &f64,
        right: &f64,
    ) -> f64 {
        rule.weight * left * right
    }

    fn aggregate(&self, existing: Option<f64>, candidate: f64) -> f64 {
        existing.unwrap_or(0.0) + candidate
    }
}

/// Result of an inside run.
#[derive(Debug, Clone, PartialEq)]
pub struct InsideResult {
    /// The filled chart of summed probabilities.
    pub chart: Chart<f64>,
    /// Total probability of the sentence: the start symbol's top-cell
    /// entry, or `0.0` when no derivation exists (a value, not an
    /// error).
    pub probability: f64,
}

/// Runs the inside algorithm.
///
/// # Usage
///
/// ```
/// use chartparse::grammar::Grammar;
/// use chartparse::inside::InsideRunner;
///
/// let grammar = Grammar::builder("S")
///     .binary("S", "NP", "VP", 1.0)
///     .lexical("NP", "dogs", 0.5)
///     .lexical("VP", "bark", 0.5)
///     .build()
///     .unwrap();
///
/// let result = InsideRunner::run(&["dogs", "bark"], &grammar);
/// assert!((result.probability - 0.25).abs() < 1e-12);
/// ```
pub struct InsideRunner;

impl InsideRunner {
    /// Parses `words` and sums probability over all derivations.
    pub fn run(words: &[&str], grammar: &Grammar) -> InsideResult {
        let chart = ChartEngine::parse(words, grammar, &Inside);
        let probability = if words.is_empty() {
            0.0
        } else {
            chart
                .get(0, words.len(), grammar.start())
                .copied()
                .unwrap_or(0.0)
        };
        InsideResult { chart, probability }
    }
}

// ============================================================================
// Tests
// ============================================================================
