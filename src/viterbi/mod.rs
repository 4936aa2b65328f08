//! Most-probable-derivation (Viterbi) parsing.
//!
//! Each cell entry keeps the single best score for its nonterminal plus
//! the [`Backpointer`] that produced it; after the fill, the best tree is
//! reconstructed by following backpointers from the top cell.
//!
//! Ties are broken in favor of the earliest-found derivation (smallest
//! split point, then earliest rule): a later candidate replaces the
//! stored one only when its score is *strictly* greater. Probabilities
//! assembled from different rule orders can coincide exactly, so this
//! tie-break is observable and kept stable.

mod extract;

pub use extract::extract;

use crate::chart::{Backpointer, Chart, ChartEngine};
use crate::grammar::{BinaryRule, Grammar, LexicalRule};
use crate::semiring::Semiring;
use crate::tree::TreeNode;

/// Per-nonterminal record: the best score and how it was derived.
#[derive(Debug, Clone, PartialEq)]
pub struct BestDerivation {
    /// Probability of the best derivation found so far.
    pub score: f64,
    /// The production step that achieved it.
    pub back: Backpointer,
}

/// The max-product semiring with backpointers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Viterbi;

impl Semiring for Viterbi {
    type Entry = BestDerivation;

    fn lexical(&self, rule: &LexicalRule) -> BestDerivation {
        BestDerivation {
            score: rule.weight,
            back: Backpointer::Leaf {
                word: rule.word.clone(),
            },
        }
    }

    fn combine(
        &self,
        rule: &BinaryRule,
        _start: usize,
        split: usize,
        _end: usize,
        left: &BestDerivation,
        right: &BestDerivation,
    ) -> BestDerivation {
        BestDerivation {
            score: rule.weight * left.score * right.score,
            back: Backpointer::Binary {
                split,
                left: rule.right1.clone(),
                right: rule.right2.clone(),
            },
        }
    }

    fn aggregate(
        &self,
        existing: Option<BestDerivation>,
        candidate: BestDerivation,
    ) -> BestDerivation {
        match existing {
            // Strict comparison: on an exact tie the earlier derivation
            // stays, so the stored backpointer is reproducible.
            Some(best) if candidate.score <= best.score => best,
            _ => candidate,
        }
    }
}

/// The best whole-sentence parse.
#[derive(Debug, Clone, PartialEq)]
pub struct BestParse {
    /// Probability of the best derivation of the start symbol.
    pub probability: f64,
    /// The derivation tree itself.
    pub tree: TreeNode,
}

/// Result of a Viterbi run.
#[derive(Debug, Clone, PartialEq)]
pub struct ViterbiResult {
    /// The filled chart of best scores and backpointers.
    pub chart: Chart<BestDerivation>,
    /// The reconstructed best parse, or `None` for an unparsable
    /// sentence.
    pub best: Option<BestParse>,
}

/// Runs Viterbi parsing.
///
/// # Usage
///
/// ```
/// use chartparse::grammar::Grammar;
/// use chartparse::viterbi::ViterbiRunner;
///
/// let grammar = Grammar::builder("S")
///     .binary("S", "NP", "VP", 1.0)
///     .lexical("NP", "dogs", 0.5)
///     .lexical("VP", "bark", 0.5)
///     .build()
///     .unwrap();
///
/// let result = ViterbiRunner::run(&["dogs", "bark"], &grammar);
/// let best = result.best.unwrap();
/// assert_eq!(best.tree.to_string(), "(S (NP dogs) (VP bark))");
/// assert!((best.probability - 0.25).abs() < 1e-12);
/// ```
pub struct ViterbiRunner;

impl ViterbiRunner {
    /// Parses `words` and reconstructs the most probable tree, if any.
    pub fn run(words: &[&str], grammar: &Grammar) -> ViterbiResult {
        let chart = ChartEngine::parse(words, grammar, &Viterbi);
        let n = words.len();
        let best = if n == 0 {
            None
        } else {
            chart.get(0, n, grammar.start()).map(|record| {
                let tree = extract(&chart, 0, n, grammar.start())
                    .expect("start symbol just found in top cell");
                BestParse {
                    probability: record.score,
                    tree,
                }
            })
        };
        ViterbiResult { chart, best }
    }
}

// ============================================================================
// Tests
// ============================================================================
