//! Deduplicated membership (CKY recognition).
//!
//! The classic boolean CYK: each cell is the *set* of nonterminals
//! derivable over its span, and the sentence is valid iff the start
//! symbol covers the whole input. Once a nonterminal is present, further
//! derivations contribute no new information.

use crate::chart::{Chart, ChartEngine};
use crate::grammar::{BinaryRule, Grammar, LexicalRule};
use crate::semiring::Semiring;

/// The boolean semiring: presence only, no payload.
///
/// `combine` is logical AND: it is only ever invoked when both
/// sub-entries exist, so there is nothing left to compute. `aggregate`
/// is logical OR, which presence in the cell map already encodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Recognition;

impl Semiring for Recognition {
    type Entry = ();

    fn lexical(&self, _rule: &LexicalRule) {}

    fn combine(
        &self,
        _rule: &BinaryRule,
        _start: usize,
        _split: usize,
        _end: usize,
        _left: &(),
        _right: &(),
    ) {
    }

    fn aggregate(&self, _existing: Option<()>, _candidate: ()) {}
}

/// Result of a recognition run.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognizeResult {
    /// The filled chart; each cell's key set is the recognition set.
    pub chart: Chart<()>,
    /// Whether the start symbol derives the whole sentence.
    pub valid: bool,
}

impl RecognizeResult {
    /// The nonterminals derivable over `[start,end)`, in lexicographic
    /// order.
    pub fn symbols(&self, start: usize, end: usize) -> Vec<&str> {
        self.chart
            .cell(start, end)
            .keys()
            .map(String::as_str)
            .collect()
    }
}

/// Runs CKY recognition.
///
/// # Usage
///
/// ```
/// use chartparse::grammar::Grammar;
/// use chartparse::recognize::RecognizeRunner;
///
/// let grammar = Grammar::builder("S")
///     .binary("S", "NP", "VP", 1.0)
///     .lexical("NP", "dogs", 1.0)
///     .lexical("VP", "bark", 1.0)
///     .build()
///     .unwrap();
///
/// let result = RecognizeRunner::run(&["dogs", "bark"], &grammar);
/// assert!(result.valid);
/// ```
pub struct RecognizeRunner;

impl RecognizeRunner {
    /// Parses `words` and reports the membership verdict.
    ///
    /// An unparsable or empty sentence yields `valid == false`; neither
    /// is an error.
    pub fn run(words: &[&str], grammar: &Grammar) -> RecognizeResult {
        let chart = ChartEngine::parse(words, grammar, &Recognition);
        let valid = chart
            .top()
            .is_some_and(|top| top.contains_key(grammar.start()));
        RecognizeResult { chart, valid }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn part2_grammar() -> Grammar {
        Grammar::builder("S")
            .binary("S", "NP", "VP", 1.0)
            .binary("NP", "JJ", "NP", 1.0)
            .binary("VP", "VP", "NP", 1.0)
            .binary("VP", "VP", "PP", 1.0)
            .binary("PP", "P", "NP", 1.0)
            .lexical("NP", "British", 1.0)
            .lexical("JJ", "British", 1.0)
            .lexical("NP", "left", 1.0)
            .lexical("VP", "left", 1.0)
            .lexical("NP", "waffles", 1.0)
            .lexical("VP", "waffles", 1.0)
            .lexical("P", "on", 1.0)
            .lexical("NP", "Falklands", 1.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_british_left_waffles_is_valid() {
        let grammar = part2_grammar();
        let result = RecognizeRunner::run(
            &["British", "left", "waffles", "on", "Falklands"],
            &grammar,
        );
        assert!(result.valid);
        assert!(result.chart.contains(0, 5, "S"));
    }

    #[test]
    fn test_cell_sets_match_hand_filled_table() {
        let grammar = part2_grammar();
        let result = RecognizeRunner::run(
            &["British", "left", "waffles", "on", "Falklands"],
            &grammar,
        );

        assert_eq!(result.symbols(0, 1), ["JJ", "NP"]);
        assert_eq!(result.symbols(0, 2), ["NP", "S"]);
        assert_eq!(result.symbols(1, 3), ["S", "VP"]);
        assert_eq!(result.symbols(3, 5), ["PP"]);
        assert_eq!(result.symbols(2, 5), ["VP"]);
        assert_eq!(result.symbols(1, 5), ["S", "VP"]);
        assert_eq!(result.symbols(0, 5), ["S"]);
        assert!(result.symbols(2, 4).is_empty());
        assert!(result.symbols(0, 4).is_empty());
    }

    #[test]
    fn test_prefix_is_invalid() {
        let grammar = part2_grammar();
        let result = RecognizeRunner::run(&["British", "left", "waffles", "on"], &grammar);
        assert!(!result.valid);
    }

    #[test]
    fn test_unknown_word_is_invalid_not_error() {
        let grammar = part2_grammar();
        let result = RecognizeRunner::run(
            &["British", "left", "pancakes", "on", "Falklands"],
            &grammar,
        );
        assert!(!result.valid);
        assert!(result.symbols(2, 3).is_empty());
    }

    #[test]
    fn test_empty_sentence_is_invalid_not_fault() {
        let grammar = part2_grammar();
        let result = RecognizeRunner::run(&[], &grammar);
        assert!(!result.valid);
        assert!(result.chart.is_empty());
    }
}
