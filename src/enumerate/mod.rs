//! Full derivation enumeration.
//!
//! Instead of deduplicating, every complete derivation of a nonterminal
//! over a span is kept as its own entry, rendered eagerly to a
//! human-readable description:
//!
//! - lexical: `NP -> waffles`
//! - binary: `VP -> VP[1,2] + NP[2,3]`
//!
//! Each description names the local production step; its sub-cells were
//! already resolved when the string was built, so listing a cell needs
//! no recursive reconstruction. A nonterminal derivable in two different
//! ways over the same span appears twice — once per complete derivation,
//! so the entry count for a nonterminal equals its derivation count.

use crate::chart::{Chart, ChartEngine};
use crate::grammar::{BinaryRule, Grammar, LexicalRule};
use crate::semiring::Semiring;

/// The list-building semiring: keeps every derivation, collapses nothing.
///
/// `combine` emits one description per pairing of a left and a right
/// sub-derivation (all pairings share the same local step, so the string
/// is simply repeated); `aggregate` appends.
#[derive(Debug, Clone, Copy, Default)]
pub struct Enumeration;

impl Semiring for Enumeration {
    type Entry = Vec<String>;

    fn lexical(&self, rule: &LexicalRule) -> Vec<String> {
        vec![format!("{} -> {}", rule.left, rule.word)]
    }

    fn combine(
        &self,
        rule: &BinaryRule,
        start: usize,
        split: usize,
        end: usize,
        left: &Vec<String>,
        right: &Vec<String>,
    ) -> Vec<String> {
        let description = format!(
            "{} -> {}[{},{}] + {}[{},{}]",
            rule.left, rule.right1, start, split, rule.right2, split, end
        );
        vec![description; left.len() * right.len()]
    }

    fn aggregate(&self, existing: Option<Vec<String>>, candidate: Vec<String>) -> Vec<String> {
        let mut merged = existing.unwrap_or_default();
        merged.extend(candidate);
        merged
    }
}

/// Result of an enumeration run.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumerateResult {
    /// The filled chart; each entry is the ordered list of derivation
    /// descriptions for that nonterminal.
    pub chart: Chart<Vec<String>>,
}

impl EnumerateResult {
    /// All `(nonterminal, description)` pairs of a cell, flattened.
    ///
    /// Nonterminals come out in lexicographic order; within one
    /// nonterminal, descriptions keep discovery order (ascending split,
    /// then rule declaration order).
    pub fn derivations(&self, start: usize, end: usize) -> Vec<(&str, &str)> {
        self.chart
            .cell(start, end)
            .iter()
            .flat_map(|(symbol, descriptions)| {
                descriptions
                    .iter()
                    .map(move |d| (symbol.as_str(), d.as_str()))
            })
            .collect()
    }

    /// Number of complete derivations of `symbol` over `[start,end)`.
    pub fn count(&self, start: usize, end: usize, symbol: &str) -> usize {
        self.chart.get(start, end, symbol).map_or(0, Vec::len)
    }
}

/// Runs derivation enumeration.
pub struct EnumerateRunner;

impl EnumerateRunner {
    /// Parses `words`, keeping every derivation of every cell.
    pub fn run(words: &[&str], grammar: &Grammar) -> EnumerateResult {
        EnumerateResult {
            chart: ChartEngine::parse(words, grammar, &Enumeration),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn part1_grammar() -> Grammar {
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

    const SENTENCE: [&str; 5] = ["British", "left", "waffles", "on", "Falklands"];

    #[test]
    fn test_lexical_descriptions() {
        let result = EnumerateRunner::run(&SENTENCE, &part1_grammar());
        assert_eq!(
            result.derivations(0, 1),
            [("JJ", "JJ -> British"), ("NP", "NP -> British")]
        );
    }

    #[test]
    fn test_ambiguous_cell_keeps_both_derivations() {
        let result = EnumerateRunner::run(&SENTENCE, &part1_grammar());

        // "British left waffles" is an S two ways: [British][left waffles]
        // and [British left][waffles].
        assert_eq!(result.count(0, 3, "S"), 2);
        assert_eq!(
            result.derivations(0, 3),
            [
                ("S", "S -> NP[0,1] + VP[1,3]"),
                ("S", "S -> NP[0,2] + VP[2,3]"),
            ]
        );
    }

    #[test]
    fn test_top_cell() {
        let result = EnumerateRunner::run(&SENTENCE, &part1_grammar());
        assert_eq!(result.count(0, 5, "S"), 2);
        assert_eq!(
            result.derivations(0, 5),
            [
                ("S", "S -> NP[0,1] + VP[1,5]"),
                ("S", "S -> NP[0,2] + VP[2,5]"),
            ]
        );
    }

    #[test]
    fn test_empty_cells() {
        let result = EnumerateRunner::run(&SENTENCE, &part1_grammar());
        assert!(result.derivations(2, 4).is_empty());
        assert!(result.derivations(0, 4).is_empty());
        assert_eq!(result.count(0, 4, "S"), 0);
    }

    #[test]
    fn test_multiplicity_counts_complete_derivations() {
        // S -> S S over "a a a a" has Catalan(3) = 5 binary bracketings.
        let grammar = Grammar::builder("S")
            .binary("S", "S", "S", 1.0)
            .lexical("S", "a", 1.0)
            .build()
            .unwrap();
        let result = EnumerateRunner::run(&["a", "a", "a", "a"], &grammar);

        assert_eq!(result.count(0, 4, "S"), 5);
        // The split-1 step is stored once per derivation it heads: the
        // right sub-span "a a a" has two parses of its own.
        let descriptions = result.chart.get(0, 4, "S").unwrap();
        assert_eq!(descriptions[0], "S -> S[0,1] + S[1,4]");
        assert_eq!(descriptions[1], "S -> S[0,1] + S[1,4]");
        assert_eq!(descriptions[2], "S -> S[0,2] + S[2,4]");
    }

    #[test]
    fn test_determinism() {
        let grammar = part1_grammar();
        let a = EnumerateRunner::run(&SENTENCE, &grammar);
        let b = EnumerateRunner::run(&SENTENCE, &grammar);
        assert_eq!(a, b);
    }
}
