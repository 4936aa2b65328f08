//! The validated grammar container.

use super::types::{BinaryRule, LexicalRule};
use crate::error::GrammarError;
use std::collections::HashMap;

/// A validated CNF grammar: binary rules, a lexicon, and a start symbol.
///
/// Construct via [`Grammar::builder`]; validation happens once in
/// [`GrammarBuilder::build`] and a `Grammar` is immutable afterwards, so
/// it can be shared freely across concurrent parse calls.
///
/// # Examples
///
/// ```
/// use chartparse::grammar::Grammar;
///
/// let grammar = Grammar::builder("S")
///     .binary("S", "NP", "VP", 1.0)
///     .lexical("NP", "astronomers", 0.4)
///     .lexical("VP", "left", 0.6)
///     .build()
///     .unwrap();
///
/// assert_eq!(grammar.start(), "S");
/// assert_eq!(grammar.binary_rules().len(), 1);
/// assert_eq!(grammar.lexical_rules_for("astronomers").len(), 1);
/// // Unknown words are a normal case, not an error.
/// assert!(grammar.lexical_rules_for("telescope").is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Grammar {
    start: String,
    binary: Vec<BinaryRule>,
    lexicon: HashMap<String, Vec<LexicalRule>>,
}

impl Grammar {
    /// Starts building a grammar with the given start symbol.
    pub fn builder(start: impl Into<String>) -> GrammarBuilder {
        GrammarBuilder {
            start: start.into(),
            binary: Vec::new(),
            lexical: Vec::new(),
        }
    }

    /// The designated start symbol.
    pub fn start(&self) -> &str {
        &self.start
    }

    /// All binary rules, in declaration order.
    pub fn binary_rules(&self) -> &[BinaryRule] {
        &self.binary
    }

    /// The lexical rules rewriting to `word`, in declaration order.
    ///
    /// Returns an empty slice for words absent from the lexicon: an
    /// unknown token simply contributes nothing to its seed cell.
    pub fn lexical_rules_for(&self, word: &str) -> &[LexicalRule] {
        self.lexicon.get(word).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Builder for [`Grammar`].
///
/// Rules are collected in call order; [`build`](Self::build) validates
/// them and produces the immutable grammar.
#[derive(Debug, Clone)]
pub struct GrammarBuilder {
    start: String,
    binary: Vec<BinaryRule>,
    lexical: Vec<LexicalRule>,
}

impl GrammarBuilder {
    /// Adds a binary rule `left -> right1 right2`.
    pub fn binary(
        mut self,
        left: impl Into<String>,
        right1: impl Into<String>,
        right2: impl Into<String>,
        weight: f64,
    ) -> Self {
        self.binary.push(BinaryRule::new(left, right1, right2, weight));
        self
    }

    /// Adds a lexical rule `left -> word`.
    pub fn lexical(
        mut self,
        left: impl Into<String>,
        word: impl Into<String>,
        weight: f64,
    ) -> Self {
        self.lexical.push(LexicalRule::new(left, word, weight));
        self
    }

    /// Adds an already-constructed binary rule.
    pub fn binary_rule(mut self, rule: BinaryRule) -> Self {
        self.binary.push(rule);
        self
    }

    /// Adds an already-constructed lexical rule.
    pub fn lexical_rule(mut self, rule: LexicalRule) -> Self {
        self.lexical.push(rule);
        self
    }

    /// Validates the collected rules and builds the grammar.
    ///
    /// # Errors
    ///
    /// [`GrammarError::InvalidWeight`] for a negative or non-finite
    /// weight, [`GrammarError::EmptySymbol`] for an empty nonterminal or
    /// terminal, [`GrammarError::EmptyStartSymbol`] for an empty start
    /// symbol.
    pub fn build(self) -> Result<Grammar, GrammarError> {
        if self.start.is_empty() {
            return Err(GrammarError::EmptyStartSymbol);
        }

        for rule in &self.binary {
            check_weight(rule.to_string(), rule.weight)?;
            if rule.left.is_empty() || rule.right1.is_empty() || rule.right2.is_empty() {
                return Err(GrammarError::EmptySymbol {
                    rule: rule.to_string(),
                });
            }
        }
        for rule in &self.lexical {
            check_weight(rule.to_string(), rule.weight)?;
            if rule.left.is_empty() || rule.word.is_empty() {
                return Err(GrammarError::EmptySymbol {
                    rule: rule.to_string(),
                });
            }
        }

        let mut lexicon: HashMap<String, Vec<LexicalRule>> = HashMap::new();
        for rule in self.lexical {
            lexicon.entry(rule.word.clone()).or_default().push(rule);
        }

        Ok(Grammar {
            start: self.start,
            binary: self.binary,
            lexicon,
        })
    }
}

fn check_weight(rule: String, weight: f64) -> Result<(), GrammarError> {
    if !weight.is_finite() || weight < 0.0 {
        return Err(GrammarError::InvalidWeight { rule, weight });
    }
    Ok(())
}
