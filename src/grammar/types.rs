//! Production rule types.

use std::fmt;

/// A binary production `A -> B C`.
///
/// The two right-hand nonterminals are separate fields, so a binary rule
/// with any other arity is unrepresentable.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinaryRule {
    /// Left-hand nonterminal (`A`).
    pub left: String,
    /// First right-hand nonterminal (`B`).
    pub right1: String,
    /// Second right-hand nonterminal (`C`).
    pub right2: String,
    /// Rule score. Finite and non-negative; a probability for PCFG use.
    pub weight: f64,
}

impl BinaryRule {
    /// Creates a binary rule `left -> right1 right2` with the given weight.
    pub fn new(
        left: impl Into<String>,
        right1: impl Into<String>,
        right2: impl Into<String>,
        weight: f64,
    ) -> Self {
        Self {
            left: left.into(),
            right1: right1.into(),
            right2: right2.into(),
            weight,
        }
    }
}

impl fmt::Display for BinaryRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} {}", self.left, self.right1, self.right2)
    }
}

/// A lexical production `A -> word`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LexicalRule {
    /// Left-hand nonterminal (`A`).
    pub left: String,
    /// The terminal this rule rewrites to.
    pub word: String,
    /// Rule score. Finite and non-negative; a probability for PCFG use.
    pub weight: f64,
}

impl LexicalRule {
    /// Creates a lexical rule `left -> word` with the given weight.
    pub fn new(left: impl Into<String>, word: impl Into<String>, weight: f64) -> Self {
        Self {
            left: left.into(),
            word: word.into(),
            weight,
        }
    }
}

impl fmt::Display for LexicalRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.left, self.word)
    }
}
