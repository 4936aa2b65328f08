//! Error types for grammar construction and tree extraction.
//!
//! Failing to parse a sentence is *not* an error anywhere in this crate:
//! an unparsable input shows up as an absent start symbol (or a zero
//! probability) in the top chart cell. The only fallible operations are
//! building a [`Grammar`](crate::grammar::Grammar) and extracting a tree
//! for a symbol that is not actually in a cell.

use thiserror::Error;

/// Errors detected while building a [`Grammar`](crate::grammar::Grammar).
///
/// All of these are raised by
/// [`GrammarBuilder::build`](crate::grammar::GrammarBuilder::build),
/// before any chart work begins.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GrammarError {
    /// A rule weight is negative, NaN, or infinite.
    #[error("rule '{rule}' has invalid weight {weight} (must be finite and non-negative)")]
    InvalidWeight { rule: String, weight: f64 },

    /// A rule contains an empty nonterminal or terminal.
    #[error("rule '{rule}' contains an empty symbol")]
    EmptySymbol { rule: String },

    /// The designated start symbol is empty.
    #[error("start symbol must not be empty")]
    EmptyStartSymbol,
}

/// Errors raised by Viterbi tree extraction.
///
/// Extraction is only defined for symbols actually present in a cell;
/// asking for anything else is a caller bug, not a parse outcome.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ExtractError {
    /// The requested symbol has no derivation over the requested span.
    #[error("no derivation of '{symbol}' over span [{start},{end})")]
    NoDerivation {
        symbol: String,
        start: usize,
        end: usize,
    },
}
