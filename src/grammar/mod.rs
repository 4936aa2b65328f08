//! CNF grammars: rule types and the validated [`Grammar`] container.
//!
//! A grammar in Chomsky Normal Form has exactly two production shapes:
//!
//! - binary: `A -> B C` (two nonterminals), [`BinaryRule`]
//! - lexical: `A -> w` (one terminal), [`LexicalRule`]
//!
//! Both shapes are enforced by the rule types themselves, so the only
//! validation left for [`GrammarBuilder::build`] is weight sanity and
//! non-empty symbols. Weights are plain `f64` scores: probabilities for
//! the Viterbi/inside modes, conventionally `1.0` for recognition and
//! enumeration. The engine does not normalize or check grammar
//! consistency.
//!
//! Rule declaration order is preserved and observable: the chart engine
//! visits binary rules in declaration order, which fixes the Viterbi
//! tie-break and the enumeration listing order.

mod model;
mod types;

pub use model::{Grammar, GrammarBuilder};
pub use types::{BinaryRule, LexicalRule};
