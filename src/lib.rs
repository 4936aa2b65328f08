//! Semiring-parameterized chart parsing for CNF grammars.
//!
//! Provides one bottom-up CYK dynamic program evaluated under pluggable
//! scoring algebras:
//!
//! - **Enumeration**: every distinct derivation of every cell, rendered
//!   as human-readable description strings.
//! - **Recognition**: set-valued membership — which nonterminals cover
//!   which spans, and whether the sentence is valid.
//! - **Viterbi**: the most probable derivation, with backpointers and
//!   tree reconstruction.
//! - **Inside**: total sentence probability, summed over all
//!   derivations.
//!
//! The four modes share the [`chart::ChartEngine`] sweep verbatim; a
//! [`semiring::Semiring`] implementation supplies the two operations
//! that differ (combining one derivation, aggregating alternatives).
//! Each mode module also ships a `Runner` with a plain
//! `run(words, &grammar)` entry point.
//!
//! # Architecture
//!
//! This crate is the algorithmic core only. Grammars arrive as data
//! through [`grammar::GrammarBuilder`]; tokenization, table rendering,
//! tree pretty-printing, and file loading are left to consumers, which
//! walk the returned [`chart::Chart`] and [`tree::TreeNode`] structures
//! directly.

pub mod chart;
pub mod enumerate;
pub mod error;
pub mod grammar;
pub mod inside;
pub mod recognize;
pub mod semiring;
pub mod tree;
pub mod viterbi;
