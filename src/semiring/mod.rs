//! The score/derivation algebra injected into the chart engine.
//!
//! All four parse modes run the same bottom-up dynamic program; they
//! differ only in what a cell entry *means* and how alternative
//! derivations are merged. [`Semiring`] captures exactly that difference
//! as two operations:
//!
//! - [`combine`](Semiring::combine): score one specific derivation
//!   assembled from a rule and two sub-cell entries (logical AND for
//!   recognition, `weight x left x right` for Viterbi/inside).
//! - [`aggregate`](Semiring::aggregate): merge a candidate derivation
//!   into whatever the cell already holds for that nonterminal (append /
//!   OR / max / sum).
//!
//! The zero of the algebra — "no derivation yet" — is represented by
//! absence: `aggregate` receives `None` for the first contribution to an
//! entry, and a nonterminal with no contributions never appears in the
//! cell at all.
//!
//! Implementations provided by this crate:
//!
//! - [`Enumeration`](crate::enumerate::Enumeration): keeps every distinct
//!   derivation as an eagerly-rendered description string.
//! - [`Recognition`](crate::recognize::Recognition): presence only.
//! - [`Viterbi`](crate::viterbi::Viterbi): best score plus the
//!   backpointer that produced it.
//! - [`Inside`](crate::inside::Inside): probability summed over all
//!   derivations.
//!
//! # References
//!
//! - Goodman (1999), *Semiring Parsing*
//! - Kasami (1965); Younger (1967); Cocke & Schwartz (1970) — the CYK
//!   recognizer the shared sweep implements

use crate::grammar::{BinaryRule, LexicalRule};

/// A pluggable scoring algebra for the chart engine.
///
/// The engine calls [`lexical`](Self::lexical) while seeding width-1
/// cells, [`combine`](Self::combine) for every applicable (rule, split)
/// pair, and [`aggregate`](Self::aggregate) to fold each candidate into
/// the target cell. Nothing else about the sweep is mode-dependent.
pub trait Semiring {
    /// The value stored per nonterminal in a chart cell.
    type Entry: Clone + std::fmt::Debug;

    /// Entry for a lexical seed `A -> word`.
    fn lexical(&self, rule: &LexicalRule) -> Self::Entry;

    /// Candidate entry for one application of `rule` over the span
    /// `[start,end)` split at `split`, from the entries of the two
    /// sub-cells.
    ///
    /// The span coordinates are part of the signature because the
    /// enumeration mode renders them into its derivation descriptions.
    fn combine(
        &self,
        rule: &BinaryRule,
        start: usize,
        split: usize,
        end: usize,
        left: &Self::Entry,
        right: &Self::Entry,
    ) -> Self::Entry;

    /// Folds `candidate` into the entry a cell already holds.
    ///
    /// `existing` is `None` on the first contribution (the semiring
    /// zero). Candidates arrive in a fixed order (ascending split, then
    /// grammar declaration order), and implementations that break ties
    /// (Viterbi) or build lists (enumeration) rely on that order being
    /// stable.
    fn aggregate(&self, existing: Option<Self::Entry>, candidate: Self::Entry) -> Self::Entry;
}
