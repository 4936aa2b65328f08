//! The triangular parse chart and the engine that fills it.
//!
//! [`Chart`] is the dense table of a single parse call: one
//! nonterminal-to-entry map per span `[i,j)` with `i < j <= n`.
//! [`ChartEngine`] fills it bottom-up in increasing span length under a
//! caller-supplied [`Semiring`](crate::semiring::Semiring).
//!
//! A chart is created by one `parse` call, never mutated afterwards, and
//! never shared between calls.

mod engine;
mod types;

pub use engine::ChartEngine;
pub use types::{Backpointer, Cell, Chart};
