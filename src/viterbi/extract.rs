//! Tree reconstruction from a Viterbi chart.

use super::BestDerivation;
use crate::chart::{Backpointer, Chart};
use crate::error::ExtractError;
use crate::tree::TreeNode;

/// Reconstructs the best derivation tree of `symbol` over `[start,end)`.
///
/// Follows the stored backpointers: a [`Backpointer::Binary`] recurses
/// into the two sub-spans, a [`Backpointer::Leaf`] closes off a
/// preterminal. The span strictly shrinks on every call, so recursion
/// depth is bounded by the sentence length.
///
/// # Errors
///
/// [`ExtractError::NoDerivation`] if `symbol` has no entry in the cell.
/// Callers are expected to check presence first (as
/// [`ViterbiRunner`](super::ViterbiRunner) does); hitting this error
/// indicates a caller bug, not an unparsable sentence.
pub fn extract(
    chart: &Chart<BestDerivation>,
    start: usize,
    end: usize,
    symbol: &str,
) -> Result<TreeNode, ExtractError> {
    let record = chart
        .get(start, end, symbol)
        .ok_or_else(|| ExtractError::NoDerivation {
            symbol: symbol.to_string(),
            start,
            end,
        })?;

    match &record.back {
        Backpointer::Leaf { word } => Ok(TreeNode::preterminal(symbol, word.clone())),
        Backpointer::Binary { split, left, right } => {
            let left_tree = extract(chart, start, *split, left)?;
            let right_tree = extract(chart, *split, end, right)?;
            Ok(TreeNode::branch(symbol, vec![left_tree, right_tree]))
        }
    }
}
