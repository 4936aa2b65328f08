//! Structured derivation trees.
//!
//! A [`TreeNode`] is the recursive node type produced by Viterbi tree
//! extraction. Keeping the tree structured — rather than round-tripping
//! through a serialized string — lets rendering collaborators walk it
//! directly; the `Display` impl provides the canonical fully
//! parenthesized bracket notation for consumers that do want text.

use std::fmt;

/// A node of a derivation tree.
///
/// Interior nodes carry a nonterminal label; terminal leaves carry the
/// word itself and have no children. A lexical production `NP -> dogs`
/// becomes a preterminal node `NP` with a single leaf child `dogs`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeNode {
    /// Nonterminal label, or the terminal word for a leaf.
    pub label: String,
    /// Child nodes; empty for terminal leaves.
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// A terminal leaf.
    pub fn leaf(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// An interior node with the given children.
    pub fn branch(label: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            label: label.into(),
            children,
        }
    }

    /// A preterminal: `label` dominating the single terminal `word`.
    pub fn preterminal(label: impl Into<String>, word: impl Into<String>) -> Self {
        Self::branch(label, vec![Self::leaf(word)])
    }

    /// Whether this node is a terminal leaf.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// The terminal yield of the tree, left to right.
    pub fn leaves(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a str>) {
        if self.is_leaf() {
            out.push(self.label.as_str());
        } else {
            for child in &self.children {
                child.collect_leaves(out);
            }
        }
    }
}

/// Bracket notation: `(NT child...)`, terminal leaves written bare, so a
/// preterminal renders as `(NP dogs)`.
impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_leaf() {
            return write!(f, "{}", self.label);
        }
        write!(f, "({}", self.label)?;
        for child in &self.children {
            write!(f, " {child}")?;
        }
        write!(f, ")")
    }
}
