use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A derivation of a substring from a single symbol.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub enum DerivationTree<S> {
    /// Application of `symbol -> terminal`.
    Leaf { symbol: S, terminal: S },
    /// Application of `symbol -> B C`, where `left` and `right` derive from `B` and `C`.
    Binary {
        symbol: S,
        left: Box<DerivationTree<S>>,
        right: Box<DerivationTree<S>>,
    },
}

impl<S> DerivationTree<S> {
    /// Returns the symbol at the root.
    pub fn symbol(&self) -> &S {
        match self {
            DerivationTree::Leaf { symbol, .. } | DerivationTree::Binary { symbol, .. } => symbol,
        }
    }

    /// Returns the derived terminals from left to right.
    pub fn leaves(&self) -> Vec<&S> {
        let mut leaves = vec![];
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, leaves: &mut Vec<&'a S>) {
        match self {
            DerivationTree::Leaf { terminal, .. } => leaves.push(terminal),
            DerivationTree::Binary { left, right, .. } => {
                left.collect_leaves(leaves);
                right.collect_leaves(leaves);
            }
        }
    }

    /// Returns the number of rule applications on the longest path from the root.
    pub fn depth(&self) -> usize {
        match self {
            DerivationTree::Leaf { .. } => 1,
            DerivationTree::Binary { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

impl<S> DerivationTree<S>
where
    S: fmt::Display,
{
    /// Renders the tree as nested tuples, with the right subtree of every binary
    /// node aligned under its left subtree.
    ///
    /// ```text
    /// (S, (A, (a,)),
    ///     (B, (b,)))
    /// ```
    pub fn format(&self) -> String {
        self.lines().join("\n")
    }

    fn lines(&self) -> Vec<String> {
        match self {
            DerivationTree::Leaf { symbol, terminal } => {
                vec![format!("({}, ({},))", symbol, terminal)]
            }
            DerivationTree::Binary {
                symbol,
                left,
                right,
            } => {
                let head = format!("({}, ", symbol);
                let indent = " ".repeat(head.chars().count());
                let mut left_lines = left.lines();
                let mut right_lines = right.lines();
                if let Some(last) = left_lines.last_mut() {
                    last.push(',');
                }
                if let Some(last) = right_lines.last_mut() {
                    last.push(')');
                }
                left_lines
                    .into_iter()
                    .chain(right_lines)
                    .enumerate()
                    .map(|(i, line)| {
                        let prefix = if i == 0 { &head } else { &indent };
                        format!("{}{}", prefix, line)
                    })
                    .collect()
            }
        }
    }
}

impl<S> fmt::Display for DerivationTree<S>
where
    S: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.format())
    }
}
