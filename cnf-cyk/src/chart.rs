//! The CYK chart and extraction of derivation trees.

use std::collections::HashMap;
use std::hash::Hash;
use std::iter::FusedIterator;
use std::rc::Rc;
use std::{slice, vec};

use bit_matrix::BitMatrix;

use crate::intern::SymbolInterner;
use crate::tree::DerivationTree;

type NodeId = usize;

/// A contiguous substring of the input.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub(crate) struct Span {
    pub(crate) start: usize,
    pub(crate) len: usize,
}

impl Span {
    /// Splits into a left part of `at` symbols and the rest.
    pub(crate) fn split(self, at: usize) -> (Span, Span) {
        (
            Span {
                start: self.start,
                len: at,
            },
            Span {
                start: self.start + at,
                len: self.len - at,
            },
        )
    }
}

/// A node of the derivation forest. Nodes refer to their children by index, so one
/// subtree is shared by every derivation that contains it.
#[derive(Clone, Copy, Debug)]
enum Node {
    Leaf {
        symbol: usize,
        position: usize,
    },
    Binary {
        symbol: usize,
        left: NodeId,
        right: NodeId,
    },
}

/// Every derivation of every substring of the input, for every symbol.
#[derive(Clone, Debug)]
pub struct Chart<S> {
    symbols: Rc<SymbolInterner<S>>,
    input: Vec<S>,
    /// Rows are spans, columns are symbols.
    occupied: BitMatrix,
    cells: HashMap<(Span, usize), Vec<NodeId>>,
    nodes: Vec<Node>,
}

impl<S> Chart<S>
where
    S: Hash + Eq + Clone,
{
    pub(crate) fn new(symbols: Rc<SymbolInterner<S>>, input: Vec<S>) -> Self {
        let n = input.len();
        Chart {
            occupied: BitMatrix::new(n * n, symbols.len()),
            symbols,
            input,
            cells: HashMap::new(),
            nodes: vec![],
        }
    }

    fn row(&self, span: Span) -> usize {
        (span.len - 1) * self.input.len() + span.start
    }

    fn push(&mut self, span: Span, symbol: usize, node: Node) {
        let id = self.nodes.len();
        self.nodes.push(node);
        let row = self.row(span);
        self.occupied.set(row, symbol, true);
        self.cells.entry((span, symbol)).or_default().push(id);
    }

    pub(crate) fn push_leaf(&mut self, symbol: usize, position: usize) {
        let span = Span {
            start: position,
            len: 1,
        };
        self.push(span, symbol, Node::Leaf { symbol, position });
    }

    pub(crate) fn push_binary(&mut self, span: Span, symbol: usize, left: NodeId, right: NodeId) {
        self.push(
            span,
            symbol,
            Node::Binary {
                symbol,
                left,
                right,
            },
        );
    }

    pub(crate) fn is_occupied(&self, span: Span, symbol: usize) -> bool {
        self.occupied[(self.row(span), symbol)]
    }

    pub(crate) fn cell(&self, span: Span, symbol: usize) -> &[NodeId] {
        self.cells
            .get(&(span, symbol))
            .map_or(&[][..], |nodes| &nodes[..])
    }

    fn roots(&self, start: &S) -> &[NodeId] {
        match self.symbols.get(start) {
            Some(symbol) if !self.input.is_empty() => {
                let whole = Span {
                    start: 0,
                    len: self.input.len(),
                };
                self.cell(whole, symbol)
            }
            _ => &[],
        }
    }

    fn materialize(&self, id: NodeId) -> DerivationTree<S> {
        match self.nodes[id] {
            Node::Leaf { symbol, position } => DerivationTree::Leaf {
                symbol: self.symbols.resolve(symbol).clone(),
                terminal: self.input[position].clone(),
            },
            Node::Binary {
                symbol,
                left,
                right,
            } => DerivationTree::Binary {
                symbol: self.symbols.resolve(symbol).clone(),
                left: Box::new(self.materialize(left)),
                right: Box::new(self.materialize(right)),
            },
        }
    }

    /// Returns the parsed input.
    pub fn input(&self) -> &[S] {
        &self.input
    }

    /// Returns the number of forest nodes, one per derivation of a substring.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Checks whether the whole input derives from `start`.
    pub fn is_derivable(&self, start: &S) -> bool {
        !self.roots(start).is_empty()
    }

    /// Returns the symbols that derive the substring of `len` symbols at `start`.
    pub fn symbols_at(&self, start: usize, len: usize) -> Vec<&S> {
        if len == 0 || start + len > self.input.len() {
            return vec![];
        }
        let row = self.row(Span { start, len });
        (0..self.symbols.len())
            .filter(|&symbol| self.occupied[(row, symbol)])
            .map(|symbol| self.symbols.resolve(symbol))
            .collect()
    }

    /// Lazily extracts every derivation of the whole input from `start`.
    pub fn trees(&self, start: &S) -> Trees<'_, S> {
        Trees {
            chart: self,
            roots: self.roots(start).iter(),
        }
    }

    /// Lazily extracts every derivation of the whole input from `start`, taking
    /// ownership of the chart.
    pub fn derivations(self, start: &S) -> Derivations<S> {
        let roots = self.roots(start).to_vec();
        Derivations {
            chart: Rc::new(self),
            roots: roots.into_iter(),
        }
    }
}

/// Iterator over derivation trees that borrows its chart.
#[derive(Clone, Debug)]
pub struct Trees<'a, S> {
    chart: &'a Chart<S>,
    roots: slice::Iter<'a, NodeId>,
}

impl<'a, S> Iterator for Trees<'a, S>
where
    S: Hash + Eq + Clone,
{
    type Item = DerivationTree<S>;

    fn next(&mut self) -> Option<Self::Item> {
        self.roots.next().map(|&id| self.chart.materialize(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.roots.size_hint()
    }
}

impl<'a, S> ExactSizeIterator for Trees<'a, S> where S: Hash + Eq + Clone {}

impl<'a, S> FusedIterator for Trees<'a, S> where S: Hash + Eq + Clone {}

/// Iterator over derivation trees that owns its chart. Cloning restarts from the
/// current position.
#[derive(Clone, Debug)]
pub struct Derivations<S> {
    chart: Rc<Chart<S>>,
    roots: vec::IntoIter<NodeId>,
}

impl<S> Derivations<S> {
    /// Returns the chart the trees are extracted from.
    pub fn chart(&self) -> &Chart<S> {
        &self.chart
    }
}

impl<S> Iterator for Derivations<S>
where
    S: Hash + Eq + Clone,
{
    type Item = DerivationTree<S>;

    fn next(&mut self) -> Option<Self::Item> {
        self.roots.next().map(|id| self.chart.materialize(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.roots.size_hint()
    }
}

impl<S> ExactSizeIterator for Derivations<S> where S: Hash + Eq + Clone {}

impl<S> FusedIterator for Derivations<S> where S: Hash + Eq + Clone {}
