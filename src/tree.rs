//! Huffman tree construction.
//!
//! Builds the merge tree by repeatedly joining the two lightest nodes.
//!
//! # Tie-breaking
//!
//! `BinaryHeap` makes no promise about the order in which equal keys come
//! out, so every queued node carries a sequence number. Leaves are numbered
//! in input order and each merged node takes the next number, so equal
//! weights always pop oldest first and the tree shape is reproducible.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::{check_weight, InvalidInput, Result};

/// Huffman tree node.
#[derive(Debug, Clone, PartialEq)]
pub enum Node<S> {
    /// A single alphabet symbol.
    Leaf {
        /// The symbol's input weight.
        weight: f64,
        /// The symbol itself.
        symbol: S,
    },
    /// A merge of two subtrees.
    Internal {
        /// Sum of both children's weights.
        weight: f64,
        /// Subtree reached with bit `0`.
        left: Box<Node<S>>,
        /// Subtree reached with bit `1`.
        right: Box<Node<S>>,
    },
}

impl<S> Node<S> {
    fn merge(left: Self, right: Self) -> Self {
        Node::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Weight of this subtree.
    pub fn weight(&self) -> f64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    /// The symbol, if this is a leaf.
    pub fn symbol(&self) -> Option<&S> {
        match self {
            Node::Leaf { symbol, .. } => Some(symbol),
            Node::Internal { .. } => None,
        }
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Number of leaves below (and including) this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Length of the longest root-to-leaf path, in edges.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Heap entry: a node plus its tie-break sequence number.
struct Queued<S> {
    seq: usize,
    node: Node<S>,
}

impl<S> Queued<S> {
    fn key(&self) -> (f64, usize) {
        (self.node.weight(), self.seq)
    }
}

impl<S> PartialEq for Queued<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S> Eq for Queued<S> {}

impl<S> Ord for Queued<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        let (w, s) = self.key();
        let (ow, os) = other.key();
        // Min-priority queue: lighter first, then older first.
        ow.total_cmp(&w).then_with(|| os.cmp(&s))
    }
}

impl<S> PartialOrd for Queued<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build an optimal Huffman tree from `(symbol, weight)` pairs.
///
/// The iteration order of `weights` decides ties: among equal weights the
/// earlier entry is merged first and ends up on the left. A single pair
/// yields a lone leaf.
///
/// # Errors
///
/// Returns `InvalidInput` when `weights` is empty, when a weight is negative
/// or not finite, or when a symbol appears twice.
pub fn build<S, I>(weights: I) -> Result<Node<S>>
where
    S: Ord,
    I: IntoIterator<Item = (S, f64)>,
{
    let mut leaves = Vec::new();
    for (index, (symbol, weight)) in weights.into_iter().enumerate() {
        let weight = check_weight(index, weight)?;
        leaves.push(Node::Leaf { weight, symbol });
    }
    if leaves.is_empty() {
        return Err(InvalidInput::EmptyAlphabet.into());
    }
    check_unique(&leaves)?;

    let mut pq: BinaryHeap<Queued<S>> = leaves
        .into_iter()
        .enumerate()
        .map(|(seq, node)| Queued { seq, node })
        .collect();
    let mut next_seq = pq.len();

    loop {
        let first = pq.pop().ok_or(InvalidInput::EmptyAlphabet)?;
        let second = match pq.pop() {
            Some(q) => q,
            None => return Ok(first.node),
        };
        pq.push(Queued {
            seq: next_seq,
            node: Node::merge(first.node, second.node),
        });
        next_seq += 1;
    }
}

fn check_unique<S: Ord>(leaves: &[Node<S>]) -> Result<()> {
    let mut order: Vec<(&S, usize)> = leaves
        .iter()
        .enumerate()
        .filter_map(|(i, n)| n.symbol().map(|s| (s, i)))
        .collect();
    order.sort();
    for pair in order.windows(2) {
        if pair[0].0 == pair[1].0 {
            return Err(InvalidInput::DuplicateSymbol { index: pair[1].1 }.into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use proptest::prelude::*;

    fn check_sums<S>(node: &Node<S>) {
        if let Node::Internal {
            weight,
            left,
            right,
        } = node
        {
            assert!((weight - (left.weight() + right.weight())).abs() < 1e-12);
            check_sums(left);
            check_sums(right);
        }
    }

    fn internal_count<S>(node: &Node<S>) -> usize {
        match node {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + internal_count(left) + internal_count(right),
        }
    }

    #[test]
    fn test_single_symbol_is_leaf() {
        let root = build([('z', 0.7)]).unwrap();
        assert_eq!(
            root,
            Node::Leaf {
                weight: 0.7,
                symbol: 'z'
            }
        );
        assert_eq!(root.depth(), 0);
    }

    #[test]
    fn test_two_symbols() {
        let root = build([('x', 0.5), ('y', 0.5)]).unwrap();
        match root {
            Node::Internal { left, right, .. } => {
                assert_eq!(left.symbol(), Some(&'x'));
                assert_eq!(right.symbol(), Some(&'y'));
            }
            Node::Leaf { .. } => panic!("expected an internal root"),
        }
    }

    #[test]
    fn test_lighter_goes_left() {
        let root = build([('h', 0.9), ('l', 0.1)]).unwrap();
        if let Node::Internal { left, right, .. } = root {
            assert_eq!(left.symbol(), Some(&'l'));
            assert_eq!(right.symbol(), Some(&'h'));
        } else {
            panic!("expected an internal root");
        }
    }

    #[test]
    fn test_leaf_wins_tie_against_merged_node() {
        // a+b = 2 ties with c = 2; c is older so it pops first.
        let root = build([('a', 1.0), ('b', 1.0), ('c', 2.0)]).unwrap();
        if let Node::Internal { left, right, .. } = root {
            assert_eq!(left.symbol(), Some(&'c'));
            assert!(!right.is_leaf());
        } else {
            panic!("expected an internal root");
        }
    }

    #[test]
    fn test_shape_counts() {
        let root = build((0u8..10).map(|s| (s, f64::from(s) + 1.0))).unwrap();
        assert_eq!(root.leaf_count(), 10);
        assert_eq!(internal_count(&root), 9);
        assert!((root.weight() - 55.0).abs() < 1e-12);
        check_sums(&root);
    }

    #[test]
    fn test_zero_weights_allowed() {
        let root = build([("a", 0.0), ("b", 0.0), ("c", 1.0)]).unwrap();
        assert_eq!(root.leaf_count(), 3);
        assert_eq!(root.weight(), 1.0);
    }

    #[test]
    fn test_rejects_bad_input() {
        let empty: Vec<(char, f64)> = Vec::new();
        assert_eq!(
            build(empty),
            Err(Error::InvalidInput(InvalidInput::EmptyAlphabet))
        );
        assert!(matches!(
            build([('a', 1.0), ('b', -0.5)]),
            Err(Error::InvalidInput(InvalidInput::Weight { index: 1, .. }))
        ));
        assert!(matches!(
            build([('a', f64::NAN)]),
            Err(Error::InvalidInput(InvalidInput::Weight { index: 0, .. }))
        ));
        assert_eq!(
            build([('a', 1.0), ('b', 1.0), ('a', 2.0)]),
            Err(Error::InvalidInput(InvalidInput::DuplicateSymbol {
                index: 2
            }))
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_tree_invariants(weights in prop::collection::vec(0.0..100.0f64, 1..64)) {
            let n = weights.len();
            let root = build(weights.iter().copied().enumerate()).unwrap();
            prop_assert_eq!(root.leaf_count(), n);
            prop_assert_eq!(internal_count(&root), n - 1);
            check_sums(&root);
        }

        #[test]
        fn prop_build_is_deterministic(weights in prop::collection::vec(0u8..4, 1..32)) {
            let pairs = || weights.iter().map(|&w| f64::from(w)).enumerate();
            prop_assert_eq!(build(pairs()).unwrap(), build(pairs()).unwrap());
        }
    }
}
