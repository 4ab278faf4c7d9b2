//! Codewords and code extraction.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use crate::tree::Node;

/// A finite bit-string, stored as ASCII `'0'` / `'1'`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Codeword(String);

impl Codeword {
    fn push(&mut self, bit: u8) {
        self.0.push(if bit == 0 { '0' } else { '1' });
    }

    /// The codeword as a string of `'0'` and `'1'`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the codeword has no bits.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Bits in order, as `0` or `1`.
    pub fn bits(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.bytes().map(|b| b - b'0')
    }

    /// Whether `self` is a prefix of `other` (including equality).
    pub fn is_prefix_of(&self, other: &Codeword) -> bool {
        other.0.starts_with(&self.0)
    }
}

impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Codeword {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Mapping from symbol to codeword, ordered by symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<S> {
    codes: BTreeMap<S, Codeword>,
}

impl<S: Ord> CodeTable<S> {
    /// Codeword for `symbol`.
    pub fn get(&self, symbol: &S) -> Option<&Codeword> {
        self.codes.get(symbol)
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the table has no symbols.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Entries in symbol order.
    pub fn iter(&self) -> btree_map::Iter<'_, S, Codeword> {
        self.codes.iter()
    }

    /// Length of the longest codeword, or 0 for an empty table.
    pub fn max_len(&self) -> usize {
        self.codes.values().map(Codeword::len).max().unwrap_or(0)
    }

    /// Whether no codeword is a prefix of another.
    ///
    /// Sorting puts every prefix immediately before some word it prefixes,
    /// so checking neighbours is enough.
    pub fn is_prefix_free(&self) -> bool {
        let mut words: Vec<&Codeword> = self.codes.values().collect();
        words.sort();
        words.windows(2).all(|w| !w[0].is_prefix_of(w[1]))
    }

    /// Expected codeword length in bits under `weights`, normalized by
    /// their total. Symbols missing from the table are ignored.
    ///
    /// Returns 0 when the matched total weight is 0.
    pub fn expected_length<'a, I>(&self, weights: I) -> f64
    where
        S: 'a,
        I: IntoIterator<Item = (&'a S, f64)>,
    {
        let matched: Vec<(f64, usize)> = weights
            .into_iter()
            .filter_map(|(symbol, w)| self.codes.get(symbol).map(|c| (w, c.len())))
            .collect();
        // Scale by the largest weight so the total cannot overflow.
        let max = matched.iter().fold(0.0f64, |m, &(w, _)| m.max(w));
        if max <= 0.0 {
            return 0.0;
        }
        let (total, sum) = matched.iter().fold((0.0, 0.0), |(t, s), &(w, len)| {
            let w = w / max;
            (t + w, s + w * len as f64)
        });
        sum / total
    }

    /// The underlying map.
    pub fn into_inner(self) -> BTreeMap<S, Codeword> {
        self.codes
    }
}

impl<S: Ord> IntoIterator for CodeTable<S> {
    type Item = (S, Codeword);
    type IntoIter = btree_map::IntoIter<S, Codeword>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.into_iter()
    }
}

impl<'a, S: Ord> IntoIterator for &'a CodeTable<S> {
    type Item = (&'a S, &'a Codeword);
    type IntoIter = btree_map::Iter<'a, S, Codeword>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.iter()
    }
}

/// Walk the tree and assign `0` to every left branch and `1` to every
/// right branch.
///
/// A root that is a lone leaf gets the one-bit codeword `"0"`.
pub fn extract<S: Ord>(root: Node<S>) -> CodeTable<S> {
    let mut codes = BTreeMap::new();
    build_codes(root, Codeword::default(), &mut codes);
    CodeTable { codes }
}

fn build_codes<S: Ord>(node: Node<S>, prefix: Codeword, codes: &mut BTreeMap<S, Codeword>) {
    match node {
        Node::Leaf { symbol, .. } => {
            let code = if prefix.is_empty() {
                let mut c = prefix;
                c.push(0);
                c
            } else {
                prefix
            };
            codes.insert(symbol, code);
        }
        Node::Internal { left, right, .. } => {
            let mut left_prefix = prefix.clone();
            left_prefix.push(0);
            build_codes(*left, left_prefix, codes);

            let mut right_prefix = prefix;
            right_prefix.push(1);
            build_codes(*right, right_prefix, codes);
        }
    }
}
