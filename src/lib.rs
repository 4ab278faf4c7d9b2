//! # Huffman Coding
//!
//! *Optimal prefix-free codes from a fixed symbol distribution.*
//!
//! ## Intuition First
//!
//! Frequent symbols should get short codewords and rare symbols long ones. Huffman's
//! construction gets there bottom-up: take the two rarest things you have, glue them
//! together into one "meta-symbol" whose weight is their sum, and repeat until a
//! single tree is left. The two glued things differ only in their last bit, so every
//! merge adds one bit to everything underneath it.
//!
//! ## The Problem
//!
//! Given an alphabet with weights $w_s$, find codewords $c_s$ such that:
//! - no codeword is a prefix of another (so a bit stream decodes unambiguously), and
//! - the expected length $L = \sum_s p_s |c_s|$ is as small as possible.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon     Entropy as the fundamental limit
//! 1949  Kraft       Codeword lengths of a prefix code satisfy sum 2^-l <= 1
//! 1952  Huffman     Greedy merge gives an optimal prefix code
//! 1976  van Voorhis Constructions for length-limited variants
//! ```
//!
//! ## Mathematical Formulation
//!
//! With $p_s = w_s / \sum w$ and entropy $H = -\sum_s p_s \log_2 p_s$, the Huffman code's
//! expected length satisfies
//!
//! ```text
//! H <= L < H + 1
//! ```
//!
//! and no prefix code achieves a smaller $L$.
//!
//! ## Determinism
//!
//! Many different trees are equally optimal. Which one you get depends on how ties
//! between equal weights are broken. This crate breaks them by insertion order
//! (input position for leaves, creation order for merged nodes), so a given input
//! sequence always produces the same code table.
//!
//! ## Complexity Analysis
//!
//! - **Time**: $O(n \log n)$ for $n$ symbols (binary heap, $n - 1$ merges).
//! - **Space**: $O(n)$ for the tree and the table.
//!
//! ## Failure Modes
//!
//! 1. **Empty or malformed input**: rejected with [`Error::InvalidInput`].
//! 2. **Skewed distributions**: Fibonacci-like weights give codewords up to $n - 1$ bits.
//!
//! ## Usage
//!
//! ```
//! use huffcode::huffman_coding;
//!
//! let codes = huffman_coding(&['a', 'b', 'c'], &[0.5, 0.25, 0.25])?;
//! assert!(codes.is_prefix_free());
//! assert_eq!(codes.get(&'a').map(|c| c.len()), Some(1));
//! # Ok::<(), huffcode::Error>(())
//! ```
//!
//! ## References
//!
//! - Huffman, D. A. (1952). "A Method for the Construction of Minimum-Redundancy Codes."
//! - Cover, T. M. & Thomas, J. A. (2006). *Elements of Information Theory*, ch. 5.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod code;
pub mod error;
pub mod huffman;
pub mod tree;

pub use code::{CodeTable, Codeword};
pub use error::{Error, InvalidInput, Result};
pub use huffman::{entropy, huffman_coding};
pub use tree::Node;
