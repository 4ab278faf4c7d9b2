//! Error types for Huffman code construction.

use thiserror::Error;

/// Error variants for code construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The symbol and weight sequences have different lengths.
    #[error("length mismatch: {symbols} symbols but {weights} weights")]
    LengthMismatch {
        /// Number of symbols supplied.
        symbols: usize,
        /// Number of weights supplied.
        weights: usize,
    },

    /// The weight table cannot produce a code.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

/// Why a weight table was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    /// No symbols were given.
    #[error("empty alphabet")]
    EmptyAlphabet,

    /// A weight is negative, NaN or infinite.
    #[error("weight {weight} at index {index} is not finite and non-negative")]
    Weight {
        /// Position of the offending entry in input order.
        index: usize,
        /// The rejected value.
        weight: f64,
    },

    /// A symbol appears more than once. `index` is the later occurrence.
    #[error("duplicate symbol at index {index}")]
    DuplicateSymbol {
        /// Position of the repeated entry in input order.
        index: usize,
    },

    /// All weights are zero, so no distribution can be formed.
    #[error("total weight is zero")]
    ZeroTotalWeight,
}

/// A specialized Result type for code construction.
pub type Result<T> = std::result::Result<T, Error>;

/// Checks that `weight` is usable and normalizes `-0.0` to `0.0`.
pub(crate) fn check_weight(index: usize, weight: f64) -> Result<f64> {
    if !weight.is_finite() || weight < 0.0 {
        return Err(InvalidInput::Weight { index, weight }.into());
    }
    Ok(if weight == 0.0 { 0.0 } else { weight })
}
