//! Huffman coding entry point and information measures.

use crate::code::{self, CodeTable};
use crate::error::{check_weight, Error, InvalidInput, Result};
use crate::tree;

/// Compute a Huffman code for `symbols` with matching `weights`.
///
/// Position `i` of `weights` belongs to `symbols[i]`. Input order pins
/// tie-breaking, so the same input always yields the same table.
///
/// # Errors
///
/// - `LengthMismatch` if the slices differ in length (checked first).
/// - `InvalidInput` for an empty alphabet, a negative or non-finite
///   weight, or a repeated symbol.
///
/// # Example
///
/// ```
/// let codes = huffcode::huffman_coding(&['x', 'y'], &[0.5, 0.5])?;
/// assert_eq!(codes.get(&'x').map(|c| c.as_str()), Some("0"));
/// assert_eq!(codes.get(&'y').map(|c| c.as_str()), Some("1"));
/// # Ok::<(), huffcode::Error>(())
/// ```
pub fn huffman_coding<S: Ord + Clone>(symbols: &[S], weights: &[f64]) -> Result<CodeTable<S>> {
    if symbols.len() != weights.len() {
        return Err(Error::LengthMismatch {
            symbols: symbols.len(),
            weights: weights.len(),
        });
    }
    let root = tree::build(symbols.iter().cloned().zip(weights.iter().copied()))?;
    Ok(code::extract(root))
}

/// Shannon entropy, in bits, of the distribution `weights / sum(weights)`.
///
/// Lower bound on the expected length of any prefix code for the
/// distribution; a Huffman code stays below it plus one bit.
pub fn entropy(weights: &[f64]) -> Result<f64> {
    if weights.is_empty() {
        return Err(InvalidInput::EmptyAlphabet.into());
    }
    let mut max = 0.0f64;
    for (i, &w) in weights.iter().enumerate() {
        max = max.max(check_weight(i, w)?);
    }
    if max <= 0.0 {
        return Err(InvalidInput::ZeroTotalWeight.into());
    }
    // Scale by the largest weight so the total cannot overflow.
    let total: f64 = weights.iter().map(|&w| w / max).sum();
    Ok(weights
        .iter()
        .map(|&w| w / max)
        .filter(|&w| w > 0.0)
        .map(|w| {
            let p = w / total;
            -p * p.log2()
        })
        .sum())
}
