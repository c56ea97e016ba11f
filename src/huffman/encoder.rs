use std::fmt;

use super::{BitString, CodeTable, Symbol};
use crate::error::Error;
use crate::Result;

pub const DEFAULT_BITS_PER_SYMBOL: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CompressionRatio {
    Finite(f64),
    /// The encoded output has no bits at all.
    Unbounded,
}

impl fmt::Display for CompressionRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(ratio) => write!(f, "{}", ratio),
            Self::Unbounded => write!(f, "inf"),
        }
    }
}

pub fn encode<S: Symbol>(input: &[S], table: &CodeTable<S>) -> Result<BitString> {
    let mut encoded = BitString::new();
    for symbol in input {
        let code = table
            .get(symbol)
            .ok_or_else(|| Error::UnknownSymbol(format!("{:?}", symbol)))?;
        encoded.extend_from(code);
    }
    log::debug!(
        "Encoded {} symbols into {} bits",
        input.len(),
        encoded.len()
    );
    Ok(encoded)
}

pub fn compression_ratio<S>(
    input: &[S],
    encoded: &BitString,
    bits_per_symbol: usize,
) -> CompressionRatio {
    if encoded.is_empty() {
        return CompressionRatio::Unbounded;
    }
    let input_size = input.len() * bits_per_symbol;
    CompressionRatio::Finite(input_size as f64 / encoded.len() as f64)
}
