//! Validators for vocabulary configuration options.
use crate::{
    errors::{AlphapackError, AlphapackResult},
    types::TokenType,
    vocab::special_tokens::RESERVED_COUNT,
};

/// The default vocabulary capacity.
pub const DEFAULT_CAPACITY: usize = 60_000;

/// Validates and returns the vocabulary capacity.
///
/// The capacity must hold the reserved special tokens,
/// and its largest id must be representable by `T`.
pub fn try_capacity<T: TokenType>(capacity: usize) -> AlphapackResult<usize> {
    if capacity < RESERVED_COUNT {
        Err(AlphapackError::invalid(format!(
            "vocab capacity ({capacity}) must be >= {RESERVED_COUNT}"
        )))
    } else if T::from_usize(capacity - 1).is_none() {
        Err(AlphapackError::invalid(format!(
            "vocab capacity ({capacity}) exceeds token type capacity"
        )))
    } else {
        Ok(capacity)
    }
}

/// Validates a requested sequence length.
pub fn try_max_length(max_length: usize) -> AlphapackResult<usize> {
    if max_length == 0 {
        Err(AlphapackError::invalid("max_length must be > 0"))
    } else {
        Ok(max_length)
    }
}
