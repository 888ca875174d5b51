//! # Error Types

/// Errors from alphapack operations.
#[derive(Debug, thiserror::Error)]
pub enum AlphapackError {
    /// A caller supplied argument is out of its valid domain.
    ///
    /// Raised for a zero `max_length`, or a vocabulary capacity which
    /// cannot hold the reserved tokens or is not representable by the
    /// token type.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A token id has no entry in the vocabulary.
    #[error("unknown token id: {id}")]
    UnknownId {
        /// The unresolved id.
        id: u64,
    },

    /// A persisted vocabulary snapshot is malformed.
    #[error("corrupt vocabulary: {0}")]
    CorruptVocabulary(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Legacy JSON vocabulary syntax error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl AlphapackError {
    pub(crate) fn corrupt<S: Into<String>>(msg: S) -> Self {
        Self::CorruptVocabulary(msg.into())
    }

    pub(crate) fn invalid<S: Into<String>>(msg: S) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result type for alphapack operations.
pub type AlphapackResult<T> = core::result::Result<T, AlphapackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            AlphapackError::UnknownId { id: 99 }.to_string(),
            "unknown token id: 99"
        );
        assert_eq!(
            AlphapackError::corrupt("missing header").to_string(),
            "corrupt vocabulary: missing header"
        );
        assert_eq!(
            AlphapackError::invalid("max_length must be > 0").to_string(),
            "invalid argument: max_length must be > 0"
        );
    }
}
