//! # Encoded Record

use crate::{encoders::Padding, types::TokenType, vocab::SpecialToken};

/// The output of encoding: ids plus an attention mask.
///
/// `input_ids.len() == attention_mask.len()` always holds;
/// `attention_mask[i]` is `1` for real positions and `0` for padding.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EncodedRecord<T: TokenType> {
    /// The token ids.
    pub input_ids: Vec<T>,

    /// `{0, 1}` mask, same length as `input_ids`.
    pub attention_mask: Vec<u8>,
}

impl<T: TokenType> EncodedRecord<T> {
    /// Build a record from produced ids, truncating and padding.
    ///
    /// ## Arguments
    /// * `ids` - the produced ids; cut to at most `max_length`.
    /// * `max_length` - the length cap; callers have validated it is `> 0`.
    /// * `padding` - the padding mode.
    pub fn from_ids(
        mut ids: Vec<T>,
        max_length: usize,
        padding: Padding,
    ) -> Self {
        ids.truncate(max_length);
        let real = ids.len();

        let mut attention_mask = vec![1u8; real];
        if padding == Padding::MaxLength {
            ids.resize(max_length, SpecialToken::Pad.id());
            attention_mask.resize(max_length, 0);
        }

        Self {
            input_ids: ids,
            attention_mask,
        }
    }

    /// The record length.
    pub fn len(&self) -> usize {
        self.input_ids.len()
    }

    /// Is the record empty?
    pub fn is_empty(&self) -> bool {
        self.input_ids.is_empty()
    }

    /// The number of non-padding positions.
    pub fn real_len(&self) -> usize {
        self.attention_mask.iter().filter(|&&m| m == 1).count()
    }

    /// The ids of the non-padding positions.
    pub fn real_ids(&self) -> &[T] {
        &self.input_ids[..self.real_len()]
    }
}
