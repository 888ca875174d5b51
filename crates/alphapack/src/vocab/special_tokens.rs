//! # Special Tokens
//!
//! The five reserved control tokens occupy ids `0..5` of every vocabulary,
//! and are never reassigned.

use crate::types::TokenType;

/// The number of reserved special token ids.
pub const RESERVED_COUNT: usize = 5;

/// Id of [`SpecialToken::Pad`].
pub const PAD_TOKEN_ID: usize = 0;
/// Id of [`SpecialToken::Eos`].
pub const EOS_TOKEN_ID: usize = 1;
/// Id of [`SpecialToken::Unk`].
pub const UNK_TOKEN_ID: usize = 2;
/// Id of [`SpecialToken::Sep`].
pub const SEP_TOKEN_ID: usize = 3;
/// Id of [`SpecialToken::Bos`].
pub const BOS_TOKEN_ID: usize = 4;

/// A reserved control token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::Display)]
pub enum SpecialToken {
    /// Padding.
    #[strum(to_string = "<PAD>")]
    Pad,

    /// End of sequence.
    #[strum(to_string = "<EOS>")]
    Eos,

    /// Unknown word; every unseen word once the vocabulary is full.
    #[strum(to_string = "<UNK>")]
    Unk,

    /// Separator between paired texts.
    #[strum(to_string = "<SEP>")]
    Sep,

    /// Beginning of sequence.
    #[strum(to_string = "<BOS>")]
    Bos,
}

impl SpecialToken {
    /// All special tokens, in id order.
    pub const ALL: [SpecialToken; RESERVED_COUNT] = [
        SpecialToken::Pad,
        SpecialToken::Eos,
        SpecialToken::Unk,
        SpecialToken::Sep,
        SpecialToken::Bos,
    ];

    /// The reserved id, as an index.
    pub const fn index(self) -> usize {
        match self {
            Self::Pad => PAD_TOKEN_ID,
            Self::Eos => EOS_TOKEN_ID,
            Self::Unk => UNK_TOKEN_ID,
            Self::Sep => SEP_TOKEN_ID,
            Self::Bos => BOS_TOKEN_ID,
        }
    }

    /// The reserved id.
    pub fn id<T: TokenType>(self) -> T {
        T::from_index(self.index())
    }

    /// The literal string stored in the vocabulary for this token.
    pub const fn literal(self) -> &'static str {
        match self {
            Self::Pad => "<PAD>",
            Self::Eos => "<EOS>",
            Self::Unk => "<UNK>",
            Self::Sep => "<SEP>",
            Self::Bos => "<BOS>",
        }
    }

    /// Look up the special token reserved at `id`, if any.
    pub fn from_id<T: TokenType>(id: T) -> Option<Self> {
        id.to_index()
            .and_then(|idx| Self::ALL.get(idx))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_reserved_table() {
        assert_eq!(SpecialToken::Pad.id::<u32>(), 0);
        assert_eq!(SpecialToken::Eos.id::<u32>(), 1);
        assert_eq!(SpecialToken::Unk.id::<u32>(), 2);
        assert_eq!(SpecialToken::Sep.id::<u32>(), 3);
        assert_eq!(SpecialToken::Bos.id::<u32>(), 4);

        for (idx, special) in SpecialToken::iter().enumerate() {
            assert_eq!(special.index(), idx);
            assert_eq!(SpecialToken::ALL[idx], special);
            assert_eq!(special.to_string(), special.literal());
            assert_eq!(SpecialToken::from_id(idx as u16), Some(special));
        }
        assert_eq!(SpecialToken::from_id(5u32), None);
    }
}
