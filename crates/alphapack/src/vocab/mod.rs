//! # Vocabulary
//!
//! This module provides the vocabulary and related io mechanisms.
//!
//! The primary vocabulary is [`WordVocab`], a single owned structure
//! holding both the `{ token -> id }` and `{ id -> token }` directions.
//!
//! Every vocabulary reserves the [`SpecialToken`] ids:
//! `PAD=0, EOS=1, UNK=2, SEP=3, BOS=4`.
pub mod io;

pub mod special_tokens;
pub mod validators;
pub mod word_vocab;

#[doc(inline)]
pub use special_tokens::{
    BOS_TOKEN_ID, EOS_TOKEN_ID, PAD_TOKEN_ID, RESERVED_COUNT, SEP_TOKEN_ID, SpecialToken,
    UNK_TOKEN_ID,
};
#[doc(inline)]
pub use validators::DEFAULT_CAPACITY;
#[doc(inline)]
pub use word_vocab::WordVocab;
