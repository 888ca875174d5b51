//! # Combined Tokenizer
//!
//! [`Tokenizer`] owns a [`WordVocab`](crate::vocab::WordVocab) behind a
//! read/write lock, together with a [`WordEncoder`](crate::encoders::WordEncoder)
//! and a [`WordDecoder`](crate::decoders::WordDecoder).
//!
//! [`TokenizerOptions`] builds one, optionally restoring a persisted vocabulary.

mod tokenizer_impl;
mod tokenizer_options;

#[doc(inline)]
pub use tokenizer_impl::*;
#[doc(inline)]
pub use tokenizer_options::*;
