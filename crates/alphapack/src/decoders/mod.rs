//! # Decoders
//!
//! [`WordDecoder`] maps ids back to tokens through a
//! [`WordVocab`](crate::vocab::WordVocab), optionally drops the
//! special tokens, and joins the rest with single spaces.

pub mod decoder_options;
pub mod word_decoder;

#[doc(inline)]
pub use decoder_options::TokenDecoderOptions;
#[doc(inline)]
pub use word_decoder::WordDecoder;
