//! # `alphapack` Word Tokenizer
//!
//! A word-level tokenizer for Turkish, English and Bulgarian text.
//!
//! The vocabulary grows online: every unseen word gets the next dense id
//! until the vocabulary reaches its capacity; after that unseen words map
//! to `<UNK>`. Ids `0..5` are reserved for `<PAD>`, `<EOS>`, `<UNK>`,
//! `<SEP>` and `<BOS>`.
//!
//! See:
//! * [`segmentation`] to split and case-fold text into words.
//! * [`vocab`] to manage the vocabulary, and [`vocab::io`] to persist it.
//! * [`encoders`] to encode text into fixed-length id records.
//! * [`decoders`] to decode ids back into text.
//! * [`tokenizer`] for the combined, thread-safe [`Tokenizer`].
//!
//! ```rust
//! use alphapack::{Padding, Tokenizer, TokenizerOptions};
//!
//! let tokenizer: Tokenizer<u32> = TokenizerOptions::default().build().unwrap();
//!
//! let record = tokenizer.encode("Hello world!", 8, Padding::MaxLength).unwrap();
//! assert_eq!(record.input_ids, vec![5, 6, 7, 0, 0, 0, 0, 0]);
//! assert_eq!(record.attention_mask, vec![1, 1, 1, 0, 0, 0, 0, 0]);
//!
//! let text = tokenizer.decode(&record.input_ids, true).unwrap();
//! assert_eq!(text, "hello world !");
//! ```
//!
//! ## Crate Features
//!
//! #### feature: ``ahash``
//!
//! Enabled by default. This swaps all `HashMap` implementations for ``ahash``.
//!
//! This is done by the ``types::APHashMap`` type alias machinery.
#![warn(missing_docs, unused)]

pub mod decoders;
pub mod encoders;
pub mod errors;
pub mod segmentation;
pub mod tokenizer;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use decoders::{TokenDecoderOptions, WordDecoder};
#[doc(inline)]
pub use encoders::{EncodedRecord, Padding, TokenEncoderOptions, VocabGrowth, WordEncoder};
#[doc(inline)]
pub use errors::{AlphapackError, AlphapackResult};
#[doc(inline)]
pub use segmentation::{CaseFolding, SegmentationConfig, TextSegmentor};
#[doc(inline)]
pub use tokenizer::{Tokenizer, TokenizerOptions};
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::{SpecialToken, WordVocab};
