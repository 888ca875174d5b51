//! # Encoders
//!
//! [`WordEncoder`] runs: segmentation, id lookup/registration,
//! special-token framing, truncation, padding and mask construction.
//!
//! ```rust
//! use alphapack::{
//!     encoders::{Padding, WordEncoder},
//!     vocab::WordVocab,
//! };
//!
//! let mut vocab: WordVocab<u32> = WordVocab::new(60_000).unwrap();
//! let encoder = WordEncoder::default();
//!
//! let record = encoder
//!     .encode(&mut vocab, "Hello world!", 8, Padding::MaxLength)
//!     .unwrap();
//! assert_eq!(record.input_ids, vec![5, 6, 7, 0, 0, 0, 0, 0]);
//! assert_eq!(record.attention_mask, vec![1, 1, 1, 0, 0, 0, 0, 0]);
//! ```

pub mod encoded_record;
pub mod encoder_options;
pub mod word_encoder;

#[doc(inline)]
pub use encoded_record::EncodedRecord;
#[doc(inline)]
pub use encoder_options::{DEFAULT_MAX_LENGTH, Padding, TokenEncoderOptions, VocabGrowth};
#[doc(inline)]
pub use word_encoder::WordEncoder;
