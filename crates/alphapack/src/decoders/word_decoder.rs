//! # Word Decoder

use crate::{
    decoders::TokenDecoderOptions,
    errors::AlphapackResult,
    segmentation::TextSegmentor,
    types::TokenType,
    vocab::{SpecialToken, WordVocab},
};

/// Id sequence to text decoder.
///
/// Decoding is lossy: tokens are joined with single spaces and
/// punctuation is never reattached.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WordDecoder {
    options: TokenDecoderOptions,
}

impl WordDecoder {
    /// Create a new decoder.
    pub fn new(options: TokenDecoderOptions) -> Self {
        Self { options }
    }

    /// Get the decoder options.
    pub fn options(&self) -> &TokenDecoderOptions {
        &self.options
    }

    /// Decode ids into tokens.
    ///
    /// ## Arguments
    /// * `vocab` - the vocabulary to resolve ids in.
    /// * `ids` - the ids to decode.
    /// * `skip_special_tokens` - drop reserved ids; matched by id, not by string.
    ///
    /// ## Errors
    /// `UnknownId` for the first id with no vocabulary entry.
    pub fn decode_to_tokens<'v, T: TokenType>(
        &self,
        vocab: &'v WordVocab<T>,
        ids: &[T],
        skip_special_tokens: bool,
    ) -> AlphapackResult<Vec<&'v str>> {
        let mut tokens = Vec::with_capacity(ids.len());
        for &id in ids {
            if self.options.stop_at_eos && SpecialToken::from_id(id) == Some(SpecialToken::Eos) {
                break;
            }
            let token = vocab.token_for(id)?;
            if skip_special_tokens && vocab.is_special(id) {
                continue;
            }
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Decode ids into text.
    ///
    /// See [`Self::decode_to_tokens`].
    pub fn decode<T: TokenType>(
        &self,
        vocab: &WordVocab<T>,
        ids: &[T],
        skip_special_tokens: bool,
    ) -> AlphapackResult<String> {
        self.decode_to_tokens(vocab, ids, skip_special_tokens)
            .map(|tokens| TextSegmentor::join(&tokens))
    }

    /// Decode a batch of id sequences.
    pub fn decode_batch<T: TokenType, S: AsRef<[T]>>(
        &self,
        vocab: &WordVocab<T>,
        batch: &[S],
        skip_special_tokens: bool,
    ) -> AlphapackResult<Vec<String>> {
        batch
            .iter()
            .map(|ids| self.decode(vocab, ids.as_ref(), skip_special_tokens))
            .collect()
    }
}
