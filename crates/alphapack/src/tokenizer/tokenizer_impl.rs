//! # Tokenizer

use std::path::Path;

use parking_lot::RwLock;

use crate::{
    AlphapackResult,
    TokenType,
    decoders::WordDecoder,
    encoders::{DEFAULT_MAX_LENGTH, EncodedRecord, Padding, VocabGrowth, WordEncoder},
    types::APHashMap,
    vocab::{
        WordVocab,
        io::{load_vocab_path, save_vocab_path},
    },
};

/// Vocabulary + encoder + decoder, behind a lock.
///
/// ## Locking
/// * [`VocabGrowth::Online`] encoding holds the write lock for the whole call,
///   so the ids registered by one call are contiguous and first-seen ordered.
/// * [`VocabGrowth::Frozen`] encoding, decoding and saving hold the read lock.
///
/// A `Tokenizer` is `Send + Sync`; share it with an `Arc`.
#[derive(Debug)]
pub struct Tokenizer<T: TokenType> {
    vocab: RwLock<WordVocab<T>>,
    encoder: WordEncoder,
    decoder: WordDecoder,
}

impl<T: TokenType> Tokenizer<T> {
    /// Create a new tokenizer.
    pub fn new(
        vocab: WordVocab<T>,
        encoder: WordEncoder,
        decoder: WordDecoder,
    ) -> Self {
        Self {
            vocab: RwLock::new(vocab),
            encoder,
            decoder,
        }
    }

    /// Create a tokenizer with default encoder and decoder.
    pub fn from_vocab(vocab: WordVocab<T>) -> Self {
        Self::new(vocab, WordEncoder::default(), WordDecoder::default())
    }

    /// Get the encoder.
    pub fn encoder(&self) -> &WordEncoder {
        &self.encoder
    }

    /// Get the decoder.
    pub fn decoder(&self) -> &WordDecoder {
        &self.decoder
    }

    /// Encode text.
    ///
    /// See [`WordEncoder::encode`].
    pub fn encode(
        &self,
        text: &str,
        max_length: usize,
        padding: Padding,
    ) -> AlphapackResult<EncodedRecord<T>> {
        match self.encoder.options().growth() {
            VocabGrowth::Online => {
                self.encoder
                    .encode(&mut self.vocab.write(), text, max_length, padding)
            }
            VocabGrowth::Frozen => {
                self.encoder
                    .encode_frozen(&self.vocab.read(), text, max_length, padding)
            }
        }
    }

    /// Encode text to [`DEFAULT_MAX_LENGTH`], padded.
    pub fn encode_default(
        &self,
        text: &str,
    ) -> AlphapackResult<EncodedRecord<T>> {
        self.encode(text, DEFAULT_MAX_LENGTH, Padding::MaxLength)
    }

    /// Encode a text pair as `first SEP second`.
    ///
    /// See [`WordEncoder::encode_pair`].
    pub fn encode_pair(
        &self,
        first: &str,
        second: &str,
        max_length: usize,
        padding: Padding,
    ) -> AlphapackResult<EncodedRecord<T>> {
        self.encoder
            .encode_pair(&mut self.vocab.write(), first, second, max_length, padding)
    }

    /// Encode a batch of texts, in order, under a single lock.
    pub fn encode_batch<S: AsRef<str>>(
        &self,
        batch: &[S],
        max_length: usize,
        padding: Padding,
    ) -> AlphapackResult<Vec<EncodedRecord<T>>> {
        self.encoder
            .encode_batch(&mut self.vocab.write(), batch, max_length, padding)
    }

    /// Decode ids into text.
    ///
    /// See [`WordDecoder::decode`].
    pub fn decode(
        &self,
        ids: &[T],
        skip_special_tokens: bool,
    ) -> AlphapackResult<String> {
        self.decoder
            .decode(&self.vocab.read(), ids, skip_special_tokens)
    }

    /// Decode a batch of id sequences.
    pub fn decode_batch<S: AsRef<[T]>>(
        &self,
        batch: &[S],
        skip_special_tokens: bool,
    ) -> AlphapackResult<Vec<String>> {
        self.decoder
            .decode_batch(&self.vocab.read(), batch, skip_special_tokens)
    }

    /// Save the vocabulary; the codec is chosen by extension.
    pub fn save_vocab<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> AlphapackResult<()> {
        save_vocab_path(&self.vocab.read(), path)
    }

    /// Replace the vocabulary with one loaded from `path`.
    ///
    /// On error the current vocabulary is kept.
    pub fn load_vocab<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> AlphapackResult<()> {
        let vocab = load_vocab_path(path)?;
        *self.vocab.write() = vocab;
        Ok(())
    }

    /// The current token count, reserved tokens included.
    pub fn len(&self) -> usize {
        self.vocab.read().len()
    }

    /// Always `false`; the reserved tokens are always present.
    pub fn is_empty(&self) -> bool {
        self.vocab.read().is_empty()
    }

    /// The vocabulary capacity.
    pub fn capacity(&self) -> usize {
        self.vocab.read().capacity()
    }

    /// Has the vocabulary reached its capacity?
    pub fn is_full(&self) -> bool {
        self.vocab.read().is_full()
    }

    /// Copy the current vocabulary.
    pub fn vocab_snapshot(&self) -> WordVocab<T> {
        self.vocab.read().clone()
    }

    /// Copy the current `{ token -> id }` map.
    pub fn get_vocab(&self) -> APHashMap<String, T> {
        self.vocab.read().to_token_map()
    }

    /// Run `f` against the vocabulary under the read lock.
    pub fn with_vocab<R, F>(
        &self,
        f: F,
    ) -> R
    where
        F: FnOnce(&WordVocab<T>) -> R,
    {
        f(&self.vocab.read())
    }

    /// Unwrap the vocabulary.
    pub fn into_vocab(self) -> WordVocab<T> {
        self.vocab.into_inner()
    }
}
