//! # Tokenizer Options

use std::path::{Path, PathBuf};

use crate::{
    AlphapackResult,
    Tokenizer,
    TokenType,
    decoders::{TokenDecoderOptions, WordDecoder},
    encoders::{TokenEncoderOptions, WordEncoder},
    segmentation::SegmentationConfig,
    vocab::{DEFAULT_CAPACITY, WordVocab, io::load_vocab_path},
};

/// Options for configuring a [`Tokenizer`].
#[derive(Debug, Clone, PartialEq)]
pub struct TokenizerOptions {
    /// Vocabulary capacity for a fresh vocabulary.
    ///
    /// Ignored when a vocabulary is loaded; the persisted capacity wins.
    pub vocab_size: usize,

    /// Optional vocabulary file to restore.
    pub vocab_path: Option<PathBuf>,

    /// Segmentation options.
    pub segmentation: SegmentationConfig,

    /// Encoder options.
    pub encoder: TokenEncoderOptions,

    /// Decoder options.
    pub decoder: TokenDecoderOptions,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            vocab_size: DEFAULT_CAPACITY,
            vocab_path: None,
            segmentation: SegmentationConfig::default(),
            encoder: TokenEncoderOptions::default(),
            decoder: TokenDecoderOptions::default(),
        }
    }
}

impl TokenizerOptions {
    /// Set the fresh vocabulary capacity.
    pub fn with_vocab_size(
        mut self,
        vocab_size: usize,
    ) -> Self {
        self.vocab_size = vocab_size;
        self
    }

    /// Set the vocabulary file to restore.
    pub fn with_vocab_path<P: Into<PathBuf>>(
        mut self,
        vocab_path: Option<P>,
    ) -> Self {
        self.vocab_path = vocab_path.map(Into::into);
        self
    }

    /// Set the segmentation options.
    pub fn with_segmentation(
        mut self,
        segmentation: SegmentationConfig,
    ) -> Self {
        self.segmentation = segmentation;
        self
    }

    /// Set the encoder options.
    pub fn with_encoder(
        mut self,
        encoder: TokenEncoderOptions,
    ) -> Self {
        self.encoder = encoder;
        self
    }

    /// Set the decoder options.
    pub fn with_decoder(
        mut self,
        decoder: TokenDecoderOptions,
    ) -> Self {
        self.decoder = decoder;
        self
    }

    /// Build a [`Tokenizer`].
    ///
    /// With a `vocab_path`, the vocabulary is loaded from it;
    /// otherwise a fresh vocabulary of `vocab_size` is created.
    ///
    /// ## Errors
    /// * `InvalidArgument` for a bad `vocab_size`.
    /// * `Io` / `CorruptVocabulary` / `Json` from loading.
    pub fn build<T: TokenType>(&self) -> AlphapackResult<Tokenizer<T>> {
        let vocab = match &self.vocab_path {
            Some(path) => self.load(path)?,
            None => WordVocab::new(self.vocab_size)?,
        };
        Ok(self.build_with_vocab(vocab))
    }

    /// Build a [`Tokenizer`], starting fresh when `vocab_path` does not exist yet.
    pub fn open_or_create<T: TokenType>(&self) -> AlphapackResult<Tokenizer<T>> {
        match &self.vocab_path {
            Some(path) if !path.exists() => {
                log::info!(
                    "no vocabulary at {}; starting with capacity {}",
                    path.display(),
                    self.vocab_size
                );
                Ok(self.build_with_vocab(WordVocab::new(self.vocab_size)?))
            }
            _ => self.build(),
        }
    }

    /// Build a [`Tokenizer`] around an existing vocabulary.
    pub fn build_with_vocab<T: TokenType>(
        &self,
        vocab: WordVocab<T>,
    ) -> Tokenizer<T> {
        Tokenizer::new(
            vocab,
            WordEncoder::new(self.segmentation.into(), self.encoder),
            WordDecoder::new(self.decoder),
        )
    }

    fn load<T: TokenType>(
        &self,
        path: &Path,
    ) -> AlphapackResult<WordVocab<T>> {
        let vocab = load_vocab_path(path)?;
        if vocab.capacity() != self.vocab_size {
            log::warn!(
                "vocab_size {} ignored; {} has capacity {}",
                self.vocab_size,
                path.display(),
                vocab.capacity()
            );
        }
        Ok(vocab)
    }
}
