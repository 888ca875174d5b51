//! # Word Encoder

use crate::{
    encoders::{EncodedRecord, Padding, TokenEncoderOptions, VocabGrowth},
    errors::AlphapackResult,
    segmentation::TextSegmentor,
    types::TokenType,
    vocab::{SpecialToken, WordVocab, validators::try_max_length},
};

/// Text to [`EncodedRecord`] encoder.
///
/// Stateless: the vocabulary is passed to every call. In
/// [`VocabGrowth::Online`] mode encoding registers unseen tokens,
/// so the order of calls determines the ids assigned.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WordEncoder {
    segmentor: TextSegmentor,
    options: TokenEncoderOptions,
}

impl WordEncoder {
    /// Create a new encoder.
    pub fn new(
        segmentor: TextSegmentor,
        options: TokenEncoderOptions,
    ) -> Self {
        Self { segmentor, options }
    }

    /// Get the attached [`TextSegmentor`].
    pub fn segmentor(&self) -> &TextSegmentor {
        &self.segmentor
    }

    /// Get the encoder options.
    pub fn options(&self) -> &TokenEncoderOptions {
        &self.options
    }

    /// Encode text, growing the vocabulary per the configured [`VocabGrowth`].
    ///
    /// ## Arguments
    /// * `vocab` - the vocabulary to resolve (and maybe register) tokens in.
    /// * `text` - the text to encode.
    /// * `max_length` - the record length cap.
    /// * `padding` - the padding mode.
    ///
    /// ## Errors
    /// `InvalidArgument` if `max_length == 0`; the vocabulary is untouched.
    pub fn encode<T: TokenType>(
        &self,
        vocab: &mut WordVocab<T>,
        text: &str,
        max_length: usize,
        padding: Padding,
    ) -> AlphapackResult<EncodedRecord<T>> {
        self.encode_segments(vocab, &[text], max_length, padding)
    }

    /// Encode text without modifying the vocabulary.
    ///
    /// Unseen tokens map to [`SpecialToken::Unk`], whatever the configured growth.
    pub fn encode_frozen<T: TokenType>(
        &self,
        vocab: &WordVocab<T>,
        text: &str,
        max_length: usize,
        padding: Padding,
    ) -> AlphapackResult<EncodedRecord<T>> {
        let max_length = try_max_length(max_length)?;
        let ids = self.frame(&[text], &mut |token| vocab.id_for(token));
        Ok(EncodedRecord::from_ids(ids, max_length, padding))
    }

    /// Encode a text pair as `first SEP second`.
    ///
    /// Framing, truncation and padding apply to the combined stream.
    pub fn encode_pair<T: TokenType>(
        &self,
        vocab: &mut WordVocab<T>,
        first: &str,
        second: &str,
        max_length: usize,
        padding: Padding,
    ) -> AlphapackResult<EncodedRecord<T>> {
        self.encode_segments(vocab, &[first, second], max_length, padding)
    }

    /// Encode a batch of texts, in order.
    ///
    /// Vocabulary growth follows batch order.
    pub fn encode_batch<T: TokenType, S: AsRef<str>>(
        &self,
        vocab: &mut WordVocab<T>,
        batch: &[S],
        max_length: usize,
        padding: Padding,
    ) -> AlphapackResult<Vec<EncodedRecord<T>>> {
        try_max_length(max_length)?;
        batch
            .iter()
            .map(|text| self.encode(vocab, text.as_ref(), max_length, padding))
            .collect()
    }

    fn encode_segments<T: TokenType>(
        &self,
        vocab: &mut WordVocab<T>,
        segments: &[&str],
        max_length: usize,
        padding: Padding,
    ) -> AlphapackResult<EncodedRecord<T>> {
        let max_length = try_max_length(max_length)?;
        let ids = match self.options.growth {
            VocabGrowth::Online => self.frame(segments, &mut |token| vocab.lookup_or_insert(token)),
            VocabGrowth::Frozen => self.frame(segments, &mut |token| vocab.id_for(token)),
        };
        Ok(EncodedRecord::from_ids(ids, max_length, padding))
    }

    /// Resolve every token of every segment, joined by `SEP`, with optional `BOS`/`EOS`.
    fn frame<T, F>(
        &self,
        segments: &[&str],
        resolve: &mut F,
    ) -> Vec<T>
    where
        T: TokenType,
        F: FnMut(&str) -> T,
    {
        let mut ids = Vec::new();
        if self.options.add_bos {
            ids.push(SpecialToken::Bos.id());
        }
        for (idx, segment) in segments.iter().enumerate() {
            if idx > 0 {
                ids.push(SpecialToken::Sep.id());
            }
            self.segmentor
                .for_each_token(segment, &mut |token| ids.push(resolve(token)));
        }
        if self.options.add_eos {
            ids.push(SpecialToken::Eos.id());
        }
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AlphapackError;

    type T = u32;

    fn fresh() -> WordVocab<T> {
        WordVocab::new(64).unwrap()
    }

    #[test]
    fn test_hello_world_padded() {
        let encoder = WordEncoder::default();
        let mut vocab = fresh();

        let record = encoder
            .encode(&mut vocab, "Hello world!", 8, Padding::MaxLength)
            .unwrap();
        assert_eq!(record.input_ids, vec![5, 6, 7, 0, 0, 0, 0, 0]);
        assert_eq!(record.attention_mask, vec![1, 1, 1, 0, 0, 0, 0, 0]);
        assert_eq!(vocab.len(), 8);
    }

    #[test]
    fn test_unpadded_and_idempotent() {
        let encoder = WordEncoder::default();
        let mut vocab = fresh();

        let a = encoder
            .encode(&mut vocab, "bir iki üç", 512, Padding::None)
            .unwrap();
        let b = encoder
            .encode(&mut vocab, "bir iki üç", 512, Padding::None)
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(a.input_ids, vec![5, 6, 7]);
        assert_eq!(a.attention_mask, vec![1, 1, 1]);
    }

    #[test]
    fn test_truncation_still_registers() {
        let encoder = WordEncoder::default();
        let mut vocab = fresh();

        let record = encoder
            .encode(&mut vocab, "a b c d", 2, Padding::MaxLength)
            .unwrap();
        assert_eq!(record.input_ids, vec![5, 6]);
        assert_eq!(vocab.lookup("d"), Some(8));
    }

    #[test]
    fn test_invalid_max_length() {
        let encoder = WordEncoder::default();
        let mut vocab = fresh();

        assert!(matches!(
            encoder.encode(&mut vocab, "hello", 0, Padding::None),
            Err(AlphapackError::InvalidArgument(_))
        ));
        assert_eq!(vocab.len(), 5);
    }

    #[test]
    fn test_empty_text() {
        let encoder = WordEncoder::default();
        let mut vocab = fresh();

        let record = encoder.encode(&mut vocab, "", 4, Padding::MaxLength).unwrap();
        assert_eq!(record.input_ids, vec![0, 0, 0, 0]);
        assert_eq!(record.attention_mask, vec![0, 0, 0, 0]);

        let record = encoder.encode(&mut vocab, "", 4, Padding::None).unwrap();
        assert!(record.is_empty());
    }

    #[test]
    fn test_saturated() {
        let encoder = WordEncoder::default();
        let mut vocab = WordVocab::<T>::new(5).unwrap();

        let record = encoder
            .encode(&mut vocab, "any new words", 8, Padding::None)
            .unwrap();
        assert_eq!(record.input_ids, vec![2, 2, 2]);
        assert_eq!(vocab.len(), 5);
    }

    #[test]
    fn test_framing() {
        let options = TokenEncoderOptions::default()
            .with_add_bos(true)
            .with_add_eos(true);
        let encoder = WordEncoder::new(TextSegmentor::default(), options);
        let mut vocab = fresh();

        let record = encoder
            .encode(&mut vocab, "merhaba dünya", 6, Padding::MaxLength)
            .unwrap();
        assert_eq!(record.input_ids, vec![4, 5, 6, 1, 0, 0]);
        assert_eq!(record.attention_mask, vec![1, 1, 1, 1, 0, 0]);

        // No room is reserved; EOS is cut.
        let record = encoder
            .encode(&mut vocab, "merhaba dünya", 3, Padding::MaxLength)
            .unwrap();
        assert_eq!(record.input_ids, vec![4, 5, 6]);
    }

    #[test]
    fn test_pair() {
        let encoder = WordEncoder::default();
        let mut vocab = fresh();

        let record = encoder
            .encode_pair(&mut vocab, "Кой?", "Аз.", 8, Padding::None)
            .unwrap();
        assert_eq!(record.input_ids, vec![5, 6, 3, 7, 8]);
        assert_eq!(vocab.token_for(7).unwrap(), "аз");
    }

    #[test]
    fn test_frozen() {
        let encoder = WordEncoder::default();
        let mut vocab = fresh();
        encoder
            .encode(&mut vocab, "known", 8, Padding::None)
            .unwrap();

        let record = encoder
            .encode_frozen(&vocab, "known unknown", 8, Padding::None)
            .unwrap();
        assert_eq!(record.input_ids, vec![5, 2]);

        let frozen = WordEncoder::new(
            TextSegmentor::default(),
            TokenEncoderOptions::default().with_growth(VocabGrowth::Frozen),
        );
        let record = frozen
            .encode(&mut vocab, "known other", 8, Padding::None)
            .unwrap();
        assert_eq!(record.input_ids, vec![5, 2]);
        assert_eq!(vocab.len(), 6);
    }

    #[test]
    fn test_batch() {
        let encoder = WordEncoder::default();
        let mut vocab = fresh();

        let records = encoder
            .encode_batch(&mut vocab, &["b a", "a c"], 3, Padding::MaxLength)
            .unwrap();
        assert_eq!(records[0].input_ids, vec![5, 6, 0]);
        assert_eq!(records[1].input_ids, vec![6, 7, 0]);

        assert!(
            encoder
                .encode_batch(&mut vocab, &["x"], 0, Padding::None)
                .is_err()
        );
        assert_eq!(vocab.lookup("x"), None);
    }

    proptest::proptest! {
        #[test]
        fn mask_matches_ids(text in "\\PC{0,80}", max_length in 1usize..32, padded in proptest::bool::ANY) {
            let encoder = WordEncoder::default();
            let mut vocab = fresh();
            let padding = if padded { Padding::MaxLength } else { Padding::None };

            let record = encoder.encode(&mut vocab, &text, max_length, padding).unwrap();
            proptest::prop_assert_eq!(record.input_ids.len(), record.attention_mask.len());
            proptest::prop_assert!(record.len() <= max_length);
            if padded {
                proptest::prop_assert_eq!(record.len(), max_length);
            }
            proptest::prop_assert!(vocab.len() <= vocab.capacity());
        }
    }
}
