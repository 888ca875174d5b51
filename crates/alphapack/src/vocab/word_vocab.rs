//! # Word Vocabulary
//!
//! A bidirectional `{ String <-> T }` table with a fixed capacity.

use crate::{
    errors::{AlphapackError, AlphapackResult},
    types::{APHashMap, TokenType, hash_map_with_capacity},
    vocab::{
        SpecialToken,
        special_tokens::{RESERVED_COUNT, UNK_TOKEN_ID},
        validators::try_capacity,
    },
};

/// Capacity-bounded, online-growing word vocabulary.
///
/// Ids are dense: `tokens[id]` is the token for `id`, and `token_ids` is
/// its exact inverse. Ids `0..5` hold the [`SpecialToken`]s.
///
/// Growth is monotonic and first-seen ordered; once `len() == capacity()`
/// the vocabulary never changes again, and every unseen token resolves
/// to [`SpecialToken::Unk`].
#[derive(Debug, Clone)]
pub struct WordVocab<T: TokenType> {
    capacity: usize,

    /// `{ id -> token }`, indexed by id.
    tokens: Vec<String>,

    /// `{ token -> id }`.
    token_ids: APHashMap<String, T>,
}

impl<T: TokenType> PartialEq for WordVocab<T> {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        // `token_ids` is derived from `tokens`.
        self.capacity == other.capacity && self.tokens == other.tokens
    }
}

impl<T: TokenType> Eq for WordVocab<T> {}

impl<T: TokenType> WordVocab<T> {
    /// Create a vocabulary holding only the special tokens.
    ///
    /// ## Arguments
    /// * `capacity` - the maximum token count, reserved tokens included.
    ///
    /// ## Errors
    /// `InvalidArgument` if the capacity is below the reserved count,
    /// or not representable by `T`.
    pub fn new(capacity: usize) -> AlphapackResult<Self> {
        let capacity = try_capacity::<T>(capacity)?;

        let mut vocab = Self {
            capacity,
            tokens: Vec::with_capacity(RESERVED_COUNT),
            token_ids: hash_map_with_capacity(RESERVED_COUNT),
        };
        for special in SpecialToken::ALL {
            vocab.push(special.literal().to_string());
        }
        Ok(vocab)
    }

    /// Rebuild a vocabulary from its tokens, listed in id order.
    ///
    /// ## Arguments
    /// * `capacity` - the maximum token count, reserved tokens included.
    /// * `tokens` - every token, the reserved prefix included; `tokens[i]` gets id `i`.
    ///
    /// ## Errors
    /// * `InvalidArgument` for a bad capacity.
    /// * `CorruptVocabulary` if the reserved prefix is wrong,
    ///   a token repeats, or there are more tokens than capacity.
    pub fn from_tokens<I, S>(
        capacity: usize,
        tokens: I,
    ) -> AlphapackResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let capacity = try_capacity::<T>(capacity)?;

        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        if tokens.len() > capacity {
            return Err(AlphapackError::corrupt(format!(
                "{} tokens exceed capacity {capacity}",
                tokens.len()
            )));
        }
        for special in SpecialToken::ALL {
            match tokens.get(special.index()) {
                Some(token) if token == special.literal() => (),
                Some(token) => {
                    return Err(AlphapackError::corrupt(format!(
                        "reserved id {} maps to {token:?}, expected {:?}",
                        special.index(),
                        special.literal()
                    )));
                }
                None => {
                    return Err(AlphapackError::corrupt(format!(
                        "missing reserved id {} ({})",
                        special.index(),
                        special.literal()
                    )));
                }
            }
        }

        let mut vocab = Self {
            capacity,
            tokens: Vec::with_capacity(tokens.len()),
            token_ids: hash_map_with_capacity(tokens.len()),
        };
        for token in tokens {
            if vocab.token_ids.contains_key(&token) {
                return Err(AlphapackError::corrupt(format!(
                    "duplicate token {token:?}"
                )));
            }
            vocab.push(token);
        }
        Ok(vocab)
    }

    /// Append a token at the next dense id.
    ///
    /// Callers ensure the token is new and there is room.
    fn push(
        &mut self,
        token: String,
    ) -> T {
        let id = T::from_index(self.tokens.len());
        self.token_ids.insert(token.clone(), id);
        self.tokens.push(token);
        id
    }

    /// The maximum token count, reserved tokens included.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The current token count, reserved tokens included.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always `false`; the reserved tokens are always present.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Has the vocabulary reached its capacity?
    pub fn is_full(&self) -> bool {
        self.len() >= self.capacity
    }

    /// The number of ids still available for growth.
    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.len())
    }

    /// Look up the id of a token, if present.
    pub fn lookup(
        &self,
        token: &str,
    ) -> Option<T> {
        self.token_ids.get(token).copied()
    }

    /// Look up the id of a token, falling back to [`SpecialToken::Unk`].
    pub fn id_for(
        &self,
        token: &str,
    ) -> T {
        self.lookup(token)
            .unwrap_or_else(|| T::from_index(UNK_TOKEN_ID))
    }

    /// Look up the id of a token, registering it if there is room.
    ///
    /// ## Returns
    /// * the existing id, if the token is known;
    /// * the next dense id, if the token is new and there is room;
    /// * the [`SpecialToken::Unk`] id otherwise.
    pub fn lookup_or_insert(
        &mut self,
        token: &str,
    ) -> T {
        if let Some(id) = self.lookup(token) {
            return id;
        }
        if self.is_full() {
            return T::from_index(UNK_TOKEN_ID);
        }

        let id = self.push(token.to_string());
        if self.is_full() {
            log::warn!(
                "vocabulary reached capacity ({}); unseen tokens now map to {}",
                self.capacity,
                SpecialToken::Unk
            );
        }
        id
    }

    /// Get the token for an id.
    ///
    /// ## Errors
    /// `UnknownId` if the id has no entry.
    pub fn token_for(
        &self,
        id: T,
    ) -> AlphapackResult<&str> {
        id.to_index()
            .and_then(|idx| self.tokens.get(idx))
            .map(String::as_str)
            .ok_or_else(|| AlphapackError::UnknownId {
                id: id.to_u64().unwrap_or(u64::MAX),
            })
    }

    /// Is this one of the reserved special token ids?
    pub fn is_special(
        &self,
        id: T,
    ) -> bool {
        SpecialToken::from_id(id).is_some()
    }

    /// All tokens, indexed by id.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Iterate `(id, token)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (T, &str)> {
        self.tokens
            .iter()
            .enumerate()
            .map(|(idx, token)| (T::from_index(idx), token.as_str()))
    }

    /// Copy the `{ token -> id }` map.
    pub fn to_token_map(&self) -> APHashMap<String, T> {
        self.token_ids.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::validators::DEFAULT_CAPACITY;

    type T = u32;

    #[test]
    fn test_new() {
        let vocab = WordVocab::<T>::new(DEFAULT_CAPACITY).unwrap();
        assert_eq!(vocab.len(), RESERVED_COUNT);
        assert_eq!(vocab.capacity(), DEFAULT_CAPACITY);
        assert_eq!(vocab.remaining(), DEFAULT_CAPACITY - RESERVED_COUNT);
        assert!(!vocab.is_empty());
        assert!(!vocab.is_full());

        for special in SpecialToken::ALL {
            assert_eq!(vocab.lookup(special.literal()), Some(special.id()));
            assert_eq!(vocab.token_for(special.id()).unwrap(), special.literal());
            assert!(vocab.is_special(special.id()));
        }

        assert!(WordVocab::<T>::new(4).is_err());
    }

    #[test]
    fn test_growth() {
        let mut vocab = WordVocab::<T>::new(8).unwrap();

        assert_eq!(vocab.lookup_or_insert("hello"), 5);
        assert_eq!(vocab.lookup_or_insert("world"), 6);
        assert_eq!(vocab.lookup_or_insert("hello"), 5);
        assert_eq!(vocab.lookup("world"), Some(6));
        assert_eq!(vocab.lookup("nope"), None);
        assert_eq!(vocab.id_for("nope"), 2);
        assert_eq!(vocab.len(), 7);
        assert!(!vocab.is_special(5));

        assert_eq!(vocab.lookup_or_insert("!"), 7);
        assert!(vocab.is_full());
        assert_eq!(vocab.remaining(), 0);

        let before = vocab.clone();
        assert_eq!(vocab.lookup_or_insert("extra"), 2);
        assert_eq!(vocab.lookup_or_insert("more"), 2);
        assert_eq!(vocab, before);
        assert_eq!(vocab.lookup_or_insert("world"), 6);
    }

    #[test]
    fn test_reserved_only() {
        let mut vocab = WordVocab::<T>::new(5).unwrap();
        assert!(vocab.is_full());
        assert_eq!(vocab.lookup_or_insert("word"), 2);
        assert_eq!(vocab.len(), 5);
    }

    #[test]
    fn test_token_for_unknown() {
        let vocab = WordVocab::<T>::new(16).unwrap();
        assert!(matches!(
            vocab.token_for(99),
            Err(AlphapackError::UnknownId { id: 99 })
        ));
    }

    #[test]
    fn test_from_tokens() {
        let mut vocab = WordVocab::<T>::new(16).unwrap();
        vocab.lookup_or_insert("merhaba");
        vocab.lookup_or_insert("здравей");

        let rebuilt = WordVocab::<T>::from_tokens(16, vocab.tokens().to_vec()).unwrap();
        assert_eq!(rebuilt, vocab);
        assert_eq!(rebuilt.to_token_map().len(), vocab.len());
        assert_eq!(rebuilt.lookup("здравей"), Some(6));

        let pairs: Vec<(T, &str)> = rebuilt.iter().skip(5).collect();
        assert_eq!(pairs, vec![(5, "merhaba"), (6, "здравей")]);
    }

    #[test]
    fn test_from_tokens_rejects() {
        let mut tokens: Vec<String> = SpecialToken::ALL
            .iter()
            .map(|s| s.literal().to_string())
            .collect();

        // Too small a capacity.
        tokens.push("a".to_string());
        assert!(matches!(
            WordVocab::<T>::from_tokens(5, tokens.clone()),
            Err(AlphapackError::CorruptVocabulary(_))
        ));

        // Duplicates.
        tokens.push("a".to_string());
        assert!(matches!(
            WordVocab::<T>::from_tokens(16, tokens.clone()),
            Err(AlphapackError::CorruptVocabulary(_))
        ));

        // Wrong reserved prefix.
        let swapped = vec!["<EOS>", "<PAD>", "<UNK>", "<SEP>", "<BOS>"];
        assert!(matches!(
            WordVocab::<T>::from_tokens(16, swapped),
            Err(AlphapackError::CorruptVocabulary(_))
        ));

        // Missing reserved ids.
        assert!(matches!(
            WordVocab::<T>::from_tokens(16, vec!["<PAD>", "<EOS>"]),
            Err(AlphapackError::CorruptVocabulary(_))
        ));
    }
}
