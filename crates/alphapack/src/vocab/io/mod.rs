//! # Vocabulary IO
//!
//! Two codecs are provided:
//! * [`base64_vocab`] - the native, line-oriented format;
//! * [`json_vocab`] - the legacy JSON format.
//!
//! The path-based [`load_vocab_path`] and [`save_vocab_path`] pick the codec
//! from the file extension; see [`VocabFormat::from_path`].
//!
//! ## Loading A Vocab
//!
//! ```rust,no_run
//! use alphapack::vocab::{WordVocab, io::load_vocab_path};
//!
//! fn example() -> alphapack::AlphapackResult<WordVocab<u32>> {
//!     load_vocab_path("vocab.txt")
//! }
//! ```

mod base64_vocab;
mod json_vocab;

use std::path::Path;

#[doc(inline)]
pub use base64_vocab::*;
#[doc(inline)]
pub use json_vocab::*;

use crate::{errors::AlphapackResult, types::TokenType, vocab::WordVocab};

/// On-disk vocabulary format.
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum VocabFormat {
    /// `#capacity` header + `{BASE64 TOKEN} {ID}` lines.
    #[default]
    Base64,

    /// Legacy `word_to_id` / `id_to_word` JSON.
    Json,
}

impl VocabFormat {
    /// Select a format from a path's extension.
    ///
    /// `.json` selects [`VocabFormat::Json`]; anything else is
    /// [`VocabFormat::Base64`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Base64,
        }
    }

    /// Load a vocabulary in this format.
    pub fn load<T, P>(
        self,
        path: P,
    ) -> AlphapackResult<WordVocab<T>>
    where
        T: TokenType,
        P: AsRef<Path>,
    {
        match self {
            Self::Base64 => load_base64_vocab_path(path),
            Self::Json => load_json_vocab_path(path),
        }
    }

    /// Save a vocabulary in this format.
    pub fn save<T, P>(
        self,
        vocab: &WordVocab<T>,
        path: P,
    ) -> AlphapackResult<()>
    where
        T: TokenType,
        P: AsRef<Path>,
    {
        match self {
            Self::Base64 => save_base64_vocab_path(vocab, path),
            Self::Json => save_json_vocab_path(vocab, path),
        }
    }
}

/// Load a [`WordVocab`], selecting the codec by extension.
pub fn load_vocab_path<T, P>(path: P) -> AlphapackResult<WordVocab<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let vocab = VocabFormat::from_path(path).load(path)?;
    log::info!(
        "loaded vocabulary {}: {} tokens, capacity {}",
        path.display(),
        vocab.len(),
        vocab.capacity()
    );
    Ok(vocab)
}

/// Save a [`WordVocab`], selecting the codec by extension.
pub fn save_vocab_path<T, P>(
    vocab: &WordVocab<T>,
    path: P,
) -> AlphapackResult<()>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    VocabFormat::from_path(path).save(vocab, path)?;
    log::info!(
        "saved vocabulary {}: {} tokens",
        path.display(),
        vocab.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(VocabFormat::from_path("vocab.json"), VocabFormat::Json);
        assert_eq!(VocabFormat::from_path("a/b/VOCAB.JSON"), VocabFormat::Json);
        assert_eq!(VocabFormat::from_path("vocab.txt"), VocabFormat::Base64);
        assert_eq!(VocabFormat::from_path("vocab"), VocabFormat::Base64);
        assert_eq!("json".parse::<VocabFormat>().unwrap(), VocabFormat::Json);
        assert_eq!(VocabFormat::Base64.to_string(), "base64");
    }

    #[test]
    fn test_save_load_by_extension() {
        type T = u32;
        let mut vocab = WordVocab::<T>::new(32).unwrap();
        vocab.lookup_or_insert("здравей");
        vocab.lookup_or_insert("свят");

        tempdir::TempDir::new("vocab_io_test")
            .and_then(|dir| {
                for name in ["vocab.txt", "vocab.json"] {
                    let path = dir.path().join(name);
                    save_vocab_path(&vocab, &path).expect("Failed to save vocab");
                    let loaded: WordVocab<T> =
                        load_vocab_path(&path).expect("Failed to load vocab");
                    assert_eq!(loaded, vocab, "{name}");
                }

                let text = std::fs::read_to_string(dir.path().join("vocab.txt"))?;
                assert!(text.starts_with("#capacity 32\n"));
                let json = std::fs::read_to_string(dir.path().join("vocab.json"))?;
                assert!(json.contains("\"word_to_id\""));
                Ok(())
            })
            .unwrap();
    }
}
