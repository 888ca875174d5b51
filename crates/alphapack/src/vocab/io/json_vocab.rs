//! # Legacy JSON Vocabulary IO
//!
//! The JSON layout written by earlier releases of the tool:
//! ```json
//! {
//!   "word_to_id": { "<PAD>": 0, ... },
//!   "id_to_word": { "0": "<PAD>", ... },
//!   "vocab_size": 60000,
//!   "next_id": 5
//! }
//! ```
//! `id_to_word`, `vocab_size` and `next_id` are optional on read;
//! `vocab_size` defaults to the entry count.

use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::{
    errors::{AlphapackError, AlphapackResult},
    types::TokenType,
    vocab::WordVocab,
};

#[derive(Debug, Serialize, Deserialize)]
struct JsonVocabFile {
    word_to_id: BTreeMap<String, u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    id_to_word: Option<BTreeMap<u64, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    vocab_size: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    next_id: Option<u64>,
}

impl JsonVocabFile {
    fn from_vocab<T: TokenType>(vocab: &WordVocab<T>) -> Self {
        let mut word_to_id = BTreeMap::new();
        let mut id_to_word = BTreeMap::new();
        for (idx, token) in vocab.tokens().iter().enumerate() {
            word_to_id.insert(token.clone(), idx as u64);
            id_to_word.insert(idx as u64, token.clone());
        }
        Self {
            word_to_id,
            id_to_word: Some(id_to_word),
            vocab_size: Some(vocab.capacity()),
            next_id: Some(vocab.len() as u64),
        }
    }

    fn into_vocab<T: TokenType>(self) -> AlphapackResult<WordVocab<T>> {
        let len = self.word_to_id.len();
        let capacity = self.vocab_size.unwrap_or(len);

        let mut slots: Vec<Option<String>> = vec![None; len];
        for (token, id) in self.word_to_id {
            let slot = usize::try_from(id)
                .ok()
                .filter(|&idx| idx < len)
                .ok_or_else(|| {
                    AlphapackError::corrupt(format!("ids are not dense: {token:?} has id {id}"))
                })?;
            if let Some(prev) = &slots[slot] {
                return Err(AlphapackError::corrupt(format!(
                    "id {id} is shared by {prev:?} and {token:?}"
                )));
            }
            slots[slot] = Some(token);
        }
        // `len` distinct slots filled from `len` entries.
        let tokens: Vec<String> = slots.into_iter().flatten().collect();

        if let Some(id_to_word) = &self.id_to_word {
            if id_to_word.len() != tokens.len() {
                return Err(AlphapackError::corrupt(format!(
                    "id_to_word has {} entries, word_to_id has {}",
                    id_to_word.len(),
                    tokens.len()
                )));
            }
            for (id, word) in id_to_word {
                let expected = usize::try_from(*id).ok().and_then(|idx| tokens.get(idx));
                if expected != Some(word) {
                    return Err(AlphapackError::corrupt(format!(
                        "id_to_word[{id}] = {word:?} disagrees with word_to_id"
                    )));
                }
            }
        }
        if let Some(next_id) = self.next_id
            && next_id != tokens.len() as u64
        {
            return Err(AlphapackError::corrupt(format!(
                "next_id {next_id} does not follow {} entries",
                tokens.len()
            )));
        }

        WordVocab::from_tokens(capacity, tokens).map_err(|e| match e {
            AlphapackError::InvalidArgument(msg) => AlphapackError::CorruptVocabulary(msg),
            e => e,
        })
    }
}

/// Load a [`WordVocab`] from a legacy JSON vocab file.
pub fn load_json_vocab_path<T, P>(path: P) -> AlphapackResult<WordVocab<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    read_json_vocab(BufReader::new(File::open(path)?))
}

/// Read a [`WordVocab`] from a legacy JSON vocab reader.
///
/// ## Errors
/// * `Json` if the text is not valid JSON of the expected shape.
/// * `CorruptVocabulary` if the table fails validation.
pub fn read_json_vocab<T, R>(reader: R) -> AlphapackResult<WordVocab<T>>
where
    T: TokenType,
    R: Read,
{
    let file: JsonVocabFile = serde_json::from_reader(reader)?;
    file.into_vocab()
}

/// Save a [`WordVocab`] to a legacy JSON vocab file.
pub fn save_json_vocab_path<T: TokenType, P: AsRef<Path>>(
    vocab: &WordVocab<T>,
    path: P,
) -> AlphapackResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_json_vocab(vocab, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a [`WordVocab`] to a [`Write`] writer as legacy JSON.
///
/// Maps are key-sorted, so output is deterministic.
pub fn write_json_vocab<T, W>(
    vocab: &WordVocab<T>,
    writer: &mut W,
) -> AlphapackResult<()>
where
    T: TokenType,
    W: Write,
{
    serde_json::to_writer_pretty(&mut *writer, &JsonVocabFile::from_vocab(vocab))?;
    writeln!(writer)?;
    Ok(())
}
