//! # Base64 Vocabulary IO
//!
//! The native vocabulary format:
//! ```terminaloutput
//! #capacity {CAPACITY}
//! {BASE64 TOKEN} {ID}
//! ...
//! ```
//!
//! Entries are written in id order, special tokens included;
//! so re-saving an unchanged vocabulary is byte-identical.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use base64::{Engine, prelude::BASE64_STANDARD};

use crate::{
    errors::{AlphapackError, AlphapackResult},
    types::TokenType,
    vocab::{WordVocab, validators::try_capacity},
};

/// Header line prefix carrying the capacity.
pub const CAPACITY_HEADER: &str = "#capacity";

/// Load a [`WordVocab`] from a base64 vocab file.
///
/// # Arguments
/// * `path` - the path to the vocabulary file.
pub fn load_base64_vocab_path<T, P>(path: P) -> AlphapackResult<WordVocab<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let reader = BufReader::new(File::open(path)?);
    read_base64_vocab(reader)
}

/// Read a [`WordVocab`] from a base64 vocab line reader.
///
/// # Arguments
/// * `reader` - the line reader.
///
/// ## Errors
/// `CorruptVocabulary` for a missing header, a malformed line, or a
/// table which fails [`WordVocab::from_tokens`] validation.
pub fn read_base64_vocab<T, R>(reader: R) -> AlphapackResult<WordVocab<T>>
where
    T: TokenType,
    R: BufRead,
{
    let mut lines = reader.lines();

    let header = lines
        .next()
        .transpose()?
        .ok_or_else(|| AlphapackError::corrupt("empty vocabulary file"))?;
    let capacity = parse_header(&header)?;
    try_capacity::<T>(capacity).map_err(|e| AlphapackError::corrupt(e.to_string()))?;

    let mut entries: Vec<(usize, String)> = Vec::new();
    for (lineno, line) in lines.enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        // Header is line 1.
        entries.push(parse_entry(&line, lineno + 2)?);
    }
    entries.sort_by_key(|(id, _)| *id);

    for (idx, (id, token)) in entries.iter().enumerate() {
        if *id >= capacity {
            return Err(AlphapackError::corrupt(format!(
                "id {id} ({token:?}) exceeds capacity {capacity}"
            )));
        }
        if *id != idx {
            return Err(AlphapackError::corrupt(format!(
                "ids are not dense: expected {idx}, found {id}"
            )));
        }
    }

    let vocab = WordVocab::from_tokens(capacity, entries.into_iter().map(|(_, token)| token))?;
    log::debug!(
        "read vocabulary: {} tokens, capacity {}",
        vocab.len(),
        vocab.capacity()
    );
    Ok(vocab)
}

fn parse_header(line: &str) -> AlphapackResult<usize> {
    let value = line
        .strip_prefix(CAPACITY_HEADER)
        .ok_or_else(|| AlphapackError::corrupt(format!("missing {CAPACITY_HEADER} header")))?;
    value
        .trim()
        .parse()
        .map_err(|e| AlphapackError::corrupt(format!("bad capacity {value:?}: {e}")))
}

fn parse_entry(
    line: &str,
    lineno: usize,
) -> AlphapackResult<(usize, String)> {
    let (span, id) = line
        .split_once(' ')
        .ok_or_else(|| AlphapackError::corrupt(format!("line {lineno}: expected `TOKEN ID`")))?;

    let bytes = BASE64_STANDARD
        .decode(span)
        .map_err(|e| AlphapackError::corrupt(format!("line {lineno}: {e}")))?;
    let token = String::from_utf8(bytes)
        .map_err(|e| AlphapackError::corrupt(format!("line {lineno}: {e}")))?;
    let id = id
        .parse()
        .map_err(|e| AlphapackError::corrupt(format!("line {lineno}: bad id {id:?}: {e}")))?;

    Ok((id, token))
}

/// Save a [`WordVocab`] to a base64 vocab file.
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `path` - the path to save the vocabulary to.
pub fn save_base64_vocab_path<T: TokenType, P: AsRef<Path>>(
    vocab: &WordVocab<T>,
    path: P,
) -> AlphapackResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_base64_vocab(vocab, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a [`WordVocab`] to a [`Write`] writer.
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `writer` - the writer to target.
pub fn write_base64_vocab<T, W>(
    vocab: &WordVocab<T>,
    writer: &mut W,
) -> AlphapackResult<()>
where
    T: TokenType,
    W: Write,
{
    writeln!(writer, "{CAPACITY_HEADER} {}", vocab.capacity())?;
    for (id, token) in vocab.iter() {
        writeln!(writer, "{} {}", BASE64_STANDARD.encode(token), id)?;
    }
    Ok(())
}
