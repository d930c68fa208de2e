use std::{fs, path::Path};

use crate::{BuildError, Word, WordSet};

/// Read a newline-delimited word list and keep its five-letter words.
///
/// Bytes that aren't valid UTF-8 are dropped rather than failing the read, so
/// a stray Latin-1 byte doesn't take the rest of its line down with it.
/// `path` must exist; optional inputs are the caller's problem.
pub fn filter_five_letter_words(
    path: impl AsRef<Path>,
) -> Result<WordSet, BuildError> {
    let path = path.as_ref();
    let bytes = fs::read(path)
        .map_err(|io_err| BuildError::Read(path.to_owned(), io_err))?;
    let words = filter_five_letter_text(&decode_ignoring_errors(&bytes));
    log::debug!("{} five-letter words in {}", words.len(), path.display());
    Ok(words)
}

/// Keep the five-letter words of already-decoded text.
///
/// Lines end at `\n`, `\r` or `\r\n`.
pub fn filter_five_letter_text(text: &str) -> WordSet {
    text.split(['\n', '\r']).filter_map(Word::parse).collect()
}

fn decode_ignoring_errors(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}
