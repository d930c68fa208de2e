use std::path::Path;

use serde::Serialize;
use serde_json::{Serializer, ser::PrettyFormatter};

use crate::{BuildError, WordSet, errors::SerializeError, fetch::write_file};

/// Render the words as a pretty-printed JSON array.
///
/// Two-space indentation, ascending order, a single trailing newline, and
/// nothing but ASCII: any other character is written as a `\uXXXX` escape.
pub fn to_json(words: &WordSet) -> Result<String, BuildError> {
    let mut buf = Vec::with_capacity(words.len() * 12 + 4);
    let mut serializer =
        Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"  "));
    words
        .serialize(&mut serializer)
        .map_err(SerializeError::from)?;

    // serde_json only ever emits valid UTF-8
    let json = String::from_utf8_lossy(&buf);
    let mut out = escape_non_ascii(&json);
    out.push('\n');
    Ok(out)
}

/// Write the words to `path` as JSON, replacing whatever was there.
pub fn write_words(
    path: impl AsRef<Path>,
    words: &WordSet,
) -> Result<(), BuildError> {
    let path = path.as_ref();
    let json = to_json(words)?;
    write_file(path, json.as_bytes())?;
    log::debug!("wrote {} words to {}", words.len(), path.display());
    Ok(())
}

// Non-ASCII can only appear inside JSON strings, where \u escapes are always
// valid, so this is safe to do on the serialised text
fn escape_non_ascii(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for ch in json.chars() {
        if ch.is_ascii() {
            out.push(ch);
            continue;
        }
        let mut units = [0; 2];
        for unit in ch.encode_utf16(&mut units) {
            out.push_str(&format!("\\u{unit:04x}"));
        }
    }
    out
}
