use std::{
    borrow::Borrow,
    collections::{BTreeSet, btree_set},
    fmt,
    ops::Deref,
    sync::LazyLock,
};

use regex::Regex;
use serde::Serialize;

/// The length every [`Word`] has.
pub const WORD_LENGTH: usize = 5;

static FIVE_LOWERCASE_LETTERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^[a-z]{{{WORD_LENGTH}}}$")).unwrap_or_else(|err| {
        panic!("five-letter word pattern failed to compile: {err}");
    })
});

/// Exactly five lowercase ASCII letters.
///
/// The only way to get one is [`Word::parse`], so holding a `Word` is proof
/// the invariant holds. Words order byte-wise, which for ASCII is plain
/// lexicographic order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Word(String);

impl Word {
    /// Normalise a line of a word list and accept it if it's a word.
    ///
    /// Surrounding whitespace is stripped and the line is lowercased before
    /// checking it against `^[a-z]{5}$`, so `" Crane\n"` yields `crane` while
    /// `"Cr4ne"` and `"crème"` yield nothing. The ASCII information separators
    /// (`\x1c` to `\x1f`) count as whitespace too.
    pub fn parse(line: &str) -> Option<Self> {
        let candidate = line.trim_matches(is_separator).to_lowercase();
        FIVE_LOWERCASE_LETTERS
            .is_match(&candidate)
            .then_some(Word(candidate))
    }

    /// The word as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || ('\x1c'..='\x1f').contains(&ch)
}

impl Deref for Word {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A set of unique [`Word`]s.
///
/// Backed by a [`BTreeSet`], so iterating always yields the words in
/// ascending order with no duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WordSet {
    words: BTreeSet<Word>,
}

impl WordSet {
    /// Create an empty set.
    #[inline]
    pub const fn new() -> Self {
        WordSet {
            words: BTreeSet::new(),
        }
    }

    /// Add a word, returning `false` if it was already present.
    #[inline]
    pub fn insert(&mut self, word: Word) -> bool {
        self.words.insert(word)
    }

    /// Check whether `word` is in the set.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Move every word of `other` into this set.
    pub fn union_with(&mut self, mut other: WordSet) {
        // Keep the bigger tree and drain the smaller one into it
        if other.words.len() > self.words.len() {
            std::mem::swap(&mut self.words, &mut other.words);
        }
        self.words.append(&mut other.words);
    }

    /// Get how many words there are in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if there are no words in the set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate through the words in ascending order.
    pub fn iter(&self) -> WordSetIter<'_> {
        WordSetIter(self.words.iter())
    }
}

impl FromIterator<Word> for WordSet {
    fn from_iter<T: IntoIterator<Item = Word>>(iter: T) -> Self {
        WordSet {
            words: iter.into_iter().collect(),
        }
    }
}

impl Extend<Word> for WordSet {
    fn extend<T: IntoIterator<Item = Word>>(&mut self, iter: T) {
        self.words.extend(iter);
    }
}

impl IntoIterator for WordSet {
    type IntoIter = btree_set::IntoIter<Word>;
    type Item = Word;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

impl<'a> IntoIterator for &'a WordSet {
    type IntoIter = WordSetIter<'a>;
    type Item = &'a str;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over a [`WordSet`].
///
/// Returned by [`WordSet::iter`].
#[derive(Debug)]
pub struct WordSetIter<'a>(btree_set::Iter<'a, Word>);

impl<'a> Iterator for WordSetIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(Word::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for WordSetIter<'_> {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl DoubleEndedIterator for WordSetIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(Word::as_str)
    }
}
