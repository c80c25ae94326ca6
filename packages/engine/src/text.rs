//! Text tokenization and statistics.
//!
//! Splits a text blob into word and separator runs, delegates each word to
//! the word splitter and reassembles the results. Separators (whitespace,
//! punctuation, digits) are preserved verbatim and never broken; syllable
//! boundaries only ever fall inside word runs.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::patterns::PatternSet;
use crate::splitter::split_word;

/// Word runs: alphabetic characters plus apostrophe, per the original
/// `[^'[:alpha:]]+` separator convention.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{Alphabetic}']+").expect("valid regex"));

/// One piece of a word-grouped text split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextPiece {
    /// A run of non-word text, preserved verbatim.
    Separator(String),
    /// One word as its ordered syllable fragments.
    Word(Vec<String>),
}

/// Split a text into a flat fragment list.
///
/// Fragment boundaries are exactly the syllable boundaries of the word
/// runs; separator runs are merged onto the surrounding fragments, so the
/// concatenation of the result reproduces `text` exactly.
pub fn split_text(text: &str, set: &PatternSet, min_word_length: usize) -> Vec<String> {
    let mut parts = Vec::new();
    let mut part = String::new();
    let mut last_end = 0;

    for m in WORD_PATTERN.find_iter(text) {
        part.push_str(&text[last_end..m.start()]);
        let mut syllables = split_word(m.as_str(), set, min_word_length).into_iter();
        if let Some(first) = syllables.next() {
            part.push_str(&first);
        }
        for syllable in syllables {
            parts.push(std::mem::replace(&mut part, syllable));
        }
        last_end = m.end();
    }

    part.push_str(&text[last_end..]);
    parts.push(part);
    parts
}

/// Split a text into separator pieces and per-word fragment lists.
///
/// The word-grouped variant of [`split_text`]: each word keeps its own
/// fragment list, separators stay separate pieces. Concatenating all
/// pieces in order reproduces `text` exactly, including a trailing
/// separator of any length.
pub fn split_words(text: &str, set: &PatternSet, min_word_length: usize) -> Vec<TextPiece> {
    let mut pieces = Vec::new();
    let mut last_end = 0;

    for m in WORD_PATTERN.find_iter(text) {
        if m.start() > last_end {
            pieces.push(TextPiece::Separator(text[last_end..m.start()].to_string()));
        }
        pieces.push(TextPiece::Word(split_word(m.as_str(), set, min_word_length)));
        last_end = m.end();
    }

    if last_end < text.len() {
        pieces.push(TextPiece::Separator(text[last_end..].to_string()));
    }
    pieces
}

/// Map from syllable count to the number of words with that count.
pub fn histogram(text: &str, set: &PatternSet, min_word_length: usize) -> BTreeMap<usize, usize> {
    let mut counts = BTreeMap::new();
    for m in WORD_PATTERN.find_iter(text) {
        let syllables = split_word(m.as_str(), set, min_word_length).len();
        *counts.entry(syllables).or_insert(0) += 1;
    }
    counts
}

/// Number of words in the text.
pub fn count_words(text: &str) -> usize {
    WORD_PATTERN.find_iter(text).count()
}

/// Total number of syllables across all words in the text.
pub fn count_syllables(text: &str, set: &PatternSet, min_word_length: usize) -> usize {
    WORD_PATTERN
        .find_iter(text)
        .map(|m| split_word(m.as_str(), set, min_word_length).len())
        .sum()
}

/// Number of words with three or more syllables.
pub fn count_polysyllables(text: &str, set: &PatternSet, min_word_length: usize) -> usize {
    WORD_PATTERN
        .find_iter(text)
        .filter(|m| split_word(m.as_str(), set, min_word_length).len() >= 3)
        .count()
}
