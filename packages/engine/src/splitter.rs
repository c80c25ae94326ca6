//! Liang pattern word splitter.
//!
//! The core of the engine: given one word and a [`PatternSet`], produce the
//! ordered syllable fragments whose concatenation reproduces the word.
//!
//! A word is wrapped in `.` boundary markers and lowercased, then every
//! substring up to the maximum pattern length is looked up in the pattern
//! table. Each matching pattern contributes one digit per character gap;
//! overlapping contributions keep the point-wise maximum. A gap whose final
//! score is odd is a legal break point, subject to the left/right margins.

use crate::patterns::PatternSet;

/// Lowercase a single character without changing the character count.
///
/// `char::to_lowercase` may expand to multiple characters for a handful of
/// codepoints; break positions are indexed against the original word, so
/// only the first mapped character is kept.
pub(crate) fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Split a word into syllable fragments.
///
/// Words shorter than the margin sum or `min_word_length` come back as a
/// single fragment. A whole-word exception takes precedence over pattern
/// matching; its fragments are re-cased from the original word.
///
/// # Arguments
/// * `word` - The word to split; case is preserved in the output
/// * `set` - Patterns, exceptions and margins of the active language
/// * `min_word_length` - Extra minimum length below which no split happens
pub fn split_word(word: &str, set: &PatternSet, min_word_length: usize) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let word_length = chars.len();

    if word_length < set.min_left() + set.min_right() || word_length < min_word_length {
        return vec![word.to_string()];
    }

    if let Some(fragments) = set.exception(&word.to_lowercase()) {
        return recase_fragments(&chars, fragments);
    }

    split_by_patterns(&chars, set)
}

/// Apply an exception's fragment boundaries to the original word.
///
/// The exception table stores lowercase fragments; the output must carry
/// the caller's casing, so the original characters are re-sliced using the
/// fragment lengths.
fn recase_fragments(chars: &[char], fragments: &[String]) -> Vec<String> {
    let mut parts: Vec<String> = Vec::with_capacity(fragments.len());
    let mut taken = 0;
    for fragment in fragments {
        if taken >= chars.len() {
            break;
        }
        let length = fragment.chars().count().min(chars.len() - taken);
        parts.push(chars[taken..taken + length].iter().collect());
        taken += length;
    }
    if taken < chars.len() {
        // Length drift from case folding; keep the tail on the last fragment.
        let tail: String = chars[taken..].iter().collect();
        match parts.last_mut() {
            Some(last) => last.push_str(&tail),
            None => parts.push(tail),
        }
    }
    parts
}

/// Liang maximization over `"." + word + "."`.
fn split_by_patterns(chars: &[char], set: &PatternSet) -> Vec<String> {
    let mut text: Vec<char> = Vec::with_capacity(chars.len() + 2);
    text.push('.');
    text.extend(chars.iter().map(|&c| fold_char(c)));
    text.push('.');
    let text_length = text.len();

    let pattern_length = set.max_pattern_length().min(text_length);
    let end = text_length - set.min_right();

    // Point-wise maximum of the scores of every matching pattern.
    // before[i] scores the gap in front of text position i.
    let mut before = vec![0u8; text_length + 1];
    for start in 0..end {
        let max_length = pattern_length.min(text_length - start);
        for length in 1..=max_length {
            let subword: String = text[start..start + length].iter().collect();
            if let Some(scores) = set.score_string(&subword) {
                for (offset, digit) in scores.bytes().enumerate() {
                    let score = digit.saturating_sub(b'0');
                    if score > before[start + offset] {
                        before[start + offset] = score;
                    }
                }
            }
        }
    }

    // Walk the original word; an odd score breaks the fragment. The first
    // min_left and last min_right characters are never up for breaking.
    let mut parts = Vec::new();
    let mut part: String = chars[..set.min_left()].iter().collect();
    for i in set.min_left() + 1..end {
        if before[i] % 2 == 1 {
            parts.push(std::mem::take(&mut part));
        }
        part.push(chars[i - 1]);
    }
    for i in end..text_length - 1 {
        part.push(chars[i - 1]);
    }
    if !part.is_empty() {
        parts.push(part);
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_pattern_file;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    /// The classic Liang demonstration set: splits "hyphenation" into
    /// hy-phen-ation.
    fn liang_set() -> PatternSet {
        let parsed = parse_pattern_file(
            "\\patterns{hy3ph he2n hena4 hen5at 1na n2at 1tio 2io o2n a1b}\n\
             \\hyphenation{ta-ble pro-ject}",
        );
        PatternSet::new(
            parsed.patterns,
            parsed.max_pattern_length,
            parsed.exceptions,
            2,
            2,
        )
    }

    #[test]
    fn test_split_hyphenation() {
        let parts = split_word("hyphenation", &liang_set(), 0);
        assert_eq!(parts, vec!["hy", "phen", "ation"]);
    }

    #[test]
    fn test_case_is_preserved_and_breaks_unchanged() {
        let set = liang_set();
        let lower = split_word("hyphenation", &set, 0);
        let mixed = split_word("Hyphenation", &set, 0);
        assert_eq!(mixed, vec!["Hy", "phen", "ation"]);
        assert_eq!(lower.len(), mixed.len());
        for (a, b) in lower.iter().zip(&mixed) {
            assert_eq!(a.chars().count(), b.chars().count());
        }
    }

    #[test]
    fn test_round_trip() {
        let set = liang_set();
        for word in ["hyphenation", "Hyphenation", "table", "ababab", "x", ""] {
            assert_eq!(split_word(word, &set, 0).concat(), word);
        }
    }

    #[test]
    fn test_short_word_is_not_split() {
        let parts = split_word("cat", &liang_set(), 0);
        assert_eq!(parts, vec!["cat"]);
    }

    #[test]
    fn test_empty_word_yields_single_empty_fragment() {
        let parts = split_word("", &liang_set(), 0);
        assert_eq!(parts, vec![""]);
    }

    #[test]
    fn test_min_word_length_short_circuit() {
        let parts = split_word("hyphenation", &liang_set(), 20);
        assert_eq!(parts, vec!["hyphenation"]);
    }

    #[test]
    fn test_exception_lookup() {
        let parts = split_word("table", &liang_set(), 0);
        assert_eq!(parts, vec!["ta", "ble"]);
    }

    #[test]
    fn test_exception_takes_precedence_over_patterns() {
        // The patterns would split hy-phen-ation; the exception dictates
        // different boundaries and must win.
        let parsed = parse_pattern_file(
            "\\patterns{hy3ph he2n hena4 hen5at 1na n2at 1tio 2io o2n}\n\
             \\hyphenation{hy-phe-na-tion}",
        );
        let set = PatternSet::new(
            parsed.patterns,
            parsed.max_pattern_length,
            parsed.exceptions,
            2,
            2,
        );
        let parts = split_word("hyphenation", &set, 0);
        assert_eq!(parts, vec!["hy", "phe", "na", "tion"]);
    }

    #[test]
    fn test_exception_recased_from_original() {
        let parts = split_word("TABLE", &liang_set(), 0);
        assert_eq!(parts, vec!["TA", "BLE"]);
        let parts = split_word("Project", &liang_set(), 0);
        assert_eq!(parts, vec!["Pro", "ject"]);
    }

    #[test]
    fn test_margins_are_respected() {
        // a1b scores every a-b gap; margins keep the outer gaps intact.
        let parts = split_word("ababab", &liang_set(), 0);
        assert_eq!(parts, vec!["aba", "bab"]);
        for part in &parts {
            assert!(part.chars().count() >= 2);
        }
    }

    #[test]
    fn test_wide_margins_suppress_breaks() {
        let parsed = parse_pattern_file("\\patterns{hy3ph he2n hena4 hen5at 1na n2at 1tio 2io o2n}");
        let set = PatternSet::new(
            parsed.patterns.clone(),
            parsed.max_pattern_length,
            HashMap::new(),
            5,
            5,
        );
        // Margins 5/5 leave only the hen5at break legal.
        let parts = split_word("hyphenation", &set, 0);
        assert_eq!(parts, vec!["hyphen", "ation"]);

        let set = PatternSet::new(
            parsed.patterns,
            parsed.max_pattern_length,
            HashMap::new(),
            5,
            6,
        );
        // Margins 5/6 rule out every odd gap.
        let parts = split_word("hyphenation", &set, 0);
        assert_eq!(parts, vec!["hyphenation"]);
    }

    #[test]
    fn test_word_without_matching_patterns() {
        let parts = split_word("zzzzzz", &liang_set(), 0);
        assert_eq!(parts, vec!["zzzzzz"]);
    }

    #[test]
    fn test_fold_char_keeps_length() {
        assert_eq!(fold_char('A'), 'a');
        assert_eq!(fold_char('ß'), 'ß');
        assert_eq!(fold_char('-'), '-');
    }
}
