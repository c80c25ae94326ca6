//! Parser for TeX hyphenation pattern files.
//!
//! Languages ship their Liang patterns in a simplified TeX grammar:
//!
//! ```text
//! % comment until end of line
//! \patterns{
//! hy3ph he2n hen5at          % letters with gap scores
//! .re2 4te.                  % dots mark word boundaries
//! }
//! \hyphenation{
//! ta-ble pro-ject            % whole-word overrides
//! }
//! ```
//!
//! The scanner walks the file character by character (codepoint-aware, so
//! non-ASCII alphabets and combining marks survive) with two pieces of
//! state: the current `\command` and whether it is inside braces. Content
//! is only consumed inside braces under a known command; everything else
//! is skipped one character at a time, which makes the parser lenient
//! towards malformed entries.

use std::collections::HashMap;

use crate::splitter::fold_char;

/// Everything extracted from one pattern file.
#[derive(Debug, Default, Clone)]
pub struct ParsedPatternFile {
    /// Pattern key to score string.
    pub patterns: HashMap<String, String>,
    /// Length in characters of the longest pattern key.
    pub max_pattern_length: usize,
    /// Lowercase word (hyphens removed) to fragment list.
    pub exceptions: HashMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    None,
    Patterns,
    Hyphenation,
    /// Any other `\command`; its block content is skipped.
    Other,
}

/// Parse the content of a TeX pattern file.
pub fn parse_pattern_file(content: &str) -> ParsedPatternFile {
    let mut result = ParsedPatternFile::default();
    let mut command = Command::None;
    let mut in_braces = false;

    for line in content.lines() {
        let chars: Vec<char> = line.chars().collect();
        let mut offset = 0;
        while offset < chars.len() {
            let ch = chars[offset];

            // %comment: rest of the line is ignored.
            if ch == '%' {
                break;
            }

            // \command switches the parser mode.
            if ch == '\\' {
                let name: String = chars[offset + 1..]
                    .iter()
                    .take_while(|c| c.is_alphabetic())
                    .collect();
                if !name.is_empty() {
                    command = match name.as_str() {
                        "patterns" => Command::Patterns,
                        "hyphenation" => Command::Hyphenation,
                        _ => Command::Other,
                    };
                    offset += 1 + name.chars().count();
                    continue;
                }
            }

            if ch == '{' {
                in_braces = true;
                offset += 1;
                continue;
            }

            if ch == '}' {
                in_braces = false;
                command = Command::None;
                offset += 1;
                continue;
            }

            if in_braces && !ch.is_whitespace() {
                let token = read_token(&chars, offset);
                match command {
                    Command::Patterns => {
                        add_pattern(&mut result, token);
                        offset += token.len();
                        continue;
                    }
                    Command::Hyphenation => {
                        add_exception(&mut result, token);
                        offset += token.len();
                        continue;
                    }
                    Command::None | Command::Other => {}
                }
            }

            // Ignorable content, skip one character.
            offset += 1;
        }
    }

    result
}

/// Maximal run of token characters starting at `offset`.
fn read_token(chars: &[char], offset: usize) -> &[char] {
    let end = chars[offset..]
        .iter()
        .position(|c| c.is_whitespace() || matches!(c, '{' | '}' | '%'))
        .map_or(chars.len(), |p| offset + p);
    &chars[offset..end]
}

/// Split a pattern entry into its digit-free key and its score string.
///
/// Digits attach to the gap before the next key character; gaps without an
/// explicit digit score `0`, including the gap after the last character.
/// `ab1c2` therefore becomes key `abc` with scores `0012`, and `hy3ph`
/// becomes key `hyph` with scores `00300`. The score string of a key with
/// N characters always has exactly N+1 digits.
fn add_pattern(result: &mut ParsedPatternFile, token: &[char]) {
    let mut key = String::new();
    let mut key_length = 0usize;
    let mut scores = String::new();
    let mut expect_digit = true;

    for &c in token {
        if c.is_ascii_digit() {
            scores.push(c);
            expect_digit = false;
        } else {
            if expect_digit {
                scores.push('0');
            }
            key.push(fold_char(c));
            key_length += 1;
            expect_digit = true;
        }
    }
    if expect_digit {
        scores.push('0');
    }

    // A digits-only token carries no position to attach scores to.
    if key_length == 0 {
        return;
    }

    result.patterns.insert(key, scores);
    if key_length > result.max_pattern_length {
        result.max_pattern_length = key_length;
    }
}

/// Store a pre-hyphenated word, keyed by the word with its hyphens removed.
fn add_exception(result: &mut ParsedPatternFile, token: &[char]) {
    let marked: String = token.iter().map(|&c| fold_char(c)).collect();
    let fragments: Vec<String> = marked
        .split('-')
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect();
    if fragments.is_empty() {
        return;
    }
    let word = fragments.concat();
    result.exceptions.insert(word, fragments);
}
