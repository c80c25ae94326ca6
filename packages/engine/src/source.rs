//! Language pattern sources.
//!
//! A [`PatternSource`] supplies the parsed pattern table for one language.
//! The default [`FileSource`] reads `hyph-<language>.tex` from a language
//! directory, plus an optional `min.json` with per-language hyphenation
//! margins. A missing pattern file is a hard error (no patterns is not an
//! empty table); missing margins silently fall back to the defaults.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use unicode_normalization::UnicodeNormalization;

use crate::config;
use crate::error::{HyphenationError, Result};
use crate::parser::parse_pattern_file;
use crate::patterns::PatternSet;

/// Supplier of the parsed pattern table for one language.
pub trait PatternSource {
    /// The language this source is configured for.
    fn language(&self) -> &str;

    /// Parse and return the full pattern table.
    ///
    /// # Returns
    /// * `Ok(PatternSet)` - Patterns, exceptions and margins
    /// * `Err(HyphenationError::LanguageUnavailable)` - If the backing
    ///   resource is missing or unreadable
    fn load(&self) -> Result<PatternSet>;
}

/// TeX pattern files in a language directory.
#[derive(Debug, Clone)]
pub struct FileSource {
    language: String,
    dir: PathBuf,
}

impl FileSource {
    /// Create a source for `language` rooted at `dir`.
    ///
    /// The language name is lowercased and validated before it is ever
    /// used in a file name.
    pub fn new(language: &str, dir: impl Into<PathBuf>) -> Result<Self> {
        let language = language.to_lowercase();
        config::validate_language(&language)?;
        Ok(Self {
            language,
            dir: dir.into(),
        })
    }

    /// Margins configured for this language in `min.json`, if any.
    ///
    /// The file maps language name to a `[left, right]` pair. Absence of
    /// the file or of an entry is normal; an undecodable file is logged
    /// and treated as absent.
    fn min_margins(&self) -> Option<(usize, usize)> {
        let path = self.dir.join(config::MARGIN_FILE);
        let content = fs::read_to_string(&path).ok()?;
        let margins: HashMap<String, (usize, usize)> = match serde_json::from_str(&content) {
            Ok(margins) => margins,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "Margin file undecodable, using defaults");
                return None;
            }
        };
        margins.get(&self.language).copied()
    }
}

impl PatternSource for FileSource {
    fn language(&self) -> &str {
        &self.language
    }

    fn load(&self) -> Result<PatternSet> {
        let path = self.dir.join(config::pattern_file_name(&self.language));
        tracing::debug!(path = %path.display(), language = %self.language, "Loading language patterns");

        let content =
            fs::read_to_string(&path).map_err(|source| HyphenationError::LanguageUnavailable {
                language: self.language.clone(),
                source,
            })?;

        // NFC first, so combining marks in the file match NFC input words.
        let content: String = content.nfc().collect();
        let parsed = parse_pattern_file(&content);

        let (min_left, min_right) = self
            .min_margins()
            .unwrap_or((config::DEFAULT_MIN_LEFT, config::DEFAULT_MIN_RIGHT));

        tracing::debug!(
            language = %self.language,
            patterns = parsed.patterns.len(),
            exceptions = parsed.exceptions.len(),
            max_pattern_length = parsed.max_pattern_length,
            min_left,
            min_right,
            "Parsed language patterns"
        );

        Ok(PatternSet::new(
            parsed.patterns,
            parsed.max_pattern_length,
            parsed.exceptions,
            min_left,
            min_right,
        ))
    }
}
