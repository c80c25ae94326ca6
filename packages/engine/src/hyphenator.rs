//! The hyphenator facade.
//!
//! [`Hyphenator`] ties the engine together for one language: it owns the
//! pattern source, an optional cache, the hyphen marker and the HTML node
//! filter, loads the pattern table on first use and exposes the public
//! split / hyphenate / statistics operations.
//!
//! # Example
//!
//! ```no_run
//! use lettergreep_engine::{Hyphen, Hyphenator};
//!
//! let mut hyphenator = Hyphenator::new("en-us", "./languages")?
//!     .with_cache_dir("./cache")
//!     .with_hyphen(Hyphen::Dash);
//!
//! assert_eq!(hyphenator.hyphenate_word("hyphenation")?, "hy-phen-ation");
//! # Ok::<(), lettergreep_engine::HyphenationError>(())
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use crate::cache::{JsonCache, PatternCache};
use crate::error::Result;
use crate::html::{hyphenate_html, NodeFilter};
use crate::hyphen::Hyphen;
use crate::patterns::PatternSet;
use crate::source::{FileSource, PatternSource};
use crate::splitter::split_word;
use crate::text;
use crate::text::TextPiece;

/// Hyphenates words, plain text and HTML for one language.
pub struct Hyphenator {
    source: Box<dyn PatternSource>,
    cache: Option<Box<dyn PatternCache>>,
    hyphen: Hyphen,
    min_word_length: usize,
    filter: NodeFilter,
    /// Loaded lazily on first use, then reused for every split.
    patterns: Option<PatternSet>,
}

impl Hyphenator {
    /// Create a hyphenator reading `hyph-<language>.tex` from the given
    /// language directory. No cache, soft hyphen marker, no word length
    /// floor.
    pub fn new(language: &str, language_dir: impl AsRef<Path>) -> Result<Self> {
        let source = FileSource::new(language, language_dir.as_ref())?;
        Ok(Self::with_source(Box::new(source)))
    }

    /// Create a hyphenator over a custom pattern source.
    pub fn with_source(source: Box<dyn PatternSource>) -> Self {
        Self {
            source,
            cache: None,
            hyphen: Hyphen::default(),
            min_word_length: 0,
            filter: NodeFilter::new(),
            patterns: None,
        }
    }

    /// Store and restore parsed patterns as JSON files under `dir`.
    pub fn with_cache_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.cache = Some(Box::new(JsonCache::new(dir.as_ref())));
        self
    }

    /// Use a custom cache strategy.
    pub fn with_cache(mut self, cache: Box<dyn PatternCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Marker placed at syllable boundaries.
    pub fn with_hyphen(mut self, hyphen: Hyphen) -> Self {
        self.hyphen = hyphen;
        self
    }

    /// Words need at least this many characters to be hyphenated.
    pub fn with_min_word_length(mut self, length: usize) -> Self {
        self.min_word_length = length;
        self
    }

    /// Change the hyphen marker.
    pub fn set_hyphen(&mut self, hyphen: Hyphen) {
        self.hyphen = hyphen;
    }

    /// The current hyphen marker.
    pub fn hyphen(&self) -> &Hyphen {
        &self.hyphen
    }

    /// The language this hyphenator serves.
    pub fn language(&self) -> &str {
        self.source.language()
    }

    /// HTML include/exclude rules, for mutation.
    pub fn filter_mut(&mut self) -> &mut NodeFilter {
        &mut self.filter
    }

    /// The pattern table, loading it on first use.
    ///
    /// The cache is consulted first; on a miss the source is parsed and
    /// the result written back. A cache write failure is logged and
    /// ignored - the parse result is still used.
    pub fn patterns(&mut self) -> Result<&PatternSet> {
        if self.patterns.is_none() {
            let set = self.load_patterns()?;
            self.patterns = Some(set);
        }
        #[allow(clippy::expect_used)] // Populated by the branch above
        Ok(self.patterns.as_ref().expect("pattern table loaded"))
    }

    fn load_patterns(&self) -> Result<PatternSet> {
        let language = self.source.language();

        if let Some(cache) = &self.cache {
            if let Some(set) = cache.load(language)? {
                tracing::debug!(language = %language, "Loaded pattern table from cache");
                return Ok(set);
            }
        }

        let set = self.source.load()?;

        if let Some(cache) = &self.cache {
            if let Err(err) = cache.store(language, &set) {
                tracing::warn!(language = %language, error = %err, "Failed to store pattern cache");
            }
        }

        Ok(set)
    }

    /// Split a single word into syllable fragments.
    ///
    /// Punctuation is not handled here; for sentences use
    /// [`split_text`](Self::split_text) or [`split_words`](Self::split_words).
    pub fn split_word(&mut self, word: &str) -> Result<Vec<String>> {
        let min_word_length = self.min_word_length;
        let set = self.patterns()?;
        Ok(split_word(word, set, min_word_length))
    }

    /// Split a text into a flat fragment list; separators are preserved
    /// verbatim and merged onto the surrounding fragments.
    pub fn split_text(&mut self, text: &str) -> Result<Vec<String>> {
        let min_word_length = self.min_word_length;
        let set = self.patterns()?;
        Ok(text::split_text(text, set, min_word_length))
    }

    /// Split a text into separator pieces and per-word fragment lists.
    pub fn split_words(&mut self, text: &str) -> Result<Vec<TextPiece>> {
        let min_word_length = self.min_word_length;
        let set = self.patterns()?;
        Ok(text::split_words(text, set, min_word_length))
    }

    /// Hyphenate a single word into a string.
    pub fn hyphenate_word(&mut self, word: &str) -> Result<String> {
        let fragments = self.split_word(word)?;
        Ok(self.hyphen.join_text(&fragments))
    }

    /// Hyphenate all words in a plain text.
    pub fn hyphenate_text(&mut self, text: &str) -> Result<String> {
        let fragments = self.split_text(text)?;
        Ok(self.hyphen.join_text(&fragments))
    }

    /// Hyphenate the readable text of an HTML document, honoring the
    /// include/exclude rules.
    pub fn hyphenate_html(&mut self, html: &str) -> Result<String> {
        let min_word_length = self.min_word_length;
        self.patterns()?;
        #[allow(clippy::expect_used)] // Loaded by the line above
        let set = self.patterns.as_ref().expect("pattern table loaded");
        hyphenate_html(html, set, &self.hyphen, min_word_length, &self.filter)
    }

    /// Syllable-count histogram of the text: syllables per word to the
    /// number of words with that count.
    pub fn histogram_text(&mut self, text: &str) -> Result<BTreeMap<usize, usize>> {
        let min_word_length = self.min_word_length;
        let set = self.patterns()?;
        Ok(text::histogram(text, set, min_word_length))
    }

    /// Number of words in the text.
    pub fn count_words_text(&self, text: &str) -> usize {
        text::count_words(text)
    }

    /// Total number of syllables in the text.
    pub fn count_syllables_text(&mut self, text: &str) -> Result<usize> {
        let min_word_length = self.min_word_length;
        let set = self.patterns()?;
        Ok(text::count_syllables(text, set, min_word_length))
    }

    /// Number of words with three or more syllables.
    pub fn count_polysyllables_text(&mut self, text: &str) -> Result<usize> {
        let min_word_length = self.min_word_length;
        let set = self.patterns()?;
        Ok(text::count_polysyllables(text, set, min_word_length))
    }
}
