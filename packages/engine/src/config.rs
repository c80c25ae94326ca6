//! Configuration constants and validation functions for the engine.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{HyphenationError, Result};

/// Version tag written into pattern caches.
///
/// Bump this whenever the parsed pattern representation changes; cache
/// entries carrying another tag are treated as absent and the language
/// source is re-parsed.
pub const CACHE_VERSION: &str = "2";

/// Minimum number of characters left unbroken at the start of a word
/// when the language does not configure its own margins.
pub const DEFAULT_MIN_LEFT: usize = 2;

/// Minimum number of characters left unbroken at the end of a word
/// when the language does not configure its own margins.
pub const DEFAULT_MIN_RIGHT: usize = 2;

/// Name of the per-language margin configuration file inside the
/// language directory. Maps language name to a `[left, right]` pair.
/// A missing file or missing entry is not an error; defaults apply.
pub const MARGIN_FILE: &str = "min.json";

/// Language name pattern: lowercase alphanumeric runs joined by dashes.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LANGUAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("valid regex"));

/// Validate a language name.
///
/// Language names become part of file names (`hyph-<language>.tex` and the
/// cache file), so anything that could escape the language directory is
/// rejected here, before any file system access.
///
/// # Examples
/// ```
/// use lettergreep_engine::config::validate_language;
///
/// assert!(validate_language("nl").is_ok());
/// assert!(validate_language("en-us").is_ok());
/// assert!(validate_language("../etc").is_err());
/// assert!(validate_language("EN").is_err());
/// ```
pub fn validate_language(language: &str) -> Result<()> {
    if LANGUAGE_PATTERN.is_match(language) {
        Ok(())
    } else {
        Err(HyphenationError::InvalidLanguage(language.to_string()))
    }
}

/// File name of the TeX pattern file for a language.
///
/// # Examples
/// ```
/// use lettergreep_engine::config::pattern_file_name;
///
/// assert_eq!(pattern_file_name("en-us"), "hyph-en-us.tex");
/// ```
pub fn pattern_file_name(language: &str) -> String {
    debug_assert!(
        LANGUAGE_PATTERN.is_match(language),
        "language should be validated before calling pattern_file_name"
    );
    format!("hyph-{language}.tex")
}

/// File name of the JSON pattern cache for a language.
///
/// # Examples
/// ```
/// use lettergreep_engine::config::cache_file_name;
///
/// assert_eq!(cache_file_name("nl"), "lettergreep.nl.json");
/// ```
pub fn cache_file_name(language: &str) -> String {
    debug_assert!(
        LANGUAGE_PATTERN.is_match(language),
        "language should be validated before calling cache_file_name"
    );
    format!("lettergreep.{language}.json")
}
