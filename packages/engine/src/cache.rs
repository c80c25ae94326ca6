//! Persistent pattern cache.
//!
//! Parsing a full pattern file takes noticeably longer than a JSON read,
//! so the parsed [`PatternSet`] can be stored per language and restored on
//! the next run. A cache is strictly optional: every failure on the read
//! path degrades to "no cached entry" and every failure on the write path
//! is logged and swallowed by the caller, so a broken cache never breaks a
//! split.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::Result;
use crate::patterns::PatternSet;

/// On-disk cache entry, one per language.
///
/// The version tag ties the entry to the parsed representation; entries
/// with another tag are treated as absent.
#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry {
    version: String,
    patterns: HashMap<String, String>,
    max_pattern: usize,
    hyphenation: HashMap<String, Vec<String>>,
    left_margin: usize,
    right_margin: usize,
}

/// Storage strategy for parsed pattern sets.
pub trait PatternCache {
    /// Restore the pattern set for a language.
    ///
    /// Returns `Ok(None)` when there is no usable entry: never written,
    /// unreadable, undecodable, or written by another engine version.
    fn load(&self, language: &str) -> Result<Option<PatternSet>>;

    /// Store the pattern set for a language.
    fn store(&self, language: &str, set: &PatternSet) -> Result<()>;
}

/// File cache holding one JSON document per language.
#[derive(Debug, Clone)]
pub struct JsonCache {
    dir: PathBuf,
}

impl JsonCache {
    /// Create a cache rooted at `dir`. The directory is created on the
    /// first store.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, language: &str) -> PathBuf {
        self.dir.join(config::cache_file_name(language))
    }
}

impl PatternCache for JsonCache {
    fn load(&self, language: &str) -> Result<Option<PatternSet>> {
        let path = self.path(language);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "Pattern cache unreadable, re-parsing source");
                return Ok(None);
            }
        };

        let entry: CacheEntry = match serde_json::from_str(&content) {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "Pattern cache undecodable, re-parsing source");
                return Ok(None);
            }
        };

        if entry.version != config::CACHE_VERSION {
            tracing::debug!(
                path = %path.display(),
                found = %entry.version,
                expected = %config::CACHE_VERSION,
                "Pattern cache version mismatch, re-parsing source"
            );
            return Ok(None);
        }

        Ok(Some(PatternSet::new(
            entry.patterns,
            entry.max_pattern,
            entry.hyphenation,
            entry.left_margin,
            entry.right_margin,
        )))
    }

    fn store(&self, language: &str, set: &PatternSet) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        let entry = CacheEntry {
            version: config::CACHE_VERSION.to_string(),
            patterns: set.patterns().clone(),
            max_pattern: set.max_pattern_length(),
            hyphenation: set.exceptions().clone(),
            left_margin: set.min_left(),
            right_margin: set.min_right(),
        };

        // Write-then-rename keeps concurrent readers off torn files.
        let path = self.path(language);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec(&entry)?)?;
        fs::rename(&tmp, &path)?;
        tracing::debug!(path = %path.display(), language = %language, "Stored pattern cache");
        Ok(())
    }
}
