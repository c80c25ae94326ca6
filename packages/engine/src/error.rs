//! Error types for the hyphenation engine.

use thiserror::Error;

/// Main error type for engine operations.
#[derive(Debug, Error)]
pub enum HyphenationError {
    /// The pattern file for the requested language could not be read.
    #[error("Language '{language}' unavailable: {source}")]
    LanguageUnavailable {
        language: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid language name.
    #[error("Invalid language name: '{0}'. Expected lowercase letters, digits and dashes (e.g. nl, en-us)")]
    InvalidLanguage(String),

    /// IO error (file operations).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, HyphenationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_unavailable_display() {
        let err = HyphenationError::LanguageUnavailable {
            language: "xx".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().contains("xx"));
        assert!(err.to_string().contains("no such file"));
    }

    #[test]
    fn test_invalid_language_display() {
        let err = HyphenationError::InvalidLanguage("EN_US".to_string());
        assert!(err.to_string().contains("EN_US"));
        assert!(err.to_string().contains("en-us"));
    }
}
