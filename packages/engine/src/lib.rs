//! Lettergreep Engine
//!
//! A Rust implementation of Frank Liang's pattern hyphenation, as used by
//! TeX. This library provides functionality for:
//! - Parsing TeX hyphenation pattern files (patterns and exceptions)
//! - Splitting words and texts into syllable fragments
//! - Joining fragments with soft hyphens, dashes, entities or custom text
//! - Hyphenating the readable text of HTML documents
//! - Caching parsed pattern tables per language
//!
//! # Example
//!
//! ```ignore
//! use lettergreep_engine::{Hyphen, Hyphenator};
//!
//! let mut hyphenator = Hyphenator::new("en-us", "./languages")?
//!     .with_cache_dir("./cache")
//!     .with_hyphen(Hyphen::Dash);
//!
//! assert_eq!(hyphenator.hyphenate_word("hyphenation")?, "hy-phen-ation");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Configuration constants and validation
//! - [`error`]: Error types and Result alias
//! - [`patterns`]: Parsed pattern data for one language
//! - [`parser`]: TeX pattern file parser
//! - [`source`]: Language pattern sources (file based)
//! - [`cache`]: Persistent pattern caches (JSON file based)
//! - [`splitter`]: The Liang word splitter
//! - [`text`]: Text tokenization and statistics
//! - [`hyphen`]: Hyphen marker strategies
//! - [`html`]: HTML tree hyphenation
//! - [`hyphenator`]: The per-language facade

pub mod cache;
pub mod config;
pub mod error;
pub mod html;
pub mod hyphen;
pub mod hyphenator;
pub mod parser;
pub mod patterns;
pub mod source;
pub mod splitter;
pub mod text;

// Re-export commonly used items
pub use cache::{JsonCache, PatternCache};
pub use error::{HyphenationError, Result};
pub use html::NodeFilter;
pub use hyphen::Hyphen;
pub use hyphenator::Hyphenator;
pub use patterns::PatternSet;
pub use source::{FileSource, PatternSource};
pub use splitter::split_word;
pub use text::TextPiece;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
