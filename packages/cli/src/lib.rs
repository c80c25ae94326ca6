//! Lettergreep CLI - hyphenate text and HTML from the command line.
//!
//! The binary wraps [`lettergreep_engine`] with three subcommands:
//!
//! - `text`: hyphenate plain text from an argument, a file or stdin
//! - `html`: hyphenate the readable text of an HTML document
//! - `stats`: report word, syllable and polysyllable counts

pub mod cli;
