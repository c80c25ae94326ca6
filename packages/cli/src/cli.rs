//! Command-line interface for lettergreep.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use console::style;

use lettergreep_engine::{Hyphen, Hyphenator, Result};

/// Lettergreep - hyphenate text and HTML with TeX patterns.
#[derive(Parser)]
#[command(name = "lettergreep")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand.
#[derive(Args)]
pub struct CommonOpts {
    /// Language whose patterns to use (e.g. nl, en-us)
    #[arg(short, long, default_value = "en-us")]
    pub language: String,

    /// Directory containing hyph-<language>.tex pattern files
    #[arg(long, default_value = "languages")]
    pub language_dir: PathBuf,

    /// Directory where parsed patterns are cached between runs
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,

    /// Words shorter than this many characters are never hyphenated
    #[arg(long, default_value_t = 0)]
    pub min_word_length: usize,

    /// Read the input from a file instead of an argument or stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Hyphenate plain text.
    Text {
        /// Text to hyphenate (reads stdin when omitted)
        text: Option<String>,

        /// Hyphen marker: soft, dash, zwsp, entity:<name>, or literal text
        #[arg(long, default_value = "soft")]
        hyphen: String,

        #[command(flatten)]
        common: CommonOpts,
    },

    /// Hyphenate the readable text of an HTML document.
    Html {
        /// HTML to hyphenate (reads stdin when omitted)
        html: Option<String>,

        /// Hyphen marker: soft, dash, zwsp, entity:<name>, or literal text
        #[arg(long, default_value = "soft")]
        hyphen: String,

        /// CSS selector whose subtree is left unhyphenated (repeatable)
        #[arg(long)]
        exclude: Vec<String>,

        /// CSS selector whose subtree is hyphenated even inside an
        /// excluded one (repeatable)
        #[arg(long)]
        include: Vec<String>,

        /// Write the result to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        common: CommonOpts,
    },

    /// Report word, syllable and polysyllable counts.
    Stats {
        /// Text to analyze (reads stdin when omitted)
        text: Option<String>,

        #[command(flatten)]
        common: CommonOpts,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Text {
            text,
            hyphen,
            common,
        } => text_command(text, &hyphen, &common),
        Commands::Html {
            html,
            hyphen,
            exclude,
            include,
            output,
            common,
        } => html_command(html, &hyphen, &exclude, &include, output.as_deref(), &common),
        Commands::Stats { text, common } => stats_command(text, &common),
    }
}

/// Parse a hyphen marker argument.
///
/// Accepts the named markers `soft`, `dash` and `zwsp`, an entity in the
/// form `entity:<name>`, and treats anything else as literal marker text.
pub fn parse_hyphen(value: &str) -> Hyphen {
    match value {
        "soft" => Hyphen::Soft,
        "dash" => Hyphen::Dash,
        "zwsp" | "zero-width-space" => Hyphen::ZeroWidthSpace,
        _ => match value.strip_prefix("entity:") {
            Some(name) => Hyphen::Entity(name.to_string()),
            None => Hyphen::Text(value.to_string()),
        },
    }
}

/// Resolve the input text from the positional argument, `--input` or stdin.
fn read_input(positional: Option<String>, input: Option<&Path>) -> Result<String> {
    match (positional, input) {
        (Some(_), Some(_)) => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "input provided both as argument and via --input",
        )
        .into()),
        (Some(text), None) => Ok(text),
        (None, Some(path)) => Ok(fs::read_to_string(path)?),
        (None, None) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn build_hyphenator(common: &CommonOpts, hyphen: Hyphen) -> Result<Hyphenator> {
    let mut hyphenator = Hyphenator::new(&common.language, &common.language_dir)?
        .with_hyphen(hyphen)
        .with_min_word_length(common.min_word_length);
    if let Some(cache_dir) = &common.cache_dir {
        hyphenator = hyphenator.with_cache_dir(cache_dir);
    }
    Ok(hyphenator)
}

/// Execute the text command.
fn text_command(text: Option<String>, hyphen: &str, common: &CommonOpts) -> Result<()> {
    let input = read_input(text, common.input.as_deref())?;
    let mut hyphenator = build_hyphenator(common, parse_hyphen(hyphen))?;
    println!("{}", hyphenator.hyphenate_text(&input)?);
    Ok(())
}

/// Execute the html command.
fn html_command(
    html: Option<String>,
    hyphen: &str,
    exclude: &[String],
    include: &[String],
    output: Option<&Path>,
    common: &CommonOpts,
) -> Result<()> {
    let input = read_input(html, common.input.as_deref())?;
    let mut hyphenator = build_hyphenator(common, parse_hyphen(hyphen))?;

    for selector in exclude {
        hyphenator.filter_mut().exclude_selector(selector);
    }
    for selector in include {
        hyphenator.filter_mut().include_selector(selector);
    }

    let document = hyphenator.hyphenate_html(&input)?;
    match output {
        Some(path) => {
            fs::write(path, document)?;
            eprintln!("{} {}", style("Saved to:").green().bold(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(document.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

/// Execute the stats command.
fn stats_command(text: Option<String>, common: &CommonOpts) -> Result<()> {
    let input = read_input(text, common.input.as_deref())?;
    let mut hyphenator = build_hyphenator(common, Hyphen::default())?;

    let words = hyphenator.count_words_text(&input);
    let syllables = hyphenator.count_syllables_text(&input)?;
    let polysyllables = hyphenator.count_polysyllables_text(&input)?;
    let histogram = hyphenator.histogram_text(&input)?;

    println!("{} {}", style("Language:").bold(), hyphenator.language());
    println!("  Words: {}", style(words).green());
    println!("  Syllables: {}", style(syllables).green());
    println!("  Polysyllables: {}", style(polysyllables).green());
    println!("  Histogram:");
    for (count, words) in histogram {
        println!("    {count} syllable(s): {words} word(s)");
    }
    Ok(())
}
