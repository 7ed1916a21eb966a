#[cfg(feature = "remote")]
use clap::builder::PossibleValuesParser;
use clap::{ArgAction, Parser, Subcommand};
#[cfg(feature = "remote")]
use langmap_core::assistant::TARGET_LANGUAGES;
use std::path::PathBuf;

/// CLI arguments for langmap
#[derive(Debug, Parser)]
#[command(
    name = "langmap",
    version,
    about = "Find countries, their primary language and map marker; ask a language expert"
)]
pub struct CliArgs {
    /// Path to a country reference table (.json or .json.gz). Defaults to the bundled table.
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<PathBuf>,

    /// Binary snapshot used to skip parsing the --input table on later runs
    #[arg(short = 'c', long = "cache", global = true, requires = "input")]
    pub cache: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG wins when set.
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the directory contents
    Stats,

    /// List all countries with their primary language
    Countries,

    /// Find a country by (part of) its name
    Find {
        /// Name or part of a name, case-insensitive (e.g. pakistan)
        query: String,
    },

    /// Print the map marker for a country
    Marker {
        /// Name or part of a name, case-insensitive
        query: String,

        /// Emit the marker as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find a country and ask the language expert about it
    #[cfg(feature = "remote")]
    Explore {
        /// Name or part of a name, case-insensitive
        query: String,
    },

    /// Translate text while preserving cultural context
    #[cfg(feature = "remote")]
    Translate {
        /// Target language
        #[arg(
            short = 't',
            long = "to",
            default_value = "English",
            ignore_case = true,
            value_parser = PossibleValuesParser::new(TARGET_LANGUAGES)
        )]
        to: String,

        /// Text to translate
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Ask a free-form question; questions about a "language" go to the language expert
    #[cfg(feature = "remote")]
    Ask {
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
}
