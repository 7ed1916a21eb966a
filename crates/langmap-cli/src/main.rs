//! langmap: command-line front end for langmap-core
//!
//! Looks countries up by name, prints their primary language and map
//! marker, and forwards language and translation questions to the
//! text-generation service.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ langmap stats
//!
//! - Find a country (case-insensitive substring, first match wins)
//!   $ langmap find pakistan
//!
//! - Marker for a map renderer
//!   $ langmap marker pakistan --json
//!
//! - Use a custom table and keep a snapshot next to it
//!   $ langmap --input my-countries.json.gz --cache my-countries.dir.bin stats
//!
//! Data source
//! -----------
//!
//! Without `--input` the table compiled into `langmap-core` is used.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use langmap_core::{CountryDirectory, CountryRecord, CountrySearch};
use tracing_subscriber::EnvFilter;

const NOT_FOUND: &str = "Location not found. Try a different name.";

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let dir = load_directory(&args)?;

    match args.command {
        Commands::Stats => {
            let stats = dir.stats();
            println!("Directory statistics:");
            println!("  Countries: {}", stats.countries);
            println!("  Unknown language: {}", stats.unknown_language);
            println!("  Missing coordinates: {}", stats.missing_coordinates);
        }

        Commands::Countries => {
            for c in dir.records() {
                println!("{} ({}) - {}", c.name(), c.iso2(), c.primary_language());
            }
        }

        Commands::Find { query } => match lookup(&dir, &query) {
            Some(c) => print_record(c),
            None => println!("{NOT_FOUND}"),
        },

        Commands::Marker { query, json } => match lookup(&dir, &query) {
            Some(c) => {
                let marker = dir.marker_for(c);
                if json {
                    println!("{}", serde_json::to_string_pretty(&marker)?);
                } else {
                    println!("{marker}");
                }
            }
            None => println!("{NOT_FOUND}"),
        },

        #[cfg(feature = "remote")]
        Commands::Explore { query } => match lookup(&dir, &query) {
            Some(c) => {
                print_record(c);
                let answer = remote::assistant()?
                    .describe_languages(c)
                    .context("language lookup failed")?;
                println!();
                println!("{answer}");
                println!();
                println!("Marker: {}", dir.marker_for(c));
                println!(
                    "Suggested translation target: {}",
                    langmap_core::assistant::default_target_language(c)
                );
            }
            None => println!("{NOT_FOUND}"),
        },

        #[cfg(feature = "remote")]
        Commands::Translate { to, text } => {
            let text = text.join(" ");
            let answer = remote::assistant()?
                .translate(&to, &text)
                .context("translation failed")?;
            println!("{answer}");
        }

        #[cfg(feature = "remote")]
        Commands::Ask { question } => {
            let question = question.join(" ");
            let answer = remote::assistant()?
                .ask(&question)
                .context("question failed")?;
            println!("{answer}");
        }
    }

    Ok(())
}

/// `RUST_LOG` when set, otherwise a level derived from `-v` flags.
fn init_logging(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_directory(args: &CliArgs) -> anyhow::Result<CountryDirectory> {
    let Some(input) = args.input.as_deref() else {
        return Ok(CountryDirectory::build());
    };

    let dir = match args.cache.as_deref() {
        Some(cache) => CountryDirectory::load_cached(input, Some(cache)),
        None => CountryDirectory::load_from_path(input),
    }
    .with_context(|| format!("failed to load country table from {}", input.display()))?;

    Ok(dir)
}

/// Blank queries never reach the directory; an empty substring would
/// match whichever country happens to come first.
fn lookup<'a>(dir: &'a CountryDirectory, query: &str) -> Option<&'a CountryRecord> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    dir.find_by_name(query)
}

fn print_record(c: &CountryRecord) {
    println!("Found: {}", c.name());
    println!("Official name: {}", c.official_name());
    if !c.iso2().is_empty() {
        println!("Codes: {} / {}", c.iso2(), c.iso3());
    }
    let (lat, lng) = c.coordinates();
    println!("Coordinates: {lat:.4}, {lng:.4}");
    println!("Primary language: {}", c.primary_language());
}

#[cfg(feature = "remote")]
mod remote {
    use anyhow::Context;
    use langmap_core::{Assistant, ChatCompletionsClient};

    pub fn assistant() -> anyhow::Result<Assistant<ChatCompletionsClient>> {
        let client = ChatCompletionsClient::from_env()
            .context("text-generation service is not configured")?;
        tracing::info!(model = %client.config().model, "using text-generation service");
        Ok(Assistant::new(client))
    }
}
