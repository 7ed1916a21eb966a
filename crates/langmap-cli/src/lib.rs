//! langmap-cli
//! ===========
//!
//! Command-line interface for the `langmap-core` country directory.
//!
//! This crate primarily provides a binary (`langmap`). The library target
//! only carries this page.
//!
//! Basic usage:
//!
//! ```text
//! langmap --help
//! langmap stats
//! langmap find pakistan
//! langmap marker "united kingdom" --json
//! langmap explore japan
//! langmap translate --to Urdu "Good morning"
//! langmap ask "Which languages are spoken in Switzerland?"
//! ```
//!
//! The last three commands call the text-generation service and need
//! `GEMINI_API_KEY` in the environment or in a `.env` file.
//!
//! For programmatic access use the `langmap-core` crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
