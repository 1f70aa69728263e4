// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the fuzzdex command-line interface.
//!
//! Three subcommands over a JSON catalog: `search` to query it, `suggest` to
//! complete from saved history, and `stats` to summarize both. History lives
//! in a snapshot file so suggestions survive between invocations.

pub mod display;

use clap::{Args, Parser, Subcommand};
use fuzzdex::ResultType;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fuzzdex",
    about = "Fuzzy search and faceted ranking over a JSON content catalog",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct Sources {
    /// JSON array of search results to index
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// History snapshot file, read on start and rewritten after a search
    #[arg(long)]
    pub history: Option<PathBuf>,

    /// TOML engine configuration
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the catalog and display ranked results
    Search {
        /// Search query
        query: String,

        #[command(flatten)]
        sources: Sources,

        /// Only keep results of this type (repeatable)
        #[arg(long = "type", value_name = "TYPE")]
        types: Vec<ResultType>,

        /// Only keep results carrying this tag (repeatable, any match)
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Maximum number of results to return
        #[arg(short, long)]
        limit: Option<usize>,

        /// Results to skip before the page starts
        #[arg(long, default_value = "0")]
        offset: usize,

        /// Print the page as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Suggest previous queries containing the given text
    Suggest {
        /// Text to complete
        text: String,

        #[command(flatten)]
        sources: Sources,

        /// Maximum suggestions (defaults to the configured limit)
        #[arg(short, long)]
        limit: Option<usize>,

        #[arg(long)]
        json: bool,
    },

    /// Show index and history statistics
    Stats {
        #[command(flatten)]
        sources: Sources,

        #[arg(long)]
        json: bool,
    },
}
