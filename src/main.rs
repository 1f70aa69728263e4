// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use fuzzdex::{snapshot, EngineConfig, FuzzdexError, SearchEngine, SearchQuery, SearchResult};

mod cli;
use cli::{display, Cli, Commands, Sources};

fn main() {
    // stdout is reserved for results
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> fuzzdex::Result<()> {
    match command {
        Commands::Search {
            query,
            sources,
            types,
            tags,
            limit,
            offset,
            json,
        } => {
            let mut engine = open_engine(&sources)?;

            let mut search = SearchQuery::new(query.as_str()).with_offset(offset);
            if !types.is_empty() {
                search = search.with_types(types);
            }
            if !tags.is_empty() {
                search = search.with_tags(tags);
            }
            if let Some(limit) = limit {
                search = search.with_limit(limit);
            }

            let page = engine.search_page(&search);
            if let Some(path) = &sources.history {
                snapshot::save(path, &engine.history())?;
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&page)?);
            } else {
                display::print_page(&query, &page);
            }
        }
        Commands::Suggest {
            text,
            sources,
            limit,
            json,
        } => {
            let engine = open_engine(&sources)?;
            let suggestions = engine.suggestions(&text, limit);
            if json {
                println!("{}", serde_json::to_string_pretty(&suggestions)?);
            } else {
                display::print_suggestions(&text, &suggestions);
            }
        }
        Commands::Stats { sources, json } => {
            let engine = open_engine(&sources)?;
            let stats = engine.stats();
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                display::print_stats(&stats);
            }
        }
    }
    Ok(())
}

/// Build an engine from config, catalog and saved history.
fn open_engine(sources: &Sources) -> fuzzdex::Result<SearchEngine> {
    let config = EngineConfig::load(sources.config.as_deref())?;
    let mut engine = SearchEngine::with_config(config);

    if let Some(path) = &sources.catalog {
        let catalog = read_catalog(path)?;
        let total = catalog.len();
        let inserted = engine.index_results(catalog);
        tracing::info!(
            catalog = %path.display(),
            total,
            inserted,
            "indexed catalog"
        );
        if inserted < total {
            tracing::warn!(duplicates = total - inserted, "catalog contains duplicate ids");
        }
    }

    if let Some(path) = &sources.history {
        engine.restore_history(snapshot::load(path));
    }

    Ok(engine)
}

fn read_catalog(path: &Path) -> fuzzdex::Result<Vec<SearchResult>> {
    let contents = fs::read_to_string(path).map_err(|e| {
        FuzzdexError::Config(format!("Failed to read catalog {}: {e}", path.display()))
    })?;
    Ok(serde_json::from_str(&contents)?)
}
