// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine configuration.
//!
//! Everything has a default, so `EngineConfig::default()` is a working engine.
//! A TOML file can override any subset of fields, and `FUZZDEX_*` environment
//! variables win over both.
//!
//! ```toml
//! history_capacity = 50
//! suggestion_limit = 5
//! stats_recent_queries = 5
//! parallel_scan_threshold = 1024
//! fold_diacritics = false
//! ```

use crate::error::{FuzzdexError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Maximum number of distinct queries kept in history.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Suggestions returned when the caller doesn't pass a limit.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Distinct queries kept in history before the oldest is evicted
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,

    /// Default cap for `suggestions()`
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,

    /// How many recent queries `stats()` reports
    #[serde(default = "default_stats_recent_queries")]
    pub stats_recent_queries: usize,

    /// Distinct-key count at which the index scan goes parallel.
    /// Ignored without the `parallel` feature.
    #[serde(default = "default_parallel_scan_threshold")]
    pub parallel_scan_threshold: usize,

    /// Strip combining marks so "café" matches "cafe".
    /// Ignored without the `unicode-normalization` feature.
    #[serde(default)]
    pub fold_diacritics: bool,
}

fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

fn default_suggestion_limit() -> usize {
    DEFAULT_SUGGESTION_LIMIT
}

fn default_stats_recent_queries() -> usize {
    5
}

fn default_parallel_scan_threshold() -> usize {
    1024
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_capacity: default_history_capacity(),
            suggestion_limit: default_suggestion_limit(),
            stats_recent_queries: default_stats_recent_queries(),
            parallel_scan_threshold: default_parallel_scan_threshold(),
            fold_diacritics: false,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref()).map_err(|e| {
            FuzzdexError::Config(format!(
                "Failed to read config file {}: {e}",
                path.as_ref().display()
            ))
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from TOML text. Missing fields take their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load with priority: env vars > TOML file (if given) > defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Merge `FUZZDEX_*` environment variables into this config.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Merge overrides from an arbitrary key lookup.
    ///
    /// Unparseable values are ignored with a warning rather than rejected, so a
    /// typo in the environment can't stop the engine from starting.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        override_usize(&lookup, "FUZZDEX_HISTORY_CAPACITY", &mut self.history_capacity);
        override_usize(&lookup, "FUZZDEX_SUGGESTION_LIMIT", &mut self.suggestion_limit);
        override_usize(&lookup, "FUZZDEX_STATS_RECENT", &mut self.stats_recent_queries);
        override_usize(
            &lookup,
            "FUZZDEX_PARALLEL_THRESHOLD",
            &mut self.parallel_scan_threshold,
        );

        if let Some(raw) = lookup("FUZZDEX_FOLD_DIACRITICS") {
            match raw.to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.fold_diacritics = true,
                "0" | "false" | "no" | "off" => self.fold_diacritics = false,
                other => tracing::warn!(value = other, "ignoring FUZZDEX_FOLD_DIACRITICS"),
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.history_capacity == 0 {
            return Err(FuzzdexError::Config(
                "history_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn override_usize<F>(lookup: &F, key: &str, target: &mut usize)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = lookup(key) {
        match raw.trim().parse() {
            Ok(value) => *target = value,
            Err(_) => tracing::warn!(key, value = raw.as_str(), "ignoring unparseable override"),
        }
    }
}
