// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors at the edges of the crate.
//!
//! The engine itself is total: searching, indexing and history tracking never
//! fail. Errors only come from the things that touch the outside world, which
//! are config files, history snapshots and catalog files read by the CLI.

use thiserror::Error;

/// Result type alias for fuzzdex operations
pub type Result<T> = std::result::Result<T, FuzzdexError>;

#[derive(Error, Debug)]
pub enum FuzzdexError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Corrupt history snapshot: {0}")]
    CorruptSnapshot(String),
}

impl FuzzdexError {
    pub(crate) fn corrupt(reason: impl Into<String>) -> Self {
        FuzzdexError::CorruptSnapshot(reason.into())
    }
}
