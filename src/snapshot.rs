// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! History snapshots: persisting the query history between runs.
//!
//! The engine never touches storage. This module is the collaborator that
//! does, and it fails closed: a missing, truncated or tampered snapshot loads
//! as an empty history instead of an error.
//!
//! # Layout
//!
//! ```text
//! ┌────────┬─────────┬──────────────┬────────────────────┬────────┐
//! │ "FZHS" │ version │ payload len  │ payload (JSON)     │ CRC32  │
//! │ 4 B    │ u8      │ u32 LE       │ ["newest", ...]    │ u32 LE │
//! └────────┴─────────┴──────────────┴────────────────────┴────────┘
//! ```
//!
//! The CRC covers everything before it.

use crate::error::{FuzzdexError, Result};
use crc32fast::Hasher as Crc32Hasher;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Magic bytes: "FZHS" in ASCII
pub const MAGIC: [u8; 4] = *b"FZHS";

/// Current format version
pub const VERSION: u8 = 1;

const HEADER_SIZE: usize = 4 + 1 + 4;
const FOOTER_SIZE: usize = 4;

/// Encode a most-recent-first history list.
pub fn encode(entries: &[String]) -> Result<Vec<u8>> {
    let payload = serde_json::to_vec(entries)?;
    let payload_len = u32::try_from(payload.len())
        .map_err(|_| FuzzdexError::corrupt("history payload exceeds 4 GiB"))?;

    let mut bytes = Vec::with_capacity(HEADER_SIZE + payload.len() + FOOTER_SIZE);
    bytes.extend_from_slice(&MAGIC);
    bytes.push(VERSION);
    bytes.extend_from_slice(&payload_len.to_le_bytes());
    bytes.extend_from_slice(&payload);

    let crc = compute_crc32(&bytes);
    bytes.extend_from_slice(&crc.to_le_bytes());
    Ok(bytes)
}

/// Strict decode. Any structural problem is a `CorruptSnapshot` error.
pub fn decode(bytes: &[u8]) -> Result<Vec<String>> {
    if bytes.len() < HEADER_SIZE + FOOTER_SIZE {
        return Err(FuzzdexError::corrupt(format!(
            "{} bytes is too short for a snapshot",
            bytes.len()
        )));
    }
    if bytes[..4] != MAGIC {
        return Err(FuzzdexError::corrupt("bad magic"));
    }
    if bytes[4] != VERSION {
        return Err(FuzzdexError::corrupt(format!(
            "unsupported version {} (expected {})",
            bytes[4], VERSION
        )));
    }

    let body_end = bytes.len() - FOOTER_SIZE;
    let stored_crc = read_u32_le(&bytes[body_end..]);
    let actual_crc = compute_crc32(&bytes[..body_end]);
    if stored_crc != actual_crc {
        return Err(FuzzdexError::corrupt(format!(
            "checksum mismatch: stored {stored_crc:08x}, computed {actual_crc:08x}"
        )));
    }

    let payload_len = read_u32_le(&bytes[5..HEADER_SIZE]) as usize;
    if HEADER_SIZE + payload_len != body_end {
        return Err(FuzzdexError::corrupt(format!(
            "payload length {} doesn't match body size {}",
            payload_len,
            body_end - HEADER_SIZE
        )));
    }

    Ok(serde_json::from_slice(&bytes[HEADER_SIZE..body_end])?)
}

/// Write a snapshot, replacing any existing file.
///
/// Writes to a sibling temp file and renames it into place, so a crash
/// mid-write leaves the previous snapshot intact.
pub fn save(path: impl AsRef<Path>, entries: &[String]) -> Result<()> {
    let path = path.as_ref();
    let bytes = encode(entries)?;
    let tmp = temp_path(path);
    if let Err(e) = fs::write(&tmp, bytes).and_then(|()| fs::rename(&tmp, path)) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    tracing::debug!(path = %path.display(), entries = entries.len(), "saved history snapshot");
    Ok(())
}

/// Read and strictly decode a snapshot.
pub fn try_load(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let bytes = fs::read(path)?;
    decode(&bytes)
}

/// Load a snapshot, failing closed.
///
/// A missing file is a fresh start (no warning); anything unreadable or
/// corrupt is logged and treated as "no history".
pub fn load(path: impl AsRef<Path>) -> Vec<String> {
    let path = path.as_ref();
    match try_load(path) {
        Ok(entries) => entries,
        Err(FuzzdexError::Io(e)) if e.kind() == ErrorKind::NotFound => Vec::new(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "discarding unreadable history snapshot");
            Vec::new()
        }
    }
}

/// `history.fzhs` → `history.fzhs.tmp`. Appending keeps the temp file
/// distinct from the target whatever its extension.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

fn compute_crc32(data: &[u8]) -> u32 {
    let mut hasher = Crc32Hasher::new();
    hasher.update(data);
    hasher.finalize()
}

fn read_u32_le(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}
