// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: is this token "close enough" to that key?
//!
//! Substring first, in-order subsequence as the fallback. No edit distance and
//! no scoring: the answer is a boolean, and ranking happens later on the
//! caller's relevance scores.

mod subsequence;

pub use subsequence::*;
pub(crate) use subsequence::classify_normalized;
