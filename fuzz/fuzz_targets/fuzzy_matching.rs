// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the substring/subsequence matcher.
//!
//! Arbitrary Unicode on both sides. Case mapping can change a string's length
//! ("İ" lower-cases to two chars), which is exactly where index arithmetic
//! goes wrong, so the matcher is checked against a dumb reference.

#![no_main]

use arbitrary::Arbitrary;
use fuzzdex::{classify, matches, MatchKind};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    token: String,
    key: String,
}

fn reference(token: &str, key: &str) -> bool {
    let token = token.to_lowercase();
    let key = key.to_lowercase();
    if token.is_empty() {
        return key.trim().is_empty();
    }
    let mut rest = key.chars();
    key.contains(&token) || token.chars().all(|t| rest.any(|k| k == t))
}

fuzz_target!(|input: Input| {
    // Bound the work per run
    if input.token.len() > 64 || input.key.len() > 256 {
        return;
    }

    let kind = classify(&input.token, &input.key);

    // INVARIANT 1: matches() is classify().is_some()
    assert_eq!(matches(&input.token, &input.key), kind.is_some());

    // INVARIANT 2: agrees with the reference
    assert_eq!(kind.is_some(), reference(&input.token, &input.key));

    // INVARIANT 3: a substring verdict really is a substring
    if kind == Some(MatchKind::Substring) && !input.token.is_empty() {
        assert!(input.key.to_lowercase().contains(&input.token.to_lowercase()));
    }
});
