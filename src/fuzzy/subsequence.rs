// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Type-ahead matching with a substring fast path.
//!
//! The subsequence rule tolerates extra characters in the key but never
//! reorders the query: "wrr" finds "warrior", "rw" doesn't. Substring matches
//! are a special case of subsequence matches, so the first check is purely a
//! shortcut and reported separately via [`MatchKind`].
//!
//! Both checks work on Unicode scalar values, not bytes.

use std::borrow::Cow;

/// Which rule accepted a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchKind {
    /// Key contains the token contiguously.
    Substring,
    /// Key contains the token's characters in order, with gaps.
    Subsequence,
}

/// Does `token` approximately match `key`? Case-insensitive.
///
/// ```
/// use fuzzdex::matches;
///
/// assert!(matches("wr", "warrior"));
/// assert!(!matches("rw", "warrior"));
/// assert!(matches("warrior", "Warrior Guide"));
/// ```
pub fn matches(token: &str, key: &str) -> bool {
    classify(token, key).is_some()
}

/// Like [`matches`], but says which rule fired.
///
/// An empty token only matches an effectively empty key. Without this guard
/// it would subsequence-match everything.
pub fn classify(token: &str, key: &str) -> Option<MatchKind> {
    let token = lowercase(token);
    let key = lowercase(key);
    classify_normalized(&token, &key)
}

/// Matcher core for inputs that are already lower-cased.
pub(crate) fn classify_normalized(token: &str, key: &str) -> Option<MatchKind> {
    if token.is_empty() {
        return key.trim().is_empty().then_some(MatchKind::Substring);
    }
    if key.contains(token) {
        return Some(MatchKind::Substring);
    }
    is_subsequence(token, key).then_some(MatchKind::Subsequence)
}

/// Greedy left-to-right scan: consume the next token char whenever the key
/// char equals it. Succeeds iff the whole token is consumed.
fn is_subsequence(token: &str, key: &str) -> bool {
    let mut wanted = token.chars().peekable();
    for c in key.chars() {
        match wanted.peek() {
            Some(&next) if next == c => {
                wanted.next();
            }
            Some(_) => {}
            None => break,
        }
    }
    wanted.peek().is_none()
}

/// Lower-case without allocating when there's nothing to change.
fn lowercase(s: &str) -> Cow<'_, str> {
    // Titlecase chars like 'ǅ' aren't `is_uppercase` but still change
    if s.chars().any(|c| c.to_lowercase().ne(std::iter::once(c))) {
        Cow::Owned(s.to_lowercase())
    } else {
        Cow::Borrowed(s)
    }
}
