// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query tokenization and key normalization.
//!
//! Deliberately dumb: lower-case, split on whitespace, drop empties. No
//! stemming, no punctuation stripping. "warrior's" stays "warrior's" and the
//! fuzzy matcher deals with it.
//!
//! Index keys go through the same normalization (minus the splitting), so a
//! token and a key are always compared in the same form.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Split text into lower-cased, whitespace-delimited tokens.
///
/// Never yields an empty token, which matters: an empty token would
/// subsequence-match every key in the index.
///
/// ```
/// assert_eq!(fuzzdex::tokenize("  Fury   WARRIOR "), vec!["fury", "warrior"]);
/// assert!(fuzzdex::tokenize("   ").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    Tokenizer::default().tokenize(text)
}

/// Tokenizer with optional diacritic folding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tokenizer {
    fold_diacritics: bool,
}

impl Tokenizer {
    /// Folding only takes effect with the `unicode-normalization` feature.
    pub fn new(fold_diacritics: bool) -> Self {
        Self { fold_diacritics }
    }

    pub fn folds_diacritics(&self) -> bool {
        self.fold_diacritics
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.normalize(text)
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    /// Normalize a title into its index key. Whitespace is left alone.
    pub fn normalize(&self, text: &str) -> String {
        if self.fold_diacritics {
            fold(text).to_lowercase()
        } else {
            text.to_lowercase()
        }
    }
}

/// NFD-decompose and drop combining marks: "café" → "cafe".
#[cfg(feature = "unicode-normalization")]
fn fold(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

#[cfg(not(feature = "unicode-normalization"))]
fn fold(text: &str) -> String {
    text.to_string()
}

/// Unicode category Mn ranges that show up in practice.
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
