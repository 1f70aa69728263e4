// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The inverted index: normalized title → results registered under it.
//!
//! Lookup is a linear scan over distinct keys with the fuzzy matcher. That's
//! fine for an application's content catalog (tens to low thousands of keys).
//! A bigger corpus wants a prefix trie or n-gram index here; the matcher
//! contract and everything downstream stay the same.

mod inverted;

pub use inverted::*;
pub(crate) use inverted::Entry;
