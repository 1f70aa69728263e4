// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! History snapshot decoding under adversarial input.
//!
//! A snapshot on disk is untrusted. Truncated headers, payload lengths that
//! point past the end, CRCs that lie: all of it must come back as `Err`,
//! never a panic.

#![no_main]

use fuzzdex::snapshot;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // INVARIANT 1: decode never panics
    if let Ok(entries) = snapshot::decode(data) {
        // INVARIANT 2: anything that decodes re-encodes to the same entries
        let bytes = snapshot::encode(&entries).expect("re-encode");
        assert_eq!(snapshot::decode(&bytes).expect("re-decode"), entries);
    }
});
