// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

#![no_main]

use devlog::RangeArg;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(range) = RangeArg::parse(data) {
        assert!(!range.from.is_empty());
        assert!(!range.to.is_empty());
        assert!(!range.from.contains(".."));
        assert!(!range.to.contains(".."));
        // Display must parse back to the same range
        assert_eq!(RangeArg::parse(&range.to_string()).ok(), Some(range));
    }
});
