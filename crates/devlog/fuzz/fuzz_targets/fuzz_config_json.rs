// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

#![no_main]

use devlog::Config;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(config) = Config::from_json(data)
        && let Ok(text) = config.to_json_pretty()
    {
        assert_eq!(Config::from_json(&text).ok(), Some(config));
    }
});
