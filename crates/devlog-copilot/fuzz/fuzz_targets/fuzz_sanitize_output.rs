#![no_main]

use devlog_copilot::sanitize::{USAGE_MARKERS, sanitize_output};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let raw = String::from_utf8_lossy(data);
    let clean = sanitize_output(&raw);
    for marker in USAGE_MARKERS {
        assert!(!clean.contains(marker));
    }
    assert_eq!(sanitize_output(&clean), clean);
});
