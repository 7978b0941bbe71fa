#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(url) = std::str::from_utf8(data) {
        if let Some(name) = devlog_git::repo_name_from_url(url) {
            assert!(!name.is_empty());
            assert!(!name.contains('/'));
        }
    }
});
