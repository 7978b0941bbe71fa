#![no_main]

use devlog_git::Commit;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let raw = String::from_utf8_lossy(data);
    let (subject, _body) = Commit::split_message(&raw);
    assert!(!subject.contains('\n'));
});
