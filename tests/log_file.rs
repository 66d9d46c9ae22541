// tests/log_file.rs
//
// Own test binary: the global subscriber can only be installed once.

use std::fs;

use reward_watch::{loge, log};

#[test]
fn log_file_is_created_then_appended_to() {
    let dir = std::env::temp_dir().join(format!("reward_watch_log_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    let path = dir.join("store").join("debug.log");

    log::init_at(&path);
    assert!(path.parent().unwrap().is_dir());
    assert!(path.is_file());

    loge!("Poll: fetch failed with code {}", 503);
    // second init is a no-op, the same file keeps growing
    log::init_at(&dir.join("other.log"));
    loge!("Poll: fetch failed with code {}", 504);

    let text = fs::read_to_string(&path).unwrap();
    let first = text.find("Poll: fetch failed with code 503").expect("first line logged");
    let second = text.find("Poll: fetch failed with code 504").expect("second line logged");
    assert!(first < second);
    assert!(!dir.join("other.log").exists());

    let _ = fs::remove_dir_all(&dir);
}
