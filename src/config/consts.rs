// src/config/consts.rs
use std::time::Duration;

// Polling
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(60);

// Project page
pub const DESCRIPTION_SUFFIX: &str = "/description";
pub const PROJECT_VAR: &str = "window.current_project";

// Net config
pub const USER_AGENT: &str = concat!("reward_watch/", env!("CARGO_PKG_VERSION"));
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
pub const READ_TIMEOUT: Duration = Duration::from_secs(30);

// Local log
pub const LOG_FILE: &str = ".store/debug.log";
pub const DEFAULT_LOG_FILTER: &str = "info";
