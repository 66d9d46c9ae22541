// src/log.rs
//
// User-facing output goes to stdout through `report`; everything else is
// traced into the debug log file.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use tracing_subscriber::{EnvFilter, fmt};

use crate::config::consts::{DEFAULT_LOG_FILTER, LOG_FILE};

pub use tracing;

static INIT: OnceLock<()> = OnceLock::new();

/// Install the global subscriber writing to `.store/debug.log`.
pub fn init() {
    init_at(Path::new(LOG_FILE));
}

/// Install the global subscriber writing to `path`. Only the first call has any
/// effect. Falls back to stderr when the file can't be opened.
pub fn init_at(path: &Path) {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        let builder = fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(false);

        match open_append(path) {
            Ok(file) => {
                let _ = builder.with_writer(Mutex::new(file)).try_init();
            }
            Err(e) => {
                let _ = builder.with_writer(std::io::stderr).try_init();
                tracing::warn!("Log: could not open {} ({e}), using stderr", path.display());
            }
        }
    });
}

fn open_append(path: &Path) -> std::io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::tracing::error!($($arg)*)
    };
}
