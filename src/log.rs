//! File-based logging next to the executable
//!
//! `init` installs a `tracing` subscriber writing to `paneview.log`. The
//! `log!` macro is the short form used by the win32 layer; everything else
//! uses the `tracing` macros directly.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use chrono::Local;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Log file name
pub const LOG_FILE_NAME: &str = "paneview.log";

static INSTALLED: OnceLock<PathBuf> = OnceLock::new();

/// Get the directory where the executable is located
pub fn exe_dir() -> PathBuf {
    std::env::current_exe()
        .unwrap_or_else(|_| PathBuf::from("paneview.exe"))
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Initialize logging to a file next to the executable
pub fn init() {
    init_at(&exe_dir().join(LOG_FILE_NAME));
}

/// Initialize logging to `path`, truncating it.
///
/// Only the first call installs a subscriber. Returns false if the file could
/// not be opened or another subscriber was already installed.
pub fn init_at(path: &Path) -> bool {
    if INSTALLED.get().is_some() {
        return false;
    }

    let file = match OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
    {
        Ok(file) => file,
        Err(_) => return false,
    };

    let filter = std::env::var("RUST_LOG")
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .is_ok();

    if installed {
        let _ = INSTALLED.set(path.to_path_buf());
        tracing::info!(
            "=== paneview log started {} ===",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        );
    }
    installed
}

/// Path of the active log file, if logging was initialized
pub fn log_path() -> Option<&'static Path> {
    INSTALLED.get().map(PathBuf::as_path)
}

/// Log a message
pub fn log(msg: &str) {
    tracing::info!(target: "paneview::win32", "{}", msg);
}

/// Log a formatted message
#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::log::log(&format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_at_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);

        let first = init_at(&path);
        let second = init_at(&path);

        assert!(!second);
        if first {
            assert_eq!(log_path(), Some(path.as_path()));
            log!("hello {}", 42);
            assert!(path.exists());
        }
    }
}
