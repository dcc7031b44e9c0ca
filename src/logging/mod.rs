//! File-backed diagnostics.
//!
//! The alternate screen owns stdout for the lifetime of the program, so
//! tracing output goes to `ankiterm.log` in the working directory instead.
//! The filter comes from `ANKITERM_LOG` (default `info`); warnings about
//! skipped card records land here.

use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub fn init() {
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open("ankiterm.log")
    else {
        // No log file, no diagnostics; the app itself is unaffected.
        return;
    };

    let filter = EnvFilter::try_from_env("ANKITERM_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}
