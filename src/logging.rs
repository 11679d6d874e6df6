//! Tracing setup.
//!
//! The terminal belongs to the TUI, so logs only ever go to a file. Logging
//! stays off unless `CONTACT_FORM_LOG` names a file path.

use std::fs::File;
use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log file path.
pub const LOG_ENV: &str = "CONTACT_FORM_LOG";

/// Returns the log file path configured through [`LOG_ENV`], if any.
pub fn log_path_from_env() -> Option<PathBuf> {
    std::env::var_os(LOG_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Installs a global subscriber writing to the file named by [`LOG_ENV`].
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Does nothing when
/// the variable is unset or the file cannot be created.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn init_tracing() {
    let Some(path) = log_path_from_env() else {
        return;
    };
    let Some(file) = open_log_file(&path) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

/// Opens `path` for appending, creating it if needed.
fn open_log_file(path: &Path) -> Option<File> {
    File::options().create(true).append(true).open(path).ok()
}
