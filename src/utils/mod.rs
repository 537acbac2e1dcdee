mod date;

pub use date::{format_date, parse_date, DateError};

use std::path::PathBuf;

/// The name of the per-user data folder
pub const APP_FOLDER: &str = ".shopping-list";

/// Current daemon version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get the path to `~/.shopping-list`, if a home directory is known
#[must_use]
pub fn get_app_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(APP_FOLDER))
}

/// Current time as nanoseconds since the Unix epoch
#[must_use]
pub fn now_nanos() -> i64 {
    chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
}

/// Format a path for display, replacing home directory with ~/
#[must_use]
pub fn format_display_path(path: &str) -> String {
    replace_homedir::replace_homedir(path, "~")
}

#[cfg(test)]
#[path = "utils_tests.rs"]
mod tests;
