//! Store utility functions.

use chrono::Utc;

/// Get the current UTC datetime as a wire-format string.
pub fn current_timestamp() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
