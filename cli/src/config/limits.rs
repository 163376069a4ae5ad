/// Shortest allowed timeout for downloading a theme
pub const MIN_FETCH_TIMEOUT_SECS: u64 = 1;

/// Longest allowed timeout for downloading a theme (5 minutes)
pub const MAX_FETCH_TIMEOUT_SECS: u64 = 300;

pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = converter::loader::DEFAULT_TIMEOUT_SECS;

/// Log levels accepted in `[logging] level`
pub const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

/// Default log level; `-v` raises it one step per flag
pub const DEFAULT_LOG_LEVEL: &str = "warn";
