// LogLens - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LogLens";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Line grammar
// =============================================================================

/// Timestamp format used by the supported log grammar, in chrono strftime
/// syntax: two-digit day, English three-letter month, four-digit year,
/// 24-hour time with millisecond precision (e.g. `10-Jan-2024 10:00:05.500`).
///
/// Used both for parsing raw lines and for rendering timestamps back into
/// responses, so search results and summaries echo the log's own notation.
pub const LOG_TIMESTAMP_FORMAT: &str = "%d-%b-%Y %H:%M:%S%.3f";

// =============================================================================
// Analytics defaults
// =============================================================================

/// Default number of ranked messages returned when the caller omits `limit`.
pub const DEFAULT_TOP_MESSAGES_LIMIT: usize = 10;

/// Default search page number (pages are 1-based).
pub const DEFAULT_SEARCH_PAGE: i64 = 1;

/// Default number of matches per search page.
pub const DEFAULT_SEARCH_PAGE_SIZE: i64 = 10;

// =============================================================================
// Upload storage
// =============================================================================

/// Fixed prefix for stored upload file names.
pub const STORED_LOG_PREFIX: &str = "catalina_";

/// Fixed extension for stored upload file names.
pub const STORED_LOG_EXTENSION: &str = "out";

/// Compact timestamp embedded in stored upload file names to avoid
/// collisions between successive uploads (e.g. `catalina_20240110_100005.out`).
pub const STORED_LOG_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Name of the single-line pointer file recording the last uploaded log,
/// stored inside the configured log directory.
pub const POINTER_FILE_NAME: &str = "last_uploaded_file.txt";

/// Default maximum accepted upload size in bytes.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 64 * 1024 * 1024; // 64 MiB

/// Minimum sensible upload cap.
pub const MIN_MAX_UPLOAD_BYTES: usize = 1024; // 1 KiB

/// Hard upper bound on the upload cap (prevents configuration mistakes).
pub const ABSOLUTE_MAX_UPLOAD_BYTES: usize = 1024 * 1024 * 1024; // 1 GiB

// =============================================================================
// Server
// =============================================================================

/// Default listen address for the HTTP server.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

/// Default log storage directory, relative to the working directory.
pub const DEFAULT_LOG_DIRECTORY: &str = "./logs";

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name looked up in the working directory when no
/// `--config` path is given.
pub const CONFIG_FILE_NAME: &str = "config.toml";
