// LogLens - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation. All errors preserve the causal
// chain for diagnostic logging.
//
// Three caller-visible kinds run through this module:
//   - caller errors (bad input) -- SearchError validation variants,
//     UploadError::EmptyFile;
//   - precondition-not-met (no active file) -- SearchError::NoActiveFile;
//   - internal failures (I/O on the log file or pointer record) -- the
//     *::Io / StateError variants, logged for operators and surfaced to
//     clients as opaque failures.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all LogLens operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum LogLensError {
    /// Upload validation or storage failed.
    Upload(UploadError),

    /// Search validation or execution failed.
    Search(SearchError),

    /// Active-file pointer persistence or access failed.
    State(StateError),

    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for LogLensError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upload(e) => write!(f, "Upload error: {e}"),
            Self::Search(e) => write!(f, "Search error: {e}"),
            Self::State(e) => write!(f, "State error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for LogLensError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Upload(e) => Some(e),
            Self::Search(e) => Some(e),
            Self::State(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Upload errors
// ---------------------------------------------------------------------------

/// Errors related to storing an uploaded log file.
#[derive(Debug)]
pub enum UploadError {
    /// The uploaded file contained no bytes.
    EmptyFile,

    /// Writing the uploaded bytes to the log directory failed.
    Write { path: PathBuf, source: io::Error },

    /// The upload was stored but the active-file pointer could not be updated.
    Pointer { source: StateError },
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyFile => write!(f, "File is empty"),
            Self::Write { path, source } => {
                write!(f, "Failed to write upload to '{}': {source}", path.display())
            }
            Self::Pointer { source } => {
                write!(f, "Failed to record uploaded file: {source}")
            }
        }
    }
}

impl std::error::Error for UploadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Write { source, .. } => Some(source),
            Self::Pointer { source } => Some(source),
            Self::EmptyFile => None,
        }
    }
}

impl From<UploadError> for LogLensError {
    fn from(e: UploadError) -> Self {
        Self::Upload(e)
    }
}

// ---------------------------------------------------------------------------
// Search errors
// ---------------------------------------------------------------------------

/// Errors related to search validation and execution.
///
/// The first three variants are caller errors, `NoActiveFile` is a
/// precondition failure, and `Io` is an internal read failure.
#[derive(Debug)]
pub enum SearchError {
    /// The query string was empty or blank.
    EmptyQuery,

    /// Page or page size was below 1.
    InvalidPagination { page: i64, size: i64 },

    /// User-provided regex is invalid.
    InvalidRegex {
        pattern: String,
        source: regex::Error,
    },

    /// No log file has been uploaded yet.
    NoActiveFile,

    /// The active file could not be read.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyQuery => write!(f, "Query parameter is required"),
            Self::InvalidPagination { page, size } => {
                write!(f, "Page and size must be greater than 0 (page={page}, size={size})")
            }
            Self::InvalidRegex { pattern, source } => {
                write!(f, "Invalid search regex '{pattern}': {source}")
            }
            Self::NoActiveFile => write!(f, "No file has been uploaded yet"),
            Self::Io { path, source } => {
                write!(f, "Failed to read log file '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidRegex { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<SearchError> for LogLensError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

// ---------------------------------------------------------------------------
// State errors
// ---------------------------------------------------------------------------

/// Errors related to the active-file pointer.
#[derive(Debug)]
pub enum StateError {
    /// The pointer record could not be written.
    PersistPointer { path: PathBuf, source: io::Error },

    /// The file the pointer names could not be opened.
    OpenFile { path: PathBuf, source: io::Error },
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PersistPointer { path, source } => {
                write!(
                    f,
                    "Failed to persist pointer file '{}': {source}",
                    path.display()
                )
            }
            Self::OpenFile { path, source } => {
                write!(f, "Failed to open log file '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for StateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::PersistPointer { source, .. } => Some(source),
            Self::OpenFile { source, .. } => Some(source),
        }
    }
}

impl From<StateError> for LogLensError {
    fn from(e: StateError) -> Self {
        Self::State(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for LogLensError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for LogLens results.
pub type Result<T> = std::result::Result<T, LogLensError>;
