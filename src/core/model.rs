// LogLens - core/model.rs
//
// Core data model types. Pure data definitions with no I/O.
// These types are the shared vocabulary across all layers.

use crate::util::constants::LOG_TIMESTAMP_FORMAT;
use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

// =============================================================================
// Log Entry (output of parsing)
// =============================================================================

/// A single parsed log line.
///
/// Constructed per line by the parser, consumed by exactly one aggregation,
/// then discarded. Exists only for lines that match the line grammar; blank
/// lines and stack-trace continuations never become entries.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    /// Event timestamp with millisecond precision. The grammar carries no
    /// zone, so this is a naive calendar date-time.
    pub timestamp: NaiveDateTime,

    /// Severity level, case-exact in the source line.
    pub level: Level,

    /// Bracketed thread or request tag.
    pub thread: String,

    /// Dotted component name of the emitting logger.
    pub logger: String,

    /// Remainder of the line, captured verbatim. May be empty.
    pub message: String,
}

// =============================================================================
// Level
// =============================================================================

/// The six severities the line grammar admits.
///
/// Matching is case-exact: a lowercase `info` line does not parse.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Info,
    Warning,
    Severe,
    Error,
    Debug,
    Trace,
}

impl Level {
    /// The exact token as it appears in a log line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Severe => "SEVERE",
            Level::Error => "ERROR",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        }
    }

    /// Case-exact lookup from a raw level token.
    pub fn from_exact(raw: &str) -> Option<Level> {
        match raw {
            "INFO" => Some(Level::Info),
            "WARNING" => Some(Level::Warning),
            "SEVERE" => Some(Level::Severe),
            "ERROR" => Some(Level::Error),
            "DEBUG" => Some(Level::Debug),
            "TRACE" => Some(Level::Trace),
            _ => None,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Summary
// =============================================================================

/// Derived summary of the active file. Recomputed on every request,
/// never persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResult {
    /// Name of the active log file.
    pub file_name: String,

    /// Count of parseable lines per severity. Empty when the file has no
    /// parseable lines at all.
    pub level_counts: BTreeMap<Level, u64>,

    /// First/last event timestamps and their distance. Omitted entirely
    /// when the file has zero parseable lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_range: Option<TimeRange>,
}

/// Span between the earliest and latest parsed timestamps in the file.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRange {
    /// Earliest event, rendered in the log's own timestamp notation.
    #[serde(serialize_with = "serialize_log_timestamp")]
    pub start: NaiveDateTime,

    /// Latest event.
    #[serde(serialize_with = "serialize_log_timestamp")]
    pub end: NaiveDateTime,

    /// `end - start` in whole milliseconds.
    pub duration_millis: i64,
}

// =============================================================================
// Ranked message
// =============================================================================

/// One distinct message and its occurrence count, part of a sequence
/// ordered by descending count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedMessage {
    /// Verbatim message text.
    pub message: String,

    /// Number of parseable lines carrying exactly this message.
    pub count: u64,
}

// =============================================================================
// Search match
// =============================================================================

/// A matching log entry rendered for delivery: all five fields as strings,
/// the timestamp back in the grammar's own notation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchMatch {
    pub timestamp: String,
    pub level: String,
    pub thread: String,
    pub logger: String,
    pub message: String,
}

impl From<LogEntry> for SearchMatch {
    fn from(entry: LogEntry) -> Self {
        Self {
            timestamp: entry.timestamp.format(LOG_TIMESTAMP_FORMAT).to_string(),
            level: entry.level.as_str().to_string(),
            thread: entry.thread,
            logger: entry.logger,
            message: entry.message,
        }
    }
}

/// Render a timestamp in the log grammar's `DD-Mon-YYYY HH:MM:SS.mmm` form
/// rather than chrono's default ISO-8601.
fn serialize_log_timestamp<S>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&ts.format(LOG_TIMESTAMP_FORMAT))
}
