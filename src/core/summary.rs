// LogLens - core/summary.rs
//
// Summary aggregation: per-level histogram and event time range.
// Single forward scan; every analytic call is a fresh, independent pass.

use crate::core::model::{SummaryResult, TimeRange};
use crate::core::parser::parse_line;
use chrono::NaiveDateTime;
use std::collections::BTreeMap;

/// Summarise the given file content.
///
/// Counts parseable lines per severity and tracks the running min/max event
/// timestamp under calendar ordering. The time range (with its duration in
/// whole milliseconds) is omitted when the content has no parseable lines;
/// the level-count mapping is then empty.
pub fn summarize(content: &str, file_name: &str) -> SummaryResult {
    let mut level_counts: BTreeMap<_, u64> = BTreeMap::new();
    let mut first: Option<NaiveDateTime> = None;
    let mut last: Option<NaiveDateTime> = None;

    for line in content.lines() {
        if let Some(entry) = parse_line(line) {
            *level_counts.entry(entry.level).or_insert(0) += 1;

            if first.map_or(true, |ts| entry.timestamp < ts) {
                first = Some(entry.timestamp);
            }
            if last.map_or(true, |ts| entry.timestamp > ts) {
                last = Some(entry.timestamp);
            }
        }
    }

    let time_range = match (first, last) {
        (Some(start), Some(end)) => Some(TimeRange {
            start,
            end,
            duration_millis: (end - start).num_milliseconds(),
        }),
        _ => None,
    };

    SummaryResult {
        file_name: file_name.to_string(),
        level_counts,
        time_range,
    }
}
