// LogLens - core/parser.rs
//
// The Tomcat-style line grammar:
//   <timestamp> <level> [<thread>] <logger>[:-]? <message>
//
// One raw text line in, one structured entry out -- or nothing. Lines that
// do not match the grammar end-to-end (blank separators, stack-trace
// continuations) are silently excluded; they are data, not errors. The
// parser holds no state and is safe to invoke from concurrent passes.

use crate::core::model::{Level, LogEntry};
use crate::util::constants::LOG_TIMESTAMP_FORMAT;
use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::OnceLock;

/// Compiled line grammar, matched against the whole line.
///
/// Capture groups: timestamp, level, thread, logger, message. The timestamp
/// group is deliberately loose (`\w{3}` for the month); chrono does the
/// strict calendar validation afterwards so `32-Jan` or `10-Foo` rejects
/// the line rather than producing a bogus entry.
fn line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"^(\d{2}-\w{3}-\d{4} \d{2}:\d{2}:\d{2}\.\d{3})\s+(INFO|SEVERE|WARNING|DEBUG|ERROR|TRACE)\s+\[([^\]]+)\]\s+([\w.]+)\s*[:-]?\s*(.*)$",
        )
        .expect("line grammar regex is valid")
    })
}

/// Parse one raw line into a structured entry.
///
/// Returns `None` for blank input and for any line that does not match the
/// grammar end-to-end, including lines whose timestamp field fails calendar
/// validation. Never returns an error.
pub fn parse_line(line: &str) -> Option<LogEntry> {
    if line.trim().is_empty() {
        return None;
    }

    let caps = line_pattern().captures(line)?;

    let timestamp = NaiveDateTime::parse_from_str(&caps[1], LOG_TIMESTAMP_FORMAT).ok()?;
    let level = Level::from_exact(&caps[2])?;

    Some(LogEntry {
        timestamp,
        level,
        thread: caps[3].to_string(),
        logger: caps[4].to_string(),
        message: caps[5].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn test_parses_all_five_fields_verbatim() {
        let entry = parse_line(
            "10-Jan-2024 10:00:00.000 INFO [main] com.app.Boot: started in 2.3 seconds",
        )
        .expect("line should parse");

        let expected_ts = NaiveDate::from_ymd_opt(2024, 1, 10)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        assert_eq!(entry.timestamp, expected_ts);
        assert_eq!(entry.level, Level::Info);
        assert_eq!(entry.thread, "main");
        assert_eq!(entry.logger, "com.app.Boot");
        assert_eq!(entry.message, "started in 2.3 seconds");
    }

    #[test]
    fn test_millisecond_precision_preserved() {
        let entry =
            parse_line("10-Jan-2024 10:00:05.500 ERROR [main] com.app.Boot: crash").unwrap();
        assert_eq!(entry.timestamp.nanosecond(), 500_000_000);
    }

    #[test]
    fn test_each_level_parses() {
        for raw in ["INFO", "WARNING", "SEVERE", "ERROR", "DEBUG", "TRACE"] {
            let line =
                format!("10-Jan-2024 10:00:00.000 {raw} [main] com.app.Boot: hello");
            let entry = parse_line(&line)
                .unwrap_or_else(|| panic!("level {raw} should parse"));
            assert_eq!(entry.level.as_str(), raw);
        }
    }

    #[test]
    fn test_levels_are_case_exact() {
        assert!(parse_line("10-Jan-2024 10:00:00.000 info [main] com.app.Boot: x").is_none());
        assert!(parse_line("10-Jan-2024 10:00:00.000 WARN [main] com.app.Boot: x").is_none());
    }

    #[test]
    fn test_blank_and_whitespace_lines_rejected() {
        assert!(parse_line("").is_none());
        assert!(parse_line("   \t  ").is_none());
    }

    #[test]
    fn test_stack_trace_continuation_rejected() {
        assert!(parse_line("\tat com.app.Boot.main(Boot.java:42)").is_none());
        assert!(parse_line("java.lang.IllegalStateException: boom").is_none());
        assert!(parse_line("Caused by: java.io.IOException").is_none());
    }

    #[test]
    fn test_invalid_calendar_date_rejected() {
        // Matches the loose regex but fails chrono validation.
        assert!(parse_line("32-Jan-2024 10:00:00.000 INFO [main] com.app.Boot: x").is_none());
        assert!(parse_line("10-Foo-2024 10:00:00.000 INFO [main] com.app.Boot: x").is_none());
        assert!(parse_line("10-Jan-2024 25:00:00.000 INFO [main] com.app.Boot: x").is_none());
    }

    #[test]
    fn test_separator_variants() {
        let colon =
            parse_line("10-Jan-2024 10:00:00.000 INFO [main] com.app.Boot: started").unwrap();
        let dash =
            parse_line("10-Jan-2024 10:00:00.000 INFO [main] com.app.Boot - started").unwrap();
        let none =
            parse_line("10-Jan-2024 10:00:00.000 INFO [main] com.app.Boot started").unwrap();
        assert_eq!(colon.message, "started");
        assert_eq!(dash.message, "started");
        assert_eq!(none.message, "started");
    }

    #[test]
    fn test_empty_message_allowed() {
        let entry = parse_line("10-Jan-2024 10:00:00.000 INFO [main] com.app.Boot:").unwrap();
        assert_eq!(entry.message, "");
    }

    #[test]
    fn test_thread_tag_with_spaces_and_dashes() {
        let entry = parse_line(
            "10-Jan-2024 10:00:00.000 WARNING [http-nio-8080-exec-1] org.apache.catalina.core.StandardWrapperValve: oops",
        )
        .unwrap();
        assert_eq!(entry.thread, "http-nio-8080-exec-1");
        assert_eq!(entry.logger, "org.apache.catalina.core.StandardWrapperValve");
    }

    #[test]
    fn test_missing_thread_rejected() {
        assert!(parse_line("10-Jan-2024 10:00:00.000 INFO com.app.Boot: started").is_none());
        assert!(parse_line("10-Jan-2024 10:00:00.000 INFO [] com.app.Boot: started").is_none());
    }
}
