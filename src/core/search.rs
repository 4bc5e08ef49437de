// LogLens - core/search.rs
//
// Full-text and regex search over parsed entries, with offset/limit
// pagination. The pattern is tested against the message field only,
// using find-anywhere semantics rather than full-line equality.

use crate::core::model::LogEntry;
use crate::core::parser::parse_line;
use crate::util::error::SearchError;
use regex::{Regex, RegexBuilder};

/// Compile the caller's query into a pattern.
///
/// In regex mode the query is compiled as written. In literal mode all
/// regex metacharacters are escaped first, so the two modes agree on any
/// metacharacter-free query. `case_sensitive = false` enables the engine's
/// Unicode-aware case folding in both modes.
pub fn build_pattern(
    query: &str,
    case_sensitive: bool,
    use_regex: bool,
) -> Result<Regex, SearchError> {
    let pattern = if use_regex {
        query.to_string()
    } else {
        regex::escape(query)
    };

    RegexBuilder::new(&pattern)
        .case_insensitive(!case_sensitive)
        .build()
        .map_err(|source| SearchError::InvalidRegex {
            pattern: query.to_string(),
            source,
        })
}

/// Scan the content and collect every entry whose message matches, in
/// file order. Lines that fail the grammar (stack traces, blanks) are
/// skipped, never fatal to the scan.
pub fn search_messages(content: &str, pattern: &Regex) -> Vec<LogEntry> {
    content
        .lines()
        .filter_map(parse_line)
        .filter(|entry| pattern.is_match(&entry.message))
        .collect()
}

/// Slice one page out of the full match list.
///
/// `page` is 1-based; the zero-based start offset is `(page - 1) * page_size`
/// and the exclusive end is capped at the total. A start at or past the end
/// yields an empty page -- the contract for "page past the end".
pub fn paginate<T>(matches: Vec<T>, page: usize, page_size: usize) -> Vec<T> {
    let start = (page - 1).saturating_mul(page_size);
    if start >= matches.len() {
        return Vec::new();
    }
    matches.into_iter().skip(start).take(page_size).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
10-Jan-2024 10:00:00.000 INFO [main] com.app.Boot: started
10-Jan-2024 10:00:01.000 WARNING [worker-1] com.app.Pool: Disk usage at 91%
\tat com.app.Pool.check(Pool.java:77)
10-Jan-2024 10:00:02.000 ERROR [worker-1] com.app.Pool: disk full (code 28)
10-Jan-2024 10:00:05.500 ERROR [main] com.app.Boot: crash
";

    #[test]
    fn test_literal_matches_substring_anywhere() {
        let pattern = build_pattern("disk", true, false).unwrap();
        let matches = search_messages(SAMPLE, &pattern);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].message, "disk full (code 28)");
    }

    #[test]
    fn test_case_insensitive_literal() {
        let pattern = build_pattern("DISK", false, false).unwrap();
        let matches = search_messages(SAMPLE, &pattern);
        assert_eq!(matches.len(), 2); // "Disk usage" and "disk full"
    }

    #[test]
    fn test_unicode_case_folding() {
        let content =
            "10-Jan-2024 10:00:00.000 INFO [main] com.app.I18n: GRÜSSE from startup\n";
        let pattern = build_pattern("grüsse", false, false).unwrap();
        assert_eq!(search_messages(content, &pattern).len(), 1);
    }

    #[test]
    fn test_literal_mode_escapes_metacharacters() {
        let pattern = build_pattern("(code 28)", true, false).unwrap();
        let matches = search_messages(SAMPLE, &pattern);
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_literal_equivalent_to_escaped_regex() {
        for query in ["disk full (code 28)", "a.b", "usage at 91%"] {
            let literal = build_pattern(query, false, false).unwrap();
            let escaped = build_pattern(&regex::escape(query), false, true).unwrap();
            assert_eq!(
                search_messages(SAMPLE, &literal),
                search_messages(SAMPLE, &escaped),
                "literal and escaped-regex modes disagree on {query:?}"
            );
        }
    }

    #[test]
    fn test_regex_mode_uses_pattern_syntax() {
        let pattern = build_pattern(r"code \d+", true, true).unwrap();
        assert_eq!(search_messages(SAMPLE, &pattern).len(), 1);
    }

    #[test]
    fn test_matching_is_message_only() {
        // "worker-1" appears in thread tags but in no message.
        let pattern = build_pattern("worker-1", true, false).unwrap();
        assert!(search_messages(SAMPLE, &pattern).is_empty());
    }

    #[test]
    fn test_invalid_regex_rejected() {
        let result = build_pattern("[unclosed", true, true);
        assert!(matches!(result, Err(SearchError::InvalidRegex { .. })));
    }

    #[test]
    fn test_pagination_exhaustive_and_non_overlapping() {
        let items: Vec<u32> = (0..10).collect();
        let mut reassembled = Vec::new();
        for page in 1..=4 {
            reassembled.extend(paginate(items.clone(), page, 3));
        }
        assert_eq!(reassembled, items);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let items: Vec<u32> = vec![1];
        assert!(paginate(items, 2, 10).is_empty());
    }

    #[test]
    fn test_last_partial_page() {
        let items: Vec<u32> = (0..5).collect();
        assert_eq!(paginate(items, 2, 3), vec![3, 4]);
    }
}
