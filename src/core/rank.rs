// LogLens - core/rank.rs
//
// Top-K message ranking: exact frequency counts over verbatim message
// strings, descending by count. Ties break on first occurrence in the
// file, which keeps the ordering stable and deterministic across runs.

use crate::core::model::RankedMessage;
use crate::core::parser::parse_line;
use std::collections::HashMap;

/// Rank the distinct messages in the given content by occurrence count and
/// return the `limit` most frequent.
///
/// Entries with an empty or blank message are skipped. Equal counts are
/// ordered by first occurrence. The caller validates `limit >= 1` at the
/// boundary; an empty file yields an empty sequence.
pub fn top_messages(content: &str, limit: usize) -> Vec<RankedMessage> {
    // message -> (count, first-seen index)
    let mut counts: HashMap<String, (u64, usize)> = HashMap::new();

    for line in content.lines() {
        if let Some(entry) = parse_line(line) {
            if entry.message.trim().is_empty() {
                continue;
            }
            let order = counts.len();
            let slot = counts.entry(entry.message).or_insert((0, order));
            slot.0 += 1;
        }
    }

    let mut ranked: Vec<(String, (u64, usize))> = counts.into_iter().collect();
    ranked.sort_by(|(_, (count_a, seen_a)), (_, (count_b, seen_b))| {
        count_b.cmp(count_a).then(seen_a.cmp(seen_b))
    });
    ranked.truncate(limit);

    ranked
        .into_iter()
        .map(|(message, (count, _))| RankedMessage { message, count })
        .collect()
}
