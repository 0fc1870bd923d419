use std::collections::HashMap;

use path_schema::{Opening, OpeningStat};

/// Stats keyed by opening name. The first record for a name wins.
pub(crate) type StatIndex<'a> = HashMap<&'a str, &'a OpeningStat>;

pub(crate) fn index_stats(stats: &[OpeningStat]) -> StatIndex<'_> {
    let mut index = StatIndex::with_capacity(stats.len());
    for stat in stats {
        index.entry(stat.opening_name.as_str()).or_insert(stat);
    }
    index
}

/// Orders openings by their lowest available level, then by name (byte-wise).
pub fn sort_openings(openings: &[Opening]) -> Vec<&Opening> {
    let mut sorted: Vec<&Opening> = openings.iter().collect();
    sorted.sort_by(|a, b| {
        a.sort_level()
            .cmp(&b.sort_level())
            .then_with(|| a.name.cmp(&b.name))
    });
    sorted
}

/// One past the last sorted opening with a completed session, or 0.
///
/// Gaps are not considered: an unattempted opening sitting before a completed
/// one never becomes current.
pub fn current_index(sorted: &[&Opening], stats: &[OpeningStat]) -> usize {
    current_index_in(sorted, &index_stats(stats))
}

pub(crate) fn current_index_in(sorted: &[&Opening], stats: &StatIndex<'_>) -> usize {
    sorted
        .iter()
        .rposition(|o| stats.get(o.name.as_str()).is_some_and(|s| s.is_completed()))
        .map_or(0, |i| i + 1)
}
