//! Normalized binary search over a sorted record sequence.

use crate::error::Result;
use crate::record::extract;
use crate::sort::SortedBy;
use crate::value::FieldValue;
use log::debug;
use std::cmp::Ordering;

/// Classic binary search for `key` using the same comparison as the sort.
fn search_for(sorted: &SortedBy, key: &FieldValue) -> Result<Option<usize>> {
    let field = sorted.field();
    let mut low = 0usize;
    let mut high = sorted.length();

    // `high` is one past the last candidate
    while low < high {
        let mid = low + (high - low - 1) / 2;
        let value = extract(sorted.get(mid)?, field)?;

        match value.compare(key) {
            Ordering::Greater => high = mid,
            Ordering::Less => low = mid + 1,
            Ordering::Equal => return Ok(Some(mid)),
        }
    }

    Ok(None)
}

/// Finds a record whose `sorted.field()` value matches `query`.
///
/// Text is compared after [`normalize`](crate::normalize), so `"foo bar"`
/// matches `"FooBar"`. A query that reads as a number or a date is looked up
/// as that kind first and then as text, since a column may mix kinds.
///
/// Returns `Ok(None)` when nothing matches. With duplicate keys any one of the
/// matching positions may be returned.
pub fn binary_search(sorted: &SortedBy, query: &str) -> Result<Option<usize>> {
    for key in FieldValue::query_candidates(query) {
        if let Some(index) = search_for(sorted, &key)? {
            debug!("Found '{}' in '{}' at index {}", query, sorted.field(), index);
            return Ok(Some(index));
        }
    }

    debug!("No match for '{}' in '{}'", query, sorted.field());
    Ok(None)
}
