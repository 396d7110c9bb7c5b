//! Client-side search over the loaded records.

use store::Record;

/// Records for which any field, identifier included, contains `term`
/// ignoring case. An empty term matches everything.
///
/// Absent values (empty text, unspecified gender, no birthdate) read as the
/// empty string, so they only match the empty term. Order is preserved.
pub fn filter<'a>(records: &'a [Record], term: &str) -> Vec<&'a Record> {
    if term.is_empty() {
        return records.iter().collect();
    }
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|record| matches(record, &needle))
        .collect()
}

fn matches(record: &Record, needle: &str) -> bool {
    record
        .search_values()
        .any(|value| value.to_lowercase().contains(needle))
}
