//! Tag parsing for the `item.tags` column.
//!
//! Seed data stores tags as loosely delimited text such as `["tool","hand"]`.
//! Parsing never fails: bracket and quote characters are stripped, the rest is
//! split on commas, fragments are trimmed, and empty fragments are dropped.

const STRIPPED: [char; 3] = ['[', ']', '"'];

/// Parse stored tag text into display labels.
#[must_use]
pub fn parse_tags(raw: &str) -> Vec<String> {
    let cleaned: String = raw.chars().filter(|c| !STRIPPED.contains(c)).collect();
    cleaned
        .split(',')
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(String::from)
        .collect()
}
