//! Query-string parsing and record-set transformation.
//!
//! Filter, sort, offset, and count/limit apply to a generated record set
//! in that fixed order.

use crate::generator::Record;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Parse a raw query string into key-value pairs. When a key repeats, the
/// first occurrence wins.
pub fn parse_query(query: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();

    for part in query.split('&') {
        if part.is_empty() {
            continue;
        }
        let (key, value) = match part.split_once('=') {
            Some((key, value)) => (percent_decode(key), percent_decode(value)),
            None => (percent_decode(part), String::new()),
        };
        params.entry(key).or_insert(value);
    }

    params
}

/// Simple percent decoding; `+` becomes a space, malformed escapes pass
/// through unchanged.
fn percent_decode(input: &str) -> String {
    let mut result = String::new();
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '%' {
            let hex: String = chars.by_ref().take(2).collect();
            if hex.len() == 2 {
                if let Ok(byte) = u8::from_str_radix(&hex, 16) {
                    result.push(byte as char);
                    continue;
                }
            }
            result.push('%');
            result.push_str(&hex);
        } else if ch == '+' {
            result.push(' ');
        } else {
            result.push(ch);
        }
    }

    result
}

/// Apply query-driven filtering, sorting, and pagination to `records`.
///
/// Recognized parameters: `filter=field:value` (case-insensitive substring
/// match on the rendered value), `sort=field` with `order=desc`, `offset`,
/// and `count` with its lower-precedence alias `limit`. Malformed or
/// unrecognized parameters are ignored.
pub fn transform(mut records: Vec<Record>, params: &HashMap<String, String>) -> Vec<Record> {
    if let Some(filter) = params.get("filter") {
        if let Some((field, needle)) = filter.split_once(':') {
            let needle = needle.to_lowercase();
            records.retain(|record| {
                record
                    .get(field)
                    .map(|value| value.to_string().to_lowercase().contains(&needle))
                    .unwrap_or(false)
            });
        }
    }

    if let Some(field) = params.get("sort") {
        let descending = params.get("order").map(String::as_str) == Some("desc");
        records.sort_by(|a, b| compare_by_field(a, b, field, descending));
    }

    if let Some(offset) = params.get("offset").and_then(|v| v.parse::<usize>().ok()) {
        if offset >= records.len() {
            records.clear();
        } else {
            records.drain(..offset);
        }
    }

    if let Some(cap) = effective_cap(params) {
        records.truncate(cap);
    }

    records
}

/// Read a query parameter as a positive integer; zero, negative, and
/// unparseable values count as absent.
pub(crate) fn positive_param(params: &HashMap<String, String>, key: &str) -> Option<usize> {
    params
        .get(key)
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|n| *n > 0)
}

/// Resolve the record cap: `count` when usable, else its alias `limit`.
fn effective_cap(params: &HashMap<String, String>) -> Option<usize> {
    positive_param(params, "count").or_else(|| positive_param(params, "limit"))
}

/// Lexicographic comparison on the rendered field value. A record missing
/// the field sorts last ascending and first descending; two missing
/// records compare equal, so the stable sort keeps their order.
fn compare_by_field(a: &Record, b: &Record, field: &str, descending: bool) -> Ordering {
    let ordering = match (a.get(field), b.get(field)) {
        (Some(left), Some(right)) => left.to_string().cmp(&right.to_string()),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    if descending {
        ordering.reverse()
    } else {
        ordering
    }
}
