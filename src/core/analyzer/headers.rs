// src/core/analyzer/headers.rs

use std::collections::HashMap;

use tracing::debug;

use crate::core::knowledge_base::{self, HeaderWeight, HEADERS};
use crate::core::models::SecurityHeaderRecord;

/// Classification is read-time only: the records are returned as given and
/// presence is decided by [`is_present`].
pub fn classify(headers: Vec<SecurityHeaderRecord>) -> Vec<SecurityHeaderRecord> {
    headers
}

pub fn is_present(record: &SecurityHeaderRecord) -> bool {
    record.value.is_some()
}

/// Records with no value, in input order. Each one gets a recommendation alert.
pub fn missing(headers: &[SecurityHeaderRecord]) -> impl Iterator<Item = &SecurityHeaderRecord> {
    headers.iter().filter(|h| !is_present(h))
}

/// Counts the present headers that contribute to the grade.
pub fn present_graded_count(headers: &[SecurityHeaderRecord]) -> usize {
    headers
        .iter()
        .filter(|h| is_present(h))
        .filter(|h| {
            knowledge_base::get_header_detail(&h.name)
                .is_some_and(|d| d.weight == HeaderWeight::Graded)
        })
        .count()
}

/// Builds one record per recognized header from a `name -> value` map.
///
/// Lookup ignores ASCII case; a missing key yields an absent value.
pub fn records_from_map(map: &HashMap<String, String>) -> Vec<SecurityHeaderRecord> {
    let lowered: HashMap<String, &String> =
        map.iter().map(|(k, v)| (k.to_ascii_lowercase(), v)).collect();

    HEADERS
        .iter()
        .map(|detail| {
            let value = lowered.get(&detail.name.to_ascii_lowercase()).map(|v| v.to_string());
            debug!(header_name = detail.name, present = value.is_some(), "Classified header.");
            SecurityHeaderRecord {
                name: detail.name.to_string(),
                value,
                description: detail.description.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn records_cover_every_recognized_header_in_order() {
        let records = records_from_map(&HashMap::new());
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Strict-Transport-Security",
                "Content-Security-Policy",
                "X-Frame-Options",
                "X-Content-Type-Options",
                "Referrer-Policy",
                "Permissions-Policy",
            ]
        );
        assert!(records.iter().all(|r| r.value.is_none()));
    }

    #[test]
    fn lookup_ignores_case() {
        let records = records_from_map(&map(&[("x-frame-options", "DENY"), ("SERVER", "nginx")]));
        let xfo = records.iter().find(|r| r.name == "X-Frame-Options").unwrap();
        assert_eq!(xfo.value.as_deref(), Some("DENY"));
        assert_eq!(missing(&records).count(), 5);
    }

    #[test]
    fn permissions_policy_is_not_counted() {
        let records = records_from_map(&map(&[
            ("permissions-policy", "camera=()"),
            ("x-content-type-options", "nosniff"),
        ]));
        assert_eq!(present_graded_count(&records), 1);
    }

    #[test]
    fn unknown_names_are_never_counted() {
        let records = vec![SecurityHeaderRecord {
            name: "X-Custom".into(),
            value: Some("1".into()),
            description: String::new(),
        }];
        assert_eq!(present_graded_count(&records), 0);
    }

    #[test]
    fn classify_leaves_records_untouched() {
        let records = records_from_map(&map(&[("referrer-policy", "no-referrer")]));
        assert_eq!(classify(records.clone()), records);
    }
}
