//! Parsing of a `document.cookie` snapshot.
//!
//! A snapshot is the store's `name=value` pairs joined by `; `. Lookups compare
//! names directly, so names containing characters like `.`, `$` or `(` need no
//! escaping and match only themselves.

use std::collections::HashMap;

/// Iterate over the `(name, value)` pairs of a snapshot, in store order.
///
/// Each segment is trimmed and split on its first `=`; empty segments are
/// skipped and a segment without `=` yields an empty value.
pub fn pairs(snapshot: &str) -> impl Iterator<Item = (&str, &str)> + '_ {
    snapshot
        .split(';')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| match segment.split_once('=') {
            Some((name, value)) => (name, value),
            None => (segment, ""),
        })
}

/// Segments that carry an `=`, with the name trimmed.
fn assignments(snapshot: &str) -> impl Iterator<Item = (&str, &str)> + '_ {
    snapshot
        .split(';')
        .filter_map(|segment| segment.split_once('='))
        .map(|(name, value)| (name.trim(), value))
}

/// Decode every cookie in the snapshot. Later pairs overwrite earlier ones.
pub fn decode_all(snapshot: &str) -> HashMap<String, String> {
    let mut cookies = HashMap::new();
    for (name, value) in pairs(snapshot) {
        cookies.insert(name.to_string(), value.to_string());
    }
    cookies
}

/// Value of the first cookie called `name`, if any.
pub fn decode_one(snapshot: &str, name: &str) -> Option<String> {
    assignments(snapshot)
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, value)| value.trim_end().to_string())
}

/// Whether the snapshot holds an assignment for `name`.
///
/// Whitespace between the name and `=` is tolerated.
pub fn exists(snapshot: &str, name: &str) -> bool {
    assignments(snapshot).any(|(candidate, _)| candidate == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_all_empty() {
        assert!(decode_all("").is_empty());
        assert!(decode_all(" ; ;").is_empty());
    }

    #[test]
    fn test_decode_all_basic() {
        let cookies = decode_all("a=1; b=2");
        assert_eq!(cookies.len(), 2);
        assert_eq!(cookies["a"], "1");
        assert_eq!(cookies["b"], "2");
    }

    #[test]
    fn test_decode_all_later_overwrites() {
        let cookies = decode_all("a=1; b=2; a=3");
        assert_eq!(cookies["a"], "3");
    }

    #[test]
    fn test_decode_all_keeps_equals_in_value() {
        let cookies = decode_all("token=abc==; flag");
        assert_eq!(cookies["token"], "abc==");
        assert_eq!(cookies["flag"], "");
    }

    #[test]
    fn test_decode_one() {
        let snapshot = "a=1; session_id=xyz; empty=";
        assert_eq!(decode_one(snapshot, "session_id"), Some("xyz".to_string()));
        assert_eq!(decode_one(snapshot, "empty"), Some(String::new()));
        assert_eq!(decode_one(snapshot, "missing"), None);
        assert_eq!(decode_one("", "a"), None);
        assert_eq!(decode_one("flag; a=1", "flag"), None);
    }

    #[test]
    fn test_decode_one_first_match_wins() {
        assert_eq!(decode_one("a=specific; a=general", "a"), Some("specific".to_string()));
    }

    #[test]
    fn test_decode_one_no_prefix_match() {
        assert_eq!(decode_one("xa=1; ab=2", "a"), None);
    }

    #[test]
    fn test_metacharacter_names_match_literally() {
        let snapshot = "a.b=1; axb=2; $(x)=3";
        assert_eq!(decode_one(snapshot, "a.b"), Some("1".to_string()));
        assert_eq!(decode_one(snapshot, "a*b"), None);
        assert_eq!(decode_one(snapshot, "$(x)"), Some("3".to_string()));
        assert!(exists(snapshot, "$(x)"));
        assert!(!exists(snapshot, "a+b"));
    }

    #[test]
    fn test_exists() {
        assert!(exists("a=1; b=2", "a"));
        assert!(exists("a=1; b =2", "b"));
        assert!(!exists("a=1", "zzz"));
        assert!(!exists("", "zzz"));
        assert!(!exists("flag", "flag"));
    }
}
