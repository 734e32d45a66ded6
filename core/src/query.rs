//! Query-string parameters
//!
//! An ordered list of `name=value` pairs with the same observable behaviour
//! as the browser's `URLSearchParams` for single-valued keys:
//! - `set` rewrites the first occurrence in place and drops later duplicates
//! - `delete` removes every occurrence
//! - unrelated parameters keep their relative order across mutations
//!
//! Encoding follows `application/x-www-form-urlencoded`: space becomes `+`,
//! everything outside `[A-Za-z0-9*-._]` is percent-encoded.

use std::fmt;

/// Ordered query-string parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create an empty parameter list
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a query string, with or without the leading `?`
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);

        let pairs = query
            .split('&')
            .filter(|segment| !segment.is_empty())
            .map(|segment| match segment.split_once('=') {
                Some((name, value)) => (decode(name), decode(value)),
                None => (decode(segment), String::new()),
            })
            .collect();

        Self { pairs }
    }

    /// First value for `name`, or `None` when the key is absent
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has(&self, name: &str) -> bool {
        self.pairs.iter().any(|(key, _)| key == name)
    }

    /// Set `name` to `value`
    ///
    /// Replaces the first occurrence in place and removes any others;
    /// appends a new pair when the key is absent.
    pub fn set(&mut self, name: &str, value: &str) {
        match self.pairs.iter().position(|(key, _)| key == name) {
            Some(first) => {
                self.pairs[first].1 = value.to_string();
                let mut index = 0;
                self.pairs.retain(|(key, _)| {
                    let keep = index <= first || key != name;
                    index += 1;
                    keep
                });
            }
            None => self.pairs.push((name.to_string(), value.to_string())),
        }
    }

    /// Remove every occurrence of `name`, returning whether any was removed
    pub fn delete(&mut self, name: &str) -> bool {
        let before = self.pairs.len();
        self.pairs.retain(|(key, _)| key != name);
        self.pairs.len() != before
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over `(name, value)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Serializes without the leading `?`
impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}={}", encode(name), encode(value))?;
        }
        Ok(())
    }
}

fn encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'*' | b'-' | b'.' | b'_' => {
                out.push(byte as char)
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

fn decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' if i + 2 < bytes.len() => {
                match (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi << 4 | lo);
                        i += 2;
                    }
                    // Malformed escapes pass through untouched
                    _ => out.push(b'%'),
                }
            }
            byte => out.push(byte),
        }
        i += 1;
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_get() {
        let params = QueryParams::parse("?a=1&b=two&flag");
        assert_eq!(params.get("a"), Some("1"));
        assert_eq!(params.get("b"), Some("two"));
        assert_eq!(params.get("flag"), Some(""));
        assert_eq!(params.get("missing"), None);
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_parse_empty() {
        assert!(QueryParams::parse("").is_empty());
        assert!(QueryParams::parse("?").is_empty());
        assert!(QueryParams::parse("?&&").is_empty());
    }

    #[test]
    fn test_set_appends_when_absent() {
        let mut params = QueryParams::parse("mockExistingParam=mockExistingValue");
        params.set("mockKey", "mockValue");
        assert_eq!(
            params.to_string(),
            "mockExistingParam=mockExistingValue&mockKey=mockValue"
        );
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut params = QueryParams::parse("a=1&b=2&c=3");
        params.set("b", "20");
        assert_eq!(params.to_string(), "a=1&b=20&c=3");
    }

    #[test]
    fn test_set_collapses_duplicates() {
        let mut params = QueryParams::parse("x=1&a=2&x=3&b=4&x=5");
        params.set("x", "9");
        assert_eq!(params.to_string(), "x=9&a=2&b=4");
    }

    #[test]
    fn test_delete() {
        let mut params = QueryParams::parse("x=1&a=2&x=3");
        assert!(params.delete("x"));
        assert_eq!(params.to_string(), "a=2");
        assert!(!params.delete("x"));
    }

    #[test]
    fn test_empty_value_serializes_with_equals() {
        let mut params = QueryParams::new();
        params.set("mockKey", "");
        assert_eq!(params.to_string(), "mockKey=");
    }

    #[test]
    fn test_encoding() {
        let mut params = QueryParams::new();
        params.set("q", "a b&c=d/é");
        assert_eq!(params.to_string(), "q=a+b%26c%3Dd%2F%C3%A9");

        let parsed = QueryParams::parse(&params.to_string());
        assert_eq!(parsed.get("q"), Some("a b&c=d/é"));
    }

    #[test]
    fn test_decode_malformed_escape() {
        let params = QueryParams::parse("a=100%&b=%zz&c=%4");
        assert_eq!(params.get("a"), Some("100%"));
        assert_eq!(params.get("b"), Some("%zz"));
        assert_eq!(params.get("c"), Some("%4"));
    }
}
