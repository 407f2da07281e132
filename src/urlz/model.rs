use serde::{Deserialize, Serialize};

/// A single short code to long URL pair, as stored in `urls.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping {
    pub short: String,
    pub long: String,
}

impl Mapping {
    pub fn new(short: impl Into<String>, long: impl Into<String>) -> Self {
        Self {
            short: short.into(),
            long: long.into(),
        }
    }
}

/// Every mapping known to the store, in insertion order.
///
/// Serializes as a bare JSON array so the backing file stays a plain list
/// of `{"short", "long"}` objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordSet {
    records: Vec<Mapping>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mapping> {
        self.records.iter()
    }

    /// First mapping whose code equals `short` exactly.
    pub fn find_short(&self, short: &str) -> Option<&Mapping> {
        self.records.iter().find(|m| m.short == short)
    }

    pub fn contains_short(&self, short: &str) -> bool {
        self.find_short(short).is_some()
    }

    pub fn contains_long(&self, long: &str) -> bool {
        self.records.iter().any(|m| m.long == long)
    }

    pub fn push(&mut self, mapping: Mapping) {
        self.records.push(mapping);
    }

    /// Removes the first mapping for `short`, leaving any later duplicates in place.
    pub fn remove_short(&mut self, short: &str) -> Option<Mapping> {
        let pos = self.records.iter().position(|m| m.short == short)?;
        Some(self.records.remove(pos))
    }
}

impl From<Vec<Mapping>> for RecordSet {
    fn from(records: Vec<Mapping>) -> Self {
        Self { records }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RecordSet {
        RecordSet::from(vec![
            Mapping::new("aaaaaa", "http://one.example"),
            Mapping::new("bbbbbb", "http://two.example"),
            Mapping::new("aaaaaa", "http://dupe.example"),
        ])
    }

    #[test]
    fn find_short_is_case_sensitive() {
        let set = sample();
        assert!(set.find_short("aaaaaa").is_some());
        assert!(set.find_short("AAAAAA").is_none());
    }

    #[test]
    fn find_short_returns_first_match() {
        let set = sample();
        assert_eq!(set.find_short("aaaaaa").unwrap().long, "http://one.example");
    }

    #[test]
    fn remove_short_only_removes_first_duplicate() {
        let mut set = sample();
        let removed = set.remove_short("aaaaaa").unwrap();

        assert_eq!(removed.long, "http://one.example");
        assert_eq!(set.len(), 2);
        assert_eq!(set.find_short("aaaaaa").unwrap().long, "http://dupe.example");
    }

    #[test]
    fn remove_short_missing_leaves_set_unchanged() {
        let mut set = sample();
        assert!(set.remove_short("zzzzzz").is_none());
        assert_eq!(set, sample());
    }

    #[test]
    fn serializes_as_plain_array() {
        let set = RecordSet::from(vec![Mapping::new("abc123", "http://example.com")]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"[{"short":"abc123","long":"http://example.com"}]"#);
    }
}
