//! Generic reshaping primitives
//!
//! Two functions turn a flat slice of records into keyed mappings:
//!
//! - [`group_by`] collects every record under its derived key.
//! - [`to_lookup`] keeps one derived value per key, the last one written.
//!
//! A key selector returns `None` when a record has no key; such records are
//! skipped by both functions. Neither function cares about the record type.

use std::collections::HashMap;
use std::hash::Hash;

/// Mapping from key to all records sharing it, in input order
pub type Grouping<'a, K, T> = HashMap<K, Vec<&'a T>>;

/// Group records by a derived key
///
/// Records keep their relative input order inside each group. Records whose
/// key selector yields `None` land in no group.
pub fn group_by<'a, T, K, F>(records: &'a [T], mut key_of: F) -> Grouping<'a, K, T>
where
    K: Eq + Hash,
    F: FnMut(&'a T) -> Option<K>,
{
    let mut groups: Grouping<'a, K, T> = HashMap::new();
    for record in records {
        if let Some(key) = key_of(record) {
            groups.entry(key).or_default().push(record);
        }
    }
    groups
}

/// Build a lookup from a derived key to a derived value
///
/// When several records share a key the later record wins.
pub fn to_lookup<'a, T, K, V, F, G>(records: &'a [T], mut key_of: F, mut value_of: G) -> Lookup<K, V>
where
    K: Eq + Hash + Clone,
    F: FnMut(&'a T) -> Option<K>,
    G: FnMut(&'a T) -> V,
{
    let mut lookup = Lookup::with_capacity(records.len());
    for record in records {
        if let Some(key) = key_of(record) {
            lookup.insert(key, value_of(record));
        }
    }
    lookup
}

/// Build a membership lookup: every present key maps to `true`
pub fn to_membership<'a, T, K, F>(records: &'a [T], key_of: F) -> Lookup<K, bool>
where
    K: Eq + Hash + Clone,
    F: FnMut(&'a T) -> Option<K>,
{
    to_lookup(records, key_of, |_| true)
}

/// One value per key, iterated in the order keys were first inserted
///
/// Overwriting an existing key replaces its value but keeps its position.
#[derive(Debug, Clone)]
pub struct Lookup<K, V> {
    entries: Vec<(K, V)>,
    index: HashMap<K, usize>,
}

impl<K, V> Lookup<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Create an empty lookup
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty lookup with room for `capacity` keys
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Insert a value, returning the value it replaced
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.index.get(&key) {
            Some(&position) => Some(std::mem::replace(&mut self.entries[position].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Get the value stored for a key
    pub fn get(&self, key: &K) -> Option<&V> {
        self.index.get(key).map(|&position| &self.entries[position].1)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the lookup has no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }
}

impl<K, V> Default for Lookup<K, V>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Debug, PartialEq)]
    struct Edge {
        from: Option<&'static str>,
        to: &'static str,
        weight: u32,
    }

    fn edge(from: Option<&'static str>, to: &'static str, weight: u32) -> Edge {
        Edge { from, to, weight }
    }

    fn sample_edges() -> Vec<Edge> {
        vec![
            edge(Some("a"), "x", 1),
            edge(Some("b"), "y", 2),
            edge(None, "z", 3),
            edge(Some("a"), "w", 4),
            edge(Some("c"), "x", 5),
            edge(Some("b"), "v", 6),
        ]
    }

    #[test]
    fn test_group_by_collects_in_input_order() {
        let edges = sample_edges();
        let groups = group_by(&edges, |e| e.from);

        let weights: Vec<u32> = groups[&"a"].iter().map(|e| e.weight).collect();
        assert_eq!(weights, vec![1, 4]);

        let weights: Vec<u32> = groups[&"b"].iter().map(|e| e.weight).collect();
        assert_eq!(weights, vec![2, 6]);

        assert_eq!(groups[&"c"].len(), 1);
    }

    #[test]
    fn test_group_by_drops_absent_keys() {
        let edges = sample_edges();
        let groups = group_by(&edges, |e| e.from);

        let grouped: usize = groups.values().map(Vec::len).sum();
        assert_eq!(grouped, 5);
        assert!(groups.values().flatten().all(|e| e.weight != 3));
    }

    #[test]
    fn test_group_by_key_set_matches_distinct_keys() {
        let edges = sample_edges();
        let groups = group_by(&edges, |e| e.from);

        let expected: HashSet<&str> = edges.iter().filter_map(|e| e.from).collect();
        let actual: HashSet<&str> = groups.keys().copied().collect();
        assert_eq!(actual, expected);

        for (key, members) in &groups {
            assert!(members.iter().all(|e| e.from == Some(*key)));
        }
    }

    #[test]
    fn test_group_by_borrowed_string_keys() {
        let edges = sample_edges();
        let groups = group_by(&edges, |e| Some(e.to));

        assert_eq!(groups.len(), 5);
        assert_eq!(groups[&"x"].len(), 2);
    }

    #[test]
    fn test_group_by_empty_input() {
        let edges: Vec<Edge> = Vec::new();
        let groups = group_by(&edges, |e| e.from);
        assert!(groups.is_empty());
    }

    #[test]
    fn test_to_lookup_last_write_wins() {
        let edges = sample_edges();
        let lookup = to_lookup(&edges, |e| Some(e.to), |e| e.weight);

        assert_eq!(lookup.get(&"x"), Some(&5));
        assert_eq!(lookup.get(&"y"), Some(&2));
        assert_eq!(lookup.len(), 5);
    }

    #[test]
    fn test_to_lookup_drops_absent_keys() {
        let edges = sample_edges();
        let lookup = to_lookup(&edges, |e| e.from, |e| e.to);

        assert_eq!(lookup.len(), 3);
        assert_eq!(lookup.get(&"a"), Some(&"w"));
        assert!(lookup.iter().all(|(_, to)| *to != "z"));
    }

    #[test]
    fn test_to_lookup_keeps_first_insertion_order() {
        let edges = sample_edges();
        let lookup = to_lookup(&edges, |e| Some(e.to), |e| e.weight);

        let keys: Vec<&str> = lookup.iter().map(|(key, _)| *key).collect();
        assert_eq!(keys, vec!["x", "y", "z", "w", "v"]);
    }

    #[test]
    fn test_to_membership_marks_every_key() {
        let edges = sample_edges();
        let lookup = to_membership(&edges, |e| e.from);

        assert_eq!(lookup.len(), 3);
        assert!(lookup.iter().all(|(_, present)| *present));
        assert_eq!(lookup.get(&"c"), Some(&true));
        assert_eq!(lookup.get(&"z"), None);
    }

    #[test]
    fn test_lookup_insert_returns_replaced_value() {
        let mut lookup = Lookup::new();
        assert!(lookup.is_empty());
        assert_eq!(lookup.insert("k", 1), None);
        assert_eq!(lookup.insert("j", 2), None);
        assert_eq!(lookup.insert("k", 3), Some(1));

        let entries: Vec<(&str, i32)> = lookup.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(entries, vec![("k", 3), ("j", 2)]);
    }
}
