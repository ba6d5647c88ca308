//! Cross-reference index.
//!
//! Builders never touch the index. Whoever drives them files each parsed
//! signature under its namespace and identifier; duplicates are kept so
//! they can be reported.

use std::collections::HashMap;

use serde::Serialize;

/// One indexed signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    pub namespace: String,
    pub directive: String,
    pub identifier: String,
    /// Plain-text rendering, for listings.
    pub display: String,
}

/// A namespace + identifier pair claimed more than once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Duplicate<'a> {
    pub namespace: &'a str,
    pub identifier: &'a str,
    pub count: usize,
}

#[derive(Debug, Default)]
pub struct ObjectIndex {
    entries: Vec<IndexEntry>,
    by_key: HashMap<(String, String), Vec<usize>>,
}

impl ObjectIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entry: IndexEntry) {
        let key = (entry.namespace.clone(), entry.identifier.clone());
        self.by_key.entry(key).or_default().push(self.entries.len());
        self.entries.push(entry);
    }

    /// All entries filed under `namespace` / `identifier`, in insertion order.
    pub fn lookup<'a>(
        &'a self,
        namespace: &str,
        identifier: &str,
    ) -> impl Iterator<Item = &'a IndexEntry> + 'a {
        self.by_key
            .get(&(namespace.to_string(), identifier.to_string()))
            .into_iter()
            .flatten()
            .map(|&i| &self.entries[i])
    }

    /// Keys with more than one entry, sorted by namespace then identifier.
    pub fn duplicates(&self) -> Vec<Duplicate<'_>> {
        let mut dups: Vec<_> = self
            .by_key
            .iter()
            .filter(|(_, indices)| indices.len() > 1)
            .map(|((namespace, identifier), indices)| Duplicate {
                namespace,
                identifier,
                count: indices.len(),
            })
            .collect();
        dups.sort_by(|a, b| (a.namespace, a.identifier).cmp(&(b.namespace, b.identifier)));
        dups
    }

    pub fn iter(&self) -> impl Iterator<Item = &IndexEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(namespace: &str, identifier: &str) -> IndexEntry {
        IndexEntry {
            namespace: namespace.to_string(),
            directive: namespace.to_string(),
            identifier: identifier.to_string(),
            display: identifier.to_string(),
        }
    }

    #[test]
    fn test_lookup() {
        let mut index = ObjectIndex::new();
        index.add(entry("cmd", "plover:lookup"));
        index.add(entry("operator", "{^}"));

        assert_eq!(index.len(), 2);
        assert_eq!(index.lookup("cmd", "plover:lookup").count(), 1);
        assert_eq!(index.lookup("operator", "plover:lookup").count(), 0);
    }

    #[test]
    fn test_duplicates_are_kept_and_reported() {
        let mut index = ObjectIndex::new();
        index.add(entry("cmd", "plover:set_config"));
        index.add(entry("cmd", "plover:set_config"));
        index.add(entry("operator", "plover:set_config"));

        assert_eq!(index.lookup("cmd", "plover:set_config").count(), 2);
        assert_eq!(
            index.duplicates(),
            vec![Duplicate {
                namespace: "cmd",
                identifier: "plover:set_config",
                count: 2,
            }]
        );
    }

    #[test]
    fn test_empty_index() {
        let index = ObjectIndex::new();
        assert!(index.is_empty());
        assert!(index.duplicates().is_empty());
    }
}
