//! Insertion-ordered record storage for one entity kind.
//!
//! Lookups are linear scans. Collections hold at most a few thousand rows
//! in practice, and keeping a plain vector preserves the order records
//! were added in, which every table view relies on.

use crate::model::Record;

#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    records: Vec<Record<T>>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record at the end of the collection.
    /// Identity uniqueness is the caller's responsibility.
    pub fn insert(&mut self, id: String, data: T) {
        self.records.push(Record { id, data });
    }

    /// Replaces the fields of the record with the given id, keeping its position.
    /// Returns false and leaves the collection untouched if no record matches.
    pub fn replace(&mut self, id: &str, data: T) -> bool {
        match self.records.iter_mut().find(|record| record.id == id) {
            Some(record) => {
                record.data = data;
                true
            }
            None => false,
        }
    }

    /// Removes the record with the given id.
    /// Returns false if no record matches.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        self.records.len() != before
    }

    pub fn get(&self, id: &str) -> Option<&Record<T>> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record<T>> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[Record<T>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T> FromIterator<Record<T>> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = Record<T>>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a Record<T>;
    type IntoIter = std::slice::Iter<'a, Record<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
