//! Collapses candidate tuples that share a canonical key.

use crate::error::Result;
use crate::schema::Schema;
use crate::tuple::Tuple;
use ahash::AHashMap;

/// Keeps one tuple per canonical key. A later tuple with an existing key
/// replaces the earlier one.
#[derive(Debug, Default)]
pub struct Deduplicator {
    rows: AHashMap<String, Tuple>,
    seen: usize,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a candidate. Returns `true` if it replaced a tuple with the same key.
    pub fn insert(&mut self, schema: &Schema, tuple: Tuple) -> Result<bool> {
        let key = tuple.canonical_key(schema)?;
        self.seen += 1;
        Ok(self.rows.insert(key, tuple).is_some())
    }

    /// Distinct tuples held
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Candidates offered so far, duplicates included
    pub fn seen(&self) -> usize {
        self.seen
    }

    pub fn duplicates(&self) -> usize {
        self.seen - self.rows.len()
    }

    /// Distinct tuples ordered by canonical key, so output is reproducible
    /// for a given seed.
    pub fn into_sorted(self) -> Vec<Tuple> {
        let mut rows: Vec<(String, Tuple)> = self.rows.into_iter().collect();
        rows.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        rows.into_iter().map(|(_, tuple)| tuple).collect()
    }
}
