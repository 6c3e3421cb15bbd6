use std::collections::BTreeMap;

use crate::types::AnagramKey;
use crate::utils::anagram_key;

/// A multimap from sorted-character signatures to the `(variant, owner)` pairs that
/// produced them. Buckets are append-only and preserve insertion order; owners may
/// repeat within a bucket. Backed by a `BTreeMap` so iteration order is deterministic.
pub struct AnagramIndex<O> {
    buckets: BTreeMap<AnagramKey, Vec<(String, O)>>,
}

impl<O> AnagramIndex<O> {
    pub fn new() -> Self {
        AnagramIndex {
            buckets: BTreeMap::new(),
        }
    }

    /// Appends `(variant, owner)` to the bucket keyed by the variant's signature.
    pub fn insert(&mut self, variant: &str, owner: O) {
        self.buckets
            .entry(anagram_key(variant))
            .or_default()
            .push((variant.to_string(), owner));
    }

    pub fn bucket(&self, key: &str) -> Option<&[(String, O)]> {
        self.buckets.get(key).map(Vec::as_slice)
    }

    /// Iterates buckets in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&AnagramKey, &[(String, O)])> {
        self.buckets
            .iter()
            .map(|(key, bucket)| (key, bucket.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

impl<O> Default for AnagramIndex<O> {
    fn default() -> Self {
        Self::new()
    }
}
