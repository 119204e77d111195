// file: src/store/aggregate.rs
// description: deduplicated per-category sets accumulated across a batch of documents
// reference: set union semantics over canonical entity strings

use crate::models::{Category, Entity};
use std::collections::{BTreeMap, BTreeSet};

/// Insert-only between resets; one writer at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateStore {
    buckets: BTreeMap<Category, BTreeSet<String>>,
}

impl AggregateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the value was not already present.
    pub fn insert(&mut self, category: Category, value: impl Into<String>) -> bool {
        self.buckets.entry(category).or_default().insert(value.into())
    }

    pub fn insert_entity(&mut self, entity: &Entity) -> bool {
        self.insert(entity.category(), entity.canonical())
    }

    /// Adds every entity; returns how many were new.
    pub fn apply<'a>(&mut self, entities: impl IntoIterator<Item = &'a Entity>) -> usize {
        entities
            .into_iter()
            .filter(|entity| self.insert_entity(entity))
            .count()
    }

    pub fn snapshot(&self, category: Category) -> BTreeSet<String> {
        self.buckets.get(&category).cloned().unwrap_or_default()
    }

    pub fn contains(&self, category: Category, value: &str) -> bool {
        self.buckets
            .get(&category)
            .is_some_and(|set| set.contains(value))
    }

    pub fn count(&self, category: Category) -> usize {
        self.buckets.get(&category).map_or(0, BTreeSet::len)
    }

    pub fn counts(&self) -> BTreeMap<Category, usize> {
        Category::ALL
            .into_iter()
            .map(|category| (category, self.count(category)))
            .collect()
    }

    pub fn total(&self) -> usize {
        self.buckets.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn clear(&mut self) {
        self.buckets.clear();
    }
}
