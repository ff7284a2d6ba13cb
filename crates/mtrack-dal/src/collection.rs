use std::collections::HashSet;

use mtrack_types::Record;
use serde::{Deserialize, Serialize};

/// All tracked records in creation order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection(Vec<Record>);

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Record] {
        &self.0
    }

    pub fn get(&self, id: i64) -> Option<&Record> {
        self.0.iter().find(|r| r.id == id)
    }

    pub fn get_mut(&mut self, id: i64) -> Option<&mut Record> {
        self.0.iter_mut().find(|r| r.id == id)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.get(id).is_some()
    }

    pub(crate) fn push(&mut self, record: Record) {
        self.0.push(record);
    }

    pub(crate) fn remove(&mut self, id: i64) -> Option<Record> {
        let idx = self.0.iter().position(|r| r.id == id)?;
        Some(self.0.remove(idx))
    }

    pub fn max_id(&self) -> Option<i64> {
        self.0.iter().map(|r| r.id).max()
    }

    /// Id for a new record - current time if it is free and keeps ids growing,
    /// otherwise next number after the highest id in use.
    /// `None` when the highest id in use is `i64::MAX`.
    pub fn next_id(&self, now_millis: i64) -> Option<i64> {
        match self.max_id() {
            Some(max) if max >= now_millis => max.checked_add(1),
            _ => Some(now_millis),
        }
    }

    /// First id which appears more than once
    pub fn duplicate_id(&self) -> Option<i64> {
        let mut seen = HashSet::with_capacity(self.0.len());
        self.0.iter().map(|r| r.id).find(|id| !seen.insert(*id))
    }
}

impl From<Vec<Record>> for Collection {
    fn from(value: Vec<Record>) -> Self {
        Collection(value)
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
