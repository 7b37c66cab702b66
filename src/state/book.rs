//! The page's ordered, in-memory expense collection.

use chrono::{DateTime, Utc};

use crate::models::{ExpenseRecord, TimeRange};

#[cfg(test)]
#[path = "book_test.rs"]
mod book_test;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpenseBook {
    records: Vec<ExpenseRecord>,
}

impl ExpenseBook {
    pub fn from_records(records: Vec<ExpenseRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&ExpenseRecord> {
        self.records.iter().find(|r| r.id == Some(id))
    }

    /// A fresh id: the clock in milliseconds, bumped past every id already
    /// in the book.
    pub fn next_id(&self, now_ms: i64) -> i64 {
        let max_id = self.records.iter().filter_map(|r| r.id).max();
        match max_id {
            Some(max) if max >= now_ms => max.saturating_add(1),
            _ => now_ms,
        }
    }

    pub fn push(&mut self, record: ExpenseRecord) {
        self.records.push(record);
    }

    pub fn prepend(&mut self, record: ExpenseRecord) {
        self.records.insert(0, record);
    }

    /// Swaps the record with `id` in place and returns the old one.
    pub fn replace(&mut self, id: i64, record: ExpenseRecord) -> Option<ExpenseRecord> {
        let slot = self.records.iter_mut().find(|r| r.id == Some(id))?;
        Some(std::mem::replace(slot, record))
    }

    pub fn remove(&mut self, id: i64) -> Option<ExpenseRecord> {
        let index = self.records.iter().position(|r| r.id == Some(id))?;
        Some(self.records.remove(index))
    }

    /// Records dated inside `range` as of `now`, in collection order.
    pub fn in_range(&self, range: TimeRange, now: DateTime<Utc>) -> Vec<&ExpenseRecord> {
        self.records
            .iter()
            .filter(|r| r.falls_within(range, now))
            .collect()
    }
}
