//! Sort comparator selection.
//!
//! A [`ComparatorMap`] maps sort-key tokens (`"members"`, `"name"`, ...) to
//! ordering clauses. Selecting an unknown key is not an error: the listing
//! keeps its input order.

use std::cmp::Ordering;

use eventhub_seeker::{compare_by_orderings, OrderBy, Seekable};

/// Ordered mapping of sort keys to ordering clauses.
///
/// Keys are matched case-insensitively and ignore surrounding whitespace.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparatorMap {
    entries: Vec<(String, Vec<OrderBy>)>,
}

impl ComparatorMap {
    pub fn new() -> Self {
        ComparatorMap::default()
    }

    /// Registers `key`, replacing any previous entry for it.
    pub fn with(mut self, key: &str, orderings: impl IntoIterator<Item = OrderBy>) -> Self {
        let key = normalize_key(key);
        let orderings: Vec<OrderBy> = orderings.into_iter().collect();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = orderings,
            None => self.entries.push((key, orderings)),
        }
        self
    }

    /// Looks up the ordering clauses for a key.
    ///
    /// `None`, blank and unknown keys all select no ordering.
    pub fn select(&self, key: Option<&str>) -> Option<&[OrderBy]> {
        let key = normalize_key(key?);
        if key.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, orderings)| orderings.as_slice())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.select(Some(key)).is_some()
    }

    /// Registered keys, in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Returns a comparator function for `key`, if it is known.
    pub fn comparator<'m, R: Seekable>(
        &'m self,
        key: &str,
    ) -> Option<impl Fn(&R, &R) -> Ordering + 'm> {
        let orderings = self.select(Some(key))?;
        Some(move |a: &R, b: &R| compare_by_orderings(a, b, orderings, &R::accessor))
    }

    /// Stable in-place sort by `key`. Unknown keys leave the slice untouched.
    pub fn sort<R: Seekable>(&self, records: &mut [&R], key: Option<&str>) {
        if let Some(orderings) = self.select(key) {
            records.sort_by(|a, b| compare_by_orderings(*a, *b, orderings, &R::accessor));
        }
    }
}

fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}
