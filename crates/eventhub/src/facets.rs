//! Selector options derived from a store.
//!
//! Option lists always start with the `all` sentinel. Values are
//! de-duplicated case-insensitively, keeping the first spelling seen, and
//! sorted with the same collation as name sorting.

use std::collections::HashSet;

use eventhub_seeker::{collate, Value};
use serde::Serialize;

use crate::filter::ALL;
use crate::profile::{Listing, Profile};
use crate::store::RecordStore;

/// Options for every selector of one listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    pub categories: Vec<String>,
    pub locations: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub buckets: Vec<String>,
    pub sort_keys: Vec<String>,
}

impl Facets {
    pub fn collect<R: Listing>(store: &RecordStore<R>, profile: &Profile) -> Self {
        let buckets = match &profile.bucket {
            Some(bucket) => std::iter::once(ALL)
                .chain(bucket.tokens())
                .map(String::from)
                .collect(),
            None => Vec::new(),
        };
        Facets {
            categories: categories(store, profile),
            locations: locations(store, profile),
            buckets,
            sort_keys: profile.comparators.keys().map(String::from).collect(),
        }
    }
}

/// Category options: the category field for clubs, tags for events.
pub fn categories<R: Listing>(store: &RecordStore<R>, profile: &Profile) -> Vec<String> {
    match &profile.category {
        Some(category) => distinct(store, category.field()),
        None => vec![ALL.to_string()],
    }
}

pub fn locations<R: Listing>(store: &RecordStore<R>, profile: &Profile) -> Vec<String> {
    match &profile.location_field {
        Some(field) => distinct(store, field),
        None => vec![ALL.to_string()],
    }
}

fn distinct<R: Listing>(store: &RecordStore<R>, field: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut values: Vec<&str> = Vec::new();

    for record in store.records() {
        let found: &[String] = match record.seeker_field_value(field) {
            Value::List(items) => items,
            Value::String(s) => {
                if seen.insert(s.to_lowercase()) {
                    values.push(s);
                }
                continue;
            }
            _ => continue,
        };
        for item in found {
            if seen.insert(item.to_lowercase()) {
                values.push(item);
            }
        }
    }

    values.sort_by(|a, b| collate(a, b));
    std::iter::once(ALL)
        .chain(values)
        .map(String::from)
        .collect()
}
