//! The filter predicate set.
//!
//! Each filter dimension compiles to its own seeker [`Query`], and each has
//! a pure `(record, state) -> bool` test. The combined predicate is the
//! conjunction of all of them:
//!
//! ```text
//! search   OR over the searchable fields, substring, case-folded
//! category Field: equality / AnyTag: any tag contains the value
//! location substring of the location field; absent never matches
//! bucket   enum equality; unknown tokens are ignored
//! joined   joined flag is set; only when the viewer is authenticated
//! ```

use eventhub_seeker::{Clause, ClauseValue, Op, Query, Seekable};
use tracing::debug;

use crate::config::FeatureFlags;
use crate::filter::{FilterDimension, FilterState};
use crate::profile::{CategoryMatch, Profile};

/// Predicates for one listing profile.
#[derive(Debug, Clone, Copy)]
pub struct PredicateSet<'p> {
    profile: &'p Profile,
    flags: FeatureFlags,
}

impl<'p> PredicateSet<'p> {
    pub fn new(profile: &'p Profile, flags: FeatureFlags) -> Self {
        PredicateSet { profile, flags }
    }

    /// Whether `dimension` can filter at all under this profile and flags.
    pub fn is_active(&self, dimension: FilterDimension) -> bool {
        match dimension {
            FilterDimension::Joined => {
                self.flags.authenticated && self.profile.supports(dimension)
            }
            other => self.profile.supports(other),
        }
    }

    /// Query for a single dimension. Empty when the dimension is at its
    /// default, unsupported, or given an unknown bucket token.
    pub fn dimension_query(&self, dimension: FilterDimension, state: &FilterState) -> Query {
        let query = Query::new();
        if !self.is_active(dimension) || state.is_default(dimension) {
            return query;
        }
        let profile = self.profile;

        match dimension {
            FilterDimension::Search => match state.search_text() {
                Some(text) => profile
                    .search_fields
                    .iter()
                    .fold(query, |q, field| q.or_contains(field, text)),
                None => query,
            },
            FilterDimension::Category => {
                match (&profile.category, state.category.value()) {
                    (Some(CategoryMatch::Field(field)), Some(value)) => query.and_eq(field, value),
                    (Some(CategoryMatch::AnyTag(field)), Some(value)) => {
                        query.and_contains(field, value)
                    }
                    _ => query,
                }
            }
            FilterDimension::Location => {
                match (&profile.location_field, state.location.value()) {
                    (Some(field), Some(value)) => query.and_contains(field, value),
                    _ => query,
                }
            }
            FilterDimension::Bucket => {
                let (Some(bucket), Some(token)) = (&profile.bucket, state.bucket.value()) else {
                    return query;
                };
                match bucket.discriminant(token) {
                    Some(d) => query.and_clause(Clause::new(
                        bucket.field.as_str(),
                        Op::Eq,
                        ClauseValue::Enum(d),
                    )),
                    None => {
                        debug!(token, "unknown bucket token, ignoring");
                        query
                    }
                }
            }
            FilterDimension::Joined => match &profile.joined_field {
                Some(field) => query.and_eq(field, true),
                None => query,
            },
        }
    }

    /// The conjunction of every dimension, as one query.
    pub fn query(&self, state: &FilterState) -> Query {
        FilterDimension::ALL
            .into_iter()
            .map(|d| self.dimension_query(d, state))
            .fold(Query::new(), merge)
    }

    pub fn matches<R: Seekable>(&self, record: &R, state: &FilterState) -> bool {
        self.query(state).matches(record, R::accessor)
    }

    fn check<R: Seekable>(&self, dimension: FilterDimension, record: &R, state: &FilterState) -> bool {
        self.dimension_query(dimension, state)
            .matches(record, R::accessor)
    }

    pub fn matches_search<R: Seekable>(&self, record: &R, state: &FilterState) -> bool {
        self.check(FilterDimension::Search, record, state)
    }

    pub fn matches_category<R: Seekable>(&self, record: &R, state: &FilterState) -> bool {
        self.check(FilterDimension::Category, record, state)
    }

    pub fn matches_location<R: Seekable>(&self, record: &R, state: &FilterState) -> bool {
        self.check(FilterDimension::Location, record, state)
    }

    pub fn matches_bucket<R: Seekable>(&self, record: &R, state: &FilterState) -> bool {
        self.check(FilterDimension::Bucket, record, state)
    }

    pub fn matches_joined<R: Seekable>(&self, record: &R, state: &FilterState) -> bool {
        self.check(FilterDimension::Joined, record, state)
    }
}

// Only the search dimension produces OR clauses, so merging groups keeps
// the per-dimension meaning.
fn merge(acc: Query, next: Query) -> Query {
    let acc = next.and_clauses().iter().cloned().fold(acc, Query::and_clause);
    let acc = next.or_clauses().iter().cloned().fold(acc, Query::or_clause);
    next.not_clauses().iter().cloned().fold(acc, Query::not_clause)
}
