//! Query builder and executor.
//!
//! A [`Query`] holds three clause groups and a list of ordering clauses:
//!
//! ```text
//! match = (all AND clauses match)
//!       ∧ (at least one OR clause matches, OR no OR clauses exist)
//!       ∧ (no NOT clause matches)
//! ```
//!
//! Execution never reorders beyond what the ordering clauses ask for: the
//! filter keeps input order and the sort is stable.

use crate::clause::{Clause, ClauseValue};
use crate::error::Result;
use crate::op::Op;
use crate::ordering::{compare_by_orderings, Dir, OrderBy};
use crate::value::Value;

/// A query for filtering and ordering collections.
///
/// ```
/// use eventhub_seeker::{Number, Query, Value};
///
/// struct Event {
///     title: String,
///     location: String,
///     attendees: u32,
/// }
///
/// fn accessor<'a>(e: &'a Event, field: &str) -> Value<'a> {
///     match field {
///         "title" => Value::String(&e.title),
///         "location" => Value::String(&e.location),
///         "attendees" => Value::Number(Number::from(e.attendees)),
///         _ => Value::None,
///     }
/// }
///
/// let events = vec![
///     Event { title: "Bootcamp".into(), location: "Seattle, WA".into(), attendees: 124 },
///     Event { title: "Jam".into(), location: "Austin, TX".into(), attendees: 80 },
/// ];
///
/// let query = Query::new()
///     .and_contains("location", "seattle")
///     .order_desc("attendees");
/// let found = query.filter(&events, accessor);
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].title, "Bootcamp");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    and_clauses: Vec<Clause>,
    or_clauses: Vec<Clause>,
    not_clauses: Vec<Clause>,
    orderings: Vec<OrderBy>,
}

impl Query {
    /// Creates an empty query, which matches everything in input order.
    pub fn new() -> Self {
        Query::default()
    }

    // ========================================================================
    // Clause builders
    // ========================================================================

    pub fn and(self, field: &str, op: Op, value: impl Into<ClauseValue>) -> Self {
        self.and_clause(Clause::new(field, op, value))
    }

    pub fn or(self, field: &str, op: Op, value: impl Into<ClauseValue>) -> Self {
        self.or_clause(Clause::new(field, op, value))
    }

    pub fn not(self, field: &str, op: Op, value: impl Into<ClauseValue>) -> Self {
        self.not_clause(Clause::new(field, op, value))
    }

    pub fn and_clause(mut self, clause: Clause) -> Self {
        self.and_clauses.push(clause);
        self
    }

    pub fn or_clause(mut self, clause: Clause) -> Self {
        self.or_clauses.push(clause);
        self
    }

    pub fn not_clause(mut self, clause: Clause) -> Self {
        self.not_clauses.push(clause);
        self
    }

    pub fn and_eq(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Eq, value)
    }

    pub fn and_contains(self, field: &str, value: &str) -> Self {
        self.and(field, Op::Contains, value)
    }

    pub fn and_gte(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Gte, value)
    }

    pub fn and_lte(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Lte, value)
    }

    /// Adds an AND set-membership clause over enum discriminants.
    pub fn and_in<I>(self, field: &str, values: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        self.and(field, Op::In, ClauseValue::EnumSet(values.into_iter().collect()))
    }

    pub fn or_eq(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.or(field, Op::Eq, value)
    }

    pub fn or_contains(self, field: &str, value: &str) -> Self {
        self.or(field, Op::Contains, value)
    }

    pub fn not_eq(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.not(field, Op::Eq, value)
    }

    pub fn not_contains(self, field: &str, value: &str) -> Self {
        self.not(field, Op::Contains, value)
    }

    // ========================================================================
    // Ordering
    // ========================================================================

    pub fn order_by(mut self, field: &str, dir: Dir) -> Self {
        self.orderings.push(OrderBy::new(field, dir));
        self
    }

    pub fn order_asc(self, field: &str) -> Self {
        self.order_by(field, Dir::Asc)
    }

    pub fn order_desc(self, field: &str) -> Self {
        self.order_by(field, Dir::Desc)
    }

    /// Appends a prepared list of ordering clauses.
    pub fn with_orderings(mut self, orderings: impl IntoIterator<Item = OrderBy>) -> Self {
        self.orderings.extend(orderings);
        self
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    pub fn and_clauses(&self) -> &[Clause] {
        &self.and_clauses
    }

    pub fn or_clauses(&self) -> &[Clause] {
        &self.or_clauses
    }

    pub fn not_clauses(&self) -> &[Clause] {
        &self.not_clauses
    }

    pub fn orderings(&self) -> &[OrderBy] {
        &self.orderings
    }

    /// Returns `true` if this query has no clauses (matches everything).
    pub fn is_empty(&self) -> bool {
        self.and_clauses.is_empty() && self.or_clauses.is_empty() && self.not_clauses.is_empty()
    }

    /// Validates every clause's operator against its value type.
    pub fn validate(&self) -> Result<()> {
        self.clauses().try_for_each(Clause::validate)
    }

    /// Checks every clause against the fields of a sample item.
    ///
    /// Catches accessor/clause type mismatches that would otherwise make a
    /// clause silently never match.
    pub fn validate_against<T, F>(&self, item: &T, accessor: F) -> Result<()>
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        self.clauses()
            .try_for_each(|clause| clause.check_field(&accessor(item, &clause.field)))
    }

    fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.and_clauses
            .iter()
            .chain(&self.or_clauses)
            .chain(&self.not_clauses)
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Tests a single item.
    pub fn matches<T, F>(&self, item: &T, accessor: F) -> bool
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        let hit = |clause: &Clause| clause.matches(&accessor(item, &clause.field));

        self.and_clauses.iter().all(&hit)
            && (self.or_clauses.is_empty() || self.or_clauses.iter().any(&hit))
            && !self.not_clauses.iter().any(&hit)
    }

    /// Returns references to the matching items, ordered by the query's
    /// ordering clauses. Ties keep input order.
    pub fn filter<'a, T, F>(&self, items: &'a [T], accessor: F) -> Vec<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        let mut results: Vec<&'a T> = items
            .iter()
            .filter(|item| self.matches(*item, &accessor))
            .collect();

        if !self.orderings.is_empty() {
            // `sort_by` is stable, which the listing order relies on.
            results.sort_by(|a, b| compare_by_orderings(*a, *b, &self.orderings, &accessor));
        }

        results
    }

    /// Like [`filter`](Self::filter), cloning the results.
    pub fn filter_cloned<T, F>(&self, items: &[T], accessor: F) -> Vec<T>
    where
        T: Clone,
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        self.filter(items, accessor).into_iter().cloned().collect()
    }

    pub fn count<T, F>(&self, items: &[T], accessor: F) -> usize
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        items
            .iter()
            .filter(|item| self.matches(*item, &accessor))
            .count()
    }

    pub fn any<T, F>(&self, items: &[T], accessor: F) -> bool
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        items.iter().any(|item| self.matches(item, &accessor))
    }

    /// Finds the first matching item in input order.
    pub fn find<'a, T, F>(&self, items: &'a [T], accessor: F) -> Option<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        items.iter().find(|item| self.matches(*item, &accessor))
    }
}
