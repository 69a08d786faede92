//! The listing pipeline: store → predicates → comparator → view.
//!
//! Every render recomputes from the full store. There is no cache and no
//! failure path: records were normalized on load and unknown selector or
//! sort tokens are no-ops.
//!
//! Category and location options are enumerated by the store itself. A
//! selector value that no record carries, under that dimension's own match
//! rule, is outside the enumeration: it filters nothing and shows no chip.

use std::borrow::Cow;

use serde::Serialize;
use tracing::debug;

use crate::config::FeatureFlags;
use crate::filter::{FilterChip, FilterDimension, FilterState};
use crate::predicate::PredicateSet;
use crate::profile::{Listing, Profile};
use crate::store::RecordStore;

/// Whether a view has anything to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewState {
    Results(usize),
    Empty,
}

/// One rendered listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingView<'a, R> {
    /// Matching records, post-filtering and post-ordering.
    pub records: Vec<&'a R>,

    pub result_count: usize,

    /// Store size, for "showing X of Y".
    pub total: usize,

    /// One chip per dimension that is currently filtering.
    pub chips: Vec<FilterChip>,

    pub state: ViewState,
}

impl<R> ListingView<'_, R> {
    pub fn is_empty(&self) -> bool {
        self.state == ViewState::Empty
    }

    /// Whether any filter is narrowing the result.
    pub fn is_filtered(&self) -> bool {
        !self.chips.is_empty()
    }
}

/// A record store plus the configuration to list it.
#[derive(Debug, Clone)]
pub struct Pipeline<R> {
    store: RecordStore<R>,
    profile: Profile,
    flags: FeatureFlags,
}

impl<R: Listing> Pipeline<R> {
    /// Uses the record type's default profile and no feature flags.
    pub fn new(store: RecordStore<R>) -> Self {
        Pipeline {
            store,
            profile: R::profile(),
            flags: FeatureFlags::default(),
        }
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_flags(mut self, flags: FeatureFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn store(&self) -> &RecordStore<R> {
        &self.store
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn flags(&self) -> FeatureFlags {
        self.flags
    }

    pub fn predicates(&self) -> PredicateSet<'_> {
        PredicateSet::new(&self.profile, self.flags)
    }

    pub fn render(&self, state: &FilterState) -> ListingView<'_, R> {
        let predicates = self.predicates();
        let effective = self.known_selectors(&predicates, state);
        let state = &*effective;
        let query = predicates.query(state);
        let mut records = self.store.select(&query);

        let sort = state.sort.as_deref();
        if sort.is_some() && self.profile.comparators.select(sort).is_none() {
            debug!(kind = R::KIND, sort, "unknown sort key, keeping store order");
        }
        self.profile.comparators.sort(&mut records, sort);

        let chips = self.chips(&predicates, state);
        let result_count = records.len();
        let view_state = match result_count {
            0 => ViewState::Empty,
            n => ViewState::Results(n),
        };

        debug!(
            kind = R::KIND,
            total = self.store.len(),
            result_count,
            chips = chips.len(),
            "rendered listing"
        );

        ListingView {
            records,
            result_count,
            total: self.store.len(),
            chips,
            state: view_state,
        }
    }

    fn known_selectors<'s>(
        &self,
        predicates: &PredicateSet<'_>,
        state: &'s FilterState,
    ) -> Cow<'s, FilterState> {
        let mut effective = Cow::Borrowed(state);
        for dimension in [FilterDimension::Category, FilterDimension::Location] {
            let query = predicates.dimension_query(dimension, state);
            if query.is_empty() || query.any(self.store.records(), R::accessor) {
                continue;
            }
            debug!(
                kind = R::KIND,
                dimension = dimension.as_str(),
                "selector value matches no record, ignoring"
            );
            effective.to_mut().clear(dimension);
        }
        effective
    }

    // A chip whose dimension compiles to no clauses would clear nothing.
    fn chips(&self, predicates: &PredicateSet<'_>, state: &FilterState) -> Vec<FilterChip> {
        state
            .chips()
            .into_iter()
            .filter(|chip| !predicates.dimension_query(chip.dimension, state).is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Club, Event};
    use crate::store::FixtureSource;
    use crate::filter::FilterDimension;

    fn clubs() -> Pipeline<Club> {
        Pipeline::new(RecordStore::load(&FixtureSource).unwrap())
    }

    fn names<'a>(view: &ListingView<'a, Club>) -> Vec<&'a str> {
        view.records.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn default_state_is_identity() {
        let pipeline = clubs();
        let view = pipeline.render(&FilterState::new());
        let ids: Vec<u32> = view.records.iter().map(|c| c.id).collect();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
        assert_eq!(view.state, ViewState::Results(8));
        assert!(!view.is_filtered());
    }

    #[test]
    fn sort_by_name_uses_collation() {
        let pipeline = clubs();
        let view = pipeline.render(&FilterState::new().with_sort("name"));
        assert_eq!(names(&view)[0], "Book Worms United");
        assert_eq!(names(&view)[7], "Tech Innovators");
    }

    #[test]
    fn rating_sort_puts_unrated_last() {
        let pipeline = clubs();
        let view = pipeline.render(&FilterState::new().with_sort("rating"));
        assert_eq!(names(&view)[0], "Creative Lens Society");
        assert_eq!(names(&view)[7], "Global Cuisine Club");
    }

    #[test]
    fn unknown_sort_key_is_identity() {
        let pipeline = clubs();
        let view = pipeline.render(&FilterState::new().with_sort("popularity"));
        assert_eq!(names(&view)[0], "Tech Innovators");
    }

    #[test]
    fn joined_chip_hidden_when_anonymous() {
        let state = FilterState::new().with_joined_only(true);

        let anonymous = clubs();
        let view = anonymous.render(&state);
        assert_eq!(view.result_count, 8);
        assert!(view.chips.is_empty());

        let pipeline = clubs().with_flags(FeatureFlags { authenticated: true });
        let view = pipeline.render(&state);
        assert_eq!(names(&view), ["Tech Innovators", "Creative Lens Society"]);
        assert_eq!(view.chips[0].dimension, FilterDimension::Joined);
    }

    #[test]
    fn events_price_sort_puts_unpriced_last() {
        let pipeline: Pipeline<Event> = Pipeline::new(RecordStore::load(&FixtureSource).unwrap());
        let view = pipeline.render(&FilterState::new().with_sort("price"));
        let ids: Vec<u32> = view.records.iter().map(|e| e.id).collect();
        assert_eq!(ids, [2, 6, 4, 1, 5, 3]);
    }

    #[test]
    fn bucket_chip_only_for_known_tokens() {
        let pipeline: Pipeline<Event> = Pipeline::new(RecordStore::load(&FixtureSource).unwrap());
        let view = pipeline.render(&FilterState::new().with_bucket("completed"));
        assert_eq!(view.result_count, 1);
        assert_eq!(view.chips.len(), 1);

        let view = pipeline.render(&FilterState::new().with_bucket("someday"));
        assert_eq!(view.result_count, 6);
        assert!(view.chips.is_empty());
    }

    #[test]
    fn custom_profile_replaces_comparators() {
        use crate::sort::ComparatorMap;
        use eventhub_seeker::OrderBy;

        let profile = Club::profile().comparators(
            ComparatorMap::new().with("members", [OrderBy::asc(Club::MEMBERS)]),
        );
        let pipeline = clubs().with_profile(profile);
        let view = pipeline.render(&FilterState::new().with_sort("members"));
        assert_eq!(names(&view)[0], "Global Cuisine Club");
    }

    #[test]
    fn selector_values_no_record_carries_are_ignored() {
        let pipeline = clubs();
        let view = pipeline.render(&FilterState::new().with_category("Gardening"));
        assert_eq!(view.result_count, 8);
        assert!(!view.is_filtered());

        // Known values still combine with a search that empties the view.
        let state = FilterState::new().with_category("arts").with_search("zzz");
        let view = pipeline.render(&state);
        assert!(view.is_empty());
        assert_eq!(view.chips.len(), 2);
    }

    #[test]
    fn view_serializes() {
        let pipeline = clubs();
        let view = pipeline.render(&FilterState::new().with_search("zzz"));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["resultCount"], 0);
        assert_eq!(json["total"], 8);
        assert_eq!(json["state"], "empty");
        assert_eq!(json["chips"][0]["dimension"], "search");
    }
}
