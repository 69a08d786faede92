//! A listing page: one pipeline and the one current filter state.
//!
//! Changes are applied one at a time through `&mut self`; [`ListingPage::view`]
//! always reflects the latest state.

use tracing::debug;

use crate::filter::{FilterChip, FilterDimension, FilterState, Selector};
use crate::pipeline::{ListingView, Pipeline};
use crate::profile::Listing;

/// A user-initiated change to the filter state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterChange {
    Search(String),
    Category(Selector),
    Location(Selector),
    Bucket(Selector),
    Sort(Option<String>),
    JoinedOnly(bool),
    Clear(FilterDimension),
    ClearAll,
}

#[derive(Debug, Clone)]
pub struct ListingPage<R> {
    pipeline: Pipeline<R>,
    state: FilterState,
}

impl<R: Listing> ListingPage<R> {
    pub fn new(pipeline: Pipeline<R>) -> Self {
        ListingPage::with_state(pipeline, FilterState::default())
    }

    pub fn with_state(pipeline: Pipeline<R>, state: FilterState) -> Self {
        ListingPage { pipeline, state }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn pipeline(&self) -> &Pipeline<R> {
        &self.pipeline
    }

    pub fn apply(&mut self, change: FilterChange) {
        debug!(kind = R::KIND, ?change, "filter change");
        let state = &mut self.state;
        match change {
            FilterChange::Search(text) => state.search = text,
            FilterChange::Category(selector) => state.category = selector,
            FilterChange::Location(selector) => state.location = selector,
            FilterChange::Bucket(selector) => state.bucket = selector,
            FilterChange::Sort(key) => state.sort = key.filter(|k| !k.trim().is_empty()),
            FilterChange::JoinedOnly(on) => state.joined_only = on,
            FilterChange::Clear(dimension) => state.clear(dimension),
            FilterChange::ClearAll => state.clear_all(),
        }
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.apply(FilterChange::Search(text.into()));
    }

    pub fn select_category(&mut self, category: impl Into<Selector>) {
        self.apply(FilterChange::Category(category.into()));
    }

    pub fn select_location(&mut self, location: impl Into<Selector>) {
        self.apply(FilterChange::Location(location.into()));
    }

    pub fn select_bucket(&mut self, bucket: impl Into<Selector>) {
        self.apply(FilterChange::Bucket(bucket.into()));
    }

    pub fn select_sort(&mut self, key: Option<&str>) {
        self.apply(FilterChange::Sort(key.map(String::from)));
    }

    pub fn set_joined_only(&mut self, joined_only: bool) {
        self.apply(FilterChange::JoinedOnly(joined_only));
    }

    pub fn clear(&mut self, dimension: FilterDimension) {
        self.apply(FilterChange::Clear(dimension));
    }

    /// Applies a chip's clear action.
    pub fn clear_chip(&mut self, chip: &FilterChip) {
        self.apply(FilterChange::Clear(chip.dimension));
    }

    pub fn clear_all(&mut self) {
        self.apply(FilterChange::ClearAll);
    }

    pub fn view(&self) -> ListingView<'_, R> {
        self.pipeline.render(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::model::Club;
    use crate::store::{FixtureSource, RecordStore};

    fn page() -> ListingPage<Club> {
        ListingPage::new(Pipeline::new(RecordStore::load(&FixtureSource).unwrap()))
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn chip_clear_is_logged_as_a_change() {
        let logs = Captured::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut page = page();
            page.select_category("Arts");
            let chip = page.view().chips[0].clone();
            page.clear_chip(&chip);
            assert!(page.state().category.is_all());
        });

        let out = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(out.contains("change=Clear(Category)"), "{out}");
    }

    #[test]
    fn changes_apply_in_order() {
        let mut page = page();
        page.set_search("e");
        page.select_sort(Some("members"));
        page.select_location("CA");
        let view = page.view();
        let names: Vec<&str> = view.records.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Tech Innovators", "Creative Lens Society"]);
        assert_eq!(view.chips.len(), 2);
    }

    #[test]
    fn chip_clear_restores_dimension() {
        let mut page = page();
        page.select_category("Arts");
        page.set_search("nothing-like-this");
        let chip = page.view().chips[1].clone();
        assert_eq!(chip.dimension, FilterDimension::Category);
        page.clear_chip(&chip);
        assert!(page.state().category.is_all());
        assert!(page.view().is_empty());

        page.clear(FilterDimension::Search);
        assert_eq!(page.view().result_count, 8);
    }

    #[test]
    fn clear_all_restores_store_order() {
        let mut page = page();
        page.select_sort(Some("name"));
        page.select_category("music");
        page.clear_all();
        let ids: Vec<u32> = page.view().records.iter().map(|c| c.id).collect();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
        assert_eq!(page.state(), &FilterState::default());
    }

    #[test]
    fn blank_sort_key_clears_sort() {
        let mut page = page();
        page.select_sort(Some("rating"));
        page.select_sort(Some(" "));
        assert_eq!(page.state().sort, None);
    }
}
