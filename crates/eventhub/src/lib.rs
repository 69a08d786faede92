//! EventHub - filter, sort and search for event and club listings.
//!
//! A listing is a [`Pipeline`] over a [`RecordStore`]: the store holds the
//! canonical record order, the [`FilterState`] selects and orders a view of
//! it, and a [`ListingPage`] owns the current state and applies changes one
//! at a time.
//!
//! Events and clubs share the same pipeline. What differs between them is a
//! [`Profile`]: searchable fields, how the category selector matches, the
//! location and bucket fields, and the available sort keys.
//!
//! # Quick Start
//!
//! ```rust
//! use eventhub::{Club, FilterState, FixtureSource, Pipeline, RecordStore};
//!
//! let store: RecordStore<Club> = RecordStore::load(&FixtureSource).unwrap();
//! let pipeline = Pipeline::new(store);
//!
//! let view = pipeline.render(&FilterState::new().with_sort("members"));
//! assert_eq!(view.records[0].name, "Entrepreneurs Network");
//!
//! let view = pipeline.render(&FilterState::new().with_search("photo"));
//! assert_eq!(view.result_count, 1);
//! assert_eq!(view.records[0].name, "Creative Lens Society");
//! ```
//!
//! # Filter Semantics
//!
//! ```text
//! visible = search ∧ category ∧ location ∧ bucket ∧ joined
//! ```
//!
//! Each dimension matches everything at its default (blank search, `all`
//! selectors, joined-only off). String matching is case-insensitive. The
//! result keeps store order unless a known sort key is selected, and sorts
//! are stable.

pub mod config;
pub mod error;
pub mod facets;
pub mod filter;
pub mod fixtures;
pub mod model;
pub mod output;
pub mod page;
pub mod pipeline;
pub mod predicate;
pub mod profile;
pub mod sort;
pub mod store;

pub use config::{Config, FeatureFlags};
pub use error::{EventHubError, Result};
pub use facets::Facets;
pub use filter::{FilterChip, FilterDimension, FilterState, Selector};
pub use fixtures::Fixture;
pub use model::{Club, ClubRef, Event, EventStatus};
pub use output::{OutputMode, TextMode};
pub use page::{FilterChange, ListingPage};
pub use pipeline::{ListingView, Pipeline, ViewState};
pub use predicate::PredicateSet;
pub use profile::{Bucket, CategoryMatch, Listing, Profile};
pub use sort::ComparatorMap;
pub use store::{DataSource, FileSource, FixtureSource, RecordStore};
