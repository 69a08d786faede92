//! Property-based tests for the listing pipeline using proptest.

use eventhub::{
    Club, ClubRef, Event, EventStatus, FilterState, ListingPage, Pipeline, RecordStore, ViewState,
};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

const WORDS: &[&str] = &["Tech", "Photo", "Run", "Book", "Café", "music", "Green", "Night"];

fn text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 1..4).prop_map(|w| w.join(" "))
}

fn clubs_strategy() -> impl Strategy<Value = Vec<Club>> {
    prop::collection::vec(
        (
            text(),
            prop::option::of(text()),
            prop::sample::select(&["Arts", "Sports", "Technology"][..]),
            prop::option::of(text()),
            0u32..3000,
            prop::option::of(0.0f64..5.0),
            prop::collection::vec(text(), 0..3),
            any::<bool>(),
        ),
        0..25,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, description, category, location, members, rating, tags, joined))| Club {
                id: i as u32 + 1,
                name,
                description,
                category: category.to_string(),
                location,
                members,
                upcoming_events: members % 17,
                rating,
                tags,
                verified: false,
                joined_at: joined.then(|| "2024-01-01".to_string()),
            })
            .collect()
    })
}

fn events_strategy() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec((0u32..300, prop::option::of(0u32..300)), 0..25).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (attendees, max_attendees))| Event {
                id: i as u32 + 1,
                title: format!("Event {i}"),
                description: None,
                club: ClubRef {
                    id: 1,
                    name: "Club".into(),
                },
                date: "TBD".into(),
                time: "TBD".into(),
                location: "Somewhere".into(),
                attendees,
                max_attendees,
                tags: vec![],
                price: None,
                status: EventStatus::Upcoming,
            })
            .collect()
    })
}

fn club_pipeline(clubs: Vec<Club>) -> Pipeline<Club> {
    Pipeline::new(RecordStore::new(clubs).unwrap())
}

fn ids(records: &[&Club]) -> Vec<u32> {
    records.iter().map(|c| c.id).collect()
}

fn searchable(club: &Club, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    let hit = |s: &str| s.to_lowercase().contains(&needle);
    hit(club.name.as_str())
        || club.description.as_deref().is_some_and(hit)
        || club.tags.iter().any(|t| hit(t.as_str()))
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// The default state shows the whole store in store order.
    #[test]
    fn default_state_is_identity(clubs in clubs_strategy()) {
        let expected: Vec<u32> = clubs.iter().map(|c| c.id).collect();
        let pipeline = club_pipeline(clubs);
        let view = pipeline.render(&FilterState::default());
        prop_assert_eq!(ids(&view.records), expected);
    }

    /// Search partitions the store exactly by the searchable fields.
    #[test]
    fn search_partitions(clubs in clubs_strategy(), needle in "[a-zA-Z]{1,3}") {
        let pipeline = club_pipeline(clubs.clone());
        let view = pipeline.render(&FilterState::new().with_search(needle.as_str()));
        let shown = ids(&view.records);
        for club in &clubs {
            prop_assert_eq!(shown.contains(&club.id), searchable(club, &needle));
        }
    }

    /// Sorting by members is ordered, stable and idempotent.
    #[test]
    fn members_sort(clubs in clubs_strategy()) {
        let pipeline = club_pipeline(clubs);
        let view = pipeline.render(&FilterState::new().with_sort("members"));
        for pair in view.records.windows(2) {
            prop_assert!(pair[0].members >= pair[1].members);
            if pair[0].members == pair[1].members {
                prop_assert!(pair[0].id < pair[1].id);
            }
        }

        let sorted: Vec<Club> = view.records.iter().map(|c| (*c).clone()).collect();
        let again = club_pipeline(sorted);
        let second = again.render(&FilterState::new().with_sort("members"));
        prop_assert_eq!(ids(&second.records), ids(&view.records));
    }

    /// Every sort key keeps the record multiset and never panics.
    #[test]
    fn sort_keys_permute(clubs in clubs_strategy(), key in prop::sample::select(&["members", "events", "rating", "name", "bogus"][..])) {
        let n = clubs.len();
        let pipeline = club_pipeline(clubs);
        let view = pipeline.render(&FilterState::new().with_sort(key));
        let mut got = ids(&view.records);
        got.sort_unstable();
        prop_assert_eq!(got, (1..=n as u32).collect::<Vec<_>>());
    }

    /// Clearing all filters returns the store in original order.
    #[test]
    fn clear_all_restores(
        clubs in clubs_strategy(),
        search in "[a-z]{0,2}",
        category in prop::sample::select(&["all", "Arts", "Sports"][..]),
        sort in prop::sample::select(&["members", "name", "rating"][..]),
    ) {
        let expected: Vec<u32> = clubs.iter().map(|c| c.id).collect();
        let mut page = ListingPage::new(club_pipeline(clubs));
        page.set_search(search);
        page.select_category(category);
        page.select_sort(Some(sort));
        page.set_joined_only(true);
        page.clear_all();
        let view = page.view();
        prop_assert_eq!(ids(&view.records), expected);
    }

    /// Empty state is reported exactly when nothing matches.
    #[test]
    fn empty_state_iff_no_records(clubs in clubs_strategy(), needle in "[a-z]{1,4}") {
        let pipeline = club_pipeline(clubs);
        let view = pipeline.render(&FilterState::new().with_search(needle));
        prop_assert_eq!(view.state == ViewState::Empty, view.records.is_empty());
        prop_assert_eq!(view.result_count, view.records.len());
    }

    /// `is_full` is exactly "capacity known and reached", after normalization.
    #[test]
    fn is_full_definition(events in events_strategy()) {
        let store = RecordStore::new(events).unwrap();
        for event in store.records() {
            let expected = event.max_attendees.is_some_and(|cap| event.attendees >= cap);
            prop_assert_eq!(event.is_full(), expected);
            if let Some(cap) = event.max_attendees {
                prop_assert!(cap >= event.attendees);
            }
        }
    }
}
