//! Built-in demo data: eight clubs and six events.
//!
//! Used when no data directory is configured, and by the test suites.

use crate::model::{Club, ClubRef, Event, EventStatus};

/// Record types with a built-in demo set.
pub trait Fixture: Sized {
    fn fixture() -> Vec<Self>;
}

struct ClubRow {
    id: u32,
    name: &'static str,
    description: &'static str,
    category: &'static str,
    location: Option<&'static str>,
    members: u32,
    upcoming_events: u32,
    rating: Option<f64>,
    tags: &'static [&'static str],
    verified: bool,
    joined_at: Option<&'static str>,
}

const CLUBS: &[ClubRow] = &[
    ClubRow {
        id: 1,
        name: "Tech Innovators",
        description: "Building tomorrow's software today with hack nights and talks",
        category: "Technology",
        location: Some("San Francisco, CA"),
        members: 1247,
        upcoming_events: 8,
        rating: Some(4.8),
        tags: &["AI", "Web Development", "Startups"],
        verified: true,
        joined_at: Some("2023-09-12"),
    },
    ClubRow {
        id: 2,
        name: "Green Earth Alliance",
        description: "Volunteers working on local sustainability projects",
        category: "Environment",
        location: Some("Portland, OR"),
        members: 892,
        upcoming_events: 5,
        rating: Some(4.6),
        tags: &["Sustainability", "Climate", "Volunteering"],
        verified: true,
        joined_at: None,
    },
    ClubRow {
        id: 3,
        name: "Creative Lens Society",
        description: "A community for photo enthusiasts of every skill level",
        category: "Arts",
        location: Some("Los Angeles, CA"),
        members: 634,
        upcoming_events: 3,
        rating: Some(4.9),
        tags: &["Photography", "Art", "Workshops"],
        verified: false,
        joined_at: Some("2024-01-20"),
    },
    ClubRow {
        id: 4,
        name: "Entrepreneurs Network",
        description: "Founders and investors sharing lessons and leads",
        category: "Business",
        location: Some("New York, NY"),
        members: 2156,
        upcoming_events: 12,
        rating: Some(4.7),
        tags: &["Business", "Networking", "Startups"],
        verified: true,
        joined_at: None,
    },
    ClubRow {
        id: 5,
        name: "Fitness Fanatics",
        description: "Group runs, bootcamps and friendly competition",
        category: "Sports",
        location: Some("Austin, TX"),
        members: 1543,
        upcoming_events: 15,
        rating: Some(4.5),
        tags: &["Fitness", "Running", "Health"],
        verified: true,
        joined_at: None,
    },
    ClubRow {
        id: 6,
        name: "Book Worms United",
        description: "Monthly reads and lively discussion, online",
        category: "Literature",
        location: None,
        members: 423,
        upcoming_events: 3,
        rating: Some(4.4),
        tags: &["Books", "Reading", "Discussion"],
        verified: false,
        joined_at: None,
    },
    ClubRow {
        id: 7,
        name: "Music Makers Collective",
        description: "Jam sessions and open mics for musicians",
        category: "Music",
        location: Some("Nashville, TN"),
        members: 778,
        upcoming_events: 6,
        rating: Some(4.7),
        tags: &["Music", "Live Performance", "Collaboration"],
        verified: true,
        joined_at: None,
    },
    ClubRow {
        id: 8,
        name: "Global Cuisine Club",
        description: "Cooking classes and supper clubs from around the world",
        category: "Food",
        location: Some("Miami, FL"),
        members: 312,
        upcoming_events: 4,
        rating: None,
        tags: &["Cooking", "Culture", "Food"],
        verified: false,
        joined_at: None,
    },
];

struct EventRow {
    id: u32,
    title: &'static str,
    description: Option<&'static str>,
    club_id: u32,
    date: &'static str,
    time: &'static str,
    location: &'static str,
    attendees: u32,
    max_attendees: Option<u32>,
    tags: &'static [&'static str],
    price: Option<f64>,
    status: EventStatus,
}

const EVENTS: &[EventRow] = &[
    EventRow {
        id: 1,
        title: "Tech Innovation Summit 2024",
        description: Some("Keynotes and demos on applied AI and developer tooling"),
        club_id: 1,
        date: "March 15, 2024",
        time: "9:00 AM",
        location: "San Francisco Convention Center",
        attendees: 124,
        max_attendees: Some(200),
        tags: &["Technology", "AI", "Networking"],
        price: Some(49.0),
        status: EventStatus::Upcoming,
    },
    EventRow {
        id: 2,
        title: "Sustainability Workshop",
        description: Some("Hands-on composting and zero-waste living session"),
        club_id: 2,
        date: "March 18, 2024",
        time: "2:00 PM",
        location: "Portland Community Garden",
        attendees: 45,
        max_attendees: Some(50),
        tags: &["Environment", "Workshop"],
        price: Some(0.0),
        status: EventStatus::Upcoming,
    },
    EventRow {
        id: 3,
        title: "Photography Walk: Golden Hour",
        description: Some("Catch the evening light along the waterfront"),
        club_id: 3,
        date: "March 20, 2024",
        time: "6:30 PM",
        location: "Santa Monica Pier, Los Angeles",
        attendees: 30,
        max_attendees: Some(30),
        tags: &["Photography", "Outdoors"],
        price: None,
        status: EventStatus::Upcoming,
    },
    EventRow {
        id: 4,
        title: "Startup Pitch Night",
        description: Some("Ten founders, five minutes each, one panel of investors"),
        club_id: 4,
        date: "March 12, 2024",
        time: "7:00 PM",
        location: "WeWork Times Square, New York",
        attendees: 200,
        max_attendees: Some(200),
        tags: &["Business", "Startups"],
        price: Some(15.0),
        status: EventStatus::Ongoing,
    },
    EventRow {
        id: 5,
        title: "Annual Coding Bootcamp",
        description: Some("Two days of pairing on real open source issues"),
        club_id: 1,
        date: "April 5, 2024",
        time: "10:00 AM",
        location: "Seattle Tech Hub, Seattle, WA",
        attendees: 89,
        max_attendees: Some(150),
        tags: &["Technology", "Education"],
        price: Some(199.0),
        status: EventStatus::Upcoming,
    },
    EventRow {
        id: 6,
        title: "Marathon Training Session",
        description: None,
        club_id: 5,
        date: "March 2, 2024",
        time: "6:00 AM",
        location: "Zilker Park, Austin",
        attendees: 60,
        max_attendees: None,
        tags: &["Fitness", "Running"],
        price: Some(0.0),
        status: EventStatus::Completed,
    },
];

fn owned(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|t| t.to_string()).collect()
}

impl Fixture for Club {
    fn fixture() -> Vec<Club> {
        CLUBS
            .iter()
            .map(|row| Club {
                id: row.id,
                name: row.name.into(),
                description: Some(row.description.into()),
                category: row.category.into(),
                location: row.location.map(Into::into),
                members: row.members,
                upcoming_events: row.upcoming_events,
                rating: row.rating,
                tags: owned(row.tags),
                verified: row.verified,
                joined_at: row.joined_at.map(Into::into),
            })
            .collect()
    }
}

impl Fixture for Event {
    fn fixture() -> Vec<Event> {
        EVENTS
            .iter()
            .map(|row| Event {
                id: row.id,
                title: row.title.into(),
                description: row.description.map(Into::into),
                club: ClubRef {
                    id: row.club_id,
                    name: club_name(row.club_id).into(),
                },
                date: row.date.into(),
                time: row.time.into(),
                location: row.location.into(),
                attendees: row.attendees,
                max_attendees: row.max_attendees,
                tags: owned(row.tags),
                price: row.price,
                status: row.status,
            })
            .collect()
    }
}

fn club_name(id: u32) -> &'static str {
    CLUBS
        .iter()
        .find(|club| club.id == id)
        .map_or("Unknown club", |club| club.name)
}
