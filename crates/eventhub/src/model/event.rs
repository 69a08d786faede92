use std::fmt;
use std::str::FromStr;

use eventhub_seeker::{Number, OrderBy, Seekable, SeekerEnum, Value};
use serde::{Deserialize, Serialize};

use super::normalize;
use crate::profile::{Bucket, CategoryMatch, Listing, Profile};
use crate::sort::ComparatorMap;

/// Lifecycle status of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Completed,
}

impl EventStatus {
    pub const ALL: [EventStatus; 3] = [
        EventStatus::Upcoming,
        EventStatus::Ongoing,
        EventStatus::Completed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EventStatus::Upcoming => "upcoming",
            EventStatus::Ongoing => "ongoing",
            EventStatus::Completed => "completed",
        }
    }
}

impl SeekerEnum for EventStatus {
    fn seeker_discriminant(&self) -> u32 {
        match self {
            EventStatus::Upcoming => 0,
            EventStatus::Ongoing => 1,
            EventStatus::Completed => 2,
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown event status '{s}'"))
    }
}

/// The club that runs an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubRef {
    pub id: u32,
    pub name: String,
}

/// An event listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: u32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub club: ClubRef,
    pub date: String,
    pub time: String,
    pub location: String,
    #[serde(deserialize_with = "normalize::de_count")]
    pub attendees: u32,
    #[serde(
        default,
        deserialize_with = "normalize::de_opt_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_attendees: Option<u32>,
    #[serde(
        default,
        deserialize_with = "normalize::de_tags",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tags: Vec<String>,
    /// `Some(0.0)` is a confirmed free event; `None` means no price given.
    #[serde(
        default,
        deserialize_with = "normalize::de_price",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<f64>,
    pub status: EventStatus,
}

impl Event {
    pub const ID: &'static str = "id";
    pub const TITLE: &'static str = "title";
    pub const DESCRIPTION: &'static str = "description";
    pub const CLUB: &'static str = "club";
    pub const CLUB_ID: &'static str = "clubId";
    pub const DATE: &'static str = "date";
    pub const LOCATION: &'static str = "location";
    pub const ATTENDEES: &'static str = "attendees";
    pub const MAX_ATTENDEES: &'static str = "maxAttendees";
    pub const TAGS: &'static str = "tags";
    pub const PRICE: &'static str = "price";
    pub const STATUS: &'static str = "status";
    pub const FULL: &'static str = "full";

    /// Capacity reached. Derived on every call, never stored.
    pub fn is_full(&self) -> bool {
        self.max_attendees
            .is_some_and(|capacity| self.attendees >= capacity)
    }

    /// Price explicitly set to zero.
    pub fn is_free(&self) -> bool {
        self.price == Some(0.0)
    }

    /// Remaining places, when a capacity is known.
    pub fn spots_left(&self) -> Option<u32> {
        self.max_attendees
            .map(|capacity| capacity.saturating_sub(self.attendees))
    }
}

impl Seekable for Event {
    fn seeker_field_value(&self, field: &str) -> Value<'_> {
        match field {
            Event::ID => Value::Number(Number::from(self.id)),
            Event::TITLE => Value::String(&self.title),
            Event::DESCRIPTION => Value::opt_str(self.description.as_deref()),
            Event::CLUB => Value::String(&self.club.name),
            Event::CLUB_ID => Value::Number(Number::from(self.club.id)),
            Event::DATE => Value::String(&self.date),
            Event::LOCATION => Value::String(&self.location),
            Event::ATTENDEES => Value::Number(Number::from(self.attendees)),
            Event::MAX_ATTENDEES => Value::opt_number(self.max_attendees),
            Event::TAGS => Value::List(&self.tags),
            Event::PRICE => Value::opt_number(self.price),
            Event::STATUS => Value::Enum(self.status.seeker_discriminant()),
            Event::FULL => Value::Bool(self.is_full()),
            _ => Value::None,
        }
    }
}

impl Listing for Event {
    const KIND: &'static str = "event";

    fn id(&self) -> u32 {
        self.id
    }

    fn label(&self) -> &str {
        &self.title
    }

    fn normalized(mut self) -> Self {
        self.description = normalize::non_blank(self.description);
        self.tags = normalize::tags(self.tags);
        self.price = normalize::price(self.price);
        // An over-subscribed event is full, not capacity-less.
        self.max_attendees = self
            .max_attendees
            .map(|capacity| capacity.max(self.attendees));
        self
    }

    /// Events search title, description and club name. The category
    /// selector matches against tags, since events carry no category.
    fn profile() -> Profile {
        let bucket = EventStatus::ALL
            .into_iter()
            .fold(Bucket::new(Event::STATUS), |bucket, status| {
                bucket.option(status.as_str(), status.seeker_discriminant())
            });

        Profile::new()
            .search([Event::TITLE, Event::DESCRIPTION, Event::CLUB])
            .category(CategoryMatch::AnyTag(Event::TAGS.into()))
            .location(Event::LOCATION)
            .bucket(bucket)
            .comparators(
                ComparatorMap::new()
                    .with("attendees", [OrderBy::desc(Event::ATTENDEES)])
                    .with("title", [OrderBy::asc(Event::TITLE)])
                    .with("price", [OrderBy::asc(Event::PRICE)]),
            )
    }
}
