use eventhub_seeker::{Number, OrderBy, Seekable, Value};
use serde::{Deserialize, Serialize};

use super::normalize;
use crate::profile::{CategoryMatch, Listing, Profile};
use crate::sort::ComparatorMap;

/// A club listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    pub id: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(deserialize_with = "normalize::de_count")]
    pub members: u32,
    #[serde(default, deserialize_with = "normalize::de_count")]
    pub upcoming_events: u32,
    #[serde(
        default,
        deserialize_with = "normalize::de_rating",
        skip_serializing_if = "Option::is_none"
    )]
    pub rating: Option<f64>,
    #[serde(
        default,
        deserialize_with = "normalize::de_tags",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tags: Vec<String>,
    #[serde(default)]
    pub verified: bool,
    /// Set only when membership is asserted by the data source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<String>,
}

impl Club {
    pub const ID: &'static str = "id";
    pub const NAME: &'static str = "name";
    pub const DESCRIPTION: &'static str = "description";
    pub const CATEGORY: &'static str = "category";
    pub const LOCATION: &'static str = "location";
    pub const MEMBERS: &'static str = "members";
    pub const EVENTS: &'static str = "events";
    pub const RATING: &'static str = "rating";
    pub const TAGS: &'static str = "tags";
    pub const VERIFIED: &'static str = "verified";
    pub const JOINED: &'static str = "joined";

    pub fn is_joined(&self) -> bool {
        self.joined_at.is_some()
    }
}

impl Seekable for Club {
    fn seeker_field_value(&self, field: &str) -> Value<'_> {
        match field {
            Club::ID => Value::Number(Number::from(self.id)),
            Club::NAME => Value::String(&self.name),
            Club::DESCRIPTION => Value::opt_str(self.description.as_deref()),
            Club::CATEGORY => Value::String(&self.category),
            Club::LOCATION => Value::opt_str(self.location.as_deref()),
            Club::MEMBERS => Value::Number(Number::from(self.members)),
            Club::EVENTS => Value::Number(Number::from(self.upcoming_events)),
            // Unrated clubs rank as zero.
            Club::RATING => Value::Number(Number::from(self.rating.unwrap_or(0.0))),
            Club::TAGS => Value::List(&self.tags),
            Club::VERIFIED => Value::Bool(self.verified),
            Club::JOINED => Value::Bool(self.is_joined()),
            _ => Value::None,
        }
    }
}

impl Listing for Club {
    const KIND: &'static str = "club";

    fn id(&self) -> u32 {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn normalized(mut self) -> Self {
        self.description = normalize::non_blank(self.description);
        self.location = normalize::non_blank(self.location);
        self.joined_at = normalize::non_blank(self.joined_at);
        self.rating = normalize::rating(self.rating);
        self.tags = normalize::tags(self.tags);
        self
    }

    fn profile() -> Profile {
        Profile::new()
            .search([Club::NAME, Club::DESCRIPTION, Club::TAGS])
            .category(CategoryMatch::Field(Club::CATEGORY.into()))
            .location(Club::LOCATION)
            .joined(Club::JOINED)
            .comparators(
                ComparatorMap::new()
                    .with("members", [OrderBy::desc(Club::MEMBERS)])
                    .with("events", [OrderBy::desc(Club::EVENTS)])
                    .with("rating", [OrderBy::desc(Club::RATING)])
                    .with("name", [OrderBy::asc(Club::NAME)]),
            )
    }
}
