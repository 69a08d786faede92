//! Per-record-type pipeline configuration.
//!
//! The events and clubs listings run the same pipeline; what differs is
//! captured here: which fields are searchable, how the category selector
//! applies, which field carries the location, and which sort keys exist.

use eventhub_seeker::Seekable;

use crate::filter::FilterDimension;
use crate::sort::ComparatorMap;

/// A record type that can be listed.
pub trait Listing: Seekable + Sized {
    /// Singular kind name, used in logs and messages.
    const KIND: &'static str;

    fn id(&self) -> u32;

    /// Display name: an event's title or a club's name.
    fn label(&self) -> &str;

    /// Applies the defensive normalization rules to this record.
    fn normalized(self) -> Self;

    /// The default listing configuration for this record type.
    fn profile() -> Profile;
}

/// How the category selector matches a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryMatch {
    /// Case-insensitive equality with a single-valued field.
    Field(String),
    /// Any element of a list field contains the selector value.
    AnyTag(String),
}

impl CategoryMatch {
    pub fn field(&self) -> &str {
        match self {
            CategoryMatch::Field(f) | CategoryMatch::AnyTag(f) => f,
        }
    }
}

/// A closed set of bucket tokens over an enum field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub field: String,
    pub options: Vec<(String, u32)>,
}

impl Bucket {
    pub fn new(field: impl Into<String>) -> Self {
        Bucket {
            field: field.into(),
            options: Vec::new(),
        }
    }

    pub fn option(mut self, token: impl Into<String>, discriminant: u32) -> Self {
        self.options.push((token.into(), discriminant));
        self
    }

    /// Discriminant for a token, matched case-insensitively.
    pub fn discriminant(&self, token: &str) -> Option<u32> {
        let token = token.trim();
        self.options
            .iter()
            .find(|(t, _)| t.eq_ignore_ascii_case(token))
            .map(|(_, d)| *d)
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|(t, _)| t.as_str())
    }
}

/// Pipeline configuration for one listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile {
    pub search_fields: Vec<String>,
    pub category: Option<CategoryMatch>,
    pub location_field: Option<String>,
    pub bucket: Option<Bucket>,
    pub joined_field: Option<String>,
    pub comparators: ComparatorMap,
}

impl Profile {
    pub fn new() -> Self {
        Profile::default()
    }

    pub fn search<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn category(mut self, category: CategoryMatch) -> Self {
        self.category = Some(category);
        self
    }

    pub fn location(mut self, field: impl Into<String>) -> Self {
        self.location_field = Some(field.into());
        self
    }

    pub fn bucket(mut self, bucket: Bucket) -> Self {
        self.bucket = Some(bucket);
        self
    }

    pub fn joined(mut self, field: impl Into<String>) -> Self {
        self.joined_field = Some(field.into());
        self
    }

    pub fn comparators(mut self, comparators: ComparatorMap) -> Self {
        self.comparators = comparators;
        self
    }

    /// Whether this listing has the given filter dimension at all.
    pub fn supports(&self, dimension: FilterDimension) -> bool {
        match dimension {
            FilterDimension::Search => !self.search_fields.is_empty(),
            FilterDimension::Category => self.category.is_some(),
            FilterDimension::Location => self.location_field.is_some(),
            FilterDimension::Bucket => self.bucket.is_some(),
            FilterDimension::Joined => self.joined_field.is_some(),
        }
    }
}
