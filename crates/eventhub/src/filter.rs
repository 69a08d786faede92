//! Filter state and active filter chips.
//!
//! [`FilterState`] is the whole user-controlled input to a listing: search
//! text, the category / location / bucket selectors, the sort key and the
//! joined-only toggle. Every dimension has a default under which it does
//! not filter, and each non-default dimension is summarized by a
//! [`FilterChip`] that knows how to clear it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The sentinel token that disables a selector.
pub const ALL: &str = "all";

/// A dropdown-style selector: either the `all` sentinel or a value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Selector {
    #[default]
    All,
    Value(String),
}

impl Selector {
    /// `"all"` in any case, empty and whitespace-only input select all.
    pub fn parse(raw: &str) -> Selector {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL) {
            Selector::All
        } else {
            Selector::Value(trimmed.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selector::All)
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Selector::All => None,
            Selector::Value(v) => Some(v),
        }
    }
}

impl From<String> for Selector {
    fn from(raw: String) -> Self {
        Selector::parse(&raw)
    }
}

impl From<&str> for Selector {
    fn from(raw: &str) -> Self {
        Selector::parse(raw)
    }
}

impl From<Selector> for String {
    fn from(selector: Selector) -> Self {
        match selector {
            Selector::All => ALL.to_string(),
            Selector::Value(v) => v,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value().unwrap_or(ALL))
    }
}

/// One independently clearable filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterDimension {
    Search,
    Category,
    Location,
    Bucket,
    Joined,
}

impl FilterDimension {
    pub const ALL: [FilterDimension; 5] = [
        FilterDimension::Search,
        FilterDimension::Category,
        FilterDimension::Location,
        FilterDimension::Bucket,
        FilterDimension::Joined,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FilterDimension::Search => "search",
            FilterDimension::Category => "category",
            FilterDimension::Location => "location",
            FilterDimension::Bucket => "bucket",
            FilterDimension::Joined => "joined",
        }
    }
}

impl fmt::Display for FilterDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current user-controlled listing input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterState {
    pub search: String,
    pub category: Selector,
    pub location: Selector,
    pub bucket: Selector,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    pub joined_only: bool,
}

impl FilterState {
    pub fn new() -> Self {
        FilterState::default()
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<Selector>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<Selector>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_bucket(mut self, bucket: impl Into<Selector>) -> Self {
        self.bucket = bucket.into();
        self
    }

    pub fn with_sort(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.sort = if key.trim().is_empty() { None } else { Some(key) };
        self
    }

    pub fn with_joined_only(mut self, joined_only: bool) -> Self {
        self.joined_only = joined_only;
        self
    }

    /// The search text when it filters at all. Blank text matches everything;
    /// other text is used as typed.
    pub fn search_text(&self) -> Option<&str> {
        if self.search.trim().is_empty() {
            None
        } else {
            Some(&self.search)
        }
    }

    /// Whether `dimension` is at its non-filtering default.
    pub fn is_default(&self, dimension: FilterDimension) -> bool {
        match dimension {
            FilterDimension::Search => self.search_text().is_none(),
            FilterDimension::Category => self.category.is_all(),
            FilterDimension::Location => self.location.is_all(),
            FilterDimension::Bucket => self.bucket.is_all(),
            FilterDimension::Joined => !self.joined_only,
        }
    }

    /// Resets one dimension to its default.
    pub fn clear(&mut self, dimension: FilterDimension) {
        match dimension {
            FilterDimension::Search => self.search.clear(),
            FilterDimension::Category => self.category = Selector::All,
            FilterDimension::Location => self.location = Selector::All,
            FilterDimension::Bucket => self.bucket = Selector::All,
            FilterDimension::Joined => self.joined_only = false,
        }
    }

    /// Resets every dimension and the sort key.
    pub fn clear_all(&mut self) {
        *self = FilterState::default();
    }

    /// Chips for every non-default dimension, in dimension order.
    pub fn chips(&self) -> Vec<FilterChip> {
        FilterDimension::ALL
            .into_iter()
            .filter(|d| !self.is_default(*d))
            .map(|d| FilterChip::new(d, self.chip_label(d)))
            .collect()
    }

    fn chip_label(&self, dimension: FilterDimension) -> String {
        match dimension {
            FilterDimension::Search => format!("Search: \"{}\"", self.search),
            FilterDimension::Category => format!("Category: {}", self.category),
            FilterDimension::Location => format!("Location: {}", self.location),
            FilterDimension::Bucket => format!("Status: {}", self.bucket),
            FilterDimension::Joined => "Joined only".to_string(),
        }
    }
}

/// Summary of one active filter dimension, with its clear action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterChip {
    pub dimension: FilterDimension,
    pub label: String,
}

impl FilterChip {
    pub fn new(dimension: FilterDimension, label: impl Into<String>) -> Self {
        FilterChip {
            dimension,
            label: label.into(),
        }
    }

    /// Resets the dimension this chip summarizes.
    pub fn clear(&self, state: &mut FilterState) {
        state.clear(self.dimension);
    }
}

impl fmt::Display for FilterChip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
