//! Record store and data sources.
//!
//! A [`RecordStore`] holds the canonical, ordered record sequence for one
//! listing. It is built once from a [`DataSource`], normalized on the way
//! in, and never mutated afterwards.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use eventhub_seeker::Query;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::{EventHubError, Result};
use crate::fixtures::Fixture;
use crate::model::Event;
use crate::profile::Listing;

/// Where records come from.
pub trait DataSource<R> {
    fn load(&self) -> Result<Vec<R>>;

    /// Short description for logs.
    fn describe(&self) -> String;
}

/// The built-in demo data set.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureSource;

impl<R: Fixture> DataSource<R> for FixtureSource {
    fn load(&self) -> Result<Vec<R>> {
        Ok(R::fixture())
    }

    fn describe(&self) -> String {
        "built-in fixture".to_string()
    }
}

/// A JSON or YAML file holding an array of records.
///
/// The format is chosen by extension: `.json`, `.yaml` or `.yml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

/// Data file encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Yaml,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> Option<FileFormat> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(FileFormat::Json),
            "yaml" | "yml" => Some(FileFormat::Yaml),
            _ => None,
        }
    }
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<R: DeserializeOwned> DataSource<R> for FileSource {
    fn load(&self) -> Result<Vec<R>> {
        let format = FileFormat::from_path(&self.path)
            .ok_or_else(|| EventHubError::UnsupportedFormat(self.path.clone()))?;
        let content = std::fs::read_to_string(&self.path).map_err(|source| EventHubError::Io {
            path: self.path.clone(),
            source,
        })?;
        let records = match format {
            FileFormat::Json => serde_json::from_str(&content)?,
            FileFormat::Yaml => serde_yaml::from_str(&content)?,
        };
        Ok(records)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// The canonical record sequence for one listing.
#[derive(Debug, Clone)]
pub struct RecordStore<R> {
    records: Vec<R>,
}

impl<R: Listing> RecordStore<R> {
    /// Normalizes `records` and checks identifier uniqueness.
    pub fn new(records: Vec<R>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        let records: Vec<R> = records.into_iter().map(Listing::normalized).collect();
        for record in &records {
            if !seen.insert(record.id()) {
                return Err(EventHubError::DuplicateId {
                    kind: R::KIND,
                    id: record.id(),
                });
            }
        }
        Ok(RecordStore { records })
    }

    pub fn load(source: &impl DataSource<R>) -> Result<Self> {
        let store = RecordStore::new(source.load()?)?;
        info!(
            kind = R::KIND,
            count = store.len(),
            source = %source.describe(),
            "loaded records"
        );
        Ok(store)
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks a record up by identifier.
    pub fn get(&self, id: u32) -> Option<&R> {
        let found = self.records.iter().find(|r| r.id() == id);
        if found.is_none() {
            debug!(kind = R::KIND, id, "record not found");
        }
        found
    }

    /// Records matching `query`, in query order.
    pub fn select(&self, query: &Query) -> Vec<&R> {
        query.filter(&self.records, R::accessor)
    }
}

impl RecordStore<Event> {
    /// Events run by the given club, in store order.
    pub fn for_club(&self, club_id: u32) -> Vec<&Event> {
        self.select(&Query::new().and_eq(Event::CLUB_ID, club_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Club;

    #[test]
    fn fixture_loads() {
        let store: RecordStore<Club> = RecordStore::load(&FixtureSource).unwrap();
        assert_eq!(store.len(), 8);
        assert_eq!(store.get(3).map(|c| c.name.as_str()), Some("Creative Lens Society"));
        assert!(store.get(99).is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut clubs = Club::fixture();
        let copy = clubs[0].clone();
        clubs.push(copy);
        let err = RecordStore::new(clubs).unwrap_err();
        assert!(matches!(err, EventHubError::DuplicateId { kind: "club", id: 1 }));
    }

    #[test]
    fn events_for_club_keep_store_order() {
        let store: RecordStore<Event> = RecordStore::load(&FixtureSource).unwrap();
        let ids: Vec<u32> = store.for_club(1).iter().map(|e| e.id).collect();
        assert_eq!(ids, [1, 5]);
        assert!(store.for_club(42).is_empty());
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(FileFormat::from_path(Path::new("a.JSON")), Some(FileFormat::Json));
        assert_eq!(FileFormat::from_path(Path::new("a.yml")), Some(FileFormat::Yaml));
        assert_eq!(FileFormat::from_path(Path::new("a.toml")), None);
        assert_eq!(FileFormat::from_path(Path::new("noext")), None);
    }
}
