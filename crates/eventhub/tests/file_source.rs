//! Loading records from JSON and YAML data files.

use std::fs;

use eventhub::{Club, Config, DataSource, Event, EventHubError, FileSource, RecordStore};
use tempfile::TempDir;

const CLUBS_JSON: &str = r#"[
  {
    "id": 1,
    "name": "Chess Circle",
    "description": "   ",
    "category": "Games",
    "location": "Oslo",
    "members": -12,
    "upcomingEvents": 2,
    "rating": 11.5,
    "tags": ["Strategy", "", "Board Games"],
    "verified": true
  },
  {
    "id": 2,
    "name": "Sunday Sketchers",
    "category": "Arts",
    "members": 40,
    "joinedAt": "2024-05-01"
  }
]"#;

const EVENTS_YAML: &str = r#"
- id: 10
  title: Open Board Night
  club: { id: 1, name: Chess Circle }
  date: June 1, 2024
  time: 7:00 PM
  location: Oslo Library
  attendees: 35
  maxAttendees: 20
  price: -5
  status: ongoing
- id: 11
  title: Blitz Cup
  club: { id: 1, name: Chess Circle }
  date: June 8, 2024
  time: 6:00 PM
  location: Oslo Library
  attendees: 12
  tags: [Tournament]
  price: 0
  status: upcoming
"#;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn json_clubs_are_normalized() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "clubs.json", CLUBS_JSON);
    let store: RecordStore<Club> = RecordStore::load(&FileSource::new(path)).unwrap();

    let chess = store.get(1).unwrap();
    assert_eq!(chess.members, 0);
    assert_eq!(chess.rating, Some(5.0));
    assert_eq!(chess.description, None);
    assert_eq!(chess.tags, ["Strategy", "Board Games"]);

    let sketchers = store.get(2).unwrap();
    assert_eq!(sketchers.upcoming_events, 0);
    assert!(sketchers.is_joined());
    assert!(!sketchers.verified);
}

#[test]
fn yaml_events_are_normalized() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "events.yaml", EVENTS_YAML);
    let store: RecordStore<Event> = RecordStore::load(&FileSource::new(path)).unwrap();

    let night = store.get(10).unwrap();
    assert_eq!(night.max_attendees, Some(35));
    assert!(night.is_full());
    assert_eq!(night.price, None);

    let cup = store.get(11).unwrap();
    assert!(cup.is_free());
    assert_eq!(store.for_club(1).len(), 2);
}

#[test]
fn duplicate_ids_fail_the_load() {
    let dir = TempDir::new().unwrap();
    let json = r#"[
      {"id": 3, "name": "A", "category": "X", "members": 1},
      {"id": 3, "name": "B", "category": "Y", "members": 2}
    ]"#;
    let path = write(&dir, "clubs.json", json);
    let err = RecordStore::<Club>::load(&FileSource::new(path)).unwrap_err();
    assert!(matches!(err, EventHubError::DuplicateId { kind: "club", id: 3 }));
}

#[test]
fn unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "clubs.toml", "");
    let result: Result<Vec<Club>, _> = FileSource::new(path).load();
    assert!(matches!(result, Err(EventHubError::UnsupportedFormat(_))));
}

#[test]
fn missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let source = FileSource::new(dir.path().join("clubs.json"));
    let result: Result<Vec<Club>, _> = source.load();
    match result {
        Err(EventHubError::Io { path, .. }) => assert_eq!(path, source.path()),
        other => panic!("expected an I/O error, got {other:?}"),
    }
}

#[test]
fn malformed_json() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "clubs.json", "{ not json");
    let result: Result<Vec<Club>, _> = FileSource::new(path).load();
    assert!(matches!(result, Err(EventHubError::Json(_))));
}

#[test]
fn config_finds_data_files() {
    let dir = TempDir::new().unwrap();
    write(&dir, "events.yaml", EVENTS_YAML);
    let config = Config::from_lookup(|key| {
        (key == "EVENTHUB_DATA_DIR").then(|| dir.path().display().to_string())
    });
    let path = config.data_file("events").unwrap().unwrap();
    let store: RecordStore<Event> = RecordStore::load(&FileSource::new(path)).unwrap();
    assert_eq!(store.len(), 2);
}
