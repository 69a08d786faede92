//! Listing records.
//!
//! Records are plain serde structs. Field names used by filters and
//! comparators are exposed as associated constants.

mod club;
mod event;
pub mod normalize;

pub use club::Club;
pub use event::{ClubRef, Event, EventStatus};
