//! Seeker - filter and ordering engine for in-memory record listings.
//!
//! Seeker evaluates queries against slices of structs through a field
//! accessor. It supports:
//!
//! - Field types: strings, string lists (tags), numbers, enums, booleans
//! - Operators: equality, numeric ranges, substring matching, enum sets
//! - Clause groups: AND, OR, NOT with fixed combination semantics
//! - Multi-field, stable ordering with ascending/descending direction
//!
//! String comparisons fold case unless a clause opts out, and strings sort
//! with a transliterating collation so accented names land where a reader
//! expects them.
//!
//! # Quick Start
//!
//! ```rust
//! use eventhub_seeker::{Number, Query, Value};
//!
//! struct Club {
//!     name: String,
//!     category: String,
//!     members: u32,
//!     tags: Vec<String>,
//! }
//!
//! fn accessor<'a>(club: &'a Club, field: &str) -> Value<'a> {
//!     match field {
//!         "name" => Value::String(&club.name),
//!         "category" => Value::String(&club.category),
//!         "members" => Value::Number(Number::from(club.members)),
//!         "tags" => Value::List(&club.tags),
//!         _ => Value::None,
//!     }
//! }
//!
//! let clubs = vec![
//!     Club { name: "Tech Innovators".into(), category: "Technology".into(), members: 1247, tags: vec!["AI".into()] },
//!     Club { name: "Creative Lens Society".into(), category: "Arts".into(), members: 445, tags: vec!["Photography".into()] },
//!     Club { name: "Code Crafters".into(), category: "Technology".into(), members: 312, tags: vec![] },
//! ];
//!
//! let query = Query::new()
//!     .and_eq("category", "technology")
//!     .order_asc("name");
//!
//! let results = query.filter(&clubs, accessor);
//! assert_eq!(results.len(), 2);
//! assert_eq!(results[0].name, "Code Crafters");
//!
//! let photo = Query::new().or_contains("name", "photo").or_contains("tags", "photo");
//! assert_eq!(photo.filter(&clubs, accessor)[0].name, "Creative Lens Society");
//! ```
//!
//! # Query Semantics
//!
//! ```text
//! match = (all AND clauses match)
//!       ∧ (at least one OR clause matches, OR no OR clauses exist)
//!       ∧ (no NOT clause matches)
//! ```
//!
//! An absent field ([`Value::None`]) never satisfies a clause. A list field
//! satisfies a positive string clause when any of its elements does.
//!
//! # Field Types and Operators
//!
//! | Type | Operators |
//! |------|-----------|
//! | String, List | `Eq`, `Ne`, `Contains` |
//! | Number | `Eq`, `Ne`, `Gt`, `Gte`, `Lt`, `Lte` |
//! | Enum | `Eq`, `Ne`; `In` with a discriminant set |
//! | Bool | `Eq`, `Ne` |

mod clause;
mod error;
mod op;
mod ordering;
mod query;
mod traits;
mod value;

pub use clause::{Case, Clause, ClauseValue};
pub use error::{Result, SeekerError};
pub use op::Op;
pub use ordering::{collate, compare_by_orderings, compare_values, Dir, OrderBy};
pub use query::Query;
pub use traits::{Seekable, SeekerEnum};
pub use value::{Number, Value};
