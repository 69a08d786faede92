//! Ordering clauses and value comparison.
//!
//! Sorting in this crate is always stable: items whose keys compare equal
//! keep their input order.

use std::cmp::Ordering;

use deunicode::deunicode;

use crate::value::Value;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    #[default]
    Asc,
    Desc,
}

impl Dir {
    /// Applies this direction to an ascending ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single ordering clause: a field and a direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub field: String,
    pub dir: Dir,
}

impl OrderBy {
    pub fn new(field: impl Into<String>, dir: Dir) -> Self {
        OrderBy {
            field: field.into(),
            dir,
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        OrderBy::new(field, Dir::Asc)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        OrderBy::new(field, Dir::Desc)
    }

    /// Compares two values under this clause's direction.
    ///
    /// Absent values sort last in both directions.
    pub fn compare(&self, a: &Value<'_>, b: &Value<'_>) -> Ordering {
        match (a, b) {
            (Value::None, Value::None) => Ordering::Equal,
            (Value::None, _) => Ordering::Greater,
            (_, Value::None) => Ordering::Less,
            _ => compare_values(a, b).map_or(Ordering::Equal, |o| self.dir.apply(o)),
        }
    }
}

/// Compares two values of the same type in ascending order.
///
/// Returns `None` on a type mismatch. Absent values sort after present ones.
pub fn compare_values(a: &Value<'_>, b: &Value<'_>) -> Option<Ordering> {
    match (a, b) {
        (Value::String(a), Value::String(b)) => Some(collate(a, b)),
        (Value::List(a), Value::List(b)) => Some(
            a.iter()
                .zip(b.iter())
                .map(|(x, y)| collate(x, y))
                .find(|o| o.is_ne())
                .unwrap_or_else(|| a.len().cmp(&b.len())),
        ),
        (Value::Number(a), Value::Number(b)) => Some(a.total_compare(*b)),
        (Value::Enum(a), Value::Enum(b)) => Some(a.cmp(b)),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        (Value::None, Value::None) => Some(Ordering::Equal),
        (Value::None, _) => Some(Ordering::Greater),
        (_, Value::None) => Some(Ordering::Less),
        _ => None,
    }
}

/// Human-oriented string ordering.
///
/// Strings are transliterated to ASCII and case-folded before comparison,
/// so "École" sorts with "ecole" rather than after "z". Ties fall back to
/// the raw strings to keep the order total.
pub fn collate(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

fn collation_key(s: &str) -> String {
    deunicode(s).to_lowercase()
}

/// Compares two items by a list of ordering clauses, first clause first.
pub fn compare_by_orderings<T, F>(a: &T, b: &T, orderings: &[OrderBy], accessor: &F) -> Ordering
where
    for<'a> F: Fn(&'a T, &str) -> Value<'a>,
{
    orderings
        .iter()
        .map(|order_by| {
            order_by.compare(
                &accessor(a, &order_by.field),
                &accessor(b, &order_by.field),
            )
        })
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Number;

    #[test]
    fn dir_apply() {
        assert_eq!(Dir::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(Dir::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(Dir::Desc.apply(Ordering::Equal), Ordering::Equal);
        assert_eq!(Dir::Desc.to_string(), "desc");
    }

    #[test]
    fn collation_ignores_case_and_accents() {
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("École", "zebra"), Ordering::Less);
        assert_eq!(collate("ecole", "École"), Ordering::Less);
        assert_eq!(collate("same", "same"), Ordering::Equal);
    }

    #[test]
    fn numbers_and_nan() {
        let a = Value::Number(Number::U64(10));
        let b = Value::Number(Number::U64(20));
        assert_eq!(compare_values(&a, &b), Some(Ordering::Less));
        let nan = Value::Number(Number::F64(f64::NAN));
        assert_eq!(compare_values(&nan, &a), Some(Ordering::Greater));
        assert_eq!(OrderBy::desc("n").compare(&nan, &a), Ordering::Less);
    }

    #[test]
    fn absent_sorts_last_in_both_directions() {
        let none = Value::None;
        let some = Value::Number(Number::F64(1.0));
        assert_eq!(OrderBy::asc("p").compare(&none, &some), Ordering::Greater);
        assert_eq!(OrderBy::desc("p").compare(&none, &some), Ordering::Greater);
        assert_eq!(OrderBy::desc("p").compare(&some, &none), Ordering::Less);
    }

    #[test]
    fn type_mismatch_is_incomparable() {
        assert_eq!(
            compare_values(&Value::String("a"), &Value::Bool(true)),
            None
        );
    }

    #[test]
    fn multiple_orderings_break_ties() {
        struct Item {
            name: String,
            members: u32,
        }

        fn accessor<'a>(item: &'a Item, field: &str) -> Value<'a> {
            match field {
                "name" => Value::String(&item.name),
                "members" => Value::Number(Number::from(item.members)),
                _ => Value::None,
            }
        }

        let a = Item {
            name: "b".into(),
            members: 5,
        };
        let b = Item {
            name: "a".into(),
            members: 5,
        };
        let orderings = [OrderBy::desc("members"), OrderBy::asc("name")];
        assert_eq!(
            compare_by_orderings(&a, &b, &orderings, &accessor),
            Ordering::Greater
        );
        assert_eq!(
            compare_by_orderings(&a, &b, &orderings[..1], &accessor),
            Ordering::Equal
        );
    }
}
