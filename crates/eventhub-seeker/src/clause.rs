//! Clause types for query predicates.
//!
//! A [`Clause`] is a single predicate: a field name, an operator and a
//! comparison value. String comparisons fold case unless the clause is
//! explicitly marked [`Case::Sensitive`].

use crate::error::{Result, SeekerError};
use crate::op::Op;
use crate::value::{Number, Value};

/// Case handling for string comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Case {
    #[default]
    Insensitive,
    Sensitive,
}

/// A single filter predicate.
///
/// ```
/// use eventhub_seeker::{Clause, Op, Value};
///
/// let clause = Clause::new("location", Op::Contains, "seattle");
/// assert!(clause.matches(&Value::String("Seattle, WA")));
/// assert!(!clause.matches(&Value::None));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    pub field: String,
    pub op: Op,
    pub value: ClauseValue,
    pub case: Case,
}

impl Clause {
    /// Creates a case-insensitive clause.
    pub fn new(field: impl Into<String>, op: Op, value: impl Into<ClauseValue>) -> Self {
        Clause {
            field: field.into(),
            op,
            value: value.into(),
            case: Case::Insensitive,
        }
    }

    /// Switches string comparisons to exact case.
    pub fn case_sensitive(mut self) -> Self {
        self.case = Case::Sensitive;
        self
    }

    /// Evaluates this clause against a field value.
    ///
    /// Incompatible types and absent fields never match.
    pub fn matches(&self, field_value: &Value<'_>) -> bool {
        match (&self.value, field_value) {
            (ClauseValue::String(pattern), Value::String(s)) => self.match_string(s, pattern),
            (ClauseValue::String(pattern), Value::List(items)) => {
                self.match_list(items, pattern)
            }
            (ClauseValue::Number(clause_num), Value::Number(field_num)) => field_num
                .compare(*clause_num)
                .is_some_and(|ordering| self.op.holds(ordering)),
            (ClauseValue::Enum(clause_disc), Value::Enum(field_disc)) => match self.op {
                Op::Eq => field_disc == clause_disc,
                Op::Ne => field_disc != clause_disc,
                _ => false,
            },
            (ClauseValue::EnumSet(set), Value::Enum(field_disc)) => {
                self.op == Op::In && set.contains(field_disc)
            }
            (ClauseValue::Bool(clause_bool), Value::Bool(field_bool)) => match self.op {
                Op::Eq => field_bool == clause_bool,
                Op::Ne => field_bool != clause_bool,
                _ => false,
            },
            // An absent field fails every assertion, `Ne` included.
            (_, Value::None) => false,
            _ => false,
        }
    }

    /// Checks that the operator makes sense for the clause value.
    pub fn validate(&self) -> Result<()> {
        let valid = match self.value {
            ClauseValue::String(_) => self.op.is_equality() || self.op == Op::Contains,
            ClauseValue::Number(_) => self.op.is_equality() || self.op.is_range(),
            ClauseValue::Enum(_) | ClauseValue::Bool(_) => self.op.is_equality(),
            ClauseValue::EnumSet(_) => self.op == Op::In,
        };
        if valid {
            Ok(())
        } else {
            Err(SeekerError::InvalidOperatorForType {
                op: self.op.as_str(),
                value_type: self.value.type_name(),
            })
        }
    }

    /// Checks that a field value can be compared with this clause.
    ///
    /// Absent values are accepted: optional fields are legitimately missing.
    pub fn check_field(&self, field_value: &Value<'_>) -> Result<()> {
        let compatible = matches!(
            (&self.value, field_value),
            (_, Value::None)
                | (ClauseValue::String(_), Value::String(_) | Value::List(_))
                | (ClauseValue::Number(_), Value::Number(_))
                | (ClauseValue::Enum(_) | ClauseValue::EnumSet(_), Value::Enum(_))
                | (ClauseValue::Bool(_), Value::Bool(_))
        );
        if compatible {
            Ok(())
        } else {
            Err(SeekerError::TypeMismatch {
                field: self.field.clone(),
                expected: self.value.type_name(),
                actual: field_value.type_name(),
            })
        }
    }

    fn match_string(&self, field: &str, pattern: &str) -> bool {
        match self.case {
            Case::Sensitive => string_op(self.op, field, pattern),
            Case::Insensitive => {
                string_op(self.op, &field.to_lowercase(), &pattern.to_lowercase())
            }
        }
    }

    // Positive operators match when any element matches; `Ne` only when no
    // element is equal.
    fn match_list(&self, items: &[String], pattern: &str) -> bool {
        if self.op == Op::Ne {
            items.iter().all(|item| self.match_string(item, pattern))
        } else {
            items.iter().any(|item| self.match_string(item, pattern))
        }
    }
}

fn string_op(op: Op, field: &str, pattern: &str) -> bool {
    match op {
        Op::Eq => field == pattern,
        Op::Ne => field != pattern,
        Op::Contains => field.contains(pattern),
        _ => false,
    }
}

/// Owned comparison value stored in a clause.
#[derive(Debug, Clone, PartialEq)]
pub enum ClauseValue {
    String(String),
    Number(Number),
    Enum(u32),
    /// Set of discriminants, for [`Op::In`].
    EnumSet(Vec<u32>),
    Bool(bool),
}

impl ClauseValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            ClauseValue::String(_) => "string",
            ClauseValue::Number(_) => "number",
            ClauseValue::Enum(_) => "enum",
            ClauseValue::EnumSet(_) => "enum set",
            ClauseValue::Bool(_) => "bool",
        }
    }
}

impl From<String> for ClauseValue {
    fn from(s: String) -> Self {
        ClauseValue::String(s)
    }
}

impl From<&str> for ClauseValue {
    fn from(s: &str) -> Self {
        ClauseValue::String(s.to_string())
    }
}

impl From<&String> for ClauseValue {
    fn from(s: &String) -> Self {
        ClauseValue::String(s.clone())
    }
}

impl From<Number> for ClauseValue {
    fn from(n: Number) -> Self {
        ClauseValue::Number(n)
    }
}

impl From<bool> for ClauseValue {
    fn from(b: bool) -> Self {
        ClauseValue::Bool(b)
    }
}

impl From<Vec<u32>> for ClauseValue {
    fn from(v: Vec<u32>) -> Self {
        ClauseValue::EnumSet(v)
    }
}

macro_rules! clause_number_from {
    ($($src:ty),*) => {
        $(
            impl From<$src> for ClauseValue {
                fn from(n: $src) -> Self {
                    ClauseValue::Number(Number::from(n))
                }
            }
        )*
    };
}

clause_number_from!(i32, i64, u32, u64, usize, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_ops_fold_case_by_default() {
        let eq = Clause::new("category", Op::Eq, "Technology");
        assert!(eq.matches(&Value::String("technology")));
        assert!(eq.matches(&Value::String("TECHNOLOGY")));
        assert!(!eq.matches(&Value::String("tech")));

        let contains = Clause::new("title", Op::Contains, "BOOT");
        assert!(contains.matches(&Value::String("Annual Coding Bootcamp")));
    }

    #[test]
    fn case_sensitive_clause() {
        let clause = Clause::new("name", Op::Eq, "hello").case_sensitive();
        assert!(clause.matches(&Value::String("hello")));
        assert!(!clause.matches(&Value::String("Hello")));
    }

    #[test]
    fn list_matches_any_element() {
        let tags = vec!["Photography".to_string(), "Art".to_string()];
        assert!(Clause::new("tags", Op::Contains, "photo").matches(&Value::List(&tags)));
        assert!(Clause::new("tags", Op::Eq, "art").matches(&Value::List(&tags)));
        assert!(!Clause::new("tags", Op::Contains, "music").matches(&Value::List(&tags)));
        assert!(!Clause::new("tags", Op::Contains, "x").matches(&Value::List(&[])));
    }

    #[test]
    fn list_ne_requires_no_equal_element() {
        let tags = vec!["a".to_string(), "b".to_string()];
        assert!(!Clause::new("tags", Op::Ne, "A").matches(&Value::List(&tags)));
        assert!(Clause::new("tags", Op::Ne, "c").matches(&Value::List(&tags)));
    }

    #[test]
    fn number_comparisons() {
        let gte = Clause::new("attendees", Op::Gte, 200u32);
        assert!(gte.matches(&Value::Number(Number::U64(200))));
        assert!(!gte.matches(&Value::Number(Number::U64(124))));
        assert!(Clause::new("rating", Op::Lt, 4.5).matches(&Value::Number(Number::F64(4.2))));
        assert!(!Clause::new("r", Op::Eq, 1.0).matches(&Value::Number(Number::F64(f64::NAN))));
    }

    #[test]
    fn enum_and_bool() {
        let eq = Clause::new("status", Op::Eq, ClauseValue::Enum(1));
        assert!(eq.matches(&Value::Enum(1)));
        assert!(!eq.matches(&Value::Enum(0)));

        let set = Clause::new("status", Op::In, vec![0u32, 2]);
        assert!(set.matches(&Value::Enum(2)));
        assert!(!set.matches(&Value::Enum(1)));

        assert!(Clause::new("verified", Op::Eq, true).matches(&Value::Bool(true)));
        assert!(Clause::new("verified", Op::Ne, true).matches(&Value::Bool(false)));
    }

    #[test]
    fn absent_field_never_matches() {
        assert!(!Clause::new("location", Op::Contains, "a").matches(&Value::None));
        assert!(!Clause::new("location", Op::Ne, "a").matches(&Value::None));
    }

    #[test]
    fn type_mismatch_never_matches() {
        let clause = Clause::new("name", Op::Eq, "10");
        assert!(!clause.matches(&Value::Number(Number::I64(10))));
        assert!(!clause.matches(&Value::Bool(true)));
    }

    #[test]
    fn validate_operator_against_value() {
        assert!(Clause::new("a", Op::Contains, "x").validate().is_ok());
        assert!(Clause::new("a", Op::In, vec![1u32]).validate().is_ok());
        assert_eq!(
            Clause::new("a", Op::Gt, "x").validate(),
            Err(SeekerError::InvalidOperatorForType {
                op: "gt",
                value_type: "string"
            })
        );
        assert!(Clause::new("a", Op::Contains, 3i64).validate().is_err());
        assert!(Clause::new("a", Op::In, ClauseValue::Enum(1)).validate().is_err());
    }

    #[test]
    fn check_field_reports_mismatch() {
        let clause = Clause::new("members", Op::Gt, 10u32);
        assert!(clause.check_field(&Value::Number(Number::U64(1))).is_ok());
        assert!(clause.check_field(&Value::None).is_ok());
        let err = clause.check_field(&Value::String("ten")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "type mismatch on 'members': clause expects number, got string"
        );
    }
}
