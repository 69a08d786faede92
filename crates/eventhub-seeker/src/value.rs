//! Runtime field values.
//!
//! A [`Value`] is what an accessor hands back for a named field of a record.
//! It borrows from the record, so extracting a value never allocates.

use std::cmp::Ordering;

/// Runtime value of a record field, borrowed from the record.
///
/// # Example
///
/// ```
/// use eventhub_seeker::{Number, Value};
///
/// struct Club {
///     name: String,
///     members: u32,
///     tags: Vec<String>,
/// }
///
/// fn accessor<'a>(club: &'a Club, field: &str) -> Value<'a> {
///     match field {
///         "name" => Value::String(&club.name),
///         "members" => Value::Number(Number::U64(club.members as u64)),
///         "tags" => Value::List(&club.tags),
///         _ => Value::None,
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// Single string.
    String(&'a str),
    /// Multi-valued string field, such as a tag list.
    List(&'a [String]),
    /// Numeric value.
    Number(Number),
    /// Enum discriminant, see [`SeekerEnum`](crate::SeekerEnum).
    Enum(u32),
    /// Boolean value.
    Bool(bool),
    /// Field absent or unknown.
    None,
}

impl<'a> Value<'a> {
    /// Wraps an optional string, mapping `None` to [`Value::None`].
    pub fn opt_str(s: Option<&'a str>) -> Self {
        s.map_or(Value::None, Value::String)
    }

    /// Wraps an optional number, mapping `None` to [`Value::None`].
    pub fn opt_number(n: Option<impl Into<Number>>) -> Self {
        n.map_or(Value::None, |n| Value::Number(n.into()))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Returns the name of this variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Number(_) => "number",
            Value::Enum(_) => "enum",
            Value::Bool(_) => "bool",
            Value::None => "none",
        }
    }

    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&'a [String]> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<u32> {
        match self {
            Value::Enum(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// Numeric value.
///
/// Integers keep their signedness so that counts compare exactly; mixed
/// comparisons fall back to `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    I64(i64),
    U64(u64),
    F64(f64),
}

impl Number {
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Compares two numbers. Returns `None` when either side is NaN.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => Some(a.cmp(&b)),
            (Number::U64(a), Number::U64(b)) => Some(a.cmp(&b)),
            (Number::I64(a), Number::U64(b)) => Some(compare_signed_unsigned(a, b)),
            (Number::U64(a), Number::I64(b)) => Some(compare_signed_unsigned(b, a).reverse()),
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }

    /// Total order for sorting. NaN sorts above every other number.
    pub fn total_compare(self, other: Number) -> Ordering {
        self.compare(other)
            .unwrap_or_else(|| self.to_f64().abs().total_cmp(&other.to_f64().abs()))
    }
}

fn compare_signed_unsigned(a: i64, b: u64) -> Ordering {
    if a < 0 {
        Ordering::Less
    } else {
        (a as u64).cmp(&b)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

macro_rules! number_from {
    ($variant:ident as $target:ty: $($src:ty),*) => {
        $(
            impl From<$src> for Number {
                fn from(n: $src) -> Self {
                    Number::$variant(n as $target)
                }
            }
        )*
    };
}

number_from!(I64 as i64: i8, i16, i32, i64, isize);
number_from!(U64 as u64: u8, u16, u32, u64, usize);
number_from!(F64 as f64: f32, f64);
