//! Clause operators.

use std::cmp::Ordering;
use std::fmt;

/// How a clause compares its value with a field.
///
/// `Contains` is text-only. The four range operators apply to numbers.
/// `In` takes a set of enum discriminants. `Eq` and `Ne` work everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Eq,
    Ne,
    Contains,
    Gt,
    Gte,
    Lt,
    Lte,
    In,
}

impl Op {
    pub fn is_equality(self) -> bool {
        matches!(self, Op::Eq | Op::Ne)
    }

    pub fn is_range(self) -> bool {
        matches!(self, Op::Gt | Op::Gte | Op::Lt | Op::Lte)
    }

    /// Whether `field.cmp(clause) == ordering` satisfies this operator.
    /// Non-ordering operators never hold.
    pub fn holds(self, ordering: Ordering) -> bool {
        use Ordering::*;
        match self {
            Op::Eq => ordering == Equal,
            Op::Ne => ordering != Equal,
            Op::Gt => ordering == Greater,
            Op::Gte => ordering != Less,
            Op::Lt => ordering == Less,
            Op::Lte => ordering != Greater,
            Op::Contains | Op::In => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "eq",
            Op::Ne => "ne",
            Op::Contains => "contains",
            Op::Gt => "gt",
            Op::Gte => "gte",
            Op::Lt => "lt",
            Op::Lte => "lte",
            Op::In => "in",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
