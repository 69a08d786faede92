//! Field access traits.

use crate::value::Value;

/// Types whose fields can be read by name for filtering and sorting.
///
/// ```
/// use eventhub_seeker::{Number, Query, Seekable, Value};
///
/// struct Club {
///     name: String,
///     members: u32,
/// }
///
/// impl Seekable for Club {
///     fn seeker_field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "name" => Value::String(&self.name),
///             "members" => Value::Number(Number::from(self.members)),
///             _ => Value::None,
///         }
///     }
/// }
///
/// let clubs = vec![
///     Club { name: "Chess Circle".into(), members: 40 },
///     Club { name: "Book Club".into(), members: 90 },
/// ];
/// let query = Query::new().order_desc("members");
/// let sorted = query.filter(&clubs, Club::accessor);
/// assert_eq!(sorted[0].name, "Book Club");
/// ```
pub trait Seekable {
    /// Returns the value of `field`, or [`Value::None`] for unknown fields.
    fn seeker_field_value(&self, field: &str) -> Value<'_>;

    /// Function-pointer form of [`seeker_field_value`](Self::seeker_field_value),
    /// for the query execution methods.
    fn accessor<'a>(item: &'a Self, field: &str) -> Value<'a>
    where
        Self: Sized,
    {
        item.seeker_field_value(field)
    }
}

/// Stable discriminants for enum fields.
///
/// Use explicit values rather than declaration order so that stored
/// clauses keep meaning the same variant.
pub trait SeekerEnum {
    fn seeker_discriminant(&self) -> u32;
}
