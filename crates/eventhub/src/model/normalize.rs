//! Defensive normalization of record fields.
//!
//! Data sources are not trusted to respect the record invariants. Instead of
//! rejecting a record, out-of-range values are clamped and malformed
//! optional values are dropped, so a listing can always be rendered.

use serde::{Deserialize, Deserializer};

pub const MAX_RATING: f64 = 5.0;

/// Clamps a signed count into `0..=u32::MAX`.
pub fn clamp_count(raw: i64) -> u32 {
    raw.clamp(0, i64::from(u32::MAX)) as u32
}

/// Drops blank strings.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Drops blank tags, keeping order.
pub fn tags(mut tags: Vec<String>) -> Vec<String> {
    tags.retain(|t| !t.trim().is_empty());
    tags
}

/// A price must be finite and non-negative; anything else is unspecified.
pub fn price(value: Option<f64>) -> Option<f64> {
    value.filter(|p| p.is_finite() && *p >= 0.0)
}

/// A rating must be finite; it is clamped into `0.0..=5.0`.
pub fn rating(value: Option<f64>) -> Option<f64> {
    value
        .filter(|r| r.is_finite())
        .map(|r| r.clamp(0.0, MAX_RATING))
}

// Serde adapters. Counts arrive as signed integers so that a negative value
// in a data file is clamped instead of failing the whole load.

pub(crate) fn de_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    i64::deserialize(deserializer).map(clamp_count)
}

pub(crate) fn de_opt_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<i64>::deserialize(deserializer).map(|v| v.map(clamp_count))
}

pub(crate) fn de_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer).map(price)
}

pub(crate) fn de_rating<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer).map(rating)
}

pub(crate) fn de_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(|v| tags(v.unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_clamp() {
        assert_eq!(clamp_count(-5), 0);
        assert_eq!(clamp_count(42), 42);
        assert_eq!(clamp_count(i64::MAX), u32::MAX);
    }

    #[test]
    fn blanks_become_absent() {
        assert_eq!(non_blank(Some("   ".into())), None);
        assert_eq!(non_blank(Some("x".into())), Some("x".into()));
        assert_eq!(tags(vec!["a".into(), " ".into(), "b".into()]), ["a", "b"]);
    }

    #[test]
    fn price_rules() {
        assert_eq!(price(Some(0.0)), Some(0.0));
        assert_eq!(price(Some(-1.0)), None);
        assert_eq!(price(Some(f64::NAN)), None);
        assert_eq!(price(None), None);
    }

    #[test]
    fn rating_rules() {
        assert_eq!(rating(Some(7.5)), Some(5.0));
        assert_eq!(rating(Some(-1.0)), Some(0.0));
        assert_eq!(rating(Some(f64::INFINITY)), None);
        assert_eq!(rating(Some(4.2)), Some(4.2));
    }
}
