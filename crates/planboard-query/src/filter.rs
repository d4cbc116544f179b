//! Free-text search and exact-match field filters.
//!
//! A record passes when
//!
//! ```text
//! (search text is empty ∨ some search field contains it, case-insensitively)
//! ∧ (every active field filter equals the record's field)
//! ```
//!
//! Filtering never reorders: matched records keep their input order.

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use tracing::trace;

use crate::error::{QueryError, Result};
use crate::record::Record;
use crate::value::{Number, Timestamp, Value};

/// Sentinel spelling meaning "no constraint".
pub const ALL: &str = "all";

/// Sentinel spelling meaning "field explicitly has no value".
pub const UNASSIGNED: &str = "unassigned";

/// A concrete value a field filter compares against.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Exact string.
    Text(String),
    /// Number, compared numerically across variants.
    Number(Number),
    /// Boolean.
    Bool(bool),
    /// Point in time.
    Date(Timestamp),
}

impl Scalar {
    /// Exact-match test against a field value.
    ///
    /// A list matches when any element matches. Mismatched types never match.
    pub fn matches(&self, value: &Value<'_>) -> bool {
        match (self, value) {
            (Scalar::Text(want), Value::String(have)) => want == have,
            (Scalar::Number(want), Value::Number(have)) => {
                have.compare(*want) == Some(std::cmp::Ordering::Equal)
            }
            (Scalar::Bool(want), Value::Bool(have)) => want == have,
            (Scalar::Date(want), Value::Date(have)) => want == have,
            (_, Value::List(items)) => items.iter().any(|item| self.matches(item)),
            _ => false,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Date(t) => write!(f, "{}", t.as_millis()),
        }
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Scalar::Text(s) => serializer.serialize_str(s),
            Scalar::Number(n) => n.serialize(serializer),
            Scalar::Bool(b) => serializer.serialize_bool(*b),
            Scalar::Date(t) => t.serialize(serializer),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl From<Timestamp> for Scalar {
    fn from(t: Timestamp) -> Self {
        Scalar::Date(t)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Number(Number::I64(n))
    }
}

impl From<u64> for Scalar {
    fn from(n: u64) -> Self {
        Scalar::Number(Number::U64(n))
    }
}

/// The selected value of one field filter.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FilterValue {
    /// No constraint (the "all" choice in a filter dropdown).
    #[default]
    All,
    /// The field must be absent or empty, e.g. "no assignee".
    Unassigned,
    /// The field must equal this value exactly.
    Equals(Scalar),
}

impl FilterValue {
    /// Returns `true` unless this is the [`FilterValue::All`] sentinel.
    pub fn is_active(&self) -> bool {
        !matches!(self, FilterValue::All)
    }

    /// Tests a field value against this filter.
    pub fn matches(&self, value: &Value<'_>) -> bool {
        match self {
            FilterValue::All => true,
            FilterValue::Unassigned => value.is_blank(),
            FilterValue::Equals(scalar) => scalar.matches(value),
        }
    }
}

impl FromStr for FilterValue {
    type Err = Infallible;

    /// Maps the sentinel spellings; anything else is an exact text match.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(if s.is_empty() || s.eq_ignore_ascii_case(ALL) {
            FilterValue::All
        } else if s.eq_ignore_ascii_case(UNASSIGNED) {
            FilterValue::Unassigned
        } else {
            FilterValue::Equals(Scalar::Text(s.to_string()))
        })
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }
}

impl From<Scalar> for FilterValue {
    fn from(scalar: Scalar) -> Self {
        FilterValue::Equals(scalar)
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::All => f.write_str(ALL),
            FilterValue::Unassigned => f.write_str(UNASSIGNED),
            FilterValue::Equals(scalar) => write!(f, "{scalar}"),
        }
    }
}

impl Serialize for FilterValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            FilterValue::All => serializer.serialize_str(ALL),
            FilterValue::Unassigned => serializer.serialize_str(UNASSIGNED),
            FilterValue::Equals(scalar) => scalar.serialize(serializer),
        }
    }
}

/// Field name → selected filter value.
///
/// Keyed by field name so equal filter sets compare equal regardless of the
/// order they were set in.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct FieldFilters(BTreeMap<String, FilterValue>);

impl FieldFilters {
    /// Creates an empty filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets (or replaces) the filter for a field.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<FilterValue>) {
        self.0.insert(field.into(), value.into());
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.set(field, value);
        self
    }

    /// Removes the filter for a field, returning it.
    pub fn remove(&mut self, field: &str) -> Option<FilterValue> {
        self.0.remove(field)
    }

    /// Returns the filter for a field, if any.
    pub fn get(&self, field: &str) -> Option<&FilterValue> {
        self.0.get(field)
    }

    /// Iterates over all filters, including `All` sentinels.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.0.iter().map(|(field, value)| (field.as_str(), value))
    }

    /// Iterates over the filters that actually constrain records.
    pub fn active(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.iter().filter(|(_, value)| value.is_active())
    }

    /// Returns `true` if no filter constrains records.
    pub fn is_unconstrained(&self) -> bool {
        self.active().next().is_none()
    }

    /// Parses a `field=value` expression and sets it.
    pub fn set_assignment(&mut self, expr: &str) -> Result<()> {
        let (field, value) = expr
            .split_once('=')
            .ok_or_else(|| QueryError::MalformedFilter(expr.to_string()))?;
        let field = field.trim();
        if field.is_empty() {
            return Err(QueryError::MalformedFilter(expr.to_string()));
        }
        self.set(field, FilterValue::from(value.trim()));
        Ok(())
    }

    /// Human-readable summary of active filters, e.g. `status=completed`.
    pub fn summary(&self) -> Option<String> {
        let parts: Vec<String> = self
            .active()
            .map(|(field, value)| format!("{field}={value}"))
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

impl<K: Into<String>, V: Into<FilterValue>> FromIterator<(K, V)> for FieldFilters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut filters = FieldFilters::new();
        for (field, value) in iter {
            filters.set(field, value);
        }
        filters
    }
}

/// Tests a single record against search text and field filters.
///
/// `needle` must already be lower-cased; an empty needle matches everything.
pub fn matches<R: Record>(
    record: &R,
    needle: &str,
    search_fields: &[&str],
    field_filters: &FieldFilters,
) -> bool {
    let search_pass = needle.is_empty()
        || search_fields
            .iter()
            .any(|field| record.field_value(field).contains_text(needle));

    if !search_pass {
        return false;
    }

    field_filters
        .active()
        .all(|(field, value)| value.matches(&record.field_value(field)))
}

/// Returns the records matching `search_text` and `field_filters`, in input order.
///
/// Unknown field names degrade to "no match" for that filter rather than failing.
pub fn filter<'a, R: Record>(
    records: &'a [R],
    search_text: &str,
    search_fields: &[&str],
    field_filters: &FieldFilters,
) -> Vec<&'a R> {
    let needle = search_text.to_lowercase();
    let matched: Vec<&'a R> = records
        .iter()
        .filter(|record| matches(*record, &needle, search_fields, field_filters))
        .collect();

    trace!(
        total = records.len(),
        matched = matched.len(),
        search = search_text,
        "filter applied"
    );
    matched
}
