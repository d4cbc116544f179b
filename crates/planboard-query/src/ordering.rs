//! Sort direction, sort specification and the stable sort stage.
//!
//! Comparison depends on the field's declared [`FieldKind`]: text compares
//! lower-cased, numbers and dates compare naturally, NaN after every number.
//! Values that don't fit the declared kind sort after well-typed ones, and
//! missing values sort after both. Descending order is the ascending comparison
//! reversed, so ties resolve the same way in both directions: by input order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::QueryError;
use crate::record::{FieldKind, Record};
use crate::value::{Number, Timestamp, Value};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Returns `true` if this is ascending order.
    pub fn is_asc(self) -> bool {
        matches!(self, Dir::Asc)
    }

    /// Returns `true` if this is descending order.
    pub fn is_desc(self) -> bool {
        matches!(self, Dir::Desc)
    }

    /// Applies this direction to an ascending ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the opposite direction.
    pub fn toggled(self) -> Dir {
        match self {
            Dir::Asc => Dir::Desc,
            Dir::Desc => Dir::Asc,
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dir {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Dir::Asc),
            "desc" | "descending" => Ok(Dir::Desc),
            _ => Err(QueryError::UnknownDirection(s.to_string())),
        }
    }
}

/// The field to sort by and the direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    /// The field to sort by.
    pub field: String,
    /// The sort direction.
    #[serde(default)]
    pub dir: Dir,
}

impl SortSpec {
    /// Creates a sort with the given direction.
    pub fn new(field: impl Into<String>, dir: Dir) -> Self {
        SortSpec {
            field: field.into(),
            dir,
        }
    }

    /// Creates an ascending sort.
    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, Dir::Asc)
    }

    /// Creates a descending sort.
    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, Dir::Desc)
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.dir)
    }
}

/// Pre-extracted comparison key, so text is lower-cased once per record
/// rather than once per comparison.
#[derive(Debug, Clone, PartialEq)]
enum SortKey {
    Text(String),
    Number(Number),
    Date(Timestamp),
    Bool(bool),
    /// Present, but not comparable under the declared kind.
    Unordered,
    Missing,
}

impl SortKey {
    fn extract(kind: Option<FieldKind>, value: Value<'_>) -> SortKey {
        match (kind, value) {
            (_, Value::None) => SortKey::Missing,
            (Some(FieldKind::Text) | None, Value::String(s)) => SortKey::Text(s.to_lowercase()),
            (Some(FieldKind::Number) | None, Value::Number(n)) => SortKey::Number(n),
            (Some(FieldKind::Date) | None, Value::Date(t)) => SortKey::Date(t),
            (None, Value::Bool(b)) => SortKey::Bool(b),
            _ => SortKey::Unordered,
        }
    }

    /// Position among differently-typed keys: well-typed values first, then
    /// values that don't fit the declared kind, then missing values.
    fn rank(&self) -> u8 {
        match self {
            SortKey::Text(_) => 0,
            SortKey::Number(_) => 1,
            SortKey::Date(_) => 2,
            SortKey::Bool(_) => 3,
            SortKey::Unordered => 4,
            SortKey::Missing => 5,
        }
    }

    /// Total order over keys; `sort_by` requires one.
    fn compare(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(*b),
            (SortKey::Date(a), SortKey::Date(b)) => a.cmp(b),
            (SortKey::Bool(a), SortKey::Bool(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Compares two field values under a declared kind, ascending.
pub fn compare_as(kind: Option<FieldKind>, a: &Value<'_>, b: &Value<'_>) -> Ordering {
    SortKey::extract(kind, a.clone()).compare(&SortKey::extract(kind, b.clone()))
}

/// Stable sort of matched records by one field.
///
/// Equal keys keep their input order, so sorting an already sorted list is a
/// no-op. An unrecognized field leaves the order untouched.
pub fn sort<'a, R: Record>(matched: Vec<&'a R>, spec: &SortSpec) -> Vec<&'a R> {
    let kind = R::field_kind(&spec.field);
    let mut keyed: Vec<(SortKey, &'a R)> = matched
        .into_iter()
        .map(|record| (SortKey::extract(kind, record.field_value(&spec.field)), record))
        .collect();

    if kind.is_none() && keyed.iter().all(|(key, _)| *key == SortKey::Missing) {
        debug!(field = %spec.field, "unrecognized sort field, keeping input order");
        return keyed.into_iter().map(|(_, record)| record).collect();
    }

    keyed.sort_by(|(a, _), (b, _)| spec.dir.apply(a.compare(b)));
    trace!(field = %spec.field, dir = %spec.dir, len = keyed.len(), "sorted");
    keyed.into_iter().map(|(_, record)| record).collect()
}
