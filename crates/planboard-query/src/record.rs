//! The record access trait.
//!
//! The engine is generic over record shape. A type becomes queryable by
//! implementing [`Record`], which maps field names to [`Value`]s and declares
//! which fields free-text search looks at and how sortable fields compare.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QueryError;
use crate::value::Value;

/// Declared comparison semantics for a sortable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Compared on lower-cased text.
    Text,
    /// Compared in natural numeric order.
    Number,
    /// Compared chronologically.
    Date,
}

impl FieldKind {
    /// Returns the display name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Date => "date",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "string" => Ok(FieldKind::Text),
            "number" | "numeric" => Ok(FieldKind::Number),
            "date" => Ok(FieldKind::Date),
            _ => Err(QueryError::UnknownFieldKind(s.to_string())),
        }
    }
}

/// Trait for types that can be searched, filtered and sorted.
///
/// # Example
///
/// ```
/// use planboard_query::{FieldKind, Number, Record, Value};
///
/// struct Project {
///     name: String,
///     progress: u8,
/// }
///
/// impl Record for Project {
///     fn field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "name" => Value::String(&self.name),
///             "progress" => Value::Number(Number::from(self.progress)),
///             _ => Value::None,
///         }
///     }
///
///     fn search_fields() -> &'static [&'static str] {
///         &["name"]
///     }
///
///     fn field_kind(field: &str) -> Option<FieldKind> {
///         match field {
///             "name" => Some(FieldKind::Text),
///             "progress" => Some(FieldKind::Number),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Record {
    /// Returns the value of a field, or [`Value::None`] if the field
    /// doesn't exist or is unset.
    fn field_value(&self, field: &str) -> Value<'_>;

    /// Text fields that free-text search looks at.
    fn search_fields() -> &'static [&'static str]
    where
        Self: Sized,
    {
        &[]
    }

    /// Declared comparison type of a sortable field.
    ///
    /// `None` means the field is not declared; sorting on it falls back to
    /// the natural order of whatever values the record returns.
    fn field_kind(_field: &str) -> Option<FieldKind>
    where
        Self: Sized,
    {
        None
    }
}

impl<R: Record> Record for &R {
    fn field_value(&self, field: &str) -> Value<'_> {
        (**self).field_value(field)
    }

    fn search_fields() -> &'static [&'static str] {
        R::search_fields()
    }

    fn field_kind(field: &str) -> Option<FieldKind> {
        R::field_kind(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        name: String,
    }

    impl Record for Item {
        fn field_value(&self, field: &str) -> Value<'_> {
            match field {
                "name" => Value::String(&self.name),
                _ => Value::None,
            }
        }
    }

    #[test]
    fn defaults_declare_nothing() {
        assert!(Item::search_fields().is_empty());
        assert_eq!(Item::field_kind("name"), None);
    }

    #[test]
    fn unknown_field_is_none() {
        let item = Item {
            name: "x".to_string(),
        };
        assert_eq!(item.field_value("name"), Value::String("x"));
        assert_eq!(item.field_value("missing"), Value::None);
    }

    #[test]
    fn references_forward_to_the_record() {
        let item = Item {
            name: "x".to_string(),
        };
        let by_ref = &item;
        assert_eq!(by_ref.field_value("name"), Value::String("x"));
    }

    #[test]
    fn field_kind_parsing() {
        assert_eq!("text".parse::<FieldKind>().unwrap(), FieldKind::Text);
        assert_eq!("Number".parse::<FieldKind>().unwrap(), FieldKind::Number);
        assert_eq!("date".parse::<FieldKind>().unwrap(), FieldKind::Date);
        assert!("colour".parse::<FieldKind>().is_err());
    }
}
