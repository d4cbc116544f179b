//! Options offered by a select control.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Primitive value carried by an option.
///
/// `Display` gives the stringified form that search and the label fallback
/// use.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// Boolean value.
    Bool(bool),
    /// Integer value, e.g. a record id.
    Int(i64),
    /// Text value.
    Text(String),
}

impl OptionValue {
    /// Returns `true` for the empty string, which selects nothing.
    pub fn is_empty_text(&self) -> bool {
        matches!(self, OptionValue::Text(s) if s.is_empty())
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(b) => write!(f, "{b}"),
            OptionValue::Int(n) => write!(f, "{n}"),
            OptionValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Text(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::Text(s)
    }
}

impl From<i64> for OptionValue {
    fn from(n: i64) -> Self {
        OptionValue::Int(n)
    }
}

impl From<u32> for OptionValue {
    fn from(n: u32) -> Self {
        OptionValue::Int(n as i64)
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        OptionValue::Bool(b)
    }
}

/// One entry in the option list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// The value written back on selection.
    pub value: OptionValue,
    /// Text shown in the list and in the closed control.
    pub label: String,
    /// Secondary line shown under the label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Disabled options are shown but never selectable.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
}

impl SelectOption {
    /// Creates an enabled option without a description.
    pub fn new(value: impl Into<OptionValue>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            description: None,
            disabled: false,
        }
    }

    /// Sets the description line.
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Marks the option as disabled.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Case-insensitive match of `needle` (already lower-cased) against the
    /// label or the stringified value.
    pub fn matches_search(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.label.to_lowercase().contains(needle)
            || self.value.to_string().to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_stringifies_values() {
        assert_eq!(OptionValue::from("todo").to_string(), "todo");
        assert_eq!(OptionValue::from(42i64).to_string(), "42");
        assert_eq!(OptionValue::from(true).to_string(), "true");
    }

    #[test]
    fn search_matches_label_or_value() {
        let option = SelectOption::new(7i64, "Sarah Johnson");
        assert!(option.matches_search("sarah"));
        assert!(option.matches_search("7"));
        assert!(option.matches_search(""));
        assert!(!option.matches_search("mike"));
    }

    #[test]
    fn option_serde_round_trip_shape() {
        let option = SelectOption::new("high", "High").description("Needs attention");
        let json = serde_json::to_value(&option).unwrap();
        assert_eq!(json["value"], "high");
        assert_eq!(json["description"], "Needs attention");
        assert!(json.get("disabled").is_none());

        let parsed: SelectOption =
            serde_json::from_str(r#"{"value": 3, "label": "Three", "disabled": true}"#).unwrap();
        assert_eq!(parsed.value, OptionValue::Int(3));
        assert!(parsed.disabled);
    }

    #[test]
    fn empty_text_detection() {
        assert!(OptionValue::from("").is_empty_text());
        assert!(!OptionValue::from("x").is_empty_text());
        assert!(!OptionValue::from(0i64).is_empty_text());
    }
}
