//! Selection mode and selected value.

use serde::{Deserialize, Serialize};

use crate::option::OptionValue;

/// Whether the control holds one value or a set of values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectMode {
    /// Click replaces the value and closes the list.
    #[default]
    Single,
    /// Click toggles membership and keeps the list open.
    Multi,
}

/// The current selection.
///
/// Multi values behave as a set: no duplicates, order carries no meaning
/// beyond insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectValue {
    /// Single mode; `None` means nothing selected.
    Single(Option<OptionValue>),
    /// Multi mode.
    Multi(Vec<OptionValue>),
}

impl SelectValue {
    /// The empty value for a mode.
    pub fn empty(mode: SelectMode) -> Self {
        match mode {
            SelectMode::Single => SelectValue::Single(None),
            SelectMode::Multi => SelectValue::Multi(Vec::new()),
        }
    }

    /// A single-mode value.
    pub fn single(value: impl Into<OptionValue>) -> Self {
        SelectValue::Single(Some(value.into()))
    }

    /// A multi-mode value, de-duplicated.
    pub fn multi<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<OptionValue>,
    {
        let mut set: Vec<OptionValue> = Vec::new();
        for value in values {
            let value = value.into();
            if !set.contains(&value) {
                set.push(value);
            }
        }
        SelectValue::Multi(set)
    }

    /// The mode this value belongs to.
    pub fn mode(&self) -> SelectMode {
        match self {
            SelectValue::Single(_) => SelectMode::Single,
            SelectValue::Multi(_) => SelectMode::Multi,
        }
    }

    /// Returns `true` when nothing is selected. An empty string counts as
    /// nothing in single mode.
    pub fn is_empty(&self) -> bool {
        match self {
            SelectValue::Single(None) => true,
            SelectValue::Single(Some(value)) => value.is_empty_text(),
            SelectValue::Multi(values) => values.is_empty(),
        }
    }

    /// Number of selected values.
    pub fn len(&self) -> usize {
        match self {
            SelectValue::Single(_) if self.is_empty() => 0,
            SelectValue::Single(_) => 1,
            SelectValue::Multi(values) => values.len(),
        }
    }

    /// Returns `true` if `value` is selected.
    pub fn contains(&self, value: &OptionValue) -> bool {
        match self {
            SelectValue::Single(current) => current.as_ref() == Some(value),
            SelectValue::Multi(values) => values.contains(value),
        }
    }

    /// The selected values in order.
    pub fn values(&self) -> Vec<&OptionValue> {
        match self {
            SelectValue::Single(_) if self.is_empty() => Vec::new(),
            SelectValue::Single(value) => value.iter().collect(),
            SelectValue::Multi(values) => values.iter().collect(),
        }
    }

    /// Converts this value to `mode`, de-duplicating multi values.
    ///
    /// A multi value moving to single mode keeps its first entry.
    pub fn into_mode(self, mode: SelectMode) -> Self {
        match (self, mode) {
            (SelectValue::Single(value), SelectMode::Single) => SelectValue::Single(value),
            (SelectValue::Single(value), SelectMode::Multi) => {
                SelectValue::multi(value.filter(|v| !v.is_empty_text()))
            }
            (SelectValue::Multi(values), SelectMode::Multi) => SelectValue::multi(values),
            (SelectValue::Multi(values), SelectMode::Single) => {
                SelectValue::Single(values.into_iter().next())
            }
        }
    }

    /// Toggles membership of `value` in a multi value. Single values are
    /// replaced instead.
    pub(crate) fn toggle(&mut self, value: OptionValue) {
        match self {
            SelectValue::Single(current) => *current = Some(value),
            SelectValue::Multi(values) => {
                if let Some(pos) = values.iter().position(|v| *v == value) {
                    values.remove(pos);
                } else {
                    values.push(value);
                }
            }
        }
    }
}

impl Default for SelectValue {
    fn default() -> Self {
        SelectValue::empty(SelectMode::Single)
    }
}
