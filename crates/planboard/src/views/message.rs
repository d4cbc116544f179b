//! Status messages attached to views.

use console::Style;
use serde::{Deserialize, Serialize};

/// Severity level for status messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    /// Informational message (neutral)
    Info,
    /// Success message (positive outcome)
    Success,
    /// Warning message (input was degraded, e.g. an unknown filter field)
    Warning,
    /// Error message (something went wrong)
    Error,
}

impl MessageLevel {
    /// Terminal style for this level in text output.
    pub fn style(&self) -> Style {
        match self {
            MessageLevel::Info => Style::new().cyan(),
            MessageLevel::Success => Style::new().green(),
            MessageLevel::Warning => Style::new().yellow(),
            MessageLevel::Error => Style::new().red().bold(),
        }
    }
}

impl std::fmt::Display for MessageLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageLevel::Info => write!(f, "info"),
            MessageLevel::Success => write!(f, "success"),
            MessageLevel::Warning => write!(f, "warning"),
            MessageLevel::Error => write!(f, "error"),
        }
    }
}

/// A status message with severity level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub level: MessageLevel,
    pub text: String,
}

impl Message {
    pub fn new(level: MessageLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(MessageLevel::Info, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(MessageLevel::Success, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(MessageLevel::Warning, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(MessageLevel::Error, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortcuts_set_level() {
        assert_eq!(Message::info("x").level, MessageLevel::Info);
        assert_eq!(Message::success("x").level, MessageLevel::Success);
        assert_eq!(Message::warning("x").level, MessageLevel::Warning);
        assert_eq!(Message::error("x").level, MessageLevel::Error);
    }

    #[test]
    fn serializes_lowercase_level() {
        let json = serde_json::to_string(&Message::warning("unknown field")).unwrap();
        assert_eq!(json, r#"{"level":"warning","text":"unknown field"}"#);
    }
}
