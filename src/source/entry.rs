//! # Log Entry Types
//!
//! Structures for representing one line of log window content.

use std::fmt;

use chrono::{DateTime, Local};
use log::Level;

/// Wall-clock layout used by [`LogEntry::timestamped`]
const TIME_FORMAT: &str = "%H:%M:%S%.3f";

// ============================================
// LOG ENTRY
// ============================================

/// A single message waiting in, or taken from, the intake queue.
///
/// ## Plain English
///
/// This is one "note" for the log window containing:
/// - The text itself
/// - Optionally, which part of the program sent it (its category)
/// - Optionally, how serious it is
/// - When it was written
#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    /// The message text
    pub message: String,

    /// Where the message came from (a `log` target, a subsystem name)
    pub category: Option<String>,

    /// Severity, when the producer supplied one
    pub level: Option<Level>,

    /// When the entry was created
    pub timestamp: DateTime<Local>,
}

impl LogEntry {
    /// Creates a bare entry stamped with the current time.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            category: None,
            level: None,
            timestamp: Local::now(),
        }
    }

    /// Attaches a category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Attaches a severity level.
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    /// Overrides the timestamp.
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Renders the entry with a `[HH:MM:SS.mmm]` time prefix.
    pub fn timestamped(&self) -> String {
        format!("[{}] {}", self.timestamp.format(TIME_FORMAT), self)
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.category {
            Some(category) => write!(f, "{}: {}", category, self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl From<String> for LogEntry {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for LogEntry {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

// ============================================
// TESTS
// ============================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_display_without_category() {
        let entry = LogEntry::new("hello");
        assert_eq!(entry.to_string(), "hello");
    }

    #[test]
    fn test_display_with_category() {
        let entry = LogEntry::new("hello").with_category("renderer");
        assert_eq!(entry.to_string(), "renderer: hello");
    }

    #[test]
    fn test_timestamped() {
        let at = Local.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();
        let entry = LogEntry::new("ready").with_category("net").with_timestamp(at);
        assert_eq!(entry.timestamped(), "[09:26:53.000] net: ready");
        assert_eq!(entry.to_string(), "net: ready");
    }

    #[test]
    fn test_builders() {
        let entry = LogEntry::from("disk almost full")
            .with_level(Level::Warn)
            .with_category("storage");

        assert_eq!(entry.level, Some(Level::Warn));
        assert_eq!(entry.category.as_deref(), Some("storage"));
        assert_eq!(entry.message, "disk almost full");
    }
}
