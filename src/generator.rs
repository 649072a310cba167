//! # Log Generator Module
//!
//! Produces sample log traffic for trying out a log window.
//!
//! ## Plain English
//!
//! A log window with nothing in it is hard to judge. This is the "press a
//! button, get a log line" panel: each [`LogEvent`] writes one message at a
//! particular level, with or without a category.
//!
//! The generator knows nothing about the window or its queue. Messages go
//! through the `log` facade, exactly like the rest of the program's logging,
//! and reach the window only if a [`crate::source::QueueLogger`] is installed.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use log::{Level, Log, Record};

/// Category used by the "with category" debug button
pub const DEBUG_CATEGORY: &str = "Log Source Window - Debug";

/// Category used by the "with category" trace button
pub const TRACE_CATEGORY: &str = "Log Source Window - Trace";

/// Target used when no category was asked for (the module path, so the
/// line shows up uncategorised)
pub const DEFAULT_TARGET: &str = module_path!();

const WORDS: [&str; 5] = [
    "Bumfuzzled",
    "Cattywampus",
    "Snickersnee",
    "Abibliophobia",
    "Absquatulate",
];

// ============================================
// EVENTS
// ============================================

/// One button on the generator panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogEvent {
    /// Debug line
    DebugLine,
    /// Debug line with category
    DebugLineWithCategory,
    /// Trace line
    TraceLine,
    /// Trace line with category
    TraceLineWithCategory,
    /// Info event
    Info,
    /// Warning event
    Warning,
    /// Error event
    Error,
}

impl LogEvent {
    /// Every event, in panel order.
    pub const ALL: [LogEvent; 7] = [
        LogEvent::DebugLine,
        LogEvent::DebugLineWithCategory,
        LogEvent::TraceLine,
        LogEvent::TraceLineWithCategory,
        LogEvent::Info,
        LogEvent::Warning,
        LogEvent::Error,
    ];

    /// Button caption.
    pub fn label(self) -> &'static str {
        match self {
            Self::DebugLine => "Debug line",
            Self::DebugLineWithCategory => "Debug line with category",
            Self::TraceLine => "Trace line",
            Self::TraceLineWithCategory => "Trace line with category",
            Self::Info => "Trace event: info",
            Self::Warning => "Trace event: warning",
            Self::Error => "Trace event: error",
        }
    }

    /// Level the event is logged at.
    pub fn level(self) -> Level {
        match self {
            Self::DebugLine | Self::DebugLineWithCategory => Level::Debug,
            Self::TraceLine | Self::TraceLineWithCategory => Level::Trace,
            Self::Info => Level::Info,
            Self::Warning => Level::Warn,
            Self::Error => Level::Error,
        }
    }

    /// Target (category) the event is logged under.
    pub fn target(self) -> &'static str {
        match self {
            Self::DebugLineWithCategory => DEBUG_CATEGORY,
            Self::TraceLineWithCategory => TRACE_CATEGORY,
            _ => DEFAULT_TARGET,
        }
    }
}

// ============================================
// GENERATOR
// ============================================

/// Writes sample messages through the `log` facade.
#[derive(Debug)]
pub struct LogGenerator {
    /// Reference point for the "elapsed game time" in each message
    started: Instant,

    /// Messages produced so far; also picks the word
    emitted: AtomicUsize,
}

impl LogGenerator {
    /// Creates a generator whose clock starts now.
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            emitted: AtomicUsize::new(0),
        }
    }

    /// Logs `event` through the global logger. Returns the message text.
    ///
    /// Like the `log` macros, nothing is sent when `event` is above the
    /// facade's max level.
    pub fn emit(&self, event: LogEvent) -> String {
        if event.level() <= log::max_level() {
            self.emit_to(log::logger(), event)
        } else {
            self.make_message()
        }
    }

    /// Logs `event` through a specific logger. Returns the message text.
    pub fn emit_to(&self, logger: &dyn Log, event: LogEvent) -> String {
        let message = self.make_message();
        logger.log(
            &Record::builder()
                .args(format_args!("{}", message))
                .level(event.level())
                .target(event.target())
                .module_path_static(Some(module_path!()))
                .build(),
        );
        message
    }

    /// How many messages have been produced.
    pub fn emitted(&self) -> usize {
        self.emitted.load(Ordering::Relaxed)
    }

    fn make_message(&self) -> String {
        let n = self.emitted.fetch_add(1, Ordering::Relaxed);
        let word = WORDS[n % WORDS.len()];
        format!(
            "Hello, elapsed game time {:.2}s, here's a word: {}",
            self.started.elapsed().as_secs_f64(),
            word
        )
    }
}

impl Default for LogGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================
// TESTS
// ============================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{channel, QueueLogger};
    use log::LevelFilter;

    #[test]
    fn test_message_format() {
        let generator = LogGenerator::new();
        let (sender, _source) = channel();
        let logger = QueueLogger::new(sender, LevelFilter::Trace);

        let message = generator.emit_to(&logger, LogEvent::Info);
        assert!(message.starts_with("Hello, elapsed game time "));
        assert!(message.ends_with("here's a word: Bumfuzzled"));
        assert_eq!(generator.emitted(), 1);
    }

    #[test]
    fn test_every_event_reaches_queue() {
        let generator = LogGenerator::new();
        let (sender, source) = channel();
        let logger = QueueLogger::new(sender, LevelFilter::Trace);

        for event in LogEvent::ALL {
            generator.emit_to(&logger, event);
        }

        let entries: Vec<_> = std::iter::from_fn(|| source.try_dequeue()).collect();
        assert_eq!(entries.len(), LogEvent::ALL.len());

        for (entry, event) in entries.iter().zip(LogEvent::ALL) {
            assert_eq!(entry.level, Some(event.level()));
            let expected = match event {
                LogEvent::DebugLineWithCategory => Some(DEBUG_CATEGORY),
                LogEvent::TraceLineWithCategory => Some(TRACE_CATEGORY),
                _ => None,
            };
            assert_eq!(entry.category.as_deref(), expected, "{:?}", event);
        }

        // Uncategorised lines render bare, categorised ones carry a prefix
        assert!(entries[0].to_string().starts_with("Hello, "));
        assert!(entries[1]
            .to_string()
            .starts_with("Log Source Window - Debug: Hello, "));
    }

    #[test]
    fn test_categories() {
        assert_eq!(LogEvent::DebugLineWithCategory.target(), DEBUG_CATEGORY);
        assert_eq!(LogEvent::TraceLineWithCategory.target(), TRACE_CATEGORY);
        assert_eq!(LogEvent::Warning.target(), DEFAULT_TARGET);
        assert_eq!(LogEvent::Error.label(), "Trace event: error");
    }

    #[test]
    fn test_words_rotate() {
        let generator = LogGenerator::new();
        let (sender, _source) = channel();
        let logger = QueueLogger::new(sender, LevelFilter::Off);

        let messages: Vec<_> = (0..6)
            .map(|_| generator.emit_to(&logger, LogEvent::DebugLine))
            .collect();
        assert!(messages[1].ends_with("Cattywampus"));
        assert!(messages[5].ends_with("Bumfuzzled"));
    }
}
