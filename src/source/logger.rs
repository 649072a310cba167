//! # Queue Logger
//!
//! Routes records from the `log` facade into a log window's intake queue.
//!
//! ## Plain English Explanation
//!
//! Most code doesn't know (or care) that a log window exists. It just calls
//! `log::info!` and friends. This logger sits behind those macros and copies
//! every record into the queue that feeds the window.
//!
//! ```text
//!    log::warn!("low memory")
//!              │
//!              ▼
//!    ┌───────────────────────┐
//!    │      QueueLogger      │  level check, then format
//!    └───────────┬───────────┘
//!                │ LogSender::enqueue
//!                ▼
//!    ┌───────────────────────┐
//!    │     intake queue      │  drained by the window once per frame
//!    └───────────────────────┘
//! ```
//!
//! Nothing is hooked up behind your back: you build the logger from a
//! [`LogSender`], call [`QueueLogger::install`] yourself, and keep the
//! returned [`LoggerHandle`]. Dropping (or detaching) the handle unplugs the
//! logger from the queue.

use std::sync::Arc;

use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::RwLock;

use crate::error::LogWindowResult;
use crate::source::{LogEntry, LogSender};

/// Shared slot holding the sender; `None` once detached
type SenderSlot = Arc<RwLock<Option<LogSender>>>;

// ============================================
// QUEUE LOGGER
// ============================================

/// A [`log::Log`] implementation that forwards records to a [`LogSender`].
pub struct QueueLogger {
    /// Where records go; emptied by [`LoggerHandle::detach`]
    target: SenderSlot,

    /// Most verbose level forwarded
    max_level: LevelFilter,
}

impl QueueLogger {
    /// Creates a logger forwarding records up to `max_level`.
    pub fn new(sender: LogSender, max_level: LevelFilter) -> Self {
        Self {
            target: Arc::new(RwLock::new(Some(sender))),
            max_level,
        }
    }

    /// Returns a handle able to detach this logger later.
    pub fn handle(&self) -> LoggerHandle {
        LoggerHandle {
            target: Arc::clone(&self.target),
        }
    }

    /// Registers this logger with the `log` facade.
    ///
    /// Only one logger can ever be installed per process, so this fails with
    /// [`crate::LogWindowError::Logger`] if something else got there first.
    pub fn install(self) -> LogWindowResult<LoggerHandle> {
        let handle = self.handle();
        let max_level = self.max_level;

        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(max_level);

        log::debug!("Queue logger installed at level {}", max_level);
        Ok(handle)
    }
}

impl Log for QueueLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let target = self.target.read();
        if let Some(sender) = target.as_ref() {
            let mut entry = LogEntry::new(record.args().to_string()).with_level(record.level());
            // A target left at its default (the module path) is not a category
            if record.module_path() != Some(record.target()) {
                entry = entry.with_category(record.target());
            }
            sender.enqueue(entry);
        }
    }

    fn flush(&self) {}
}

// ============================================
// LOGGER HANDLE
// ============================================

/// Keeps a [`QueueLogger`] connected to its queue.
///
/// The `log` facade never gives a logger back once installed, so this
/// handle is how the queue gets released again. Dropping it detaches.
#[derive(Debug)]
#[must_use = "dropping the handle detaches the logger immediately"]
pub struct LoggerHandle {
    target: SenderSlot,
}

impl LoggerHandle {
    /// Stops forwarding records. Safe to call more than once.
    pub fn detach(&self) {
        if self.target.write().take().is_some() {
            log::debug!("Queue logger detached");
        }
    }

    /// Returns true while records are still being forwarded.
    pub fn is_attached(&self) -> bool {
        self.target.read().is_some()
    }
}

impl Drop for LoggerHandle {
    fn drop(&mut self) {
        self.detach();
    }
}

// ============================================
// TESTS
// ============================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::channel;
    use log::Level;

    fn emit(logger: &QueueLogger, level: Level, target: &str, message: &str) {
        logger.log(
            &Record::builder()
                .args(format_args!("{}", message))
                .level(level)
                .target(target)
                .build(),
        );
    }

    #[test]
    fn test_forwards_records() {
        let (sender, source) = channel();
        let logger = QueueLogger::new(sender, LevelFilter::Trace);

        emit(&logger, Level::Warn, "assets", "texture missing");

        let entry = source.try_dequeue().unwrap();
        assert_eq!(entry.message, "texture missing");
        assert_eq!(entry.level, Some(Level::Warn));
        assert_eq!(entry.category.as_deref(), Some("assets"));
        assert_eq!(entry.to_string(), "assets: texture missing");
    }

    #[test]
    fn test_default_target_is_not_a_category() {
        let (sender, source) = channel();
        let logger = QueueLogger::new(sender, LevelFilter::Trace);

        logger.log(
            &Record::builder()
                .args(format_args!("plain line"))
                .level(Level::Info)
                .target("game::loader")
                .module_path(Some("game::loader"))
                .build(),
        );

        let entry = source.try_dequeue().unwrap();
        assert_eq!(entry.category, None);
        assert_eq!(entry.to_string(), "plain line");
    }

    #[test]
    fn test_respects_max_level() {
        let (sender, source) = channel();
        let logger = QueueLogger::new(sender, LevelFilter::Info);

        emit(&logger, Level::Debug, "app", "too chatty");
        emit(&logger, Level::Error, "app", "kept");

        assert_eq!(source.pending(), 1);
        assert_eq!(source.try_dequeue().unwrap().message, "kept");
    }

    #[test]
    fn test_detach_stops_forwarding() {
        let (sender, source) = channel();
        let logger = QueueLogger::new(sender, LevelFilter::Trace);
        let handle = logger.handle();
        assert!(handle.is_attached());

        handle.detach();
        assert!(!handle.is_attached());
        emit(&logger, Level::Info, "app", "lost");
        assert!(source.try_dequeue().is_none());

        // Second detach is harmless
        handle.detach();
    }

    #[test]
    fn test_dropping_handle_detaches() {
        let (sender, source) = channel();
        let logger = QueueLogger::new(sender, LevelFilter::Trace);

        drop(logger.handle());
        emit(&logger, Level::Info, "app", "lost");
        assert_eq!(source.pending(), 0);
    }
}
