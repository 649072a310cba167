//! # Log Source Module
//!
//! The bridge between whoever writes log messages and the window that
//! shows them.
//!
//! ## Plain English
//!
//! Log messages can come from anywhere: a loader thread, a network task,
//! the game loop itself. The log window, on the other hand, only looks at
//! its content once per frame, on the render thread.
//!
//! So we put a mailbox in between. Writers drop messages in whenever they
//! like and never wait. Once per frame the window empties the mailbox into
//! its ring buffer.
//!
//! ```text
//!   thread A ──┐
//!   thread B ──┼──▶ [ intake queue (unbounded) ] ──drain per frame──▶ [ ring buffer (bounded) ]
//!   thread C ──┘
//! ```
//!
//! The queue is created explicitly with [`channel`] and the two ends are
//! passed to whoever needs them. Dropping every [`LogSender`] (or the
//! [`LogSource`]) tears the bridge down.

mod entry;
mod logger;

pub use entry::LogEntry;
pub use logger::{LoggerHandle, QueueLogger};

use crossbeam::channel::{unbounded, Receiver, Sender};
use log::Level;

use crate::buffer::RingBuffer;

// ============================================
// CHANNEL CONSTRUCTION
// ============================================

/// Creates a connected producer/consumer pair.
///
/// The sender can be cloned freely and moved to any thread. The source
/// stays with the single consumer.
pub fn channel() -> (LogSender, LogSource) {
    let (sender, receiver) = unbounded();
    (LogSender { sender }, LogSource { receiver })
}

// ============================================
// PRODUCER SIDE
// ============================================

/// Write-only handle to the intake queue.
///
/// ## Properties
/// - Cheap to clone
/// - `Send + Sync`: share it, or clone it per thread
/// - Never blocks
#[derive(Clone, Debug)]
pub struct LogSender {
    sender: Sender<LogEntry>,
}

impl LogSender {
    /// Queues a message for the log window.
    ///
    /// Returns `false` only if the [`LogSource`] has been dropped, in which
    /// case the message is discarded.
    pub fn enqueue(&self, entry: impl Into<LogEntry>) -> bool {
        self.sender.send(entry.into()).is_ok()
    }

    /// Queues a message with a level and optional category.
    pub fn enqueue_with(
        &self,
        level: Level,
        category: Option<&str>,
        message: impl Into<String>,
    ) -> bool {
        let mut entry = LogEntry::new(message).with_level(level);
        if let Some(category) = category {
            entry = entry.with_category(category);
        }
        self.enqueue(entry)
    }
}

// ============================================
// CONSUMER SIDE
// ============================================

/// How many entries a single drain may move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrainLimit {
    /// Keep going until the queue is empty
    #[default]
    Unlimited,

    /// Stop after this many entries
    AtMost(usize),
}

impl From<Option<usize>> for DrainLimit {
    fn from(limit: Option<usize>) -> Self {
        limit.map_or(Self::Unlimited, Self::AtMost)
    }
}

/// What happened during one [`LogSource::drain_into`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrainReport {
    /// Entries moved into the buffer
    pub drained: usize,

    /// Older entries pushed out of the buffer to make room
    pub evicted: usize,

    /// Stopped because of the limit while entries were still queued
    pub capped: bool,
}

/// Read side of the intake queue. Owned by exactly one consumer.
#[derive(Debug)]
pub struct LogSource {
    receiver: Receiver<LogEntry>,
}

impl LogSource {
    /// Takes the oldest queued message, if any. Never blocks.
    pub fn try_dequeue(&self) -> Option<LogEntry> {
        // Empty and disconnected both mean "nothing to show this frame"
        self.receiver.try_recv().ok()
    }

    /// Moves queued messages into `buffer`, oldest first.
    ///
    /// Stops when the queue is empty or `limit` entries have been moved,
    /// whichever comes first. Whatever is left stays queued for next time.
    pub fn drain_into(
        &self,
        buffer: &mut RingBuffer<LogEntry>,
        limit: impl Into<DrainLimit>,
    ) -> DrainReport {
        let max = match limit.into() {
            DrainLimit::Unlimited => usize::MAX,
            DrainLimit::AtMost(max) => max,
        };

        let mut report = DrainReport::default();
        while report.drained < max {
            let Some(entry) = self.try_dequeue() else {
                return report;
            };
            if buffer.push(entry).is_some() {
                report.evicted += 1;
            }
            report.drained += 1;
        }

        report.capped = !self.receiver.is_empty();
        report
    }

    /// Approximate number of queued messages.
    pub fn pending(&self) -> usize {
        self.receiver.len()
    }
}

// ============================================
// TESTS
// ============================================
