//! # Frame Log
//!
//! The data side of an in-game log window for an immediate-mode GUI: log
//! messages arrive from any thread, and once per frame the render loop
//! pulls them into a bounded history and decides what to draw.
//!
//! ## Architecture Overview
//!
//! The crate is structured into independent modules:
//!
//! - `buffer`: Ring buffer holding the window's content
//! - `source`: Thread-safe intake queue plus the `log` facade bridge
//! - `filter`: Include/exclude text filter
//! - `generator`: Sample log traffic for demos
//! - `config`: Window configuration
//! - `error`: Error types
//!
//! [`LogWindow`] ties them together. It owns no GUI code: each frame it
//! takes a [`FrameInput`] describing what the user did and returns a
//! [`Frame`] describing what to draw.

// ============================================
// MODULE DECLARATIONS
// ============================================

pub mod buffer;
pub mod config;
pub mod error;
pub mod filter;
pub mod generator;
pub mod source;

// ============================================
// RE-EXPORTS
// ============================================

pub use buffer::RingBuffer;
pub use config::Config;
pub use error::{LogWindowError, LogWindowResult};
pub use filter::TextFilter;
pub use source::{channel, DrainReport, LogEntry, LogSender, LogSource, LoggerHandle, QueueLogger};

// ============================================
// IMPORTS
// ============================================

use log::{info, warn};

/// Header shown above filtered content
pub const FILTER_HEADER: &str = "Entries matching active filter:";

/// Shown when the filter hides everything
pub const NO_MATCHES: &str = "No matches!";

// ============================================
// PER-FRAME INPUT
// ============================================

/// Something the user did to the window this frame.
#[derive(Clone, Debug, PartialEq)]
pub enum WindowAction {
    /// Show the window
    Open,
    /// Hide the window (content keeps accumulating)
    Close,
    /// Forget all content
    Clear,
    /// Put the visible lines on the clipboard
    CopyToClipboard,
    /// Toggle following the newest entry
    SetAutoScroll(bool),
    /// Replace the filter text
    SetFilter(String),
}

/// Scroll position of the content pane as of the previous frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    /// Current scroll offset
    pub y: f32,
    /// Largest possible scroll offset
    pub max_y: f32,
}

impl ScrollState {
    /// True when the pane is scrolled all the way down.
    pub fn at_bottom(&self) -> bool {
        self.y >= self.max_y
    }
}

/// Everything the window needs to know about the current frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// User actions, applied in order
    pub actions: Vec<WindowAction>,
    /// Where the content pane is scrolled to
    pub scroll: ScrollState,
}

impl FrameInput {
    /// A frame where the user did nothing.
    pub fn idle() -> Self {
        Self::default()
    }

    /// A frame with the given actions and the pane at the top.
    pub fn with_actions(actions: impl IntoIterator<Item = WindowAction>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            ..Self::default()
        }
    }
}

// ============================================
// PER-FRAME OUTPUT
// ============================================

/// How a content line should be drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStyle {
    /// Unformatted text
    Plain,
    /// Bulleted text (used while filtering)
    Bullet,
}

/// One line of the content pane.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayLine {
    pub text: String,
    pub style: LineStyle,
}

impl DisplayLine {
    fn plain(text: String) -> Self {
        Self {
            text,
            style: LineStyle::Plain,
        }
    }

    fn bullet(text: String) -> Self {
        Self {
            text,
            style: LineStyle::Bullet,
        }
    }
}

/// What to draw this frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    /// Draw the window at all?
    pub open: bool,
    /// Text above the content, if any
    pub header: Option<&'static str>,
    /// Content lines, oldest first
    pub lines: Vec<DisplayLine>,
    /// Text to place on the clipboard, if a copy was requested
    pub clipboard: Option<String>,
    /// Scroll the pane to the bottom after drawing
    pub scroll_to_bottom: bool,
    /// What the intake drain did this frame
    pub drain: DrainReport,
}

// ============================================
// WINDOW STATE
// ============================================

/// Runtime statistics for monitoring
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WindowStats {
    /// Frames processed
    pub frames: u64,
    /// Entries taken from the intake queue
    pub messages_received: u64,
    /// Entries pushed out of the history
    pub entries_evicted: u64,
    /// Frames where the drain limit was hit
    pub capped_frames: u64,
}

/// The log window.
///
/// ## Plain English
///
/// This is the "control center" of the window:
/// - Empties the intake queue into its history every frame
/// - Remembers the filter, auto-scroll and open/closed state
/// - Works out which lines to show
///
/// It lives on the render thread and is never shared.
pub struct LogWindow {
    /// Where new messages come from
    source: LogSource,

    /// The most recent messages
    content: RingBuffer<LogEntry>,

    /// Current filter
    filter: TextFilter,

    /// Follow the newest entry?
    auto_scroll: bool,

    /// Is the window shown?
    is_open: bool,

    /// Was the previous frame's drain capped?
    was_capped: bool,

    /// Window configuration
    config: Config,

    /// Statistics about operation
    stats: WindowStats,
}

impl LogWindow {
    /// Creates a window reading from `source`.
    ///
    /// ## Returns
    /// A new `LogWindow`, or the first configuration problem found
    pub fn new(source: LogSource, config: Config) -> LogWindowResult<Self> {
        if let Some(error) = config.validate().into_iter().next() {
            return Err(error.into());
        }

        let content = RingBuffer::new(config.max_entry_count)?;

        info!(
            "Creating log window: {} entries, drain limit {:?}",
            config.max_entry_count, config.max_drain_per_frame
        );

        Ok(Self {
            source,
            content,
            filter: TextFilter::default(),
            auto_scroll: config.auto_scroll,
            is_open: config.start_open,
            was_capped: false,
            config,
            stats: WindowStats::default(),
        })
    }

    /// Creates a window fed by the `log` facade.
    ///
    /// Builds the intake queue, installs a [`QueueLogger`] at
    /// `config.capture_level` and returns the window plus the logger's
    /// handle. Keep the handle alive for as long as the window should
    /// receive records.
    pub fn with_logger(config: Config) -> LogWindowResult<(Self, LoggerHandle)> {
        let (sender, source) = channel();
        let window = Self::new(source, config)?;
        let handle = QueueLogger::new(sender, window.config.capture_level).install()?;
        Ok((window, handle))
    }

    /// Runs one frame.
    ///
    /// Drains the intake (even while closed, so the queue doesn't pile up),
    /// applies the user's actions, then describes what to draw.
    pub fn update(&mut self, input: FrameInput) -> Frame {
        self.stats.frames += 1;
        let drain = self.drain();

        let mut copy_requested = false;
        for action in input.actions {
            match action {
                WindowAction::Open => self.is_open = true,
                WindowAction::Close => self.is_open = false,
                WindowAction::Clear => self.content.clear(),
                WindowAction::CopyToClipboard => copy_requested = true,
                WindowAction::SetAutoScroll(enabled) => self.auto_scroll = enabled,
                WindowAction::SetFilter(text) => self.filter.set_text(text),
            }
        }

        if !self.is_open {
            return Frame {
                drain,
                ..Frame::default()
            };
        }

        let (header, lines) = self.visible_lines();
        let clipboard = copy_requested.then(|| Self::clipboard_text(header, &lines));

        Frame {
            open: true,
            header,
            lines,
            clipboard,
            scroll_to_bottom: self.auto_scroll && input.scroll.at_bottom(),
            drain,
        }
    }

    /// Moves queued messages into the history, honouring the drain limit.
    fn drain(&mut self) -> DrainReport {
        let report = self
            .source
            .drain_into(&mut self.content, self.config.max_drain_per_frame);

        self.stats.messages_received += report.drained as u64;
        self.stats.entries_evicted += report.evicted as u64;

        if report.capped {
            self.stats.capped_frames += 1;
            if !self.was_capped {
                warn!(
                    "Log window drain limit ({:?}) hit, {} messages still queued",
                    self.config.max_drain_per_frame,
                    self.source.pending()
                );
            }
        }
        self.was_capped = report.capped;

        report
    }

    /// Works out the header and content lines for the current filter.
    fn visible_lines(&self) -> (Option<&'static str>, Vec<DisplayLine>) {
        if !self.filter.is_active() {
            let lines = self
                .content
                .iter()
                .map(|entry| DisplayLine::plain(self.render(entry)))
                .collect();
            return (None, lines);
        }

        let mut lines: Vec<DisplayLine> = self
            .content
            .iter()
            .map(|entry| self.render(entry))
            .filter(|text| self.filter.passes(text))
            .map(DisplayLine::bullet)
            .collect();

        if lines.is_empty() {
            lines.push(DisplayLine::bullet(NO_MATCHES.to_string()));
        }

        (Some(FILTER_HEADER), lines)
    }

    fn render(&self, entry: &LogEntry) -> String {
        if self.config.show_timestamps {
            entry.timestamped()
        } else {
            entry.to_string()
        }
    }

    fn clipboard_text<'a>(header: Option<&'a str>, lines: &'a [DisplayLine]) -> String {
        header
            .into_iter()
            .chain(lines.iter().map(|line| line.text.as_str()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Returns whether the window is shown.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Returns whether auto-scroll is on.
    pub fn auto_scroll(&self) -> bool {
        self.auto_scroll
    }

    /// Returns the current filter.
    pub fn filter(&self) -> &TextFilter {
        &self.filter
    }

    /// Returns the retained history, oldest first.
    pub fn content(&self) -> &RingBuffer<LogEntry> {
        &self.content
    }

    /// Returns a copy of the current statistics.
    pub fn stats(&self) -> WindowStats {
        self.stats.clone()
    }

    /// Returns a reference to the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

// ============================================
// LOGGING SETUP
// ============================================

/// Initialize console logging for the platform.
///
/// Use this when the log window should NOT capture the program's own
/// records; only one global logger can exist.
pub fn init_logging() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .try_init();
}

// ============================================
// TESTS
// ============================================
