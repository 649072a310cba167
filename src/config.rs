//! # Configuration Module
//!
//! This module handles all configurable settings for a Frame Log window.
//!
//! ## Plain English Explanation
//!
//! A log window has a handful of knobs: how much history to keep, how much
//! work it is allowed to do per frame, and how it starts out. This module
//! defines what those knobs are and what their default values should be.

use log::LevelFilter;
use thiserror::Error;

// ============================================
// LIMITS
// ============================================

/// Smallest allowed history size
pub const MIN_ENTRY_COUNT: usize = 1;

/// Largest allowed history size
pub const MAX_ENTRY_COUNT: usize = 1_000_000;

// ============================================
// MAIN CONFIGURATION
// ============================================

/// All configuration options for a log window
///
/// ## Plain English
///
/// This is the "settings menu" of the log window. Each field is one setting
/// you can adjust to customize how the window behaves.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    // ----------------------------------------
    // CONTENT SETTINGS
    // "How much to remember"
    // ----------------------------------------
    /// How many entries the window keeps before forgetting the oldest
    ///
    /// ## Limits
    /// - Minimum: 1
    /// - Maximum: 1,000,000
    /// - Default: 1000
    pub max_entry_count: usize,

    /// Most entries moved from the intake queue into the window per frame
    ///
    /// ## Plain English
    /// If some background thread goes haywire and floods the log, we don't
    /// want the render loop to stall trying to keep up. Anything over the
    /// limit just waits in the queue for the next frame.
    /// `None` drains everything, every frame.
    pub max_drain_per_frame: Option<usize>,

    /// Most verbose level forwarded by [`crate::source::QueueLogger`]
    pub capture_level: LevelFilter,

    // ----------------------------------------
    // STARTUP SETTINGS
    // "How the window starts out"
    // ----------------------------------------
    /// Keep the view pinned to the newest entry
    pub auto_scroll: bool,

    /// Is the window open when first created?
    pub start_open: bool,

    /// Prefix each line with the time it was logged
    pub show_timestamps: bool,
}

impl Config {
    /// Creates a configuration with all default values
    pub fn new() -> Self {
        Self {
            max_entry_count: 1000,
            max_drain_per_frame: Some(10_000),
            capture_level: LevelFilter::Trace,
            auto_scroll: true,
            start_open: true,
            show_timestamps: false,
        }
    }

    /// Small history, warnings and errors only
    ///
    /// ## When to Use
    /// On-screen overlays where only problems matter.
    pub fn minimal() -> Self {
        Self {
            max_entry_count: 100,
            max_drain_per_frame: Some(1_000),
            capture_level: LevelFilter::Warn,
            ..Self::new()
        }
    }

    /// Large history, no per-frame cap
    ///
    /// ## When to Use
    /// Debugging sessions where losing a line matters more than a slow frame.
    pub fn verbose() -> Self {
        Self {
            max_entry_count: 100_000,
            max_drain_per_frame: None,
            show_timestamps: true,
            ..Self::new()
        }
    }

    /// Validates the configuration and returns errors if invalid
    ///
    /// ## Plain English
    /// Makes sure all settings are within reasonable bounds.
    /// Returns a list of problems, or empty if all is well.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.max_entry_count < MIN_ENTRY_COUNT {
            errors.push(ConfigError::EntryCountTooSmall(self.max_entry_count));
        }
        if self.max_entry_count > MAX_ENTRY_COUNT {
            errors.push(ConfigError::EntryCountTooLarge(self.max_entry_count));
        }

        if self.max_drain_per_frame == Some(0) {
            errors.push(ConfigError::ZeroDrainLimit);
        }

        errors
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================
// CONFIGURATION ERRORS
// ============================================

/// Errors that can occur with configuration values
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// History would hold nothing
    #[error("Max entry count {0} is too small (minimum 1)")]
    EntryCountTooSmall(usize),

    /// History would use an unreasonable amount of memory
    #[error("Max entry count {0} is too large (maximum 1000000)")]
    EntryCountTooLarge(usize),

    /// A drain limit of zero would never show anything
    #[error("Per-frame drain limit must be at least 1 (use no limit to drain everything)")]
    ZeroDrainLimit,
}

// ============================================
// TESTS
// ============================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.max_entry_count, 1000);
        assert_eq!(config.max_drain_per_frame, Some(10_000));
        assert!(config.auto_scroll);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(Config::minimal().validate().is_empty());
        assert!(Config::verbose().validate().is_empty());
        assert_eq!(Config::minimal().capture_level, LevelFilter::Warn);
        assert_eq!(Config::verbose().max_drain_per_frame, None);
        assert!(Config::verbose().show_timestamps);
        assert!(!Config::default().show_timestamps);
    }

    #[test]
    fn test_validation_errors() {
        let mut config = Config::default();

        config.max_entry_count = 0;
        assert_eq!(config.validate(), vec![ConfigError::EntryCountTooSmall(0)]);

        config.max_entry_count = MAX_ENTRY_COUNT + 1;
        assert_eq!(
            config.validate(),
            vec![ConfigError::EntryCountTooLarge(MAX_ENTRY_COUNT + 1)]
        );

        // Fix it
        config.max_entry_count = 10;
        assert!(config.validate().is_empty());

        config.max_drain_per_frame = Some(0);
        assert_eq!(config.validate(), vec![ConfigError::ZeroDrainLimit]);
    }

    #[test]
    fn test_collects_every_problem() {
        let config = Config {
            max_entry_count: 0,
            max_drain_per_frame: Some(0),
            ..Config::default()
        };
        assert_eq!(config.validate().len(), 2);
    }
}
