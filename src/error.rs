//! # Error Types Module
//!
//! This module defines the error types used throughout Frame Log.
//!
//! ## Plain English Explanation
//!
//! Almost nothing in this crate can fail once it is up and running:
//! the intake queue has no size limit, and the ring buffer answers
//! "too full" by forgetting the oldest entry rather than refusing the new
//! one. What CAN go wrong happens while setting things up:
//!
//! - "InvalidArgument: a ring buffer with room for zero entries"
//! - "ConfigError: the drain limit is zero"
//! - "LoggerError: somebody else already installed a global logger"

use thiserror::Error;

use crate::config::ConfigError;

// ============================================
// MAIN LIBRARY ERROR
// ============================================

/// The main error type for Frame Log
///
/// ## Plain English
///
/// Every error this crate hands back is one of these. All of them are
/// construction-time problems: no partially built object is ever returned
/// alongside one.
#[derive(Debug, Error)]
pub enum LogWindowError {
    /// A constructor argument was out of range
    ///
    /// ## Examples
    /// - A ring buffer capacity of zero
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Which argument was rejected
        name: &'static str,
        /// Why it was rejected
        reason: String,
    },

    /// The window configuration failed validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The `log` facade refused our logger
    ///
    /// ## Examples
    /// - Another logger (env_logger, a test harness) was installed first
    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}

impl LogWindowError {
    /// Shorthand for building an [`LogWindowError::InvalidArgument`].
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

// ============================================
// RESULT TYPE ALIAS
// ============================================

/// A Result type that uses LogWindowError
///
/// ## Plain English
///
/// This is a shorthand. Instead of writing:
/// ```text
/// fn do_something() -> Result<Value, LogWindowError>
/// ```
/// We can write:
/// ```text
/// fn do_something() -> LogWindowResult<Value>
/// ```
pub type LogWindowResult<T> = Result<T, LogWindowError>;

// ============================================
// TESTS
// ============================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = LogWindowError::invalid_argument("capacity", "must be at least 1");
        let message = format!("{}", err);
        assert!(message.contains("capacity"));
        assert!(message.contains("at least 1"));
    }

    #[test]
    fn test_config_error_conversion() {
        let err: LogWindowError = ConfigError::ZeroDrainLimit.into();

        match err {
            LogWindowError::Config(ConfigError::ZeroDrainLimit) => {} // Expected
            other => panic!("Expected Config error variant, got {:?}", other),
        }
    }
}
