//! # Content Buffer Module
//!
//! This module provides the circular (ring) buffer that holds a log window's
//! content.
//!
//! ## Plain English Explanation
//!
//! Imagine a notice board with exactly 1000 pins.
//! Every time a new note (log line) arrives:
//! 1. It goes on the next free pin
//! 2. If every pin is taken, the oldest note comes down first
//! 3. Anyone can read the board top to bottom, oldest note first
//!
//! This lets the window always show the most recent lines without using
//! infinite memory, however chatty the rest of the program gets.
//!
//! The buffer is owned by exactly one reader (the window, on the render
//! thread). Other threads never touch it directly: they hand lines to the
//! [`crate::source`] queue instead.

mod ring_buffer;

pub use ring_buffer::{Iter, RingBuffer};
