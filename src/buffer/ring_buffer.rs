//! # Ring Buffer Implementation
//!
//! A fixed-size circular buffer that overwrites old elements when full.
//!
//! ## Plain English
//!
//! Picture a circular track with numbered parking spots.
//! When all spots are full and a new car arrives,
//! the oldest car is towed away to make room.
//!
//! ## Layout
//!
//! All `capacity` slots are allocated up front. We expect a log window to sit
//! at capacity most of the time, so there is little to gain from growing
//! into the space gradually. Element `i` (oldest = 0) lives in slot
//! `(head + i) % capacity`.

use std::iter::FusedIterator;

use crate::error::{LogWindowError, LogWindowResult};

/// A fixed-capacity ring buffer.
///
/// ## Properties
/// - Fixed capacity (doesn't grow, never reallocates)
/// - O(1) push operation
/// - Automatically discards oldest when full
/// - Maintains insertion order
///
/// Not synchronized: wrap it in a lock if more than one thread needs it.
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    /// Backing slots; `None` means nothing is stored there
    slots: Box<[Option<T>]>,

    /// Slot holding the oldest element
    head: usize,

    /// Number of live elements
    count: usize,
}

impl<T> RingBuffer<T> {
    /// Creates a new ring buffer with the given capacity.
    ///
    /// Fails with [`LogWindowError::InvalidArgument`] when `capacity` is zero.
    ///
    /// ## Example
    /// ```
    /// # use frame_log::buffer::RingBuffer;
    /// let buffer: RingBuffer<i32> = RingBuffer::new(100).unwrap();
    /// assert_eq!(buffer.capacity(), 100);
    /// ```
    pub fn new(capacity: usize) -> LogWindowResult<Self> {
        if capacity == 0 {
            return Err(LogWindowError::invalid_argument(
                "capacity",
                "ring buffer capacity must be at least 1",
            ));
        }

        let slots = std::iter::repeat_with(|| None).take(capacity).collect();

        Ok(Self {
            slots,
            head: 0,
            count: 0,
        })
    }

    /// Adds an item to the buffer.
    ///
    /// If the buffer is full, the oldest item is dropped and replaced.
    /// Returns the evicted item, if there was one.
    pub fn push(&mut self, item: T) -> Option<T> {
        let capacity = self.slots.len();
        let tail = (self.head + self.count) % capacity;
        let evicted = self.slots[tail].replace(item);

        if self.count < capacity {
            self.count += 1;
        } else {
            self.head = (self.head + 1) % capacity;
        }

        evicted
    }

    /// Returns the number of items currently stored.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns true if the buffer is at capacity.
    pub fn is_full(&self) -> bool {
        self.count == self.slots.len()
    }

    /// Returns the maximum capacity.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Clears all items from the buffer.
    ///
    /// Every slot is emptied, so nothing stays alive just because the
    /// buffer used to hold it.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.head = 0;
        self.count = 0;
    }

    /// Returns the `index`-th oldest item (0 = oldest).
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.count {
            return None;
        }
        self.slots[(self.head + index) % self.slots.len()].as_ref()
    }

    /// Returns the oldest item without removing it.
    pub fn oldest(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns the newest item without removing it.
    pub fn newest(&self) -> Option<&T> {
        self.count.checked_sub(1).and_then(|last| self.get(last))
    }

    /// Returns an iterator over all items (oldest to newest).
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            buffer: self,
            front: 0,
            back: self.count,
        }
    }
}

impl<T: Clone> RingBuffer<T> {
    /// Returns cloned copies of all items (oldest first).
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================
// ITERATOR
// ============================================

/// Borrowing iterator over a [`RingBuffer`], oldest first.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    buffer: &'a RingBuffer<T>,
    /// Next logical index from the front
    front: usize,
    /// One past the next logical index from the back
    back: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.buffer.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.buffer.get(self.back)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

// ============================================
// TESTS
// ============================================
