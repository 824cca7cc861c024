//! Bounded Trend History for Charting
//!
//! ## Overview
//!
//! A ring buffer of chart points feeding the temperature and humidity
//! trends. Appends are unconditional; once the buffer holds its capacity
//! the oldest point is evicted in the same operation, so the buffer always
//! presents a chronologically ordered window of the most recent points.
//!
//! The caller decides *when* to append. Charts sample far more coarsely
//! than the poll loop, so the session applies a minimum-spacing gate before
//! pushing; the buffer itself stays policy-free.
//!
//! ## Storage
//!
//! Slots are allocated once up front (the default capacity is
//! [`TREND_CAPACITY`](crate::constants::TREND_CAPACITY) points) and reused
//! forever after; a full buffer never reallocates or shifts. Labels are
//! fixed-capacity inline strings, so a point is a small flat value.

use heapless::String as InlineString;

use crate::constants::TREND_CAPACITY;

/// Maximum label length, sized for "HH:MM:SS" with room to spare.
pub const LABEL_CAPACITY: usize = 12;

/// One chart entry: a time label plus the two plotted quantities.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub label: InlineString<LABEL_CAPACITY>,
    pub temperature: f32,
    pub humidity: f32,
}

impl TrendPoint {
    /// Build a point. Labels longer than [`LABEL_CAPACITY`] bytes are
    /// truncated at a character boundary.
    pub fn new(label: &str, temperature: f32, humidity: f32) -> Self {
        let mut inline = InlineString::new();
        for ch in label.chars() {
            if inline.push(ch).is_err() {
                break;
            }
        }
        Self {
            label: inline,
            temperature,
            humidity,
        }
    }
}

/// Fixed-capacity FIFO ring of trend points.
pub struct TrendBuffer {
    data: Vec<Option<TrendPoint>>,
    write_pos: usize,
    len: usize,
}

impl TrendBuffer {
    /// Buffer with the standard chart capacity.
    pub fn new() -> Self {
        Self::with_capacity(TREND_CAPACITY)
    }

    /// Buffer with a custom capacity (at least one slot).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![None; capacity.max(1)],
            write_pos: 0,
            len: 0,
        }
    }

    /// Append a point, evicting the oldest when full.
    pub fn push(&mut self, point: TrendPoint) {
        let capacity = self.data.len();
        self.data[self.write_pos] = Some(point);
        self.write_pos = (self.write_pos + 1) % capacity;

        if self.len < capacity {
            self.len += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.data.len()
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Most recently appended point.
    pub fn last(&self) -> Option<&TrendPoint> {
        if self.is_empty() {
            return None;
        }

        let capacity = self.data.len();
        let idx = if self.write_pos == 0 {
            capacity - 1
        } else {
            self.write_pos - 1
        };

        self.data[idx].as_ref()
    }

    /// Point by logical index (0 = oldest, len-1 = newest).
    ///
    /// While the buffer is filling, logical and physical indices match.
    /// Once full, the oldest point sits at `write_pos` and the view is
    /// rotated from there.
    pub fn get(&self, index: usize) -> Option<&TrendPoint> {
        if index >= self.len {
            return None;
        }

        let capacity = self.data.len();
        let actual = if self.len < capacity {
            index
        } else {
            (self.write_pos + index) % capacity
        };

        self.data[actual].as_ref()
    }

    /// Iterate from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &TrendPoint> + '_ {
        (0..self.len).filter_map(move |i| self.get(i))
    }

    /// Drop all points, keeping the allocation.
    pub fn clear(&mut self) {
        self.write_pos = 0;
        self.len = 0;
    }
}

impl Default for TrendBuffer {
    fn default() -> Self {
        Self::new()
    }
}
