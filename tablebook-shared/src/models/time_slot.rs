use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// How long a table is held for a booking unless configured otherwise.
pub const DEFAULT_BOOKING_DURATION_MINUTES: i64 = 120;

/// Half-open occupancy window `[start, end)` of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeSlot {
    pub fn starting_at(start: NaiveDateTime, duration: Duration) -> Self {
        Self {
            start,
            end: start + duration,
        }
    }

    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Excludes both boundaries: a guest standing at the door exactly at
    /// `start` or `end` does not pick this slot.
    pub fn strictly_contains(&self, instant: NaiveDateTime) -> bool {
        self.start < instant && instant < self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}
