//! Half-open time interval model and the overlap predicate.

use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulerError};

/// One week as an absolute duration.
///
/// The scheduler performs no timezone normalization: inputs are already
/// normalized instants, and "weekly" means a fixed 168-hour shift.
pub const WEEK: SignedDuration = SignedDuration::from_hours(24 * 7);

/// A half-open time interval `[start, end)` on a single linear time axis.
///
/// All comparisons happen on instants. Two intervals conflict only under the
/// half-open overlap predicate, so an interval ending exactly when another
/// starts is not a conflict.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Interval {
    /// Inclusive start instant
    pub start: Timestamp,

    /// Exclusive end instant
    pub end: Timestamp,
}

impl Interval {
    /// Creates an interval, rejecting empty or inverted ranges.
    pub fn new(start: Timestamp, end: Timestamp) -> Result<Self> {
        if start < end {
            Ok(Self { start, end })
        } else {
            Err(SchedulerError::invalid_input(
                "time range",
                format!("time_start ({start}) must be strictly before time_end ({end})"),
            ))
        }
    }

    /// Half-open overlap: `a.start < b.end && a.end > b.start`.
    ///
    /// Back-to-back adjacency is not overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Length of the interval.
    pub fn duration(&self) -> SignedDuration {
        self.end.duration_since(self.start)
    }

    /// Returns this interval translated by `weeks` whole weeks.
    ///
    /// Overflow of the time axis is reported as a validation error rather
    /// than panicking.
    pub fn shift_weeks(&self, weeks: i32) -> Result<Interval> {
        let shift = WEEK.checked_mul(weeks).ok_or_else(overflow_error)?;
        let start = self.start.checked_add(shift).map_err(|_| overflow_error())?;
        let end = self.end.checked_add(shift).map_err(|_| overflow_error())?;
        Ok(Interval { start, end })
    }
}

fn overflow_error() -> SchedulerError {
    SchedulerError::invalid_input("repeat", "weekly shift overflows the time axis")
}
