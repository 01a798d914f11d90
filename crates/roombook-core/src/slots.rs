//! Weekly slot expansion.
//!
//! Turns a first-week interval plus a repeat count into the ordered set of
//! concrete occurrences a recurring booking occupies. This is the only place
//! recurrence arithmetic happens; everything downstream (conflict detection,
//! recommendation, persistence) consumes the expanded intervals.

use crate::error::{Result, SchedulerError};
use crate::models::Interval;

/// Expands a first-week interval into `repeat` weekly occurrences.
///
/// The k-th occurrence is the input shifted by exactly k weeks, so the
/// sequence is strictly increasing in start time and every occurrence has
/// the same duration. `repeat == 1` yields the input unchanged.
///
/// A repeat count of zero is rejected outright: callers must not silently
/// construct an empty series.
pub fn expand_weekly(first: &Interval, repeat: u32) -> Result<Vec<Interval>> {
    if repeat == 0 {
        return Err(SchedulerError::invalid_input(
            "repeat",
            "a booking must occur at least once",
        ));
    }

    let repeat = i32::try_from(repeat).map_err(|_| {
        SchedulerError::invalid_input("repeat", "repeat count is out of range")
    })?;

    let mut slots = Vec::with_capacity(repeat as usize);
    for week in 0..repeat {
        slots.push(first.shift_weeks(week)?);
    }
    Ok(slots)
}
