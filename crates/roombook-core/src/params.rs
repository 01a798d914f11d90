//! Parameter structures for scheduler operations
//!
//! This module contains shared parameter structures that can be used across
//! different interfaces (CLI, future HTTP API, ...) without framework-specific
//! derives. Interface layers define their own argument types and convert into
//! these, so core logic never depends on clap or any other UI framework.
//!
//! Validation that must happen before any read (malformed intervals, zero
//! repeat counts, empty labels) lives here on the parameter types
//! themselves, keeping the scheduler methods free of field-poking.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, SchedulerError};
use crate::models::Interval;

/// Parameters for booking a (possibly recurring) reservation series.
///
/// Used by both the Add and Edit verbs; Edit additionally carries the series
/// identifier via [`EditBooking`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingRequest {
    /// Target room, or `None` to pick the top recommendation automatically
    pub room_id: Option<String>,
    /// Start of the first-week occurrence
    pub time_start: Timestamp,
    /// End of the first-week occurrence (exclusive)
    pub time_end: Timestamp,
    /// Number of weekly occurrences, including the first (must be ≥ 1)
    pub repeat: u32,
    /// Purpose label for the booking
    pub competency: String,
    /// Number of students; must fit the room's capacity
    pub students: u32,
}

impl BookingRequest {
    /// Validates the request and returns the first-week interval.
    ///
    /// Rejects inverted/empty time ranges, a zero repeat count, a zero
    /// student count, and an empty competency label. Runs before any read.
    pub fn validate(&self) -> Result<Interval> {
        if self.competency.trim().is_empty() {
            return Err(SchedulerError::invalid_input(
                "competency",
                "a booking needs a non-empty purpose label",
            ));
        }
        if self.students == 0 {
            return Err(SchedulerError::invalid_input(
                "students",
                "a booking must be for at least one student",
            ));
        }
        if self.repeat == 0 {
            return Err(SchedulerError::invalid_input(
                "repeat",
                "a booking must occur at least once",
            ));
        }
        Interval::new(self.time_start, self.time_end)
    }
}

/// Parameters for editing an existing series.
///
/// The series keeps its identifier; every occurrence is replaced by the
/// expansion of the embedded request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EditBooking {
    /// Series to replace
    pub series_id: Uuid,
    /// Replacement booking parameters
    #[serde(flatten)]
    pub booking: BookingRequest,
}

/// Generic parameters for operations addressing a whole series.
///
/// Used for cancel and show-series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeriesRef {
    /// The series to operate on
    pub series_id: Uuid,
}

/// Parameters for probing a room for conflicts without writing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConflictProbe {
    /// Series to ignore while scanning (self-exclusion during edits)
    pub exclude_series: Option<Uuid>,
    /// Room to probe
    pub room_id: String,
    /// Start of the first-week occurrence
    pub time_start: Timestamp,
    /// End of the first-week occurrence (exclusive)
    pub time_end: Timestamp,
    /// Number of weekly occurrences (must be ≥ 1)
    pub repeat: u32,
}

impl ConflictProbe {
    /// Validates the probe and returns the first-week interval.
    pub fn validate(&self) -> Result<Interval> {
        if self.repeat == 0 {
            return Err(SchedulerError::invalid_input(
                "repeat",
                "a probe must cover at least one occurrence",
            ));
        }
        Interval::new(self.time_start, self.time_end)
    }
}

/// Parameters for recommending rooms for a recurring request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecommendRequest {
    /// Start of the first-week occurrence
    pub time_start: Timestamp,
    /// End of the first-week occurrence (exclusive)
    pub time_end: Timestamp,
    /// Number of weekly occurrences (must be ≥ 1)
    pub repeat: u32,
    /// Required capacity
    pub students: u32,
}

impl RecommendRequest {
    /// Validates the request and returns the first-week interval.
    pub fn validate(&self) -> Result<Interval> {
        if self.students == 0 {
            return Err(SchedulerError::invalid_input(
                "students",
                "capacity requirement must be at least one student",
            ));
        }
        if self.repeat == 0 {
            return Err(SchedulerError::invalid_input(
                "repeat",
                "a request must cover at least one occurrence",
            ));
        }
        Interval::new(self.time_start, self.time_end)
    }
}

/// Parameters for range-bounded schedule reads and exports.
///
/// The range is half-open: `[from, to)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleQuery {
    /// Inclusive start of the range
    pub from: Timestamp,
    /// Exclusive end of the range
    pub to: Timestamp,
    /// Restrict to a single room
    pub room_id: Option<String>,
    /// Restrict to a single competency label
    pub competency: Option<String>,
}

impl ScheduleQuery {
    /// Validates the query range.
    pub fn validate(&self) -> Result<Interval> {
        Interval::new(self.from, self.to)
    }
}

/// Parameters for registering a new room.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateRoom {
    /// Unique, stable identifier for the room
    pub room_id: String,
    /// Human-readable name
    pub name: String,
    /// Seats available (must be ≥ 1)
    pub capacity: u32,
    /// Free-form equipment description
    pub equipment: Option<String>,
}

impl CreateRoom {
    /// Validates room registration input.
    pub fn validate(&self) -> Result<()> {
        if self.room_id.trim().is_empty() {
            return Err(SchedulerError::invalid_input(
                "room_id",
                "a room needs a non-empty identifier",
            ));
        }
        if self.name.trim().is_empty() {
            return Err(SchedulerError::invalid_input(
                "name",
                "a room needs a non-empty name",
            ));
        }
        if self.capacity == 0 {
            return Err(SchedulerError::invalid_input(
                "capacity",
                "room capacity must be a positive number of seats",
            ));
        }
        Ok(())
    }
}

/// Parameters for an administrative room update.
///
/// Absent fields are left unchanged. The room identity itself is immutable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateRoom {
    /// Room to update
    pub room_id: String,
    /// New name
    pub name: Option<String>,
    /// New capacity (must be ≥ 1 when present)
    pub capacity: Option<u32>,
    /// New equipment description
    pub equipment: Option<String>,
}

impl UpdateRoom {
    /// Validates the update input.
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(SchedulerError::invalid_input(
                    "name",
                    "a room needs a non-empty name",
                ));
            }
        }
        if self.capacity == Some(0) {
            return Err(SchedulerError::invalid_input(
                "capacity",
                "room capacity must be a positive number of seats",
            ));
        }
        Ok(())
    }
}

/// Generic parameters for operations requiring just a room ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoomRef {
    /// The room to operate on
    pub room_id: String,
}
