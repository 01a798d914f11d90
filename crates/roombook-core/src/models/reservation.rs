//! Reservation and schedule row models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Interval;

/// One concrete occurrence of a booking.
///
/// A weekly series of N repeats produces N reservation rows sharing one
/// `series_id`; every row in a series carries the same room, competency, and
/// student count, with intervals one week apart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reservation {
    /// Surrogate row identifier assigned by the store
    pub id: i64,

    /// Identifier of the series this occurrence belongs to
    pub series_id: Uuid,

    /// Room the occurrence is booked in
    pub room_id: String,

    /// The occupied `[start, end)` time range
    pub interval: Interval,

    /// Purpose label for the booking
    pub competency: String,

    /// Number of students the booking is for
    pub students: u32,
}

/// A reservation joined with its room's metadata for schedule reads.
///
/// The room fields are optional: a reservation whose room is missing from
/// the catalog is reported with empty metadata and a warning, never as a
/// failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleRow {
    /// The reservation itself
    pub reservation: Reservation,

    /// Room name, if the room still exists
    pub room_name: Option<String>,

    /// Room capacity, if the room still exists
    pub room_capacity: Option<u32>,
}
