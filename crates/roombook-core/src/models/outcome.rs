//! Outcome type for the series upsert verbs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Reservation;

/// The result of an Add or Edit booking operation.
///
/// Rejections are data, not errors: callers match on the outcome and present
/// a friendly message, while genuine store or validation failures travel
/// through [`crate::SchedulerError`]. No partial success is observable: a
/// rejected request writes nothing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum BookingOutcome {
    /// Every weekly occurrence was free; the series was written.
    Booked {
        /// Identifier shared by all occurrences of the series
        series_id: Uuid,
        /// Room the series was placed in
        room_id: String,
        /// The inserted occurrences, ordered by start time
        reservations: Vec<Reservation>,
    },

    /// At least one occurrence overlaps an existing reservation.
    Conflict,

    /// Automatic room resolution found no room with enough capacity that is
    /// free across every requested week.
    NoRoomAvailable,
}

impl BookingOutcome {
    /// Whether the series was written.
    pub fn is_booked(&self) -> bool {
        matches!(self, BookingOutcome::Booked { .. })
    }
}
