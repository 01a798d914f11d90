//! Conflict detection for candidate booking intervals.
//!
//! The store narrows its reads with a SQL range predicate, but the decision
//! is always made here by the precise half-open overlap scan. The fetch is
//! an optimization, never the conflict criterion.

use log::debug;
use uuid::Uuid;

use crate::db::Database;
use crate::error::Result;
use crate::models::{Interval, Reservation};

/// Scans fetched reservations for the first true overlap with a candidate.
///
/// Reservations belonging to `exclude` are skipped; that is how editing a
/// series avoids colliding with itself.
pub fn find_conflict<'a>(
    existing: &'a [Reservation],
    candidate: &Interval,
    exclude: Option<&Uuid>,
) -> Option<&'a Reservation> {
    existing.iter().find(|reservation| {
        if exclude.is_some_and(|series_id| reservation.series_id == *series_id) {
            return false;
        }
        reservation.interval.overlaps(candidate)
    })
}

/// Checks a candidate occurrence set against a room's existing bookings.
///
/// Returns `true` on the first overlap found. Reads only; safe to call any
/// number of times without mutating state. The write path re-runs the same
/// scan inside its transaction, so this check is advisory for callers that
/// want to probe before committing.
pub fn series_conflicts(
    db: &Database,
    exclude: Option<Uuid>,
    room_id: &str,
    slots: &[Interval],
) -> Result<bool> {
    for slot in slots {
        let existing = db.reservations_in_room_between(room_id, slot)?;
        if let Some(hit) = find_conflict(&existing, slot, exclude.as_ref()) {
            debug!(
                "conflict in room {room_id}: candidate [{} .. {}) overlaps reservation {}",
                slot.start, slot.end, hit.id
            );
            return Ok(true);
        }
    }
    Ok(false)
}
