//! The series upsert verbs: add, edit, cancel.
//!
//! Each verb is a single accept/reject outcome over a whole series. A
//! conflict writes nothing; callers never observe partial success.

use log::info;
use tokio::task;
use uuid::Uuid;

use super::recommend::recommend_available;
use super::Scheduler;
use crate::{
    conflict,
    db::{Database, SeriesWrite},
    error::{Result, SchedulerError},
    models::{BookingOutcome, Interval, Reservation, Room},
    params::{BookingRequest, ConflictProbe, EditBooking, SeriesRef},
    slots,
};

impl Scheduler {
    /// Books a new reservation series.
    ///
    /// The target room is the explicit `room_id`, or the top recommendation
    /// over the full repeat window when none is given. On success every
    /// weekly occurrence is inserted under a freshly generated series ID;
    /// on conflict nothing is written and the outcome says so.
    pub async fn add_booking(&self, params: &BookingRequest) -> Result<BookingOutcome> {
        let first = params.validate()?;
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;

            let Some(room) = resolve_room(&db, &params, &first)? else {
                return Ok(BookingOutcome::NoRoomAvailable);
            };

            let slots = slots::expand_weekly(&first, params.repeat)?;
            let series_id = Uuid::new_v4();

            match db.book_series(
                series_id,
                &room.room_id,
                &params.competency,
                params.students,
                &slots,
            )? {
                SeriesWrite::Committed(reservations) => {
                    info!(
                        "booked series {series_id} in room {} ({} occurrence(s))",
                        room.room_id,
                        reservations.len()
                    );
                    Ok(BookingOutcome::Booked {
                        series_id,
                        room_id: room.room_id,
                        reservations,
                    })
                }
                SeriesWrite::Conflict => Ok(BookingOutcome::Conflict),
            }
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Replaces an existing series under the same series ID.
    ///
    /// Editing a missing series is a failure, unlike cancelling one. The
    /// conflict check excludes the edited series, and delete plus re-insert
    /// commit in one transaction.
    pub async fn edit_booking(&self, params: &EditBooking) -> Result<BookingOutcome> {
        let first = params.booking.validate()?;
        let db_path = self.db_path.clone();
        let series_id = params.series_id;
        let params = params.booking.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;

            if db.reservations_by_series(series_id)?.is_empty() {
                return Err(SchedulerError::SeriesNotFound { series_id });
            }

            let Some(room) = resolve_room(&db, &params, &first)? else {
                return Ok(BookingOutcome::NoRoomAvailable);
            };

            let slots = slots::expand_weekly(&first, params.repeat)?;

            match db.replace_series(
                series_id,
                &room.room_id,
                &params.competency,
                params.students,
                &slots,
            )? {
                SeriesWrite::Committed(reservations) => {
                    info!(
                        "replaced series {series_id} in room {} ({} occurrence(s))",
                        room.room_id,
                        reservations.len()
                    );
                    Ok(BookingOutcome::Booked {
                        series_id,
                        room_id: room.room_id,
                        reservations,
                    })
                }
                SeriesWrite::Conflict => Ok(BookingOutcome::Conflict),
            }
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Cancels a series, removing every occurrence.
    ///
    /// Idempotent: cancelling an unknown or already-cancelled series
    /// succeeds with a zero count.
    pub async fn cancel_booking(&self, params: &SeriesRef) -> Result<u64> {
        let db_path = self.db_path.clone();
        let series_id = params.series_id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let deleted = db.delete_series(series_id)?;
            if deleted > 0 {
                info!("cancelled series {series_id} ({deleted} occurrence(s))");
            }
            Ok(deleted)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves every occurrence of a series, ordered by start time.
    ///
    /// An unknown series yields an empty list.
    pub async fn get_series(&self, params: &SeriesRef) -> Result<Vec<Reservation>> {
        let db_path = self.db_path.clone();
        let series_id = params.series_id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.reservations_by_series(series_id)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Probes a room for conflicts without writing anything.
    ///
    /// Read-only and repeatable; the write path re-checks inside its own
    /// transaction regardless of what this returned.
    pub async fn has_conflict(&self, params: &ConflictProbe) -> Result<bool> {
        let first = params.validate()?;
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            let slots = slots::expand_weekly(&first, params.repeat)?;
            conflict::series_conflicts(&db, params.exclude_series, &params.room_id, &slots)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}

/// Resolves the target room for a booking request.
///
/// An explicit room must exist and fit the student count. With no explicit
/// room, the top recommendation over the full repeat window is used;
/// `None` means no room qualified.
fn resolve_room(
    db: &Database,
    params: &BookingRequest,
    first: &Interval,
) -> Result<Option<Room>> {
    match &params.room_id {
        Some(room_id) => {
            let room = db
                .get_room(room_id)?
                .ok_or_else(|| SchedulerError::RoomNotFound {
                    room_id: room_id.clone(),
                })?;
            if params.students > room.capacity {
                return Err(SchedulerError::invalid_input(
                    "students",
                    format!(
                        "room '{}' seats {}, but the booking is for {}",
                        room.room_id, room.capacity, params.students
                    ),
                ));
            }
            Ok(Some(room))
        }
        None => {
            let mut rooms = recommend_available(db, first, params.repeat, params.students)?;
            if rooms.is_empty() {
                Ok(None)
            } else {
                Ok(Some(rooms.remove(0)))
            }
        }
    }
}
