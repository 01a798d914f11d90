//! Room recommendation: capacity floor plus availability across every week.

use std::collections::HashSet;

use tokio::task;

use super::Scheduler;
use crate::{
    db::Database,
    error::{Result, SchedulerError},
    models::{Interval, Room},
    params::RecommendRequest,
    slots,
};

impl Scheduler {
    /// Recommends rooms for a (possibly recurring) booking request.
    ///
    /// A room qualifies only if its capacity meets the student count and it
    /// has no overlapping reservation in any requested week; free in week
    /// one alone is not enough. The result keeps catalog order (by room ID),
    /// so identical state always yields the same list.
    pub async fn recommend_rooms(&self, params: &RecommendRequest) -> Result<Vec<Room>> {
        let first = params.validate()?;
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            recommend_available(&db, &first, params.repeat, params.students)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}

/// Shared recommendation body, also used for automatic room resolution in
/// the booking verbs.
pub(crate) fn recommend_available(
    db: &Database,
    first: &Interval,
    repeat: u32,
    students: u32,
) -> Result<Vec<Room>> {
    let candidates = db.rooms_with_capacity(students)?;
    if candidates.is_empty() {
        return Ok(Vec::new());
    }

    let slots = slots::expand_weekly(first, repeat)?;

    // Rooms booked anywhere in the window, across all weeks.
    let mut booked: HashSet<String> = HashSet::new();
    for slot in &slots {
        for reservation in db.reservations_between(slot)? {
            booked.insert(reservation.room_id);
        }
    }

    Ok(candidates
        .into_iter()
        .filter(|room| !booked.contains(&room.room_id))
        .collect())
}
