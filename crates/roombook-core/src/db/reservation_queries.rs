//! Reservation queries and the transactional series write paths.

use jiff::Timestamp;
use log::warn;
use rusqlite::{params, types::Type, Transaction, TransactionBehavior};
use uuid::Uuid;

use crate::{
    conflict::find_conflict,
    error::{DatabaseResultExt, Result, SchedulerError},
    models::{Interval, Reservation, ScheduleRow},
    params::ScheduleQuery,
};

// SQL queries as const strings for compile-time optimization
const INSERT_RESERVATION_SQL: &str = "INSERT INTO reservations (series_id, room_id, time_start, time_end, competency, students) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_BY_ROOM_AND_RANGE_SQL: &str = "SELECT id, series_id, room_id, time_start, time_end, competency, students FROM reservations WHERE room_id = ?1 AND time_start < ?3 AND time_end > ?2 ORDER BY time_start";
const SELECT_BY_RANGE_SQL: &str = "SELECT id, series_id, room_id, time_start, time_end, competency, students FROM reservations WHERE time_start < ?2 AND time_end > ?1 ORDER BY time_start";
const SELECT_BY_SERIES_SQL: &str = "SELECT id, series_id, room_id, time_start, time_end, competency, students FROM reservations WHERE series_id = ?1 ORDER BY time_start";
const DELETE_SERIES_SQL: &str = "DELETE FROM reservations WHERE series_id = ?1";
const DELETE_RESERVATION_SQL: &str = "DELETE FROM reservations WHERE id = ?1";

/// Result of a transactional series write.
///
/// `Conflict` means the transaction observed an overlap and wrote nothing.
#[derive(Debug)]
pub enum SeriesWrite {
    /// All occurrences were free; the rows were committed.
    Committed(Vec<Reservation>),
    /// An occurrence overlaps an existing reservation; no rows were written.
    Conflict,
}

/// Helper function to construct a Reservation from a database row
fn build_reservation_from_row(row: &rusqlite::Row) -> rusqlite::Result<Reservation> {
    let series_str: String = row.get(1)?;
    let series_id = series_str
        .parse::<Uuid>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e)))?;

    Ok(Reservation {
        id: row.get(0)?,
        series_id,
        room_id: row.get(2)?,
        interval: Interval {
            start: timestamp_from_column(row, 3)?,
            end: timestamp_from_column(row, 4)?,
        },
        competency: row.get(5)?,
        students: row.get::<_, i64>(6)? as u32,
    })
}

impl super::Database {
    /// Reservations in one room whose intervals overlap the given range.
    ///
    /// The SQL range predicate narrows the read; the precise overlap
    /// decision stays with the callers' in-memory scan.
    pub fn reservations_in_room_between(
        &self,
        room_id: &str,
        range: &Interval,
    ) -> Result<Vec<Reservation>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_BY_ROOM_AND_RANGE_SQL)
            .map_err(|e| SchedulerError::database("Failed to prepare query", e))?;

        let reservations = stmt
            .query_map(
                params![
                    room_id,
                    range.start.as_millisecond(),
                    range.end.as_millisecond()
                ],
                build_reservation_from_row,
            )
            .map_err(|e| SchedulerError::database("Failed to query reservations", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| SchedulerError::database("Failed to fetch reservations", e))?;

        Ok(reservations)
    }

    /// Reservations in any room whose intervals overlap the given range.
    pub fn reservations_between(&self, range: &Interval) -> Result<Vec<Reservation>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_BY_RANGE_SQL)
            .map_err(|e| SchedulerError::database("Failed to prepare query", e))?;

        let reservations = stmt
            .query_map(
                params![range.start.as_millisecond(), range.end.as_millisecond()],
                build_reservation_from_row,
            )
            .map_err(|e| SchedulerError::database("Failed to query reservations", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| SchedulerError::database("Failed to fetch reservations", e))?;

        Ok(reservations)
    }

    /// All reservations belonging to a series, ordered by start time.
    pub fn reservations_by_series(&self, series_id: Uuid) -> Result<Vec<Reservation>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_BY_SERIES_SQL)
            .map_err(|e| SchedulerError::database("Failed to prepare query", e))?;

        let reservations = stmt
            .query_map(
                params![series_id.to_string()],
                build_reservation_from_row,
            )
            .map_err(|e| SchedulerError::database("Failed to query series", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| SchedulerError::database("Failed to fetch series", e))?;

        Ok(reservations)
    }

    /// Writes a new series: conflict check and bulk insert in one
    /// transaction.
    ///
    /// The check and the insert share an immediate-mode transaction, so a
    /// concurrent writer cannot slip an overlapping booking in between:
    /// SQLite serializes writers, which closes the check-then-act race for
    /// co-located processes.
    pub fn book_series(
        &mut self,
        series_id: Uuid,
        room_id: &str,
        competency: &str,
        students: u32,
        slots: &[Interval],
    ) -> Result<SeriesWrite> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        if series_has_conflict(&tx, room_id, slots, None)? {
            return Ok(SeriesWrite::Conflict);
        }

        let reservations = insert_series(&tx, series_id, room_id, competency, students, slots)?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(SeriesWrite::Committed(reservations))
    }

    /// Replaces every occurrence of an existing series in one transaction.
    ///
    /// The conflict check excludes the series being edited so it never
    /// collides with itself. Delete and re-insert commit together: no reader
    /// can observe the series half-gone, and a failure leaves the old rows
    /// untouched.
    pub fn replace_series(
        &mut self,
        series_id: Uuid,
        room_id: &str,
        competency: &str,
        students: u32,
        slots: &[Interval],
    ) -> Result<SeriesWrite> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        if series_has_conflict(&tx, room_id, slots, Some(series_id))? {
            return Ok(SeriesWrite::Conflict);
        }

        tx.execute(DELETE_SERIES_SQL, params![series_id.to_string()])
            .map_err(|e| SchedulerError::database("Failed to delete series", e))?;

        let reservations = insert_series(&tx, series_id, room_id, competency, students, slots)?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(SeriesWrite::Committed(reservations))
    }

    /// Deletes every reservation of a series. Idempotent: deleting an
    /// absent series simply removes zero rows.
    pub fn delete_series(&mut self, series_id: Uuid) -> Result<u64> {
        let deleted = self
            .connection
            .execute(DELETE_SERIES_SQL, params![series_id.to_string()])
            .map_err(|e| SchedulerError::database("Failed to delete series", e))?;

        Ok(deleted as u64)
    }

    /// Deletes a single reservation by its surrogate ID.
    ///
    /// Returns whether a row was removed.
    pub fn delete_reservation(&mut self, id: i64) -> Result<bool> {
        let deleted = self
            .connection
            .execute(DELETE_RESERVATION_SQL, params![id])
            .map_err(|e| SchedulerError::database("Failed to delete reservation", e))?;

        Ok(deleted > 0)
    }

    /// Range-bounded schedule read joined with room metadata.
    ///
    /// A reservation whose room is missing from the catalog is reported
    /// with empty room fields and a warning; the read never fails over it.
    pub fn schedule_rows(&self, query: &ScheduleQuery) -> Result<Vec<ScheduleRow>> {
        let mut sql = String::from(
            "SELECT r.id, r.series_id, r.room_id, r.time_start, r.time_end, r.competency, \
             r.students, rm.name, rm.capacity \
             FROM reservations r LEFT JOIN rooms rm ON rm.room_id = r.room_id \
             WHERE r.time_start < ? AND r.time_end > ?",
        );

        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = vec![
            Box::new(query.to.as_millisecond()),
            Box::new(query.from.as_millisecond()),
        ];

        if let Some(ref room_id) = query.room_id {
            sql.push_str(" AND r.room_id = ?");
            params_vec.push(Box::new(room_id.clone()));
        }

        if let Some(ref competency) = query.competency {
            sql.push_str(" AND r.competency = ?");
            params_vec.push(Box::new(competency.clone()));
        }

        sql.push_str(" ORDER BY r.time_start, r.id");

        let mut stmt = self
            .connection
            .prepare(&sql)
            .map_err(|e| SchedulerError::database("Failed to prepare query", e))?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let rows = stmt
            .query_map(&params_refs[..], |row| {
                let reservation = build_reservation_from_row(row)?;
                let room_name: Option<String> = row.get(7)?;
                let room_capacity: Option<i64> = row.get(8)?;
                Ok(ScheduleRow {
                    reservation,
                    room_name,
                    room_capacity: room_capacity.map(|c| c as u32),
                })
            })
            .map_err(|e| SchedulerError::database("Failed to query schedule", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| SchedulerError::database("Failed to fetch schedule", e))?;

        for row in &rows {
            if row.room_name.is_none() {
                warn!(
                    "reservation {} references missing room '{}'",
                    row.reservation.id, row.reservation.room_id
                );
            }
        }

        Ok(rows)
    }
}

/// Reads an INTEGER millisecond column back onto the time axis.
fn timestamp_from_column(row: &rusqlite::Row, index: usize) -> rusqlite::Result<Timestamp> {
    let millis: i64 = row.get(index)?;
    Timestamp::from_millisecond(millis).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(index, Type::Integer, Box::new(e))
    })
}

/// Runs the precise overlap scan for every slot inside the write
/// transaction. The SQL range predicate only narrows the fetch.
fn series_has_conflict(
    tx: &Transaction<'_>,
    room_id: &str,
    slots: &[Interval],
    exclude: Option<Uuid>,
) -> Result<bool> {
    let mut stmt = tx
        .prepare(SELECT_BY_ROOM_AND_RANGE_SQL)
        .map_err(|e| SchedulerError::database("Failed to prepare conflict query", e))?;

    for slot in slots {
        let existing = stmt
            .query_map(
                params![
                    room_id,
                    slot.start.as_millisecond(),
                    slot.end.as_millisecond()
                ],
                build_reservation_from_row,
            )
            .map_err(|e| SchedulerError::database("Failed to query conflicts", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| SchedulerError::database("Failed to fetch conflicts", e))?;

        if find_conflict(&existing, slot, exclude.as_ref()).is_some() {
            return Ok(true);
        }
    }

    Ok(false)
}

/// Inserts one row per slot under the given series ID.
fn insert_series(
    tx: &Transaction<'_>,
    series_id: Uuid,
    room_id: &str,
    competency: &str,
    students: u32,
    slots: &[Interval],
) -> Result<Vec<Reservation>> {
    let mut stmt = tx
        .prepare(INSERT_RESERVATION_SQL)
        .map_err(|e| SchedulerError::database("Failed to prepare insert", e))?;

    let mut reservations = Vec::with_capacity(slots.len());
    for slot in slots {
        stmt.execute(params![
            series_id.to_string(),
            room_id,
            slot.start.as_millisecond(),
            slot.end.as_millisecond(),
            competency,
            students as i64,
        ])
        .map_err(|e| SchedulerError::database("Failed to insert reservation", e))?;

        reservations.push(Reservation {
            id: tx.last_insert_rowid(),
            series_id,
            room_id: room_id.into(),
            interval: *slot,
            competency: competency.into(),
            students,
        });
    }

    Ok(reservations)
}
