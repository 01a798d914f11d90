//! Room catalog CRUD operations and queries.

use rusqlite::{params, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result, SchedulerError},
    models::Room,
};

// SQL queries as const strings for compile-time optimization
const INSERT_ROOM_SQL: &str =
    "INSERT INTO rooms (room_id, name, capacity, equipment) VALUES (?1, ?2, ?3, ?4)";
const SELECT_ROOM_SQL: &str =
    "SELECT room_id, name, capacity, equipment FROM rooms WHERE room_id = ?1";
const CHECK_ROOM_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM rooms WHERE room_id = ?1)";
const SELECT_ROOMS_SQL: &str =
    "SELECT room_id, name, capacity, equipment FROM rooms ORDER BY room_id";
const SELECT_ROOMS_BY_CAPACITY_SQL: &str =
    "SELECT room_id, name, capacity, equipment FROM rooms WHERE capacity >= ?1 ORDER BY room_id";
const UPDATE_ROOM_SQL: &str = "UPDATE rooms SET name = COALESCE(?2, name), capacity = COALESCE(?3, capacity), equipment = COALESCE(?4, equipment) WHERE room_id = ?1";
const COUNT_ROOM_RESERVATIONS_SQL: &str =
    "SELECT COUNT(*) FROM reservations WHERE room_id = ?1";
const DELETE_ROOM_SQL: &str = "DELETE FROM rooms WHERE room_id = ?1";

impl super::Database {
    /// Helper function to construct a Room from a database row
    pub(super) fn build_room_from_row(row: &rusqlite::Row) -> rusqlite::Result<Room> {
        Ok(Room {
            room_id: row.get(0)?,
            name: row.get(1)?,
            capacity: row.get::<_, i64>(2)? as u32,
            equipment: row.get(3)?,
        })
    }

    /// Registers a new room in the catalog.
    ///
    /// The identifier must be unused; registering a taken ID fails with
    /// [`SchedulerError::RoomExists`].
    pub fn create_room(
        &mut self,
        room_id: &str,
        name: &str,
        capacity: u32,
        equipment: Option<&str>,
    ) -> Result<Room> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_ROOM_EXISTS_SQL, params![room_id], |row| row.get(0))
            .map_err(|e| SchedulerError::database("Failed to check room existence", e))?;

        if exists {
            return Err(SchedulerError::RoomExists {
                room_id: room_id.to_string(),
            });
        }

        tx.execute(
            INSERT_ROOM_SQL,
            params![room_id, name, capacity as i64, equipment],
        )
        .map_err(|e| SchedulerError::database("Failed to insert room", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Room {
            room_id: room_id.into(),
            name: name.into(),
            capacity,
            equipment: equipment.map(String::from),
        })
    }

    /// Retrieves a room by its ID.
    pub fn get_room(&self, room_id: &str) -> Result<Option<Room>> {
        self.connection
            .query_row(SELECT_ROOM_SQL, params![room_id], Self::build_room_from_row)
            .optional()
            .map_err(|e| SchedulerError::database("Failed to query room", e))
    }

    /// Lists the whole room catalog, ordered by room ID.
    pub fn list_rooms(&self) -> Result<Vec<Room>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ROOMS_SQL)
            .map_err(|e| SchedulerError::database("Failed to prepare query", e))?;

        let rooms = stmt
            .query_map([], Self::build_room_from_row)
            .map_err(|e| SchedulerError::database("Failed to query rooms", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| SchedulerError::database("Failed to fetch rooms", e))?;

        Ok(rooms)
    }

    /// Lists rooms whose capacity is at least `floor`, ordered by room ID.
    ///
    /// The ordering makes recommendation output deterministic for identical
    /// catalog state.
    pub fn rooms_with_capacity(&self, floor: u32) -> Result<Vec<Room>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ROOMS_BY_CAPACITY_SQL)
            .map_err(|e| SchedulerError::database("Failed to prepare query", e))?;

        let rooms = stmt
            .query_map(params![floor as i64], Self::build_room_from_row)
            .map_err(|e| SchedulerError::database("Failed to query rooms by capacity", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| SchedulerError::database("Failed to fetch rooms by capacity", e))?;

        Ok(rooms)
    }

    /// Applies a partial administrative update to a room.
    ///
    /// Absent fields keep their current value. Returns the updated room, or
    /// [`SchedulerError::RoomNotFound`] if the ID is unknown.
    pub fn update_room(
        &mut self,
        room_id: &str,
        name: Option<&str>,
        capacity: Option<u32>,
        equipment: Option<&str>,
    ) -> Result<Room> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let rows_affected = tx
            .execute(
                UPDATE_ROOM_SQL,
                params![room_id, name, capacity.map(|c| c as i64), equipment],
            )
            .map_err(|e| SchedulerError::database("Failed to update room", e))?;

        if rows_affected == 0 {
            return Err(SchedulerError::RoomNotFound {
                room_id: room_id.to_string(),
            });
        }

        let room = tx
            .query_row(SELECT_ROOM_SQL, params![room_id], Self::build_room_from_row)
            .map_err(|e| SchedulerError::database("Failed to query updated room", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(room)
    }

    /// Removes a room from the catalog.
    ///
    /// A room is deleted only when no reservations reference it; otherwise
    /// the call fails with [`SchedulerError::RoomInUse`] and nothing changes.
    /// Returns the deleted room's details.
    pub fn delete_room(&mut self, room_id: &str) -> Result<Room> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let room = tx
            .query_row(SELECT_ROOM_SQL, params![room_id], Self::build_room_from_row)
            .optional()
            .map_err(|e| SchedulerError::database("Failed to query room", e))?
            .ok_or_else(|| SchedulerError::RoomNotFound {
                room_id: room_id.to_string(),
            })?;

        let referencing: i64 = tx
            .query_row(COUNT_ROOM_RESERVATIONS_SQL, params![room_id], |row| {
                row.get(0)
            })
            .map_err(|e| SchedulerError::database("Failed to count room reservations", e))?;

        if referencing > 0 {
            return Err(SchedulerError::RoomInUse {
                room_id: room_id.to_string(),
                reservations: referencing as u64,
            });
        }

        tx.execute(DELETE_ROOM_SQL, params![room_id])
            .map_err(|e| SchedulerError::database("Failed to delete room", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(room)
    }
}
