//! Administrative room catalog operations.

use tokio::task;

use super::Scheduler;
use crate::{
    db::Database,
    error::{Result, SchedulerError},
    models::Room,
    params::{CreateRoom, RoomRef, UpdateRoom},
};

impl Scheduler {
    /// Registers a new room in the catalog.
    pub async fn create_room(&self, params: &CreateRoom) -> Result<Room> {
        params.validate()?;
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_room(
                &params.room_id,
                &params.name,
                params.capacity,
                params.equipment.as_deref(),
            )
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a room by its ID.
    pub async fn get_room(&self, params: &RoomRef) -> Result<Option<Room>> {
        let db_path = self.db_path.clone();
        let room_id = params.room_id.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_room(&room_id)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists the whole room catalog, ordered by room ID.
    pub async fn list_rooms(&self) -> Result<Vec<Room>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_rooms()
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Applies a partial administrative update to a room.
    pub async fn update_room(&self, params: &UpdateRoom) -> Result<Room> {
        params.validate()?;
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.update_room(
                &params.room_id,
                params.name.as_deref(),
                params.capacity,
                params.equipment.as_deref(),
            )
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Removes a room from the catalog.
    ///
    /// Fails with [`SchedulerError::RoomInUse`] while reservations still
    /// reference the room. Returns the deleted room's details.
    pub async fn delete_room(&self, params: &RoomRef) -> Result<Room> {
        let db_path = self.db_path.clone();
        let room_id = params.room_id.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_room(&room_id)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
