use roombook_core::params::CreateRoom;
use roombook_core::{Scheduler, SchedulerBuilder};
use tempfile::TempDir;

/// Helper function to create a test scheduler
pub async fn create_test_scheduler() -> (TempDir, Scheduler) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let scheduler = SchedulerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create scheduler");
    (temp_dir, scheduler)
}

/// Registers a room with the given capacity, panicking on failure.
#[allow(dead_code)]
pub async fn add_room(scheduler: &Scheduler, room_id: &str, capacity: u32) {
    scheduler
        .create_room(&CreateRoom {
            room_id: room_id.to_string(),
            name: format!("Room {room_id}"),
            capacity,
            equipment: None,
        })
        .await
        .expect("Failed to create room");
}
