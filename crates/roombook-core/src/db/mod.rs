//! Database operations and SQLite management for rooms and reservations.
//!
//! This module is the persistence collaborator of the scheduler: a room
//! catalog and a reservation table behind a small query contract
//! (find-by-range, find-by-series, bulk-insert, bulk-delete). It handles
//! SQLite connections, schema management, and the transactional write paths
//! the upsert protocol relies on.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod reservation_queries;
pub mod room_queries;

pub use reservation_queries::SeriesWrite;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
