//! Error types for the scheduler library.

use std::path::PathBuf;

use thiserror::Error;
use uuid::Uuid;

/// Comprehensive error type for all scheduler operations.
///
/// Booking conflicts are deliberately NOT an error variant: the upsert verbs
/// report them through [`crate::models::BookingOutcome`] so call sites stay
/// exhaustive over the accept/reject decision.
#[derive(Error, Debug)]
pub enum SchedulerError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Room not found for the given ID
    #[error("Room '{room_id}' not found")]
    RoomNotFound { room_id: String },
    /// Attempt to create a room under an ID that is already taken
    #[error("Room '{room_id}' already exists")]
    RoomExists { room_id: String },
    /// Attempt to delete a room that reservations still reference
    #[error("Room '{room_id}' still has {reservations} reservation(s)")]
    RoomInUse { room_id: String, reservations: u64 },
    /// Reservation series not found for the given ID
    #[error("Series {series_id} not found")]
    SeriesNotFound { series_id: Uuid },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl SchedulerError {
    /// Creates a database error with additional context.
    pub fn database(message: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.into(),
            source,
        }
    }

    /// Creates an input validation error for a field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| SchedulerError::database(message, e))
    }
}

/// Result type alias for scheduler operations
pub type Result<T> = std::result::Result<T, SchedulerError>;
