//! Result wrapper types for displaying operation outcomes.
//!
//! This module provides wrapper types that format the results of booking and
//! room operations with consistent messaging and resource display.

use std::fmt;

use uuid::Uuid;

use crate::models::{BookingOutcome, Room};

/// Wrapper type for displaying the result of create operations.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Room> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Registered room with ID: {}", self.resource.room_id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
pub struct UpdateResult<T> {
    pub resource: T,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for UpdateResult<Room> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated room with ID: {}", self.resource.room_id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Room> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Removed room '{}' (ID: {})",
            self.resource.name, self.resource.room_id
        )
    }
}

/// Wrapper type for displaying a booking verb's outcome.
///
/// Rejections render as friendly one-liners; a successful booking lists
/// every occurrence that was written.
pub struct BookingReport(pub BookingOutcome);

impl fmt::Display for BookingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            BookingOutcome::Booked {
                series_id,
                room_id,
                reservations,
            } => {
                writeln!(
                    f,
                    "Booked series {series_id} in room {room_id} ({} occurrence(s))",
                    reservations.len()
                )?;
                writeln!(f)?;
                for reservation in reservations {
                    write!(f, "{}", reservation)?;
                }
                Ok(())
            }
            BookingOutcome::Conflict => {
                writeln!(
                    f,
                    "Rejected: the requested time overlaps an existing reservation."
                )
            }
            BookingOutcome::NoRoomAvailable => {
                writeln!(
                    f,
                    "Rejected: no room with enough capacity is free for every requested week."
                )
            }
        }
    }
}

/// Wrapper type for displaying the result of a series cancellation.
pub struct CancelReport {
    pub series_id: Uuid,
    pub deleted: u64,
}

impl fmt::Display for CancelReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.deleted == 0 {
            writeln!(f, "Series {} had no reservations to cancel.", self.series_id)
        } else {
            writeln!(
                f,
                "Cancelled series {} ({} occurrence(s) removed)",
                self.series_id, self.deleted
            )
        }
    }
}
