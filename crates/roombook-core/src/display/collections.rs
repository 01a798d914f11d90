//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides newtype wrappers that format collections of domain
//! objects with consistent structure and empty collection handling.

use std::{fmt, ops::Index};

use crate::models::{Reservation, Room, ScheduleRow};

/// Newtype wrapper for displaying the room catalog.
///
/// Handles empty catalogs gracefully; each room formats through its own
/// Display impl.
pub struct Rooms(pub Vec<Room>);

impl Rooms {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of rooms in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the rooms.
    pub fn iter(&self) -> std::slice::Iter<'_, Room> {
        self.0.iter()
    }
}

impl Index<usize> for Rooms {
    type Output = Room;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl fmt::Display for Rooms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No rooms found.")
        } else {
            for room in &self.0 {
                write!(f, "{}", room)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying a set of reservations (typically one
/// series).
pub struct Reservations(pub Vec<Reservation>);

impl Reservations {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of reservations in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the reservations.
    pub fn iter(&self) -> std::slice::Iter<'_, Reservation> {
        self.0.iter()
    }
}

impl fmt::Display for Reservations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No reservations found.")
        } else {
            for reservation in &self.0 {
                write!(f, "{}", reservation)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying a range-bounded schedule.
pub struct Schedule(pub Vec<ScheduleRow>);

impl Schedule {
    /// Check if the schedule is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of schedule rows.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the schedule rows.
    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleRow> {
        self.0.iter()
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No reservations in the selected range.")
        } else {
            for row in &self.0 {
                write!(f, "{}", row)?;
            }
            Ok(())
        }
    }
}
