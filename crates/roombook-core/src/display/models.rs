//! Display implementations for domain models.
//!
//! All Display impls for core domain models live here, separated from the
//! model definitions. Output is markdown for rich terminal rendering.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{Reservation, Room, ScheduleRow};

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name, self.room_id)?;
        writeln!(f)?;
        writeln!(f, "- **Capacity**: {} seats", self.capacity)?;
        if let Some(equipment) = &self.equipment {
            writeln!(f, "- **Equipment**: {equipment}")?;
        }
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {} in room {} ({} students)",
            self.competency, self.room_id, self.students
        )?;
        writeln!(f)?;
        writeln!(f, "- **From**: {}", LocalDateTime(&self.interval.start))?;
        writeln!(f, "- **To**: {}", LocalDateTime(&self.interval.end))?;
        writeln!(f, "- **Series**: {}", self.series_id)?;
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for ScheduleRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let room = match (&self.room_name, self.room_capacity) {
            (Some(name), Some(capacity)) => {
                format!("{name} ({}, {capacity} seats)", self.reservation.room_id)
            }
            _ => format!("{} (unknown room)", self.reservation.room_id),
        };

        writeln!(
            f,
            "- {} – {} · {} · {} · {} students",
            LocalDateTime(&self.reservation.interval.start),
            LocalDateTime(&self.reservation.interval.end),
            room,
            self.reservation.competency,
            self.reservation.students
        )
    }
}
