//! Data models for rooms, reservations, and booking outcomes.
//!
//! This module contains the core domain models of the room-booking system.
//! Display implementations live in [`crate::display::models`] to keep data
//! structures separate from presentation logic.
//!
//! The central value type is [`Interval`], a half-open `[start, end)` range
//! of instants; conflict detection, weekly expansion, and schedule reads
//! all go through it. A recurring booking is a set
//! of [`Reservation`] rows sharing a `series_id`; there is no stored series
//! entity.

pub mod interval;
pub mod outcome;
pub mod reservation;
pub mod room;


// Re-export all public types at the models level
pub use interval::{Interval, WEEK};
pub use outcome::BookingOutcome;
pub use reservation::{Reservation, ScheduleRow};
pub use room::Room;
