//! Core library for the Roombook room-reservation application.
//!
//! This crate provides the business logic for assigning reservation requests
//! to physical rooms: weekly slot expansion, conflict detection over
//! half-open time intervals, room recommendation by capacity and
//! availability, the series-level upsert protocol, and range-bounded
//! schedule reads with CSV export.
//!
//! # Guarantees
//!
//! For any room, no two committed reservations ever overlap under the
//! half-open predicate `a.start < b.end && a.end > b.start`; back-to-back
//! bookings are allowed. The conflict check and the series write share one
//! immediate-mode SQLite transaction, so concurrent writers on the same
//! database cannot race each other into a double-booking. Edits replace a
//! whole series atomically under its existing ID; cancellation is
//! idempotent.
//!
//! # Quick Start
//!
//! ```rust
//! use roombook_core::{SchedulerBuilder, params::{CreateRoom, BookingRequest}};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let scheduler = SchedulerBuilder::new()
//!     .with_database_path(Some("rooms.db"))
//!     .build()
//!     .await?;
//!
//! scheduler
//!     .create_room(&CreateRoom {
//!         room_id: "a101".to_string(),
//!         name: "Lecture Hall A".to_string(),
//!         capacity: 30,
//!         equipment: None,
//!     })
//!     .await?;
//!
//! let outcome = scheduler
//!     .add_booking(&BookingRequest {
//!         room_id: Some("a101".to_string()),
//!         time_start: "2025-10-28T09:00:00Z".parse()?,
//!         time_end: "2025-10-28T10:00:00Z".parse()?,
//!         repeat: 12,
//!         competency: "Linear Algebra".to_string(),
//!         students: 25,
//!     })
//!     .await?;
//! assert!(outcome.is_booked());
//! # Ok(())
//! # }
//! ```

pub mod conflict;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod scheduler;
pub mod slots;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    BookingReport, CancelReport, CreateResult, CsvSchedule, DeleteResult, LocalDateTime,
    Reservations, Rooms, Schedule, UpdateResult,
};
pub use error::{Result, SchedulerError};
pub use models::{BookingOutcome, Interval, Reservation, Room, ScheduleRow, WEEK};
pub use params::{
    BookingRequest, ConflictProbe, CreateRoom, EditBooking, RecommendRequest, RoomRef,
    ScheduleQuery, SeriesRef, UpdateRoom,
};
pub use scheduler::{Scheduler, SchedulerBuilder};
