//! High-level scheduler API for room bookings.
//!
//! This module provides the main [`Scheduler`] interface for the room-booking
//! system. The scheduler coordinates between callers and the database,
//! implementing the series upsert protocol, room recommendation, and
//! schedule reads.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────┐
//! │    Callers      │    │    Scheduler     │    │    Database     │
//! │ (CLI, future    │───▶│ (booking_ops,    │───▶│   (via db/)     │
//! │  interfaces)    │    │  recommend, ...) │    │                 │
//! └─────────────────┘    └──────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Scheduler`] instances
//! - [`booking_ops`]: The series upsert verbs (add, edit, cancel) plus
//!   series reads and the conflict probe
//! - [`recommend`]: Capacity- and availability-based room recommendation
//! - [`room_ops`]: Administrative room catalog operations
//! - [`schedule_ops`]: Range-bounded schedule reads and CSV export
//!
//! Every operation is async and runs its blocking SQLite work on
//! `tokio::task::spawn_blocking` with a connection of its own; results come
//! back as [`crate::Result`] values, with booking rejections expressed as
//! [`crate::models::BookingOutcome`] data rather than errors.

use std::path::PathBuf;

// Module declarations
pub mod booking_ops;
pub mod builder;
pub mod recommend;
pub mod room_ops;
pub mod schedule_ops;

// Re-export the main types
pub use builder::SchedulerBuilder;

/// Main scheduler interface for managing rooms and reservation series.
pub struct Scheduler {
    pub(crate) db_path: PathBuf,
}

impl Scheduler {
    /// Creates a new scheduler with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}
