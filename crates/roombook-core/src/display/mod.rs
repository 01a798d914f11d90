//! Display formatting functions and result types.
//!
//! Domain models implement `Display` for markdown output (in [`models`]);
//! newtype wrappers format collections and operation results with consistent
//! structure and empty-case handling; [`export`] serializes schedule rows to
//! CSV. All human-facing output of the core flows through this module so
//! every interface renders the same text.

pub mod collections;
pub mod datetime;
pub mod export;
pub mod models;
pub mod results;

// Re-export commonly used types for convenience
pub use collections::{Reservations, Rooms, Schedule};
pub use datetime::LocalDateTime;
pub use export::CsvSchedule;
pub use results::{BookingReport, CancelReport, CreateResult, DeleteResult, UpdateResult};
