//! Room model definition.

use serde::{Deserialize, Serialize};

/// A bookable physical room.
///
/// The identity `room_id` is stable and unique; name, capacity, and
/// equipment are mutable through administrative updates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Room {
    /// Unique, stable identifier for the room
    pub room_id: String,

    /// Human-readable name
    pub name: String,

    /// Seats available; always positive
    pub capacity: u32,

    /// Free-form equipment description
    pub equipment: Option<String>,
}
